use chrono::{DateTime, Utc};
use herdbook_domain::{AttachedDocument, Horse, ReminderIntervals, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HorseDTO {
    pub id: ID,
    pub name: String,
    pub breed: Option<String>,
    pub birth_date: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
    pub photo: Option<String>,
    pub photos: Vec<String>,
    pub stabling_location: Option<String>,
    pub territorial_license: Option<String>,
    pub national_license: Option<String>,
    pub owner: Option<String>,
    pub documents: Vec<AttachedDocument>,
    pub reminder_intervals: ReminderIntervals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HorseDTO {
    pub fn new(horse: Horse) -> Self {
        Self {
            id: horse.id,
            name: horse.name,
            breed: horse.breed,
            birth_date: horse.birth_date,
            color: horse.color,
            notes: horse.notes,
            photo: horse.photo,
            photos: horse.photos,
            stabling_location: horse.stabling_location,
            territorial_license: horse.territorial_license,
            national_license: horse.national_license,
            owner: horse.owner,
            documents: horse.documents,
            reminder_intervals: horse.reminder_intervals,
            created_at: horse.created_at,
            updated_at: horse.updated_at,
        }
    }
}
