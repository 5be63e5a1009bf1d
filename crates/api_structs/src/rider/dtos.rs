use chrono::{DateTime, Utc};
use herdbook_domain::{AttachedDocument, ReminderIntervals, Rider, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RiderDTO {
    pub id: ID,
    pub name: String,
    pub photo: Option<String>,
    pub photos: Vec<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub territorial_license: Option<String>,
    pub national_license: Option<String>,
    pub documents: Vec<AttachedDocument>,
    pub reminder_intervals: ReminderIntervals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RiderDTO {
    pub fn new(rider: Rider) -> Self {
        Self {
            id: rider.id,
            name: rider.name,
            photo: rider.photo,
            photos: rider.photos,
            birth_date: rider.birth_date,
            phone: rider.phone,
            email: rider.email,
            notes: rider.notes,
            territorial_license: rider.territorial_license,
            national_license: rider.national_license,
            documents: rider.documents,
            reminder_intervals: rider.reminder_intervals,
            created_at: rider.created_at,
            updated_at: rider.updated_at,
        }
    }
}
