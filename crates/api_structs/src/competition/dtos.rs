use chrono::{DateTime, Utc};
use herdbook_domain::{Competition, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompetitionDTO {
    pub id: ID,
    pub name: String,
    pub date: String,
    pub end_date: Option<String>,
    pub place: String,
    pub city: String,
    pub country: Option<String>,
    pub location_link: Option<String>,
    pub discipline: String,
    pub custom_discipline: Option<String>,
    pub level: Option<String>,
    pub organizer: Option<String>,
    pub entry_deadline: Option<String>,
    pub entry_fee: Option<f64>,
    pub notes: Option<String>,
    pub website: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub accommodation_info: Option<String>,
    pub participating_horses: Vec<ID>,
    pub participating_riders: Vec<ID>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompetitionDTO {
    pub fn new(competition: Competition) -> Self {
        Self {
            id: competition.id,
            name: competition.name,
            date: competition.date,
            end_date: competition.end_date,
            place: competition.place,
            city: competition.city,
            country: competition.country,
            location_link: competition.location_link,
            discipline: competition.discipline,
            custom_discipline: competition.custom_discipline,
            level: competition.level,
            organizer: competition.organizer,
            entry_deadline: competition.entry_deadline,
            entry_fee: competition.entry_fee,
            notes: competition.notes,
            website: competition.website,
            contact_phone: competition.contact_phone,
            contact_email: competition.contact_email,
            accommodation_info: competition.accommodation_info,
            participating_horses: competition.participating_horses,
            participating_riders: competition.participating_riders,
            created_at: competition.created_at,
            updated_at: competition.updated_at,
        }
    }
}
