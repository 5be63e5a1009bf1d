use chrono::{DateTime, Utc};
use herdbook_domain::{Palmares, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PalmaresDTO {
    pub id: ID,
    pub rider_id: ID,
    pub competition_name: String,
    pub date: String,
    pub place: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub location_link: Option<String>,
    pub discipline: String,
    pub custom_discipline: Option<String>,
    pub position: Option<String>,
    pub horse_id: Option<ID>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub prize: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PalmaresDTO {
    pub fn new(palmares: Palmares) -> Self {
        Self {
            id: palmares.id,
            rider_id: palmares.rider_id,
            competition_name: palmares.competition_name,
            date: palmares.date,
            place: palmares.place,
            city: palmares.city,
            country: palmares.country,
            location_link: palmares.location_link,
            discipline: palmares.discipline,
            custom_discipline: palmares.custom_discipline,
            position: palmares.position,
            horse_id: palmares.horse_id,
            category: palmares.category,
            notes: palmares.notes,
            prize: palmares.prize,
            created_at: palmares.created_at,
            updated_at: palmares.updated_at,
        }
    }
}
