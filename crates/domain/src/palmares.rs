use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

/// A result achieved by a rider at a competition
#[derive(Debug, Clone)]
pub struct Palmares {
    pub id: ID,
    pub user_id: ID,
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
