use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

pub const DEFAULT_COUNTRY: &str = "España";

#[derive(Debug, Clone)]
pub struct Competition {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    /// Free form, expected to be `YYYY-MM-DD`
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
