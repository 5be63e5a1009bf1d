use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Supplier {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub category: Option<String>,
    pub custom_category: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub contact_person: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
