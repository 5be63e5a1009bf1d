use crate::{entity_type::EntityType, shared::entity::ID};
use chrono::{DateTime, Utc};

/// A cost booked on a horse or a rider. Horse and rider expenses live in
/// separate collections and only differ by `entity_type`.
#[derive(Debug, Clone)]
pub struct Expense {
    pub id: ID,
    pub user_id: ID,
    pub entity_type: EntityType,
    /// The horse or rider the expense is booked on
    pub entity_id: ID,
    pub category: String,
    pub custom_category: Option<String>,
    pub amount: f64,
    /// Free form, expected to be `YYYY-MM-DD`
    pub date: String,
    pub description: Option<String>,
    pub provider: Option<String>,
    pub supplier_id: Option<ID>,
    pub invoice_photo: Option<String>,
    pub invoice_photos: Vec<String>,
    pub is_recurring: bool,
    pub create_reminder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
