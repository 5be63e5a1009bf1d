use chrono::{DateTime, Utc};
use herdbook_domain::{EntityType, Expense, ID};
use serde::{Deserialize, Serialize};

/// Horse expenses carry `horse_id`, rider expenses `rider_id`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExpenseDTO {
    pub id: ID,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horse_id: Option<ID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rider_id: Option<ID>,
    pub category: String,
    pub custom_category: Option<String>,
    pub amount: f64,
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

impl ExpenseDTO {
    pub fn new(expense: Expense) -> Self {
        let (horse_id, rider_id) = match expense.entity_type {
            EntityType::Rider => (None, Some(expense.entity_id)),
            _ => (Some(expense.entity_id), None),
        };
        Self {
            id: expense.id,
            horse_id,
            rider_id,
            category: expense.category,
            custom_category: expense.custom_category,
            amount: expense.amount,
            date: expense.date,
            description: expense.description,
            provider: expense.provider,
            supplier_id: expense.supplier_id,
            invoice_photo: expense.invoice_photo,
            invoice_photos: expense.invoice_photos,
            is_recurring: expense.is_recurring,
            create_reminder: expense.create_reminder,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}
