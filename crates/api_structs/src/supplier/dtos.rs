use chrono::{DateTime, Utc};
use herdbook_domain::{Supplier, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupplierDTO {
    pub id: ID,
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

impl SupplierDTO {
    pub fn new(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            category: supplier.category,
            custom_category: supplier.custom_category,
            phone: supplier.phone,
            email: supplier.email,
            address: supplier.address,
            city: supplier.city,
            notes: supplier.notes,
            contact_person: supplier.contact_person,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}
