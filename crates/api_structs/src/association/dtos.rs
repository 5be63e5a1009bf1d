use chrono::{DateTime, Utc};
use herdbook_domain::{HorseRiderAssociation, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssociationDTO {
    pub id: ID,
    pub horse_id: ID,
    pub rider_id: ID,
    pub created_at: DateTime<Utc>,
}

impl AssociationDTO {
    pub fn new(association: HorseRiderAssociation) -> Self {
        Self {
            id: association.id,
            horse_id: association.horse_id,
            rider_id: association.rider_id,
            created_at: association.created_at,
        }
    }
}
