use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

/// Links a horse with a rider of the same user
#[derive(Debug, Clone)]
pub struct HorseRiderAssociation {
    pub id: ID,
    pub user_id: ID,
    pub horse_id: ID,
    pub rider_id: ID,
    pub created_at: DateTime<Utc>,
}
