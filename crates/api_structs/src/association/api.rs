use crate::dtos::AssociationDTO;
use herdbook_domain::{HorseRiderAssociation, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct AssociationResponse {
    pub association: AssociationDTO,
}

impl AssociationResponse {
    pub fn new(association: HorseRiderAssociation) -> Self {
        Self {
            association: AssociationDTO::new(association),
        }
    }
}

pub mod create_association {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub horse_id: ID,
        pub rider_id: ID,
    }

    pub type APIResponse = AssociationResponse;
}

pub mod delete_association {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub horse_id: ID,
        pub rider_id: ID,
    }

    pub type APIResponse = AssociationResponse;
}
