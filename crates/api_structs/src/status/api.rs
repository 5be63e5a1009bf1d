use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plain acknowledgement returned by endpoints without a resource to show
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub mod get_service_health {
    use super::*;

    pub type APIResponse = MessageResponse;
}

pub mod get_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        pub database: String,
    }
}

pub mod get_categories {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub horse_categories: Vec<String>,
        pub horse_names: BTreeMap<String, String>,
        pub rider_categories: Vec<String>,
        pub rider_names: BTreeMap<String, String>,
        pub disciplines: Vec<String>,
        pub discipline_names: BTreeMap<String, String>,
    }
}
