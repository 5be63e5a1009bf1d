use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use herdbook_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct RiderClient {
    base: Arc<BaseClient>,
}

impl RiderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, name: &str) -> APIResponse<create_rider::APIResponse> {
        let body = create_rider::RequestBody {
            name: name.into(),
            ..Default::default()
        };
        self.base
            .post(body, "riders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, rider_id: ID) -> APIResponse<get_rider::APIResponse> {
        self.base
            .get(format!("riders/{}", rider_id), StatusCode::OK)
            .await
    }

    pub async fn horses(&self, rider_id: ID) -> APIResponse<get_rider_horses::APIResponse> {
        self.base
            .get(format!("riders/{}/horses", rider_id), StatusCode::OK)
            .await
    }
}
