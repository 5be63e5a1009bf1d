use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_health::APIResponse> {
        self.base.get("health".into(), StatusCode::OK).await
    }

    pub async fn categories(&self) -> APIResponse<get_categories::APIResponse> {
        self.base.get("categories".into(), StatusCode::OK).await
    }
}
