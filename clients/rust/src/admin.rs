use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminClient {
    base: Arc<BaseClient>,
}

impl AdminClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check(&self) -> APIResponse<admin_check::APIResponse> {
        self.base.get("admin/check".into(), StatusCode::OK).await
    }

    pub async fn create_backup(&self) -> APIResponse<create_backup::APIResponse> {
        self.base
            .post((), "admin/backup".into(), StatusCode::OK)
            .await
    }

    pub async fn backups(&self) -> APIResponse<get_backups::APIResponse> {
        self.base.get("admin/backups".into(), StatusCode::OK).await
    }

    pub async fn restore(&self, backup_id: &str) -> APIResponse<restore_backup::APIResponse> {
        self.base
            .post((), format!("admin/restore/{}", backup_id), StatusCode::OK)
            .await
    }
}
