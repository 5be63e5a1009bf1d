use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use herdbook_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        body: create_reminder::RequestBody,
    ) -> APIResponse<create_reminder::APIResponse> {
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn upcoming(&self, days: i64) -> APIResponse<get_upcoming_reminders::APIResponse> {
        self.base
            .get(format!("reminders/upcoming?days={}", days), StatusCode::OK)
            .await
    }

    pub async fn complete(
        &self,
        reminder_id: ID,
        reschedule: bool,
    ) -> APIResponse<complete_reminder::APIResponse> {
        self.base
            .post(
                (),
                format!(
                    "reminders/{}/complete?reschedule={}",
                    reminder_id, reschedule
                ),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
