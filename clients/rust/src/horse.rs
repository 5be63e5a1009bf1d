use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use herdbook_domain::{ReminderIntervals, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct HorseClient {
    base: Arc<BaseClient>,
}

pub struct CreateHorseInput {
    pub name: String,
    pub breed: Option<String>,
    pub reminder_intervals: Option<ReminderIntervals>,
}

impl HorseClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateHorseInput) -> APIResponse<create_horse::APIResponse> {
        let body = create_horse::RequestBody {
            name: input.name,
            breed: input.breed,
            reminder_intervals: input.reminder_intervals,
            ..Default::default()
        };
        self.base
            .post(body, "horses".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_horses::APIResponse> {
        self.base.get("horses".into(), StatusCode::OK).await
    }

    pub async fn get(&self, horse_id: ID) -> APIResponse<get_horse::APIResponse> {
        self.base
            .get(format!("horses/{}", horse_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, horse_id: ID) -> APIResponse<delete_horse::APIResponse> {
        self.base
            .delete(format!("horses/{}", horse_id), StatusCode::OK)
            .await
    }

    pub async fn riders(&self, horse_id: ID) -> APIResponse<get_horse_riders::APIResponse> {
        self.base
            .get(format!("horses/{}/riders", horse_id), StatusCode::OK)
            .await
    }

    pub async fn associate_rider(
        &self,
        horse_id: ID,
        rider_id: ID,
    ) -> APIResponse<create_association::APIResponse> {
        let body = create_association::RequestBody { horse_id, rider_id };
        self.base
            .post(body, "associations".into(), StatusCode::CREATED)
            .await
    }
}
