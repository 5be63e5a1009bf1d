use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::set_rider_reminder_intervals::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{
    categories::{validate_intervals, ReminderIntervals},
    Rider, ID,
};
use herdbook_infra::HerdbookContext;

pub async fn set_rider_reminder_intervals_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = SetRiderReminderIntervalsUseCase {
        user_id: user.id,
        rider_id: path.rider_id,
        reminder_intervals: body.0.reminder_intervals,
    };

    execute(usecase, &ctx)
        .await
        .map(|rider| HttpResponse::Ok().json(APIResponse::new(rider)))
        .map_err(HerdbookError::from)
}

/// Replaces the per category interval overrides of the rider
#[derive(Debug)]
pub struct SetRiderReminderIntervalsUseCase {
    pub user_id: ID,
    pub rider_id: ID,
    pub reminder_intervals: ReminderIntervals,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    InvalidIntervals(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Rider not found".into()),
            UseCaseError::InvalidIntervals(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetRiderReminderIntervalsUseCase {
    type Response = Rider;

    type Error = UseCaseError;

    const NAME: &'static str = "SetRiderReminderIntervals";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        validate_intervals(&self.reminder_intervals).map_err(UseCaseError::InvalidIntervals)?;

        let mut rider = ctx
            .repos
            .riders
            .find(&self.rider_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        rider.reminder_intervals = std::mem::take(&mut self.reminder_intervals);
        rider.updated_at = ctx.now();

        ctx.repos
            .riders
            .save(&rider)
            .await
            .map(|_| rider)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_rider, setup_context_at};

    #[actix_web::test]
    async fn replaces_intervals() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let rider = insert_rider(&ctx, &user_id, "Marta").await;

        let mut usecase = SetRiderReminderIntervalsUseCase {
            user_id,
            rider_id: rider.id,
            reminder_intervals: [("licencias".to_string(), 35)].into_iter().collect(),
        };
        usecase.execute(&ctx).await.unwrap();

        let stored = ctx.repos.riders.find(&rider.id, &user_id).await.unwrap();
        assert_eq!(stored.reminder_intervals.get("licencias"), Some(&35));
    }

    #[actix_web::test]
    async fn rejects_zero_days() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let rider = insert_rider(&ctx, &user_id, "Marta").await;

        let mut usecase = SetRiderReminderIntervalsUseCase {
            user_id,
            rider_id: rider.id,
            reminder_intervals: [("seguros".to_string(), 0)].into_iter().collect(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidIntervals(_))
        ));
    }
}
