use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::set_horse_reminder_intervals::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{
    categories::{validate_intervals, ReminderIntervals},
    Horse, ID,
};
use herdbook_infra::HerdbookContext;

pub async fn set_horse_reminder_intervals_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = SetHorseReminderIntervalsUseCase {
        user_id: user.id,
        horse_id: path.horse_id,
        reminder_intervals: body.0.reminder_intervals,
    };

    execute(usecase, &ctx)
        .await
        .map(|horse| HttpResponse::Ok().json(APIResponse::new(horse)))
        .map_err(HerdbookError::from)
}

/// Replaces the per category interval overrides of the horse
#[derive(Debug)]
pub struct SetHorseReminderIntervalsUseCase {
    pub user_id: ID,
    pub horse_id: ID,
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
            UseCaseError::NotFound => Self::NotFound("Horse not found".into()),
            UseCaseError::InvalidIntervals(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetHorseReminderIntervalsUseCase {
    type Response = Horse;

    type Error = UseCaseError;

    const NAME: &'static str = "SetHorseReminderIntervals";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        validate_intervals(&self.reminder_intervals).map_err(UseCaseError::InvalidIntervals)?;

        let mut horse = ctx
            .repos
            .horses
            .find(&self.horse_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        horse.reminder_intervals = std::mem::take(&mut self.reminder_intervals);
        horse.updated_at = ctx.now();

        ctx.repos
            .horses
            .save(&horse)
            .await
            .map(|_| horse)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, setup_context_at};

    #[actix_web::test]
    async fn replaces_intervals() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;

        let mut usecase = SetHorseReminderIntervalsUseCase {
            user_id,
            horse_id: horse.id,
            reminder_intervals: [("herrador".to_string(), 35)].into_iter().collect(),
        };
        usecase.execute(&ctx).await.unwrap();

        let stored = ctx.repos.horses.find(&horse.id, &user_id).await.unwrap();
        assert_eq!(stored.reminder_intervals.get("herrador"), Some(&35));
    }

    #[actix_web::test]
    async fn rejects_zero_days() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;

        let mut usecase = SetHorseReminderIntervalsUseCase {
            user_id,
            horse_id: horse.id,
            reminder_intervals: [("veterinario".to_string(), 0)].into_iter().collect(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidIntervals(_))
        ));
    }

    #[actix_web::test]
    async fn rejects_intervals_past_the_calendar() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;

        let mut usecase = SetHorseReminderIntervalsUseCase {
            user_id,
            horse_id: horse.id,
            reminder_intervals: [("herrador".to_string(), 9_000_000_000_000)]
                .into_iter()
                .collect(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidIntervals(_))
        ));
        let stored = ctx.repos.horses.find(&horse.id, &user_id).await.unwrap();
        assert!(stored.reminder_intervals.is_empty());
    }
}
