use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_upcoming_reminders::{APIResponse, QueryParams};
use herdbook_domain::{
    date::{add_days, format_date},
    Reminder, ID,
};
use herdbook_infra::{DateRange, HerdbookContext, ReminderQuery};

const DEFAULT_DAYS_AHEAD: i64 = 7;
const MAX_DAYS_AHEAD: i64 = 3650;
const MAX_UPCOMING: i64 = 100;

pub async fn get_upcoming_reminders_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetUpcomingRemindersUseCase {
        user_id: user.id,
        days: query.days.unwrap_or(DEFAULT_DAYS_AHEAD),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(HerdbookError::from)
}

/// Incomplete reminders due between today and `days` from now
#[derive(Debug)]
pub struct GetUpcomingRemindersUseCase {
    pub user_id: ID,
    pub days: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidDays(i64),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDays(days) => Self::BadClientData(format!(
                "days must be between 0 and {}, got: {}",
                MAX_DAYS_AHEAD, days
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingReminders";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if !(0..=MAX_DAYS_AHEAD).contains(&self.days) {
            return Err(UseCaseError::InvalidDays(self.days));
        }
        let today = ctx.today();
        let until =
            add_days(&today, self.days).map_err(|_| UseCaseError::InvalidDays(self.days))?;

        ctx.repos
            .reminders
            .find_by(ReminderQuery {
                is_completed: Some(false),
                dates: DateRange::new(Some(format_date(&today)), Some(format_date(&until))),
                limit: Some(MAX_UPCOMING),
                ..ReminderQuery::by_user(self.user_id)
            })
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
