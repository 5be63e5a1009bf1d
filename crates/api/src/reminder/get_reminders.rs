use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_reminders::{APIResponse, QueryParams};
use herdbook_domain::Reminder;
use herdbook_infra::{DateRange, HerdbookContext, ReminderQuery};

pub async fn get_reminders_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let query = query.0;
    let usecase = GetRemindersUseCase {
        query: ReminderQuery {
            entity_type: query.entity_type,
            entity_id: query.entity_id,
            is_completed: query.is_completed,
            dates: DateRange::new(query.start_date, query.end_date),
            ..ReminderQuery::by_user(user.id)
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub query: ReminderQuery,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_by(self.query.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

