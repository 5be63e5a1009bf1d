use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_budgets::{APIResponse, QueryParams};
use herdbook_domain::Budget;
use herdbook_infra::{BudgetQuery, HerdbookContext};

pub async fn get_budgets_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let query = query.0;
    let usecase = GetBudgetsUseCase {
        query: BudgetQuery {
            user_id: user.id,
            entity_type: query.entity_type,
            entity_id: query.entity_id,
            month: query.month,
            year: query.year,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|budgets| HttpResponse::Ok().json(APIResponse::new(budgets)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetBudgetsUseCase {
    pub query: BudgetQuery,
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
impl UseCase for GetBudgetsUseCase {
    type Response = Vec<Budget>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBudgets";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .budgets
            .find_by(self.query.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
