use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_budget::{APIResponse, PathParams};
use herdbook_domain::{Budget, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_budget_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteBudgetUseCase {
        user_id: user.id,
        budget_id: path.budget_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|budget| HttpResponse::Ok().json(APIResponse::new(budget)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct DeleteBudgetUseCase {
    pub user_id: ID,
    pub budget_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Budget not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteBudgetUseCase {
    type Response = Budget;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteBudget";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .budgets
            .delete(&self.budget_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
