use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_expense::{APIResponse, PathParams};
use herdbook_domain::{EntityType, Expense, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_expense_controller(
    http_req: actix_web::HttpRequest,
    entity_type: web::Data<EntityType>,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetExpenseUseCase {
        user_id: user.id,
        entity_type: **entity_type,
        expense_id: path.expense_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|expense| HttpResponse::Ok().json(APIResponse::new(expense)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetExpenseUseCase {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub expense_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Expense not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExpenseUseCase {
    type Response = Expense;

    type Error = UseCaseError;

    const NAME: &'static str = "GetExpense";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .expenses(self.entity_type)
            .find(&self.expense_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
