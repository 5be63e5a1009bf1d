use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_expense::{APIResponse, PathParams};
use herdbook_domain::{EntityType, Expense, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_expense_controller(
    http_req: actix_web::HttpRequest,
    entity_type: web::Data<EntityType>,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteExpenseUseCase {
        user_id: user.id,
        entity_type: **entity_type,
        expense_id: path.expense_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|expense| HttpResponse::Ok().json(APIResponse::new(expense)))
        .map_err(HerdbookError::from)
}

/// Reminders created from the expense are kept
#[derive(Debug)]
pub struct DeleteExpenseUseCase {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub expense_id: ID,
}

#[derive(Debug, PartialEq)]
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
impl UseCase for DeleteExpenseUseCase {
    type Response = Expense;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteExpense";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .expenses(self.entity_type)
            .delete(&self.expense_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_expense, setup_context_at};

    #[actix_web::test]
    async fn horse_and_rider_expenses_are_separate() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let expense = insert_expense(
            &ctx,
            EntityType::Rider,
            &user_id,
            &ID::new(),
            "formacion",
            40.0,
            "2025-03-02",
        )
        .await;

        let mut usecase = DeleteExpenseUseCase {
            user_id,
            entity_type: EntityType::Horse,
            expense_id: expense.id,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::NotFound);

        let mut usecase = DeleteExpenseUseCase {
            user_id,
            entity_type: EntityType::Rider,
            expense_id: expense.id,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().id, expense.id);
    }
}
