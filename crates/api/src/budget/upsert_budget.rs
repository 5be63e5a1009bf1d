use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::upsert_budget::{APIResponse, RequestBody};
use herdbook_domain::{Budget, EntityType, ID};
use herdbook_infra::{BudgetKey, HerdbookContext};

pub async fn upsert_budget_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpsertBudgetUseCase {
        key: BudgetKey {
            user_id: user.id,
            entity_type: body.entity_type,
            entity_id: body.entity_id,
            category: body.category,
            month: body.month,
            year: body.year,
        },
        amount: body.amount,
    };

    execute(usecase, &ctx)
        .await
        .map(|budget| HttpResponse::Ok().json(APIResponse::new(budget)))
        .map_err(HerdbookError::from)
}

/// Creates the budget, or replaces the amount of the one with the same
/// entity, category and month
#[derive(Debug)]
pub struct UpsertBudgetUseCase {
    pub key: BudgetKey,
    pub amount: f64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEntityType(EntityType),
    InvalidMonth(u32),
    InvalidAmount(f64),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEntityType(entity_type) => Self::BadClientData(format!(
                "Budgets can only be set for horses or riders, got: {}",
                entity_type
            )),
            UseCaseError::InvalidMonth(month) => {
                Self::BadClientData(format!("Invalid month: {}", month))
            }
            UseCaseError::InvalidAmount(amount) => {
                Self::BadClientData(format!("Amount can not be negative, got: {}", amount))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpsertBudgetUseCase {
    type Response = Budget;

    type Error = UseCaseError;

    const NAME: &'static str = "UpsertBudget";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if self.key.entity_type == EntityType::Competition {
            return Err(UseCaseError::InvalidEntityType(self.key.entity_type));
        }
        if !(1..=12).contains(&self.key.month) {
            return Err(UseCaseError::InvalidMonth(self.key.month));
        }
        if self.amount < 0.0 {
            return Err(UseCaseError::InvalidAmount(self.amount));
        }

        let now = ctx.now();
        match ctx.repos.budgets.find_by_key(&self.key).await {
            Some(mut budget) => {
                budget.amount = self.amount;
                budget.updated_at = now;
                ctx.repos
                    .budgets
                    .save(&budget)
                    .await
                    .map(|_| budget)
                    .map_err(|_| UseCaseError::StorageError)
            }
            None => {
                let key = self.key.clone();
                let budget = Budget {
                    id: Default::default(),
                    user_id: key.user_id,
                    entity_type: key.entity_type,
                    entity_id: key.entity_id,
                    category: key.category,
                    month: key.month,
                    year: key.year,
                    amount: self.amount,
                    created_at: now,
                    updated_at: now,
                };
                ctx.repos
                    .budgets
                    .insert(&budget)
                    .await
                    .map(|_| budget)
                    .map_err(|_| UseCaseError::StorageError)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_context_at;
    use herdbook_infra::BudgetQuery;

    fn key(user_id: ID, month: u32) -> BudgetKey {
        BudgetKey {
            user_id,
            entity_type: EntityType::Horse,
            entity_id: None,
            category: Some("herrador".into()),
            month,
            year: 2025,
        }
    }

    #[actix_web::test]
    async fn replaces_budget_with_same_key() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();

        for amount in [100.0, 150.0] {
            let mut usecase = UpsertBudgetUseCase {
                key: key(user_id, 3),
                amount,
            };
            usecase.execute(&ctx).await.unwrap();
        }

        let budgets = ctx
            .repos
            .budgets
            .find_by(BudgetQuery {
                user_id,
                entity_type: None,
                entity_id: None,
                month: None,
                year: None,
            })
            .await
            .unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, 150.0);
    }

    #[actix_web::test]
    async fn rejects_invalid_budgets() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let mut usecase = UpsertBudgetUseCase {
            key: key(ID::new(), 13),
            amount: 100.0,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidMonth(13)
        );

        let mut usecase = UpsertBudgetUseCase {
            key: key(ID::new(), 3),
            amount: -1.0,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidAmount(-1.0)
        );
    }
}
