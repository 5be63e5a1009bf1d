use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::Datelike;
use herdbook_api_structs::dtos::BudgetStatusDTO;
use herdbook_api_structs::get_budget_status::{APIResponse, QueryParams};
use herdbook_domain::{compute_budget_status, BudgetStatus, EntityType, ID};
use herdbook_infra::{BudgetQuery, DateRange, ExpenseQuery, HerdbookContext};

const MAX_EXPENSES: i64 = 10000;

pub async fn get_budget_status_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetBudgetStatusUseCase {
        user_id: user.id,
        entity_type: query.entity_type.unwrap_or_default(),
        month: query.month,
        year: query.year,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                month: res.month,
                year: res.year,
                entity_type: res.entity_type,
                status: res.status.into_iter().map(BudgetStatusDTO::new).collect(),
                total_budgeted: res.total_budgeted,
                total_actual: res.total_actual,
            })
        })
        .map_err(HerdbookError::from)
}

/// Spending against every budget of one month. Defaults to the current
/// month in the configured timezone.
#[derive(Debug)]
pub struct GetBudgetStatusUseCase {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub month: u32,
    pub year: i32,
    pub entity_type: EntityType,
    pub status: Vec<BudgetStatus>,
    pub total_budgeted: f64,
    pub total_actual: f64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidMonth(u32),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidMonth(month) => {
                Self::BadClientData(format!("Invalid month: {}", month))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBudgetStatusUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBudgetStatus";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.today();
        let month = self.month.unwrap_or_else(|| today.month());
        let year = self.year.unwrap_or_else(|| today.year());
        let dates = DateRange::month(year, month).ok_or(UseCaseError::InvalidMonth(month))?;

        let budgets = ctx
            .repos
            .budgets
            .find_by(BudgetQuery {
                user_id: self.user_id,
                entity_type: Some(self.entity_type),
                entity_id: None,
                month: Some(month),
                year: Some(year),
            })
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let expenses = ctx
            .repos
            .expenses(self.entity_type)
            .find_by(ExpenseQuery {
                dates,
                limit: Some(MAX_EXPENSES),
                ..ExpenseQuery::by_user(self.user_id)
            })
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let total_budgeted = budgets.iter().map(|b| b.amount).sum();
        let status = compute_budget_status(budgets, &expenses);
        let total_actual = status.iter().map(|s| s.actual).sum();

        Ok(UseCaseResponse {
            month,
            year,
            entity_type: self.entity_type,
            status,
            total_budgeted,
            total_actual,
        })
    }
}
