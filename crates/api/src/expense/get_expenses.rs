use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_expenses::{APIResponse, QueryParams};
use herdbook_domain::{EntityType, Expense};
use herdbook_infra::{DateRange, ExpenseQuery, HerdbookContext};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

pub async fn get_expenses_controller(
    http_req: actix_web::HttpRequest,
    entity_type: web::Data<EntityType>,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let entity_type = **entity_type;
    let query = query.0;
    let usecase = GetExpensesUseCase {
        entity_type,
        query: ExpenseQuery {
            entity_id: match entity_type {
                EntityType::Rider => query.rider_id,
                _ => query.horse_id,
            },
            category: query.category,
            supplier_id: query.supplier_id,
            dates: DateRange::new(query.start_date, query.end_date),
            limit: query.limit,
            ..ExpenseQuery::by_user(user.id)
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|expenses| HttpResponse::Ok().json(APIResponse::new(expenses)))
        .map_err(HerdbookError::from)
}

/// Newest expenses first, at most `MAX_LIMIT` of them
#[derive(Debug)]
pub struct GetExpensesUseCase {
    pub entity_type: EntityType,
    pub query: ExpenseQuery,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidLimit(i64),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidLimit(limit) => Self::BadClientData(format!(
                "limit has to be between 1 and {}, got: {}",
                MAX_LIMIT, limit
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExpensesUseCase {
    type Response = Vec<Expense>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetExpenses";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let limit = self.query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(UseCaseError::InvalidLimit(limit));
        }
        let mut query = self.query.clone();
        query.limit = Some(limit);

        ctx.repos
            .expenses(self.entity_type)
            .find_by(query)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
