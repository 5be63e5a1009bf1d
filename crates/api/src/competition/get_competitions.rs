use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_competitions::{APIResponse, QueryParams};
use herdbook_domain::{Competition, ID};
use herdbook_infra::{CompetitionQuery, DateRange, HerdbookContext};

pub async fn get_competitions_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetCompetitionsUseCase {
        user_id: user.id,
        query: query.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|competitions| HttpResponse::Ok().json(APIResponse::new(competitions)))
        .map_err(HerdbookError::from)
}

/// `upcoming` takes precedence over the explicit date range
#[derive(Debug)]
pub struct GetCompetitionsUseCase {
    pub user_id: ID,
    pub query: QueryParams,
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
impl UseCase for GetCompetitionsUseCase {
    type Response = Vec<Competition>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompetitions";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let query = std::mem::take(&mut self.query);
        let dates = if query.upcoming.unwrap_or(false) {
            DateRange::starting(ctx.today().to_string())
        } else {
            DateRange::new(query.start_date, query.end_date)
        };

        ctx.repos
            .competitions
            .find_by(CompetitionQuery {
                user_id: self.user_id,
                discipline: query.discipline,
                dates,
            })
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
