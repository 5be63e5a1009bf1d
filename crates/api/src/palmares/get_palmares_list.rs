use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_palmares_list::{APIResponse, QueryParams};
use herdbook_domain::Palmares;
use herdbook_infra::{DateRange, HerdbookContext, PalmaresQuery};

pub async fn get_palmares_list_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let query = query.0;
    let usecase = GetPalmaresListUseCase {
        query: PalmaresQuery {
            user_id: user.id,
            rider_id: query.rider_id,
            discipline: query.discipline,
            dates: DateRange::new(query.start_date, query.end_date),
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|palmares| HttpResponse::Ok().json(APIResponse::new(palmares)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetPalmaresListUseCase {
    pub query: PalmaresQuery,
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
impl UseCase for GetPalmaresListUseCase {
    type Response = Vec<Palmares>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPalmaresList";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .palmares
            .find_by(self.query.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
