use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_competition::{APIResponse, PathParams};
use herdbook_domain::{Competition, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_competition_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetCompetitionUseCase {
        user_id: user.id,
        competition_id: path.competition_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|competition| HttpResponse::Ok().json(APIResponse::new(competition)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetCompetitionUseCase {
    pub user_id: ID,
    pub competition_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Competition not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompetitionUseCase {
    type Response = Competition;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompetition";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .competitions
            .find(&self.competition_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
