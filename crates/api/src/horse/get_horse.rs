use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_horse::{APIResponse, PathParams};
use herdbook_domain::{Horse, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_horse_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetHorseUseCase {
        user_id: user.id,
        horse_id: path.horse_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|horse| HttpResponse::Ok().json(APIResponse::new(horse)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetHorseUseCase {
    pub user_id: ID,
    pub horse_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Horse not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHorseUseCase {
    type Response = Horse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHorse";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .horses
            .find(&self.horse_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
