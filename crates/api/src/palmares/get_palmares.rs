use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_palmares::{APIResponse, PathParams};
use herdbook_domain::{Palmares, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_palmares_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetPalmaresUseCase {
        user_id: user.id,
        palmares_id: path.palmares_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|palmares| HttpResponse::Ok().json(APIResponse::new(palmares)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetPalmaresUseCase {
    pub user_id: ID,
    pub palmares_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Palmares not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPalmaresUseCase {
    type Response = Palmares;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPalmares";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .palmares
            .find(&self.palmares_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
