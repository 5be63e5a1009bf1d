use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_rider::{APIResponse, PathParams};
use herdbook_domain::{Rider, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_rider_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetRiderUseCase {
        user_id: user.id,
        rider_id: path.rider_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|rider| HttpResponse::Ok().json(APIResponse::new(rider)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetRiderUseCase {
    pub user_id: ID,
    pub rider_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Rider not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRiderUseCase {
    type Response = Rider;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRider";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .riders
            .find(&self.rider_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
