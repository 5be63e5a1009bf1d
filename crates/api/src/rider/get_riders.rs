use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_riders::APIResponse;
use herdbook_domain::{Rider, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_riders_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetRidersUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|riders| HttpResponse::Ok().json(APIResponse::new(riders)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetRidersUseCase {
    pub user_id: ID,
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
impl UseCase for GetRidersUseCase {
    type Response = Vec<Rider>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRiders";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .riders
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
