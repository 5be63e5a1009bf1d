use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_horses::APIResponse;
use herdbook_domain::{Horse, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_horses_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetHorsesUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|horses| HttpResponse::Ok().json(APIResponse::new(horses)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetHorsesUseCase {
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
impl UseCase for GetHorsesUseCase {
    type Response = Vec<Horse>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHorses";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .horses
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
