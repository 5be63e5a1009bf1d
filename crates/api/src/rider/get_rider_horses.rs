use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_rider_horses::{APIResponse, PathParams};
use herdbook_domain::{Horse, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_rider_horses_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetRiderHorsesUseCase {
        user_id: user.id,
        rider_id: path.rider_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|horses| HttpResponse::Ok().json(APIResponse::new(horses)))
        .map_err(HerdbookError::from)
}

/// Horses associated with the rider
#[derive(Debug)]
pub struct GetRiderHorsesUseCase {
    pub user_id: ID,
    pub rider_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Rider not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRiderHorsesUseCase {
    type Response = Vec<Horse>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRiderHorses";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .riders
            .find(&self.rider_id, &self.user_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::NotFound);
        }

        let horse_ids = ctx
            .repos
            .associations
            .find_by_rider(&self.rider_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|a| a.horse_id)
            .collect::<Vec<_>>();
        if horse_ids.is_empty() {
            return Ok(Vec::new());
        }

        ctx.repos
            .horses
            .find_many(&horse_ids, &self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
