use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_rider_palmares::{APIResponse, PathParams};
use herdbook_domain::{Palmares, ID};
use herdbook_infra::{HerdbookContext, PalmaresQuery};

pub async fn get_rider_palmares_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetRiderPalmaresUseCase {
        user_id: user.id,
        rider_id: path.rider_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|palmares| HttpResponse::Ok().json(APIResponse::new(palmares)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetRiderPalmaresUseCase {
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
impl UseCase for GetRiderPalmaresUseCase {
    type Response = Vec<Palmares>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRiderPalmares";

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

        ctx.repos
            .palmares
            .find_by(PalmaresQuery {
                user_id: self.user_id,
                rider_id: Some(self.rider_id),
                discipline: None,
                dates: Default::default(),
            })
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
