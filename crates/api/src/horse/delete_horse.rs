use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    cascade::cascade_delete,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_horse::{APIResponse, PathParams};
use herdbook_domain::{cascade::OwnerKind, Horse, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_horse_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteHorseUseCase {
        user_id: user.id,
        horse_id: path.horse_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|horse| HttpResponse::Ok().json(APIResponse::new(horse)))
        .map_err(HerdbookError::from)
}

/// Deletes the horse with its expenses, reminders, budgets and
/// associations. Palmares entries only lose the reference.
#[derive(Debug)]
pub struct DeleteHorseUseCase {
    pub user_id: ID,
    pub horse_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Horse not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteHorseUseCase {
    type Response = Horse;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteHorse";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .horses
            .find(&self.horse_id, &self.user_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::NotFound);
        }

        cascade_delete(OwnerKind::Horse, &self.horse_id, &self.user_id, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        ctx.repos
            .horses
            .delete(&self.horse_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
