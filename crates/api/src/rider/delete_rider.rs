use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    cascade::cascade_delete,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_rider::{APIResponse, PathParams};
use herdbook_domain::{cascade::OwnerKind, Rider, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_rider_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteRiderUseCase {
        user_id: user.id,
        rider_id: path.rider_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|rider| HttpResponse::Ok().json(APIResponse::new(rider)))
        .map_err(HerdbookError::from)
}

/// Deletes the rider with its expenses, reminders, budgets, palmares and
/// associations
#[derive(Debug)]
pub struct DeleteRiderUseCase {
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
impl UseCase for DeleteRiderUseCase {
    type Response = Rider;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteRider";

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

        cascade_delete(OwnerKind::Rider, &self.rider_id, &self.user_id, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        ctx.repos
            .riders
            .delete(&self.rider_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_palmares, insert_rider, setup_context_at};
    use herdbook_infra::PalmaresQuery;

    #[actix_web::test]
    async fn deletes_rider_and_palmares() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let rider = insert_rider(&ctx, &user_id, "Marta").await;
        insert_palmares(&ctx, &user_id, &rider.id, "2025-02-15").await;

        let mut usecase = DeleteRiderUseCase {
            user_id,
            rider_id: rider.id,
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx.repos.riders.find(&rider.id, &user_id).await.is_none());
        let left = ctx
            .repos
            .palmares
            .find_by(PalmaresQuery {
                user_id,
                rider_id: None,
                discipline: None,
                dates: Default::default(),
            })
            .await
            .unwrap();
        assert!(left.is_empty());
    }
}
