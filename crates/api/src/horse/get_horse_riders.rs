use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_horse_riders::{APIResponse, PathParams};
use herdbook_domain::{Rider, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_horse_riders_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetHorseRidersUseCase {
        user_id: user.id,
        horse_id: path.horse_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|riders| HttpResponse::Ok().json(APIResponse::new(riders)))
        .map_err(HerdbookError::from)
}

/// Riders associated with the horse
#[derive(Debug)]
pub struct GetHorseRidersUseCase {
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
impl UseCase for GetHorseRidersUseCase {
    type Response = Vec<Rider>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHorseRiders";

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

        let rider_ids = ctx
            .repos
            .associations
            .find_by_horse(&self.horse_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|a| a.rider_id)
            .collect::<Vec<_>>();
        if rider_ids.is_empty() {
            return Ok(Vec::new());
        }

        ctx.repos
            .riders
            .find_many(&rider_ids, &self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, insert_rider, setup_context_at};
    use herdbook_domain::HorseRiderAssociation;

    #[actix_web::test]
    async fn lists_associated_riders() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let marta = insert_rider(&ctx, &user_id, "Marta").await;
        insert_rider(&ctx, &user_id, "Jorge").await;
        ctx.repos
            .associations
            .insert(&HorseRiderAssociation {
                id: Default::default(),
                user_id,
                horse_id: horse.id,
                rider_id: marta.id,
                created_at: ctx.now(),
            })
            .await
            .unwrap();

        let mut usecase = GetHorseRidersUseCase {
            user_id,
            horse_id: horse.id,
        };
        let riders = usecase.execute(&ctx).await.unwrap();
        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].name, "Marta");
    }
}
