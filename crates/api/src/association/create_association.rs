use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_association::{APIResponse, RequestBody};
use herdbook_domain::{HorseRiderAssociation, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_association_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateAssociationUseCase {
        user_id: user.id,
        horse_id: body.horse_id,
        rider_id: body.rider_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|association| HttpResponse::Created().json(APIResponse::new(association)))
        .map_err(HerdbookError::from)
}

/// Links a horse and a rider, both owned by the user
#[derive(Debug)]
pub struct CreateAssociationUseCase {
    pub user_id: ID,
    pub horse_id: ID,
    pub rider_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    HorseNotFound,
    RiderNotFound,
    AlreadyExists,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::HorseNotFound => Self::NotFound("Horse not found".into()),
            UseCaseError::RiderNotFound => Self::NotFound("Rider not found".into()),
            UseCaseError::AlreadyExists => Self::Conflict("Association already exists".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAssociationUseCase {
    type Response = HorseRiderAssociation;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAssociation";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .horses
            .find(&self.horse_id, &self.user_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::HorseNotFound);
        }
        if ctx
            .repos
            .riders
            .find(&self.rider_id, &self.user_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::RiderNotFound);
        }
        if ctx
            .repos
            .associations
            .find(&self.horse_id, &self.rider_id)
            .await
            .is_some()
        {
            return Err(UseCaseError::AlreadyExists);
        }

        let association = HorseRiderAssociation {
            id: Default::default(),
            user_id: self.user_id,
            horse_id: self.horse_id,
            rider_id: self.rider_id,
            created_at: ctx.now(),
        };

        ctx.repos
            .associations
            .insert(&association)
            .await
            .map(|_| association)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, insert_rider, setup_context_at};

    #[actix_web::test]
    async fn links_horse_and_rider_once() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let rider = insert_rider(&ctx, &user_id, "Marta").await;

        let mut usecase = CreateAssociationUseCase {
            user_id,
            horse_id: horse.id,
            rider_id: rider.id,
        };
        let association = usecase.execute(&ctx).await.unwrap();
        assert_eq!(association.horse_id, horse.id);
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::AlreadyExists
        );
    }

    #[actix_web::test]
    async fn both_sides_have_to_belong_to_user() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let foreign_rider = insert_rider(&ctx, &ID::new(), "Jorge").await;

        let mut usecase = CreateAssociationUseCase {
            user_id,
            horse_id: horse.id,
            rider_id: foreign_rider.id,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::RiderNotFound
        );

        let mut usecase = CreateAssociationUseCase {
            user_id,
            horse_id: ID::new(),
            rider_id: foreign_rider.id,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::HorseNotFound
        );
    }
}
