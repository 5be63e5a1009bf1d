use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_association::{APIResponse, QueryParams};
use herdbook_domain::{HorseRiderAssociation, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_association_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteAssociationUseCase {
        user_id: user.id,
        horse_id: query.horse_id,
        rider_id: query.rider_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|association| HttpResponse::Ok().json(APIResponse::new(association)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct DeleteAssociationUseCase {
    pub user_id: ID,
    pub horse_id: ID,
    pub rider_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Association not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAssociationUseCase {
    type Response = HorseRiderAssociation;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAssociation";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .associations
            .delete(&self.horse_id, &self.rider_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_context_at;

    #[actix_web::test]
    async fn only_owner_can_unlink() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let association = HorseRiderAssociation {
            id: Default::default(),
            user_id,
            horse_id: ID::new(),
            rider_id: ID::new(),
            created_at: ctx.now(),
        };
        ctx.repos.associations.insert(&association).await.unwrap();

        let mut usecase = DeleteAssociationUseCase {
            user_id: ID::new(),
            horse_id: association.horse_id,
            rider_id: association.rider_id,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::NotFound);

        let mut usecase = DeleteAssociationUseCase {
            user_id,
            horse_id: association.horse_id,
            rider_id: association.rider_id,
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx
            .repos
            .associations
            .find(&association.horse_id, &association.rider_id)
            .await
            .is_none());
    }
}
