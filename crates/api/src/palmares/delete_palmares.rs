use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_palmares::{APIResponse, PathParams};
use herdbook_domain::{Palmares, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_palmares_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeletePalmaresUseCase {
        user_id: user.id,
        palmares_id: path.palmares_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|palmares| HttpResponse::Ok().json(APIResponse::new(palmares)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct DeletePalmaresUseCase {
    pub user_id: ID,
    pub palmares_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Palmares not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeletePalmaresUseCase {
    type Response = Palmares;

    type Error = UseCaseError;

    const NAME: &'static str = "DeletePalmares";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .palmares
            .delete(&self.palmares_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_palmares, setup_context_at};

    #[actix_web::test]
    async fn deletes_only_own_palmares() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let palmares = insert_palmares(&ctx, &user_id, &ID::new(), "2025-02-16").await;

        let mut usecase = DeletePalmaresUseCase {
            user_id: ID::new(),
            palmares_id: palmares.id,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound)
        ));

        let mut usecase = DeletePalmaresUseCase {
            user_id,
            palmares_id: palmares.id,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().id, palmares.id);
        assert!(ctx.repos.palmares.find(&palmares.id, &user_id).await.is_none());
    }
}
