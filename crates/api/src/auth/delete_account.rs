use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    cascade::cascade_delete,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_account::APIResponse;
use herdbook_domain::{cascade::OwnerKind, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_account_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteAccountUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Ok().json(APIResponse::new(
                "Account and all data deleted successfully",
            ))
        })
        .map_err(HerdbookError::from)
}

/// Deletes the user together with everything it owns
#[derive(Debug)]
pub struct DeleteAccountUseCase {
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
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
impl UseCase for DeleteAccountUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAccount";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        cascade_delete(OwnerKind::User, &self.user_id, &self.user_id, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos.users.delete(&self.user_id).await;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, insert_user, setup_context_at};

    #[actix_web::test]
    async fn deletes_user_and_owned_data() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user = insert_user(&ctx, "lucia@example.com").await;
        let other = insert_user(&ctx, "pablo@example.com").await;
        insert_horse(&ctx, &user.id, "Tornado").await;
        insert_horse(&ctx, &other.id, "Relámpago").await;

        let mut usecase = DeleteAccountUseCase { user_id: user.id };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx.repos.users.find(&user.id).await.is_none());
        assert!(ctx.repos.horses.find_by_user(&user.id).await.unwrap().is_empty());
        assert_eq!(ctx.repos.horses.find_by_user(&other.id).await.unwrap().len(), 1);
        assert!(ctx.repos.users.find(&other.id).await.is_some());
    }
}
