use crate::error::HerdbookError;
use crate::shared::{
    auth::{create_token, verify_password},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::login::{APIResponse, RequestBody};
use herdbook_domain::User;
use herdbook_infra::HerdbookContext;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let body = body.0;
    let usecase = LoginUseCase {
        email: body.email,
        password: body.password,
    };

    let user = execute(usecase, &ctx).await.map_err(HerdbookError::from)?;
    let token = create_token(&user.id, &ctx)?;
    Ok(HttpResponse::Ok().json(APIResponse::new(token, user)))
}

#[derive(Debug)]
pub struct LoginUseCase {
    pub email: String,
    pub password: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidCredentials,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => {
                Self::Unauthorized("Invalid email or password".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let email = User::normalize_email(&self.email);
        match ctx.repos.users.find_by_email(&email).await {
            Some(user) if verify_password(&self.password, &user.password_hash) => Ok(user),
            _ => Err(UseCaseError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_user, setup_context_at};

    #[actix_web::test]
    async fn logs_in_with_valid_credentials() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user = insert_user(&ctx, "lucia@example.com").await;

        let mut usecase = LoginUseCase {
            email: "Lucia@Example.com ".into(),
            password: "caballo123".into(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().id, user.id);
    }

    #[actix_web::test]
    async fn rejects_wrong_password_and_unknown_email() {
        let ctx = setup_context_at(2025, 3, 10).await;
        insert_user(&ctx, "lucia@example.com").await;

        for (email, password) in [
            ("lucia@example.com", "caballo321"),
            ("nobody@example.com", "caballo123"),
        ] {
            let mut usecase = LoginUseCase {
                email: email.into(),
                password: password.into(),
            };
            assert_eq!(
                usecase.execute(&ctx).await.unwrap_err(),
                UseCaseError::InvalidCredentials
            );
        }
    }
}
