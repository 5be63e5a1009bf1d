use super::verify_security_answer::{find_verified_user, SecurityAnswerError};
use crate::error::HerdbookError;
use crate::shared::{
    auth::hash_password,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::reset_password_with_security::{APIResponse, RequestBody};
use herdbook_infra::HerdbookContext;

pub async fn reset_password_with_security_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let body = body.0;
    let usecase = ResetPasswordWithSecurityUseCase {
        email: body.email,
        security_answer: body.security_answer,
        new_password: body.new_password,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Password reset successfully")))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct ResetPasswordWithSecurityUseCase {
    pub email: String,
    pub security_answer: String,
    pub new_password: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    Verification(SecurityAnswerError),
    EmptyPassword,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Verification(SecurityAnswerError::IncorrectAnswer) => {
                Self::Unauthorized("Incorrect security answer".into())
            }
            UseCaseError::Verification(e) => e.into(),
            UseCaseError::EmptyPassword => {
                Self::BadClientData("Password can not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ResetPasswordWithSecurityUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "ResetPasswordWithSecurity";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut user = find_verified_user(&self.email, &self.security_answer, ctx)
            .await
            .map_err(UseCaseError::Verification)?;
        if self.new_password.is_empty() {
            return Err(UseCaseError::EmptyPassword);
        }

        user.password_hash =
            hash_password(&self.new_password, ctx).map_err(|_| UseCaseError::StorageError)?;
        user.updated_at = ctx.now();
        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
