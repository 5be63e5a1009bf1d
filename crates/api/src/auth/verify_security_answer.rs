use crate::error::HerdbookError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::verify_security_answer::{APIResponse, RequestBody};
use herdbook_domain::User;
use herdbook_infra::HerdbookContext;

pub async fn verify_security_answer_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let body = body.0;
    let usecase = VerifySecurityAnswerUseCase {
        email: body.email,
        security_answer: body.security_answer,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Ok().json(APIResponse {
                verified: true,
                message: "Answer verified successfully".into(),
            })
        })
        .map_err(HerdbookError::from)
}

#[derive(Debug, PartialEq)]
pub enum SecurityAnswerError {
    EmailNotFound,
    IncorrectAnswer,
}

impl From<SecurityAnswerError> for HerdbookError {
    fn from(e: SecurityAnswerError) -> Self {
        match e {
            SecurityAnswerError::EmailNotFound => Self::NotFound("Email not found".into()),
            SecurityAnswerError::IncorrectAnswer => Self::Unauthorized("Incorrect answer".into()),
        }
    }
}

/// The user with the given email, if the answer matches its security answer
pub async fn find_verified_user(
    email: &str,
    answer: &str,
    ctx: &HerdbookContext,
) -> Result<User, SecurityAnswerError> {
    let user = ctx
        .repos
        .users
        .find_by_email(&User::normalize_email(email))
        .await
        .ok_or(SecurityAnswerError::EmailNotFound)?;
    if user.answer_matches(answer) {
        Ok(user)
    } else {
        Err(SecurityAnswerError::IncorrectAnswer)
    }
}

#[derive(Debug)]
pub struct VerifySecurityAnswerUseCase {
    pub email: String,
    pub security_answer: String,
}

#[async_trait::async_trait(?Send)]
impl UseCase for VerifySecurityAnswerUseCase {
    type Response = ();

    type Error = SecurityAnswerError;

    const NAME: &'static str = "VerifySecurityAnswer";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        find_verified_user(&self.email, &self.security_answer, ctx)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_user, setup_context_at};

    #[actix_web::test]
    async fn answer_is_compared_normalized() {
        let ctx = setup_context_at(2025, 3, 10).await;
        insert_user(&ctx, "lucia@example.com").await;

        let mut usecase = VerifySecurityAnswerUseCase {
            email: "lucia@example.com".into(),
            security_answer: " SEVILLA".into(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        usecase.security_answer = "Cádiz".into();
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            SecurityAnswerError::IncorrectAnswer
        );

        usecase.email = "nobody@example.com".into();
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            SecurityAnswerError::EmailNotFound
        );
    }
}
