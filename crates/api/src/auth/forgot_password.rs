use crate::error::HerdbookError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::forgot_password::{APIResponse, RequestBody};
use herdbook_domain::User;
use herdbook_infra::HerdbookContext;

pub async fn forgot_password_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let usecase = GetSecurityQuestionUseCase {
        email: body.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|(email, security_question)| {
            HttpResponse::Ok().json(APIResponse {
                email,
                security_question,
            })
        })
        .map_err(HerdbookError::from)
}

/// First step of the password recovery: which question has to be answered
#[derive(Debug)]
pub struct GetSecurityQuestionUseCase {
    pub email: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmailNotFound,
    NoSecurityQuestion,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmailNotFound => Self::NotFound("Email not found".into()),
            UseCaseError::NoSecurityQuestion => {
                Self::BadClientData("No security question configured for this account".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSecurityQuestionUseCase {
    type Response = (String, String);

    type Error = UseCaseError;

    const NAME: &'static str = "GetSecurityQuestion";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let email = User::normalize_email(&self.email);
        let user = ctx
            .repos
            .users
            .find_by_email(&email)
            .await
            .ok_or(UseCaseError::EmailNotFound)?;
        match user.security_question {
            Some(question) if !question.is_empty() => Ok((email, question)),
            _ => Err(UseCaseError::NoSecurityQuestion),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_user, setup_context_at};

    #[actix_web::test]
    async fn returns_question_of_user() {
        let ctx = setup_context_at(2025, 3, 10).await;
        insert_user(&ctx, "lucia@example.com").await;

        let mut usecase = GetSecurityQuestionUseCase {
            email: "LUCIA@example.com".into(),
        };
        let (email, question) = usecase.execute(&ctx).await.unwrap();
        assert_eq!(email, "lucia@example.com");
        assert_eq!(question, "¿En qué ciudad naciste?");
    }

    #[actix_web::test]
    async fn rejects_user_without_question() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let mut user = insert_user(&ctx, "lucia@example.com").await;
        user.security_question = None;
        ctx.repos.users.save(&user).await.unwrap();

        let mut usecase = GetSecurityQuestionUseCase {
            email: "lucia@example.com".into(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NoSecurityQuestion
        );
    }
}
