use crate::error::HerdbookError;
use crate::shared::{
    auth::{create_token, hash_password},
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::register::{APIResponse, RequestBody};
use herdbook_domain::{Language, User};
use herdbook_infra::HerdbookContext;

pub async fn register_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let body = body.0;
    let usecase = RegisterUseCase {
        email: body.email,
        password: body.password,
        name: body.name,
        language: body.language,
        security_question: body.security_question,
        security_answer: body.security_answer,
    };

    let user = execute(usecase, &ctx).await.map_err(HerdbookError::from)?;
    let token = create_token(&user.id, &ctx)?;
    Ok(HttpResponse::Ok().json(APIResponse::new(token, user)))
}

#[derive(Debug)]
pub struct RegisterUseCase {
    pub email: String,
    pub password: String,
    pub name: String,
    pub language: Language,
    pub security_question: Option<String>,
    pub security_answer: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmailTaken,
    InvalidData(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmailTaken => Self::BadClientData("Email already registered".into()),
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "Register";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let email = User::normalize_email(&self.email);
        if !email.contains('@') {
            return Err(UseCaseError::InvalidData(format!(
                "Invalid email given: {}",
                self.email
            )));
        }
        if self.password.is_empty() {
            return Err(UseCaseError::InvalidData("Password can not be empty".into()));
        }
        if self.security_question.is_some() && self.security_answer.is_none() {
            return Err(UseCaseError::InvalidData(
                "A security question needs an answer".into(),
            ));
        }
        if ctx.repos.users.find_by_email(&email).await.is_some() {
            return Err(UseCaseError::EmailTaken);
        }

        let password_hash =
            hash_password(&self.password, ctx).map_err(|_| UseCaseError::StorageError)?;
        let now = ctx.now();
        let user = User {
            id: Default::default(),
            email,
            password_hash,
            name: self.name.clone(),
            language: self.language,
            security_question: self.security_question.clone(),
            security_answer: self
                .security_answer
                .as_deref()
                .map(User::normalize_answer),
            is_admin: false,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .users
            .insert(&user)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::{auth::verify_password, test_utils::setup_context_at};

    fn usecase(email: &str) -> RegisterUseCase {
        RegisterUseCase {
            email: email.into(),
            password: "caballo123".into(),
            name: "Lucía".into(),
            language: Language::En,
            security_question: Some("¿En qué ciudad naciste?".into()),
            security_answer: Some("  Sevilla ".into()),
        }
    }

    #[actix_web::test]
    async fn registers_user_with_normalized_fields() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let user = usecase(" Lucia@Example.com").execute(&ctx).await.unwrap();
        assert_eq!(user.email, "lucia@example.com");
        assert_eq!(user.security_answer.as_deref(), Some("sevilla"));
        assert_eq!(user.language, Language::En);
        assert!(verify_password("caballo123", &user.password_hash));

        let stored = ctx.repos.users.find_by_email("lucia@example.com").await;
        assert_eq!(stored.unwrap().id, user.id);
    }

    #[actix_web::test]
    async fn rejects_duplicate_email() {
        let ctx = setup_context_at(2025, 3, 10).await;
        usecase("lucia@example.com").execute(&ctx).await.unwrap();

        let res = usecase("LUCIA@example.com").execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::EmailTaken);
    }

    #[actix_web::test]
    async fn rejects_invalid_data() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let res = usecase("not-an-email").execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidData(_))));

        let mut without_answer = usecase("lucia@example.com");
        without_answer.security_answer = None;
        let res = without_answer.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidData(_))));
    }
}
