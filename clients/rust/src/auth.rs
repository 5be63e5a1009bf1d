use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use herdbook_domain::Language;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthClient {
    base: Arc<BaseClient>,
}

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub language: Language,
    pub security_question: Option<String>,
    pub security_answer: Option<String>,
}

impl AuthClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(&self, input: RegisterInput) -> APIResponse<register::APIResponse> {
        let body = register::RequestBody {
            email: input.email,
            password: input.password,
            name: input.name,
            language: input.language,
            security_question: input.security_question,
            security_answer: input.security_answer,
        };
        self.base
            .post(body, "auth/register".into(), StatusCode::OK)
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> APIResponse<login::APIResponse> {
        let body = login::RequestBody {
            email: email.into(),
            password: password.into(),
        };
        self.base
            .post(body, "auth/login".into(), StatusCode::OK)
            .await
    }

    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("auth/me".into(), StatusCode::OK).await
    }

    pub async fn delete_account(&self) -> APIResponse<delete_account::APIResponse> {
        self.base
            .delete("auth/delete-account".into(), StatusCode::OK)
            .await
    }
}
