use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::set_language::{APIResponse, RequestBody};
use herdbook_domain::{Language, User};
use herdbook_infra::HerdbookContext;

pub async fn set_language_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = SetLanguageUseCase {
        user,
        language: body.0.language,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| {
            HttpResponse::Ok().json(APIResponse {
                message: "Language updated successfully".into(),
                language: user.language,
            })
        })
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct SetLanguageUseCase {
    pub user: User,
    pub language: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidLanguage,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidLanguage => {
                Self::BadClientData("Invalid language. Use 'es' or 'en'".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetLanguageUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "SetLanguage";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let language = match self.language.as_str() {
            "es" => Language::Es,
            "en" => Language::En,
            _ => return Err(UseCaseError::InvalidLanguage),
        };

        let mut user = self.user.clone();
        user.language = language;
        user.updated_at = ctx.now();
        ctx.repos
            .users
            .save(&user)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseError::StorageError)
    }
}
