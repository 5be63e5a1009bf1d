use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_horse::{APIResponse, RequestBody};
use herdbook_domain::{categories::validate_intervals, Horse, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_horse_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateHorseUseCase {
        user_id: user.id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|horse| HttpResponse::Created().json(APIResponse::new(horse)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct CreateHorseUseCase {
    pub user_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidData(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateHorseUseCase {
    type Response = Horse;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateHorse";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if self.body.name.trim().is_empty() {
            return Err(UseCaseError::InvalidData("A horse needs a name".into()));
        }
        let reminder_intervals = self.body.reminder_intervals.take().unwrap_or_default();
        validate_intervals(&reminder_intervals).map_err(UseCaseError::InvalidData)?;

        let now = ctx.now();
        let body = std::mem::take(&mut self.body);
        let horse = Horse {
            id: Default::default(),
            user_id: self.user_id,
            name: body.name,
            breed: body.breed,
            birth_date: body.birth_date,
            color: body.color,
            notes: body.notes,
            photo: body.photo,
            photos: body.photos,
            stabling_location: body.stabling_location,
            territorial_license: body.territorial_license,
            national_license: body.national_license,
            owner: body.owner,
            documents: body.documents,
            reminder_intervals,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .horses
            .insert(&horse)
            .await
            .map(|_| horse)
            .map_err(|_| UseCaseError::StorageError)
    }
}
