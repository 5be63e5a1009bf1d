use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_palmares::{APIResponse, RequestBody};
use herdbook_domain::{categories::is_valid_discipline, Palmares, DEFAULT_COUNTRY, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_palmares_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreatePalmaresUseCase {
        user_id: user.id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|palmares| HttpResponse::Created().json(APIResponse::new(palmares)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct CreatePalmaresUseCase {
    pub user_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    RiderNotFound,
    InvalidData(String),
    InvalidDiscipline(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::RiderNotFound => Self::NotFound("Rider not found".into()),
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::InvalidDiscipline(discipline) => {
                Self::BadClientData(format!("Invalid discipline: {}", discipline))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePalmaresUseCase {
    type Response = Palmares;

    type Error = UseCaseError;

    const NAME: &'static str = "CreatePalmares";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let body = std::mem::take(&mut self.body);
        if body.competition_name.trim().is_empty() {
            return Err(UseCaseError::InvalidData(
                "A result needs the competition name".into(),
            ));
        }
        if !is_valid_discipline(&body.discipline) {
            return Err(UseCaseError::InvalidDiscipline(body.discipline));
        }
        if ctx
            .repos
            .riders
            .find(&body.rider_id, &self.user_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::RiderNotFound);
        }

        let now = ctx.now();
        let palmares = Palmares {
            id: Default::default(),
            user_id: self.user_id,
            rider_id: body.rider_id,
            competition_name: body.competition_name,
            date: body.date,
            place: body.place,
            city: body.city,
            country: body.country.or_else(|| Some(DEFAULT_COUNTRY.to_string())),
            location_link: body.location_link,
            discipline: body.discipline,
            custom_discipline: body.custom_discipline,
            position: body.position,
            horse_id: body.horse_id,
            category: body.category,
            notes: body.notes,
            prize: body.prize,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .palmares
            .insert(&palmares)
            .await
            .map(|_| palmares)
            .map_err(|_| UseCaseError::StorageError)
    }
}
