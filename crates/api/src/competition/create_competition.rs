use super::subscribers::CreateRemindersOnCompetitionCreated;
use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_competition::{APIResponse, RequestBody};
use herdbook_domain::{categories::is_valid_discipline, Competition, DEFAULT_COUNTRY, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_competition_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateCompetitionUseCase {
        user_id: user.id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|competition| HttpResponse::Created().json(APIResponse::new(competition)))
        .map_err(HerdbookError::from)
}

/// Stores the competition and schedules its countdown reminders
#[derive(Debug)]
pub struct CreateCompetitionUseCase {
    pub user_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidData(String),
    InvalidDiscipline(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::InvalidDiscipline(discipline) => {
                Self::BadClientData(format!("Invalid discipline: {}", discipline))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCompetitionUseCase {
    type Response = Competition;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompetition";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let body = std::mem::take(&mut self.body);
        if body.name.trim().is_empty() || body.date.trim().is_empty() {
            return Err(UseCaseError::InvalidData(
                "A competition needs a name and a date".into(),
            ));
        }
        if !is_valid_discipline(&body.discipline) {
            return Err(UseCaseError::InvalidDiscipline(body.discipline));
        }

        let now = ctx.now();
        let competition = Competition {
            id: Default::default(),
            user_id: self.user_id,
            name: body.name,
            date: body.date,
            end_date: body.end_date,
            place: body.place,
            city: body.city,
            country: body.country.or_else(|| Some(DEFAULT_COUNTRY.to_string())),
            location_link: body.location_link,
            discipline: body.discipline,
            custom_discipline: body.custom_discipline,
            level: body.level,
            organizer: body.organizer,
            entry_deadline: body.entry_deadline,
            entry_fee: body.entry_fee,
            notes: body.notes,
            website: body.website,
            contact_phone: body.contact_phone,
            contact_email: body.contact_email,
            accommodation_info: body.accommodation_info,
            participating_horses: body.participating_horses,
            participating_riders: body.participating_riders,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .competitions
            .insert(&competition)
            .await
            .map(|_| competition)
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateRemindersOnCompetitionCreated)]
    }
}
