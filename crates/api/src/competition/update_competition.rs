use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_competition::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{categories::is_valid_discipline, Competition, ID};
use herdbook_infra::HerdbookContext;

pub async fn update_competition_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateCompetitionUseCase {
        user_id: user.id,
        competition_id: path.competition_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|competition| HttpResponse::Ok().json(APIResponse::new(competition)))
        .map_err(HerdbookError::from)
}

/// Already scheduled reminders keep their dates when the competition moves
#[derive(Debug)]
pub struct UpdateCompetitionUseCase {
    pub user_id: ID,
    pub competition_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    InvalidDiscipline(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Competition not found".into()),
            UseCaseError::InvalidDiscipline(discipline) => {
                Self::BadClientData(format!("Invalid discipline: {}", discipline))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCompetitionUseCase {
    type Response = Competition;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCompetition";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut competition = ctx
            .repos
            .competitions
            .find(&self.competition_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        if let Some(discipline) = body.discipline {
            if !is_valid_discipline(&discipline) {
                return Err(UseCaseError::InvalidDiscipline(discipline));
            }
            competition.discipline = discipline;
        }

        for (value, field) in [
            (body.name, &mut competition.name),
            (body.date, &mut competition.date),
            (body.place, &mut competition.place),
            (body.city, &mut competition.city),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
        for (value, field) in [
            (body.end_date, &mut competition.end_date),
            (body.country, &mut competition.country),
            (body.location_link, &mut competition.location_link),
            (body.custom_discipline, &mut competition.custom_discipline),
            (body.level, &mut competition.level),
            (body.organizer, &mut competition.organizer),
            (body.entry_deadline, &mut competition.entry_deadline),
            (body.notes, &mut competition.notes),
            (body.website, &mut competition.website),
            (body.contact_phone, &mut competition.contact_phone),
            (body.contact_email, &mut competition.contact_email),
            (body.accommodation_info, &mut competition.accommodation_info),
        ] {
            if value.is_some() {
                *field = value;
            }
        }
        if body.entry_fee.is_some() {
            competition.entry_fee = body.entry_fee;
        }
        if let Some(horses) = body.participating_horses {
            competition.participating_horses = horses;
        }
        if let Some(riders) = body.participating_riders {
            competition.participating_riders = riders;
        }
        competition.updated_at = ctx.now();

        ctx.repos
            .competitions
            .save(&competition)
            .await
            .map(|_| competition)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{competition, setup_context_at};

    #[actix_web::test]
    async fn updates_given_fields() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let existing = competition(user_id, "Copa de Andalucía", "2025-06-01");
        ctx.repos.competitions.insert(&existing).await.unwrap();

        let mut usecase = UpdateCompetitionUseCase {
            user_id,
            competition_id: existing.id,
            body: RequestBody {
                city: Some("Jerez".into()),
                entry_fee: Some(120.0),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.city, "Jerez");
        assert_eq!(updated.entry_fee, Some(120.0));
        assert_eq!(updated.name, "Copa de Andalucía");

        let mut usecase = UpdateCompetitionUseCase {
            user_id: ID::new(),
            competition_id: existing.id,
            body: Default::default(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::NotFound);
    }
}
