use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_palmares::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{categories::is_valid_discipline, Palmares, ID};
use herdbook_infra::HerdbookContext;

pub async fn update_palmares_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdatePalmaresUseCase {
        user_id: user.id,
        palmares_id: path.palmares_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|palmares| HttpResponse::Ok().json(APIResponse::new(palmares)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct UpdatePalmaresUseCase {
    pub user_id: ID,
    pub palmares_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    RiderNotFound,
    InvalidDiscipline(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Palmares not found".into()),
            UseCaseError::RiderNotFound => Self::NotFound("Rider not found".into()),
            UseCaseError::InvalidDiscipline(discipline) => {
                Self::BadClientData(format!("Invalid discipline: {}", discipline))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdatePalmaresUseCase {
    type Response = Palmares;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdatePalmares";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut palmares = ctx
            .repos
            .palmares
            .find(&self.palmares_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        if let Some(rider_id) = body.rider_id {
            if ctx
                .repos
                .riders
                .find(&rider_id, &self.user_id)
                .await
                .is_none()
            {
                return Err(UseCaseError::RiderNotFound);
            }
            palmares.rider_id = rider_id;
        }
        if let Some(discipline) = body.discipline {
            if !is_valid_discipline(&discipline) {
                return Err(UseCaseError::InvalidDiscipline(discipline));
            }
            palmares.discipline = discipline;
        }
        if let Some(competition_name) = body.competition_name {
            palmares.competition_name = competition_name;
        }
        if let Some(date) = body.date {
            palmares.date = date;
        }
        if body.horse_id.is_some() {
            palmares.horse_id = body.horse_id;
        }
        let optionals = [
            (body.place, &mut palmares.place),
            (body.city, &mut palmares.city),
            (body.country, &mut palmares.country),
            (body.location_link, &mut palmares.location_link),
            (body.custom_discipline, &mut palmares.custom_discipline),
            (body.position, &mut palmares.position),
            (body.category, &mut palmares.category),
            (body.notes, &mut palmares.notes),
            (body.prize, &mut palmares.prize),
        ];
        for (value, field) in optionals {
            if value.is_some() {
                *field = value;
            }
        }
        palmares.updated_at = ctx.now();

        ctx.repos
            .palmares
            .save(&palmares)
            .await
            .map(|_| palmares)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_palmares, insert_rider, setup_context_at};

    #[actix_web::test]
    async fn moves_palmares_between_own_riders() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let marta = insert_rider(&ctx, &user_id, "Marta").await;
        let pablo = insert_rider(&ctx, &user_id, "Pablo").await;
        let palmares = insert_palmares(&ctx, &user_id, &marta.id, "2025-02-16").await;

        let mut usecase = UpdatePalmaresUseCase {
            user_id,
            palmares_id: palmares.id,
            body: RequestBody {
                rider_id: Some(ID::new()),
                ..Default::default()
            },
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::RiderNotFound
        );

        let mut usecase = UpdatePalmaresUseCase {
            user_id,
            palmares_id: palmares.id,
            body: RequestBody {
                rider_id: Some(pablo.id),
                position: Some("3".into()),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.rider_id, pablo.id);
        assert_eq!(updated.position.as_deref(), Some("3"));
        assert_eq!(updated.discipline, "salto");
    }
}
