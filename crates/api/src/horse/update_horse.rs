use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_horse::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{Horse, ID};
use herdbook_infra::HerdbookContext;

pub async fn update_horse_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateHorseUseCase {
        user_id: user.id,
        horse_id: path.horse_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|horse| HttpResponse::Ok().json(APIResponse::new(horse)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct UpdateHorseUseCase {
    pub user_id: ID,
    pub horse_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    InvalidData(String),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Horse not found".into()),
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateHorseUseCase {
    type Response = Horse;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateHorse";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut horse = ctx
            .repos
            .horses
            .find(&self.horse_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        if let Some(name) = body.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::InvalidData("A horse needs a name".into()));
            }
            horse.name = name;
        }
        if body.breed.is_some() {
            horse.breed = body.breed;
        }
        if body.birth_date.is_some() {
            horse.birth_date = body.birth_date;
        }
        if body.color.is_some() {
            horse.color = body.color;
        }
        if body.notes.is_some() {
            horse.notes = body.notes;
        }
        if body.photo.is_some() {
            horse.photo = body.photo;
        }
        if let Some(photos) = body.photos {
            horse.photos = photos;
        }
        if body.stabling_location.is_some() {
            horse.stabling_location = body.stabling_location;
        }
        if body.territorial_license.is_some() {
            horse.territorial_license = body.territorial_license;
        }
        if body.national_license.is_some() {
            horse.national_license = body.national_license;
        }
        if body.owner.is_some() {
            horse.owner = body.owner;
        }
        if let Some(documents) = body.documents {
            horse.documents = documents;
        }
        horse.updated_at = ctx.now();

        ctx.repos
            .horses
            .save(&horse)
            .await
            .map(|_| horse)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, setup_context_at};

    #[actix_web::test]
    async fn updates_only_given_fields() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let mut horse = insert_horse(&ctx, &user_id, "Tornado").await;
        horse.color = Some("Tordo".into());
        ctx.repos.horses.save(&horse).await.unwrap();

        let mut usecase = UpdateHorseUseCase {
            user_id,
            horse_id: horse.id,
            body: RequestBody {
                breed: Some("Árabe".into()),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.name, "Tornado");
        assert_eq!(updated.breed.as_deref(), Some("Árabe"));
        assert_eq!(updated.color.as_deref(), Some("Tordo"));
    }

    #[actix_web::test]
    async fn cannot_update_horse_of_other_user() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let horse = insert_horse(&ctx, &ID::new(), "Tornado").await;

        let mut usecase = UpdateHorseUseCase {
            user_id: ID::new(),
            horse_id: horse.id,
            body: Default::default(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::NotFound);
    }
}
