use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_rider::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{Rider, ID};
use herdbook_infra::HerdbookContext;

pub async fn update_rider_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateRiderUseCase {
        user_id: user.id,
        rider_id: path.rider_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|rider| HttpResponse::Ok().json(APIResponse::new(rider)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct UpdateRiderUseCase {
    pub user_id: ID,
    pub rider_id: ID,
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
            UseCaseError::NotFound => Self::NotFound("Rider not found".into()),
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateRiderUseCase {
    type Response = Rider;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateRider";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut rider = ctx
            .repos
            .riders
            .find(&self.rider_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        if let Some(name) = body.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::InvalidData("A rider needs a name".into()));
            }
            rider.name = name;
        }
        if body.photo.is_some() {
            rider.photo = body.photo;
        }
        if let Some(photos) = body.photos {
            rider.photos = photos;
        }
        if body.birth_date.is_some() {
            rider.birth_date = body.birth_date;
        }
        if body.phone.is_some() {
            rider.phone = body.phone;
        }
        if body.email.is_some() {
            rider.email = body.email;
        }
        if body.notes.is_some() {
            rider.notes = body.notes;
        }
        if body.territorial_license.is_some() {
            rider.territorial_license = body.territorial_license;
        }
        if body.national_license.is_some() {
            rider.national_license = body.national_license;
        }
        if let Some(documents) = body.documents {
            rider.documents = documents;
        }
        rider.updated_at = ctx.now();

        ctx.repos
            .riders
            .save(&rider)
            .await
            .map(|_| rider)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_rider, setup_context_at};

    #[actix_web::test]
    async fn updates_contact_details() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let rider = insert_rider(&ctx, &user_id, "Marta").await;

        let mut usecase = UpdateRiderUseCase {
            user_id,
            rider_id: rider.id,
            body: RequestBody {
                email: Some("marta@example.com".into()),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.name, "Marta");
        assert_eq!(updated.email.as_deref(), Some("marta@example.com"));
    }
}
