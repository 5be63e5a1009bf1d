use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_rider::{APIResponse, RequestBody};
use herdbook_domain::{categories::validate_intervals, Rider, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_rider_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateRiderUseCase {
        user_id: user.id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|rider| HttpResponse::Created().json(APIResponse::new(rider)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct CreateRiderUseCase {
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
impl UseCase for CreateRiderUseCase {
    type Response = Rider;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateRider";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if self.body.name.trim().is_empty() {
            return Err(UseCaseError::InvalidData("A rider needs a name".into()));
        }
        let reminder_intervals = self.body.reminder_intervals.take().unwrap_or_default();
        validate_intervals(&reminder_intervals).map_err(UseCaseError::InvalidData)?;

        let now = ctx.now();
        let body = std::mem::take(&mut self.body);
        let rider = Rider {
            id: Default::default(),
            user_id: self.user_id,
            name: body.name,
            photo: body.photo,
            photos: body.photos,
            birth_date: body.birth_date,
            phone: body.phone,
            email: body.email,
            notes: body.notes,
            territorial_license: body.territorial_license,
            national_license: body.national_license,
            documents: body.documents,
            reminder_intervals,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .riders
            .insert(&rider)
            .await
            .map(|_| rider)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_context_at;

    #[actix_web::test]
    async fn creates_rider() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();

        let mut usecase = CreateRiderUseCase {
            user_id,
            body: RequestBody {
                name: "Marta".into(),
                phone: Some("600123123".into()),
                reminder_intervals: Some([("licencias".to_string(), 300)].into_iter().collect()),
                ..Default::default()
            },
        };
        let rider = usecase.execute(&ctx).await.unwrap();

        let stored = ctx.repos.riders.find(&rider.id, &user_id).await.unwrap();
        assert_eq!(stored.phone.as_deref(), Some("600123123"));
        assert_eq!(stored.reminder_intervals.get("licencias"), Some(&300));
    }

    #[actix_web::test]
    async fn rejects_blank_name() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let mut usecase = CreateRiderUseCase {
            user_id: ID::new(),
            body: RequestBody {
                name: "  ".into(),
                ..Default::default()
            },
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidData(_))
        ));
    }
}
