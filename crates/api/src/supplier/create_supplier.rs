use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_supplier::{APIResponse, RequestBody};
use herdbook_domain::{Supplier, ID};
use herdbook_infra::HerdbookContext;

pub async fn create_supplier_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateSupplierUseCase {
        user_id: user.id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|supplier| HttpResponse::Created().json(APIResponse::new(supplier)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct CreateSupplierUseCase {
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
impl UseCase for CreateSupplierUseCase {
    type Response = Supplier;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSupplier";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if self.body.name.trim().is_empty() {
            return Err(UseCaseError::InvalidData("A supplier needs a name".into()));
        }

        let now = ctx.now();
        let body = std::mem::take(&mut self.body);
        let supplier = Supplier {
            id: Default::default(),
            user_id: self.user_id,
            name: body.name,
            category: body.category,
            custom_category: body.custom_category,
            phone: body.phone,
            email: body.email,
            address: body.address,
            city: body.city,
            notes: body.notes,
            contact_person: body.contact_person,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .suppliers
            .insert(&supplier)
            .await
            .map(|_| supplier)
            .map_err(|_| UseCaseError::StorageError)
    }
}
