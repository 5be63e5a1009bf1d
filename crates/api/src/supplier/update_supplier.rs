use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_supplier::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{Supplier, ID};
use herdbook_infra::HerdbookContext;

pub async fn update_supplier_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateSupplierUseCase {
        user_id: user.id,
        supplier_id: path.supplier_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|supplier| HttpResponse::Ok().json(APIResponse::new(supplier)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct UpdateSupplierUseCase {
    pub user_id: ID,
    pub supplier_id: ID,
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
            UseCaseError::NotFound => Self::NotFound("Supplier not found".into()),
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateSupplierUseCase {
    type Response = Supplier;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateSupplier";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut supplier = ctx
            .repos
            .suppliers
            .find(&self.supplier_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        if let Some(name) = body.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::InvalidData("A supplier needs a name".into()));
            }
            supplier.name = name;
        }
        let optionals = [
            (body.category, &mut supplier.category),
            (body.custom_category, &mut supplier.custom_category),
            (body.phone, &mut supplier.phone),
            (body.email, &mut supplier.email),
            (body.address, &mut supplier.address),
            (body.city, &mut supplier.city),
            (body.notes, &mut supplier.notes),
            (body.contact_person, &mut supplier.contact_person),
        ];
        for (value, field) in optionals {
            if value.is_some() {
                *field = value;
            }
        }
        supplier.updated_at = ctx.now();

        ctx.repos
            .suppliers
            .save(&supplier)
            .await
            .map(|_| supplier)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_context_at;
    use herdbook_api_structs::create_supplier;

    #[actix_web::test]
    async fn keeps_fields_not_given() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let mut create = crate::supplier::create_supplier::CreateSupplierUseCase {
            user_id,
            body: create_supplier::RequestBody {
                name: "Piensos del Sur".into(),
                phone: Some("955000000".into()),
                ..Default::default()
            },
        };
        let supplier = create.execute(&ctx).await.unwrap();

        let mut usecase = UpdateSupplierUseCase {
            user_id,
            supplier_id: supplier.id,
            body: RequestBody {
                city: Some("Utrera".into()),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.phone.as_deref(), Some("955000000"));
        assert_eq!(updated.city.as_deref(), Some("Utrera"));
    }
}
