use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    cascade::cascade_delete,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_supplier::{APIResponse, PathParams};
use herdbook_domain::{cascade::OwnerKind, Supplier, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_supplier_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteSupplierUseCase {
        user_id: user.id,
        supplier_id: path.supplier_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|supplier| HttpResponse::Ok().json(APIResponse::new(supplier)))
        .map_err(HerdbookError::from)
}

/// Expenses paid to the supplier are kept without the reference
#[derive(Debug)]
pub struct DeleteSupplierUseCase {
    pub user_id: ID,
    pub supplier_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Supplier not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteSupplierUseCase {
    type Response = Supplier;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteSupplier";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let supplier = ctx
            .repos
            .suppliers
            .delete(&self.supplier_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        cascade_delete(OwnerKind::Supplier, &self.supplier_id, &self.user_id, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(supplier)
    }
}
