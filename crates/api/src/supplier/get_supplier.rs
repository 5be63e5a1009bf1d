use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_supplier::{APIResponse, PathParams};
use herdbook_domain::{Supplier, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_supplier_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetSupplierUseCase {
        user_id: user.id,
        supplier_id: path.supplier_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|supplier| HttpResponse::Ok().json(APIResponse::new(supplier)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetSupplierUseCase {
    pub user_id: ID,
    pub supplier_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Supplier not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSupplierUseCase {
    type Response = Supplier;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSupplier";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .suppliers
            .find(&self.supplier_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}
