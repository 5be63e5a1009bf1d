use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_suppliers::{APIResponse, QueryParams};
use herdbook_domain::{Supplier, ID};
use herdbook_infra::HerdbookContext;

pub async fn get_suppliers_controller(
    http_req: actix_web::HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetSuppliersUseCase {
        user_id: user.id,
        category: query.0.category,
    };

    execute(usecase, &ctx)
        .await
        .map(|suppliers| HttpResponse::Ok().json(APIResponse::new(suppliers)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetSuppliersUseCase {
    pub user_id: ID,
    pub category: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSuppliersUseCase {
    type Response = Vec<Supplier>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSuppliers";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .suppliers
            .find_by_user(&self.user_id, self.category.as_deref())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
