use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_backups::APIResponse;
use herdbook_domain::{backup::BACKUP_RETENTION, BackupSnapshot};
use herdbook_infra::HerdbookContext;

pub async fn get_backups_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    protect_admin_route(&http_req, &ctx).await?;

    execute(GetBackupsUseCase, &ctx)
        .await
        .map(|snapshots| HttpResponse::Ok().json(APIResponse::new(snapshots)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct GetBackupsUseCase;

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
impl UseCase for GetBackupsUseCase {
    type Response = Vec<BackupSnapshot>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBackups";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .backups
            .list_snapshots(Some(BACKUP_RETENTION as i64))
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
