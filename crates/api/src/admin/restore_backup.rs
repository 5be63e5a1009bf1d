use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use herdbook_api_structs::restore_backup::{APIResponse, PathParams};
use herdbook_domain::{
    backup::{is_restorable_collection, restore_document},
    bson::{doc, Document},
};
use herdbook_infra::HerdbookContext;
use std::collections::BTreeMap;
use tracing::{error, info, warn};

pub async fn restore_backup_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    protect_admin_route(&http_req, &ctx).await?;

    let usecase = RestoreBackupUseCase {
        backup_id: path.into_inner().backup_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                message: "Backup restored successfully".into(),
                backup_date: res.backup_date,
                restored_collections: res.restored_collections,
            })
        })
        .map_err(HerdbookError::from)
}

/// Replaces the content of every snapshotted collection. Collections are
/// replaced one after the other and nothing is rolled back on failure.
#[derive(Debug)]
pub struct RestoreBackupUseCase {
    pub backup_id: String,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub backup_date: DateTime<Utc>,
    pub restored_collections: BTreeMap<String, u64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    DataNotFound,
    StorageError,
    /// The named collection failed after the listed ones were replaced
    PartialRestore {
        failed: String,
        restored: Vec<String>,
    },
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Backup not found".into()),
            UseCaseError::DataNotFound => Self::NotFound("Backup data not found".into()),
            UseCaseError::StorageError | UseCaseError::PartialRestore { .. } => {
                Self::InternalError
            }
        }
    }
}

async fn replace_collection(
    collection: &str,
    documents: Vec<Document>,
    ctx: &HerdbookContext,
) -> anyhow::Result<u64> {
    let documents = documents
        .into_iter()
        .map(restore_document)
        .collect::<Vec<_>>();
    let count = documents.len() as u64;

    ctx.repos.store.delete_many(collection, doc! {}).await?;
    ctx.repos.store.insert_many(collection, documents).await?;
    Ok(count)
}

#[async_trait::async_trait(?Send)]
impl UseCase for RestoreBackupUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "RestoreBackup";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let snapshot = ctx
            .repos
            .backups
            .find_snapshot(&self.backup_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let chunks = ctx
            .repos
            .backups
            .find_chunks(&snapshot.effective_id())
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let collections = if chunks.is_empty() {
            snapshot.legacy_collections()
        } else {
            chunks
                .into_iter()
                .map(|chunk| (chunk.collection_name, chunk.documents))
                .collect()
        };
        if collections.is_empty() {
            return Err(UseCaseError::DataNotFound);
        }

        let mut restored_collections = BTreeMap::new();
        for (collection, documents) in collections {
            if !is_restorable_collection(&collection) {
                warn!("Skipping collection {} on restore", collection);
                continue;
            }
            match replace_collection(&collection, documents, ctx).await {
                Ok(count) => {
                    restored_collections.insert(collection, count);
                }
                Err(e) => {
                    let restored = restored_collections.into_keys().collect::<Vec<_>>();
                    error!(
                        "Restore of backup {} failed on collection {} after restoring {:?}: {:?}",
                        self.backup_id, collection, restored, e
                    );
                    return Err(UseCaseError::PartialRestore {
                        failed: collection,
                        restored,
                    });
                }
            }
        }
        info!(
            "Backup {} restored: {:?}",
            self.backup_id, restored_collections
        );

        Ok(UseCaseResponse {
            backup_date: snapshot.created_at,
            restored_collections,
        })
    }
}
