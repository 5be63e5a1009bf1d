use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_backup::APIResponse;
use herdbook_domain::{
    backup::{size_in_mb, snapshot_document, BACKUP_COLLECTIONS, BACKUP_RETENTION},
    bson::doc,
    BackupChunk, BackupInitiator, BackupSnapshot,
};
use herdbook_infra::{FindQuery, HerdbookContext};
use tracing::{error, info};

pub async fn create_backup_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_admin_route(&http_req, &ctx).await?;

    let usecase = CreateBackupUseCase {
        initiator: BackupInitiator::Admin(user.id),
    };

    execute(usecase, &ctx)
        .await
        .map(|snapshot| HttpResponse::Ok().json(APIResponse::new(snapshot)))
        .map_err(HerdbookError::from)
}

/// Copies every data collection into per collection chunks and prunes
/// the snapshots beyond the retention count
#[derive(Debug)]
pub struct CreateBackupUseCase {
    pub initiator: BackupInitiator,
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

impl CreateBackupUseCase {
    async fn snapshot_collection(
        snapshot: &BackupSnapshot,
        collection: &str,
        ctx: &HerdbookContext,
    ) -> anyhow::Result<BackupChunk> {
        let documents = ctx
            .repos
            .store
            .find(collection, doc! {}, FindQuery::default())
            .await?
            .into_iter()
            .map(snapshot_document)
            .collect();
        let chunk = BackupChunk::new(snapshot, collection, documents);
        ctx.repos.backups.insert_chunk(&chunk).await?;
        Ok(chunk)
    }

    async fn prune(ctx: &HerdbookContext) -> anyhow::Result<()> {
        let snapshots = ctx.repos.backups.list_snapshots(None).await?;
        for snapshot in snapshots.iter().skip(BACKUP_RETENTION) {
            info!("Pruning backup {}", snapshot.effective_id());
            ctx.repos.backups.delete_snapshot(snapshot).await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBackupUseCase {
    type Response = BackupSnapshot;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBackup";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut snapshot = BackupSnapshot::new(&self.initiator, ctx.now());
        let mut size_bytes = 0;

        for collection in BACKUP_COLLECTIONS {
            match Self::snapshot_collection(&snapshot, collection, ctx).await {
                Ok(chunk) => {
                    size_bytes += chunk.size_bytes();
                    snapshot.collections.push(collection.to_string());
                }
                Err(e) => error!(
                    "Unable to back up collection {} for backup {}: {:?}",
                    collection,
                    snapshot.effective_id(),
                    e
                ),
            }
        }
        snapshot.size_mb = size_in_mb(size_bytes);

        ctx.repos
            .backups
            .insert_snapshot(&snapshot)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Backup {} created with {} collections, {} MB",
            snapshot.effective_id(),
            snapshot.collections.len(),
            snapshot.size_mb
        );

        if let Err(e) = Self::prune(ctx).await {
            error!("Unable to prune old backups: {:?}", e);
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, insert_user, setup_context_at};
    use chrono::{Duration, TimeZone, Utc};
    use herdbook_domain::BackupKind;
    use herdbook_infra::StaticTimeSys;
    use std::sync::Arc;

    #[actix_web::test]
    async fn snapshots_every_collection() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user = insert_user(&ctx, "lucia@example.com").await;
        insert_horse(&ctx, &user.id, "Tornado").await;

        let mut usecase = CreateBackupUseCase {
            initiator: BackupInitiator::Admin(user.id),
        };
        let snapshot = usecase.execute(&ctx).await.unwrap();
        assert_eq!(snapshot.kind, BackupKind::Manual);
        assert_eq!(snapshot.collections.len(), BACKUP_COLLECTIONS.len());
        assert!(snapshot.size_mb >= 0.0);

        let chunks = ctx
            .repos
            .backups
            .find_chunks(&snapshot.effective_id())
            .await
            .unwrap();
        let horses = chunks
            .iter()
            .find(|c| c.collection_name == "horses")
            .unwrap();
        assert_eq!(horses.doc_count, 1);
        assert_eq!(
            horses.documents[0].get_str("user_id").unwrap(),
            user.id.as_string()
        );
        assert!(horses.documents[0].get_str("_id").is_ok());
    }

    #[actix_web::test]
    async fn keeps_newest_snapshots() {
        let mut ctx = setup_context_at(2025, 3, 1).await;
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 3, 0, 0).unwrap();

        let mut ids = Vec::new();
        for day in 0..(BACKUP_RETENTION as i64 + 2) {
            ctx.sys = Arc::new(StaticTimeSys(
                (start + Duration::days(day)).timestamp_millis(),
            ));
            let mut usecase = CreateBackupUseCase {
                initiator: BackupInitiator::Scheduler,
            };
            ids.push(usecase.execute(&ctx).await.unwrap().effective_id());
        }

        let kept = ctx.repos.backups.list_snapshots(None).await.unwrap();
        assert_eq!(kept.len(), BACKUP_RETENTION);
        assert_eq!(kept[0].effective_id(), ids[ids.len() - 1]);
        assert!(ctx.repos.backups.find_snapshot(&ids[0]).await.is_none());
        assert!(ctx
            .repos
            .backups
            .find_chunks(&ids[1])
            .await
            .unwrap()
            .is_empty());
    }
}
