use crate::shared::usecase::UseCase;
use herdbook_domain::{bson::doc, metrics::bytes_to_mb, MetricsRecord};
use herdbook_infra::HerdbookContext;
use tracing::info;

/// Samples database usage into the metrics history and prunes the
/// history beyond its retention
#[derive(Debug)]
pub struct CollectMetricsUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl CollectMetricsUseCase {
    async fn count(collection: &str, ctx: &HerdbookContext) -> Result<u64, UseCaseError> {
        ctx.repos
            .store
            .count(collection, doc! {})
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CollectMetricsUseCase {
    type Response = MetricsRecord;

    type Error = UseCaseError;

    const NAME: &'static str = "CollectMetrics";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let stats = ctx
            .repos
            .store
            .stats()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let now = ctx.now();
        let record = MetricsRecord {
            id: Default::default(),
            timestamp: now,
            database_mb: bytes_to_mb(stats.size_bytes),
            documents_count: stats.documents,
            users_count: Self::count("users", ctx).await?,
            horses_count: Self::count("horses", ctx).await?,
            riders_count: Self::count("riders", ctx).await?,
        };
        ctx.repos
            .metrics
            .insert(&record)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos
            .metrics
            .delete_before(MetricsRecord::retention_cutoff(now))
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!("Daily metrics collected: {} MB used", record.database_mb);
        Ok(record)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_horse, insert_user, setup_context_at};
    use chrono::Duration;

    #[actix_web::test]
    async fn counts_records_and_prunes_history() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user = insert_user(&ctx, "lucia@example.com").await;
        insert_horse(&ctx, &user.id, "Tornado").await;
        insert_horse(&ctx, &user.id, "Centella").await;
        let stale = MetricsRecord {
            id: Default::default(),
            timestamp: ctx.now() - Duration::days(31),
            database_mb: 1.0,
            documents_count: 1,
            users_count: 1,
            horses_count: 0,
            riders_count: 0,
        };
        ctx.repos.metrics.insert(&stale).await.unwrap();

        let record = CollectMetricsUseCase.execute(&ctx).await.unwrap();
        assert_eq!(record.users_count, 1);
        assert_eq!(record.horses_count, 2);
        assert_eq!(record.riders_count, 0);
        assert!(record.documents_count >= 3);

        let history = ctx
            .repos
            .metrics
            .find_since(ctx.now() - Duration::days(60))
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].timestamp, record.timestamp);
    }
}
