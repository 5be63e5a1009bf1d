mod mongo;

use chrono::{DateTime, Utc};
use herdbook_domain::MetricsRecord;
pub use mongo::MongoMetricsRepo;

#[async_trait::async_trait]
pub trait IMetricsRepo: Send + Sync {
    async fn insert(&self, record: &MetricsRecord) -> anyhow::Result<()>;
    async fn latest(&self) -> Option<MetricsRecord>;
    /// Oldest first
    async fn find_since(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<MetricsRecord>>;
    async fn delete_before(&self, cutoff: DateTime<Utc>) -> anyhow::Result<u64>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::{Duration, TimeZone, Utc};
    use herdbook_domain::{MetricsRecord, ID};

    fn record(days_ago: i64) -> MetricsRecord {
        let now = Utc.timestamp_millis_opt(1_735_000_000_000).unwrap();
        MetricsRecord {
            id: ID::new(),
            timestamp: now - Duration::days(days_ago),
            database_mb: 10.5,
            documents_count: 100,
            users_count: 2,
            horses_count: 5,
            riders_count: 3,
        }
    }

    #[tokio::test]
    async fn keeps_history_and_prunes() {
        let ctx = setup_context().await;
        let records = [record(40), record(10), record(0)];
        for r in &records {
            ctx.repos.metrics.insert(r).await.unwrap();
        }

        let latest = ctx.repos.metrics.latest().await.expect("To find latest");
        assert_eq!(latest.id, records[2].id);

        let deleted = ctx
            .repos
            .metrics
            .delete_before(MetricsRecord::retention_cutoff(records[2].timestamp))
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        let history = ctx
            .repos
            .metrics
            .find_since(records[2].timestamp - Duration::days(30))
            .await
            .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, records[1].id);
    }
}
