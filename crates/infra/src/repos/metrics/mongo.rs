use super::IMetricsRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{self, doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    MetricsRecord, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION_NAME: &str = "metrics_history";

pub struct MongoMetricsRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoMetricsRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

fn bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

#[async_trait::async_trait]
impl IMetricsRepo for MongoMetricsRepo {
    async fn insert(&self, record: &MetricsRecord) -> anyhow::Result<()> {
        mongo_repo::insert::<_, MetricsMongo>(self.store.as_ref(), COLLECTION_NAME, record).await
    }

    async fn latest(&self) -> Option<MetricsRecord> {
        let query = FindQuery::sorted("timestamp", SortOrder::Descending).limit(1);
        match mongo_repo::find_many_by::<_, MetricsMongo>(
            self.store.as_ref(),
            COLLECTION_NAME,
            doc! {},
            query,
        )
        .await
        {
            Ok(records) => records.into_iter().next(),
            Err(_) => None,
        }
    }

    async fn find_since(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<MetricsRecord>> {
        let filter = doc! {
            "timestamp": {
                "$gte": bson_datetime(since)
            }
        };
        mongo_repo::find_many_by::<_, MetricsMongo>(
            self.store.as_ref(),
            COLLECTION_NAME,
            filter,
            FindQuery::sorted("timestamp", SortOrder::Ascending),
        )
        .await
    }

    async fn delete_before(&self, cutoff: DateTime<Utc>) -> anyhow::Result<u64> {
        let filter = doc! {
            "timestamp": {
                "$lt": bson_datetime(cutoff)
            }
        };
        mongo_repo::delete_many_by(self.store.as_ref(), COLLECTION_NAME, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct MetricsMongo {
    _id: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    timestamp: DateTime<Utc>,
    database_mb: f64,
    documents_count: i64,
    users_count: i64,
    horses_count: i64,
    riders_count: i64,
}

impl MongoDocument<MetricsRecord> for MetricsMongo {
    fn to_domain(self) -> MetricsRecord {
        MetricsRecord {
            id: ID::from(self._id),
            timestamp: self.timestamp,
            database_mb: self.database_mb,
            documents_count: self.documents_count.max(0) as u64,
            users_count: self.users_count.max(0) as u64,
            horses_count: self.horses_count.max(0) as u64,
            riders_count: self.riders_count.max(0) as u64,
        }
    }

    fn from_domain(record: &MetricsRecord) -> Self {
        Self {
            _id: record.id.inner(),
            timestamp: record.timestamp,
            database_mb: record.database_mb,
            documents_count: record.documents_count as i64,
            users_count: record.users_count as i64,
            horses_count: record.horses_count as i64,
            riders_count: record.riders_count as i64,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
