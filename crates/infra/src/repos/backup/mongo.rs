use super::IBackupRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    BackupChunk, BackupKind, BackupSnapshot, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const SNAPSHOTS: &str = "backups";
const CHUNKS: &str = "backup_parts";

pub struct MongoBackupRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoBackupRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IBackupRepo for MongoBackupRepo {
    async fn insert_snapshot(&self, snapshot: &BackupSnapshot) -> anyhow::Result<()> {
        mongo_repo::insert::<_, SnapshotMongo>(self.store.as_ref(), SNAPSHOTS, snapshot).await
    }

    async fn insert_chunk(&self, chunk: &BackupChunk) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ChunkMongo>(self.store.as_ref(), CHUNKS, chunk).await
    }

    async fn find_snapshot(&self, backup_id: &str) -> Option<BackupSnapshot> {
        let filter = doc! {
            "backup_id": backup_id
        };
        if let Some(snapshot) =
            mongo_repo::find_one_by::<_, SnapshotMongo>(self.store.as_ref(), SNAPSHOTS, filter)
                .await
        {
            return Some(snapshot);
        }

        let oid = ObjectId::parse_str(backup_id).ok()?;
        mongo_repo::find::<_, SnapshotMongo>(self.store.as_ref(), SNAPSHOTS, &oid).await
    }

    async fn list_snapshots(&self, limit: Option<i64>) -> anyhow::Result<Vec<BackupSnapshot>> {
        let mut query = FindQuery::sorted("created_at", SortOrder::Descending);
        query.limit = limit;
        mongo_repo::find_many_by::<_, SnapshotMongo>(
            self.store.as_ref(),
            SNAPSHOTS,
            doc! {},
            query,
        )
        .await
    }

    async fn find_chunks(&self, backup_id: &str) -> anyhow::Result<Vec<BackupChunk>> {
        let filter = doc! {
            "backup_id": backup_id
        };
        mongo_repo::find_many_by::<_, ChunkMongo>(
            self.store.as_ref(),
            CHUNKS,
            filter,
            FindQuery::default(),
        )
        .await
    }

    async fn delete_snapshot(&self, snapshot: &BackupSnapshot) -> anyhow::Result<()> {
        let chunks = doc! {
            "backup_id": snapshot.effective_id()
        };
        mongo_repo::delete_many_by(self.store.as_ref(), CHUNKS, chunks).await?;
        mongo_repo::delete_many_by(
            self.store.as_ref(),
            SNAPSHOTS,
            mongo_repo::get_id_filter(snapshot.id.inner_ref()),
        )
        .await?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotMongo {
    _id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backup_id: Option<String>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    created_by: String,
    #[serde(default, rename = "type")]
    kind: BackupKind,
    #[serde(default)]
    collections: Vec<String>,
    #[serde(default)]
    size_mb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Document>,
}

impl MongoDocument<BackupSnapshot> for SnapshotMongo {
    fn to_domain(self) -> BackupSnapshot {
        BackupSnapshot {
            id: ID::from(self._id),
            backup_id: self.backup_id,
            created_at: self.created_at,
            created_by: self.created_by,
            kind: self.kind,
            collections: self.collections,
            size_mb: self.size_mb,
            legacy_data: self.data,
        }
    }

    fn from_domain(snapshot: &BackupSnapshot) -> Self {
        Self {
            _id: snapshot.id.inner(),
            backup_id: snapshot.backup_id.clone(),
            created_at: snapshot.created_at,
            created_by: snapshot.created_by.clone(),
            kind: snapshot.kind,
            collections: snapshot.collections.clone(),
            size_mb: snapshot.size_mb,
            data: snapshot.legacy_data.clone(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChunkMongo {
    _id: ObjectId,
    backup_id: String,
    collection_name: String,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    created_by: String,
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    doc_count: i64,
}

impl MongoDocument<BackupChunk> for ChunkMongo {
    fn to_domain(self) -> BackupChunk {
        BackupChunk {
            id: ID::from(self._id),
            backup_id: self.backup_id,
            collection_name: self.collection_name,
            created_at: self.created_at,
            created_by: self.created_by,
            documents: self.documents,
            doc_count: self.doc_count.max(0) as u64,
        }
    }

    fn from_domain(chunk: &BackupChunk) -> Self {
        Self {
            _id: chunk.id.inner(),
            backup_id: chunk.backup_id.clone(),
            collection_name: chunk.collection_name.clone(),
            created_at: chunk.created_at,
            created_by: chunk.created_by.clone(),
            documents: chunk.documents.clone(),
            doc_count: chunk.doc_count as i64,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
