mod mongo;

use herdbook_domain::{BackupChunk, BackupSnapshot};
pub use mongo::MongoBackupRepo;

/// Snapshot summaries and the per collection chunks they own
#[async_trait::async_trait]
pub trait IBackupRepo: Send + Sync {
    async fn insert_snapshot(&self, snapshot: &BackupSnapshot) -> anyhow::Result<()>;
    async fn insert_chunk(&self, chunk: &BackupChunk) -> anyhow::Result<()>;
    /// Looks the snapshot up by its `backup_id`, then by the hex `_id`
    /// legacy snapshots are addressed with
    async fn find_snapshot(&self, backup_id: &str) -> Option<BackupSnapshot>;
    /// Newest first
    async fn list_snapshots(&self, limit: Option<i64>) -> anyhow::Result<Vec<BackupSnapshot>>;
    async fn find_chunks(&self, backup_id: &str) -> anyhow::Result<Vec<BackupChunk>>;
    /// Removes the summary together with its chunks
    async fn delete_snapshot(&self, snapshot: &BackupSnapshot) -> anyhow::Result<()>;
}
