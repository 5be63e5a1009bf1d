use chrono::{DateTime, Utc};
use herdbook_domain::{BackupKind, BackupSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackupDTO {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(rename = "type")]
    pub kind: BackupKind,
    pub size_mb: f64,
    pub collections: Vec<String>,
}

impl BackupDTO {
    pub fn new(snapshot: BackupSnapshot) -> Self {
        Self {
            id: snapshot.effective_id(),
            created_at: snapshot.created_at,
            created_by: snapshot.created_by,
            kind: snapshot.kind,
            size_mb: snapshot.size_mb,
            collections: snapshot.collections,
        }
    }
}
