use crate::dtos::BackupDTO;
use chrono::{DateTime, Utc};
use herdbook_domain::BackupSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod admin_check {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub is_admin: bool,
    }
}

pub mod create_backup {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub backup_id: String,
        pub created_at: DateTime<Utc>,
        pub size_mb: f64,
    }

    impl APIResponse {
        pub fn new(snapshot: BackupSnapshot) -> Self {
            Self {
                message: "Backup created successfully".into(),
                backup_id: snapshot.effective_id(),
                created_at: snapshot.created_at,
                size_mb: snapshot.size_mb,
            }
        }
    }
}

pub mod get_backups {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub backups: Vec<BackupDTO>,
    }

    impl APIResponse {
        pub fn new(snapshots: Vec<BackupSnapshot>) -> Self {
            Self {
                backups: snapshots.into_iter().map(BackupDTO::new).collect(),
            }
        }
    }
}

pub mod restore_backup {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub backup_id: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub backup_date: DateTime<Utc>,
        /// Number of documents put back per collection
        pub restored_collections: BTreeMap<String, u64>,
    }
}
