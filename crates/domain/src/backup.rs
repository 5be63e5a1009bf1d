//! Snapshot records and the document transforms used to write and
//! restore them.

use crate::shared::entity::ID;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

/// Every collection that takes part in a snapshot
pub const BACKUP_COLLECTIONS: [&str; 11] = [
    "users",
    "horses",
    "riders",
    "suppliers",
    "expenses",
    "rider_expenses",
    "competitions",
    "palmares",
    "reminders",
    "budgets",
    "horse_rider_associations",
];

/// Collections holding the snapshots themselves, never restored
pub const BACKUP_METADATA_COLLECTIONS: [&str; 2] = ["backups", "backup_parts"];

/// Number of snapshots kept, older ones are pruned
pub const BACKUP_RETENTION: usize = 7;

/// Top level fields that may hold base64 encoded media
pub const LARGE_MEDIA_FIELDS: [&str; 4] = ["photo", "photos", "documents", "invoice_photos"];

/// Strings in media fields longer than this are not kept in snapshots.
/// Roughly 250KB of decoded data.
pub const LARGE_MEDIA_LIMIT: usize = 350_000;

pub const DATA_TOO_LARGE: &str = "[DATA_TOO_LARGE]";

/// `created_by` of snapshots taken by the scheduler
pub const SYSTEM_INITIATOR: &str = "SYSTEM_AUTO";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupKind {
    Automatic,
    Manual,
}

impl Default for BackupKind {
    fn default() -> Self {
        Self::Manual
    }
}

/// Who asked for a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum BackupInitiator {
    Scheduler,
    Admin(ID),
}

impl BackupInitiator {
    pub fn kind(&self) -> BackupKind {
        match self {
            Self::Scheduler => BackupKind::Automatic,
            Self::Admin(_) => BackupKind::Manual,
        }
    }

    pub fn created_by(&self) -> String {
        match self {
            Self::Scheduler => SYSTEM_INITIATOR.into(),
            Self::Admin(user_id) => user_id.as_string(),
        }
    }
}

/// Summary record of a snapshot
#[derive(Debug, Clone)]
pub struct BackupSnapshot {
    pub id: ID,
    /// Opaque token shared with the chunks. Missing on legacy snapshots,
    /// see `BackupSnapshot::effective_id`.
    pub backup_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub kind: BackupKind,
    pub collections: Vec<String>,
    pub size_mb: f64,
    /// Legacy snapshots embedded their data as `data.collections`
    pub legacy_data: Option<Document>,
}

impl BackupSnapshot {
    pub fn new(initiator: &BackupInitiator, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            backup_id: Some(uuid::Uuid::new_v4().to_string()),
            created_at,
            created_by: initiator.created_by(),
            kind: initiator.kind(),
            collections: Vec::new(),
            size_mb: 0.0,
            legacy_data: None,
        }
    }

    /// The id chunks are stored under
    pub fn effective_id(&self) -> String {
        self.backup_id
            .clone()
            .unwrap_or_else(|| self.id.as_string())
    }

    /// Collections of a legacy snapshot. Entries that are not lists, like
    /// the error documents old snapshots wrote for failed collections, are
    /// left out.
    pub fn legacy_collections(&self) -> Vec<(String, Vec<Document>)> {
        let collections = match self
            .legacy_data
            .as_ref()
            .and_then(|data| data.get_document("collections").ok())
        {
            Some(collections) => collections,
            None => return Vec::new(),
        };

        collections
            .iter()
            .filter_map(|(name, docs)| match docs {
                Bson::Array(docs) => Some((
                    name.clone(),
                    docs.iter()
                        .filter_map(|doc| doc.as_document().cloned())
                        .collect(),
                )),
                _ => None,
            })
            .collect()
    }
}

/// The documents of one collection within a snapshot
#[derive(Debug, Clone)]
pub struct BackupChunk {
    pub id: ID,
    pub backup_id: String,
    pub collection_name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub documents: Vec<Document>,
    pub doc_count: u64,
}

impl BackupChunk {
    pub fn new(snapshot: &BackupSnapshot, collection_name: &str, documents: Vec<Document>) -> Self {
        Self {
            id: Default::default(),
            backup_id: snapshot.effective_id(),
            collection_name: collection_name.into(),
            created_at: snapshot.created_at,
            created_by: snapshot.created_by.clone(),
            doc_count: documents.len() as u64,
            documents,
        }
    }

    /// Encoded size of the snapshotted documents
    pub fn size_bytes(&self) -> usize {
        self.documents.iter().map(encoded_len).sum()
    }
}

pub fn is_restorable_collection(name: &str) -> bool {
    !BACKUP_METADATA_COLLECTIONS.contains(&name)
}

fn encoded_len(doc: &Document) -> usize {
    let mut buf = Vec::new();
    match doc.to_writer(&mut buf) {
        Ok(_) => buf.len(),
        Err(_) => 0,
    }
}

/// Megabytes rounded to two decimals
pub fn size_in_mb(bytes: usize) -> f64 {
    (bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0
}

fn format_datetime(dt: &bson::DateTime) -> String {
    Utc.timestamp_millis_opt(dt.timestamp_millis())
        .single()
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Replaces values without a plain JSON representation
fn snapshot_value(value: Bson) -> Bson {
    match value {
        Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
        Bson::DateTime(dt) => Bson::String(format_datetime(&dt)),
        Bson::Binary(_) => Bson::Null,
        Bson::Array(values) => Bson::Array(values.into_iter().map(snapshot_value).collect()),
        Bson::Document(doc) => Bson::Document(
            doc.into_iter()
                .map(|(k, v)| (k, snapshot_value(v)))
                .collect(),
        ),
        value @ (Bson::Null
        | Bson::Boolean(_)
        | Bson::String(_)
        | Bson::Double(_)
        | Bson::Int32(_)
        | Bson::Int64(_)) => value,
        other => Bson::String(other.to_string()),
    }
}

fn is_large(value: &Bson) -> bool {
    matches!(value, Bson::String(s) if s.chars().count() > LARGE_MEDIA_LIMIT)
}

fn redact_large_media(value: Bson) -> Bson {
    match value {
        value if is_large(&value) => Bson::String(DATA_TOO_LARGE.into()),
        Bson::Array(items) => Bson::Array(
            items
                .into_iter()
                .map(|item| match item {
                    item if is_large(&item) => Bson::String(DATA_TOO_LARGE.into()),
                    Bson::Document(doc) => Bson::Document(
                        doc.into_iter()
                            .map(|(k, v)| {
                                if is_large(&v) {
                                    (k, Bson::String(DATA_TOO_LARGE.into()))
                                } else {
                                    (k, snapshot_value(v))
                                }
                            })
                            .collect(),
                    ),
                    item => snapshot_value(item),
                })
                .collect(),
        ),
        value => snapshot_value(value),
    }
}

/// Converts a stored document into its snapshot form
pub fn snapshot_document(doc: Document) -> Document {
    doc.into_iter()
        .map(|(key, value)| {
            if LARGE_MEDIA_FIELDS.contains(&key.as_str()) {
                (key, redact_large_media(value))
            } else {
                (key, snapshot_value(value))
            }
        })
        .collect()
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| Utc.from_utc_datetime(&dt))
        })
}

/// Converts a snapshotted document back into its stored form, turning the
/// id and the timestamps back into native values where they parse.
pub fn restore_document(mut doc: Document) -> Document {
    if let Ok(id) = doc.get_str("_id") {
        if let Ok(oid) = ObjectId::parse_str(id) {
            doc.insert("_id", oid);
        }
    }
    for key in ["created_at", "updated_at"] {
        let parsed = doc.get_str(key).ok().and_then(parse_datetime);
        if let Some(dt) = parsed {
            doc.insert(key, bson::DateTime::from_millis(dt.timestamp_millis()));
        }
    }
    doc
}

#[cfg(test)]
mod test {
    use super::*;
    use mongodb::bson::{doc, spec::BinarySubtype, Binary};

    fn big_string() -> String {
        "a".repeat(LARGE_MEDIA_LIMIT + 1)
    }

    #[test]
    fn snapshot_replaces_non_json_values() {
        let oid = ObjectId::new();
        let created = bson::DateTime::from_millis(1_736_478_000_123);
        let raw = Binary {
            subtype: BinarySubtype::Generic,
            bytes: vec![1, 2, 3],
        };
        let doc = doc! {
            "_id": oid,
            "name": "Relámpago",
            "created_at": created,
            "raw": raw,
            "nested": { "ref": oid, "values": [created, 3, "x"] },
            "amount": 12.5,
        };

        let snapshot = snapshot_document(doc);
        assert_eq!(snapshot.get_str("_id").unwrap(), oid.to_hex());
        assert_eq!(
            snapshot.get_str("created_at").unwrap(),
            "2025-01-10T03:00:00.123Z"
        );
        assert_eq!(snapshot.get("raw"), Some(&Bson::Null));
        let nested = snapshot.get_document("nested").unwrap();
        assert_eq!(nested.get_str("ref").unwrap(), oid.to_hex());
        assert_eq!(
            nested.get_array("values").unwrap()[0],
            Bson::String("2025-01-10T03:00:00.123Z".into())
        );
        assert_eq!(snapshot.get_f64("amount").unwrap(), 12.5);
    }

    #[test]
    fn snapshot_redacts_large_media_only() {
        let doc = doc! {
            "photo": big_string(),
            "photos": [big_string(), "small"],
            "documents": [{ "name": "passport.pdf", "data": big_string() }],
            "notes": big_string(),
        };

        let snapshot = snapshot_document(doc);
        assert_eq!(snapshot.get_str("photo").unwrap(), DATA_TOO_LARGE);
        let photos = snapshot.get_array("photos").unwrap();
        assert_eq!(photos[0], Bson::String(DATA_TOO_LARGE.into()));
        assert_eq!(photos[1], Bson::String("small".into()));
        let document = snapshot.get_array("documents").unwrap()[0]
            .as_document()
            .unwrap();
        assert_eq!(document.get_str("name").unwrap(), "passport.pdf");
        assert_eq!(document.get_str("data").unwrap(), DATA_TOO_LARGE);
        assert_eq!(
            snapshot.get_str("notes").unwrap().len(),
            LARGE_MEDIA_LIMIT + 1
        );
    }

    #[test]
    fn restore_reverses_ids_and_timestamps() {
        let oid = ObjectId::new();
        let created = bson::DateTime::from_millis(1_736_478_000_123);
        let original = doc! {
            "_id": oid,
            "user_id": "65a1b2c3d4e5f6a7b8c9d0e1",
            "created_at": created,
            "updated_at": created,
        };

        let restored = restore_document(snapshot_document(original.clone()));
        assert_eq!(restored, original);
    }

    #[test]
    fn restore_accepts_naive_timestamps_and_keeps_unparsable_values() {
        let restored = restore_document(doc! {
            "_id": "legacy-id",
            "created_at": "2024-05-01T10:00:00.250000",
            "updated_at": "yesterday",
        });
        assert_eq!(restored.get_str("_id").unwrap(), "legacy-id");
        assert_eq!(
            restored.get_datetime("created_at").unwrap().timestamp_millis(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap().timestamp_millis() + 250
        );
        assert_eq!(restored.get_str("updated_at").unwrap(), "yesterday");
    }

    #[test]
    fn legacy_collections_skip_error_entries() {
        let mut snapshot = BackupSnapshot::new(&BackupInitiator::Scheduler, Utc::now());
        snapshot.backup_id = None;
        snapshot.legacy_data = Some(doc! {
            "collections": {
                "horses": [{ "name": "Relámpago" }],
                "riders": { "error": "failed" },
            }
        });

        let collections = snapshot.legacy_collections();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].0, "horses");
        assert_eq!(collections[0].1.len(), 1);
        assert_eq!(snapshot.effective_id(), snapshot.id.as_string());
    }

    #[test]
    fn initiator_decides_kind_and_author() {
        let admin = ID::new();
        let snapshot = BackupSnapshot::new(&BackupInitiator::Admin(admin), Utc::now());
        assert_eq!(snapshot.kind, BackupKind::Manual);
        assert_eq!(snapshot.created_by, admin.as_string());
        assert!(snapshot.backup_id.is_some());

        let snapshot = BackupSnapshot::new(&BackupInitiator::Scheduler, Utc::now());
        assert_eq!(snapshot.kind, BackupKind::Automatic);
        assert_eq!(snapshot.created_by, SYSTEM_INITIATOR);
    }

    #[test]
    fn sizes_are_rounded_megabytes() {
        assert_eq!(size_in_mb(0), 0.0);
        assert_eq!(size_in_mb(1024 * 1024), 1.0);
        assert_eq!(size_in_mb(1024 * 1024 + 1024 * 1024 / 3), 1.33);
    }
}
