use crate::{categories::ReminderIntervals, shared::entity::ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file attached to a horse or rider, base64 encoded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachedDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Horse {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub breed: Option<String>,
    pub birth_date: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
    pub photo: Option<String>,
    pub photos: Vec<String>,
    pub stabling_location: Option<String>,
    pub territorial_license: Option<String>,
    pub national_license: Option<String>,
    pub owner: Option<String>,
    pub documents: Vec<AttachedDocument>,
    pub reminder_intervals: ReminderIntervals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
