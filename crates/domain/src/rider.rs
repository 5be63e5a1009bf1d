use crate::{categories::ReminderIntervals, horse::AttachedDocument, shared::entity::ID};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Rider {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub photo: Option<String>,
    pub photos: Vec<String>,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub territorial_license: Option<String>,
    pub national_license: Option<String>,
    pub documents: Vec<AttachedDocument>,
    pub reminder_intervals: ReminderIntervals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
