use crate::dtos::ReminderDTO;
use herdbook_domain::{EntityType, Priority, Reminder, ID};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Serialize)]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReminderPathParams {
    pub reminder_id: ID,
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub title: String,
        /// `YYYY-MM-DD`
        pub reminder_date: String,
        pub entity_type: EntityType,
        #[serde(default)]
        pub description: Option<String>,
        /// `HH:MM`, defaults to 18:00
        #[serde(default)]
        pub reminder_time: Option<String>,
        #[serde(default)]
        pub entity_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub is_automatic: bool,
        #[serde(default)]
        pub is_completed: bool,
        #[serde(default)]
        pub competition_id: Option<ID>,
        #[serde(default)]
        pub priority: Option<Priority>,
        #[serde(default)]
        pub interval_days: Option<i64>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub entity_type: Option<EntityType>,
        #[serde(default)]
        pub entity_id: Option<ID>,
        #[serde(default)]
        pub is_completed: Option<bool>,
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod get_upcoming_reminders {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        /// Days ahead of today, defaults to 7
        #[serde(default)]
        pub days: Option<i64>,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod complete_reminder {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        /// Schedule the next occurrence, defaults to true
        #[serde(default)]
        pub reschedule: Option<bool>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub completed_id: ID,
        pub next_reminder: Option<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(completed_id: ID, next_reminder: Option<Reminder>) -> Self {
            Self {
                message: "Reminder completed successfully".into(),
                completed_id,
                next_reminder: next_reminder.map(ReminderDTO::new),
            }
        }
    }

    pub type PathParams = ReminderPathParams;
}

pub mod get_reminder_intervals {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub default_intervals: BTreeMap<String, i64>,
        /// Categories that generate automatic reminders
        pub categories: Vec<String>,
    }
}

pub mod update_reminder {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub reminder_date: Option<String>,
        #[serde(default)]
        pub reminder_time: Option<String>,
        #[serde(default)]
        pub entity_type: Option<EntityType>,
        #[serde(default)]
        pub entity_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub is_completed: Option<bool>,
        #[serde(default)]
        pub priority: Option<Priority>,
        #[serde(default)]
        pub interval_days: Option<i64>,
    }

    pub type PathParams = ReminderPathParams;
    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;
    pub type APIResponse = ReminderResponse;
}
