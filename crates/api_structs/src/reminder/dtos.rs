use chrono::{DateTime, NaiveDate, Utc};
use herdbook_domain::{EntityType, Priority, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderDTO {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: NaiveDate,
    pub reminder_time: String,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    pub competition_id: Option<ID>,
    pub category: Option<String>,
    pub is_automatic: bool,
    pub is_completed: bool,
    pub completed_date: Option<NaiveDate>,
    pub priority: Priority,
    pub interval_days: Option<i64>,
    pub is_preaviso: bool,
    pub parent_reminder_date: Option<NaiveDate>,
    pub last_completed_date: Option<NaiveDate>,
    pub is_recurring_payment: bool,
    pub recurring_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title,
            description: reminder.description,
            reminder_date: reminder.due_date,
            reminder_time: reminder.due_time,
            entity_type: reminder.entity_type,
            entity_id: reminder.entity_id,
            competition_id: reminder.competition_id,
            category: reminder.category,
            is_automatic: reminder.is_automatic,
            is_completed: reminder.is_completed,
            completed_date: reminder.completed_date,
            priority: reminder.priority,
            interval_days: reminder.interval_days,
            is_preaviso: reminder.is_pre_notice,
            parent_reminder_date: reminder.parent_due_date,
            last_completed_date: reminder.last_completed_date,
            is_recurring_payment: reminder.is_recurring_payment,
            recurring_amount: reminder.recurring_amount,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}
