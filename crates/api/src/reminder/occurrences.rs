use herdbook_domain::{
    categories::{compute_interval, ReminderIntervals},
    date::{format_date, InvalidDateError},
    EntityType, Occurrence, Reminder, ReminderSubject, ID,
};
use herdbook_infra::{AutomaticReminderKey, HerdbookContext};

/// The subject of a recurring reminder together with its interval overrides
#[derive(Debug, Clone)]
pub struct SubjectDetails {
    pub subject: ReminderSubject,
    pub intervals: Option<ReminderIntervals>,
}

impl SubjectDetails {
    pub fn interval(&self, category: &str) -> i64 {
        compute_interval(self.intervals.as_ref(), category)
    }
}

/// Looks up the horse, rider or competition a reminder is about. A missing
/// entity leaves the name empty and the default intervals in place.
pub async fn find_subject(
    user_id: &ID,
    entity_type: EntityType,
    entity_id: Option<ID>,
    ctx: &HerdbookContext,
) -> SubjectDetails {
    let (entity_name, intervals) = match (entity_type, entity_id) {
        (EntityType::Horse, Some(id)) => match ctx.repos.horses.find(&id, user_id).await {
            Some(horse) => (horse.name, Some(horse.reminder_intervals)),
            None => (String::new(), None),
        },
        (EntityType::Rider, Some(id)) => match ctx.repos.riders.find(&id, user_id).await {
            Some(rider) => (rider.name, Some(rider.reminder_intervals)),
            None => (String::new(), None),
        },
        (EntityType::Competition, Some(id)) => {
            match ctx.repos.competitions.find(&id, user_id).await {
                Some(competition) => (competition.name, None),
                None => (String::new(), None),
            }
        }
        (_, None) => (String::new(), None),
    };

    SubjectDetails {
        subject: ReminderSubject {
            user_id: *user_id,
            entity_type,
            entity_id,
            entity_name,
        },
        intervals,
    }
}

#[derive(Debug)]
pub enum ScheduleError {
    InvalidDate(InvalidDateError),
    StorageError,
}

/// Stores the reminder of the occurrence and its pre-notice. When an
/// automatic reminder for the same subject, category and day exists already
/// that one is returned and nothing is stored.
pub async fn schedule_occurrence(
    occurrence: &Occurrence<'_>,
    ctx: &HerdbookContext,
) -> Result<Reminder, ScheduleError> {
    let subject = occurrence.subject;
    let due_date = occurrence.due_date().map_err(ScheduleError::InvalidDate)?;
    let key = AutomaticReminderKey {
        user_id: subject.user_id,
        entity_type: subject.entity_type,
        entity_id: subject.entity_id,
        category: occurrence.category.to_string(),
        due_date: format_date(&due_date),
    };
    if let Some(existing) = ctx.repos.reminders.find_automatic(&key).await {
        return Ok(existing);
    }

    let now = ctx.now();
    let reminder = occurrence
        .reminder(now)
        .map_err(ScheduleError::InvalidDate)?;
    ctx.repos
        .reminders
        .insert(&reminder)
        .await
        .map_err(|_| ScheduleError::StorageError)?;

    if let Some(pre_notice) = occurrence.pre_notice(ctx.today(), now) {
        ctx.repos
            .reminders
            .insert(&pre_notice)
            .await
            .map_err(|_| ScheduleError::StorageError)?;
    }

    Ok(reminder)
}
