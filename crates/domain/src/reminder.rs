use crate::{
    categories::{category_name, is_important_category},
    competition::Competition,
    date::{add_days, format_date, format_date_dmy, parse_date, InvalidDateError},
    entity_type::EntityType,
    expense::Expense,
    shared::entity::ID,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REMINDER_TIME: &str = "18:00";
/// Time of day used for entry deadline reminders
pub const DEADLINE_REMINDER_TIME: &str = "10:00";
/// Days between a pre-notice and the reminder it announces
pub const PRE_NOTICE_DAYS: i64 = 7;
/// Only intervals longer than this get a pre-notice
pub const PRE_NOTICE_MIN_INTERVAL_DAYS: i64 = 30;
pub const RECURRING_PAYMENT_INTERVAL_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "importante")]
    Important,
    #[serde(rename = "urgente")]
    Urgent,
}

impl Priority {
    pub fn for_category(category: &str) -> Self {
        if is_important_category(category) {
            Self::Important
        } else {
            Self::Info
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Info
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    /// `HH:MM`
    pub due_time: String,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    pub competition_id: Option<ID>,
    pub category: Option<String>,
    pub is_automatic: bool,
    pub is_completed: bool,
    pub completed_date: Option<NaiveDate>,
    pub priority: Priority,
    pub interval_days: Option<i64>,
    pub is_pre_notice: bool,
    /// Due date of the reminder a pre-notice announces
    pub parent_due_date: Option<NaiveDate>,
    pub last_completed_date: Option<NaiveDate>,
    pub is_recurring_payment: bool,
    pub recurring_amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(
        user_id: ID,
        title: String,
        due_date: NaiveDate,
        entity_type: EntityType,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            title,
            description: None,
            due_date,
            due_time: DEFAULT_REMINDER_TIME.into(),
            entity_type,
            entity_id: None,
            competition_id: None,
            category: None,
            is_automatic: false,
            is_completed: false,
            completed_date: None,
            priority: Priority::Info,
            interval_days: None,
            is_pre_notice: false,
            parent_due_date: None,
            last_completed_date: None,
            is_recurring_payment: false,
            recurring_amount: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn complete(&mut self, today: NaiveDate, now: DateTime<Utc>) {
        self.is_completed = true;
        self.completed_date = Some(today);
        self.updated_at = now;
    }
}

/// The horse or rider a recurring reminder is about
#[derive(Debug, Clone)]
pub struct ReminderSubject {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    /// Empty when the entity could not be found
    pub entity_name: String,
}

/// One occurrence of a recurring category: it last happened on `last_done`
/// and is due again `interval_days` later.
#[derive(Debug, Clone)]
pub struct Occurrence<'a> {
    pub subject: &'a ReminderSubject,
    pub category: &'a str,
    pub last_done: NaiveDate,
    pub interval_days: i64,
    pub priority: Priority,
    pub due_time: String,
}

impl<'a> Occurrence<'a> {
    /// Fails when the interval pushes the date out of the calendar
    pub fn due_date(&self) -> Result<NaiveDate, InvalidDateError> {
        add_days(&self.last_done, self.interval_days)
    }

    fn category_name(&self) -> String {
        category_name(self.subject.entity_type, self.category)
    }

    fn base(&self, title: String, due_date: NaiveDate, now: DateTime<Utc>) -> Reminder {
        let mut reminder = Reminder::new(
            self.subject.user_id,
            title,
            due_date,
            self.subject.entity_type,
            now,
        );
        reminder.entity_id = self.subject.entity_id;
        reminder.category = Some(self.category.to_string());
        reminder.is_automatic = true;
        reminder
    }

    /// The reminder due at the next occurrence
    pub fn reminder(&self, now: DateTime<Utc>) -> Result<Reminder, InvalidDateError> {
        let category_name = self.category_name();
        let title = if self.subject.entity_name.is_empty() {
            format!("Recordatorio: {}", category_name)
        } else {
            format!("{}: {}", category_name, self.subject.entity_name)
        };
        let due_date = self.due_date()?;

        let mut reminder = self.base(title, due_date, now);
        reminder.description = Some(format!(
            "Última vez: {}. Próxima: {}",
            format_date(&self.last_done),
            format_date_dmy(&due_date)
        ));
        reminder.due_time = self.due_time.clone();
        reminder.priority = self.priority;
        reminder.interval_days = Some(self.interval_days);
        reminder.last_completed_date = Some(self.last_done);
        Ok(reminder)
    }

    /// An informational reminder `PRE_NOTICE_DAYS` before the occurrence.
    /// Only long intervals get one and never on a day that is not after
    /// `today`.
    pub fn pre_notice(&self, today: NaiveDate, now: DateTime<Utc>) -> Option<Reminder> {
        if self.interval_days <= PRE_NOTICE_MIN_INTERVAL_DAYS {
            return None;
        }
        let due_date = self.due_date().ok()?;
        let notice_date = add_days(&due_date, -PRE_NOTICE_DAYS).ok()?;
        if notice_date <= today {
            return None;
        }

        let category_name = self.category_name();
        let title = if self.subject.entity_name.is_empty() {
            format!("Próximamente: {}", category_name)
        } else {
            format!(
                "Próximamente: {} - {}",
                category_name, self.subject.entity_name
            )
        };

        let mut reminder = self.base(title, notice_date, now);
        reminder.description = Some(format!(
            "En {} días toca {}",
            PRE_NOTICE_DAYS,
            category_name.to_lowercase()
        ));
        reminder.is_pre_notice = true;
        reminder.parent_due_date = Some(due_date);
        Some(reminder)
    }
}

/// Monthly payment reminder for a recurring expense
pub fn recurring_payment_reminder(
    subject: &ReminderSubject,
    expense: &Expense,
    now: DateTime<Utc>,
) -> Result<Reminder, InvalidDateError> {
    let paid_on = parse_date(&expense.date)?;
    let category_name = category_name(subject.entity_type, &expense.category);

    let mut reminder = Reminder::new(
        subject.user_id,
        format!("Pago mensual: {} - {}", category_name, subject.entity_name),
        paid_on + Duration::days(RECURRING_PAYMENT_INTERVAL_DAYS),
        subject.entity_type,
        now,
    );
    reminder.description = Some(format!(
        "Gasto recurrente de {}€. Último pago: {}",
        expense.amount, expense.date
    ));
    reminder.entity_id = subject.entity_id;
    reminder.category = Some(expense.category.clone());
    reminder.is_automatic = true;
    reminder.priority = Priority::Important;
    reminder.interval_days = Some(RECURRING_PAYMENT_INTERVAL_DAYS);
    reminder.is_recurring_payment = true;
    reminder.recurring_amount = Some(expense.amount);
    Ok(reminder)
}

fn competition_reminder(
    competition: &Competition,
    title: String,
    description: String,
    due_date: NaiveDate,
    now: DateTime<Utc>,
) -> Reminder {
    let mut reminder = Reminder::new(
        competition.user_id,
        title,
        due_date,
        EntityType::Competition,
        now,
    );
    reminder.description = Some(description);
    reminder.entity_id = Some(competition.id);
    reminder.competition_id = Some(competition.id);
    reminder.is_automatic = true;
    reminder
}

/// Reminders one week, three days and one day before the competition.
/// Those not falling after `today` are left out.
pub fn competition_countdown_reminders(
    competition: &Competition,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Vec<Reminder>, InvalidDateError> {
    let date = parse_date(&competition.date)?;
    let name = &competition.name;
    let countdown = [
        (
            7,
            format!("Concurso en 1 semana: {}", name),
            format!("Preparar todo para el concurso en {}", competition.city),
        ),
        (
            3,
            format!("Concurso en 3 días: {}", name),
            "Verificar inscripciones y preparativos".to_string(),
        ),
        (
            1,
            format!("Mañana: {}", name),
            format!(
                "Preparar transporte y equipamiento para {}",
                competition.city
            ),
        ),
    ];

    Ok(countdown
        .into_iter()
        .map(|(days_before, title, description)| {
            (date - Duration::days(days_before), title, description)
        })
        .filter(|(due_date, _, _)| *due_date > today)
        .map(|(due_date, title, description)| {
            competition_reminder(competition, title, description, due_date, now)
        })
        .collect())
}

/// Reminder two days before the entry deadline, if there is one that is
/// still ahead.
pub fn entry_deadline_reminder(
    competition: &Competition,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Option<Reminder>, InvalidDateError> {
    let deadline = match &competition.entry_deadline {
        Some(deadline) if !deadline.is_empty() => deadline,
        _ => return Ok(None),
    };
    let due_date = parse_date(deadline)? - Duration::days(2);
    if due_date <= today {
        return Ok(None);
    }

    let mut reminder = competition_reminder(
        competition,
        format!("Inscripción cierra pronto: {}", competition.name),
        format!("Fecha límite de inscripción: {}", deadline),
        due_date,
        now,
    );
    reminder.due_time = DEADLINE_REMINDER_TIME.into();
    Ok(Some(reminder))
}
