use super::occurrences::{find_subject, schedule_occurrence, ScheduleError};
use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::complete_reminder::{APIResponse, PathParams, QueryParams};
use herdbook_domain::{date::format_date, Occurrence, Reminder, ID};
use herdbook_infra::{HerdbookContext, PreNoticeKey};
use tracing::warn;

pub async fn complete_reminder_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CompleteReminderUseCase {
        user_id: user.id,
        reminder_id: path.reminder_id,
        reschedule: query.reschedule.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(res.completed.id, res.next_reminder))
        })
        .map_err(HerdbookError::from)
}

/// Marks the reminder as done today and, when asked to, schedules the next
/// occurrence counting from today
#[derive(Debug)]
pub struct CompleteReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
    pub reschedule: bool,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub completed: Reminder,
    pub next_reminder: Option<Reminder>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Reminder not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CompleteReminderUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "CompleteReminder";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let today = ctx.today();
        reminder.complete(today, ctx.now());
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        ctx.repos
            .reminders
            .delete_pre_notices(&PreNoticeKey {
                user_id: self.user_id,
                entity_id: reminder.entity_id,
                category: reminder.category.clone(),
                parent_due_date: format_date(&reminder.due_date),
            })
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let category = match &reminder.category {
            Some(category) if self.reschedule => category,
            _ => {
                return Ok(UseCaseResponse {
                    completed: reminder,
                    next_reminder: None,
                })
            }
        };

        let details = find_subject(
            &self.user_id,
            reminder.entity_type,
            reminder.entity_id,
            ctx,
        )
        .await;
        let occurrence = Occurrence {
            subject: &details.subject,
            category,
            last_done: today,
            interval_days: reminder
                .interval_days
                .unwrap_or_else(|| details.interval(category)),
            priority: reminder.priority,
            due_time: reminder.due_time.clone(),
        };
        let next_reminder = match schedule_occurrence(&occurrence, ctx).await {
            Ok(next_reminder) => Some(next_reminder),
            Err(ScheduleError::InvalidDate(e)) => {
                warn!("Not rescheduling reminder {}: {}", reminder.id, e);
                None
            }
            Err(ScheduleError::StorageError) => return Err(UseCaseError::StorageError),
        };

        Ok(UseCaseResponse {
            completed: reminder,
            next_reminder,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reminder::CreateExpenseRemindersUseCase;
    use crate::shared::test_utils::{insert_expense, insert_horse, setup_context_at};
    use chrono::NaiveDate;
    use herdbook_domain::{EntityType, Priority};
    use herdbook_infra::ReminderQuery;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[actix_web::test]
    async fn reschedules_from_today_and_replaces_pre_notice() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "vacunas",
            90.0,
            "2025-03-01",
        )
        .await;
        let created = CreateExpenseRemindersUseCase { expense: &expense }
            .execute(&ctx)
            .await
            .unwrap();
        let vaccination = &created[0];
        assert_eq!(vaccination.due_date, date(2025, 8, 28));

        let mut usecase = CompleteReminderUseCase {
            user_id,
            reminder_id: vaccination.id,
            reschedule: true,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.completed.is_completed);
        assert_eq!(res.completed.completed_date, Some(date(2025, 3, 10)));

        let next = res.next_reminder.unwrap();
        assert_eq!(next.due_date, date(2025, 9, 6));
        assert_eq!(next.priority, Priority::Important);
        assert_eq!(next.last_completed_date, Some(date(2025, 3, 10)));

        let pending = ctx
            .repos
            .reminders
            .find_by(ReminderQuery {
                is_completed: Some(false),
                ..ReminderQuery::by_user(user_id)
            })
            .await
            .unwrap();
        // The old pre-notice is gone, the new reminder has its own
        assert_eq!(pending.len(), 2);
        assert!(pending
            .iter()
            .all(|r| !r.is_pre_notice || r.parent_due_date == Some(date(2025, 9, 6))));
    }

    #[actix_web::test]
    async fn stored_interval_wins_over_table() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let mut reminder = Reminder::new(
            user_id,
            "Herrador: Tornado".into(),
            date(2025, 3, 9),
            EntityType::Horse,
            ctx.now(),
        );
        reminder.category = Some("herrador".into());
        reminder.interval_days = Some(21);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = CompleteReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            reschedule: true,
        };
        let next = usecase.execute(&ctx).await.unwrap().next_reminder.unwrap();
        assert_eq!(next.due_date, date(2025, 3, 31));
        assert!(next.is_automatic);
    }

    #[actix_web::test]
    async fn no_reschedule_without_category_or_when_declined() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let mut reminder = Reminder::new(
            user_id,
            "Llamar al club".into(),
            date(2025, 3, 12),
            EntityType::Rider,
            ctx.now(),
        );
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = CompleteReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            reschedule: true,
        };
        assert!(usecase.execute(&ctx).await.unwrap().next_reminder.is_none());

        reminder.id = ID::new();
        reminder.category = Some("licencias".into());
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        let mut usecase = CompleteReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            reschedule: false,
        };
        assert!(usecase.execute(&ctx).await.unwrap().next_reminder.is_none());
    }

    #[actix_web::test]
    async fn completing_a_pre_notice_schedules_the_next_occurrence() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "veterinario",
            120.0,
            "2025-03-01",
        )
        .await;
        CreateExpenseRemindersUseCase { expense: &expense }
            .execute(&ctx)
            .await
            .unwrap();
        let pre_notice = ctx
            .repos
            .reminders
            .find_by(ReminderQuery::by_user(user_id))
            .await
            .unwrap()
            .into_iter()
            .find(|r| r.is_pre_notice)
            .unwrap();
        assert_eq!(pre_notice.category.as_deref(), Some("veterinario"));

        let mut usecase = CompleteReminderUseCase {
            user_id,
            reminder_id: pre_notice.id,
            reschedule: true,
        };
        let next = usecase.execute(&ctx).await.unwrap().next_reminder.unwrap();
        assert_eq!(next.due_date, date(2026, 3, 10));
        assert_eq!(next.category.as_deref(), Some("veterinario"));
        assert_eq!(next.interval_days, Some(365));
        assert!(!next.is_pre_notice);
    }

    #[actix_web::test]
    async fn stored_interval_out_of_range_completes_without_next() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let mut reminder = Reminder::new(
            user_id,
            "Herrador: Tornado".into(),
            date(2025, 3, 9),
            EntityType::Horse,
            ctx.now(),
        );
        reminder.category = Some("herrador".into());
        reminder.interval_days = Some(9_000_000_000_000);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = CompleteReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            reschedule: true,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.completed.is_completed);
        assert!(res.next_reminder.is_none());
    }

    #[actix_web::test]
    async fn unknown_reminder_is_not_found() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let mut usecase = CompleteReminderUseCase {
            user_id: ID::new(),
            reminder_id: ID::new(),
            reschedule: true,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::NotFound);
    }
}
