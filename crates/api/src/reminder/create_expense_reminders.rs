use super::occurrences::{find_subject, schedule_occurrence, ScheduleError};
use crate::shared::usecase::UseCase;
use herdbook_domain::{
    categories::is_automatic_category,
    date::parse_date,
    reminder::{recurring_payment_reminder, DEFAULT_REMINDER_TIME},
    EntityType, Expense, Occurrence, Priority, Reminder,
};
use herdbook_infra::HerdbookContext;
use tracing::warn;

/// Schedules the reminders a recorded expense implies: the next occurrence
/// of a recurring category and, for recurring horse expenses, the next
/// monthly payment.
#[derive(Debug)]
pub struct CreateExpenseRemindersUseCase<'a> {
    pub expense: &'a Expense,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for CreateExpenseRemindersUseCase<'a> {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateExpenseReminders";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let expense = self.expense;
        let wants_occurrence = expense.create_reminder && is_automatic_category(&expense.category);
        let wants_payment = expense.is_recurring && expense.entity_type == EntityType::Horse;
        if !wants_occurrence && !wants_payment {
            return Ok(Vec::new());
        }

        let details = find_subject(
            &expense.user_id,
            expense.entity_type,
            Some(expense.entity_id),
            ctx,
        )
        .await;
        let mut reminders = Vec::new();

        if wants_occurrence {
            match parse_date(&expense.date) {
                Ok(last_done) => {
                    let occurrence = Occurrence {
                        subject: &details.subject,
                        category: &expense.category,
                        last_done,
                        interval_days: details.interval(&expense.category),
                        priority: Priority::for_category(&expense.category),
                        due_time: DEFAULT_REMINDER_TIME.into(),
                    };
                    match schedule_occurrence(&occurrence, ctx).await {
                        Ok(reminder) => reminders.push(reminder),
                        Err(ScheduleError::InvalidDate(e)) => warn!(
                            "Skipping reminder for expense {}: {}",
                            expense.id, e
                        ),
                        Err(ScheduleError::StorageError) => {
                            return Err(UseCaseError::StorageError)
                        }
                    }
                }
                Err(e) => warn!(
                    "Skipping reminder for expense {} with date {:?}: {}",
                    expense.id, expense.date, e
                ),
            }
        }

        if wants_payment {
            match recurring_payment_reminder(&details.subject, expense, ctx.now()) {
                Ok(reminder) => {
                    ctx.repos
                        .reminders
                        .insert(&reminder)
                        .await
                        .map_err(|_| UseCaseError::StorageError)?;
                    reminders.push(reminder);
                }
                Err(e) => warn!(
                    "Skipping payment reminder for expense {} with date {:?}: {}",
                    expense.id, expense.date, e
                ),
            }
        }

        Ok(reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_expense, insert_horse, setup_context_at};
    use chrono::NaiveDate;
    use herdbook_domain::ID;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[actix_web::test]
    async fn vet_visit_gets_important_reminder_and_pre_notice() {
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

        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        let reminders = usecase.execute(&ctx).await.unwrap();
        assert_eq!(reminders.len(), 1);
        let reminder = &reminders[0];
        assert_eq!(reminder.title, "Veterinario: Tornado");
        assert_eq!(reminder.due_date, date(2026, 3, 1));
        assert_eq!(reminder.priority, Priority::Important);
        assert_eq!(reminder.interval_days, Some(365));
        assert_eq!(reminder.last_completed_date, Some(date(2025, 3, 1)));

        let pre_notice = ctx
            .repos
            .reminders
            .find_by(herdbook_infra::ReminderQuery::by_user(user_id))
            .await
            .unwrap()
            .into_iter()
            .find(|r| r.is_pre_notice)
            .unwrap();
        assert_eq!(pre_notice.due_date, date(2026, 2, 22));
        assert_eq!(pre_notice.parent_due_date, Some(date(2026, 3, 1)));
    }

    #[actix_web::test]
    async fn ignores_categories_outside_allow_list() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "pupilaje",
            300.0,
            "2025-03-01",
        )
        .await;

        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn respects_opt_out_and_bad_dates() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let mut expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "herrador",
            80.0,
            "2025-03-01",
        )
        .await;

        expense.create_reminder = false;
        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());

        expense.create_reminder = true;
        expense.date = "01/03/2025".into();
        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn short_interval_has_no_pre_notice() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "fisioterapia",
            60.0,
            "2025-03-05",
        )
        .await;

        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        usecase.execute(&ctx).await.unwrap();

        let reminders = ctx
            .repos
            .reminders
            .find_by(herdbook_infra::ReminderQuery::by_user(user_id))
            .await
            .unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].due_date, date(2025, 4, 4));
    }

    #[actix_web::test]
    async fn recurring_horse_expense_gets_payment_reminder() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let horse = insert_horse(&ctx, &user_id, "Tornado").await;
        let mut expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "pupilaje",
            350.0,
            "2025-03-01",
        )
        .await;
        expense.is_recurring = true;

        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        let reminders = usecase.execute(&ctx).await.unwrap();
        assert_eq!(reminders.len(), 1);
        assert!(reminders[0].is_recurring_payment);
        assert_eq!(reminders[0].recurring_amount, Some(350.0));
        assert_eq!(reminders[0].due_date, date(2025, 3, 31));
    }

    #[actix_web::test]
    async fn out_of_range_override_skips_the_reminder() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let mut horse = insert_horse(&ctx, &user_id, "Tornado").await;
        horse
            .reminder_intervals
            .insert("herrador".into(), 9_000_000_000_000);
        ctx.repos.horses.save(&horse).await.unwrap();
        let expense = insert_expense(
            &ctx,
            EntityType::Horse,
            &user_id,
            &horse.id,
            "herrador",
            80.0,
            "2025-03-01",
        )
        .await;

        let mut usecase = CreateExpenseRemindersUseCase { expense: &expense };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
        assert!(ctx
            .repos
            .reminders
            .find_by(herdbook_infra::ReminderQuery::by_user(user_id))
            .await
            .unwrap()
            .is_empty());
    }
}
