use crate::shared::usecase::UseCase;
use herdbook_domain::{
    reminder::{competition_countdown_reminders, entry_deadline_reminder},
    Competition, Reminder,
};
use herdbook_infra::HerdbookContext;
use tracing::warn;

/// Countdown reminders before a competition and before its entry deadline
#[derive(Debug)]
pub struct CreateCompetitionRemindersUseCase<'a> {
    pub competition: &'a Competition,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for CreateCompetitionRemindersUseCase<'a> {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompetitionReminders";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let competition = self.competition;
        let today = ctx.today();
        let now = ctx.now();

        let mut reminders = match competition_countdown_reminders(competition, today, now) {
            Ok(reminders) => reminders,
            Err(e) => {
                warn!(
                    "Skipping countdown reminders for competition {} with date {:?}: {}",
                    competition.id, competition.date, e
                );
                Vec::new()
            }
        };
        match entry_deadline_reminder(competition, today, now) {
            Ok(Some(reminder)) => reminders.push(reminder),
            Ok(None) => {}
            Err(e) => warn!(
                "Skipping entry deadline reminder for competition {} with deadline {:?}: {}",
                competition.id, competition.entry_deadline, e
            ),
        }

        for reminder in &reminders {
            ctx.repos
                .reminders
                .insert(reminder)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        Ok(reminders)
    }
}
