use super::create_competition::CreateCompetitionUseCase;
use crate::reminder::CreateCompetitionRemindersUseCase;
use crate::shared::usecase::{execute, Subscriber};
use herdbook_domain::Competition;
use herdbook_infra::HerdbookContext;

pub struct CreateRemindersOnCompetitionCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateCompetitionUseCase> for CreateRemindersOnCompetitionCreated {
    async fn notify(&self, e: &Competition, ctx: &HerdbookContext) {
        let create_reminders = CreateCompetitionRemindersUseCase { competition: e };

        // Sideeffect, ignore result
        let _ = execute(create_reminders, ctx).await;
    }
}
