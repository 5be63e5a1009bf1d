use super::create_expense::CreateExpenseUseCase;
use crate::reminder::CreateExpenseRemindersUseCase;
use crate::shared::usecase::{execute, Subscriber};
use herdbook_domain::Expense;
use herdbook_infra::HerdbookContext;

pub struct CreateRemindersOnExpenseCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateExpenseUseCase> for CreateRemindersOnExpenseCreated {
    async fn notify(&self, e: &Expense, ctx: &HerdbookContext) {
        let create_reminders = CreateExpenseRemindersUseCase { expense: e };

        // Sideeffect, ignore result
        let _ = execute(create_reminders, ctx).await;
    }
}
