mod mongo;

use crate::repos::shared::query_structs::ExpenseQuery;
use herdbook_domain::{EntityType, Expense, ID};
pub use mongo::MongoExpenseRepo;

/// Expenses of one entity type. Horse and rider expenses are kept in
/// separate collections, each served by its own instance.
#[async_trait::async_trait]
pub trait IExpenseRepo: Send + Sync {
    fn entity_type(&self) -> EntityType;
    async fn insert(&self, expense: &Expense) -> anyhow::Result<()>;
    async fn save(&self, expense: &Expense) -> anyhow::Result<()>;
    async fn find(&self, expense_id: &ID, user_id: &ID) -> Option<Expense>;
    /// Newest first
    async fn find_by(&self, query: ExpenseQuery) -> anyhow::Result<Vec<Expense>>;
    async fn delete(&self, expense_id: &ID, user_id: &ID) -> Option<Expense>;
}
