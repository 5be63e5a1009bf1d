mod mongo;

use crate::repos::shared::query_structs::{BudgetKey, BudgetQuery};
use herdbook_domain::{Budget, ID};
pub use mongo::MongoBudgetRepo;

#[async_trait::async_trait]
pub trait IBudgetRepo: Send + Sync {
    async fn insert(&self, budget: &Budget) -> anyhow::Result<()>;
    async fn save(&self, budget: &Budget) -> anyhow::Result<()>;
    async fn find_by_key(&self, key: &BudgetKey) -> Option<Budget>;
    async fn find_by(&self, query: BudgetQuery) -> anyhow::Result<Vec<Budget>>;
    async fn delete(&self, budget_id: &ID, user_id: &ID) -> Option<Budget>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, BudgetKey, BudgetQuery};
    use chrono::Utc;
    use herdbook_domain::{Budget, EntityType, ID};

    #[tokio::test]
    async fn finds_budget_by_key() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let budget = Budget {
            id: Default::default(),
            user_id,
            entity_type: EntityType::Horse,
            entity_id: None,
            category: Some("pupilaje".into()),
            month: 3,
            year: 2025,
            amount: 450.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        ctx.repos.budgets.insert(&budget).await.unwrap();

        let mut key = BudgetKey {
            user_id,
            entity_type: EntityType::Horse,
            entity_id: None,
            category: Some("pupilaje".into()),
            month: 3,
            year: 2025,
        };
        let found = ctx.repos.budgets.find_by_key(&key).await.expect("To find budget");
        assert_eq!(found.id, budget.id);

        key.category = None;
        assert!(ctx.repos.budgets.find_by_key(&key).await.is_none());

        let res = ctx
            .repos
            .budgets
            .find_by(BudgetQuery {
                user_id,
                entity_type: Some(EntityType::Horse),
                entity_id: None,
                month: Some(3),
                year: None,
            })
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].amount, 450.0);
    }
}
