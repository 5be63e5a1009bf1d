mod mongo;

use herdbook_domain::{HorseRiderAssociation, ID};
pub use mongo::MongoAssociationRepo;

#[async_trait::async_trait]
pub trait IAssociationRepo: Send + Sync {
    async fn insert(&self, association: &HorseRiderAssociation) -> anyhow::Result<()>;
    async fn find(&self, horse_id: &ID, rider_id: &ID) -> Option<HorseRiderAssociation>;
    async fn find_by_horse(&self, horse_id: &ID) -> anyhow::Result<Vec<HorseRiderAssociation>>;
    async fn find_by_rider(&self, rider_id: &ID) -> anyhow::Result<Vec<HorseRiderAssociation>>;
    async fn delete(
        &self,
        horse_id: &ID,
        rider_id: &ID,
        user_id: &ID,
    ) -> Option<HorseRiderAssociation>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::Utc;
    use herdbook_domain::{HorseRiderAssociation, ID};

    #[tokio::test]
    async fn links_horses_and_riders() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let horse_id = ID::new();
        let rider_id = ID::new();
        let association = HorseRiderAssociation {
            id: Default::default(),
            user_id,
            horse_id,
            rider_id,
            created_at: Utc::now(),
        };
        ctx.repos.associations.insert(&association).await.unwrap();

        assert!(ctx.repos.associations.find(&horse_id, &rider_id).await.is_some());
        assert_eq!(
            ctx.repos.associations.find_by_horse(&horse_id).await.unwrap()[0].rider_id,
            rider_id
        );
        assert_eq!(
            ctx.repos.associations.find_by_rider(&rider_id).await.unwrap()[0].horse_id,
            horse_id
        );

        assert!(ctx
            .repos
            .associations
            .delete(&horse_id, &rider_id, &ID::new())
            .await
            .is_none());
        assert!(ctx
            .repos
            .associations
            .delete(&horse_id, &rider_id, &user_id)
            .await
            .is_some());
        assert!(ctx.repos.associations.find(&horse_id, &rider_id).await.is_none());
    }
}
