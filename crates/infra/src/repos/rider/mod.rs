mod mongo;

use herdbook_domain::{Rider, ID};
pub use mongo::MongoRiderRepo;

#[async_trait::async_trait]
pub trait IRiderRepo: Send + Sync {
    async fn insert(&self, rider: &Rider) -> anyhow::Result<()>;
    async fn save(&self, rider: &Rider) -> anyhow::Result<()>;
    /// Only finds the rider when it belongs to `user_id`
    async fn find(&self, rider_id: &ID, user_id: &ID) -> Option<Rider>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Rider>>;
    async fn find_many(&self, rider_ids: &[ID], user_id: &ID) -> anyhow::Result<Vec<Rider>>;
    async fn delete(&self, rider_id: &ID, user_id: &ID) -> Option<Rider>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::Utc;
    use herdbook_domain::{AttachedDocument, Rider, ID};

    #[tokio::test]
    async fn create_update_and_delete() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let mut rider = Rider {
            id: Default::default(),
            user_id,
            name: "Lucía".into(),
            photo: None,
            photos: vec![],
            birth_date: Some("2008-04-02".into()),
            phone: None,
            email: None,
            notes: None,
            territorial_license: Some("AND-123".into()),
            national_license: None,
            documents: vec![],
            reminder_intervals: Default::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        ctx.repos.riders.insert(&rider).await.unwrap();

        rider.documents.push(AttachedDocument {
            name: "licencia.pdf".into(),
            data: "aGVsbG8=".into(),
            uploaded_at: None,
        });
        ctx.repos.riders.save(&rider).await.unwrap();

        let res = ctx
            .repos
            .riders
            .find(&rider.id, &user_id)
            .await
            .expect("To find rider");
        assert_eq!(res.documents.len(), 1);
        assert_eq!(res.territorial_license.as_deref(), Some("AND-123"));

        assert!(ctx.repos.riders.delete(&rider.id, &user_id).await.is_some());
        assert!(ctx
            .repos
            .riders
            .find_by_user(&user_id)
            .await
            .unwrap()
            .is_empty());
    }
}
