mod mongo;

use herdbook_domain::{Horse, ID};
pub use mongo::MongoHorseRepo;

#[async_trait::async_trait]
pub trait IHorseRepo: Send + Sync {
    async fn insert(&self, horse: &Horse) -> anyhow::Result<()>;
    async fn save(&self, horse: &Horse) -> anyhow::Result<()>;
    /// Only finds the horse when it belongs to `user_id`
    async fn find(&self, horse_id: &ID, user_id: &ID) -> Option<Horse>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Horse>>;
    async fn find_many(&self, horse_ids: &[ID], user_id: &ID) -> anyhow::Result<Vec<Horse>>;
    async fn delete(&self, horse_id: &ID, user_id: &ID) -> Option<Horse>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::Utc;
    use herdbook_domain::{Horse, ID};

    fn horse(user_id: ID, name: &str) -> Horse {
        Horse {
            id: Default::default(),
            user_id,
            name: name.into(),
            breed: Some("PRE".into()),
            birth_date: None,
            color: None,
            notes: None,
            photo: None,
            photos: vec![],
            stabling_location: None,
            territorial_license: None,
            national_license: None,
            owner: None,
            documents: vec![],
            reminder_intervals: Default::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn scoped_to_owner() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let mut horse = horse(user_id, "Lucero");
        horse.reminder_intervals.insert("herrador".into(), 40);

        assert!(ctx.repos.horses.insert(&horse).await.is_ok());
        let res = ctx
            .repos
            .horses
            .find(&horse.id, &user_id)
            .await
            .expect("To find horse");
        assert_eq!(res.reminder_intervals.get("herrador"), Some(&40));
        assert!(ctx.repos.horses.find(&horse.id, &ID::new()).await.is_none());

        let other = self::horse(user_id, "Bruma");
        ctx.repos.horses.insert(&other).await.unwrap();
        let res = ctx
            .repos
            .horses
            .find_many(&[horse.id, ID::new()], &user_id)
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(ctx.repos.horses.find_by_user(&user_id).await.unwrap().len(), 2);

        assert!(ctx.repos.horses.delete(&horse.id, &ID::new()).await.is_none());
        assert!(ctx.repos.horses.delete(&horse.id, &user_id).await.is_some());
        assert!(ctx.repos.horses.find(&horse.id, &user_id).await.is_none());
    }
}
