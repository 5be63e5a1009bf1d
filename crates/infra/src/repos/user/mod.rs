mod mongo;

use herdbook_domain::{User, ID};
pub use mongo::MongoUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// Expects an already normalized email
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::Utc;
    use herdbook_domain::{Language, User};

    fn user(email: &str) -> User {
        User {
            id: Default::default(),
            email: User::normalize_email(email),
            password_hash: "hash".into(),
            name: "Marta".into(),
            language: Language::En,
            security_question: None,
            security_answer: None,
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_find_and_delete() {
        let ctx = setup_context().await;
        let mut user = user("Marta@Example.com");

        assert!(ctx.repos.users.insert(&user).await.is_ok());
        let res = ctx
            .repos
            .users
            .find_by_email("marta@example.com")
            .await
            .expect("To find user by email");
        assert_eq!(res.id, user.id);
        assert_eq!(res.language, Language::En);

        user.name = "Marta G.".into();
        assert!(ctx.repos.users.save(&user).await.is_ok());
        let res = ctx.repos.users.find(&user.id).await.expect("To find user");
        assert_eq!(res.name, "Marta G.");

        assert!(ctx.repos.users.delete(&user.id).await.is_some());
        assert!(ctx.repos.users.find(&user.id).await.is_none());
    }
}
