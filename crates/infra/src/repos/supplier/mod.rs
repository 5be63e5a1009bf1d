mod mongo;

use herdbook_domain::{Supplier, ID};
pub use mongo::MongoSupplierRepo;

#[async_trait::async_trait]
pub trait ISupplierRepo: Send + Sync {
    async fn insert(&self, supplier: &Supplier) -> anyhow::Result<()>;
    async fn save(&self, supplier: &Supplier) -> anyhow::Result<()>;
    async fn find(&self, supplier_id: &ID, user_id: &ID) -> Option<Supplier>;
    /// Sorted by name
    async fn find_by_user(
        &self,
        user_id: &ID,
        category: Option<&str>,
    ) -> anyhow::Result<Vec<Supplier>>;
    async fn delete(&self, supplier_id: &ID, user_id: &ID) -> Option<Supplier>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::Utc;
    use herdbook_domain::{Supplier, ID};

    fn supplier(user_id: ID, name: &str, category: &str) -> Supplier {
        Supplier {
            id: Default::default(),
            user_id,
            name: name.into(),
            category: Some(category.into()),
            custom_category: None,
            phone: None,
            email: None,
            address: None,
            city: Some("Jerez".into()),
            notes: None,
            contact_person: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn filters_by_category() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        for s in [
            supplier(user_id, "Piensos Sur", "alimentacion"),
            supplier(user_id, "Herrajes Ruiz", "herrador"),
            supplier(user_id, "Alfalfa Norte", "alimentacion"),
        ] {
            ctx.repos.suppliers.insert(&s).await.unwrap();
        }

        let res = ctx
            .repos
            .suppliers
            .find_by_user(&user_id, Some("alimentacion"))
            .await
            .unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].name, "Alfalfa Norte");

        let all = ctx.repos.suppliers.find_by_user(&user_id, None).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
