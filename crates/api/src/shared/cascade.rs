use herdbook_domain::{
    bson::{doc, Bson},
    cascade::{owned_children, CascadeAction, OwnerKind},
    ID,
};
use herdbook_infra::HerdbookContext;
use tracing::info;

/// Removes or detaches everything the deleted record owned. Stops at the
/// first failing collection, what was already applied stays applied.
pub async fn cascade_delete(
    kind: OwnerKind,
    owner_id: &ID,
    user_id: &ID,
    ctx: &HerdbookContext,
) -> anyhow::Result<()> {
    for child in owned_children(kind) {
        let filter = child.filter(owner_id, user_id);
        match child.action {
            CascadeAction::Delete => {
                let deleted = ctx.repos.store.delete_many(child.collection, filter).await?;
                if deleted > 0 {
                    info!(
                        "Deleted {} documents in {} owned by {:?} {}",
                        deleted, child.collection, kind, owner_id
                    );
                }
            }
            CascadeAction::Detach(field) => {
                let mut fields = doc! {};
                fields.insert(field, Bson::Null);
                ctx.repos
                    .store
                    .set_fields(child.collection, filter, fields)
                    .await?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use herdbook_infra::setup_context;

    #[actix_web::test]
    async fn deletes_and_detaches_horse_children() {
        let ctx = setup_context().await;
        let user = ID::new();
        let horse = ID::new();
        let other_horse = ID::new();
        let store = &ctx.repos.store;

        store
            .insert_many(
                "expenses",
                vec![
                    doc! { "user_id": user.as_string(), "horse_id": horse.as_string() },
                    doc! { "user_id": user.as_string(), "horse_id": other_horse.as_string() },
                ],
            )
            .await
            .unwrap();
        store
            .insert_one(
                "palmares",
                doc! { "user_id": user.as_string(), "horse_id": horse.as_string(), "rider_id": "r" },
            )
            .await
            .unwrap();
        store
            .insert_one(
                "reminders",
                doc! {
                    "user_id": user.as_string(),
                    "entity_type": "horse",
                    "entity_id": horse.as_string(),
                },
            )
            .await
            .unwrap();

        cascade_delete(OwnerKind::Horse, &horse, &user, &ctx)
            .await
            .unwrap();

        assert_eq!(store.count("expenses", doc! {}).await.unwrap(), 1);
        assert_eq!(store.count("reminders", doc! {}).await.unwrap(), 0);
        let palmares = store.find_one("palmares", doc! {}).await.unwrap().unwrap();
        assert_eq!(palmares.get("horse_id"), Some(&Bson::Null));
        assert_eq!(palmares.get_str("rider_id").unwrap(), "r");
    }

    #[actix_web::test]
    async fn user_cascade_leaves_other_users_alone() {
        let ctx = setup_context().await;
        let user = ID::new();
        let other = ID::new();
        let store = &ctx.repos.store;
        for collection in ["horses", "riders", "budgets"] {
            store
                .insert_many(
                    collection,
                    vec![
                        doc! { "user_id": user.as_string() },
                        doc! { "user_id": other.as_string() },
                    ],
                )
                .await
                .unwrap();
        }

        cascade_delete(OwnerKind::User, &user, &user, &ctx)
            .await
            .unwrap();

        for collection in ["horses", "riders", "budgets"] {
            let left = store.find(collection, doc! {}, Default::default()).await.unwrap();
            assert_eq!(left.len(), 1);
            assert_eq!(left[0].get_str("user_id").unwrap(), other.as_string());
        }
    }
}
