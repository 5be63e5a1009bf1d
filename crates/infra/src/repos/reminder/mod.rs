mod mongo;

use crate::repos::shared::query_structs::{AutomaticReminderKey, PreNoticeKey, ReminderQuery};
use herdbook_domain::{Reminder, ID};
pub use mongo::MongoReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID, user_id: &ID) -> Option<Reminder>;
    /// Soonest first
    async fn find_by(&self, query: ReminderQuery) -> anyhow::Result<Vec<Reminder>>;
    async fn find_automatic(&self, key: &AutomaticReminderKey) -> Option<Reminder>;
    async fn delete_pre_notices(&self, key: &PreNoticeKey) -> anyhow::Result<u64>;
    async fn delete(&self, reminder_id: &ID, user_id: &ID) -> Option<Reminder>;
}

#[cfg(test)]
mod tests {
    use crate::{
        repos::shared::query_structs::DateRange, setup_context, AutomaticReminderKey,
        PreNoticeKey, ReminderQuery,
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use herdbook_domain::{EntityType, Priority, Reminder, ID};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn automatic(user_id: ID, horse_id: ID, due: &str) -> Reminder {
        let mut r = Reminder::new(
            user_id,
            "Herrador: Lucero".into(),
            date(due),
            EntityType::Horse,
            // Stored datetimes keep millisecond precision
            Utc.timestamp_millis_opt(1_735_000_000_000).unwrap(),
        );
        r.entity_id = Some(horse_id);
        r.category = Some("herrador".into());
        r.is_automatic = true;
        r.interval_days = Some(45);
        r
    }

    #[tokio::test]
    async fn stores_all_reminder_fields() {
        let ctx = setup_context().await;
        let mut reminder = automatic(ID::new(), ID::new(), "2025-04-10");
        reminder.priority = Priority::Important;
        reminder.last_completed_date = Some(date("2025-02-24"));
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let res = ctx
            .repos
            .reminders
            .find(&reminder.id, &reminder.user_id)
            .await
            .expect("To find reminder");
        assert_eq!(res, reminder);
    }

    #[tokio::test]
    async fn finds_duplicates_and_pre_notices() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let horse_id = ID::new();
        let reminder = automatic(user_id, horse_id, "2025-06-01");
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut pre_notice = automatic(user_id, horse_id, "2025-05-25");
        pre_notice.is_pre_notice = true;
        pre_notice.parent_due_date = Some(date("2025-06-01"));
        ctx.repos.reminders.insert(&pre_notice).await.unwrap();

        let key = AutomaticReminderKey {
            user_id,
            entity_type: EntityType::Horse,
            entity_id: Some(horse_id),
            category: "herrador".into(),
            due_date: "2025-06-01".into(),
        };
        assert_eq!(
            ctx.repos.reminders.find_automatic(&key).await.map(|r| r.id),
            Some(reminder.id)
        );

        let mut query = ReminderQuery::by_user(user_id);
        query.dates = DateRange::new(Some("2025-05-01".into()), Some("2025-05-31".into()));
        let res = ctx.repos.reminders.find_by(query).await.unwrap();
        assert_eq!(res.len(), 1);
        assert!(res[0].is_pre_notice);

        let deleted = ctx
            .repos
            .reminders
            .delete_pre_notices(&PreNoticeKey {
                user_id,
                entity_id: Some(horse_id),
                category: Some("herrador".into()),
                parent_due_date: "2025-06-01".into(),
            })
            .await
            .unwrap();
        assert_eq!(deleted, 1);
        let res = ctx
            .repos
            .reminders
            .find_by(ReminderQuery::by_user(user_id))
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, reminder.id);
    }
}
