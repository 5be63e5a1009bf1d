use super::IReminderRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::{optional_id, user_filter, AutomaticReminderKey, PreNoticeKey, ReminderQuery},
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, NaiveDate, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Bson, Document},
    reminder::DEFAULT_REMINDER_TIME,
    EntityType, Priority, Reminder, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "reminders";

pub struct MongoReminderRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoReminderRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(self.store.as_ref(), COLLECTION, reminder).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::save::<_, ReminderMongo>(self.store.as_ref(), COLLECTION, reminder).await
    }

    async fn find(&self, reminder_id: &ID, user_id: &ID) -> Option<Reminder> {
        let filter = mongo_repo::get_owned_filter(reminder_id, user_id);
        mongo_repo::find_one_by::<_, ReminderMongo>(self.store.as_ref(), COLLECTION, filter)
            .await
    }

    async fn find_by(&self, query: ReminderQuery) -> anyhow::Result<Vec<Reminder>> {
        let mut filter = user_filter(&query.user_id);
        if let Some(entity_type) = &query.entity_type {
            filter.insert("entity_type", entity_type.as_str());
        }
        if let Some(entity_id) = &query.entity_id {
            filter.insert("entity_id", entity_id.as_string());
        }
        if let Some(is_completed) = query.is_completed {
            filter.insert("is_completed", is_completed);
        }
        query.dates.apply("reminder_date", &mut filter);

        let mut find = FindQuery::sorted("reminder_date", SortOrder::Ascending);
        find.limit = query.limit;
        mongo_repo::find_many_by::<_, ReminderMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            find,
        )
        .await
    }

    async fn find_automatic(&self, key: &AutomaticReminderKey) -> Option<Reminder> {
        let filter = doc! {
            "user_id": key.user_id.as_string(),
            "entity_type": key.entity_type.as_str(),
            "entity_id": optional_id(&key.entity_id),
            "category": key.category.clone(),
            "reminder_date": key.due_date.clone(),
            "is_automatic": true,
        };
        mongo_repo::find_one_by::<_, ReminderMongo>(self.store.as_ref(), COLLECTION, filter)
            .await
    }

    async fn delete_pre_notices(&self, key: &PreNoticeKey) -> anyhow::Result<u64> {
        let category = match &key.category {
            Some(category) => Bson::String(category.clone()),
            None => Bson::Null,
        };
        let filter = doc! {
            "user_id": key.user_id.as_string(),
            "is_preaviso": true,
            "parent_reminder_date": key.parent_due_date.clone(),
            "entity_id": optional_id(&key.entity_id),
            "category": category,
        };
        mongo_repo::delete_many_by(self.store.as_ref(), COLLECTION, filter).await
    }

    async fn delete(&self, reminder_id: &ID, user_id: &ID) -> Option<Reminder> {
        let filter = mongo_repo::get_owned_filter(reminder_id, user_id);
        mongo_repo::delete::<_, ReminderMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

fn default_reminder_time() -> String {
    DEFAULT_REMINDER_TIME.into()
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: ObjectId,
    user_id: ID,
    title: String,
    #[serde(default)]
    description: Option<String>,
    reminder_date: NaiveDate,
    #[serde(default = "default_reminder_time")]
    reminder_time: String,
    #[serde(default)]
    entity_type: EntityType,
    #[serde(default)]
    entity_id: Option<ID>,
    #[serde(default)]
    competition_id: Option<ID>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    is_automatic: bool,
    #[serde(default)]
    is_completed: bool,
    #[serde(default)]
    completed_date: Option<NaiveDate>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    interval_days: Option<i64>,
    #[serde(default)]
    is_preaviso: bool,
    #[serde(default)]
    parent_reminder_date: Option<NaiveDate>,
    #[serde(default)]
    last_completed_date: Option<NaiveDate>,
    #[serde(default)]
    is_recurring_payment: bool,
    #[serde(default)]
    recurring_amount: Option<f64>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn to_domain(self) -> Reminder {
        Reminder {
            id: ID::from(self._id),
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            due_date: self.reminder_date,
            due_time: self.reminder_time,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            competition_id: self.competition_id,
            category: self.category,
            is_automatic: self.is_automatic,
            is_completed: self.is_completed,
            completed_date: self.completed_date,
            priority: self.priority,
            interval_days: self.interval_days,
            is_pre_notice: self.is_preaviso,
            parent_due_date: self.parent_reminder_date,
            last_completed_date: self.last_completed_date,
            is_recurring_payment: self.is_recurring_payment,
            recurring_amount: self.recurring_amount,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(r: &Reminder) -> Self {
        Self {
            _id: r.id.inner(),
            user_id: r.user_id,
            title: r.title.clone(),
            description: r.description.clone(),
            reminder_date: r.due_date,
            reminder_time: r.due_time.clone(),
            entity_type: r.entity_type,
            entity_id: r.entity_id,
            competition_id: r.competition_id,
            category: r.category.clone(),
            is_automatic: r.is_automatic,
            is_completed: r.is_completed,
            completed_date: r.completed_date,
            priority: r.priority,
            interval_days: r.interval_days,
            is_preaviso: r.is_pre_notice,
            parent_reminder_date: r.parent_due_date,
            last_completed_date: r.last_completed_date,
            is_recurring_payment: r.is_recurring_payment,
            recurring_amount: r.recurring_amount,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
