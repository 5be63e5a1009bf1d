use super::IExpenseRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::{user_filter, ExpenseQuery},
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    EntityType, Expense, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct MongoExpenseRepo {
    store: Arc<dyn IDocumentStore>,
    entity_type: EntityType,
}

impl MongoExpenseRepo {
    pub fn new(store: Arc<dyn IDocumentStore>, entity_type: EntityType) -> Self {
        Self { store, entity_type }
    }

    fn collection(&self) -> &'static str {
        match self.entity_type {
            EntityType::Rider => "rider_expenses",
            _ => "expenses",
        }
    }

    fn entity_field(&self) -> &'static str {
        match self.entity_type {
            EntityType::Rider => "rider_id",
            _ => "horse_id",
        }
    }
}

#[async_trait::async_trait]
impl IExpenseRepo for MongoExpenseRepo {
    fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    async fn insert(&self, expense: &Expense) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ExpenseMongo>(self.store.as_ref(), self.collection(), expense)
            .await
    }

    async fn save(&self, expense: &Expense) -> anyhow::Result<()> {
        mongo_repo::save::<_, ExpenseMongo>(self.store.as_ref(), self.collection(), expense).await
    }

    async fn find(&self, expense_id: &ID, user_id: &ID) -> Option<Expense> {
        let filter = mongo_repo::get_owned_filter(expense_id, user_id);
        mongo_repo::find_one_by::<_, ExpenseMongo>(self.store.as_ref(), self.collection(), filter)
            .await
    }

    async fn find_by(&self, query: ExpenseQuery) -> anyhow::Result<Vec<Expense>> {
        let mut filter = user_filter(&query.user_id);
        if let Some(entity_id) = &query.entity_id {
            filter.insert(self.entity_field(), entity_id.as_string());
        }
        if let Some(category) = &query.category {
            filter.insert("category", category.clone());
        }
        if let Some(supplier_id) = &query.supplier_id {
            filter.insert("supplier_id", supplier_id.as_string());
        }
        query.dates.apply("date", &mut filter);

        let mut find = FindQuery::sorted("date", SortOrder::Descending);
        find.limit = query.limit;
        mongo_repo::find_many_by::<_, ExpenseMongo>(
            self.store.as_ref(),
            self.collection(),
            filter,
            find,
        )
        .await
    }

    async fn delete(&self, expense_id: &ID, user_id: &ID) -> Option<Expense> {
        let filter = mongo_repo::get_owned_filter(expense_id, user_id);
        mongo_repo::delete::<_, ExpenseMongo>(self.store.as_ref(), self.collection(), filter)
            .await
    }
}

/// Horse expenses reference `horse_id`, rider expenses `rider_id`
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseMongo {
    _id: ObjectId,
    user_id: ID,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    horse_id: Option<ID>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rider_id: Option<ID>,
    category: String,
    #[serde(default)]
    custom_category: Option<String>,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    date: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    supplier_id: Option<ID>,
    #[serde(default)]
    invoice_photo: Option<String>,
    #[serde(default)]
    invoice_photos: Vec<String>,
    #[serde(default)]
    is_recurring: bool,
    #[serde(default = "default_create_reminder")]
    create_reminder: bool,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

fn default_create_reminder() -> bool {
    true
}

impl MongoDocument<Expense> for ExpenseMongo {
    fn to_domain(self) -> Expense {
        let (entity_type, entity_id) = match (self.horse_id, self.rider_id) {
            (Some(horse_id), _) => (EntityType::Horse, horse_id),
            (None, Some(rider_id)) => (EntityType::Rider, rider_id),
            (None, None) => (EntityType::Horse, ID::from(self._id)),
        };
        Expense {
            id: ID::from(self._id),
            user_id: self.user_id,
            entity_type,
            entity_id,
            category: self.category,
            custom_category: self.custom_category,
            amount: self.amount,
            date: self.date,
            description: self.description,
            provider: self.provider,
            supplier_id: self.supplier_id,
            invoice_photo: self.invoice_photo,
            invoice_photos: self.invoice_photos,
            is_recurring: self.is_recurring,
            create_reminder: self.create_reminder,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(expense: &Expense) -> Self {
        let (horse_id, rider_id) = match expense.entity_type {
            EntityType::Rider => (None, Some(expense.entity_id)),
            _ => (Some(expense.entity_id), None),
        };
        Self {
            _id: expense.id.inner(),
            user_id: expense.user_id,
            horse_id,
            rider_id,
            category: expense.category.clone(),
            custom_category: expense.custom_category.clone(),
            amount: expense.amount,
            date: expense.date.clone(),
            description: expense.description.clone(),
            provider: expense.provider.clone(),
            supplier_id: expense.supplier_id,
            invoice_photo: expense.invoice_photo.clone(),
            invoice_photos: expense.invoice_photos.clone(),
            is_recurring: expense.is_recurring,
            create_reminder: expense.create_reminder,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
