use super::IBudgetRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::{optional_id, user_filter, BudgetKey, BudgetQuery},
    store::{FindQuery, IDocumentStore},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Bson, Document},
    Budget, EntityType, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "budgets";

pub struct MongoBudgetRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoBudgetRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IBudgetRepo for MongoBudgetRepo {
    async fn insert(&self, budget: &Budget) -> anyhow::Result<()> {
        mongo_repo::insert::<_, BudgetMongo>(self.store.as_ref(), COLLECTION, budget).await
    }

    async fn save(&self, budget: &Budget) -> anyhow::Result<()> {
        mongo_repo::save::<_, BudgetMongo>(self.store.as_ref(), COLLECTION, budget).await
    }

    async fn find_by_key(&self, key: &BudgetKey) -> Option<Budget> {
        let category = match &key.category {
            Some(category) => Bson::String(category.clone()),
            None => Bson::Null,
        };
        let filter = doc! {
            "user_id": key.user_id.as_string(),
            "entity_type": key.entity_type.as_str(),
            "entity_id": optional_id(&key.entity_id),
            "category": category,
            "month": key.month as i32,
            "year": key.year,
        };
        mongo_repo::find_one_by::<_, BudgetMongo>(self.store.as_ref(), COLLECTION, filter).await
    }

    async fn find_by(&self, query: BudgetQuery) -> anyhow::Result<Vec<Budget>> {
        let mut filter = user_filter(&query.user_id);
        if let Some(entity_type) = &query.entity_type {
            filter.insert("entity_type", entity_type.as_str());
        }
        if let Some(entity_id) = &query.entity_id {
            filter.insert("entity_id", entity_id.as_string());
        }
        if let Some(month) = query.month {
            filter.insert("month", month as i32);
        }
        if let Some(year) = query.year {
            filter.insert("year", year);
        }
        mongo_repo::find_many_by::<_, BudgetMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::default(),
        )
        .await
    }

    async fn delete(&self, budget_id: &ID, user_id: &ID) -> Option<Budget> {
        let filter = mongo_repo::get_owned_filter(budget_id, user_id);
        mongo_repo::delete::<_, BudgetMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BudgetMongo {
    _id: ObjectId,
    user_id: ID,
    entity_type: EntityType,
    #[serde(default)]
    entity_id: Option<ID>,
    #[serde(default)]
    category: Option<String>,
    month: u32,
    year: i32,
    #[serde(default)]
    amount: f64,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Budget> for BudgetMongo {
    fn to_domain(self) -> Budget {
        Budget {
            id: ID::from(self._id),
            user_id: self.user_id,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            category: self.category,
            month: self.month,
            year: self.year,
            amount: self.amount,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(budget: &Budget) -> Self {
        Self {
            _id: budget.id.inner(),
            user_id: budget.user_id,
            entity_type: budget.entity_type,
            entity_id: budget.entity_id,
            category: budget.category.clone(),
            month: budget.month,
            year: budget.year,
            amount: budget.amount,
            created_at: budget.created_at,
            updated_at: budget.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
