use super::ISupplierRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::user_filter,
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    Supplier, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "suppliers";

pub struct MongoSupplierRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoSupplierRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ISupplierRepo for MongoSupplierRepo {
    async fn insert(&self, supplier: &Supplier) -> anyhow::Result<()> {
        mongo_repo::insert::<_, SupplierMongo>(self.store.as_ref(), COLLECTION, supplier).await
    }

    async fn save(&self, supplier: &Supplier) -> anyhow::Result<()> {
        mongo_repo::save::<_, SupplierMongo>(self.store.as_ref(), COLLECTION, supplier).await
    }

    async fn find(&self, supplier_id: &ID, user_id: &ID) -> Option<Supplier> {
        let filter = mongo_repo::get_owned_filter(supplier_id, user_id);
        mongo_repo::find_one_by::<_, SupplierMongo>(self.store.as_ref(), COLLECTION, filter)
            .await
    }

    async fn find_by_user(
        &self,
        user_id: &ID,
        category: Option<&str>,
    ) -> anyhow::Result<Vec<Supplier>> {
        let mut filter = user_filter(user_id);
        if let Some(category) = category {
            filter.insert("category", category);
        }
        mongo_repo::find_many_by::<_, SupplierMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::sorted("name", SortOrder::Ascending),
        )
        .await
    }

    async fn delete(&self, supplier_id: &ID, user_id: &ID) -> Option<Supplier> {
        let filter = mongo_repo::get_owned_filter(supplier_id, user_id);
        mongo_repo::delete::<_, SupplierMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SupplierMongo {
    _id: ObjectId,
    user_id: ID,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    custom_category: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    contact_person: Option<String>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Supplier> for SupplierMongo {
    fn to_domain(self) -> Supplier {
        Supplier {
            id: ID::from(self._id),
            user_id: self.user_id,
            name: self.name,
            category: self.category,
            custom_category: self.custom_category,
            phone: self.phone,
            email: self.email,
            address: self.address,
            city: self.city,
            notes: self.notes,
            contact_person: self.contact_person,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(supplier: &Supplier) -> Self {
        Self {
            _id: supplier.id.inner(),
            user_id: supplier.user_id,
            name: supplier.name.clone(),
            category: supplier.category.clone(),
            custom_category: supplier.custom_category.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
            city: supplier.city.clone(),
            notes: supplier.notes.clone(),
            contact_person: supplier.contact_person.clone(),
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
