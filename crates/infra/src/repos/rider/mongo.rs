use super::IRiderRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::user_filter,
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    AttachedDocument, ReminderIntervals, Rider, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "riders";

pub struct MongoRiderRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoRiderRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IRiderRepo for MongoRiderRepo {
    async fn insert(&self, rider: &Rider) -> anyhow::Result<()> {
        mongo_repo::insert::<_, RiderMongo>(self.store.as_ref(), COLLECTION, rider).await
    }

    async fn save(&self, rider: &Rider) -> anyhow::Result<()> {
        mongo_repo::save::<_, RiderMongo>(self.store.as_ref(), COLLECTION, rider).await
    }

    async fn find(&self, rider_id: &ID, user_id: &ID) -> Option<Rider> {
        let filter = mongo_repo::get_owned_filter(rider_id, user_id);
        mongo_repo::find_one_by::<_, RiderMongo>(self.store.as_ref(), COLLECTION, filter).await
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Rider>> {
        mongo_repo::find_many_by::<_, RiderMongo>(
            self.store.as_ref(),
            COLLECTION,
            user_filter(user_id),
            FindQuery::sorted("name", SortOrder::Ascending),
        )
        .await
    }

    async fn find_many(&self, rider_ids: &[ID], user_id: &ID) -> anyhow::Result<Vec<Rider>> {
        let oids = rider_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let filter = doc! {
            "_id": {
                "$in": oids
            },
            "user_id": user_id.as_string()
        };
        mongo_repo::find_many_by::<_, RiderMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::default(),
        )
        .await
    }

    async fn delete(&self, rider_id: &ID, user_id: &ID) -> Option<Rider> {
        let filter = mongo_repo::get_owned_filter(rider_id, user_id);
        mongo_repo::delete::<_, RiderMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RiderMongo {
    _id: ObjectId,
    user_id: ID,
    name: String,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    photos: Vec<String>,
    #[serde(default)]
    birth_date: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    territorial_license: Option<String>,
    #[serde(default)]
    national_license: Option<String>,
    #[serde(default)]
    documents: Vec<AttachedDocument>,
    #[serde(default)]
    reminder_intervals: ReminderIntervals,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Rider> for RiderMongo {
    fn to_domain(self) -> Rider {
        Rider {
            id: ID::from(self._id),
            user_id: self.user_id,
            name: self.name,
            photo: self.photo,
            photos: self.photos,
            birth_date: self.birth_date,
            phone: self.phone,
            email: self.email,
            notes: self.notes,
            territorial_license: self.territorial_license,
            national_license: self.national_license,
            documents: self.documents,
            reminder_intervals: self.reminder_intervals,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(rider: &Rider) -> Self {
        Self {
            _id: rider.id.inner(),
            user_id: rider.user_id,
            name: rider.name.clone(),
            photo: rider.photo.clone(),
            photos: rider.photos.clone(),
            birth_date: rider.birth_date.clone(),
            phone: rider.phone.clone(),
            email: rider.email.clone(),
            notes: rider.notes.clone(),
            territorial_license: rider.territorial_license.clone(),
            national_license: rider.national_license.clone(),
            documents: rider.documents.clone(),
            reminder_intervals: rider.reminder_intervals.clone(),
            created_at: rider.created_at,
            updated_at: rider.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
