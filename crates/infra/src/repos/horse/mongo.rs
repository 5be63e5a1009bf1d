use super::IHorseRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::user_filter,
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    AttachedDocument, Horse, ReminderIntervals, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "horses";

pub struct MongoHorseRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoHorseRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IHorseRepo for MongoHorseRepo {
    async fn insert(&self, horse: &Horse) -> anyhow::Result<()> {
        mongo_repo::insert::<_, HorseMongo>(self.store.as_ref(), COLLECTION, horse).await
    }

    async fn save(&self, horse: &Horse) -> anyhow::Result<()> {
        mongo_repo::save::<_, HorseMongo>(self.store.as_ref(), COLLECTION, horse).await
    }

    async fn find(&self, horse_id: &ID, user_id: &ID) -> Option<Horse> {
        let filter = mongo_repo::get_owned_filter(horse_id, user_id);
        mongo_repo::find_one_by::<_, HorseMongo>(self.store.as_ref(), COLLECTION, filter).await
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Horse>> {
        mongo_repo::find_many_by::<_, HorseMongo>(
            self.store.as_ref(),
            COLLECTION,
            user_filter(user_id),
            FindQuery::sorted("name", SortOrder::Ascending),
        )
        .await
    }

    async fn find_many(&self, horse_ids: &[ID], user_id: &ID) -> anyhow::Result<Vec<Horse>> {
        let oids = horse_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let filter = doc! {
            "_id": {
                "$in": oids
            },
            "user_id": user_id.as_string()
        };
        mongo_repo::find_many_by::<_, HorseMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::default(),
        )
        .await
    }

    async fn delete(&self, horse_id: &ID, user_id: &ID) -> Option<Horse> {
        let filter = mongo_repo::get_owned_filter(horse_id, user_id);
        mongo_repo::delete::<_, HorseMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HorseMongo {
    _id: ObjectId,
    user_id: ID,
    name: String,
    #[serde(default)]
    breed: Option<String>,
    #[serde(default)]
    birth_date: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    photo: Option<String>,
    #[serde(default)]
    photos: Vec<String>,
    #[serde(default)]
    stabling_location: Option<String>,
    #[serde(default)]
    territorial_license: Option<String>,
    #[serde(default)]
    national_license: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    documents: Vec<AttachedDocument>,
    #[serde(default)]
    reminder_intervals: ReminderIntervals,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Horse> for HorseMongo {
    fn to_domain(self) -> Horse {
        Horse {
            id: ID::from(self._id),
            user_id: self.user_id,
            name: self.name,
            breed: self.breed,
            birth_date: self.birth_date,
            color: self.color,
            notes: self.notes,
            photo: self.photo,
            photos: self.photos,
            stabling_location: self.stabling_location,
            territorial_license: self.territorial_license,
            national_license: self.national_license,
            owner: self.owner,
            documents: self.documents,
            reminder_intervals: self.reminder_intervals,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(horse: &Horse) -> Self {
        Self {
            _id: horse.id.inner(),
            user_id: horse.user_id,
            name: horse.name.clone(),
            breed: horse.breed.clone(),
            birth_date: horse.birth_date.clone(),
            color: horse.color.clone(),
            notes: horse.notes.clone(),
            photo: horse.photo.clone(),
            photos: horse.photos.clone(),
            stabling_location: horse.stabling_location.clone(),
            territorial_license: horse.territorial_license.clone(),
            national_license: horse.national_license.clone(),
            owner: horse.owner.clone(),
            documents: horse.documents.clone(),
            reminder_intervals: horse.reminder_intervals.clone(),
            created_at: horse.created_at,
            updated_at: horse.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
