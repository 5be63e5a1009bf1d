use super::IPalmaresRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::{user_filter, PalmaresQuery},
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    Palmares, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "palmares";

pub struct MongoPalmaresRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoPalmaresRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IPalmaresRepo for MongoPalmaresRepo {
    async fn insert(&self, palmares: &Palmares) -> anyhow::Result<()> {
        mongo_repo::insert::<_, PalmaresMongo>(self.store.as_ref(), COLLECTION, palmares).await
    }

    async fn save(&self, palmares: &Palmares) -> anyhow::Result<()> {
        mongo_repo::save::<_, PalmaresMongo>(self.store.as_ref(), COLLECTION, palmares).await
    }

    async fn find(&self, palmares_id: &ID, user_id: &ID) -> Option<Palmares> {
        let filter = mongo_repo::get_owned_filter(palmares_id, user_id);
        mongo_repo::find_one_by::<_, PalmaresMongo>(self.store.as_ref(), COLLECTION, filter)
            .await
    }

    async fn find_by(&self, query: PalmaresQuery) -> anyhow::Result<Vec<Palmares>> {
        let mut filter = user_filter(&query.user_id);
        if let Some(rider_id) = &query.rider_id {
            filter.insert("rider_id", rider_id.as_string());
        }
        if let Some(discipline) = &query.discipline {
            filter.insert("discipline", discipline.clone());
        }
        query.dates.apply("date", &mut filter);
        mongo_repo::find_many_by::<_, PalmaresMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::sorted("date", SortOrder::Descending),
        )
        .await
    }

    async fn delete(&self, palmares_id: &ID, user_id: &ID) -> Option<Palmares> {
        let filter = mongo_repo::get_owned_filter(palmares_id, user_id);
        mongo_repo::delete::<_, PalmaresMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PalmaresMongo {
    _id: ObjectId,
    user_id: ID,
    rider_id: ID,
    #[serde(default)]
    competition_name: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    location_link: Option<String>,
    #[serde(default)]
    discipline: String,
    #[serde(default)]
    custom_discipline: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    horse_id: Option<ID>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    prize: Option<String>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Palmares> for PalmaresMongo {
    fn to_domain(self) -> Palmares {
        Palmares {
            id: ID::from(self._id),
            user_id: self.user_id,
            rider_id: self.rider_id,
            competition_name: self.competition_name,
            date: self.date,
            place: self.place,
            city: self.city,
            country: self.country,
            location_link: self.location_link,
            discipline: self.discipline,
            custom_discipline: self.custom_discipline,
            position: self.position,
            horse_id: self.horse_id,
            category: self.category,
            notes: self.notes,
            prize: self.prize,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(p: &Palmares) -> Self {
        Self {
            _id: p.id.inner(),
            user_id: p.user_id,
            rider_id: p.rider_id,
            competition_name: p.competition_name.clone(),
            date: p.date.clone(),
            place: p.place.clone(),
            city: p.city.clone(),
            country: p.country.clone(),
            location_link: p.location_link.clone(),
            discipline: p.discipline.clone(),
            custom_discipline: p.custom_discipline.clone(),
            position: p.position.clone(),
            horse_id: p.horse_id,
            category: p.category.clone(),
            notes: p.notes.clone(),
            prize: p.prize.clone(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
