use super::ICompetitionRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    query_structs::{user_filter, CompetitionQuery},
    store::{FindQuery, IDocumentStore, SortOrder},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    Competition, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "competitions";

pub struct MongoCompetitionRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoCompetitionRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ICompetitionRepo for MongoCompetitionRepo {
    async fn insert(&self, competition: &Competition) -> anyhow::Result<()> {
        mongo_repo::insert::<_, CompetitionMongo>(self.store.as_ref(), COLLECTION, competition)
            .await
    }

    async fn save(&self, competition: &Competition) -> anyhow::Result<()> {
        mongo_repo::save::<_, CompetitionMongo>(self.store.as_ref(), COLLECTION, competition)
            .await
    }

    async fn find(&self, competition_id: &ID, user_id: &ID) -> Option<Competition> {
        let filter = mongo_repo::get_owned_filter(competition_id, user_id);
        mongo_repo::find_one_by::<_, CompetitionMongo>(self.store.as_ref(), COLLECTION, filter)
            .await
    }

    async fn find_by(&self, query: CompetitionQuery) -> anyhow::Result<Vec<Competition>> {
        let mut filter = user_filter(&query.user_id);
        if let Some(discipline) = &query.discipline {
            filter.insert("discipline", discipline.clone());
        }
        query.dates.apply("date", &mut filter);
        mongo_repo::find_many_by::<_, CompetitionMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::sorted("date", SortOrder::Ascending),
        )
        .await
    }

    async fn delete(&self, competition_id: &ID, user_id: &ID) -> Option<Competition> {
        let filter = mongo_repo::get_owned_filter(competition_id, user_id);
        mongo_repo::delete::<_, CompetitionMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CompetitionMongo {
    _id: ObjectId,
    user_id: ID,
    name: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    place: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    location_link: Option<String>,
    #[serde(default)]
    discipline: String,
    #[serde(default)]
    custom_discipline: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    organizer: Option<String>,
    #[serde(default)]
    entry_deadline: Option<String>,
    #[serde(default)]
    entry_fee: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    contact_phone: Option<String>,
    #[serde(default)]
    contact_email: Option<String>,
    #[serde(default)]
    accommodation_info: Option<String>,
    #[serde(default)]
    participating_horses: Vec<ID>,
    #[serde(default)]
    participating_riders: Vec<ID>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<Competition> for CompetitionMongo {
    fn to_domain(self) -> Competition {
        Competition {
            id: ID::from(self._id),
            user_id: self.user_id,
            name: self.name,
            date: self.date,
            end_date: self.end_date,
            place: self.place,
            city: self.city,
            country: self.country,
            location_link: self.location_link,
            discipline: self.discipline,
            custom_discipline: self.custom_discipline,
            level: self.level,
            organizer: self.organizer,
            entry_deadline: self.entry_deadline,
            entry_fee: self.entry_fee,
            notes: self.notes,
            website: self.website,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            accommodation_info: self.accommodation_info,
            participating_horses: self.participating_horses,
            participating_riders: self.participating_riders,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(c: &Competition) -> Self {
        Self {
            _id: c.id.inner(),
            user_id: c.user_id,
            name: c.name.clone(),
            date: c.date.clone(),
            end_date: c.end_date.clone(),
            place: c.place.clone(),
            city: c.city.clone(),
            country: c.country.clone(),
            location_link: c.location_link.clone(),
            discipline: c.discipline.clone(),
            custom_discipline: c.custom_discipline.clone(),
            level: c.level.clone(),
            organizer: c.organizer.clone(),
            entry_deadline: c.entry_deadline.clone(),
            entry_fee: c.entry_fee,
            notes: c.notes.clone(),
            website: c.website.clone(),
            contact_phone: c.contact_phone.clone(),
            contact_email: c.contact_email.clone(),
            accommodation_info: c.accommodation_info.clone(),
            participating_horses: c.participating_horses.clone(),
            participating_riders: c.participating_riders.clone(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
