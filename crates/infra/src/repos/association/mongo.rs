use super::IAssociationRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    store::{FindQuery, IDocumentStore},
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    HorseRiderAssociation, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "horse_rider_associations";

pub struct MongoAssociationRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoAssociationRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }

    async fn find_many(&self, filter: Document) -> anyhow::Result<Vec<HorseRiderAssociation>> {
        mongo_repo::find_many_by::<_, AssociationMongo>(
            self.store.as_ref(),
            COLLECTION,
            filter,
            FindQuery::default(),
        )
        .await
    }
}

#[async_trait::async_trait]
impl IAssociationRepo for MongoAssociationRepo {
    async fn insert(&self, association: &HorseRiderAssociation) -> anyhow::Result<()> {
        mongo_repo::insert::<_, AssociationMongo>(self.store.as_ref(), COLLECTION, association)
            .await
    }

    async fn find(&self, horse_id: &ID, rider_id: &ID) -> Option<HorseRiderAssociation> {
        let filter = doc! {
            "horse_id": horse_id.as_string(),
            "rider_id": rider_id.as_string(),
        };
        mongo_repo::find_one_by::<_, AssociationMongo>(self.store.as_ref(), COLLECTION, filter)
            .await
    }

    async fn find_by_horse(&self, horse_id: &ID) -> anyhow::Result<Vec<HorseRiderAssociation>> {
        self.find_many(doc! { "horse_id": horse_id.as_string() })
            .await
    }

    async fn find_by_rider(&self, rider_id: &ID) -> anyhow::Result<Vec<HorseRiderAssociation>> {
        self.find_many(doc! { "rider_id": rider_id.as_string() })
            .await
    }

    async fn delete(
        &self,
        horse_id: &ID,
        rider_id: &ID,
        user_id: &ID,
    ) -> Option<HorseRiderAssociation> {
        let filter = doc! {
            "horse_id": horse_id.as_string(),
            "rider_id": rider_id.as_string(),
            "user_id": user_id.as_string(),
        };
        mongo_repo::delete::<_, AssociationMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct AssociationMongo {
    _id: ObjectId,
    user_id: ID,
    horse_id: ID,
    rider_id: ID,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl MongoDocument<HorseRiderAssociation> for AssociationMongo {
    fn to_domain(self) -> HorseRiderAssociation {
        HorseRiderAssociation {
            id: ID::from(self._id),
            user_id: self.user_id,
            horse_id: self.horse_id,
            rider_id: self.rider_id,
            created_at: self.created_at,
        }
    }

    fn from_domain(association: &HorseRiderAssociation) -> Self {
        Self {
            _id: association.id.inner(),
            user_id: association.user_id,
            horse_id: association.horse_id,
            rider_id: association.rider_id,
            created_at: association.created_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
