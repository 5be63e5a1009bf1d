use super::IUserRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    store::IDocumentStore,
};
use chrono::{DateTime, Utc};
use herdbook_domain::{
    bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime, Document},
    Language, User, ID,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const COLLECTION: &str = "users";

pub struct MongoUserRepo {
    store: Arc<dyn IDocumentStore>,
}

impl MongoUserRepo {
    pub fn new(store: Arc<dyn IDocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IUserRepo for MongoUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        mongo_repo::insert::<_, UserMongo>(self.store.as_ref(), COLLECTION, user).await
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        mongo_repo::save::<_, UserMongo>(self.store.as_ref(), COLLECTION, user).await
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        mongo_repo::find::<_, UserMongo>(self.store.as_ref(), COLLECTION, user_id.inner_ref())
            .await
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let filter = doc! {
            "email": email
        };
        mongo_repo::find_one_by::<_, UserMongo>(self.store.as_ref(), COLLECTION, filter).await
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        let filter = mongo_repo::get_id_filter(user_id.inner_ref());
        mongo_repo::delete::<_, UserMongo>(self.store.as_ref(), COLLECTION, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserMongo {
    _id: ObjectId,
    email: String,
    /// bcrypt hash
    password: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    language: Language,
    #[serde(default)]
    security_question: Option<String>,
    #[serde(default)]
    security_answer: Option<String>,
    #[serde(default)]
    is_admin: bool,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl MongoDocument<User> for UserMongo {
    fn to_domain(self) -> User {
        User {
            id: ID::from(self._id),
            email: self.email,
            password_hash: self.password,
            name: self.name,
            language: self.language,
            security_question: self.security_question,
            security_answer: self.security_answer,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_domain(user: &User) -> Self {
        Self {
            _id: user.id.inner(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            name: user.name.clone(),
            language: user.language,
            security_question: user.security_question.clone(),
            security_answer: user.security_answer.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
