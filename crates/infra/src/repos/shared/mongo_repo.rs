use super::store::{FindQuery, IDocumentStore};
use anyhow::Result;
use herdbook_domain::ID;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

pub fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": *oid
    }
}

/// Matches the record only when it belongs to the given user
pub fn get_owned_filter(id: &ID, user_id: &ID) -> Document {
    doc! {
        "_id": id.inner(),
        "user_id": user_id.as_string()
    }
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    let doc = bson::to_document(&raw)?;
    Ok(doc)
}

/// Documents that no longer fit the schema are logged and skipped
fn persistence_to_entity<E, D: MongoDocument<E>>(collection: &str, doc: Document) -> Option<E> {
    match bson::from_document::<D>(doc) {
        Ok(raw) => Some(raw.to_domain()),
        Err(e) => {
            error!(
                "Unable to read document from collection {}: {:?}",
                collection, e
            );
            None
        }
    }
}

pub async fn insert<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    store.insert_one(collection, doc).await
}

pub async fn bulk_insert<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    entities: &[E],
) -> Result<()> {
    let docs = entities
        .iter()
        .map(|e| entity_to_persistence::<E, D>(e))
        .collect::<Result<Vec<_>>>()?;
    store.insert_many(collection, docs).await
}

pub async fn save<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    entity: &E,
) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = bson::to_document(&raw)?;
    store.replace_one(collection, filter, doc).await?;
    Ok(())
}

pub async fn find<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    id: &ObjectId,
) -> Option<E> {
    find_one_by::<E, D>(store, collection, get_id_filter(id)).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    filter: Document,
) -> Option<E> {
    match store.find_one(collection, filter).await {
        Ok(Some(doc)) => persistence_to_entity::<E, D>(collection, doc),
        Ok(None) => None,
        Err(e) => {
            error!("Find one in collection {} failed: {:?}", collection, e);
            None
        }
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    filter: Document,
    query: FindQuery,
) -> Result<Vec<E>> {
    let docs = store.find(collection, filter, query).await?;
    Ok(docs
        .into_iter()
        .filter_map(|doc| persistence_to_entity::<E, D>(collection, doc))
        .collect())
}

pub async fn delete<E, D: MongoDocument<E>>(
    store: &dyn IDocumentStore,
    collection: &str,
    filter: Document,
) -> Option<E> {
    match store.delete_one(collection, filter).await {
        Ok(Some(doc)) => persistence_to_entity::<E, D>(collection, doc),
        Ok(None) => None,
        Err(e) => {
            error!("Delete in collection {} failed: {:?}", collection, e);
            None
        }
    }
}

pub async fn delete_many_by(
    store: &dyn IDocumentStore,
    collection: &str,
    filter: Document,
) -> Result<u64> {
    store.delete_many(collection, filter).await
}
