use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Database,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn as_i32(&self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// Sorting and limit of a `find`
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    pub sort: Option<(String, SortOrder)>,
    pub limit: Option<i64>,
}

impl FindQuery {
    pub fn sorted(field: &str, order: SortOrder) -> Self {
        Self {
            sort: Some((field.to_string(), order)),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoreStats {
    /// Storage plus index size
    pub size_bytes: u64,
    pub documents: u64,
}

/// Collection level access to the underlying document database. Typed
/// repositories, cascades and the backup engine all go through it, so
/// that every one of them sees the same data.
#[async_trait::async_trait]
pub trait IDocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<()>;
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<()>;
    /// Replaces the first match, returns whether anything matched
    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        document: Document,
    ) -> Result<bool>;
    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>>;
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>>;
    async fn count(&self, collection: &str, filter: Document) -> Result<u64>;
    /// Deletes and returns the first match
    async fn delete_one(&self, collection: &str, filter: Document) -> Result<Option<Document>>;
    async fn delete_many(&self, collection: &str, filter: Document) -> Result<u64>;
    /// `$set` of `fields` on every match, returns the number of matches
    async fn set_fields(&self, collection: &str, filter: Document, fields: Document)
        -> Result<u64>;
    async fn ping(&self) -> Result<()>;
    async fn stats(&self) -> Result<StoreStats>;
}

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

fn as_u64(value: Option<&mongodb::bson::Bson>) -> u64 {
    use mongodb::bson::Bson;
    match value {
        Some(Bson::Int32(v)) => *v as u64,
        Some(Bson::Int64(v)) => *v as u64,
        Some(Bson::Double(v)) => *v as u64,
        _ => 0,
    }
}

#[async_trait::async_trait]
impl IDocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<()> {
        self.db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;
        Ok(())
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }
        self.db
            .collection::<Document>(collection)
            .insert_many(documents, None)
            .await?;
        Ok(())
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        document: Document,
    ) -> Result<bool> {
        let res = self
            .db
            .collection::<Document>(collection)
            .replace_one(filter, document, None)
            .await?;
        Ok(res.matched_count > 0)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let res = self
            .db
            .collection::<Document>(collection)
            .find_one(filter, None)
            .await?;
        Ok(res)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>> {
        let mut options = FindOptions::default();
        if let Some((field, order)) = &query.sort {
            let mut sort = Document::new();
            sort.insert(field.clone(), order.as_i32());
            if field != "_id" {
                sort.insert("_id", order.as_i32());
            }
            options.sort = Some(sort);
        }
        options.limit = query.limit;

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64> {
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(filter, None)
            .await?;
        Ok(count)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let res = self
            .db
            .collection::<Document>(collection)
            .find_one_and_delete(filter, None)
            .await?;
        Ok(res)
    }

    async fn delete_many(&self, collection: &str, filter: Document) -> Result<u64> {
        let res = self
            .db
            .collection::<Document>(collection)
            .delete_many(filter, None)
            .await?;
        Ok(res.deleted_count)
    }

    async fn set_fields(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<u64> {
        let res = self
            .db
            .collection::<Document>(collection)
            .update_many(filter, doc! { "$set": fields }, None)
            .await?;
        Ok(res.matched_count)
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<StoreStats> {
        let stats = self.db.run_command(doc! { "dbStats": 1 }, None).await?;
        Ok(StoreStats {
            size_bytes: as_u64(stats.get("storageSize")) + as_u64(stats.get("indexSize")),
            documents: as_u64(stats.get("objects")),
        })
    }
}
