use super::store::{FindQuery, IDocumentStore, SortOrder, StoreStats};
use anyhow::{anyhow, Result};
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

/// Document store kept in process memory. Understands the subset of the
/// MongoDB query language the repositories use: field equality, `$eq`,
/// `$ne`, `$gt`, `$gte`, `$lt`, `$lte`, `$in`, `$exists`, `$and` and `$or`.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .lock()
            .map_err(|_| anyhow!("In memory store lock was poisoned"))
    }
}

fn with_id(mut document: Document) -> Document {
    if !document.contains_key("_id") {
        document.insert("_id", ObjectId::new());
    }
    document
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(*v as f64),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

fn compare_values(a: &Bson, b: &Bson) -> Option<Ordering> {
    match (a, b) {
        (Bson::String(a), Bson::String(b)) => Some(a.cmp(b)),
        (Bson::DateTime(a), Bson::DateTime(b)) => {
            Some(a.timestamp_millis().cmp(&b.timestamp_millis()))
        }
        (Bson::ObjectId(a), Bson::ObjectId(b)) => Some(a.bytes().cmp(&b.bytes())),
        (Bson::Boolean(a), Bson::Boolean(b)) => Some(a.cmp(b)),
        _ => match (as_f64(a), as_f64(b)) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        },
    }
}

fn equals(value: Option<&Bson>, expected: &Bson) -> bool {
    match (value, expected) {
        (None, Bson::Null) | (Some(Bson::Null), Bson::Null) => true,
        (None, _) => false,
        (Some(value), expected) => {
            value == expected || compare_values(value, expected) == Some(Ordering::Equal)
        }
    }
}

fn is_operator_document(cond: &Bson) -> bool {
    match cond {
        Bson::Document(ops) => ops.keys().next().map_or(false, |k| k.starts_with('$')),
        _ => false,
    }
}

fn field_matches(value: Option<&Bson>, cond: &Bson) -> bool {
    let ops = match cond {
        Bson::Document(ops) if is_operator_document(cond) => ops,
        _ => return equals(value, cond),
    };

    ops.iter().all(|(op, operand)| {
        let ordering = value.and_then(|v| compare_values(v, operand));
        match op.as_str() {
            "$eq" => equals(value, operand),
            "$ne" => !equals(value, operand),
            "$gt" => ordering == Some(Ordering::Greater),
            "$gte" => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            "$lt" => ordering == Some(Ordering::Less),
            "$lte" => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            "$in" => match operand {
                Bson::Array(candidates) => candidates.iter().any(|c| equals(value, c)),
                _ => false,
            },
            "$exists" => operand.as_bool() == Some(value.is_some()),
            _ => false,
        }
    })
}

fn sub_filters(cond: &Bson) -> Vec<&Document> {
    match cond {
        Bson::Array(filters) => filters.iter().filter_map(|f| f.as_document()).collect(),
        _ => Vec::new(),
    }
}

pub fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, cond)| match key.as_str() {
        "$and" => sub_filters(cond).iter().all(|f| matches(document, f)),
        "$or" => sub_filters(cond).iter().any(|f| matches(document, f)),
        _ => field_matches(document.get(key), cond),
    })
}

fn compare_field(a: &Document, b: &Document, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(a), Some(b)) => compare_values(a, b).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ties on `field` are ordered by `_id` in the same direction
fn sort_documents(documents: &mut [Document], field: &str, order: SortOrder) {
    documents.sort_by(|a, b| {
        let ordering = compare_field(a, b, field).then_with(|| compare_field(a, b, "_id"));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn encoded_len(document: &Document) -> u64 {
    let mut buf = Vec::new();
    match document.to_writer(&mut buf) {
        Ok(_) => buf.len() as u64,
        Err(_) => 0,
    }
}

#[async_trait::async_trait]
impl IDocumentStore for InMemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<()> {
        let mut collections = self.lock()?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(with_id(document));
        Ok(())
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<()> {
        let mut collections = self.lock()?;
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents.into_iter().map(with_id));
        Ok(())
    }

    async fn replace_one(
        &self,
        collection: &str,
        filter: Document,
        document: Document,
    ) -> Result<bool> {
        let mut collections = self.lock()?;
        let documents = match collections.get_mut(collection) {
            Some(documents) => documents,
            None => return Ok(false),
        };
        match documents.iter_mut().find(|d| matches(d, &filter)) {
            Some(existing) => {
                let id = existing.get("_id").cloned();
                *existing = document;
                if let Some(id) = id {
                    existing.insert("_id", id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        query: FindQuery,
    ) -> Result<Vec<Document>> {
        let collections = self.lock()?;
        let mut found: Vec<Document> = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some((field, order)) = &query.sort {
            sort_documents(&mut found, field, *order);
        }
        if let Some(limit) = query.limit {
            if limit > 0 {
                found.truncate(limit as usize);
            }
        }
        Ok(found)
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64> {
        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .map(|documents| documents.iter().filter(|d| matches(d, &filter)).count())
            .unwrap_or_default() as u64)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let mut collections = self.lock()?;
        let documents = match collections.get_mut(collection) {
            Some(documents) => documents,
            None => return Ok(None),
        };
        Ok(documents
            .iter()
            .position(|d| matches(d, &filter))
            .map(|index| documents.remove(index)))
    }

    async fn delete_many(&self, collection: &str, filter: Document) -> Result<u64> {
        let mut collections = self.lock()?;
        let documents = match collections.get_mut(collection) {
            Some(documents) => documents,
            None => return Ok(0),
        };
        let before = documents.len();
        documents.retain(|d| !matches(d, &filter));
        Ok((before - documents.len()) as u64)
    }

    async fn set_fields(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<u64> {
        let mut collections = self.lock()?;
        let documents = match collections.get_mut(collection) {
            Some(documents) => documents,
            None => return Ok(0),
        };
        let mut matched = 0;
        for document in documents.iter_mut().filter(|d| matches(d, &filter)) {
            for (key, value) in fields.iter() {
                document.insert(key.clone(), value.clone());
            }
            matched += 1;
        }
        Ok(matched)
    }

    async fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }

    async fn stats(&self) -> Result<StoreStats> {
        let collections = self.lock()?;
        let mut stats = StoreStats::default();
        for document in collections.values().flatten() {
            stats.size_bytes += encoded_len(document);
            stats.documents += 1;
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn filter_operators() {
        let d = doc! {
            "user_id": "u1",
            "date": "2025-03-10",
            "amount": 50.5,
            "month": 3,
            "supplier_id": Bson::Null,
        };

        assert!(matches(&d, &doc! { "user_id": "u1" }));
        assert!(!matches(&d, &doc! { "user_id": "u2" }));
        assert!(matches(&d, &doc! { "supplier_id": Bson::Null }));
        assert!(matches(&d, &doc! { "missing": Bson::Null }));
        assert!(matches(&d, &doc! { "month": 3_i64 }));
        assert!(matches(
            &d,
            &doc! { "date": { "$gte": "2025-03-01", "$lt": "2025-04-01" } }
        ));
        assert!(!matches(&d, &doc! { "date": { "$gt": "2025-03-10" } }));
        assert!(matches(&d, &doc! { "amount": { "$lte": 50.5 } }));
        assert!(matches(&d, &doc! { "user_id": { "$in": ["u0", "u1"] } }));
        assert!(matches(&d, &doc! { "date": { "$exists": true } }));
        assert!(matches(
            &d,
            &doc! { "$or": [{ "user_id": "u2" }, { "month": 3 }] }
        ));
    }

    #[tokio::test]
    async fn equal_sort_keys_are_ordered_by_id() {
        let store = InMemoryStore::new();
        let older = ObjectId::parse_str("650000000000000000000001").unwrap();
        let newer = ObjectId::parse_str("650000000000000000000002").unwrap();
        store
            .insert_many(
                "backups",
                vec![
                    doc! { "_id": newer, "created_at": "2025-03-10" },
                    doc! { "_id": older, "created_at": "2025-03-10" },
                    doc! { "_id": ObjectId::new(), "created_at": "2025-03-09" },
                ],
            )
            .await
            .unwrap();

        let ids = |docs: Vec<Document>| {
            docs.into_iter()
                .map(|d| d.get_object_id("_id").unwrap())
                .collect::<Vec<_>>()
        };
        let descending = store
            .find(
                "backups",
                doc! {},
                FindQuery::sorted("created_at", SortOrder::Descending).limit(2),
            )
            .await
            .unwrap();
        assert_eq!(ids(descending), vec![newer, older]);

        let ascending = store
            .find(
                "backups",
                doc! {},
                FindQuery::sorted("created_at", SortOrder::Ascending),
            )
            .await
            .unwrap();
        assert_eq!(ids(ascending)[1..], [older, newer]);
    }

    #[tokio::test]
    async fn crud_on_collections() {
        let store = InMemoryStore::new();
        store
            .insert_many(
                "reminders",
                vec![
                    doc! { "title": "b", "reminder_date": "2025-02-01" },
                    doc! { "title": "a", "reminder_date": "2025-01-01" },
                    doc! { "title": "c", "reminder_date": "2025-03-01" },
                ],
            )
            .await
            .unwrap();

        let sorted = store
            .find(
                "reminders",
                doc! {},
                FindQuery::sorted("reminder_date", SortOrder::Descending).limit(2),
            )
            .await
            .unwrap();
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].get_str("title").unwrap(), "c");
        assert!(sorted[0].get_object_id("_id").is_ok());

        let matched = store
            .set_fields(
                "reminders",
                doc! { "reminder_date": { "$lt": "2025-03-01" } },
                doc! { "is_completed": true },
            )
            .await
            .unwrap();
        assert_eq!(matched, 2);
        assert_eq!(
            store
                .count("reminders", doc! { "is_completed": true })
                .await
                .unwrap(),
            2
        );

        assert_eq!(
            store.delete_many("reminders", doc! {}).await.unwrap(),
            3
        );
        assert!(store
            .find_one("reminders", doc! {})
            .await
            .unwrap()
            .is_none());
    }
}
