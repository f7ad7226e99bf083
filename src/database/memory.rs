use super::store::{DeleteAck, DocumentStore, InsertAck, UpdateAck};
use crate::utils::error::CustomError;
use crate::utils::helpers::bson_to_json;
use futures_util::future::{BoxFuture, ready};
use mongodb::bson::{Bson, Document, oid::ObjectId};
use std::cmp::Ordering;
use std::sync::Mutex;

/// In-process collection used by handler tests. Supports top-level equality
/// filters, a single-field sort and `$set` updates.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key).unwrap_or(&Bson::Null) == expected)
}

// Mirrors the server's cross-type order for the types tests use.
fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        None | Some(Bson::Null) => 0,
        Some(Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_)) => 1,
        Some(Bson::String(_)) => 2,
        Some(_) => 3,
    }
}

fn as_f64(value: &Bson) -> f64 {
    match value {
        Bson::Int32(v) => f64::from(*v),
        Bson::Int64(v) => *v as f64,
        Bson::Double(v) => *v,
        _ => 0.0,
    }
}

fn compare_field(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }
    match (a, b) {
        (Some(Bson::String(a)), Some(Bson::String(b))) => a.cmp(b),
        (Some(a), Some(b)) if type_rank(Some(a)) == 1 => {
            as_f64(a).partial_cmp(&as_f64(b)).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

impl DocumentStore for MemoryStore {
    fn find(
        &self,
        filter: Document,
        sort: Option<Document>,
    ) -> BoxFuture<'_, Result<Vec<Document>, CustomError>> {
        let mut found: Vec<Document> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| matches_filter(doc, &filter))
            .cloned()
            .collect();

        if let Some((key, direction)) = sort.as_ref().and_then(|s| s.iter().next()) {
            let descending = matches!(direction, Bson::Int32(-1) | Bson::Int64(-1));
            found.sort_by(|a, b| {
                let ordering = compare_field(a.get(key), b.get(key));
                if descending { ordering.reverse() } else { ordering }
            });
        }

        Box::pin(ready(Ok(found)))
    }

    fn find_one(&self, filter: Document) -> BoxFuture<'_, Result<Option<Document>, CustomError>> {
        let found = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|doc| matches_filter(doc, &filter))
            .cloned();

        Box::pin(ready(Ok(found)))
    }

    fn insert_one(&self, mut document: Document) -> BoxFuture<'_, Result<InsertAck, CustomError>> {
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }
        let inserted_id = document.get("_id").cloned().unwrap_or(Bson::Null);
        self.documents.lock().unwrap().push(document);

        Box::pin(ready(Ok(InsertAck {
            acknowledged: true,
            inserted_id: bson_to_json(inserted_id),
        })))
    }

    fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> BoxFuture<'_, Result<UpdateAck, CustomError>> {
        let set = update.get_document("$set").cloned().unwrap_or_default();
        let mut documents = self.documents.lock().unwrap();

        let position = documents.iter().position(|doc| matches_filter(doc, &filter));

        let ack = match position {
            Some(index) => {
                let existing = &mut documents[index];
                let before = existing.clone();
                for (key, value) in set {
                    existing.insert(key, value);
                }
                UpdateAck {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: u64::from(*existing != before),
                    upserted_count: 0,
                    upserted_id: None,
                }
            }
            None if upsert => {
                let mut created = filter.clone();
                for (key, value) in set {
                    created.insert(key, value);
                }
                if !created.contains_key("_id") {
                    created.insert("_id", ObjectId::new());
                }
                let upserted_id = created.get("_id").cloned().map(bson_to_json);
                documents.push(created);
                UpdateAck {
                    acknowledged: true,
                    matched_count: 0,
                    modified_count: 0,
                    upserted_count: 1,
                    upserted_id,
                }
            }
            None => UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_count: 0,
                upserted_id: None,
            },
        };

        Box::pin(ready(Ok(ack)))
    }

    fn delete_one(&self, filter: Document) -> BoxFuture<'_, Result<DeleteAck, CustomError>> {
        let mut documents = self.documents.lock().unwrap();
        let deleted_count = match documents.iter().position(|doc| matches_filter(doc, &filter)) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        };

        Box::pin(ready(Ok(DeleteAck {
            acknowledged: true,
            deleted_count,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn sort_places_missing_and_numbers_before_strings() {
        let store = MemoryStore::new();
        store.insert_one(doc! { "deadline_time": "2024-03-01" }).await.unwrap();
        store.insert_one(doc! { "deadline_time": 7_i64 }).await.unwrap();
        store.insert_one(doc! { "other": true }).await.unwrap();
        store.insert_one(doc! { "deadline_time": "2024-01-01" }).await.unwrap();

        let sorted = store
            .find(doc! {}, Some(doc! { "deadline_time": 1 }))
            .await
            .unwrap();
        let keys: Vec<Option<&Bson>> = sorted.iter().map(|d| d.get("deadline_time")).collect();

        assert_eq!(keys[0], None);
        assert_eq!(keys[1], Some(&Bson::Int64(7)));
        assert_eq!(keys[2], Some(&Bson::String("2024-01-01".into())));
        assert_eq!(keys[3], Some(&Bson::String("2024-03-01".into())));
    }

    #[actix_web::test]
    async fn update_without_upsert_leaves_store_untouched() {
        let store = MemoryStore::new();
        let ack = store
            .update_one(
                doc! { "_id": ObjectId::new() },
                doc! { "$set": { "photo": "p" } },
                false,
            )
            .await
            .unwrap();

        assert_eq!(ack.matched_count, 0);
        assert_eq!(ack.upserted_count, 0);
        assert_eq!(store.len(), 0);
    }
}
