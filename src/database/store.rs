use crate::utils::error::CustomError;
use crate::utils::helpers::bson_to_json;
use futures_util::TryStreamExt;
use futures_util::future::BoxFuture;
use mongodb::Collection;
use mongodb::bson::Document;
use serde::Serialize;
use serde_json::Value;

/// Acknowledgement returned by `insert_one`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

/// Acknowledgement returned by `update_one`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Value>,
}

/// Acknowledgement returned by `delete_one`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// The operations handlers need from a single schemaless collection.
pub trait DocumentStore: Send + Sync {
    fn find(
        &self,
        filter: Document,
        sort: Option<Document>,
    ) -> BoxFuture<'_, Result<Vec<Document>, CustomError>>;

    fn find_one(&self, filter: Document) -> BoxFuture<'_, Result<Option<Document>, CustomError>>;

    fn insert_one(&self, document: Document) -> BoxFuture<'_, Result<InsertAck, CustomError>>;

    fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> BoxFuture<'_, Result<UpdateAck, CustomError>>;

    fn delete_one(&self, filter: Document) -> BoxFuture<'_, Result<DeleteAck, CustomError>>;
}

pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    pub fn new(collection: Collection<Document>) -> Self {
        MongoStore { collection }
    }
}

fn db_error(action: &str, e: mongodb::error::Error) -> CustomError {
    CustomError::InternalServerError(format!("Failed to {}: {}", action, e))
}

impl DocumentStore for MongoStore {
    fn find(
        &self,
        filter: Document,
        sort: Option<Document>,
    ) -> BoxFuture<'_, Result<Vec<Document>, CustomError>> {
        Box::pin(async move {
            let mut action = self.collection.find(filter);
            if let Some(sort) = sort {
                action = action.sort(sort);
            }

            let cursor = action.await.map_err(|e| db_error("fetch documents", e))?;
            cursor
                .try_collect()
                .await
                .map_err(|e| db_error("collect documents", e))
        })
    }

    fn find_one(&self, filter: Document) -> BoxFuture<'_, Result<Option<Document>, CustomError>> {
        Box::pin(async move {
            self.collection
                .find_one(filter)
                .await
                .map_err(|e| db_error("fetch document", e))
        })
    }

    fn insert_one(&self, document: Document) -> BoxFuture<'_, Result<InsertAck, CustomError>> {
        Box::pin(async move {
            let result = self
                .collection
                .insert_one(document)
                .await
                .map_err(|e| db_error("insert document", e))?;

            Ok(InsertAck {
                acknowledged: true,
                inserted_id: bson_to_json(result.inserted_id),
            })
        })
    }

    fn update_one(
        &self,
        filter: Document,
        update: Document,
        upsert: bool,
    ) -> BoxFuture<'_, Result<UpdateAck, CustomError>> {
        Box::pin(async move {
            let result = self
                .collection
                .update_one(filter, update)
                .upsert(upsert)
                .await
                .map_err(|e| db_error("update document", e))?;

            let upserted_id = result.upserted_id.map(bson_to_json);
            Ok(UpdateAck {
                acknowledged: true,
                matched_count: result.matched_count,
                modified_count: result.modified_count,
                upserted_count: u64::from(upserted_id.is_some()),
                upserted_id,
            })
        })
    }

    fn delete_one(&self, filter: Document) -> BoxFuture<'_, Result<DeleteAck, CustomError>> {
        Box::pin(async move {
            let result = self
                .collection
                .delete_one(filter)
                .await
                .map_err(|e| db_error("delete document", e))?;

            Ok(DeleteAck {
                acknowledged: true,
                deleted_count: result.deleted_count,
            })
        })
    }
}

