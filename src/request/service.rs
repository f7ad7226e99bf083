use crate::database::{DeleteAck, DocumentStore, InsertAck, MongoStore, REQUESTS_COLLECTION};
use crate::utils::error::CustomError;
use crate::utils::helpers::{json_to_document, parse_object_id};
use mongodb::Client;
use mongodb::bson::{Document, doc};
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct RequestService {
    store: Arc<dyn DocumentStore>,
    allow_unfiltered_listing: bool,
}

impl RequestService {
    pub fn new(store: Arc<dyn DocumentStore>, allow_unfiltered_listing: bool) -> Self {
        RequestService {
            store,
            allow_unfiltered_listing,
        }
    }

    pub fn from_client(client: &Client, database: &str, allow_unfiltered_listing: bool) -> Self {
        let collection = client
            .database(database)
            .collection::<Document>(REQUESTS_COLLECTION);
        Self::new(Arc::new(MongoStore::new(collection)), allow_unfiltered_listing)
    }

    pub async fn list_by_volunteer(
        &self,
        volunteer_email: Option<&str>,
    ) -> Result<Vec<Document>, CustomError> {
        let filter = match volunteer_email.filter(|e| !e.is_empty()) {
            Some(email) => doc! { "volunteerEmail": email },
            None if self.allow_unfiltered_listing => doc! {},
            None => return Err(CustomError::forbidden()),
        };

        self.store.find(filter, None).await
    }

    pub async fn create_request(&self, body: Map<String, Value>) -> Result<InsertAck, CustomError> {
        let document = json_to_document(body)?;
        self.store.insert_one(document).await
    }

    pub async fn delete_request(&self, id: &str) -> Result<DeleteAck, CustomError> {
        let object_id = parse_object_id(id)?;
        self.store.delete_one(doc! { "_id": object_id }).await
    }
}
