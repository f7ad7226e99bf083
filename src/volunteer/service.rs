use crate::database::{
    DeleteAck, DocumentStore, InsertAck, MongoStore, UpdateAck, VOLUNTEERS_COLLECTION,
};
use crate::utils::error::CustomError;
use crate::utils::helpers::{json_to_document, parse_object_id};
use crate::volunteer::model::VolunteerPostFields;
use mongodb::Client;
use mongodb::bson::{self, Document, doc};
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct VolunteerService {
    store: Arc<dyn DocumentStore>,
    allow_unfiltered_listing: bool,
}

impl VolunteerService {
    pub fn new(store: Arc<dyn DocumentStore>, allow_unfiltered_listing: bool) -> Self {
        VolunteerService {
            store,
            allow_unfiltered_listing,
        }
    }

    pub fn from_client(client: &Client, database: &str, allow_unfiltered_listing: bool) -> Self {
        let collection = client
            .database(database)
            .collection::<Document>(VOLUNTEERS_COLLECTION);
        Self::new(Arc::new(MongoStore::new(collection)), allow_unfiltered_listing)
    }

    /// Every post, soonest deadline first.
    pub async fn list_by_deadline(&self) -> Result<Vec<Document>, CustomError> {
        self.store
            .find(doc! {}, Some(doc! { "deadline_time": 1 }))
            .await
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Document>, CustomError> {
        let object_id = parse_object_id(id)?;
        self.store.find_one(doc! { "_id": object_id }).await
    }

    /// Posts created by `email`. Without an email the whole collection is
    /// returned, unless unfiltered listing is switched off.
    pub async fn list_by_owner(&self, email: Option<&str>) -> Result<Vec<Document>, CustomError> {
        let filter = match email.filter(|e| !e.is_empty()) {
            Some(email) => doc! { "email": email },
            None if self.allow_unfiltered_listing => doc! {},
            None => return Err(CustomError::forbidden()),
        };

        self.store.find(filter, None).await
    }

    pub async fn create_post(&self, body: Map<String, Value>) -> Result<InsertAck, CustomError> {
        let document = json_to_document(body)?;
        self.store.insert_one(document).await
    }

    pub async fn update_post(
        &self,
        id: &str,
        fields: VolunteerPostFields,
    ) -> Result<UpdateAck, CustomError> {
        let object_id = parse_object_id(id)?;
        let set = bson::to_document(&fields)
            .map_err(|e| CustomError::BadRequestError(format!("Unsupported update: {}", e)))?;

        self.store
            .update_one(doc! { "_id": object_id }, doc! { "$set": set }, true)
            .await
    }

    pub async fn delete_post(&self, id: &str) -> Result<DeleteAck, CustomError> {
        let object_id = parse_object_id(id)?;
        self.store.delete_one(doc! { "_id": object_id }).await
    }
}
