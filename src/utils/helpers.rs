use crate::utils::error::CustomError;
use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde_json::{Map, Value};

/// Parse a path identifier into an ObjectId. Anything other than 24 hex chars is rejected.
pub fn parse_object_id(id: &str) -> Result<ObjectId, CustomError> {
    ObjectId::parse_str(id).map_err(|_| CustomError::BadRequestError("Invalid id".to_string()))
}

/// Render a BSON value the way clients expect it: ObjectIds as hex strings,
/// everything else as relaxed extended JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn json_to_document(body: Map<String, Value>) -> Result<Document, CustomError> {
    bson::to_document(&body)
        .map_err(|e| CustomError::BadRequestError(format!("Unsupported document: {}", e)))
}
