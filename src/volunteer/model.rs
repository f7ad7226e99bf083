use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fields a `PUT /volunteers/{id}` is allowed to write. Anything else in the
/// body is dropped; a field the client omits is written as `null`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VolunteerPostFields {
    pub photo: Option<Value>,
    pub category: Option<Value>,
    pub location: Option<Value>,
    pub post_title: Option<Value>,
    /// Capacity, sent either as a number or a string.
    pub volunteers: Option<Value>,
    pub description: Option<Value>,
    pub current_time: Option<Value>,
    pub deadline_time: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}
