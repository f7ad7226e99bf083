pub mod db;
#[cfg(test)]
pub mod memory;
pub mod store;

pub use db::connect_to_mongo;
pub use store::{DeleteAck, DocumentStore, InsertAck, MongoStore, UpdateAck};

pub const VOLUNTEERS_COLLECTION: &str = "volunteers";
pub const REQUESTS_COLLECTION: &str = "requested";
