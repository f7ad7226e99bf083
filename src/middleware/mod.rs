pub mod auth;
pub mod cors;
pub mod logger;
pub mod not_found;
