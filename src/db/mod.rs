/// Database module for recipe-book
///
/// Local key-value storage on SQLite through sqlx, plus the models
/// persisted in it.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
