/// recipe-book library
///
/// Local recipe catalog: a persisted recipe store, the form handler that
/// adds to it, and the views that show it.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod telemetry;
pub mod view;

// Re-exports for convenience
pub use config::Config;
pub use crate::core::{RecipeBook, RecipeStore};
pub use db::{Database, Recipe};
pub use error::{RecipeError, Result};
