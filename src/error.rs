/// Error types for recipe-book
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for recipe-book operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Local storage (SQLite) errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Submission attempted without selecting an image
    #[error("No image was selected for the recipe")]
    MissingImage,

    /// The selected image file could not be read
    #[error("Failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No recipe with this id in the store
    #[error("Recipe not found: {0}")]
    RecipeNotFound(i64),

    /// Bad command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for recipe-book operations
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Convert RecipeError to the message shown to the user
impl RecipeError {
    pub fn user_message(&self) -> String {
        match self {
            RecipeError::Database(e) => {
                format!("Could not access saved recipes. Details: {}", e)
            }
            RecipeError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            RecipeError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            RecipeError::MissingImage => "Please upload an image for your recipe.".to_string(),
            RecipeError::ImageRead { .. } => {
                "Error reading the image file. Please try again.".to_string()
            }
            RecipeError::RecipeNotFound(id) => {
                format!("No recipe with id {}", id)
            }
            RecipeError::InvalidArgument(msg) => msg.clone(),
            RecipeError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}
