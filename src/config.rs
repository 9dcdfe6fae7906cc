// Runtime configuration, read from the environment
//
// RECIPE_BOOK_HOME         data directory (default ~/.recipe-book)
// RECIPE_BOOK_STORAGE_KEY  local storage slot for the collection (default "recipes")

use crate::core::DEFAULT_STORAGE_KEY;
use crate::error::{RecipeError, Result};
use std::env;
use std::path::PathBuf;

pub const HOME_VAR: &str = "RECIPE_BOOK_HOME";
pub const STORAGE_KEY_VAR: &str = "RECIPE_BOOK_STORAGE_KEY";

const DATA_DIR_NAME: &str = ".recipe-book";
const DB_FILE_NAME: &str = "recipes.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_vars(
            env::var(HOME_VAR).ok(),
            env::var(STORAGE_KEY_VAR).ok(),
            dirs::home_dir(),
        )
    }

    fn from_vars(
        home: Option<String>,
        storage_key: Option<String>,
        user_home: Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = match home.filter(|h| !h.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => user_home
                .map(|h| h.join(DATA_DIR_NAME))
                .ok_or_else(|| {
                    RecipeError::Config(format!(
                        "could not find a home directory; set {}",
                        HOME_VAR
                    ))
                })?,
        };

        let storage_key = storage_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        tracing::debug!(data_dir = %data_dir.display(), %storage_key, "loaded config");

        Ok(Self {
            data_dir,
            storage_key,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}
