// Turns raw form input into a saved recipe
//
// Normalizes the text fields, waits for the image to be encoded, then hands
// the finished recipe to the store. Nothing is written unless every step
// before it worked.

use crate::core::data_url;
use crate::core::store::RecipeStore;
use crate::db::Recipe;
use crate::error::{RecipeError, Result};
use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;

/// Raw add-recipe form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub name: String,
    pub ingredients: String,  // one per line
    pub instructions: String, // one step per line
    pub image: Option<PathBuf>,
}

impl RecipeForm {
    /// Clear every field, including the selected file
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A successful submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub recipe: Recipe,
    pub message: String,
}

/// Split a multi-line field into trimmed, non-empty lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default)]
pub struct FormHandler {
    preview: Option<String>,
}

impl FormHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data URL of the currently selected image, if it could be read
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Record a file selection and build its preview
    ///
    /// A new selection replaces whatever preview was there. A file that
    /// can't be read just leaves no preview; submit reports the error.
    pub async fn select_image(&mut self, form: &mut RecipeForm, path: PathBuf) {
        self.preview = match data_url::read_as_data_url(&path).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, "image preview failed");
                None
            }
        };
        form.image = Some(path);
    }

    /// Validate the form, encode the image and add the recipe to the store
    ///
    /// # Returns
    /// * `Ok(Submission)` - The saved recipe and the confirmation message
    /// * `Err(RecipeError::MissingImage)` - No file selected
    /// * `Err(RecipeError::ImageRead)` - The file couldn't be read
    ///
    /// The form is only cleared on success.
    pub async fn submit(
        &mut self,
        form: &mut RecipeForm,
        store: &mut RecipeStore,
    ) -> Result<Submission> {
        let path = form.image.clone().ok_or_else(|| {
            tracing::warn!("submission without an image");
            RecipeError::MissingImage
        })?;

        let image_data = data_url::read_as_data_url(&path).await?;

        let recipe = Recipe {
            id: store.next_id(),
            name: form.name.trim().to_string(),
            ingredients: split_lines(&form.ingredients),
            instructions: split_lines(&form.instructions),
            image_data,
            date_added: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        store.add(recipe.clone()).await?;

        form.reset();
        self.preview = None;

        let message = format!("Recipe \"{}\" has been added!", recipe.name);
        Ok(Submission { recipe, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DEFAULT_STORAGE_KEY;
    use crate::db::Database;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    async fn create_test_store() -> RecipeStore {
        let db = Database::new_test().await.unwrap();
        RecipeStore::load(Arc::new(db), DEFAULT_STORAGE_KEY).await
    }

    fn image_file() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();
        file
    }

    fn pasta_form(image: Option<PathBuf>) -> RecipeForm {
        RecipeForm {
            name: "  Pasta ".to_string(),
            ingredients: "Pasta\n\n  Water  \n   \n".to_string(),
            instructions: "Boil water\r\nAdd pasta\r\n".to_string(),
            image,
        }
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(" a \n\n b\r\n  \n"), vec!["a", "b"]);
        assert!(split_lines("").is_empty());
        assert!(split_lines(" \n \t\n").is_empty());
    }

    #[tokio::test]
    async fn test_submit_pasta() {
        let mut store = create_test_store().await;
        let mut handler = FormHandler::new();
        let file = image_file();
        let mut form = pasta_form(Some(file.path().to_path_buf()));

        let submission = handler.submit(&mut form, &mut store).await.unwrap();
        let recipe = &submission.recipe;

        assert_eq!(recipe.name, "Pasta");
        assert_eq!(recipe.ingredients, vec!["Pasta", "Water"]);
        assert_eq!(recipe.instructions, vec!["Boil water", "Add pasta"]);
        assert!(recipe.image_data.starts_with("data:image/jpeg;base64,"));
        assert!(recipe.date_added.ends_with('Z'));
        assert_eq!(submission.message, "Recipe \"Pasta\" has been added!");

        let all = store.search("");
        assert_eq!(all.iter().filter(|r| r.id == recipe.id).count(), 1);
    }

    #[tokio::test]
    async fn test_submit_resets_form() {
        let mut store = create_test_store().await;
        let mut handler = FormHandler::new();
        let file = image_file();
        let mut form = RecipeForm::default();

        handler
            .select_image(&mut form, file.path().to_path_buf())
            .await;
        assert!(handler.preview().is_some());

        form.name = "Toast".to_string();
        form.ingredients = "Bread".to_string();
        form.instructions = "Toast it".to_string();
        handler.submit(&mut form, &mut store).await.unwrap();

        assert_eq!(form, RecipeForm::default());
        assert!(handler.preview().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_image() {
        let mut store = create_test_store().await;
        let mut handler = FormHandler::new();
        let mut form = pasta_form(None);

        let result = handler.submit(&mut form, &mut store).await;

        match result {
            Err(RecipeError::MissingImage) => {}
            _ => panic!("Expected MissingImage error"),
        }
        assert!(store.is_empty());
        assert_eq!(form.name, "  Pasta ");
    }

    #[tokio::test]
    async fn test_submit_unreadable_image() {
        let mut store = create_test_store().await;
        let mut handler = FormHandler::new();
        let dir = tempfile::tempdir().unwrap();
        let mut form = pasta_form(Some(dir.path().join("gone.png")));

        let result = handler.submit(&mut form, &mut store).await;

        match result {
            Err(RecipeError::ImageRead { .. }) => {}
            _ => panic!("Expected ImageRead error"),
        }
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_new_selection_supersedes_preview() {
        let mut handler = FormHandler::new();
        let mut form = RecipeForm::default();
        let file = image_file();
        let dir = tempfile::tempdir().unwrap();

        handler
            .select_image(&mut form, file.path().to_path_buf())
            .await;
        assert!(handler.preview().is_some());

        let missing = dir.path().join("missing.png");
        handler.select_image(&mut form, missing.clone()).await;
        assert!(handler.preview().is_none());
        assert_eq!(form.image, Some(missing));
    }

    #[tokio::test]
    async fn test_quick_submissions_get_distinct_ids() {
        let mut store = create_test_store().await;
        let mut handler = FormHandler::new();
        let file = image_file();

        for _ in 0..3 {
            let mut form = pasta_form(Some(file.path().to_path_buf()));
            handler.submit(&mut form, &mut store).await.unwrap();
        }

        let mut ids: Vec<i64> = store.list().iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
