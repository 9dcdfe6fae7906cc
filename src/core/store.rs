/// Recipe store
///
/// Owns the authoritative in-memory recipe list and mirrors it to one
/// local storage slot as a JSON array.

use crate::db::{Database, Recipe};
use crate::error::Result;
use chrono::Utc;
use std::sync::Arc;

/// Default local storage key for the recipe collection
pub const DEFAULT_STORAGE_KEY: &str = "recipes";

pub struct RecipeStore {
    db: Arc<Database>,
    key: String,
    recipes: Vec<Recipe>,
    last_id: i64,
}

impl RecipeStore {
    /// Load the persisted collection
    ///
    /// A missing slot, an unreadable slot, or a blob that doesn't parse all
    /// come back as an empty store. Nothing is surfaced to the user.
    pub async fn load(db: Arc<Database>, key: impl Into<String>) -> Self {
        let key = key.into();

        let recipes = match db.get_item(&key).await {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Recipe>>(&blob) {
                Ok(recipes) => recipes,
                Err(e) => {
                    tracing::warn!(%key, error = %e, "stored recipes are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "could not read stored recipes, starting empty");
                Vec::new()
            }
        };

        let last_id = recipes.iter().map(|r| r.id).max().unwrap_or(0);
        tracing::debug!(%key, count = recipes.len(), "loaded recipes");

        Self {
            db,
            key,
            recipes,
            last_id,
        }
    }

    /// Append a recipe and write the whole collection back
    ///
    /// If the write fails the append is undone, so memory and storage
    /// never disagree.
    pub async fn add(&mut self, recipe: Recipe) -> Result<()> {
        self.last_id = self.last_id.max(recipe.id);
        self.recipes.push(recipe);

        if let Err(e) = self.persist().await {
            self.recipes.pop();
            return Err(e);
        }

        tracing::info!(count = self.recipes.len(), "saved recipe collection");
        Ok(())
    }

    /// Recipes whose name, ingredients or steps contain `term`, ignoring case
    ///
    /// An empty term returns everything. Insertion order is kept.
    pub fn search(&self, term: &str) -> Vec<&Recipe> {
        let needle = term.to_lowercase();
        self.recipes.iter().filter(|r| r.matches(&needle)).collect()
    }

    /// All recipes in insertion order
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Drop the whole collection, in memory and in storage
    pub async fn clear(&mut self) -> Result<()> {
        self.db.remove_item(&self.key).await?;
        self.recipes.clear();
        tracing::info!(key = %self.key, "cleared recipe collection");
        Ok(())
    }

    /// Next recipe id: the current time in milliseconds, bumped past the
    /// last id handed out so two recipes in the same millisecond still differ
    pub fn next_id(&mut self) -> i64 {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    fn next_id_at(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    async fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.recipes)?;
        self.db.set_item(&self.key, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, name: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: steps.iter().map(|s| s.to_string()).collect(),
            image_data: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            date_added: "2025-11-25T00:00:00.000Z".to_string(),
        }
    }

    async fn setup() -> (RecipeStore, Arc<Database>) {
        let db = Arc::new(Database::new_test().await.unwrap());
        let store = RecipeStore::load(Arc::clone(&db), DEFAULT_STORAGE_KEY).await;
        (store, db)
    }

    #[tokio::test]
    async fn test_load_empty() {
        let (store, _db) = setup().await;

        assert!(store.is_empty());
        assert!(store.search("anything").is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_falls_back_to_empty() {
        let db = Arc::new(Database::new_test().await.unwrap());
        db.set_item(DEFAULT_STORAGE_KEY, "{not json").await.unwrap();

        let store = RecipeStore::load(Arc::clone(&db), DEFAULT_STORAGE_KEY).await;
        assert!(store.is_empty());

        db.set_item(DEFAULT_STORAGE_KEY, "null").await.unwrap();
        let store = RecipeStore::load(db, DEFAULT_STORAGE_KEY).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_add_persists_whole_collection() {
        let (mut store, db) = setup().await;

        store
            .add(recipe(1, "Pasta", &["Pasta", "Water"], &["Boil water", "Add pasta"]))
            .await
            .unwrap();
        store
            .add(recipe(2, "Toast", &["Bread"], &["Toast it"]))
            .await
            .unwrap();

        let blob = db.get_item(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
        let stored: Vec<Recipe> = serde_json::from_str(&blob).unwrap();
        assert_eq!(stored, store.list());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (mut store, db) = setup().await;

        store
            .add(recipe(1, "Tomato Soup", &["Tomatoes"], &["Simmer"]))
            .await
            .unwrap();
        store
            .add(recipe(2, "Pasta", &["Pasta", "Water"], &["Boil water", "Add pasta"]))
            .await
            .unwrap();

        let reloaded = RecipeStore::load(db, DEFAULT_STORAGE_KEY).await;
        assert_eq!(reloaded.list(), store.list());
    }

    #[tokio::test]
    async fn test_search_case_insensitive_substring() {
        let (mut store, _db) = setup().await;
        store
            .add(recipe(1, "Tomato Soup", &["Tomatoes", "Salt"], &["Simmer gently"]))
            .await
            .unwrap();

        assert_eq!(store.search("tomato").len(), 1);
        assert_eq!(store.search("TOMATO").len(), 1);
        assert_eq!(store.search("mat").len(), 1);
        assert!(store.search("zzz").is_empty());
    }

    #[tokio::test]
    async fn test_search_looks_at_ingredients_and_steps() {
        let (mut store, _db) = setup().await;
        store
            .add(recipe(1, "Pancakes", &["Flour", "Milk"], &["Whisk"]))
            .await
            .unwrap();
        store
            .add(recipe(2, "Omelette", &["Eggs"], &["Whisk the eggs", "Fry"]))
            .await
            .unwrap();
        store
            .add(recipe(3, "Salad", &["Lettuce"], &["Toss"]))
            .await
            .unwrap();

        let names: Vec<&str> = store.search("whisk").into_iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pancakes", "Omelette"]);

        let names: Vec<&str> = store.search("milk").into_iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pancakes"]);

        assert_eq!(store.search("").len(), 3);
    }

    #[tokio::test]
    async fn test_get_and_clear() {
        let (mut store, db) = setup().await;
        store
            .add(recipe(7, "Toast", &["Bread"], &["Toast it"]))
            .await
            .unwrap();

        assert_eq!(store.get(7).map(|r| r.name.as_str()), Some("Toast"));
        assert!(store.get(8).is_none());

        store.clear().await.unwrap();
        assert!(store.is_empty());
        assert_eq!(db.get_item(DEFAULT_STORAGE_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_within_a_millisecond() {
        let (mut store, _db) = setup().await;

        let a = store.next_id_at(1_000);
        let b = store.next_id_at(1_000);
        let c = store.next_id_at(999);
        let d = store.next_id_at(5_000);

        assert_eq!(a, 1_000);
        assert_eq!(b, 1_001);
        assert_eq!(c, 1_002);
        assert_eq!(d, 5_000);
    }

    #[tokio::test]
    async fn test_ids_continue_after_loaded_recipes() {
        let (mut store, db) = setup().await;
        let future = Utc::now().timestamp_millis() + 60_000;
        store
            .add(recipe(future, "Later", &["x"], &["y"]))
            .await
            .unwrap();

        let mut reloaded = RecipeStore::load(db, DEFAULT_STORAGE_KEY).await;
        assert_eq!(reloaded.next_id(), future + 1);
    }

    #[tokio::test]
    async fn test_next_id_after_largest_possible_id() {
        let db = Arc::new(Database::new_test().await.unwrap());
        let blob = serde_json::to_string(&vec![recipe(i64::MAX, "Last", &["x"], &["y"])]).unwrap();
        db.set_item(DEFAULT_STORAGE_KEY, &blob).await.unwrap();

        let mut store = RecipeStore::load(db, DEFAULT_STORAGE_KEY).await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), i64::MAX);
    }

    #[tokio::test]
    async fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.db");

        let db = Arc::new(Database::new(&path).await.unwrap());
        let mut store = RecipeStore::load(Arc::clone(&db), DEFAULT_STORAGE_KEY).await;
        store
            .add(recipe(1, "Tomato Soup", &["Tomatoes"], &["Simmer"]))
            .await
            .unwrap();
        store
            .add(recipe(2, "Pasta", &["Pasta", "Water"], &["Boil water", "Add pasta"]))
            .await
            .unwrap();
        let saved = store.list().to_vec();
        db.close().await;

        let reopened = Arc::new(Database::new(&path).await.unwrap());
        let reloaded = RecipeStore::load(reopened, DEFAULT_STORAGE_KEY).await;
        assert_eq!(reloaded.list(), saved.as_slice());
        assert_eq!(reloaded.key(), DEFAULT_STORAGE_KEY);
    }
}
