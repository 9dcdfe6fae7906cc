// One open recipe book: the store, the form being filled in, the search box
// and the overlay. Every user action goes through here.

use crate::core::form::{FormHandler, RecipeForm, Submission};
use crate::core::store::RecipeStore;
use crate::db::{Database, Recipe};
use crate::error::Result;
use crate::view::{
    FormView, Overlay, OverlayClick, PageView, RecipeCard, RecipeDetail, Transition, ViewRenderer,
};
use std::path::PathBuf;
use std::sync::Arc;

pub struct RecipeBook {
    store: RecipeStore,
    handler: FormHandler,
    form: RecipeForm,
    search_term: String,
    overlay: Overlay,
}

impl RecipeBook {
    /// Load the stored collection and start with an empty form and search
    pub async fn open(db: Arc<Database>, storage_key: impl Into<String>) -> Self {
        Self::with_store(RecipeStore::load(db, storage_key).await)
    }

    pub fn with_store(store: RecipeStore) -> Self {
        Self {
            store,
            handler: FormHandler::new(),
            form: RecipeForm::default(),
            search_term: String::new(),
            overlay: Overlay::Closed,
        }
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecipeForm {
        &mut self.form
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Search box changed
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Recipes matching the current search term
    pub fn visible(&self) -> Vec<&Recipe> {
        self.store.search(&self.search_term)
    }

    pub async fn select_image(&mut self, path: PathBuf) {
        self.handler.select_image(&mut self.form, path).await;
    }

    /// Submit the add-recipe form
    pub async fn submit(&mut self) -> Result<Submission> {
        self.handler.submit(&mut self.form, &mut self.store).await
    }

    /// Card clicked. Unknown ids leave the overlay closed.
    pub fn open_recipe(&mut self, id: i64) -> Option<Transition> {
        if self.store.get(id).is_none() {
            tracing::debug!(id, "no recipe to show");
            return None;
        }
        Some(self.overlay.open(id))
    }

    pub fn click_overlay(&mut self, target: OverlayClick) -> Option<Transition> {
        self.overlay.click(target)
    }

    /// Recipe bound to the open overlay
    pub fn selected(&self) -> Option<&Recipe> {
        self.overlay.selected().and_then(|id| self.store.get(id))
    }

    /// Drop every stored recipe; an open overlay is closed first
    pub async fn clear(&mut self) -> Result<()> {
        self.overlay.close();
        self.store.clear().await
    }

    pub fn page_view(&self) -> PageView {
        PageView {
            search_term: self.search_term.clone(),
            cards: self.visible().into_iter().map(RecipeCard::from).collect(),
            form: FormView::new(&self.form, self.handler.preview()),
            detail: self.selected().map(RecipeDetail::from),
        }
    }

    pub fn render(&self) -> String {
        ViewRenderer::render_page(&self.page_view())
    }
}
