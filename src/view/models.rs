/// View models
///
/// Plain data pulled out of recipes for rendering. They borrow nothing from
/// the store and hold only what the markup shows.

use crate::core::RecipeForm;
use crate::db::Recipe;

/// One card in the recipe grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: i64,
    pub name: String,
    pub image_src: String,
    pub summary: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image_src: recipe.image_data.clone(),
            summary: recipe.summary(),
        }
    }
}

/// Contents of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub name: String,
    pub image_src: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            image_src: recipe.image_data.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }
}

/// Current state of the add-recipe form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub preview: Option<String>,
}

impl FormView {
    pub fn new(form: &RecipeForm, preview: Option<&str>) -> Self {
        Self {
            name: form.name.clone(),
            ingredients: form.ingredients.clone(),
            instructions: form.instructions.clone(),
            preview: preview.map(str::to_string),
        }
    }
}

/// Everything on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub search_term: String,
    pub cards: Vec<RecipeCard>,
    pub form: FormView,
    pub detail: Option<RecipeDetail>,
}
