/// View module
///
/// Renders the recipe grid, the detail overlay and the add-recipe form from
/// view models. Markup is built as a node tree and escaped on output.

pub mod markup;
pub mod models;
pub mod overlay;
pub mod renderer;

pub use markup::{Element, Node};
pub use models::{FormView, PageView, RecipeCard, RecipeDetail};
pub use overlay::{Overlay, OverlayClick, Transition};
pub use renderer::ViewRenderer;
