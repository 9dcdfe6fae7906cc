/// Core functionality modules
///
/// Contains the recipe store, the form handler that feeds it, and the
/// session that ties them to the view.

pub mod data_url;
pub mod form;
pub mod session;
pub mod store;

pub use form::{FormHandler, RecipeForm, Submission};
pub use session::RecipeBook;
pub use store::{RecipeStore, DEFAULT_STORAGE_KEY};
