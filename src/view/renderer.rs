/// View renderer
///
/// Maps view models to markup nodes, and recipes to plain text for the
/// terminal.

use crate::db::Recipe;
use crate::view::markup::{Element, Node};
use crate::view::models::{FormView, PageView, RecipeCard, RecipeDetail};

/// Shown in place of the grid when nothing matches
pub const NO_RECIPES: &str = "No recipes found. Add a recipe or try a different search.";

pub const PAGE_TITLE: &str = "Recipe Book";

const SEARCH_PLACEHOLDER: &str = "Search recipes or ingredients...";

pub struct ViewRenderer;

impl ViewRenderer {
    /// The recipe grid, or the placeholder when `cards` is empty
    pub fn recipe_list(cards: &[RecipeCard]) -> Node {
        let grid = Element::new("div").class("recipes-grid").attr("id", "recipes-list");

        if cards.is_empty() {
            return grid
                .child(Element::new("p").class("no-recipes").text(NO_RECIPES))
                .into();
        }

        grid.children(cards.iter().map(Self::recipe_card)).into()
    }

    pub fn recipe_card(card: &RecipeCard) -> Node {
        Element::new("div")
            .class("recipe-card")
            .attr("data-id", card.id)
            .child(
                Element::new("img")
                    .attr("src", &card.image_src)
                    .attr("alt", &card.name)
                    .class("recipe-image"),
            )
            .child(
                Element::new("div")
                    .class("recipe-info")
                    .child(Element::new("h3").class("recipe-title").text(card.name.as_str()))
                    .child(Element::new("p").class("recipe-summary").text(card.summary.as_str())),
            )
            .into()
    }

    /// The open overlay: backdrop, content box, close control and details
    pub fn recipe_detail(detail: &RecipeDetail) -> Node {
        let ingredients = Element::new("ul").class("ingredients-list").children(
            detail
                .ingredients
                .iter()
                .map(|i| Element::new("li").text(i.as_str())),
        );

        let instructions = Element::new("ol").class("instructions-list").children(
            detail
                .instructions
                .iter()
                .map(|s| Element::new("li").text(s.as_str())),
        );

        let details = Element::new("div")
            .class("recipe-details")
            .attr("id", "recipe-details-content")
            .child(
                Element::new("img")
                    .attr("src", &detail.image_src)
                    .attr("alt", &detail.name)
                    .class("detail-image"),
            )
            .child(Element::new("h2").class("detail-title").text(detail.name.as_str()))
            .child(
                Element::new("div")
                    .class("detail-section")
                    .child(Element::new("h3").text("Ingredients:"))
                    .child(ingredients),
            )
            .child(
                Element::new("div")
                    .class("detail-section")
                    .child(Element::new("h3").text("Instructions:"))
                    .child(instructions),
            );

        Element::new("div")
            .class("modal show")
            .attr("id", "recipe-details-modal")
            .child(
                Element::new("div")
                    .class("modal-content")
                    .child(Element::new("span").class("close-button").text("\u{00d7}"))
                    .child(details),
            )
            .into()
    }

    pub fn recipe_form(form: &FormView) -> Node {
        let preview = Element::new("div").class("image-preview-container");
        let preview = match &form.preview {
            Some(src) => preview.child(
                Element::new("img")
                    .attr("src", src)
                    .attr("alt", "Recipe preview")
                    .class("image-preview"),
            ),
            None => preview,
        };

        Element::new("div")
            .class("form-container")
            .child(Element::new("h2").text("Add New Recipe"))
            .child(
                Element::new("form")
                    .attr("id", "recipe-form")
                    .child(Self::form_group(
                        "recipe-name",
                        "Recipe Name",
                        Element::new("input")
                            .attr("type", "text")
                            .attr("id", "recipe-name")
                            .attr("value", &form.name)
                            .flag("required"),
                    ))
                    .child(Self::form_group(
                        "recipe-ingredients",
                        "Ingredients",
                        Element::new("textarea")
                            .attr("id", "recipe-ingredients")
                            .attr("placeholder", "Enter each ingredient on a new line")
                            .flag("required")
                            .text(form.ingredients.as_str()),
                    ))
                    .child(Self::form_group(
                        "recipe-instructions",
                        "Preparation Steps",
                        Element::new("textarea")
                            .attr("id", "recipe-instructions")
                            .attr("placeholder", "Enter each step on a new line")
                            .flag("required")
                            .text(form.instructions.as_str()),
                    ))
                    .child(Self::form_group(
                        "recipe-image",
                        "Upload Image",
                        Element::new("div")
                            .class("image-upload-container")
                            .child(
                                Element::new("input")
                                    .attr("type", "file")
                                    .attr("id", "recipe-image")
                                    .attr("accept", "image/*")
                                    .class("file-input"),
                            )
                            .child(preview),
                    ))
                    .child(Element::new("button").attr("type", "submit").text("Add Recipe")),
            )
            .into()
    }

    fn form_group(id: &str, label: &str, field: Element) -> Element {
        Element::new("div")
            .class("form-group")
            .child(Element::new("label").attr("for", id).text(label))
            .child(field)
    }

    /// The whole page as a node tree
    pub fn page(view: &PageView) -> Node {
        let header = Element::new("header")
            .child(Element::new("h1").text(PAGE_TITLE))
            .child(
                Element::new("div").class("search-container").child(
                    Element::new("input")
                        .attr("type", "text")
                        .attr("id", "searchInput")
                        .attr("placeholder", SEARCH_PLACEHOLDER)
                        .attr("value", &view.search_term),
                ),
            );

        let container = Element::new("div")
            .class("container")
            .child(
                Element::new("div")
                    .class("recipes-container")
                    .child(Element::new("h2").text("My Recipes"))
                    .child(Self::recipe_list(&view.cards)),
            )
            .child(Self::recipe_form(&view.form));

        let main = Element::new("main").child(container);
        let main = match &view.detail {
            Some(detail) => main.child(Self::recipe_detail(detail)),
            None => main,
        };

        Element::new("html")
            .attr("lang", "en")
            .child(
                Element::new("head")
                    .child(Element::new("meta").attr("charset", "utf-8"))
                    .child(Element::new("title").text(PAGE_TITLE)),
            )
            .child(
                Element::new("body")
                    .child(Element::new("div").class("app").child(header).child(main)),
            )
            .into()
    }

    /// Serialized HTML document
    pub fn render_page(view: &PageView) -> String {
        format!("<!DOCTYPE html>\n{}\n", Self::page(view).to_html())
    }

    /// Numbered terminal listing
    pub fn text_list(recipes: &[&Recipe]) -> String {
        if recipes.is_empty() {
            return format!("{}\n", NO_RECIPES);
        }

        let mut out = String::new();
        for (i, recipe) in recipes.iter().enumerate() {
            out.push_str(&format!(
                "{:3}. {} (id {})\n     {}\n",
                i + 1,
                recipe.name,
                recipe.id,
                recipe.summary()
            ));
        }
        out
    }

    /// Terminal version of the detail overlay
    pub fn text_detail(recipe: &Recipe) -> String {
        let mut out = format!("{}\nAdded: {}\n\nIngredients:\n", recipe.name, recipe.date_added);
        for ingredient in &recipe.ingredients {
            out.push_str(&format!("  - {}\n", ingredient));
        }
        out.push_str("\nInstructions:\n");
        for (i, step) in recipe.instructions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        out
    }
}
