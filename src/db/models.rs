/// Data models for stored entities
///
/// Recipes are persisted as one JSON array, so field names follow the
/// camelCase shape of the stored blob.

use serde::{Deserialize, Serialize};

/// A saved recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_data: String, // data:<mime>;base64,<payload>
    pub date_added: String, // ISO 8601, set once at creation
}

impl Recipe {
    /// Case-insensitive substring match against name, ingredients and steps
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(needle))
            || self
                .instructions
                .iter()
                .any(|s| s.to_lowercase().contains(needle))
    }

    /// `{N} ingredients | {M} steps`
    pub fn summary(&self) -> String {
        format!(
            "{} ingredients | {} steps",
            self.ingredients.len(),
            self.instructions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> Recipe {
        Recipe {
            id: 1,
            name: "Tomato Soup".to_string(),
            ingredients: vec!["Tomatoes".to_string(), "Basil".to_string()],
            instructions: vec!["Simmer for 20 minutes".to_string()],
            image_data: "data:image/png;base64,AA==".to_string(),
            date_added: "2025-11-25T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_recipe_matches() {
        let recipe = soup();

        assert!(recipe.matches("tomato"));
        assert!(recipe.matches("mat"));
        assert!(recipe.matches("basil"));
        assert!(recipe.matches("simmer"));
        assert!(recipe.matches(""));
        assert!(!recipe.matches("zzz"));
    }

    #[test]
    fn test_recipe_summary() {
        assert_eq!(soup().summary(), "2 ingredients | 1 steps");
    }

    #[test]
    fn test_recipe_json_shape() {
        let json = serde_json::to_value(soup()).unwrap();

        assert!(json.get("imageData").is_some());
        assert!(json.get("dateAdded").is_some());
        assert!(json.get("image_data").is_none());
    }

    #[test]
    fn test_recipe_reads_stored_blob() {
        let blob = r#"[{"id":1700000000000,"name":"Pasta","ingredients":["Pasta","Water"],
            "instructions":["Boil water","Add pasta"],"imageData":"data:image/jpeg;base64,/9j/",
            "dateAdded":"2023-11-14T22:13:20.000Z"}]"#;

        let recipes: Vec<Recipe> = serde_json::from_str(blob).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].ingredients.len(), 2);
        assert_eq!(recipes[0].image_data, "data:image/jpeg;base64,/9j/");
    }
}
