//! Recipe suggestions and the source that produces them.
//!
//! Recipes are only ever created by generation and are never edited or
//! removed. Each generation yields one `core` recipe that uses exactly the
//! selected ingredients and one `extended` recipe that adds a few pantry
//! staples on top.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Pantry staples the extended suggestion always adds.
pub const EXTENDED_STAPLES: [(&str, &str); 3] = [
    ("1 Onion", "Onion"),
    ("2 cloves Garlic", "Garlic"),
    ("1 tbsp Olive Oil", "Olive Oil"),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecipeVariant {
    /// Uses only the selected ingredients.
    Core,
    /// Selected ingredients plus extra staples.
    Extended,
}

impl fmt::Display for RecipeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeVariant::Core => f.write_str("core"),
            RecipeVariant::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for RecipeVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(RecipeVariant::Core),
            "extended" => Ok(RecipeVariant::Extended),
            _ => Err(ValidationError::UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub variant: RecipeVariant,
    /// Only set on extended recipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_ingredients: Option<Vec<String>>,
}

impl Recipe {
    /// Item name to put on the shopping list for an ingredient line.
    ///
    /// Takes the last word: `"2 cloves Garlic"` becomes `"Garlic"`.
    pub fn shopping_name(ingredient: &str) -> &str {
        ingredient.split_whitespace().last().unwrap_or("")
    }

    /// Shopping-list name for one of this recipe's ingredient lines, if the
    /// line may be restocked.
    ///
    /// Only extended recipes offer this, and only for lines naming one of
    /// their `additional_ingredients`: by last word, or by the staple line it
    /// was built from (so `"1 tbsp Olive Oil"` maps to `"Olive Oil"`).
    pub fn restock_name(&self, ingredient: &str) -> Option<&str> {
        if self.variant != RecipeVariant::Extended {
            return None;
        }
        let extras = self.additional_ingredients.as_deref()?;
        let staple = EXTENDED_STAPLES
            .iter()
            .find(|(line, _)| *line == ingredient)
            .map(|(_, name)| *name);
        let last = Self::shopping_name(ingredient);
        extras
            .iter()
            .map(String::as_str)
            .find(|extra| Some(*extra) == staple || *extra == last)
    }

    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// A recipe before the store gives it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub variant: RecipeVariant,
    pub additional_ingredients: Option<Vec<String>>,
}

impl RecipeDraft {
    pub(crate) fn with_id(self, id: String) -> Recipe {
        Recipe {
            id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            variant: self.variant,
            additional_ingredients: self.additional_ingredients,
        }
    }
}

/// Anything that can turn a list of ingredient names into recipe drafts.
pub trait RecipeSource: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    fn suggest(&self, ingredients: &[String]) -> Vec<RecipeDraft>;
}

/// Deterministic stand-in for a real suggestion service.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRecipeSource;

impl MockRecipeSource {
    fn core(ingredients: &[String]) -> RecipeDraft {
        RecipeDraft {
            title: format!("Recipe with {}", ingredients.join(", ")),
            ingredients: ingredient_lines(ingredients),
            instructions: vec![
                "Mix all ingredients together.".to_string(),
                "Cook for 10 minutes.".to_string(),
                "Serve hot.".to_string(),
            ],
            prep_time: 10,
            cook_time: 15,
            servings: 4,
            variant: RecipeVariant::Core,
            additional_ingredients: None,
        }
    }

    fn extended(ingredients: &[String]) -> RecipeDraft {
        let mut lines = ingredient_lines(ingredients);
        lines.extend(EXTENDED_STAPLES.iter().map(|(line, _)| line.to_string()));
        RecipeDraft {
            title: format!("Enhanced Recipe with {}", ingredients.join(", ")),
            ingredients: lines,
            instructions: vec![
                "Chop all vegetables.".to_string(),
                "Heat oil in a pan.".to_string(),
                "Sauté garlic and onion until fragrant.".to_string(),
                "Add remaining ingredients.".to_string(),
                "Cook for 15 minutes.".to_string(),
                "Season to taste and serve.".to_string(),
            ],
            prep_time: 15,
            cook_time: 20,
            servings: 4,
            variant: RecipeVariant::Extended,
            additional_ingredients: Some(
                EXTENDED_STAPLES.iter().map(|(_, name)| name.to_string()).collect(),
            ),
        }
    }
}

impl RecipeSource for MockRecipeSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn suggest(&self, ingredients: &[String]) -> Vec<RecipeDraft> {
        vec![Self::core(ingredients), Self::extended(ingredients)]
    }
}

fn ingredient_lines(ingredients: &[String]) -> Vec<String> {
    ingredients.iter().map(|name| format!("1 {name}")).collect()
}
