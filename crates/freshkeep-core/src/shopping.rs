//! Shopping list entries.

use serde::{Deserialize, Serialize};

use crate::category::FoodCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: FoodCategory,
    pub checked: bool,
}

/// A shopping entry before the store assigns its id. New entries start unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: FoodCategory,
}

impl NewShoppingItem {
    /// One generic unit of `name`, filed under Other.
    ///
    /// Used when restocking from an expiry alert or a recipe ingredient.
    pub fn restock(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1.0,
            unit: "item".to_string(),
            category: FoodCategory::Other,
        }
    }

    pub(crate) fn with_id(self, id: String) -> ShoppingListItem {
        ShoppingListItem {
            id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            category: self.category,
            checked: false,
        }
    }
}

/// Partial update for a [`ShoppingListItem`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItemPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<FoodCategory>,
    pub checked: Option<bool>,
}

impl ShoppingListItem {
    pub fn apply(&mut self, patch: &ShoppingItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = &patch.unit {
            self.unit = unit.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(checked) = patch.checked {
            self.checked = checked;
        }
    }
}

/// Entries of one category, as the shopping list groups them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: FoodCategory,
    pub items: Vec<&'a ShoppingListItem>,
}

/// Group entries by category, keeping categories in first-seen order.
pub fn group_by_category(items: &[ShoppingListItem]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item],
            }),
        }
    }
    groups
}
