//! Mock data every fresh store starts from.
//!
//! Dates are offsets from the store clock's "now", so the seeded expiry
//! alerts look the same whenever the process starts.

use chrono::{DateTime, Duration, Utc};

use crate::category::FoodCategory;
use crate::inventory::FoodItem;
use crate::recipe::{Recipe, RecipeVariant};
use crate::shopping::ShoppingListItem;
use crate::store::InventoryStore;

impl InventoryStore {
    /// Replace the store contents with the seed data, dated from the store clock.
    pub fn with_seed(mut self) -> Self {
        let now = self.now();
        self.load(seed_inventory(now), seed_recipes(), seed_shopping_list());
        self
    }
}

pub fn seed_inventory(now: DateTime<Utc>) -> Vec<FoodItem> {
    let item = |id: &str, name: &str, category, quantity, unit: &str, days| FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        quantity,
        unit: unit.to_string(),
        purchase_date: now,
        expiry_date: now + Duration::days(days),
        notes: None,
    };
    vec![
        item("1", "Apples", FoodCategory::Fruits, 5.0, "pcs", 7),
        item("2", "Milk", FoodCategory::Dairy, 1.0, "liter", 5),
        item("3", "Chicken Breast", FoodCategory::Meat, 500.0, "g", 2),
    ]
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![Recipe {
        id: "1".to_string(),
        title: "Apple Milk Smoothie".to_string(),
        ingredients: vec!["2 Apples".to_string(), "1 cup Milk".to_string()],
        instructions: vec![
            "Wash and core the apples.".to_string(),
            "Cut apples into chunks.".to_string(),
            "Blend apples and milk until smooth.".to_string(),
            "Serve chilled.".to_string(),
        ],
        prep_time: 5,
        cook_time: 0,
        servings: 2,
        variant: RecipeVariant::Core,
        additional_ingredients: None,
    }]
}

pub fn seed_shopping_list() -> Vec<ShoppingListItem> {
    vec![
        ShoppingListItem {
            id: "1".to_string(),
            name: "Bananas".to_string(),
            quantity: 6.0,
            unit: "pcs".to_string(),
            category: FoodCategory::Fruits,
            checked: false,
        },
        ShoppingListItem {
            id: "2".to_string(),
            name: "Bread".to_string(),
            quantity: 1.0,
            unit: "loaf".to_string(),
            category: FoodCategory::Bakery,
            checked: false,
        },
    ]
}
