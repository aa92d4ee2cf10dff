use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the store produces an Event.
/// Consumers drain them to know what to re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreEvent {
    FoodItemAdded {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
    FoodItemUpdated {
        id: String,
        at: DateTime<Utc>,
    },
    FoodItemRemoved {
        id: String,
        at: DateTime<Utc>,
    },
    RecipesGenerated {
        recipe_ids: Vec<String>,
        ingredients: Vec<String>,
        at: DateTime<Utc>,
    },
    ShoppingItemAdded {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
    ShoppingItemUpdated {
        id: String,
        at: DateTime<Utc>,
    },
    ShoppingItemRemoved {
        id: String,
        at: DateTime<Utc>,
    },
    ShoppingItemToggled {
        id: String,
        checked: bool,
        at: DateTime<Utc>,
    },
}

impl StoreEvent {
    /// True for events that change the inventory and so the expiring list.
    pub fn touches_inventory(&self) -> bool {
        matches!(
            self,
            StoreEvent::FoodItemAdded { .. }
                | StoreEvent::FoodItemUpdated { .. }
                | StoreEvent::FoodItemRemoved { .. }
        )
    }
}
