//! Expiry alerts built from the store's derived list.

use serde::Serialize;

use crate::inventory::FoodItem;
use crate::shopping::NewShoppingItem;
use crate::store::InventoryStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryAlert {
    pub items: Vec<FoodItem>,
}

impl ExpiryAlert {
    /// `None` when nothing is expiring soon.
    pub fn from_store(store: &InventoryStore) -> Option<Self> {
        let items = store.expiring_items();
        if items.is_empty() {
            return None;
        }
        Some(Self { items: items.to_vec() })
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn message(&self) -> String {
        let n = self.count();
        let plural = if n > 1 { "s" } else { "" };
        format!("You have {n} item{plural} expiring soon.")
    }

    /// Shopping drafts that would restock every alerted item.
    pub fn restock_drafts(&self) -> Vec<NewShoppingItem> {
        self.items
            .iter()
            .map(|item| NewShoppingItem::restock(item.name.clone()))
            .collect()
    }
}
