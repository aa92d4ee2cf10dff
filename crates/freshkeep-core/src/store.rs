//! The inventory state store.
//!
//! Owns the food inventory, generated recipes, and the shopping list, and
//! keeps the derived list of soon-to-expire items in sync with the
//! inventory. Every mutation is keyed by id and is a silent no-op when the
//! id is unknown; nothing here returns an error.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::category::FoodCategory;
use crate::clock::{Clock, SystemClock};
use crate::events::StoreEvent;
use crate::inventory::{in_expiry_window, FoodItem, FoodItemPatch, NewFoodItem};
use crate::recipe::{MockRecipeSource, Recipe, RecipeSource, RecipeVariant};
use crate::shopping::{
    group_by_category, CategoryGroup, NewShoppingItem, ShoppingItemPatch, ShoppingListItem,
};

/// Default width of the "expiring soon" window.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 3;

pub struct InventoryStore {
    inventory: Vec<FoodItem>,
    recipes: Vec<Recipe>,
    shopping_list: Vec<ShoppingListItem>,
    /// Derived from `inventory`; rebuilt after every inventory mutation.
    expiring: Vec<FoodItem>,
    expiry_window: Duration,
    clock: Box<dyn Clock>,
    source: Box<dyn RecipeSource>,
    events: Vec<StoreEvent>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Empty store on the wall clock with the mock recipe source.
    pub fn new() -> Self {
        Self {
            inventory: Vec::new(),
            recipes: Vec::new(),
            shopping_list: Vec::new(),
            expiring: Vec::new(),
            expiry_window: Duration::days(DEFAULT_EXPIRY_WINDOW_DAYS),
            clock: Box::new(SystemClock),
            source: Box::new(MockRecipeSource),
            events: Vec::new(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self.recompute_expiring();
        self
    }

    pub fn with_source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn with_expiry_window(mut self, window: Duration) -> Self {
        self.expiry_window = window;
        self.recompute_expiring();
        self
    }

    /// Change the "expiring soon" window and rebuild the derived list.
    pub fn set_expiry_window(&mut self, window: Duration) {
        self.expiry_window = window;
        self.recompute_expiring();
    }

    /// Replace all containers with the given contents. Records no events.
    pub(crate) fn load(
        &mut self,
        inventory: Vec<FoodItem>,
        recipes: Vec<Recipe>,
        shopping_list: Vec<ShoppingListItem>,
    ) {
        self.inventory = inventory;
        self.recipes = recipes;
        self.shopping_list = shopping_list;
        self.recompute_expiring();
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn expiry_window(&self) -> Duration {
        self.expiry_window
    }

    pub fn inventory(&self) -> &[FoodItem] {
        &self.inventory
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn shopping_list(&self) -> &[ShoppingListItem] {
        &self.shopping_list
    }

    pub fn expiring_items(&self) -> &[FoodItem] {
        &self.expiring
    }

    pub fn food_item(&self, id: &str) -> Option<&FoodItem> {
        self.inventory.iter().find(|item| item.id == id)
    }

    pub fn shopping_item(&self, id: &str) -> Option<&ShoppingListItem> {
        self.shopping_list.iter().find(|item| item.id == id)
    }

    pub fn inventory_in_category(&self, category: FoodCategory) -> Vec<&FoodItem> {
        self.inventory
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn recipes_of_variant(&self, variant: RecipeVariant) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.variant == variant).collect()
    }

    pub fn shopping_list_by_category(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(&self.shopping_list)
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Inventory ────────────────────────────────────────────────────

    /// Append an item under a fresh id and return that id.
    pub fn add_food_item(&mut self, item: NewFoodItem) -> String {
        let id = new_id();
        debug!(%id, name = %item.name, "adding food item");
        self.push_event(|at| StoreEvent::FoodItemAdded {
            id: id.clone(),
            name: item.name.clone(),
            at,
        });
        self.inventory.push(item.with_id(id.clone()));
        self.recompute_expiring();
        id
    }

    pub fn update_food_item(&mut self, id: &str, patch: &FoodItemPatch) {
        match self.inventory.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.apply(patch);
                debug!(%id, "updated food item");
                self.push_event(|at| StoreEvent::FoodItemUpdated { id: id.to_string(), at });
            }
            None => debug!(%id, "update ignored: no such food item"),
        }
        self.recompute_expiring();
    }

    pub fn remove_food_item(&mut self, id: &str) {
        let before = self.inventory.len();
        self.inventory.retain(|item| item.id != id);
        if self.inventory.len() != before {
            debug!(%id, "removed food item");
            self.push_event(|at| StoreEvent::FoodItemRemoved { id: id.to_string(), at });
        }
        self.recompute_expiring();
    }

    /// Rebuild the expiring list against the current time.
    ///
    /// Runs automatically after inventory mutations; call it directly when
    /// only the clock has moved.
    pub fn recompute_expiring(&mut self) {
        let now = self.clock.now();
        let window = self.expiry_window;
        self.expiring = self
            .inventory
            .iter()
            .filter(|item| in_expiry_window(item.expiry_date, now, window))
            .cloned()
            .collect();
        debug!(count = self.expiring.len(), "recomputed expiring items");
    }

    // ── Recipes ──────────────────────────────────────────────────────

    /// Append the suggestions for `ingredients` and return their ids.
    ///
    /// With the mock source this is always one core then one extended recipe.
    pub fn generate_recipes(&mut self, ingredients: &[String]) -> Vec<String> {
        let drafts = self.source.suggest(ingredients);
        debug!(
            source = self.source.name(),
            ingredients = ?ingredients,
            count = drafts.len(),
            "generated recipes"
        );
        let ids: Vec<String> = drafts
            .into_iter()
            .map(|draft| {
                let id = new_id();
                self.recipes.push(draft.with_id(id.clone()));
                id
            })
            .collect();
        self.push_event(|at| StoreEvent::RecipesGenerated {
            recipe_ids: ids.clone(),
            ingredients: ingredients.to_vec(),
            at,
        });
        ids
    }

    // ── Shopping list ────────────────────────────────────────────────

    pub fn add_to_shopping_list(&mut self, item: NewShoppingItem) -> String {
        let id = new_id();
        debug!(%id, name = %item.name, "adding shopping item");
        self.push_event(|at| StoreEvent::ShoppingItemAdded {
            id: id.clone(),
            name: item.name.clone(),
            at,
        });
        self.shopping_list.push(item.with_id(id.clone()));
        id
    }

    pub fn update_shopping_list_item(&mut self, id: &str, patch: &ShoppingItemPatch) {
        if let Some(item) = self.shopping_list.iter_mut().find(|item| item.id == id) {
            item.apply(patch);
            self.push_event(|at| StoreEvent::ShoppingItemUpdated { id: id.to_string(), at });
        }
    }

    pub fn remove_from_shopping_list(&mut self, id: &str) {
        let before = self.shopping_list.len();
        self.shopping_list.retain(|item| item.id != id);
        if self.shopping_list.len() != before {
            self.push_event(|at| StoreEvent::ShoppingItemRemoved { id: id.to_string(), at });
        }
    }

    pub fn toggle_shopping_list_item(&mut self, id: &str) {
        if let Some(item) = self.shopping_list.iter_mut().find(|item| item.id == id) {
            item.checked = !item.checked;
            let checked = item.checked;
            self.push_event(|at| StoreEvent::ShoppingItemToggled {
                id: id.to_string(),
                checked,
                at,
            });
        }
    }

    fn push_event(&mut self, build: impl FnOnce(DateTime<Utc>) -> StoreEvent) {
        let at = self.clock.now();
        self.events.push(build(at));
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 8, 30, 0).unwrap()
    }

    fn store() -> InventoryStore {
        InventoryStore::new().with_clock(FixedClock(now()))
    }

    fn food(name: &str, expires_in: Duration) -> NewFoodItem {
        NewFoodItem {
            name: name.to_string(),
            category: FoodCategory::Vegetables,
            quantity: 1.0,
            unit: "pcs".to_string(),
            purchase_date: now(),
            expiry_date: now() + expires_in,
            notes: None,
        }
    }

    #[test]
    fn huge_window_keeps_every_future_item() {
        let store = store().with_expiry_window(Duration::days(200_000_000)).with_seed();
        assert_eq!(store.expiring_items().len(), 3);
    }

    #[test]
    fn changing_window_rebuilds_expiring() {
        let mut store = store().with_seed();
        assert_eq!(store.expiring_items().len(), 1);
        store.set_expiry_window(Duration::days(6));
        let names: Vec<_> = store.expiring_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Chicken Breast"]);
    }

    fn bread() -> NewShoppingItem {
        NewShoppingItem {
            name: "Bread".into(),
            quantity: 1.0,
            unit: "loaf".into(),
            category: FoodCategory::Bakery,
        }
    }

    #[test]
    fn added_item_is_input_plus_id() {
        let mut store = store();
        let input = food("Carrots", Duration::days(6));
        let id = store.add_food_item(input.clone());
        assert_eq!(store.food_item(&id), Some(&input.with_id(id.clone())));
    }

    #[test]
    fn duplicate_names_are_not_merged() {
        let mut store = store();
        let a = store.add_food_item(food("Carrots", Duration::days(6)));
        let b = store.add_food_item(food("Carrots", Duration::days(6)));
        assert_ne!(a, b);
        assert_eq!(store.inventory().len(), 2);
    }

    #[test]
    fn expiring_list_uses_exclusive_window() {
        let mut store = store();
        let soon = store.add_food_item(food("Spinach", Duration::days(1)));
        store.add_food_item(food("Potatoes", Duration::days(4)));
        store.add_food_item(food("Lettuce", Duration::days(-1)));

        let expiring: Vec<_> = store.expiring_items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(expiring, vec![soon]);
    }

    #[test]
    fn expiring_list_follows_updates_and_removals() {
        let mut store = store();
        let id = store.add_food_item(food("Potatoes", Duration::days(10)));
        assert!(store.expiring_items().is_empty());

        store.update_food_item(
            &id,
            &FoodItemPatch {
                expiry_date: Some(now() + Duration::hours(12)),
                ..Default::default()
            },
        );
        assert_eq!(store.expiring_items().len(), 1);
        assert_eq!(store.expiring_items()[0].expiry_date, now() + Duration::hours(12));

        store.remove_food_item(&id);
        assert!(store.expiring_items().is_empty());
    }

    #[test]
    fn configured_window_widens_the_list() {
        let mut store = store().with_expiry_window(Duration::days(7));
        store.add_food_item(food("Potatoes", Duration::days(5)));
        assert_eq!(store.expiring_items().len(), 1);
    }

    #[test]
    fn misses_are_silent_and_record_nothing() {
        let mut store = store();
        let id = store.add_food_item(food("Carrots", Duration::days(2)));
        store.remove_food_item(&id);
        store.drain_events();

        store.update_food_item(&id, &FoodItemPatch { name: Some("x".into()), ..Default::default() });
        store.remove_food_item(&id);
        store.update_shopping_list_item("nope", &ShoppingItemPatch::default());
        store.remove_from_shopping_list("nope");
        store.toggle_shopping_list_item("nope");

        assert!(store.inventory().is_empty());
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn generate_appends_core_and_extended() {
        let mut store = store();
        let ids = store.generate_recipes(&["Eggs".to_string(), "Cheese".to_string()]);
        assert_eq!(ids.len(), 2);
        assert_eq!(store.recipes().len(), 2);

        let core = &store.recipes()[0];
        assert_eq!(core.variant, RecipeVariant::Core);
        assert_eq!(core.ingredients, vec!["1 Eggs", "1 Cheese"]);

        let extended = &store.recipes()[1];
        assert_eq!(extended.variant, RecipeVariant::Extended);
        assert_eq!(
            extended.ingredients,
            vec!["1 Eggs", "1 Cheese", "1 Onion", "2 cloves Garlic", "1 tbsp Olive Oil"]
        );
        assert_eq!(
            extended.additional_ingredients.as_deref(),
            Some(&["Onion".to_string(), "Garlic".to_string(), "Olive Oil".to_string()][..])
        );
        assert_eq!(store.recipes_of_variant(RecipeVariant::Core).len(), 1);
    }

    #[test]
    fn shopping_items_start_unchecked_and_toggle() {
        let mut store = store();
        let id = store.add_to_shopping_list(bread());
        assert!(!store.shopping_item(&id).unwrap().checked);

        store.toggle_shopping_list_item(&id);
        assert!(store.shopping_item(&id).unwrap().checked);

        store.remove_from_shopping_list(&id);
        assert!(store.shopping_item(&id).is_none());
    }

    #[test]
    fn events_are_recorded_in_order() {
        let mut store = store();
        let food_id = store.add_food_item(food("Carrots", Duration::days(6)));
        let shop_id = store.add_to_shopping_list(bread());
        store.toggle_shopping_list_item(&shop_id);

        let events = store.drain_events();
        assert_eq!(events.len(), 3);
        assert!(events[0].touches_inventory());
        assert_eq!(
            events[2],
            StoreEvent::ShoppingItemToggled { id: shop_id, checked: true, at: now() }
        );
        assert!(matches!(&events[0], StoreEvent::FoodItemAdded { id, .. } if *id == food_id));
        assert!(store.drain_events().is_empty());
    }

    proptest! {
        #[test]
        fn update_is_idempotent(quantity in 0.0f64..10_000.0, days in -30i64..30, name in "[A-Za-z ]{1,20}") {
            let mut store = store();
            let id = store.add_food_item(food("Carrots", Duration::days(2)));
            let patch = FoodItemPatch {
                name: Some(name),
                quantity: Some(quantity),
                expiry_date: Some(now() + Duration::days(days)),
                ..Default::default()
            };

            store.update_food_item(&id, &patch);
            let once = store.food_item(&id).cloned();
            let expiring_once = store.expiring_items().to_vec();
            store.update_food_item(&id, &patch);
            prop_assert_eq!(store.food_item(&id).cloned(), once);
            prop_assert_eq!(store.expiring_items().to_vec(), expiring_once);
        }

        #[test]
        fn toggling_twice_restores_checked(start_checked: bool) {
            let mut store = store();
            let id = store.add_to_shopping_list(bread());
            store.update_shopping_list_item(&id, &ShoppingItemPatch { checked: Some(start_checked), ..Default::default() });

            store.toggle_shopping_list_item(&id);
            store.toggle_shopping_list_item(&id);
            prop_assert_eq!(store.shopping_item(&id).unwrap().checked, start_checked);
        }
    }
}
