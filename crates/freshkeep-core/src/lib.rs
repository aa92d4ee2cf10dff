//! # FreshKeep Core Library
//!
//! This library provides the core logic for the FreshKeep household food
//! tracker. All domain state lives in memory and is seeded from mock data on
//! every start; the CLI binary is a thin layer over the same store.
//!
//! ## Architecture
//!
//! - **Store**: an explicitly owned container for the inventory, recipes and
//!   shopping list, which keeps the derived "expiring soon" list in sync
//! - **Context**: a provider that owns the store and hands out weak handles
//! - **Generation**: delayed, cancellable recipe generation on tokio
//! - **Storage**: TOML-based configuration only
//!
//! ## Key Components
//!
//! - [`InventoryStore`]: Core state container
//! - [`StoreProvider`] / [`StoreHandle`]: Ownership and access boundary
//! - [`RecipeGeneration`]: In-flight generation request
//! - [`Config`]: Application configuration management

pub mod analytics;
pub mod category;
pub mod clock;
pub mod context;
pub mod error;
pub mod events;
pub mod generation;
pub mod inventory;
pub mod notifications;
pub mod recipe;
pub mod seed;
pub mod shopping;
pub mod storage;
pub mod store;

pub use analytics::{CategoryShare, Dashboard};
pub use category::FoodCategory;
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{StoreHandle, StoreProvider};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::StoreEvent;
pub use generation::{GenerationOutcome, RecipeGeneration, DEFAULT_GENERATION_DELAY};
pub use inventory::{ExpiryStatus, FoodItem, FoodItemPatch, NewFoodItem};
pub use notifications::ExpiryAlert;
pub use recipe::{MockRecipeSource, Recipe, RecipeDraft, RecipeSource, RecipeVariant};
pub use shopping::{NewShoppingItem, ShoppingItemPatch, ShoppingListItem};
pub use storage::Config;
pub use store::InventoryStore;
