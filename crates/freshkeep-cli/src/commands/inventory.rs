//! Food inventory commands for CLI.

use clap::Subcommand;
use freshkeep_core::{ExpiryStatus, FoodCategory, FoodItem, FoodItemPatch, NewFoodItem};

use super::{check_quantity, format_date, offset_days, print_json, CommandResult, Session};

#[derive(Subcommand)]
pub enum InventoryAction {
    /// List inventory items
    List {
        /// Only show this category (e.g. "Dairy", "Canned Goods")
        #[arg(long)]
        category: Option<FoodCategory>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an item
    Add {
        /// Item name
        name: String,
        /// Category (default: Other)
        #[arg(long, default_value = "Other")]
        category: FoodCategory,
        /// Quantity (default: 1)
        #[arg(long, default_value = "1")]
        quantity: f64,
        /// Unit (default: pcs)
        #[arg(long, default_value = "pcs")]
        unit: String,
        /// Days until the item expires (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        expires_in: i64,
        /// Days since the item was bought (default: 0)
        #[arg(long, default_value = "0")]
        bought_days_ago: i64,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update an item; unknown ids are ignored
    Update {
        /// Item ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<FoodCategory>,
        #[arg(long)]
        quantity: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
        /// New expiry, in days from now
        #[arg(long, allow_hyphen_values = true)]
        expires_in: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an item; unknown ids are ignored
    Remove {
        /// Item ID
        id: String,
    },
}

pub fn run(action: InventoryAction, session: &Session) -> CommandResult {
    let store = session.store();

    match action {
        InventoryAction::List { category, json } => {
            let (now, items) = store.read(|s| {
                let items: Vec<FoodItem> = match category {
                    Some(c) => s.inventory_in_category(c).into_iter().cloned().collect(),
                    None => s.inventory().to_vec(),
                };
                (s.now(), items)
            })?;

            if json {
                return print_json(&items);
            }
            if items.is_empty() {
                println!("No items found. Add some items to your inventory!");
                return Ok(());
            }
            for item in &items {
                let badge = match item.status_at(now) {
                    ExpiryStatus::Expired => "  [expired]",
                    ExpiryStatus::ExpiringSoon => "  [expiring soon]",
                    ExpiryStatus::Fresh => "",
                };
                println!(
                    "{}  {}  {} {}  {}  expires {}{}",
                    item.id,
                    item.name,
                    item.quantity,
                    item.unit,
                    item.category,
                    format_date(item.expiry_date),
                    badge
                );
            }
        }
        InventoryAction::Add {
            name,
            category,
            quantity,
            unit,
            expires_in,
            bought_days_ago,
            notes,
        } => {
            let quantity = check_quantity(quantity)?;
            let now = store.read(|s| s.now())?;
            let expiry_date = offset_days(now, expires_in, "expires_in")?;
            let purchase_date = offset_days(now, bought_days_ago.saturating_neg(), "bought_days_ago")?;
            let id = store.write(|s| {
                s.add_food_item(NewFoodItem {
                    name,
                    category,
                    quantity,
                    unit,
                    purchase_date,
                    expiry_date,
                    notes,
                })
            })?;
            println!("Item added: {id}");
        }
        InventoryAction::Update {
            id,
            name,
            category,
            quantity,
            unit,
            expires_in,
            notes,
        } => {
            let quantity = quantity.map(check_quantity).transpose()?;
            let now = store.read(|s| s.now())?;
            let expiry_date = expires_in
                .map(|days| offset_days(now, days, "expires_in"))
                .transpose()?;
            store.write(|s| {
                s.update_food_item(
                    &id,
                    &FoodItemPatch {
                        name,
                        category,
                        quantity,
                        unit,
                        purchase_date: None,
                        expiry_date,
                        notes,
                    },
                );
            })?;
            println!("Item updated: {id}");
        }
        InventoryAction::Remove { id } => {
            store.write(|s| s.remove_food_item(&id))?;
            println!("Item removed: {id}");
        }
    }
    Ok(())
}
