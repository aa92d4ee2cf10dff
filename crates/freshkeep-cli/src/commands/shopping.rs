//! Shopping list commands for CLI.

use clap::Subcommand;
use freshkeep_core::{FoodCategory, NewShoppingItem, ShoppingItemPatch, ShoppingListItem};

use super::{check_quantity, print_json, CommandResult, Session};

#[derive(Subcommand)]
pub enum ShoppingAction {
    /// Show the list grouped by category
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an entry
    Add {
        /// Entry name
        name: String,
        /// Quantity (default: 1)
        #[arg(long, default_value = "1")]
        quantity: f64,
        /// Unit (default: pcs)
        #[arg(long, default_value = "pcs")]
        unit: String,
        /// Category (default: Other)
        #[arg(long, default_value = "Other")]
        category: FoodCategory,
    },
    /// Update an entry; unknown ids are ignored
    Update {
        /// Entry ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        category: Option<FoodCategory>,
        #[arg(long)]
        checked: Option<bool>,
    },
    /// Remove an entry; unknown ids are ignored
    Remove {
        /// Entry ID
        id: String,
    },
    /// Flip an entry's checked flag; unknown ids are ignored
    Toggle {
        /// Entry ID
        id: String,
    },
    /// Add one generic unit of an item, e.g. from an expiry alert
    Restock {
        /// Item name
        name: String,
    },
}

pub fn run(action: ShoppingAction, session: &Session) -> CommandResult {
    let store = session.store();

    match action {
        ShoppingAction::List { json } => {
            if json {
                let items: Vec<ShoppingListItem> = store.read(|s| s.shopping_list().to_vec())?;
                return print_json(&items);
            }
            let lines: Vec<String> = store.read(|s| {
                let mut lines = Vec::new();
                for group in s.shopping_list_by_category() {
                    lines.push(format!("{}:", group.category));
                    for item in group.items {
                        let mark = if item.checked { "x" } else { " " };
                        lines.push(format!(
                            "  [{mark}] {}  {} {} {}",
                            item.id, item.quantity, item.unit, item.name
                        ));
                    }
                }
                lines
            })?;
            if lines.is_empty() {
                println!("Your shopping list is empty.");
            }
            for line in lines {
                println!("{line}");
            }
        }
        ShoppingAction::Add {
            name,
            quantity,
            unit,
            category,
        } => {
            let quantity = check_quantity(quantity)?;
            let id = store.write(|s| {
                s.add_to_shopping_list(NewShoppingItem {
                    name,
                    quantity,
                    unit,
                    category,
                })
            })?;
            println!("Entry added: {id}");
        }
        ShoppingAction::Update {
            id,
            name,
            quantity,
            unit,
            category,
            checked,
        } => {
            let quantity = quantity.map(check_quantity).transpose()?;
            let patch = ShoppingItemPatch {
                name,
                quantity,
                unit,
                category,
                checked,
            };
            store.write(|s| s.update_shopping_list_item(&id, &patch))?;
            println!("Entry updated: {id}");
        }
        ShoppingAction::Remove { id } => {
            store.write(|s| s.remove_from_shopping_list(&id))?;
            println!("Entry removed: {id}");
        }
        ShoppingAction::Toggle { id } => {
            let checked = store.write(|s| {
                s.toggle_shopping_list_item(&id);
                s.shopping_item(&id).map(|item| item.checked)
            })?;
            match checked {
                Some(true) => println!("Checked: {id}"),
                Some(false) => println!("Unchecked: {id}"),
                None => println!("Entry not found: {id}"),
            }
        }
        ShoppingAction::Restock { name } => {
            let id = store.write(|s| s.add_to_shopping_list(NewShoppingItem::restock(name)))?;
            println!("Entry added: {id}");
        }
    }
    Ok(())
}
