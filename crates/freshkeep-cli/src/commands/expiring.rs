//! Expiry alerts.

use freshkeep_core::{ExpiryAlert, FoodItem};

use super::{format_date, print_json, CommandResult, Session};

pub fn run(json: bool, session: &Session) -> CommandResult {
    if !session.config().notifications.expiry_alerts {
        if json {
            return print_json(&Vec::<FoodItem>::new());
        }
        println!("Expiry alerts are disabled.");
        return Ok(());
    }

    let alert = session.store().read(ExpiryAlert::from_store)?;

    if json {
        let items = alert.map(|a| a.items).unwrap_or_default();
        return print_json(&items);
    }

    match alert {
        None => println!("No expiring items."),
        Some(alert) => {
            println!("{}", alert.message());
            for item in &alert.items {
                println!(
                    "  {}  {} {} {} ({})  expires {}",
                    item.id,
                    item.quantity,
                    item.unit,
                    item.name,
                    item.category,
                    format_date(item.expiry_date)
                );
            }
        }
    }
    Ok(())
}
