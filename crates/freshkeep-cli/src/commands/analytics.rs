use freshkeep_core::Dashboard;

use super::{print_json, CommandResult, Session};

pub fn run(json: bool, session: &Session) -> CommandResult {
    let dashboard = session.store().read(|s| Dashboard::from_inventory(s.inventory()))?;

    if json {
        return print_json(&dashboard);
    }

    println!("Waste reduction: {}%", dashboard.waste_reduction_pct);
    println!("Money saved: ${:.2}", dashboard.money_saved);
    println!("CO2 emissions reduced: {} kg", dashboard.co2_reduced_kg);
    println!("Total items: {}", dashboard.total_items);
    println!();
    println!("Food category distribution:");
    if dashboard.top_categories.is_empty() {
        println!("  No data available");
    }
    for share in &dashboard.top_categories {
        println!("  {:<14} {:>3}%", share.category.label(), share.percentage);
    }
    Ok(())
}
