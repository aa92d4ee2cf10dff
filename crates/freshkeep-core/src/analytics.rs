//! Inventory statistics for the dashboard.

use serde::Serialize;

use crate::category::FoodCategory;
use crate::inventory::FoodItem;

/// How many categories the distribution keeps.
pub const TOP_CATEGORIES: usize = 5;

// Placeholder headline figures until usage history is tracked.
const WASTE_REDUCTION_PCT: u32 = 68;
const MONEY_SAVED: f64 = 124.50;
const CO2_REDUCED_KG: f64 = 15.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: FoodCategory,
    pub count: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub total_items: usize,
    pub waste_reduction_pct: u32,
    pub money_saved: f64,
    pub co2_reduced_kg: f64,
    pub top_categories: Vec<CategoryShare>,
}

impl Dashboard {
    pub fn from_inventory(items: &[FoodItem]) -> Self {
        Self {
            total_items: items.len(),
            waste_reduction_pct: WASTE_REDUCTION_PCT,
            money_saved: MONEY_SAVED,
            co2_reduced_kg: CO2_REDUCED_KG,
            top_categories: category_distribution(items),
        }
    }
}

/// Count items per category, most common first, capped at [`TOP_CATEGORIES`].
///
/// Ties keep the order in which categories first appear in the inventory.
pub fn category_distribution(items: &[FoodItem]) -> Vec<CategoryShare> {
    let mut counts: Vec<(FoodCategory, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(c, _)| *c == item.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((item.category, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = items.len() as f64;
    counts
        .into_iter()
        .take(TOP_CATEGORIES)
        .map(|(category, count)| CategoryShare {
            category,
            count,
            percentage: (count as f64 / total * 100.0).round() as u32,
        })
        .collect()
}
