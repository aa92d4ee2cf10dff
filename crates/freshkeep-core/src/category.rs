//! The closed set of food categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Category shared by inventory items and shopping list entries.
///
/// Serialized by its display label ("Canned Goods", "Frozen Foods", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Fruits,
    Vegetables,
    Dairy,
    Meat,
    Seafood,
    Grains,
    Bakery,
    #[serde(rename = "Canned Goods")]
    Canned,
    #[serde(rename = "Frozen Foods")]
    Frozen,
    Snacks,
    Beverages,
    Condiments,
    Spices,
    Other,
}

impl FoodCategory {
    /// Every category, in menu order.
    pub const ALL: [FoodCategory; 14] = [
        FoodCategory::Fruits,
        FoodCategory::Vegetables,
        FoodCategory::Dairy,
        FoodCategory::Meat,
        FoodCategory::Seafood,
        FoodCategory::Grains,
        FoodCategory::Bakery,
        FoodCategory::Canned,
        FoodCategory::Frozen,
        FoodCategory::Snacks,
        FoodCategory::Beverages,
        FoodCategory::Condiments,
        FoodCategory::Spices,
        FoodCategory::Other,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Dairy => "Dairy",
            FoodCategory::Meat => "Meat",
            FoodCategory::Seafood => "Seafood",
            FoodCategory::Grains => "Grains",
            FoodCategory::Bakery => "Bakery",
            FoodCategory::Canned => "Canned Goods",
            FoodCategory::Frozen => "Frozen Foods",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Condiments => "Condiments",
            FoodCategory::Spices => "Spices",
            FoodCategory::Other => "Other",
        }
    }
}

impl Default for FoodCategory {
    fn default() -> Self {
        FoodCategory::Other
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FoodCategory {
    type Err = ValidationError;

    /// Accepts the label or the short variant name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FoodCategory::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(wanted)
                    || format!("{c:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_variant_names() {
        assert_eq!("Canned Goods".parse::<FoodCategory>().unwrap(), FoodCategory::Canned);
        assert_eq!("canned".parse::<FoodCategory>().unwrap(), FoodCategory::Canned);
        assert_eq!("frozen foods".parse::<FoodCategory>().unwrap(), FoodCategory::Frozen);
        assert_eq!(" dairy ".parse::<FoodCategory>().unwrap(), FoodCategory::Dairy);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "Rocks".parse::<FoodCategory>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("Rocks".into()));
    }

    #[test]
    fn serializes_by_label() {
        let json = serde_json::to_string(&FoodCategory::Frozen).unwrap();
        assert_eq!(json, "\"Frozen Foods\"");
        let back: FoodCategory = serde_json::from_str("\"Canned Goods\"").unwrap();
        assert_eq!(back, FoodCategory::Canned);
    }

    #[test]
    fn closed_set_has_fourteen_distinct_labels() {
        let mut labels: Vec<_> = FoodCategory::ALL.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 14);
    }
}
