//! Food inventory records and the expiry rules applied to them.
//!
//! Two expiry rules coexist and are deliberately not unified:
//!
//! - [`in_expiry_window`] drives the derived "expiring items" list. It uses
//!   exclusive bounds on both ends, so items that already expired are NOT
//!   part of it.
//! - [`ExpiryStatus::classify`] drives the per-item badge in the inventory
//!   list. It flags anything whose expiry is in the past as expired, and
//!   anything within three whole (rounded up) days as expiring soon.
//!
//! The rules disagree at the edges (an item expiring in 3 days minus a
//! minute is "expiring soon" in both, one expiring in exactly 3 days is
//! only a badge). Callers must pick the rule matching the view they serve.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::category::FoodCategory;

/// Days counted as "soon" by the list-view badge.
pub const EXPIRING_SOON_DAYS: i64 = 3;

const MS_PER_DAY: f64 = 86_400_000.0;

/// A perishable item in the household inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub quantity: f64,
    pub unit: String,
    pub purchase_date: DateTime<Utc>,
    /// Not validated against `purchase_date`.
    pub expiry_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A food item before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodItem {
    pub name: String,
    pub category: FoodCategory,
    pub quantity: f64,
    pub unit: String,
    pub purchase_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewFoodItem {
    pub(crate) fn with_id(self, id: String) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            notes: self.notes,
        }
    }
}

/// Partial update for a [`FoodItem`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItemPatch {
    pub name: Option<String>,
    pub category: Option<FoodCategory>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl FoodItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FoodItem {
    /// Shallow-merge every field set in `patch`.
    pub fn apply(&mut self, patch: &FoodItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = &patch.unit {
            self.unit = unit.clone();
        }
        if let Some(purchase_date) = patch.purchase_date {
            self.purchase_date = purchase_date;
        }
        if let Some(expiry_date) = patch.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> ExpiryStatus {
        ExpiryStatus::classify(self.expiry_date, now)
    }
}

/// Derived-list membership: `now < expiry < now + window`.
///
/// A window reaching past the representable range has no upper bound.
pub fn in_expiry_window(expiry: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    expiry > now
        && now
            .checked_add_signed(window)
            .map_or(true, |end| expiry < end)
}

/// Whole days until `expiry`, rounded up. Negative once expired by a day or more.
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (expiry - now).num_milliseconds() as f64;
    (ms / MS_PER_DAY).ceil() as i64
}

/// Badge shown next to an item in the inventory list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Fresh,
    ExpiringSoon,
    Expired,
}

impl ExpiryStatus {
    /// `Expired` wins over `ExpiringSoon` when both checks match.
    pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if expiry < now {
            return ExpiryStatus::Expired;
        }
        let days = days_until(expiry, now);
        if (0..=EXPIRING_SOON_DAYS).contains(&days) {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Fresh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn item(expiry: DateTime<Utc>) -> FoodItem {
        FoodItem {
            id: "x".into(),
            name: "Yogurt".into(),
            category: FoodCategory::Dairy,
            quantity: 2.0,
            unit: "cups".into(),
            purchase_date: now(),
            expiry_date: expiry,
            notes: None,
        }
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let window = Duration::days(3);
        assert!(in_expiry_window(now() + Duration::days(1), now(), window));
        assert!(!in_expiry_window(now(), now(), window));
        assert!(!in_expiry_window(now() + Duration::days(3), now(), window));
        assert!(!in_expiry_window(now() + Duration::days(4), now(), window));
        assert!(!in_expiry_window(now() - Duration::days(1), now(), window));
    }

    #[test]
    fn window_too_wide_for_the_calendar_has_no_upper_bound() {
        let window = Duration::days(200_000_000);
        assert!(in_expiry_window(now() + Duration::days(400), now(), window));
        assert!(!in_expiry_window(now() - Duration::days(1), now(), window));
    }

    #[test]
    fn expired_within_the_last_day_is_only_expired() {
        let expiry = now() - Duration::hours(2);
        assert_eq!(days_until(expiry, now()), 0);
        assert_eq!(ExpiryStatus::classify(expiry, now()), ExpiryStatus::Expired);
    }

    #[test]
    fn classify_matches_list_badges() {
        assert_eq!(item(now() + Duration::days(2)).status_at(now()), ExpiryStatus::ExpiringSoon);
        assert_eq!(item(now() - Duration::days(1)).status_at(now()), ExpiryStatus::Expired);
        assert_eq!(item(now() + Duration::days(10)).status_at(now()), ExpiryStatus::Fresh);
    }

    #[test]
    fn badge_and_window_diverge_at_three_days() {
        let expiry = now() + Duration::days(3);
        assert_eq!(ExpiryStatus::classify(expiry, now()), ExpiryStatus::ExpiringSoon);
        assert!(!in_expiry_window(expiry, now(), Duration::days(3)));
    }

    #[test]
    fn days_until_rounds_up() {
        assert_eq!(days_until(now() + Duration::hours(1), now()), 1);
        assert_eq!(days_until(now() + Duration::hours(49), now()), 3);
        assert_eq!(days_until(now() - Duration::hours(25), now()), -1);
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut food = item(now());
        food.apply(&FoodItemPatch {
            quantity: Some(1.0),
            notes: Some("opened".into()),
            ..Default::default()
        });
        assert_eq!(food.quantity, 1.0);
        assert_eq!(food.notes.as_deref(), Some("opened"));
        assert_eq!(food.name, "Yogurt");
        assert_eq!(food.unit, "cups");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut food = item(now());
        let before = food.clone();
        let patch = FoodItemPatch::default();
        assert!(patch.is_empty());
        food.apply(&patch);
        assert_eq!(food, before);
    }
}
