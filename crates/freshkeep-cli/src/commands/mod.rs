pub mod analytics;
pub mod config;
pub mod expiring;
pub mod inventory;
pub mod recipes;
pub mod shell;
pub mod shopping;

use std::cell::{Ref, RefCell};

use chrono::{DateTime, Duration, Utc};
use freshkeep_core::{Config, InventoryStore, StoreHandle, StoreProvider, ValidationError};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// One seeded store plus what commands need to act on it.
///
/// Domain state is never persisted, so a session lives exactly as long as
/// the process (or one `shell` run).
pub struct Session {
    provider: StoreProvider,
    config: RefCell<Config>,
    runtime: tokio::runtime::Runtime,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let store = InventoryStore::new()
            .with_expiry_window(config.expiry_window())
            .with_seed();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        Ok(Self {
            provider: StoreProvider::new(store),
            config: RefCell::new(config),
            runtime,
        })
    }

    pub fn store(&self) -> StoreHandle {
        self.provider.handle()
    }

    pub fn config(&self) -> Ref<'_, Config> {
        self.config.borrow()
    }

    /// Re-read the config from disk and apply the expiry window to the store.
    pub fn reload_config(&self) -> CommandResult {
        let config = Config::load()?;
        let window = config.expiry_window();
        self.provider.write(|s| s.set_expiry_window(window));
        *self.config.borrow_mut() = config;
        Ok(())
    }

    pub fn runtime(&self) -> &tokio::runtime::Runtime {
        &self.runtime
    }
}

pub(crate) fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn check_quantity(quantity: f64) -> Result<f64, ValidationError> {
    if quantity.is_finite() && quantity >= 0.0 {
        Ok(quantity)
    } else {
        Err(ValidationError::InvalidValue {
            field: "quantity".to_string(),
            message: format!("must be a non-negative number, got {quantity}"),
        })
    }
}

/// `now` shifted by a signed number of days, rejecting out-of-range input.
pub(crate) fn offset_days(
    now: DateTime<Utc>,
    days: i64,
    field: &str,
) -> Result<DateTime<Utc>, ValidationError> {
    Duration::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("{days} days from now is out of range"),
        })
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn offset_days_shifts_both_ways() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(offset_days(now, 2, "expires_in").unwrap(), now + Duration::days(2));
        assert_eq!(offset_days(now, -1, "expires_in").unwrap(), now - Duration::days(1));
    }

    #[test]
    fn offset_days_rejects_out_of_range() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        for days in [200_000_000, 9_000_000_000_000, i64::MAX, i64::MIN] {
            let err = offset_days(now, days, "expires_in").unwrap_err();
            assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "expires_in"));
        }
    }
}
