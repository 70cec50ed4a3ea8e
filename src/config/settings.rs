//! User settings for the expense tracker
//!
//! Holds the daily claimable cap and the currency symbol. Either may be
//! unset, which is persisted as the `"NOT_SET"` sentinel.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{ClaimableCap, CurrencySymbol};

/// Sentinel written for settings that have not been configured yet
pub const NOT_SET: &str = "NOT_SET";

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum amount claimable per day
    #[serde(default, with = "not_set")]
    pub max_claimable_amount: Option<ClaimableCap>,

    /// Currency symbol prefixed to every amount
    #[serde(default, with = "not_set")]
    pub currency: Option<CurrencySymbol>,
}

impl Settings {
    /// Load settings from disk, writing the defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The configured cap, if any
    pub fn claimable_cap(&self) -> Option<ClaimableCap> {
        self.max_claimable_amount
    }

    /// The configured currency symbol, if any
    pub fn currency(&self) -> Option<&CurrencySymbol> {
        self.currency.as_ref()
    }
}

/// Serde adapter mapping `None` to the `"NOT_SET"` sentinel
mod not_set {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::NOT_SET;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(NOT_SET),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.as_str() == Some(NOT_SET) || value.is_null() {
            return Ok(None);
        }
        T::deserialize(value).map(Some).map_err(D::Error::custom)
    }
}
