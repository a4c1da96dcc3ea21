use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;

use super::product::ProductEntry;

/// Key under which the basket is persisted unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "basket";

/// Construction-time configuration for a basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Persistence key of the serialized basket.
    pub storage_key: String,

    /// Replacement product table. `None` keeps the built-in catalog
    /// (apple, banana, lemon).
    pub products: Option<BTreeMap<String, ProductEntry>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            products: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}
