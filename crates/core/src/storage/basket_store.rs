use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::basket::Basket;
use crate::models::product::ProductId;
use crate::models::settings::DEFAULT_STORAGE_KEY;
use crate::services::change_notifier::ChangeNotifier;

use super::port::StoragePort;

/// Owns the persisted basket.
///
/// Reads are fail-soft: a missing, unreadable or malformed value is an empty
/// basket. Writes are all-or-nothing and every successful mutation runs one
/// notification round after the write has landed.
#[derive(Debug)]
pub struct BasketStore<P: StoragePort> {
    port: P,
    key: String,
    notifier: ChangeNotifier,
}

impl<P: StoragePort> BasketStore<P> {
    /// Create a store persisting under the default `"basket"` key.
    pub fn new(port: P) -> Self {
        Self::with_key(port, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(port: P, key: impl Into<String>) -> Self {
        Self {
            port,
            key: key.into(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Register a view to be refreshed after every append/clear.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn() -> Result<(), CoreError> + 'static,
    {
        self.notifier.subscribe(observer);
    }

    /// Current basket. Never fails.
    pub fn load(&self) -> Basket {
        match self.port.get(&self.key) {
            Ok(raw) => parse_basket(&self.key, raw.as_deref()),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read basket, using empty basket");
                Basket::new()
            }
        }
    }

    /// Append `id` at the end of the basket (duplicates kept) and notify.
    ///
    /// Backend read failures are returned rather than treated as an empty
    /// basket, so unreadable content is never overwritten.
    pub fn append(&self, id: impl Into<ProductId>) -> Result<(), CoreError> {
        let raw = self.port.get(&self.key)?;
        let mut basket = parse_basket(&self.key, raw.as_deref());
        basket.push(id.into());

        let json = serde_json::to_string(&basket)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize basket: {e}")))?;
        self.port.set(&self.key, &json)?;
        debug!(key = %self.key, len = basket.len(), "basket appended");

        self.notifier.notify();
        Ok(())
    }

    /// Remove the persisted basket entirely and notify, even if it was
    /// already empty.
    pub fn clear(&self) -> Result<(), CoreError> {
        self.port.remove(&self.key)?;
        debug!(key = %self.key, "basket cleared");

        self.notifier.notify();
        Ok(())
    }
}

/// Decode a stored value. Anything that is not a JSON array is an empty
/// basket. Every element is kept: strings as-is, anything else as its JSON
/// text (`7` becomes `"7"`).
fn parse_basket(key: &str, raw: Option<&str>) -> Basket {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Basket::new();
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(key, found = json_kind(&other), "persisted basket is not a sequence, using empty basket");
            return Basket::new();
        }
        Err(e) => {
            let e = CoreError::from(e);
            warn!(key, error = %e, "persisted basket is malformed, using empty basket");
            return Basket::new();
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(id) => ProductId::from(id),
            other => ProductId::from(other.to_string()),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
