use std::cell::RefCell;
use std::collections::HashMap;

use crate::errors::CoreError;

use super::port::StoragePort;

/// In-process storage backend.
///
/// Optionally enforces a byte quota (sum of key and value lengths over all
/// entries), rejecting writes that would exceed it the way browser storage
/// does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that refuses writes beyond `limit` bytes in total.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Bytes currently in use.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        if let Some(limit) = self.quota {
            let current = self.entries.borrow().get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - current + key.len() + value.len();
            if needed > limit {
                return Err(CoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
