use std::rc::Rc;

use crate::errors::CoreError;

/// Key/value persistence capability the basket is stored through.
///
/// Mirrors what a browser's local storage offers. Implementations must make
/// `set` and `remove` all-or-nothing: on error the previous value is intact.
/// Methods take `&self`; backends keep their own interior state.
pub trait StoragePort {
    /// Read the raw value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

impl<P: StoragePort + ?Sized> StoragePort for Rc<P> {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}
