use thiserror::Error;

/// Unified error type for the entire smoothie-basket-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / Persistence ───────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Notification ────────────────────────────────────────────────
    #[error("Observer failed: {0}")]
    Observer(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl CoreError {
    /// True for errors raised by the persistence backend while writing.
    /// The previously persisted basket is untouched in that case.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            CoreError::Storage(_) | CoreError::QuotaExceeded { .. } | CoreError::FileIO(_)
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<tempfile::PersistError> for CoreError {
    fn from(e: tempfile::PersistError) -> Self {
        CoreError::FileIO(e.error.to_string())
    }
}
