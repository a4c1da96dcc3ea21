use serde::Serialize;

/// Derived smoothie description. Never persisted; recomputed on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flavor {
    /// e.g. "Apple Smoothie" or "Mixed Smoothie: Banana + Apple"
    pub label: String,

    /// Concatenated emoji of the blended products (may be empty)
    pub symbol: String,
}

impl Flavor {
    pub fn new(label: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
        }
    }
}

/// Preview text: `"<symbol> <label>"`. The separating space is kept even
/// when the symbol is empty.
impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol, self.label)
    }
}
