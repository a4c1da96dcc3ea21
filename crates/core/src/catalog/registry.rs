use std::collections::{BTreeMap, HashMap};

use crate::models::product::ProductEntry;

/// Static lookup table from product id to display attributes.
///
/// Built once at construction and read-only afterwards. A lookup miss is not
/// an error; each caller picks its own fallback.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, ProductEntry>,
}

impl ProductCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Create the shop's built-in catalog.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.register("apple", ProductEntry::new("Apple", "🍏"));
        catalog.register("banana", ProductEntry::new("Banana", "🍌"));
        catalog.register("lemon", ProductEntry::new("Lemon", "🍋"));
        catalog
    }

    /// Build a catalog from configured entries.
    pub fn from_entries(entries: &BTreeMap<String, ProductEntry>) -> Self {
        let mut catalog = Self::new();
        for (id, entry) in entries {
            catalog.register(id.clone(), entry.clone());
        }
        catalog
    }

    /// Add (or replace) a product. Only used while building the table.
    pub fn register(&mut self, id: impl Into<String>, entry: ProductEntry) {
        self.products.insert(id.into(), entry);
    }

    pub fn lookup(&self, id: &str) -> Option<&ProductEntry> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product ids in sorted order (deterministic for display).
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.products.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
