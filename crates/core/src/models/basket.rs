use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::product::ProductId;

/// Ordered multiset of product ids, exactly as the user added them.
///
/// Insertion order is preserved and the same id may appear many times.
/// Serializes as a plain JSON array of strings: `["apple","banana","apple"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Basket {
    items: Vec<ProductId>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, id: ProductId) {
        self.items.push(id);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductId> {
        self.items.iter()
    }

    /// Distinct ids in order of first occurrence.
    pub fn distinct(&self) -> Vec<&ProductId> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|&id| seen.insert(id.as_str()))
            .collect()
    }
}

impl From<Vec<ProductId>> for Basket {
    fn from(items: Vec<ProductId>) -> Self {
        Self { items }
    }
}

impl<T: Into<ProductId>> FromIterator<T> for Basket {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a ProductId;
    type IntoIter = std::slice::Iter<'a, ProductId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Basket {
    type Item = ProductId;
    type IntoIter = std::vec::IntoIter<ProductId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl PartialEq<[&str]> for Basket {
    fn eq(&self, other: &[&str]) -> bool {
        self.items.len() == other.len() && self.items.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Basket {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
