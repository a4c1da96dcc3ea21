use crate::catalog::registry::ProductCatalog;
use crate::models::basket::Basket;
use crate::models::flavor::Flavor;

/// Label used when there is nothing to blend.
pub const NO_FRUITS_LABEL: &str = "No fruits selected";

/// Derives the smoothie flavor from a basket's distinct contents.
///
/// Pure business logic: no I/O, no state, same input gives the same output.
pub struct FlavorResolver;

impl FlavorResolver {
    pub fn new() -> Self {
        Self
    }

    /// - no products: "No fruits selected"
    /// - one known product: "<name> Smoothie"
    /// - anything else: "Mixed Smoothie: <a> + <b> + ...", symbols concatenated
    ///
    /// Unknown ids contribute their raw id as name and no symbol. A lone
    /// unknown id also takes the mixed path, giving a single-term mix.
    pub fn resolve(&self, catalog: &ProductCatalog, basket: &Basket) -> Flavor {
        let distinct = basket.distinct();

        match distinct.as_slice() {
            [] => return Flavor::new(NO_FRUITS_LABEL, ""),
            [only] => {
                if let Some(product) = catalog.lookup(only.as_str()) {
                    return Flavor::new(format!("{} Smoothie", product.name), product.symbol.clone());
                }
            }
            _ => {}
        }

        let names: Vec<&str> = distinct
            .iter()
            .map(|id| catalog.lookup(id.as_str()).map_or(id.as_str(), |p| p.name.as_str()))
            .collect();
        let symbol: String = distinct
            .iter()
            .filter_map(|id| catalog.lookup(id.as_str()))
            .map(|p| p.symbol.as_str())
            .collect();

        Flavor::new(format!("Mixed Smoothie: {}", names.join(" + ")), symbol)
    }
}

impl Default for FlavorResolver {
    fn default() -> Self {
        Self::new()
    }
}
