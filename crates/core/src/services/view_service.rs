use crate::catalog::registry::ProductCatalog;
use crate::models::basket::Basket;
use crate::models::view::{BasketListItem, BasketListView, CountIndicator, EMPTY_BASKET_PLACEHOLDER};

use super::flavor_resolver::FlavorResolver;

/// Projects a basket into what each view displays.
///
/// Views call these after every change notification; nothing is cached.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    /// Basket list rows. Unknown ids are skipped here but still count
    /// towards the indicator.
    pub fn basket_list(&self, catalog: &ProductCatalog, basket: &Basket) -> BasketListView {
        if basket.is_empty() {
            return BasketListView {
                items: Vec::new(),
                placeholder: Some(EMPTY_BASKET_PLACEHOLDER.to_string()),
                show_cart_buttons: false,
                show_smoothie_option: false,
            };
        }

        let items = basket
            .iter()
            .filter_map(|id| {
                catalog.lookup(id.as_str()).map(|p| BasketListItem {
                    id: id.clone(),
                    name: p.name.clone(),
                    symbol: p.symbol.clone(),
                })
            })
            .collect();

        BasketListView {
            items,
            placeholder: None,
            show_cart_buttons: true,
            show_smoothie_option: true,
        }
    }

    pub fn count_indicator(&self, basket: &Basket) -> CountIndicator {
        let count = basket.len();
        CountIndicator {
            count,
            visible: count > 0,
        }
    }

    /// Preview line under the "blend to smoothie" checkbox; empty while
    /// the checkbox is off.
    pub fn smoothie_preview(
        &self,
        resolver: &FlavorResolver,
        catalog: &ProductCatalog,
        basket: &Basket,
        blend: bool,
    ) -> String {
        if !blend {
            return String::new();
        }
        resolver.resolve(catalog, basket).to_string()
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}
