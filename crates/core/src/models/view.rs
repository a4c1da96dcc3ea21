use serde::Serialize;

use super::product::ProductId;

/// Text shown in the basket list when nothing has been added yet.
pub const EMPTY_BASKET_PLACEHOLDER: &str = "No products in basket.";

/// One rendered row of the basket list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketListItem {
    pub id: ProductId,
    pub name: String,
    pub symbol: String,
}

/// What the basket list view should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketListView {
    /// Known products in basket order, duplicates included
    pub items: Vec<BasketListItem>,

    /// Set only when the basket is empty
    pub placeholder: Option<String>,

    /// Whether the checkout/clear button row is shown
    pub show_cart_buttons: bool,

    /// Whether the "blend to smoothie" control is offered
    pub show_smoothie_option: bool,
}

/// Badge next to the basket link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountIndicator {
    /// Every basket entry, duplicates and unknown ids included
    pub count: usize,
    pub visible: bool,
}
