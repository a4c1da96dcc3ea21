// ═══════════════════════════════════════════════════════════════════
// View Tests: basket list, count indicator, smoothie preview
// ═══════════════════════════════════════════════════════════════════

use smoothie_basket_core::catalog::registry::ProductCatalog;
use smoothie_basket_core::models::basket::Basket;
use smoothie_basket_core::models::view::{CountIndicator, EMPTY_BASKET_PLACEHOLDER};
use smoothie_basket_core::services::flavor_resolver::FlavorResolver;
use smoothie_basket_core::services::view_service::ViewService;

fn basket(ids: &[&str]) -> Basket {
    ids.iter().copied().collect()
}

mod basket_list {
    use super::*;

    #[test]
    fn empty_basket_shows_placeholder_and_hides_controls() {
        let view = ViewService::new().basket_list(&ProductCatalog::with_defaults(), &Basket::new());
        assert!(view.items.is_empty());
        assert_eq!(view.placeholder.as_deref(), Some(EMPTY_BASKET_PLACEHOLDER));
        assert_eq!(view.placeholder.as_deref(), Some("No products in basket."));
        assert!(!view.show_cart_buttons);
        assert!(!view.show_smoothie_option);
    }

    #[test]
    fn lists_known_products_in_basket_order_with_duplicates() {
        let view = ViewService::new().basket_list(
            &ProductCatalog::with_defaults(),
            &basket(&["banana", "apple", "banana"]),
        );
        let rows: Vec<(&str, &str)> = view
            .items
            .iter()
            .map(|i| (i.symbol.as_str(), i.name.as_str()))
            .collect();
        assert_eq!(rows, vec![("🍌", "Banana"), ("🍏", "Apple"), ("🍌", "Banana")]);
        assert_eq!(view.items[1].id, "apple");
        assert!(view.placeholder.is_none());
        assert!(view.show_cart_buttons);
        assert!(view.show_smoothie_option);
    }

    #[test]
    fn skips_unknown_ids() {
        let view = ViewService::new().basket_list(
            &ProductCatalog::with_defaults(),
            &basket(&["kiwi", "lemon", "mango"]),
        );
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Lemon");
    }

    #[test]
    fn only_unknown_ids_shows_controls_without_rows() {
        let view = ViewService::new().basket_list(&ProductCatalog::with_defaults(), &basket(&["kiwi"]));
        assert!(view.items.is_empty());
        assert!(view.placeholder.is_none());
        assert!(view.show_cart_buttons);
    }
}

mod count_indicator {
    use super::*;

    #[test]
    fn hidden_when_empty() {
        assert_eq!(
            ViewService::new().count_indicator(&Basket::new()),
            CountIndicator { count: 0, visible: false }
        );
    }

    #[test]
    fn counts_duplicates_and_unknown_ids() {
        assert_eq!(
            ViewService::new().count_indicator(&basket(&["apple", "apple", "kiwi"])),
            CountIndicator { count: 3, visible: true }
        );
    }
}

mod smoothie_preview {
    use super::*;

    fn preview(ids: &[&str], blend: bool) -> String {
        ViewService::new().smoothie_preview(
            &FlavorResolver::new(),
            &ProductCatalog::with_defaults(),
            &basket(ids),
            blend,
        )
    }

    #[test]
    fn empty_while_blend_is_off() {
        assert_eq!(preview(&["apple"], false), "");
        assert_eq!(preview(&[], false), "");
    }

    #[test]
    fn single_product() {
        assert_eq!(preview(&["banana", "banana"], true), "🍌 Banana Smoothie");
    }

    #[test]
    fn mixed_products() {
        assert_eq!(
            preview(&["apple", "lemon", "kiwi"], true),
            "🍏🍋 Mixed Smoothie: Apple + Lemon + kiwi"
        );
    }

    #[test]
    fn empty_basket_when_blending() {
        assert_eq!(preview(&[], true), " No fruits selected");
    }
}
