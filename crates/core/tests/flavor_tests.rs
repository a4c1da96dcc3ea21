// ═══════════════════════════════════════════════════════════════════
// Flavor Tests: smoothie flavor derivation from basket contents
// ═══════════════════════════════════════════════════════════════════

use smoothie_basket_core::catalog::registry::ProductCatalog;
use smoothie_basket_core::models::basket::Basket;
use smoothie_basket_core::models::flavor::Flavor;
use smoothie_basket_core::models::product::ProductEntry;
use smoothie_basket_core::services::flavor_resolver::{FlavorResolver, NO_FRUITS_LABEL};

fn resolve(ids: &[&str]) -> Flavor {
    let basket: Basket = ids.iter().copied().collect();
    FlavorResolver::new().resolve(&ProductCatalog::with_defaults(), &basket)
}

mod empty {
    use super::*;

    #[test]
    fn empty_basket_has_no_fruits() {
        assert_eq!(resolve(&[]), Flavor::new("No fruits selected", ""));
        assert_eq!(resolve(&[]).label, NO_FRUITS_LABEL);
    }

    #[test]
    fn empty_catalog_and_empty_basket() {
        let flavor = FlavorResolver::new().resolve(&ProductCatalog::new(), &Basket::new());
        assert_eq!(flavor, Flavor::new("No fruits selected", ""));
    }
}

mod single {
    use super::*;

    #[test]
    fn single_apple() {
        assert_eq!(resolve(&["apple"]), Flavor::new("Apple Smoothie", "🍏"));
    }

    #[test]
    fn repeated_single_product_is_not_mixed() {
        assert_eq!(
            resolve(&["lemon", "lemon", "lemon"]),
            Flavor::new("Lemon Smoothie", "🍋")
        );
    }

    #[test]
    fn single_unknown_takes_mixed_path() {
        assert_eq!(resolve(&["kiwi"]), Flavor::new("Mixed Smoothie: kiwi", ""));
    }

    #[test]
    fn repeated_single_unknown() {
        assert_eq!(resolve(&["kiwi", "kiwi"]), Flavor::new("Mixed Smoothie: kiwi", ""));
    }
}

mod mixed {
    use super::*;

    #[test]
    fn dedups_in_first_occurrence_order() {
        assert_eq!(
            resolve(&["banana", "apple", "banana"]),
            Flavor::new("Mixed Smoothie: Banana + Apple", "🍌🍏")
        );
    }

    #[test]
    fn unknown_contributes_raw_id_and_no_symbol() {
        assert_eq!(
            resolve(&["apple", "kiwi"]),
            Flavor::new("Mixed Smoothie: Apple + kiwi", "🍏")
        );
    }

    #[test]
    fn all_three_defaults() {
        assert_eq!(
            resolve(&["lemon", "apple", "banana", "apple"]),
            Flavor::new("Mixed Smoothie: Lemon + Apple + Banana", "🍋🍏🍌")
        );
    }

    #[test]
    fn only_unknown_ids() {
        assert_eq!(
            resolve(&["kiwi", "mango", "kiwi"]),
            Flavor::new("Mixed Smoothie: kiwi + mango", "")
        );
    }

    #[test]
    fn order_matters() {
        assert_ne!(resolve(&["apple", "banana"]), resolve(&["banana", "apple"]));
    }
}

mod catalog {
    use super::*;

    #[test]
    fn custom_catalog_is_used() {
        let mut catalog = ProductCatalog::new();
        catalog.register("mango", ProductEntry::new("Mango", "🥭"));
        let basket: Basket = ["mango"].into_iter().collect();
        assert_eq!(
            FlavorResolver::new().resolve(&catalog, &basket),
            Flavor::new("Mango Smoothie", "🥭")
        );
    }

    #[test]
    fn default_catalog_does_not_know_custom_ids() {
        assert_eq!(resolve(&["mango"]), Flavor::new("Mixed Smoothie: mango", ""));
    }

    #[test]
    fn resolve_is_deterministic() {
        let catalog = ProductCatalog::with_defaults();
        let basket: Basket = ["banana", "kiwi", "apple"].into_iter().collect();
        let resolver = FlavorResolver::default();
        assert_eq!(resolver.resolve(&catalog, &basket), resolver.resolve(&catalog, &basket));
    }
}

mod display {
    use super::*;

    #[test]
    fn preview_text_is_symbol_then_label() {
        assert_eq!(resolve(&["apple"]).to_string(), "🍏 Apple Smoothie");
    }

    #[test]
    fn serializes_label_and_symbol() {
        let json = serde_json::to_value(resolve(&["banana", "apple"])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "Mixed Smoothie: Banana + Apple", "symbol": "🍌🍏" })
        );
    }

    #[test]
    fn empty_symbol_keeps_separator() {
        assert_eq!(resolve(&[]).to_string(), " No fruits selected");
    }
}
