//! Tests for the substring search and the card views.

mod common;

use std::time::Duration;

use cardapio::catalog::{
    CatalogView, MenuItem,
    search::{normalize_term, search},
    view::{CATEGORY_REVEAL_STEP, EMPTY_CATEGORY_MESSAGE, SEARCH_REVEAL_STEP},
};
use pretty_assertions::assert_eq;

fn result_names(items: &[MenuItem], term: &str) -> Vec<String> {
    search(items, &normalize_term(term))
        .iter()
        .map(|i| i.name.clone())
        .collect()
}

// ============================================================================
// Term normalization
// ============================================================================

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize_term("  SuCo "), "suco");
    assert_eq!(normalize_term("\tÁgua\n"), "água");
    assert_eq!(normalize_term("   "), "");
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_matches_name_case_insensitively() {
    let catalog = common::full_menu();
    assert_eq!(result_names(catalog.items(), "FEIJ"), vec!["Feijoada"]);
}

#[test]
fn test_matches_description() {
    let catalog = common::full_menu();
    assert_eq!(result_names(catalog.items(), "coco"), vec!["Moqueca"]);
}

#[test]
fn test_matches_category() {
    let catalog = common::full_menu();
    assert_eq!(
        result_names(catalog.items(), "bebida"),
        vec!["Suco de laranja", "Água"]
    );
}

#[test]
fn test_searches_the_whole_catalog() {
    let catalog = common::full_menu();
    // "Drinks" has no pill but its items are still found
    assert_eq!(result_names(catalog.items(), "cachaça"), vec!["Caipirinha"]);
}

#[test]
fn test_results_keep_source_order() {
    let catalog = common::full_menu();
    assert_eq!(
        result_names(catalog.items(), "a"),
        vec![
            "Feijoada",
            "Suco de laranja",
            "Moqueca",
            "Pudim",
            "Água",
            "Caipirinha"
        ]
    );
}

#[test]
fn test_result_is_exactly_the_matching_subset() {
    let catalog = common::full_menu();
    for term in ["suc", "pra", "leite", "x", "ç", "o"] {
        let expected: Vec<&MenuItem> = catalog
            .items()
            .iter()
            .filter(|i| {
                i.name.to_lowercase().contains(term)
                    || i.description
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(term)
                    || i.category.to_lowercase().contains(term)
            })
            .collect();
        assert_eq!(search(catalog.items(), term), expected, "term {term:?}");
    }
}

#[test]
fn test_no_match() {
    let catalog = common::full_menu();
    assert!(result_names(catalog.items(), "hamburguer").is_empty());
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_category_view_cards() {
    let catalog = common::full_menu();
    let view = CatalogView::for_category(&catalog.items_in("Pratos"));
    let cards = view.cards();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Feijoada");
    assert_eq!(cards[0].price, "R$ 42,90");
    assert_eq!(cards[0].image.as_deref(), Some("img/feijoada.jpg"));
    assert_eq!(
        cards[0].description.as_deref(),
        Some("Feijão preto com carnes e couve")
    );
    assert_eq!(cards[1].image, None);
}

#[test]
fn test_empty_description_is_not_rendered() {
    let catalog = common::full_menu();
    let view = CatalogView::for_category(&catalog.items_in("Bebidas"));
    let agua = view.card(1).expect("second drink");

    assert_eq!(agua.name, "Água");
    assert_eq!(agua.description, None);
}

#[test]
fn test_empty_category_placeholder() {
    let view = CatalogView::for_category(&[]);
    assert_eq!(view, CatalogView::Empty(EMPTY_CATEGORY_MESSAGE.to_string()));
    assert!(view.is_empty());
}

#[test]
fn test_empty_search_placeholder_echoes_term() {
    let view = CatalogView::for_search(&[], "hamburguer");
    assert_eq!(
        view,
        CatalogView::Empty("Nenhum resultado para \"hamburguer\".".to_string())
    );
}

#[test]
fn test_reveal_delay_grows_per_card() {
    let catalog = common::full_menu();
    let category = CatalogView::for_category(&catalog.items_in("Pratos"));
    let delays: Vec<Duration> =
        category.cards().iter().map(|c| c.reveal_delay).collect();
    assert_eq!(delays, vec![Duration::ZERO, CATEGORY_REVEAL_STEP]);

    let matches = search(catalog.items(), "a");
    let results = CatalogView::for_search(&matches, "a");
    assert_eq!(results.cards()[2].reveal_delay, SEARCH_REVEAL_STEP * 2);
}

#[test]
fn test_revealed_counts_cards_past_their_delay() {
    let catalog = common::full_menu();
    let matches = search(catalog.items(), "a");
    let view = CatalogView::for_search(&matches, "a");

    assert_eq!(view.revealed(Duration::ZERO), 1);
    assert_eq!(view.revealed(SEARCH_REVEAL_STEP * 2), 3);
    assert_eq!(view.revealed(Duration::from_secs(1)), view.len());
}
