//! Tests for the non-interactive commands.

mod common;

use cardapio::actions;
use pretty_assertions::assert_eq;

fn output<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_list_defaults_to_initial_category() {
    let catalog = common::pizza_and_juice();
    let text = output(|out| actions::list(&catalog, None, out));

    assert_eq!(text, "== Pratos\n       Pizza - R$ 30,00\n");
}

#[test]
fn test_list_prints_descriptions_and_photo_marker() {
    let catalog = common::full_menu();
    let text = output(|out| actions::list(&catalog, Some("Pratos"), out));

    assert_eq!(
        text,
        "== Pratos\n\
         [foto] Feijoada - R$ 42,90\n       Feijão preto com carnes e couve\n\
         \x20      Moqueca - R$ 55,50\n       Peixe, dendê e leite de coco\n"
    );
}

#[test]
fn test_list_unknown_category_prints_placeholder() {
    let catalog = common::full_menu();
    let text = output(|out| actions::list(&catalog, Some("Vinhos"), out));
    assert_eq!(text, "== Vinhos\nNenhum item encontrado.\n");
}

#[test]
fn test_search_prints_matches_from_every_category() {
    let catalog = common::full_menu();
    let text = output(|out| actions::search(&catalog, " BEBIDAS ", out));

    assert!(text.contains("Suco de laranja"));
    assert!(text.contains("Água"));
    assert!(!text.contains("Feijoada"));
}

#[test]
fn test_search_empty_term_lists_initial_category() {
    let catalog = common::pizza_and_juice();
    let text = output(|out| actions::search(&catalog, "  ", out));
    assert_eq!(text, "== Pratos\n       Pizza - R$ 30,00\n");
}

#[test]
fn test_search_no_result() {
    let catalog = common::pizza_and_juice();
    let text = output(|out| actions::search(&catalog, "Lasanha", out));
    assert_eq!(text, "Nenhum resultado para \"lasanha\".\n");
}

#[test]
fn test_categories_lists_counts_and_hidden() {
    let catalog = common::full_menu();
    let text = output(|out| actions::categories(&catalog, out));

    assert_eq!(
        text,
        "Pratos (2)\nBebidas (2)\nSobremesas (1)\n\
         Sem pill (apenas na busca):\n  Drinks (1)\n"
    );
}
