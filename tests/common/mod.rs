//! Shared fixtures for cardapio integration tests.
#![allow(dead_code)]

use cardapio::catalog::{GroupedCatalog, MenuItem};
use cardapio::menu::state::MenuState;

/// The two-item menu used throughout the scenarios.
pub fn pizza_and_juice() -> GroupedCatalog {
    GroupedCatalog::build(
        vec![
            MenuItem::new("Pizza", "Pratos", 30.0),
            MenuItem::new("Suco", "Bebidas", 5.0),
        ],
        vec!["Pratos".to_string(), "Bebidas".to_string()],
    )
}

/// A larger menu with descriptions, images and a category that has no pill.
pub fn full_menu() -> GroupedCatalog {
    GroupedCatalog::build(
        vec![
            MenuItem::new("Feijoada", "Pratos", 42.9)
                .with_description("Feijão preto com carnes e couve")
                .with_image("img/feijoada.jpg"),
            MenuItem::new("Suco de laranja", "Bebidas", 8.0)
                .with_image("img/suco.jpg"),
            MenuItem::new("Moqueca", "Pratos", 55.5)
                .with_description("Peixe, dendê e leite de coco"),
            MenuItem::new("Pudim", "Sobremesas", 12.345),
            MenuItem::new("Água", "Bebidas", 4.0).with_description(""),
            MenuItem::new("Caipirinha", "Drinks", 18.0)
                .with_description("Limão e cachaça"),
        ],
        vec![
            "Pratos".to_string(),
            "Bebidas".to_string(),
            "Sobremesas".to_string(),
        ],
    )
}

pub fn state(catalog: GroupedCatalog) -> MenuState<'static> {
    MenuState::new(catalog, false)
}

pub fn card_names(state: &MenuState) -> Vec<String> {
    state.view().cards().iter().map(|c| c.name.clone()).collect()
}

pub fn type_text(state: &mut MenuState, text: &str) {
    for c in text.chars() {
        state.handle_input(|input| input.insert_char(c));
    }
}
