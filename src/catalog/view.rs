use std::{fmt, time::Duration};

use crate::catalog::{item::MenuItem, price::format_price};

/// Reveal delay added per card in a category view.
pub const CATEGORY_REVEAL_STEP: Duration = Duration::from_millis(40);
/// Reveal delay added per card in a search view.
pub const SEARCH_REVEAL_STEP: Duration = Duration::from_millis(30);

pub const EMPTY_CATEGORY_MESSAGE: &str = "Nenhum item encontrado.";

/// The rendered form of one menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub name: String,
    pub description: Option<String>,
    /// Price already formatted, e.g. `R$ 12,50`.
    pub price: String,
    /// Present only when the thumbnail is clickable.
    pub image: Option<String>,
    /// How long after the view is shown this card appears.
    pub reveal_delay: Duration,
}

impl Card {
    fn from_item(item: &MenuItem, reveal_delay: Duration) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description().map(str::to_owned),
            price: format_price(item.price),
            image: item.image().map(str::to_owned),
            reveal_delay,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let thumb = if self.image.is_some() { "[foto]" } else { "      " };
        write!(f, "{thumb} {} - {}", self.name, self.price)?;
        if let Some(description) = &self.description {
            write!(f, "\n       {description}")?;
        }
        Ok(())
    }
}

/// What the catalog area shows: a list of cards or a placeholder message.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Cards(Vec<Card>),
    Empty(String),
}

impl CatalogView {
    /// View of the items of one category.
    pub fn for_category(items: &[&MenuItem]) -> Self {
        Self::build(items, CATEGORY_REVEAL_STEP)
            .unwrap_or_else(|| Self::Empty(EMPTY_CATEGORY_MESSAGE.to_string()))
    }

    /// View of search results. The placeholder echoes `term`.
    pub fn for_search(items: &[&MenuItem], term: &str) -> Self {
        Self::build(items, SEARCH_REVEAL_STEP).unwrap_or_else(|| {
            Self::Empty(format!("Nenhum resultado para \"{term}\"."))
        })
    }

    fn build(items: &[&MenuItem], step: Duration) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let cards = items
            .iter()
            .zip(0u32..)
            .map(|(item, i)| Card::from_item(item, step * i))
            .collect();
        Some(Self::Cards(cards))
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty(_) => &[],
        }
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards().get(index)
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Number of cards whose reveal delay has passed after `elapsed`.
    pub fn revealed(&self, elapsed: Duration) -> usize {
        self.cards()
            .iter()
            .take_while(|card| card.reveal_delay <= elapsed)
            .count()
    }
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cards(cards) => {
                for card in cards {
                    writeln!(f, "{card}")?;
                }
                Ok(())
            }
            Self::Empty(message) => writeln!(f, "{message}"),
        }
    }
}
