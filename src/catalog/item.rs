use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::price::format_price;

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name of the item.
    pub name: String,
    /// Optional short description shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in reais. Must be non-negative.
    pub price: f64,
    /// Category label the item is grouped under.
    pub category: String,
    /// Optional URL or path of the item photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// Creates an item without description or image.
    ///
    /// # Arguments
    /// * `name` - The item name.
    /// * `category` - The category it belongs to.
    /// * `price` - The price in reais.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The description, or `None` when absent or empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// The image reference, or `None` when absent or empty.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }

    /// Whether `term` is a substring of the lowercased name, description or
    /// category. `term` is expected to be lowercased already.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .description()
                .is_some_and(|d| d.to_lowercase().contains(term))
            || self.category.to_lowercase().contains(term)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, format_price(self.price))
    }
}
