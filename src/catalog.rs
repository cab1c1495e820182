//! Menu data model: items, grouping by category, search and card views.
pub mod grouped;
pub mod item;
pub mod price;
pub mod search;
pub mod view;

pub use grouped::GroupedCatalog;
pub use item::MenuItem;
pub use price::format_price;
pub use view::{Card, CatalogView};
