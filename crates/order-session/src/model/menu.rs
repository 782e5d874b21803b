//! Menu catalog types and the built-in demo fallback.

use serde::{Deserialize, Serialize};

/// A single dish on the daily menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// The two body shapes the menu endpoint is known to return: either a bare
/// JSON array of items, or an object wrapping them under an `items` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MenuResponse {
    List(Vec<MenuItem>),
    Wrapped { items: Vec<MenuItem> },
}

impl MenuResponse {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self {
            MenuResponse::List(items) => items,
            MenuResponse::Wrapped { items } => items,
        }
    }
}

/// The demo catalog shown when the menu endpoint is unreachable, so the
/// session stays usable for browsing and cart building.
pub fn fallback_menu() -> Vec<MenuItem> {
    let demo = |id: &str, name: &str, description: &str, price: f64| MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
    };
    vec![
        demo("demo-1", "Garden Salad", "Mixed greens with house vinaigrette", 7.50),
        demo("demo-2", "Tomato Soup", "Slow-roasted tomatoes, basil, cream", 6.00),
        demo("demo-3", "Margherita Flatbread", "Fresh mozzarella and basil", 11.00),
        demo("demo-4", "Roast Chicken Plate", "Half chicken with seasonal vegetables", 14.50),
        demo("demo-5", "Mushroom Risotto", "Arborio rice, wild mushrooms, parmesan", 13.00),
        demo("demo-6", "Chocolate Torte", "Flourless torte with raspberry coulis", 6.50),
    ]
}
