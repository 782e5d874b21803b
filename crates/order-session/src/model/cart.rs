//! Cart state keyed by menu item id.
//!
//! Quantities arrive from the outside world as free-form text, so every
//! write path funnels through [`parse_quantity`], which coerces anything
//! unparseable, negative, or non-finite down to zero. A quantity of zero
//! means the line is removed entirely; the cart never stores zero entries.

use std::collections::HashMap;

use crate::model::menu::MenuItem;

/// Item quantities by menu item id. Display ordering is not stored here;
/// [`Cart::line_items`] derives it from the menu catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    quantities: HashMap<String, u32>,
}

/// A cart entry joined with its menu item, ready for display or submission.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub item: MenuItem,
    pub qty: u32,
    pub line_total: f64,
}

/// Coerce free-form quantity text to a non-negative whole number.
/// Fractional input is floored; anything unparseable, negative, or
/// non-finite becomes zero.
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.floor() as u32,
        _ => 0,
    }
}

impl Cart {
    /// Sets the quantity for an item from raw text; zero removes the line.
    pub fn set_quantity(&mut self, item_id: &str, raw: &str) {
        let qty = parse_quantity(raw);
        if qty == 0 {
            self.quantities.remove(item_id);
        } else {
            self.quantities.insert(item_id.to_string(), qty);
        }
    }

    /// Adds one to the item's quantity, starting the line at one if absent.
    pub fn increment(&mut self, item_id: &str) {
        let qty = self.quantities.entry(item_id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Removes one from the item's quantity, dropping the line at zero.
    pub fn decrement(&mut self, item_id: &str) {
        if let Some(qty) = self.quantities.get_mut(item_id) {
            *qty -= 1;
            if *qty == 0 {
                self.quantities.remove(item_id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Joins cart entries with the menu, in menu order. Cart entries whose
    /// id no longer appears on the menu are skipped.
    pub fn line_items(&self, menu: &[MenuItem]) -> Vec<LineItem> {
        menu.iter()
            .filter_map(|item| {
                let qty = self.quantity(&item.id);
                (qty > 0).then(|| LineItem {
                    item: item.clone(),
                    qty,
                    line_total: item.price * qty as f64,
                })
            })
            .collect()
    }

    /// Sum of line totals over the current menu.
    pub fn subtotal(&self, menu: &[MenuItem]) -> f64 {
        self.line_items(menu).iter().map(|line| line.line_total).sum()
    }
}
