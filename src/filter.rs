//! Filter state and the row-visibility predicate.
//!
//! [`FilterState`] is the pair of session-local values driving the catalog:
//! the free-text filter and the in-stock-only toggle. The search bar owns
//! the live values; this struct is the materialized snapshot handed to the
//! product table on each render.
//!
//! The predicate is a case-insensitive *substring* match on the product
//! name (not fuzzy matching), optionally intersected with the stocked flag.

use crate::product::Product;

/// The two-field filter state: text filter plus stock-only toggle.
///
/// `Default` yields the widget's initial state: empty text, toggle off.
///
/// ```rust
/// use bubbletea_catalog::filter::FilterState;
/// use bubbletea_catalog::product::Product;
///
/// let apple = Product::new("Fruits", "$1", true, "Apple");
/// let state = FilterState::new("app", false);
/// assert!(state.matches(&apple));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Current text filter; empty matches every product.
    pub filter_text: String,
    /// When true, only stocked products are visible.
    pub in_stock_only: bool,
}

impl FilterState {
    /// Creates a filter state from its two values.
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }

    /// Reports whether the product survives the active filter.
    ///
    /// A product is visible when its name case-insensitively contains the
    /// filter text as a substring (empty text matches everything), and,
    /// when the stock-only toggle is on, the product is stocked.
    pub fn matches(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.stocked {
            return false;
        }
        if self.filter_text.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.filter_text.to_lowercase())
    }
}
