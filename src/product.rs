//! Product records displayed by the catalog widget.
//!
//! A [`Product`] is an immutable input record; the widget never mutates the
//! list it is given. Prices arrive pre-formatted (e.g. `"$1.5"`) and are
//! treated as opaque text. [`sample_products`] provides the reference
//! catalog used by the example program and throughout the tests.

use once_cell::sync::Lazy;

/// A single product record.
///
/// Names are expected to be unique within a list for display purposes; no
/// identity exists beyond the fields themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Display name, matched against the text filter.
    pub name: String,
    /// Category the product is grouped under.
    pub category: String,
    /// Pre-formatted price string, opaque to the widget.
    pub price: String,
    /// Whether the product is currently in stock.
    pub stocked: bool,
}

impl Product {
    /// Creates a product record.
    ///
    /// ```rust
    /// use bubbletea_catalog::product::Product;
    ///
    /// let apple = Product::new("Fruits", "$1", true, "Apple");
    /// assert_eq!(apple.category, "Fruits");
    /// assert!(apple.stocked);
    /// ```
    pub fn new(
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            stocked,
        }
    }
}

static SAMPLE: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new("Fruits", "$1", true, "Apple"),
        Product::new("Fruits", "$1.5", true, "Banana"),
        Product::new("Fruits", "$2", false, "Passionfruit"),
        Product::new("Vegetables", "$3", true, "Spinach"),
        Product::new("Vegetables", "$4", false, "Pumpkin"),
        Product::new("Vegetables", "$2", true, "Carrot"),
        Product::new("Snacks", "$1", true, "Chips"),
        Product::new("Snacks", "$1.5", false, "Cookies"),
        Product::new("Drinks", "$3", true, "Water Bottle"),
        Product::new("Drinks", "$5", true, "Orange Juice"),
        Product::new("Drinks", "$2", false, "Soda"),
        Product::new("Fruits", "$1", true, "Mango"),
        Product::new("Vegetables", "$2.5", true, "Broccoli"),
        Product::new("Vegetables", "$3.5", true, "Lettuce"),
        Product::new("Fruits", "$1.8", true, "Peach"),
        Product::new("Fruits", "$2.5", true, "Pineapple"),
        Product::new("Vegetables", "$1.2", false, "Onion"),
        Product::new("Vegetables", "$2.8", true, "Cabbage"),
        Product::new("Snacks", "$3", false, "Nachos"),
        Product::new("Snacks", "$2.5", true, "Popcorn"),
        Product::new("Drinks", "$6", true, "Green Tea"),
        Product::new("Drinks", "$3.2", false, "Lemonade"),
        Product::new("Fruits", "$2.3", true, "Strawberries"),
        Product::new("Snacks", "$4", true, "Granola Bar"),
    ]
});

/// Returns the 24-record reference catalog.
///
/// Categories appear non-contiguously on purpose (Fruits resumes at Mango
/// after the first Drinks run), which exercises the table's adjacency-based
/// grouping.
///
/// ```rust
/// use bubbletea_catalog::product::sample_products;
///
/// let products = sample_products();
/// assert_eq!(products.len(), 24);
/// assert_eq!(products[0].name, "Apple");
/// ```
pub fn sample_products() -> Vec<Product> {
    SAMPLE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_24_records() {
        assert_eq!(sample_products().len(), 24);
    }

    #[test]
    fn test_sample_categories_reappear_non_contiguously() {
        let products = sample_products();
        let first_fruits_end = products
            .iter()
            .position(|p| p.category != "Fruits")
            .unwrap();
        let fruits_again = products[first_fruits_end..]
            .iter()
            .any(|p| p.category == "Fruits");
        assert!(fruits_again, "Fruits should resume after another category");
    }

    #[test]
    fn test_prices_are_currency_prefixed() {
        assert!(sample_products().iter().all(|p| p.price.starts_with('$')));
    }
}
