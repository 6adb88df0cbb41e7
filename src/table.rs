//! The product table: filtering, grouping, and rendering.
//!
//! This is the core of the crate. [`display_rows`] decides, for a given
//! product list and [`FilterState`], which rows appear and how they are
//! grouped under category headers. [`Model::view`] renders those rows as a
//! two-column `NAME` / `PRICE` table, or the `"No such item found."`
//! message when nothing survives the filter.
//!
//! Both functions are pure: they read their inputs, allocate their output,
//! and touch nothing else. Calling them twice with the same arguments
//! produces identical results.
//!
//! # Grouping
//!
//! Grouping is a single left-to-right pass over the *filtered* sequence: a
//! category header is emitted whenever the category of a surviving product
//! differs from the category of the previously emitted line. Categories are
//! not sorted or pre-grouped, so a category that reappears non-contiguously
//! in the source list gets a second header. That adjacency behavior is part
//! of the widget's contract (see the crate docs) and is pinned by tests.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_catalog::filter::FilterState;
//! use bubbletea_catalog::product::Product;
//! use bubbletea_catalog::table::{display_rows, DisplayRow};
//!
//! let products = vec![
//!     Product::new("Fruits", "$1", true, "Apple"),
//!     Product::new("Vegetables", "$2", true, "Carrot"),
//! ];
//! let rows = display_rows(&products, &FilterState::default());
//! assert_eq!(rows.len(), 4); // two headers, two product lines
//! assert!(matches!(rows[0], DisplayRow::CategoryHeader("Fruits")));
//! ```

use crate::filter::FilterState;
use crate::product::Product;
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The message shown when no product survives the active filter.
pub const NO_RESULTS: &str = "No such item found.";

/// Unicode ellipsis used when truncating over-wide cells.
pub const ELLIPSIS: &str = "…";

const COLUMN_GAP: &str = "  ";

/// One row of the rendered output: a category header or a product line.
///
/// The sequence of display rows, stripped of headers, is exactly the
/// subsequence of the input products that satisfies the filter, in input
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow<'a> {
    /// A header introducing a contiguous run of one category.
    CategoryHeader(&'a str),
    /// A single product.
    ProductLine(&'a Product),
}

/// Computes the ordered display rows for the given products and filter.
///
/// Single pass, O(n) time and output space. Products failing the filter
/// are skipped without affecting the grouping state, so two surviving
/// products separated only by filtered-out rows still share one header.
pub fn display_rows<'a>(products: &'a [Product], state: &FilterState) -> Vec<DisplayRow<'a>> {
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for product in products {
        if !state.matches(product) {
            continue;
        }
        if last_category != Some(product.category.as_str()) {
            rows.push(DisplayRow::CategoryHeader(product.category.as_str()));
        }
        rows.push(DisplayRow::ProductLine(product));
        last_category = Some(product.category.as_str());
    }

    rows
}

/// Styles for the table's visual elements.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the `NAME` / `PRICE` column header row.
    pub header: Style,
    /// Style for category header rows.
    pub category: Style,
    /// Style for the name of a stocked product.
    pub name: Style,
    /// Style for the name of an out-of-stock product.
    pub out_of_stock: Style,
    /// Style for the price column.
    pub price: Style,
    /// Style for the no-results message.
    pub no_items: Style,
}

impl Default for Styles {
    /// Default styles: bold column headers, bold adaptive category rows, a
    /// red treatment for out-of-stock names, and a subdued no-results line.
    fn default() -> Self {
        Self {
            header: Style::new().bold(true),
            category: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#3C3C3C",
                Dark: "#BDBDBD",
            }),
            name: Style::new(),
            out_of_stock: Style::new().foreground(AdaptiveColor {
                Light: "#D70000",
                Dark: "#FF5F5F",
            }),
            price: Style::new(),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

/// The product table model.
///
/// The model holds presentation settings only; the products and the filter
/// are passed to [`Model::view`] on every call, keeping rendering a pure
/// function of its inputs.
#[derive(Debug, Clone)]
pub struct Model {
    /// Visual styles.
    pub styles: Styles,
    /// Maximum display width of the name column; 0 disables truncation.
    pub max_name_width: usize,
}

/// Creates a product table with default styles and no width limit.
pub fn new() -> Model {
    Model {
        styles: Styles::default(),
        max_name_width: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the table's styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Limits the display width of the name column; over-wide names are
    /// truncated with an ellipsis. 0 disables the limit.
    pub fn with_max_name_width(mut self, width: usize) -> Self {
        self.max_name_width = width;
        self
    }

    /// Renders the table for the given products and filter.
    ///
    /// The output is either the styled no-results message or a `NAME` /
    /// `PRICE` header row followed by the display rows, one per line.
    pub fn view(&self, products: &[Product], state: &FilterState) -> String {
        let rows = display_rows(products, state);
        if !rows
            .iter()
            .any(|r| matches!(r, DisplayRow::ProductLine(_)))
        {
            return self.styles.no_items.clone().inline(true).render(NO_RESULTS);
        }

        let name_width = self.name_column_width(&rows);
        let mut lines = Vec::with_capacity(rows.len() + 1);

        lines.push(self.styles.header.clone().inline(true).render(&format!(
            "{}{}{}",
            pad_cell("NAME", name_width),
            COLUMN_GAP,
            "PRICE"
        )));

        for row in &rows {
            match row {
                DisplayRow::CategoryHeader(category) => {
                    let cell = self.fit_cell(category);
                    lines.push(self.styles.category.clone().inline(true).render(&cell));
                }
                DisplayRow::ProductLine(product) => {
                    let cell = self.fit_cell(&product.name);
                    let padding = " ".repeat(name_width.saturating_sub(cell.width()));
                    let name_style = if product.stocked {
                        &self.styles.name
                    } else {
                        &self.styles.out_of_stock
                    };
                    lines.push(format!(
                        "{}{}{}{}",
                        name_style.clone().inline(true).render(&cell),
                        padding,
                        COLUMN_GAP,
                        self.styles.price.clone().inline(true).render(&product.price)
                    ));
                }
            }
        }

        lines.join("\n")
    }

    /// Renders the table with all ANSI styling stripped.
    ///
    /// Useful for asserting on the functionally observable output in tests
    /// and for terminals that reject escape sequences.
    pub fn view_plain(&self, products: &[Product], state: &FilterState) -> String {
        strip_ansi_escapes::strip_str(self.view(products, state))
    }

    // Width of the name column: the widest of the header label, the
    // surviving names, and the category headers.
    fn name_column_width(&self, rows: &[DisplayRow<'_>]) -> usize {
        let mut width = "NAME".width();
        for row in rows {
            let cell = match row {
                DisplayRow::CategoryHeader(category) => self.fit_cell(category),
                DisplayRow::ProductLine(product) => self.fit_cell(&product.name),
            };
            width = width.max(cell.width());
        }
        width
    }

    fn fit_cell(&self, text: &str) -> String {
        if self.max_name_width == 0 || text.width() <= self.max_name_width {
            return text.to_string();
        }

        let avail = self.max_name_width.saturating_sub(ELLIPSIS.width());
        let mut out = String::new();
        let mut used = 0;
        for grapheme in text.graphemes(true) {
            let w = grapheme.width();
            if used + w > avail {
                break;
            }
            out.push_str(grapheme);
            used += w;
        }
        out.push_str(ELLIPSIS);
        out
    }
}

fn pad_cell(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::sample_products;

    fn fixture() -> Vec<Product> {
        vec![
            Product::new("Fruits", "$1", true, "Apple"),
            Product::new("Fruits", "$1.5", true, "Banana"),
            Product::new("Vegetables", "$2", true, "Carrot"),
        ]
    }

    fn product_names<'a>(rows: &[DisplayRow<'a>]) -> Vec<&'a str> {
        rows.iter()
            .filter_map(|r| match r {
                DisplayRow::ProductLine(p) => Some(p.name.as_str()),
                DisplayRow::CategoryHeader(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_header_per_contiguous_run() {
        let products = fixture();
        let rows = display_rows(&products, &FilterState::default());
        assert_eq!(
            rows,
            vec![
                DisplayRow::CategoryHeader("Fruits"),
                DisplayRow::ProductLine(&products[0]),
                DisplayRow::ProductLine(&products[1]),
                DisplayRow::CategoryHeader("Vegetables"),
                DisplayRow::ProductLine(&products[2]),
            ]
        );
    }

    #[test]
    fn test_every_surviving_row_satisfies_predicate_in_order() {
        let products = sample_products();
        let state = FilterState::new("an", true);
        let rows = display_rows(&products, &state);

        let names = product_names(&rows);
        let expected: Vec<&str> = products
            .iter()
            .filter(|p| state.matches(p))
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, expected);
        assert!(!expected.is_empty());
    }

    #[test]
    fn test_empty_filter_includes_every_product_once() {
        let products = sample_products();
        let rows = display_rows(&products, &FilterState::default());
        assert_eq!(product_names(&rows).len(), products.len());
    }

    #[test]
    fn test_case_insensitive_filtering_matches_same_rows() {
        let products = sample_products();
        let upper = display_rows(&products, &FilterState::new("APPLE", false));
        let lower = display_rows(&products, &FilterState::new("apple", false));
        assert_eq!(product_names(&upper), product_names(&lower));
        assert_eq!(product_names(&upper), vec!["Apple", "Pineapple"]);
    }

    #[test]
    fn test_stock_only_drops_unstocked() {
        let products = vec![
            Product::new("Fruits", "$1", true, "Apple"),
            Product::new("Fruits", "$2", false, "Passionfruit"),
        ];
        let rows = display_rows(&products, &FilterState::new("", true));
        assert_eq!(
            rows,
            vec![
                DisplayRow::CategoryHeader("Fruits"),
                DisplayRow::ProductLine(&products[0]),
            ]
        );
    }

    #[test]
    fn test_filtered_gap_does_not_duplicate_header() {
        // Passionfruit is filtered out between Apple and Mango; the two
        // survivors are adjacent and share one Fruits header.
        let products = vec![
            Product::new("Fruits", "$1", true, "Apple"),
            Product::new("Fruits", "$2", false, "Passionfruit"),
            Product::new("Fruits", "$1", true, "Mango"),
        ];
        let rows = display_rows(&products, &FilterState::new("", true));
        let headers = rows
            .iter()
            .filter(|r| matches!(r, DisplayRow::CategoryHeader(_)))
            .count();
        assert_eq!(headers, 1);
    }

    #[test]
    fn test_non_contiguous_category_gets_second_header() {
        // Grouping is adjacency-based on the filtered sequence, not a true
        // group-by: Fruits reappearing after Drinks gets another header.
        let products = vec![
            Product::new("Fruits", "$1", true, "Apple"),
            Product::new("Drinks", "$2", true, "Soda"),
            Product::new("Fruits", "$1", true, "Mango"),
        ];
        let rows = display_rows(&products, &FilterState::default());
        let headers: Vec<&str> = rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::CategoryHeader(c) => Some(*c),
                DisplayRow::ProductLine(_) => None,
            })
            .collect();
        assert_eq!(headers, vec!["Fruits", "Drinks", "Fruits"]);
    }

    #[test]
    fn test_sample_catalog_emits_duplicate_fruits_header() {
        let products = sample_products();
        let rows = display_rows(&products, &FilterState::default());
        let fruits_headers = rows
            .iter()
            .filter(|r| matches!(r, DisplayRow::CategoryHeader("Fruits")))
            .count();
        assert!(fruits_headers >= 2);
    }

    #[test]
    fn test_display_rows_is_idempotent() {
        let products = sample_products();
        let state = FilterState::new("o", true);
        assert_eq!(
            display_rows(&products, &state),
            display_rows(&products, &state)
        );
    }

    #[test]
    fn test_view_is_idempotent() {
        let table = new();
        let products = sample_products();
        let state = FilterState::new("a", false);
        assert_eq!(
            table.view(&products, &state),
            table.view(&products, &state)
        );
    }

    #[test]
    fn test_view_has_column_header() {
        let table = new();
        let plain = table.view_plain(&fixture(), &FilterState::default());
        let first_line = plain.lines().next().unwrap();
        assert!(first_line.contains("NAME"));
        assert!(first_line.contains("PRICE"));
    }

    #[test]
    fn test_view_rows_in_order() {
        let table = new();
        let plain = table.view_plain(&fixture(), &FilterState::default());
        let lines: Vec<&str> = plain.lines().collect();
        assert!(lines[1].contains("Fruits"));
        assert!(lines[2].contains("Apple") && lines[2].contains("$1"));
        assert!(lines[3].contains("Banana"));
        assert!(lines[4].contains("Vegetables"));
        assert!(lines[5].contains("Carrot"));
    }

    #[test]
    fn test_no_match_yields_fallback_not_table() {
        let table = new();
        let plain = table.view_plain(&fixture(), &FilterState::new("zzz-no-match", false));
        assert_eq!(plain, NO_RESULTS);
    }

    #[test]
    fn test_empty_product_list_yields_fallback() {
        let table = new();
        let plain = table.view_plain(&[], &FilterState::default());
        assert_eq!(plain, NO_RESULTS);
    }

    #[test]
    fn test_filtered_view_omits_non_matching_rows() {
        let table = new();
        let plain = table.view_plain(&fixture(), &FilterState::new("carrot", false));
        assert!(plain.contains("Carrot"));
        assert!(!plain.contains("Apple"));
        assert!(!plain.contains("Fruits"));
    }

    #[test]
    fn test_name_column_is_padded_to_widest_cell() {
        let table = new();
        let plain = table.view_plain(&fixture(), &FilterState::default());
        // "Vegetables" (10 wide) is the widest cell; Apple's price lands
        // after 10 + gap columns.
        let apple_line = plain
            .lines()
            .find(|l| l.contains("Apple"))
            .unwrap();
        assert_eq!(apple_line.find("$1").unwrap(), 12);
    }

    #[test]
    fn test_max_name_width_truncates_with_ellipsis() {
        let table = new().with_max_name_width(6);
        let products = vec![Product::new("Drinks", "$3", true, "Water Bottle")];
        let plain = table.view_plain(&products, &FilterState::default());
        assert!(plain.contains(&format!("Water{}", ELLIPSIS)));
        assert!(!plain.contains("Water Bottle"));
    }
}
