#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-catalog/")]

//! # bubbletea-catalog
//!
//! A filterable, categorized product catalog widget for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) terminal
//! applications.
//!
//! The widget renders a product list as a two-column `NAME` / `PRICE`
//! table grouped under category headers, and lets the user narrow the
//! visible rows with a case-insensitive text match on the product name
//! and/or an "in stock only" toggle. Each piece follows the Elm
//! Architecture pattern with `update()` and `view()` methods and can be
//! used on its own or through the composed [`CatalogBrowser`].
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ProductTable`] | Pure filter-group-render core (the table itself) |
//! | [`SearchBar`] | Search input + stock-only checkbox panel |
//! | [`SearchInput`] | Single-line text input with cursor and placeholder |
//! | [`Checkbox`] | Labeled toggle control |
//! | [`CatalogBrowser`] | The composed widget: search bar over table |
//!
//! ## Behavior notes
//!
//! - Filtering is a case-insensitive *substring* match on the product
//!   name; the empty filter matches everything.
//! - Grouping is adjacency-based on the filtered sequence: a header is
//!   emitted whenever the category changes between consecutive surviving
//!   rows. A category that reappears non-contiguously in the source list
//!   therefore gets a second header. This adjacency behavior is
//!   intentional and pinned by tests; it is a documented limitation, not
//!   a bug.
//! - Out-of-stock rows keep their position but render the name in a
//!   distinct style (red by default).
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_catalog::filter::FilterState;
//! use bubbletea_catalog::product::Product;
//! use bubbletea_catalog::ProductTable;
//!
//! let products = vec![
//!     Product::new("Fruits", "$1", true, "Apple"),
//!     Product::new("Vegetables", "$2", true, "Carrot"),
//! ];
//! let table = ProductTable::default();
//! let out = table.view_plain(&products, &FilterState::new("car", false));
//! assert!(out.contains("Carrot"));
//! assert!(!out.contains("Apple"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The composed widget is itself a `bubbletea_rs::Model`, so a program can
//! run it directly; `init()` starts it over the built-in sample catalog
//! with the search bar focused. To drive it from a larger model, forward
//! messages to the embedded [`SearchBar`] and re-render the
//! [`ProductTable`] from `filter_state()`:
//!
//! ```rust
//! use bubbletea_catalog::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     products: Vec<Product>,
//!     searchbar: SearchBar,
//!     table: ProductTable,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.searchbar.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         let state = self.searchbar.filter_state();
//!         format!(
//!             "{}\n\n{}",
//!             self.searchbar.view(),
//!             self.table.view(&self.products, &state)
//!         )
//!     }
//! }
//! ```

pub mod browser;
pub mod checkbox;
pub mod filter;
pub mod key;
pub mod product;
pub mod searchbar;
pub mod searchinput;
pub mod table;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Focused components receive keyboard input and may indicate their active
/// state visually; blurred components ignore input. `focus()` may return a
/// command for initialization work such as starting a cursor blink timer.
///
/// # Examples
///
/// ```rust
/// use bubbletea_catalog::prelude::*;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _cmd = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// cycle(&mut bubbletea_catalog::checkbox::new("stock only"));
/// ```
pub trait Component {
    /// Sets the component to focused state, optionally returning an
    /// initialization command (e.g. a cursor blink tick).
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use browser::Model as CatalogBrowser;
pub use checkbox::{new as checkbox_new, Model as Checkbox};
pub use filter::FilterState;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use product::{sample_products, Product};
pub use searchbar::{new as searchbar_new, Focus as SearchBarFocus, Model as SearchBar};
pub use searchinput::{
    default_key_map as searchinput_default_key_map, new as searchinput_new, paste, BlinkMsg,
    KeyMap as SearchInputKeyMap, Model as SearchInput, PasteErrMsg, PasteMsg,
};
pub use table::{
    display_rows, new as table_new, DisplayRow, Model as ProductTable, Styles as TableStyles,
    ELLIPSIS, NO_RESULTS,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_catalog::prelude::*;
///
/// let table = ProductTable::default();
/// let products = sample_products();
/// let rows = display_rows(&products, &FilterState::default());
/// assert!(!rows.is_empty());
/// ```
pub mod prelude {
    pub use crate::browser::Model as CatalogBrowser;
    pub use crate::checkbox::Model as Checkbox;
    pub use crate::filter::FilterState;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::product::{sample_products, Product};
    pub use crate::searchbar::Model as SearchBar;
    pub use crate::searchinput::Model as SearchInput;
    pub use crate::table::{
        display_rows, DisplayRow, Model as ProductTable, Styles as TableStyles, NO_RESULTS,
    };
    pub use crate::Component;
}
