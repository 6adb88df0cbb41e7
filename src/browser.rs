//! The composed catalog widget: search bar over product table.
//!
//! This is the top-level `bubbletea_rs::Model` gluing the pieces together.
//! It owns the (immutable) product list and the search bar; on every
//! update the table output is recomputed from the bar's current
//! [`FilterState`](crate::filter::FilterState) and the product list.
//! There is no other state: rendering is a pure function of what the user
//! has typed and toggled.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_catalog::browser;
//! use bubbletea_catalog::product::sample_products;
//!
//! let mut catalog = browser::new(sample_products());
//! let _cmd = catalog.focus();
//! let view = catalog.view_plain();
//! assert!(view.contains("Apple"));
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::product::Product;
use crate::searchbar;
use crate::table;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// Key bindings owned by the composed widget itself.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit the program.
    pub quit: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: key::new_binding(vec![
                key::with_keys_str(&["esc", "ctrl+c"]),
                key::with_help("esc", "quit"),
            ]),
        }
    }
}

/// Styles for the footer help line.
#[derive(Debug, Clone)]
pub struct HelpStyles {
    /// Style for key labels.
    pub key: Style,
    /// Style for action descriptions.
    pub desc: Style,
    /// Style for the separator between entries.
    pub separator: Style,
}

impl Default for HelpStyles {
    fn default() -> Self {
        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// The composed catalog widget.
pub struct Model {
    /// The search bar (filter text + stock-only toggle).
    pub searchbar: searchbar::Model,
    /// The product table renderer.
    pub table: table::Model,
    /// Widget-level key bindings.
    pub key_map: KeyMap,
    /// Footer help styles.
    pub help_styles: HelpStyles,
    /// Whether the footer help line is rendered.
    pub show_help: bool,

    products: Vec<Product>,
}

/// Creates the widget over the given product list.
///
/// The list is taken as-is and never mutated; its order determines the
/// display order of surviving rows.
pub fn new(products: Vec<Product>) -> Model {
    Model {
        searchbar: searchbar::new(),
        table: table::new(),
        key_map: KeyMap::default(),
        help_styles: HelpStyles::default(),
        show_help: true,
        products,
    }
}

impl Model {
    /// Returns the product list the widget was built over.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Focuses the search bar; returns the cursor-blink command.
    pub fn focus(&mut self) -> Option<Cmd> {
        Component::focus(&mut self.searchbar)
    }

    /// Renders the widget with all ANSI styling stripped.
    pub fn view_plain(&self) -> String {
        strip_ansi_escapes::strip_str(self.view())
    }

    // "tab switch field • space toggle • esc quit"
    fn help_line(&self) -> String {
        let bindings = self.short_help();
        let separator = self
            .help_styles
            .separator
            .clone()
            .inline(true)
            .render(" • ");

        let mut out = String::new();
        for binding in bindings {
            if !binding.enabled() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(&separator);
            }
            let help = binding.help();
            out.push_str(&self.help_styles.key.clone().inline(true).render(&help.key));
            out.push(' ');
            out.push_str(
                &self
                    .help_styles
                    .desc
                    .clone()
                    .inline(true)
                    .render(&help.desc),
            );
        }
        out
    }
}

impl KeyMapTrait for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.searchbar.key_map.next_field,
            &self.searchbar.checkbox.key_map.toggle,
            &self.key_map.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.searchbar.key_map.next_field,
                &self.searchbar.key_map.prev_field,
            ],
            vec![&self.searchbar.checkbox.key_map.toggle],
            vec![&self.key_map.quit],
        ]
    }
}

impl BubbleTeaModel for Model {
    /// Initializes the widget over the sample catalog with the search bar
    /// focused.
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new(crate::product::sample_products());
        let cmd = model.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.quit.matches(key_msg) {
                return Some(bubbletea_rs::quit());
            }
        }
        self.searchbar.update(&msg)
    }

    /// Renders the search bar, the recomputed product table, and the help
    /// line.
    fn view(&self) -> String {
        let state = self.searchbar.filter_state();
        let mut sections = vec![
            self.searchbar.view(),
            String::new(),
            self.table.view(&self.products, &state),
        ];
        if self.show_help {
            sections.push(String::new());
            sections.push(self.help_line());
        }
        sections.join("\n")
    }
}
