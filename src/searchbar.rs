//! The search bar: text filter input plus stock-only checkbox.
//!
//! This is the catalog's input panel. It owns the two live filter values
//! through its child controls: the search input's text IS the filter text,
//! and the checkbox's checked flag IS the stock-only toggle. Every
//! keystroke and toggle is immediately observable through
//! [`Model::filter_state`]; there is no debouncing, no validation, and no
//! submit step.
//!
//! Exactly one child control is focused at a time. Tab and shift-tab (and
//! down/up) move focus between them.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_catalog::searchbar;
//! use bubbletea_catalog::Component;
//!
//! let mut bar = searchbar::new();
//! let _cmd = bar.focus();
//! assert_eq!(bar.filter_state().filter_text, "");
//! assert!(!bar.filter_state().in_stock_only);
//! ```

use crate::checkbox;
use crate::filter::FilterState;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::searchinput;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// Which child control currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The search text input.
    Input,
    /// The stock-only checkbox.
    Checkbox,
}

/// Key bindings for moving focus inside the search bar.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move focus to the next field.
    pub next_field: key::Binding,
    /// Move focus to the previous field.
    pub prev_field: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next_field: key::new_binding(vec![
                key::with_keys_str(&["tab", "down"]),
                key::with_help("tab", "switch field"),
            ]),
            prev_field: key::new_binding(vec![
                key::with_keys_str(&["shift+tab", "up"]),
                key::with_help("shift+tab", "switch field"),
            ]),
        }
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.next_field]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.next_field, &self.prev_field]]
    }
}

/// The search bar model.
pub struct Model {
    /// The search text input.
    pub input: searchinput::Model,
    /// The stock-only checkbox.
    pub checkbox: checkbox::Model,
    /// Key bindings for focus movement.
    pub key_map: KeyMap,

    focus_region: Focus,
    focus: bool,
}

/// Creates a search bar with the catalog's observable defaults: the input
/// placeholder is `"Search..."` and the checkbox is labeled
/// `"Only show products in stock"`.
pub fn new() -> Model {
    let mut input = searchinput::new();
    input.prompt = String::new();
    input.set_placeholder("Search...");

    Model {
        input,
        checkbox: checkbox::new("Only show products in stock"),
        key_map: KeyMap::default(),
        focus_region: Focus::Input,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Returns the current filter snapshot: the input's text and the
    /// checkbox's checked flag.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            filter_text: self.input.value(),
            in_stock_only: self.checkbox.checked(),
        }
    }

    /// Returns the current filter text.
    pub fn filter_text(&self) -> String {
        self.input.value()
    }

    /// Returns the stock-only toggle.
    pub fn in_stock_only(&self) -> bool {
        self.checkbox.checked()
    }

    /// Returns which child control has focus.
    pub fn focus_region(&self) -> Focus {
        self.focus_region
    }

    /// Moves focus to the other child control.
    pub fn cycle_focus(&mut self) -> Option<Cmd> {
        let next = match self.focus_region {
            Focus::Input => Focus::Checkbox,
            Focus::Checkbox => Focus::Input,
        };
        self.focus_on(next)
    }

    fn focus_on(&mut self, region: Focus) -> Option<Cmd> {
        self.focus_region = region;
        if !self.focus {
            return None;
        }
        match region {
            Focus::Input => {
                self.checkbox.blur();
                Some(self.input.focus())
            }
            Focus::Checkbox => {
                self.input.blur();
                self.checkbox.focus()
            }
        }
    }

    /// Processes a message: focus-movement keys first, everything else is
    /// forwarded to the focused child control.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.next_field.matches(key_msg)
                || self.key_map.prev_field.matches(key_msg)
            {
                // Two fields: next and previous land on the same place.
                return self.cycle_focus();
            }
        }

        match self.focus_region {
            Focus::Input => self.input.update(msg),
            Focus::Checkbox => self.checkbox.update(msg),
        }
    }

    /// Renders the search bar: the input line above the checkbox line.
    pub fn view(&self) -> String {
        format!("{}\n{}", self.input.view(), self.checkbox.view())
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.focus_on(self.focus_region)
    }

    fn blur(&mut self) {
        self.focus = false;
        self.input.blur();
        self.checkbox.blur();
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
