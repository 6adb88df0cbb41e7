//! A labeled checkbox control.
//!
//! Renders as `[x] label` / `[ ] label` and toggles on space (or enter)
//! while focused. The catalog's search bar uses one for the
//! "Only show products in stock" toggle; the control itself is generic.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_catalog::checkbox;
//!
//! let mut cb = checkbox::new("Only show products in stock");
//! assert!(!cb.checked());
//! cb.toggle();
//! assert!(cb.checked());
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;

/// Key bindings for the checkbox.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Toggle the checked state.
    pub toggle: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: key::new_binding(vec![
                key::with_keys_str(&["space", "enter"]),
                key::with_help("space", "toggle"),
            ]),
        }
    }
}

impl KeyMapTrait for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.toggle]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.toggle]]
    }
}

/// Styles for the checkbox's visual states.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the `[x]` / `[ ]` box.
    pub mark: Style,
    /// Style for the label while blurred.
    pub label: Style,
    /// Style for the label while focused.
    pub focused_label: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            mark: Style::new(),
            label: Style::new(),
            focused_label: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
        }
    }
}

/// The checkbox model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Label rendered after the box.
    pub label: String,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Visual styles.
    pub styles: Styles,

    checked: bool,
    focus: bool,
}

/// Creates a checkbox with the given label, unchecked and blurred.
pub fn new(label: impl Into<String>) -> Model {
    Model {
        label: label.into(),
        key_map: KeyMap::default(),
        styles: Styles::default(),
        checked: false,
        focus: false,
    }
}

impl Model {
    /// Sets the initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Returns the checked state.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Sets the checked state directly. Any boolean is accepted; no
    /// validation is performed.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flips the checked state.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Processes a message. The toggle binding is only honored while the
    /// checkbox is focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.toggle.matches(key_msg) {
                self.toggle();
            }
        }
        None
    }

    /// Renders the checkbox as `[x] label` with the current styles.
    pub fn view(&self) -> String {
        let mark = if self.checked { "[x]" } else { "[ ]" };
        let label_style = if self.focus {
            &self.styles.focused_label
        } else {
            &self.styles.label
        };
        format!(
            "{} {}",
            self.styles.mark.clone().inline(true).render(mark),
            label_style.clone().inline(true).render(&self.label)
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
