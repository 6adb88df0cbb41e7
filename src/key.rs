//! Type-safe key bindings for catalog components.
//!
//! This module provides the key binding system used by every component in
//! this crate. A [`Binding`] groups one or more key combinations under a
//! single action, together with the help text shown in the widget footer.
//! Bindings can be constructed either with the builder methods on
//! [`Binding`] or with the option-list constructor [`new_binding`], which
//! mirrors the option-function style used across the bubbletea ecosystem.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_catalog::key::{new_binding, with_help, with_keys_str};
//!
//! let toggle = new_binding(vec![
//!     with_keys_str(&["space", "enter"]),
//!     with_help("space", "toggle"),
//! ]);
//! assert!(toggle.enabled());
//! assert_eq!(toggle.help().key, "space");
//! ```
//!
//! Components expose their bindings through a `KeyMap` struct and implement
//! the [`KeyMap`] trait so the composed widget can assemble a help line:
//!
//! ```rust
//! use bubbletea_catalog::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct AppKeyMap {
//!     quit: Binding,
//! }
//!
//! impl KeyMap for AppKeyMap {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.quit]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.quit]]
//!     }
//! }
//!
//! let map = AppKeyMap {
//!     quit: Binding::new(vec![KeyCode::Esc]).with_help("esc", "quit"),
//! };
//! assert_eq!(map.short_help().len(), 1);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the combination.
    pub code: KeyCode,
    /// Modifier keys that must be held for the combination to match.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding: the key label and a short action description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key, e.g. `"tab"` or `"ctrl+v"`.
    pub key: String,
    /// Short description of the action, e.g. `"switch field"`.
    pub desc: String,
}

/// A key binding: the key combinations that trigger an action, its help
/// text, and whether it is currently enabled.
///
/// Disabled bindings never match and are skipped when rendering help.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from plain key codes with no modifiers.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(KeyPress::from).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Adds a key combination with explicit modifiers.
    pub fn with_key_press(mut self, press: impl Into<KeyPress>) -> Self {
        self.keys.push(press.into());
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns whether this binding is enabled. A binding with no keys is
    /// considered disabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// An option applied by [`new_binding`], produced by the `with_*` helpers.
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Adds key combinations to the binding.
    Keys(Vec<KeyPress>),
    /// Sets the binding's help text.
    WithHelp(Help),
    /// Marks the binding as disabled.
    Disabled,
}

/// Creates a binding from a list of options.
///
/// ```rust
/// use bubbletea_catalog::key::{new_binding, with_help, with_keys_str};
///
/// let quit = new_binding(vec![
///     with_keys_str(&["esc", "ctrl+c"]),
///     with_help("esc", "quit"),
/// ]);
/// assert!(quit.enabled());
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys.extend(keys),
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: key combinations given as strings, e.g. `"left"`, `"ctrl+f"`,
/// `"alt+backspace"`, `"shift+tab"`, or a single character.
///
/// Unrecognized strings are ignored rather than panicking; a binding that
/// ends up with no keys reports itself as disabled.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option: help text for the binding.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether the key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether the key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Trait implemented by component key maps so help views can be assembled
/// from their bindings.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view, in display order.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    for part in s.split('+') {
        match part {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            other => code = parse_code(other),
        }
    }

    // crossterm reports shift+tab as BackTab without the SHIFT modifier.
    if code == Some(KeyCode::Tab) && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyPress {
            code: KeyCode::BackTab,
            mods: KeyModifiers::NONE,
        });
    }

    code.map(|code| KeyPress { code, mods })
}

fn parse_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_msg(code: KeyCode, mods: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: mods,
        }
    }

    #[test]
    fn test_binding_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Esc]);
        assert!(b.matches(&key_msg(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!b.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_requires_modifiers() {
        let b = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(b.matches(&key_msg(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key_msg(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_parse_named_keys() {
        let b = new_binding(vec![with_keys_str(&["space", "enter"])]);
        assert!(b.matches(&key_msg(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(b.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_tab_becomes_backtab() {
        let b = new_binding(vec![with_keys_str(&["shift+tab"])]);
        assert!(b.matches(&key_msg(KeyCode::BackTab, KeyModifiers::NONE)));
        assert!(!b.matches(&key_msg(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Tab]);
        b.set_enabled(false);
        assert!(!b.matches(&key_msg(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(!b.enabled());
    }

    #[test]
    fn test_empty_binding_is_disabled() {
        let b = new_binding(vec![with_help("x", "nothing")]);
        assert!(!b.enabled());
    }

    #[test]
    fn test_with_disabled_option() {
        let b = new_binding(vec![with_keys_str(&["q"]), with_disabled()]);
        assert!(!b.enabled());
    }

    #[test]
    fn test_help_text() {
        let b = new_binding(vec![
            with_keys_str(&["tab"]),
            with_help("tab", "switch field"),
        ]);
        assert_eq!(b.help().key, "tab");
        assert_eq!(b.help().desc, "switch field");
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Up]);
        let b = Binding::new(vec![KeyCode::Down]);
        assert!(matches(
            &key_msg(KeyCode::Down, KeyModifiers::NONE),
            &[&a, &b]
        ));
        assert!(!matches(
            &key_msg(KeyCode::Left, KeyModifiers::NONE),
            &[&a, &b]
        ));
    }

    #[test]
    fn test_unrecognized_key_string_ignored() {
        let b = new_binding(vec![with_keys_str(&["definitely-not-a-key", "q"])]);
        assert!(b.matches(&key_msg(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
