//! Single-line search input for the catalog widget.
//!
//! This is a deliberately small text input: it holds the raw filter text,
//! supports the usual line-editing keys, and renders a placeholder and a
//! blinking cursor. There are no echo modes, no completion, and no
//! validation hook; every keystroke is forwarded to the bound value as-is,
//! which is exactly the contract the search bar needs.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_catalog::searchinput;
//!
//! let mut input = searchinput::new();
//! input.set_placeholder("Search...");
//! let _cmd = input.focus();
//! input.set_value("carrot");
//! assert_eq!(input.value(), "carrot");
//! ```

use crate::key::{matches_binding, new_binding, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Blink messages carry the owning input's id so that stale ticks from a
// previous focus cycle are discarded.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that toggles the cursor's blink phase.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Identifier of the input instance this message targets.
    pub id: usize,
    /// Sequence tag used to drop stale blink messages.
    pub tag: usize,
}

/// Message carrying text read from the system clipboard.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Message carrying a clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Key bindings for the search input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move cursor one word right.
    pub word_forward: Binding,
    /// Move cursor one word left.
    pub word_backward: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
    /// Delete the word after the cursor.
    pub delete_word_forward: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Paste from clipboard.
    pub paste: Binding,
}

/// The default search-input bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "ctrl+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "ctrl+left", "alt+b"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
        delete_word_forward: new_binding(vec![with_keys_str(&["alt+delete", "alt+d"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"])]),
    }
}

/// The search input model.
///
/// The value is stored as a character buffer; `pos` is a character index.
/// When `width` is positive the view shows a scrolling window of at most
/// that many characters, tracked by the `offset`/`offset_right` pair.
pub struct Model {
    /// A clipboard error that surfaced during paste, if any.
    pub err: Option<String>,

    /// Prompt rendered before the input.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for typed text.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for the cursor block.
    pub cursor_style: Style,

    /// Maximum number of characters shown at once; 0 means unlimited.
    pub width: i32,
    /// Maximum number of characters accepted; 0 means unlimited.
    pub char_limit: i32,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Time between blink phases.
    pub blink_speed: Duration,

    value: Vec<char>,
    focus: bool,
    pos: usize,
    offset: usize,
    offset_right: usize,

    // Inverted: while `blink` is true the cursor block is not shown.
    blink: bool,
    blink_tag: usize,
    id: usize,
}

/// Creates a search input with default settings.
///
/// The input starts blurred; call `focus()` to receive keyboard input and
/// start the cursor blinking.
pub fn new() -> Model {
    Model {
        err: None,
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new(),
        width: 0,
        char_limit: 0,
        key_map: default_key_map(),
        blink_speed: DEFAULT_BLINK_SPEED,
        value: Vec::new(),
        focus: false,
        pos: 0,
        offset: 0,
        offset_right: 0,
        blink: true,
        blink_tag: 0,
        id: next_id(),
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

/// Creates a command that reads the system clipboard and reports the result
/// as a [`PasteMsg`] or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl Model {
    /// Replaces the entire value, clamping to the character limit and
    /// moving the cursor to the end when it would fall out of range.
    pub fn set_value(&mut self, s: &str) {
        let runes: Vec<char> = s.chars().collect();
        let empty = self.value.is_empty();

        if self.char_limit > 0 && runes.len() > self.char_limit as usize {
            self.value = runes[..self.char_limit as usize].to_vec();
        } else {
            self.value = runes;
        }

        if (self.pos == 0 && empty) || self.pos > self.value.len() {
            self.set_cursor(self.value.len());
        }
        self.handle_overflow();
    }

    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the value and resets the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.offset = 0;
        self.offset_right = 0;
        self.err = None;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width in characters; 0 disables the window.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the maximum accepted length in characters; 0 disables the limit.
    pub fn set_char_limit(&mut self, limit: i32) {
        self.char_limit = limit;
    }

    /// Focuses the input and starts the cursor blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.blink = false;
        self.blink_cmd()
    }

    /// Blurs the input; it stops receiving keyboard input.
    pub fn blur(&mut self) {
        self.focus = false;
        self.blink = true;
    }

    /// Returns whether the input is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    fn blink_cmd(&mut self) -> Cmd {
        self.blink_tag += 1;
        let id = self.id;
        let tag = self.blink_tag;
        tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        })
    }

    /// Processes a message, mutating the input state.
    ///
    /// Keyboard input is only handled while the input is focused. The
    /// returned command, when present, schedules the next cursor blink or
    /// a clipboard read.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }
            self.blink = !self.blink;
            return Some(self.blink_cmd());
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.paste) {
                return Some(paste());
            }
            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let chars: Vec<char> = paste_msg.0.chars().collect();
            self.insert_runes(chars);
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        self.handle_overflow();
        None
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            self.err = None;
            if !self.value.is_empty() && self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if !self.value.is_empty() && self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value = self.value[self.pos..].to_vec();
            self.pos = 0;
        } else if matches_binding(key_msg, &self.key_map.delete_word_forward) {
            self.delete_word_forward();
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.set_cursor(self.prev_word_boundary());
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.set_cursor(self.next_word_boundary());
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Accept plain characters; shift arrives encoded in the char
            // case, while ctrl/alt combinations belong to the bindings.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(vec![ch]);
            }
        }
    }

    fn insert_runes(&mut self, runes: Vec<char>) {
        let avail = if self.char_limit > 0 {
            let space = self.char_limit as usize - self.value.len().min(self.char_limit as usize);
            if space == 0 {
                return;
            }
            Some(space)
        } else {
            None
        };

        let take = avail.map(|n| n.min(runes.len())).unwrap_or(runes.len());
        for r in runes.into_iter().take(take) {
            self.value.insert(self.pos, r);
            self.pos += 1;
        }
        self.handle_overflow();
    }

    fn prev_word_boundary(&self) -> usize {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    fn next_word_boundary(&self) -> usize {
        let mut i = self.pos;
        let len = self.value.len();
        while i < len && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < len && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    fn delete_word_backward(&mut self) {
        let start = self.prev_word_boundary();
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    fn delete_word_forward(&mut self) {
        let end = self.next_word_boundary();
        self.value.drain(self.pos..end);
    }

    // Keeps the visible window around the cursor when a width is set.
    fn handle_overflow(&mut self) {
        if self.width <= 0 || self.value.len() <= self.width as usize {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());

        if self.pos < self.offset {
            self.offset = self.pos;
            self.offset_right = (self.offset + self.width as usize).min(self.value.len());
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            self.offset = self.offset_right.saturating_sub(self.width as usize);
        }
    }

    /// Renders the input: prompt, then the value (or placeholder) with the
    /// cursor block over the character at the insertion point.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let window = &self.value[self.offset..self.offset_right.max(self.offset)];
        let pos = self.pos.saturating_sub(self.offset);

        let mut v = String::new();
        let before: String = window.iter().take(pos).collect();
        v.push_str(&self.text_style.clone().inline(true).render(&before));

        if pos < window.len() {
            v.push_str(&self.render_cursor(&window[pos].to_string()));
            let after: String = window.iter().skip(pos + 1).collect();
            if !after.is_empty() {
                v.push_str(&self.text_style.clone().inline(true).render(&after));
            }
        } else {
            v.push_str(&self.render_cursor(" "));
        }

        format!(
            "{}{}",
            self.prompt_style.clone().inline(true).render(&self.prompt),
            v
        )
    }

    fn placeholder_view(&self) -> String {
        let mut v = String::new();
        let chars: Vec<char> = self.placeholder.chars().collect();

        if let Some(first) = chars.first() {
            v.push_str(&self.render_cursor(&first.to_string()));
            let rest: String = chars[1..].iter().collect();
            v.push_str(
                &self
                    .placeholder_style
                    .clone()
                    .inline(true)
                    .render(&rest),
            );
        }

        format!(
            "{}{}",
            self.prompt_style.clone().inline(true).render(&self.prompt),
            v
        )
    }

    fn render_cursor(&self, ch: &str) -> String {
        if self.focus && !self.blink {
            self.cursor_style
                .clone()
                .inline(true)
                .reverse(true)
                .render(ch)
        } else if self.value.is_empty() && !self.placeholder.is_empty() {
            self.placeholder_style.clone().inline(true).render(ch)
        } else {
            self.text_style.clone().inline(true).render(ch)
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Some(self.focus())
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ctrl(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        })
    }

    fn type_str(input: &mut Model, s: &str) {
        for ch in s.chars() {
            input.update(&key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_new_default_values() {
        let input = new();
        assert_eq!(input.prompt, "> ");
        assert_eq!(input.placeholder, "");
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
        assert_eq!(input.width, 0);
        assert_eq!(input.char_limit, 0);
        assert!(!input.focused());
        assert!(input.err.is_none());
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = new();
        input.set_value("hello world");
        assert_eq!(input.value(), "hello world");
        assert_eq!(input.position(), 11);
    }

    #[test]
    fn test_set_value_respects_char_limit() {
        let mut input = new();
        input.set_char_limit(5);
        input.set_value("hello world");
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut input = new();
        input.set_value("hello");
        input.set_cursor(100);
        assert_eq!(input.position(), 5);
        input.set_cursor(2);
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn test_unfocused_input_ignores_keys() {
        let mut input = new();
        input.update(&key(KeyCode::Char('x')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut input = new();
        let _ = input.focus();
        type_str(&mut input, "carrot");
        assert_eq!(input.value(), "carrot");

        input.set_cursor(0);
        input.update(&key(KeyCode::Char('x')));
        assert_eq!(input.value(), "xcarrot");
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_backspace_deletes_before_cursor() {
        let mut input = new();
        let _ = input.focus();
        type_str(&mut input, "abc");
        input.update(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn test_delete_removes_at_cursor() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("abc");
        input.set_cursor(0);
        input.update(&key(KeyCode::Delete));
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_word_backward_delete() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("green tea");
        input.update(&ctrl('w'));
        assert_eq!(input.value(), "green ");
    }

    #[test]
    fn test_delete_before_and_after_cursor() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("abcdef");
        input.set_cursor(3);
        input.update(&ctrl('k'));
        assert_eq!(input.value(), "abc");

        input.set_value("abcdef");
        input.set_cursor(3);
        input.update(&ctrl('u'));
        assert_eq!(input.value(), "def");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_movement_keys() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("water bottle");

        input.update(&key(KeyCode::Home));
        assert_eq!(input.position(), 0);
        input.update(&key(KeyCode::Right));
        assert_eq!(input.position(), 1);
        input.update(&key(KeyCode::Left));
        assert_eq!(input.position(), 0);
        input.update(&key(KeyCode::End));
        assert_eq!(input.position(), 12);
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut input = new();
        let _ = input.focus();
        input.update(&ctrl('a'));
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_char_limit_blocks_typing() {
        let mut input = new();
        let _ = input.focus();
        input.set_char_limit(3);
        type_str(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_reset_clears_state() {
        let mut input = new();
        input.set_value("something");
        input.err = Some("boom".to_string());
        input.reset();
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
        assert!(input.err.is_none());
    }

    #[test]
    fn test_overflow_window_follows_cursor() {
        let mut input = new();
        let _ = input.focus();
        input.set_width(5);
        input.set_value("abcdefghij");
        // Cursor at end: window shows the tail.
        assert_eq!(input.offset_right, 10);
        assert_eq!(input.offset, 5);

        input.set_cursor(0);
        assert_eq!(input.offset, 0);
        assert_eq!(input.offset_right, 5);
    }

    #[test]
    fn test_placeholder_rendered_when_empty() {
        let mut input = new();
        input.set_placeholder("Search...");
        let view = input.view();
        assert!(view.contains("Search") || view.contains("earch"));

        input.set_value("x");
        assert!(!input.view().contains("earch"));
    }

    #[test]
    fn test_focus_and_blur() {
        let mut input = new();
        assert!(!input.focused());
        let _cmd = input.focus();
        assert!(input.focused());
        input.blur();
        assert!(!input.focused());
    }

    #[test]
    fn test_blink_msg_toggles_phase() {
        let mut input = new();
        let _ = input.focus();
        assert!(!input.blink);

        let tag = input.blink_tag;
        let msg: Msg = Box::new(BlinkMsg { id: input.id, tag });
        let cmd = input.update(&msg);
        assert!(input.blink);
        assert!(cmd.is_some());
    }

    #[test]
    fn test_stale_blink_msg_is_ignored() {
        let mut input = new();
        let _ = input.focus();
        let msg: Msg = Box::new(BlinkMsg {
            id: input.id,
            tag: input.blink_tag + 10,
        });
        let cmd = input.update(&msg);
        assert!(!input.blink);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_paste_msg_inserts_text() {
        let mut input = new();
        let _ = input.focus();
        input.set_value("juice");
        input.set_cursor(0);
        let msg: Msg = Box::new(PasteMsg("orange ".to_string()));
        input.update(&msg);
        assert_eq!(input.value(), "orange juice");
    }

    #[test]
    fn test_paste_err_recorded() {
        let mut input = new();
        let _ = input.focus();
        let msg: Msg = Box::new(PasteErrMsg("no clipboard".to_string()));
        input.update(&msg);
        assert_eq!(input.err.as_deref(), Some("no clipboard"));
    }
}
