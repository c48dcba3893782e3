//! Test helpers: key construction, action assertions, a render harness
//!
//! ```ignore
//! use cityweather::testing::{key, ActionAssertions, RenderHarness};
//!
//! panel.handle_event(&EventKind::Key(key("enter")), props)
//!     .assert_only(Action::WeatherFetch);
//!
//! let mut render = RenderHarness::new(60, 20);
//! let output = render.render_to_string_plain(|frame| panel.render(frame, frame.area(), props));
//! assert!(output.contains("City Weather"));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::action::Action;

/// Parse a key string such as `"j"`, `"G"`, `"enter"`, `"ctrl+c"` or
/// `"shift+tab"`. Single characters keep their case.
pub fn parse_key(s: &str) -> Option<KeyEvent> {
    let s = s.trim();
    let mut parts: Vec<&str> = s.split('+').collect();
    let key_part = parts.pop()?;

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match key_part.to_ascii_lowercase().as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::BackTab
            }
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
            _ => return None,
        },
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Like [`parse_key`], but panics on an invalid key string.
pub fn key(s: &str) -> KeyEvent {
    parse_key(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Assertions on the actions returned by `handle_event`
pub trait ActionAssertions {
    fn assert_empty(&self);
    fn assert_count(&self, n: usize);
    fn assert_first(&self, expected: Action);
    /// Exactly one action, equal to `expected`
    fn assert_only(&self, expected: Action);
}

impl ActionAssertions for Vec<Action> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "Expected no actions, got {:?}", self);
    }

    fn assert_count(&self, n: usize) {
        assert_eq!(self.len(), n, "Unexpected actions: {:?}", self);
    }

    fn assert_first(&self, expected: Action) {
        assert_eq!(self.first(), Some(&expected), "Actions: {:?}", self);
    }

    fn assert_only(&self, expected: Action) {
        self.assert_count(1);
        self.assert_first(expected);
    }
}

/// Renders into an in-memory terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render and return the buffer contents, one line per row, no styles.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let completed = self
            .terminal
            .draw(render)
            .unwrap_or_else(|e| panic!("Failed to draw: {e}"));
        buffer_to_string_plain(completed.buffer)
    }
}

pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
