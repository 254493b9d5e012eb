//! # InputBox Component
//!
//! Single-line text entry for new task descriptions.
//!
//! ## Responsibilities
//!
//! - Capture text input up to a fixed character limit
//! - Handle editing (backspace, delete, cursor movement, home/end)
//! - Handle submission (Enter) - emits the buffer and clears it
//! - Render a `> ` prompt, a placeholder while empty, and the terminal
//!   cursor at the insertion point
//!
//! The buffer is internal state; the character limit and visible width are
//! props from `DisplayConfig`. Content wider than the visible width scrolls
//! horizontally to keep the cursor in view. Column math goes through
//! `unicode-width` so wide characters count as two columns.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "task";

/// High-level events emitted by the InputBox.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed on a non-empty buffer).
    Submit(String),
    /// Text content or cursor position changed.
    Changed,
}

/// Single-line text input.
///
/// # Props
///
/// - `char_limit`: maximum accepted characters
/// - `width`: visible width in columns
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: byte offset of the insertion point
/// - `scroll_cols`: leftmost visible display column
pub struct InputBox {
    buffer: String,
    cursor: usize,
    scroll_cols: u16,
    pub char_limit: usize,
    pub width: u16,
}

impl InputBox {
    pub fn new(char_limit: usize, width: u16) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll_cols: 0,
            char_limit,
            width,
        }
    }

    /// Current buffer contents.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer, placing the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.buffer.len();
        self.scroll_cols = 0;
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.set_value(String::new());
    }

    fn prev_boundary(&self, from: usize) -> usize {
        self.buffer[..from]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, from: usize) -> usize {
        self.buffer[from..]
            .chars()
            .next()
            .map(|c| from + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Display column of the cursor within the whole buffer.
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Scroll horizontally so the cursor stays inside the visible window.
    fn update_scroll(&mut self) {
        let col = self.cursor_col();
        let visible = self.width.max(1);
        if col < self.scroll_cols {
            self.scroll_cols = col;
        } else if col >= self.scroll_cols + visible {
            self.scroll_cols = col - visible + 1;
        }
    }

    /// Slice of the buffer falling in the visible column window.
    fn visible_text(&self) -> String {
        let start = self.scroll_cols as usize;
        let end = start + self.width.max(1) as usize;
        let mut col = 0usize;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if col + w > end {
                break;
            }
            if col >= start {
                out.push(c);
            }
            col += w;
        }
        out
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.update_scroll();

        let line = if self.buffer.is_empty() {
            Line::from(vec![
                Span::raw(PROMPT),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![Span::raw(PROMPT), Span::raw(self.visible_text())])
        };
        frame.render_widget(line, area);

        let prompt_width = PROMPT.width() as u16;
        let cursor_x = area.x + prompt_width + (self.cursor_col() - self.scroll_cols);
        frame.set_cursor_position((cursor_x, area.y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if self.buffer.chars().count() >= self.char_limit {
                    return None;
                }
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary(self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_boundary(self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary(self.cursor);
                    Some(InputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_boundary(self.cursor);
                    Some(InputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::Changed
            }),
            TuiEvent::Submit => {
                if !self.buffer.is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    self.scroll_cols = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
