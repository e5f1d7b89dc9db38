//! `:` prompt drawn over the footer row.
//!
//! Only line editing lives here. The app decides what `Enter` and `Escape`
//! mean and hands parse failures back through [`CommandBarState::error`].

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::query_bar::{next_boundary, prev_boundary};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

#[derive(Debug, Default)]
pub struct CommandBarState {
    pub input: String,
    /// Byte index into `input`, always on a char boundary.
    pub cursor: usize,
    /// Shown instead of the prompt until the next keystroke.
    pub error: Option<String>,
}

impl CommandBarState {
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Apply an editing event. `Enter` and `Escape` are handled by the app.
    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;

        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace if self.cursor > 0 => {
                let prev = prev_boundary(&self.input, self.cursor);
                self.input.remove(prev);
                self.cursor = prev;
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.input, self.cursor);
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.input, self.cursor);
            }
            _ => {}
        }
    }

    /// Terminal column for the caret, one past the `:` glyph and never
    /// beyond the last cell of `area`.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let typed = self.input[..self.cursor].chars().count() as u16;
        let last = area.right().saturating_sub(1);
        area.x.saturating_add(1 + typed).min(last)
    }
}

/// Single-row overlay rendering either `:<input>` or the last error.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let prompt = match &self.state.error {
            Some(message) => Line::from(Span::styled(format!("E  {message}"), self.theme.error)),
            None => Line::from(vec![
                Span::styled(":", self.theme.border_command_bar.add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.as_str()),
            ]),
        };
        buf.set_line(area.x, area.y, &prompt, area.width);
    }
}
