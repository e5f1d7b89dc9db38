//! Search box under the lead list. Every edit re-filters the list, so
//! [`QueryBarState::handle`] reports whether the text actually changed.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

#[derive(Debug, Default)]
pub struct QueryBarState {
    pub query: String,
    /// Byte index into `query`, always on a char boundary.
    pub cursor: usize,
}

impl QueryBarState {
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        let edited = match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            AppEvent::Backspace if self.cursor > 0 => {
                self.cursor = prev_boundary(&self.query, self.cursor);
                self.query.remove(self.cursor);
                true
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.query, self.cursor);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.query, self.cursor);
                false
            }
            _ => false,
        };
        if edited {
            tracing::debug!(query = %self.query, "search text changed");
        }
        edited
    }
}

pub(crate) fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

pub(crate) fn next_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(s.len())
}

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Caret position inside the bordered box, clamped to its right edge.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let typed = self.state.query[..self.state.cursor].chars().count() as u16;
        let last = area.right().saturating_sub(2);
        (area.x.saturating_add(1 + typed).min(last), area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = Block::bordered().title("Search").border_style(match self.focused {
            true => self.theme.border_focused,
            false => self.theme.border_unfocused,
        });
        let body = frame.inner(area);
        frame.render(area, buf);

        let text = match (self.state.query.is_empty(), self.focused) {
            (true, false) => Line::from(Span::styled(
                "press / to search by name, location or city",
                self.theme.muted,
            )),
            _ => Line::from(self.state.query.as_str()),
        };
        Paragraph::new(text).render(body, buf);
    }
}
