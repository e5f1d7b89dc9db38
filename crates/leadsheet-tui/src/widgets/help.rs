//! Keybinding reference drawn over the lead list while `?` is toggled on.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const KEY_COLUMN: usize = 20;
const POPUP_WIDTH: u16 = 76;

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("↑ k  /  ↓ j", "Select previous / next lead"),
    ("← h  /  → l", "Previous / next status filter"),
    ("[  /  ]", "Previous / next category"),
    ("g  /  G", "First / last lead"),
    ("PageUp / PageDown", "Move selection by a page"),
    ("/", "Search by name, location or city"),
    ("Escape", "Leave the search bar"),
    ("c", "Call: mark Called, show tel: link"),
    ("1  2  3", "After a call: Contacted / Not Received / Closed"),
    ("w", "Show WhatsApp link"),
    ("r", "Refresh from the sheet"),
    (":", "Command bar (q, refresh, theme, status, category, set)"),
    ("?", "Show or hide this list"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = BINDINGS.len() as u16 + 2;
        let [band] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
            .flex(Flex::Center)
            .areas(band);

        Clear.render(popup, buf);
        let frame = Block::bordered()
            .title(" keys (? to close) ")
            .border_style(self.theme.border_focused);
        let body = frame.inner(popup);
        frame.render(popup, buf);

        let key_style = self.theme.chip_active.add_modifier(Modifier::BOLD);
        let rows = BINDINGS.iter().map(|&(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN$}"), key_style),
                Span::raw(action),
            ])
        });
        Paragraph::new(rows.collect::<Vec<_>>()).render(body, buf);
    }
}
