//! Header bar: title, lead count and source on the top row.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// `"12 leads"` when nothing is filtered out, `"3 / 12 leads"` otherwise.
pub fn count_label(visible: usize, total: usize) -> String {
    if visible == total {
        format!("{total} leads")
    } else {
        format!("{visible} / {total} leads")
    }
}

pub struct HeaderBar<'a> {
    /// `None` while the collection is not loaded.
    counts: Option<(usize, usize)>,
    source: &'a str,
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    pub fn new(counts: Option<(usize, usize)>, source: &'a str, theme: &'a Theme) -> Self {
        Self { counts, source, theme }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = match self.counts {
            Some((visible, total)) => count_label(visible, total),
            None => "loading…".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(" leadsheet ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(count, self.theme.chip_active),
            Span::raw("  "),
            Span::styled(self.source, self.theme.muted),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.muted);
    }
}
