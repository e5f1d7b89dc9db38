//! Filter bar: status chips and the current category.

use crate::theme::Theme;
use leadsheet_core::{LeadQuery, StatusFilter};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct FilterBar<'a> {
    query: &'a LeadQuery,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    pub fn new(query: &'a LeadQuery, theme: &'a Theme) -> Self {
        Self { query, theme }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for chip in StatusFilter::CHIPS {
            let style = if chip == self.query.status {
                self.theme.chip_active
            } else {
                self.theme.muted
            };
            spans.push(Span::styled(format!(" {} ", chip.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("│ Category: ", self.theme.muted));
        spans.push(Span::styled(
            self.query.category.label().to_string(),
            self.theme.category_style(self.query.category.label()),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadsheet_core::CategoryFilter;

    #[test]
    fn shows_every_chip_and_category() {
        let theme = Theme::load_default();
        let query = LeadQuery {
            category: CategoryFilter::Only("Builders".to_string()),
            ..LeadQuery::default()
        };
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        FilterBar::new(&query, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();

        for chip in StatusFilter::CHIPS {
            assert!(row.contains(chip.label()), "missing chip {chip}");
        }
        assert!(row.contains("Category: Builders"));
    }
}
