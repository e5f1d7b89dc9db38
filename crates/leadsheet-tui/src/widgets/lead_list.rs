//! Lead list: the main pane.
//!
//! Renders one of three mutually exclusive bodies: skeleton rows while the
//! fetch is pending, the failure message, or the visible leads (with the
//! empty-results message when the filters leave nothing).

use crate::theme::Theme;
use leadsheet_core::{Lead, LoadState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

pub const EMPTY_MESSAGE: &str = "No leads found matching your criteria.";

const SKELETON: &str = "░░░░░░░░░░░░░░░░░░░░░░░░";

pub struct LeadList<'a> {
    load: &'a LoadState,
    visible: &'a [&'a Lead],
    selected: usize,
    show_links: bool,
    skeleton_rows: u16,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> LeadList<'a> {
    pub fn new(load: &'a LoadState, visible: &'a [&'a Lead], theme: &'a Theme) -> Self {
        Self {
            load,
            visible,
            selected: 0,
            show_links: true,
            skeleton_rows: 4,
            focused: true,
            theme,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_links(mut self, show: bool) -> Self {
        self.show_links = show;
        self
    }

    pub fn skeleton_rows(mut self, rows: u16) -> Self {
        self.skeleton_rows = rows;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lead_item(&self, lead: &Lead) -> ListItem<'static> {
        let mut title = vec![
            Span::styled(lead.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format!("[{}]", lead.status), self.theme.status_style(lead.status)),
        ];
        if lead.has_category() {
            title.push(Span::raw(" "));
            title.push(Span::styled(
                format!("[{}]", lead.category),
                self.theme.category_style(&lead.category),
            ));
        }

        let details = Line::from(Span::styled(
            format!(
                "  {} · {}, {} · {}",
                lead.phone, lead.location, lead.city, lead.property_type
            ),
            self.theme.muted,
        ));

        let mut lines = vec![Line::from(title), details];

        if self.show_links {
            let links: Vec<Span> = [lead.website_href(), lead.linkedin_href()]
                .into_iter()
                .flatten()
                .map(|href| Span::styled(href, self.theme.link))
                .collect();
            if !links.is_empty() {
                let mut spans = vec![Span::raw("  ")];
                for (i, link) in links.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw("  "));
                    }
                    spans.push(link);
                }
                lines.push(Line::from(spans));
            }
        }

        ListItem::new(lines)
    }
}

impl Widget for LeadList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Leads").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.load {
            LoadState::Loading => {
                let lines: Vec<Line> = (0..self.skeleton_rows)
                    .flat_map(|_| {
                        [
                            Line::from(Span::styled(SKELETON, self.theme.muted)),
                            Line::from(Span::styled(&SKELETON[..SKELETON.len() / 2], self.theme.muted)),
                            Line::default(),
                        ]
                    })
                    .collect();
                Paragraph::new(lines).render(inner, buf);
            }
            LoadState::Failed(message) => {
                let lines = vec![
                    Line::from(Span::styled(message.as_str(), self.theme.error)),
                    Line::from(Span::styled("press r to retry", self.theme.muted)),
                ];
                Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
            }
            LoadState::Loaded(_) if self.visible.is_empty() => {
                Paragraph::new(Line::from(Span::styled(EMPTY_MESSAGE, self.theme.muted)))
                    .render(inner, buf);
            }
            LoadState::Loaded(_) => {
                let items: Vec<ListItem> =
                    self.visible.iter().map(|lead| self.lead_item(lead)).collect();
                let list = List::new(items).highlight_style(self.theme.selected);
                let mut state = ListState::default().with_selected(Some(self.selected));
                StatefulWidget::render(list, inner, buf, &mut state);
            }
        }
    }
}
