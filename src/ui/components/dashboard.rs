use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::DerivedState;
use crate::ui::components::countdown_display::CountdownDisplay;
use crate::ui::components::dot_grid::DotGrid;
use crate::ui::components::legend::{Legend, ReferenceFooter};
use crate::ui::labels;
use crate::ui::layout::{CardLayout, DashboardLayout};
use crate::ui::theme::Theme;

/// The whole screen for one snapshot.
pub struct Dashboard<'a> {
    pub state: &'a DerivedState,
    pub theme: &'a Theme,
    pub pulse_elapsed: Duration,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a DerivedState, theme: &'a Theme, pulse_elapsed: Duration) -> Self {
        Self {
            state,
            theme,
            pulse_elapsed,
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Block::default()
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);

        let layout = DashboardLayout::new(area);
        CountdownDisplay::new(&self.state.countdown, self.theme).render(layout.countdown, buf);

        let card = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.card_bg()));
        let inner = card.inner(layout.card);
        card.render(layout.card, buf);

        let card_layout = CardLayout::new(inner);
        DotGrid::new(&self.state.progress, self.theme, self.pulse_elapsed)
            .render(card_layout.dots, buf);
        Legend::new(&self.state.progress, self.theme).render(card_layout.legend, buf);
        ReferenceFooter::new(self.theme).render(card_layout.dates, buf);

        Paragraph::new(Line::from(Span::styled(
            labels::KEY_HINT,
            Style::default().fg(colors.text_muted()),
        )))
        .render(layout.footer, buf);
    }
}
