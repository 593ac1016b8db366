use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::dots::Period;
use crate::engine::progress::TermProgress;
use crate::ui::labels;
use crate::ui::theme::Theme;

/// Period names with their day counts, left and right aligned.
pub struct Legend<'a> {
    progress: &'a TermProgress,
    theme: &'a Theme,
}

impl<'a> Legend<'a> {
    pub fn new(progress: &'a TermProgress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }

    pub fn entry_text(&self, period: Period) -> String {
        let p = self.progress;
        match period {
            Period::First if p.first_period_remaining_days > 0 => format!(
                "{} ({} days, {} left)",
                labels::FIRST_PERIOD,
                p.first_period_days,
                p.first_period_remaining_days
            ),
            Period::First => format!("{} ({} days)", labels::FIRST_PERIOD, p.first_period_days),
            Period::Second => format!("{} ({} days)", labels::SECOND_PERIOD, p.second_period_days),
        }
    }

    fn entry(&self, period: Period) -> Line<'static> {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(self.theme.period_color(period))),
            Span::styled(
                self.entry_text(period),
                Style::default().fg(self.theme.colors.caption()),
            ),
        ])
    }
}

impl Widget for Legend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        Paragraph::new(self.entry(Period::First))
            .alignment(Alignment::Left)
            .render(halves[0], buf);
        Paragraph::new(self.entry(Period::Second))
            .alignment(Alignment::Right)
            .render(halves[1], buf);
    }
}

/// The three reference dates, spread across one line.
pub struct ReferenceFooter<'a> {
    theme: &'a Theme,
}

impl<'a> ReferenceFooter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ReferenceFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.theme.colors.text_muted());
        let thirds = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);
        for ((text, alignment), cell) in [
            (labels::ELECTION_DAY, Alignment::Left),
            (labels::FIRST_TERM_END, Alignment::Center),
            (labels::SECOND_TERM_END, Alignment::Right),
        ]
        .into_iter()
        .zip(thirds.iter())
        {
            Paragraph::new(Span::styled(text, style))
                .alignment(alignment)
                .render(*cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeColors;

    fn theme() -> Theme {
        Theme {
            name: "test".to_string(),
            colors: ThemeColors::default(),
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_entry_text() {
        let theme = theme();
        let mut p = TermProgress {
            first_period_days: 77,
            second_period_days: 1461,
            current_day_index: 70,
            days_since_start: 70,
            first_period_remaining_days: 7,
        };
        let legend = Legend::new(&p, &theme);
        assert_eq!(legend.entry_text(Period::First), "Joe Biden (77 days, 7 left)");
        assert_eq!(legend.entry_text(Period::Second), "Donald Trump (1461 days)");

        p.first_period_remaining_days = -3;
        let legend = Legend::new(&p, &theme);
        assert_eq!(legend.entry_text(Period::First), "Joe Biden (77 days)");
    }

    #[test]
    fn test_legend_render() {
        let theme = theme();
        let p = TermProgress {
            first_period_days: 77,
            second_period_days: 1461,
            current_day_index: 100,
            days_since_start: 100,
            first_period_remaining_days: -23,
        };
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Legend::new(&p, &theme).render(area, &mut buf);
        let line = row(&buf, 0);
        assert!(line.starts_with("● Joe Biden (77 days)"));
        assert!(line.trim_end().ends_with("Donald Trump (1461 days)"));
        assert_eq!(buf[(0, 0)].fg, theme.colors.first_future());
    }

    #[test]
    fn test_footer_lists_dates() {
        let theme = theme();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        ReferenceFooter::new(&theme).render(area, &mut buf);
        let line = row(&buf, 0);
        assert!(line.contains(labels::ELECTION_DAY));
        assert!(line.contains(labels::FIRST_TERM_END));
        assert!(line.contains(labels::SECOND_TERM_END));
    }
}
