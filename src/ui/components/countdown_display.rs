use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::countdown::Countdown;
use crate::ui::components::numerals::{BigNumber, GLYPH_HEIGHT};
use crate::ui::labels;
use crate::ui::theme::Theme;

/// Rows needed for the block-font layout.
pub const FULL_HEIGHT: u16 = GLYPH_HEIGHT + 5;
pub const COMPACT_HEIGHT: u16 = 3;

pub struct CountdownDisplay<'a> {
    countdown: &'a Countdown,
    theme: &'a Theme,
}

impl<'a> CountdownDisplay<'a> {
    pub fn new(countdown: &'a Countdown, theme: &'a Theme) -> Self {
        Self { countdown, theme }
    }

    fn caption(&self) -> &'static str {
        if self.countdown.complete {
            labels::CAPTION_COMPLETE
        } else {
            labels::CAPTION_PENDING
        }
    }

    fn units_line(&self) -> Line<'static> {
        let colors = &self.theme.colors;
        let r = &self.countdown.remaining;
        let mut spans = Vec::new();
        for (i, (value, label)) in [
            (r.hours, labels::HOURS),
            (r.minutes, labels::MINUTES),
            (r.seconds, labels::SECONDS),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            spans.push(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(colors.text_muted()),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for CountdownDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let days = self.countdown.remaining.days;
        let days_label = Span::styled(
            format!(" {}", labels::DAYS),
            Style::default().fg(colors.text_muted()),
        );
        let caption = Paragraph::new(Line::from(Span::styled(
            self.caption(),
            Style::default()
                .fg(colors.caption())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        let units = Paragraph::new(self.units_line()).alignment(Alignment::Center);

        let big = BigNumber::new(
            days,
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        );

        if area.height >= FULL_HEIGHT && big.fits(area) {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(GLYPH_HEIGHT),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(area);

            big.render(layout[0], buf);
            Paragraph::new(Line::from(days_label))
                .alignment(Alignment::Center)
                .render(layout[1], buf);
            units.render(layout[3], buf);
            caption.render(layout[4], buf);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                days.to_string(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ),
            days_label,
        ]))
        .alignment(Alignment::Center)
        .render(layout[0], buf);
        units.render(layout[1], buf);
        caption.render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::countdown::CountdownBreakdown;
    use crate::ui::theme::ThemeColors;

    fn theme() -> Theme {
        Theme {
            name: "test".to_string(),
            colors: ThemeColors::default(),
        }
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn pending() -> Countdown {
        Countdown {
            remaining: CountdownBreakdown {
                days: 1234,
                hours: 5,
                minutes: 6,
                seconds: 7,
            },
            complete: false,
        }
    }

    #[test]
    fn test_compact_layout_shows_all_units() {
        let area = Rect::new(0, 0, 60, COMPACT_HEIGHT);
        let mut buf = Buffer::empty(area);
        let theme = theme();
        let countdown = pending();
        CountdownDisplay::new(&countdown, &theme).render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains("1234 days"));
        assert!(out.contains("5 hours"));
        assert!(out.contains("6 minutes"));
        assert!(out.contains("7 seconds"));
        assert!(out.contains(labels::CAPTION_PENDING));
    }

    #[test]
    fn test_full_layout_uses_block_font() {
        let area = Rect::new(0, 0, 60, FULL_HEIGHT);
        let mut buf = Buffer::empty(area);
        let theme = theme();
        let countdown = pending();
        CountdownDisplay::new(&countdown, &theme).render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains('█'));
        assert!(!out.contains("1234"));
        assert!(out.contains("days"));
    }

    #[test]
    fn test_complete_caption() {
        let area = Rect::new(0, 0, 60, COMPACT_HEIGHT);
        let mut buf = Buffer::empty(area);
        let theme = theme();
        let countdown = Countdown::from_delta_millis(0);
        CountdownDisplay::new(&countdown, &theme).render(area, &mut buf);
        let out = text(&buf);
        assert!(out.contains(labels::CAPTION_COMPLETE));
        assert!(out.contains("0 days"));
    }

    #[test]
    fn test_zero_area() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        let theme = theme();
        let countdown = pending();
        CountdownDisplay::new(&countdown, &theme).render(area, &mut buf);
    }
}
