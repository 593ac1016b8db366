use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::engine::dots::DotState;
use crate::engine::progress::TermProgress;
use crate::ui::pulse::{PulseKind, glyph_for_scale};
use crate::ui::theme::Theme;

const DOT: &str = "●";
const HALF_LEFT: &str = "▌";

/// How many cells each dot gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// Dot plus a gap, two cells per dot.
    Spaced,
    /// One cell per dot.
    Solid,
    /// Two dots per cell, left half in the foreground, right half in the background.
    Packed,
}

impl Density {
    pub fn choose(total: usize, area: Rect) -> Self {
        let cells = area.width as usize * area.height as usize;
        let spaced = (area.width as usize / 2) * area.height as usize;
        if total <= spaced {
            Density::Spaced
        } else if total <= cells {
            Density::Solid
        } else {
            Density::Packed
        }
    }

    pub fn dots_per_row(self, width: u16) -> usize {
        match self {
            Density::Spaced => width as usize / 2,
            Density::Solid => width as usize,
            Density::Packed => width as usize * 2,
        }
    }
}

pub struct DotGrid<'a> {
    progress: &'a TermProgress,
    theme: &'a Theme,
    pulse_elapsed: Duration,
}

impl<'a> DotGrid<'a> {
    pub fn new(progress: &'a TermProgress, theme: &'a Theme, pulse_elapsed: Duration) -> Self {
        Self {
            progress,
            theme,
            pulse_elapsed,
        }
    }

    fn color_and_glyph(&self, state: DotState) -> (Color, &'static str, bool) {
        match state {
            DotState::Current(period) => {
                let frame = self.theme.pulse(PulseKind::from(period)).sample(self.pulse_elapsed);
                (frame.color, glyph_for_scale(frame.scale), frame.scale > 1.1)
            }
            other => (self.theme.dot_color(other), DOT, false),
        }
    }
}

impl Widget for DotGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.progress.total_days();
        if total == 0 || area.width == 0 || area.height == 0 {
            return;
        }
        let card_bg = self.theme.colors.card_bg();
        let density = Density::choose(total, area);
        let per_row = density.dots_per_row(area.width);
        if per_row == 0 {
            return;
        }

        match density {
            Density::Spaced | Density::Solid => {
                let step = if density == Density::Spaced { 2 } else { 1 };
                for (i, state) in self.progress.dots().enumerate() {
                    let row = (i / per_row) as u16;
                    if row >= area.height {
                        break;
                    }
                    let x = area.x + (i % per_row) as u16 * step;
                    let (color, glyph, bold) = self.color_and_glyph(state);
                    let mut style = Style::default().fg(color).bg(card_bg);
                    if bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    buf[(x, area.y + row)].set_symbol(glyph).set_style(style);
                }
            }
            Density::Packed => {
                let mut dots = self.progress.dots();
                let mut cell = 0usize;
                while let Some(left) = dots.next() {
                    let row = (cell / area.width as usize) as u16;
                    if row >= area.height {
                        break;
                    }
                    let x = area.x + (cell % area.width as usize) as u16;
                    let (left_color, _, _) = self.color_and_glyph(left);
                    let right_color = dots
                        .next()
                        .map(|right| self.color_and_glyph(right).0)
                        .unwrap_or(card_bg);
                    buf[(x, area.y + row)]
                        .set_symbol(HALF_LEFT)
                        .set_style(Style::default().fg(left_color).bg(right_color));
                    cell += 1;
                }
            }
        }
    }
}
