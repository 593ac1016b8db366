use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::components::countdown_display::{COMPACT_HEIGHT, FULL_HEIGHT};

pub const MAX_CONTENT_WIDTH: u16 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Tall,    // ≥30 rows: block-font countdown with breathing room
    Regular, // 20-29 rows: block-font countdown
    Short,   // <20 rows: one-line countdown
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.height >= 30 {
            LayoutTier::Tall
        } else if area.height >= 20 {
            LayoutTier::Regular
        } else {
            LayoutTier::Short
        }
    }

    pub fn countdown_height(&self) -> u16 {
        match self {
            LayoutTier::Tall | LayoutTier::Regular => FULL_HEIGHT,
            LayoutTier::Short => COMPACT_HEIGHT,
        }
    }

    pub fn top_padding(&self) -> u16 {
        match self {
            LayoutTier::Tall => 3,
            LayoutTier::Regular => 1,
            LayoutTier::Short => 0,
        }
    }
}

pub struct DashboardLayout {
    pub countdown: Rect,
    pub card: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);
        let column = centered_column(MAX_CONTENT_WIDTH, area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(tier.top_padding()),
                Constraint::Length(tier.countdown_height()),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(column);

        Self {
            countdown: vertical[1],
            card: vertical[2],
            footer: vertical[3],
        }
    }
}

/// Inside the card border: dot row, legend, reference dates.
pub struct CardLayout {
    pub dots: Rect,
    pub legend: Rect,
    pub dates: Rect,
}

impl CardLayout {
    pub fn new(inner: Rect) -> Self {
        let padded = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(padded);

        Self {
            dots: vertical[0],
            legend: vertical[1],
            dates: vertical[3],
        }
    }
}

/// A full-height column at most `max_width` wide, centered in `area`.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = area.width.min(max_width);
    let left = area.x.saturating_add((area.width - width) / 2);
    Rect::new(left, area.y, width, area.height)
}
