use std::fs;
use std::ops::Range;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::engine::dots::{DotState, Period};
use crate::ui::pulse::{PulseAnimation, PulseKind};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "daylight";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub card_bg: String,
    pub fg: String,
    pub text_muted: String,
    pub caption: String,
    pub border: String,
    pub first_past: String,
    pub first_future: String,
    pub second_past: String,
    pub second_future: String,
    pub first_pulse_from: String,
    pub first_pulse_to: String,
    pub second_pulse_from: String,
    pub second_pulse_to: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("termdots")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => tracing::warn!(
                        path = %user_theme_path.display(),
                        "ignoring unreadable theme: {err}"
                    ),
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }

    /// Animation for the pulsing dot, keyed by which period it falls in.
    pub fn pulse(&self, kind: PulseKind) -> PulseAnimation {
        let c = &self.colors;
        let (from, to) = match kind {
            PulseKind::FirstPeriodCurrent => (&c.first_pulse_from, &c.first_pulse_to),
            PulseKind::SecondPeriodCurrent => (&c.second_pulse_from, &c.second_pulse_to),
        };
        PulseAnimation::new(ThemeColors::parse_rgb(from), ThemeColors::parse_rgb(to))
    }

    /// Fill for a non-current dot. Current dots take their color from `pulse`.
    pub fn dot_color(&self, state: DotState) -> Color {
        let c = &self.colors;
        match (state, state.period()) {
            (DotState::Past(_), Period::First) => c.first_past(),
            (DotState::Past(_), Period::Second) => c.second_past(),
            (_, Period::First) => c.first_future(),
            (_, Period::Second) => c.second_future(),
        }
    }

    pub fn period_color(&self, period: Period) -> Color {
        self.dot_color(DotState::Future(period))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#f3f4f6".to_string(),
            card_bg: "#ffffff".to_string(),
            fg: "#1f2937".to_string(),
            text_muted: "#6b7280".to_string(),
            caption: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            first_past: "#c9e2fe".to_string(),
            first_future: "#3b82f6".to_string(),
            second_past: "#fed2d2".to_string(),
            second_future: "#ef4444".to_string(),
            first_pulse_from: "#93c5fd".to_string(),
            first_pulse_to: "#3b82f6".to_string(),
            second_pulse_from: "#fca5a5".to_string(),
            second_pulse_to: "#ef4444".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#');
        let channel = |range: Range<usize>| hex.get(range).and_then(|h| u8::from_str_radix(h, 16).ok());
        match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
            (6, Some(r), Some(g), Some(b)) => (r, g, b),
            _ => (255, 255, 255),
        }
    }

    pub fn parse_color(hex: &str) -> Color {
        let (r, g, b) = Self::parse_rgb(hex);
        Color::Rgb(r, g, b)
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn card_bg(&self) -> Color { Self::parse_color(&self.card_bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_muted(&self) -> Color { Self::parse_color(&self.text_muted) }
    pub fn caption(&self) -> Color { Self::parse_color(&self.caption) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn first_past(&self) -> Color { Self::parse_color(&self.first_past) }
    pub fn first_future(&self) -> Color { Self::parse_color(&self.first_future) }
    pub fn second_past(&self) -> Color { Self::parse_color(&self.second_past) }
    pub fn second_future(&self) -> Color { Self::parse_color(&self.second_future) }
}
