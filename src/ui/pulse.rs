use std::time::Duration;

use ratatui::style::Color;

use crate::engine::dots::Period;

pub const PULSE_PERIOD: Duration = Duration::from_secs(2);
pub const PULSE_SCALE_MIN: f64 = 0.9;
pub const PULSE_SCALE_MAX: f64 = 1.2;

/// Which animation the current-day dot uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PulseKind {
    FirstPeriodCurrent,
    SecondPeriodCurrent,
}

impl From<Period> for PulseKind {
    fn from(period: Period) -> Self {
        match period {
            Period::First => PulseKind::FirstPeriodCurrent,
            Period::Second => PulseKind::SecondPeriodCurrent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseFrame {
    pub scale: f64,
    pub color: Color,
}

/// Keyframes: 0% and 100% at (min scale, `from`), 50% at (max scale, `to`),
/// ease-in-out on each half, looping forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseAnimation {
    pub period: Duration,
    pub scale_min: f64,
    pub scale_max: f64,
    pub from: (u8, u8, u8),
    pub to: (u8, u8, u8),
}

impl PulseAnimation {
    pub fn new(from: (u8, u8, u8), to: (u8, u8, u8)) -> Self {
        Self {
            period: PULSE_PERIOD,
            scale_min: PULSE_SCALE_MIN,
            scale_max: PULSE_SCALE_MAX,
            from,
            to,
        }
    }

    pub fn sample(&self, elapsed: Duration) -> PulseFrame {
        let period = self.period.as_secs_f64();
        let phase = if period > 0.0 {
            (elapsed.as_secs_f64() % period) / period
        } else {
            0.0
        };
        // Progress from the 0% keyframe toward the 50% keyframe
        let t = if phase < 0.5 {
            ease_in_out(phase * 2.0)
        } else {
            ease_in_out((1.0 - phase) * 2.0)
        };
        PulseFrame {
            scale: lerp(self.scale_min, self.scale_max, t),
            color: lerp_rgb(self.from, self.to, t),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> Color {
    let ch = |x: u8, y: u8| lerp(x as f64, y as f64, t).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(ch(a.0, b.0), ch(a.1, b.1), ch(a.2, b.2))
}

/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(x: f64) -> f64 {
    const X1: f64 = 0.42;
    const X2: f64 = 0.58;
    let x = x.clamp(0.0, 1.0);

    let bezier = |t: f64, p1: f64, p2: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };
    let slope = |t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * X1 + 6.0 * u * t * (X2 - X1) + 3.0 * t * t * (1.0 - X2)
    };

    // Solve bezier_x(t) = x, Newton first then bisection if the slope is flat
    let mut t = x;
    for _ in 0..8 {
        let err = bezier(t, X1, X2) - x;
        if err.abs() < 1e-7 {
            return bezier(t, 0.0, 1.0);
        }
        let d = slope(t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..40 {
        let v = bezier(t, X1, X2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(t, 0.0, 1.0)
}

/// Terminal stand-in for the scale transform.
pub fn glyph_for_scale(scale: f64) -> &'static str {
    if scale < 1.0 {
        "•"
    } else {
        "●"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE_FROM: (u8, u8, u8) = (147, 197, 253);
    const BLUE_TO: (u8, u8, u8) = (59, 130, 246);

    #[test]
    fn test_keyframes() {
        let pulse = PulseAnimation::new(BLUE_FROM, BLUE_TO);
        let start = pulse.sample(Duration::ZERO);
        assert!((start.scale - 0.9).abs() < 1e-9);
        assert_eq!(start.color, Color::Rgb(147, 197, 253));

        let mid = pulse.sample(Duration::from_secs(1));
        assert!((mid.scale - 1.2).abs() < 1e-9);
        assert_eq!(mid.color, Color::Rgb(59, 130, 246));
    }

    #[test]
    fn test_loops_every_two_seconds() {
        let pulse = PulseAnimation::new(BLUE_FROM, BLUE_TO);
        for ms in [0u64, 250, 700, 1300, 1999] {
            let a = pulse.sample(Duration::from_millis(ms));
            let b = pulse.sample(Duration::from_millis(ms + 2000 * 7));
            assert!((a.scale - b.scale).abs() < 1e-6, "ms = {ms}");
        }
    }

    #[test]
    fn test_symmetric_halves() {
        let pulse = PulseAnimation::new(BLUE_FROM, BLUE_TO);
        let up = pulse.sample(Duration::from_millis(400));
        let down = pulse.sample(Duration::from_millis(1600));
        assert!((up.scale - down.scale).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_out_shape() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-4);
        // slow start, slow finish
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease_in_out(i as f64 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_glyph_for_scale() {
        assert_eq!(glyph_for_scale(PULSE_SCALE_MIN), "•");
        assert_eq!(glyph_for_scale(PULSE_SCALE_MAX), "●");
    }
}
