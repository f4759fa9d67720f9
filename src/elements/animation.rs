// Tab bar animation state
// Selection highlight transitions and the add-button press pulse.
// Only the renderer keeps this state; the selection model stays a plain index.

use ratatui::style::Color;
use std::time::Instant;

use crate::core::Animation;

/// Highlight transition between two selected tabs
#[derive(Debug, Clone, Copy)]
pub struct SelectionTransition {
    pub from: Option<usize>,
    pub to: usize,
    pub started: Instant,
    pub animation: Animation,
}

impl SelectionTransition {
    pub fn new(from: Option<usize>, to: usize, animation: Animation, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            animation,
        }
    }

    /// Selected-color weight of the tab at `index`, in [0, 1]
    pub fn highlight(&self, index: usize, now: Instant) -> f32 {
        let progress = self.animation.progress(now.saturating_duration_since(self.started));
        if index == self.to {
            progress
        } else if self.from == Some(index) {
            1.0 - progress
        } else {
            0.0
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.animation
            .is_finished(now.saturating_duration_since(self.started))
    }
}

/// Fading press effect for the add button
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    pub started: Instant,
    pub animation: Animation,
}

impl Pulse {
    pub fn new(animation: Animation, started: Instant) -> Self {
        Self { started, animation }
    }

    /// 1.0 right after the press, fading to 0.0
    pub fn intensity(&self, now: Instant) -> f32 {
        1.0 - self
            .animation
            .progress(now.saturating_duration_since(self.started))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.animation
            .is_finished(now.saturating_duration_since(self.started))
    }
}

/// Approximate RGB value of a terminal color
pub fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::Red => Some((205, 0, 0)),
        Color::Green => Some((0, 205, 0)),
        Color::Yellow => Some((205, 205, 0)),
        Color::Blue => Some((0, 0, 238)),
        Color::Magenta => Some((205, 0, 205)),
        Color::Cyan => Some((0, 205, 205)),
        Color::Gray => Some((229, 229, 229)),
        Color::DarkGray => Some((127, 127, 127)),
        Color::LightRed => Some((255, 0, 0)),
        Color::LightGreen => Some((0, 255, 0)),
        Color::LightYellow => Some((255, 255, 0)),
        Color::LightBlue => Some((92, 92, 255)),
        Color::LightMagenta => Some((255, 0, 255)),
        Color::LightCyan => Some((0, 255, 255)),
        Color::White => Some((255, 255, 255)),
        _ => None,
    }
}

/// Interpolate between two colors; colors without an RGB value snap halfway
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    match (to_rgb(from), to_rgb(to)) {
        (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}
