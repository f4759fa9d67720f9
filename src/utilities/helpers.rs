// Helper utilities for the tab bar and its host
use ratatui::style::{Color, Style};
use std::str::FromStr;

use crate::core::TabBarError;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color token from configuration
///
/// Accepts the basic color names, the `dark_*` names, and anything ratatui
/// understands (`"#rrggbb"`, `"light_blue"`, ANSI indices such as `"208"`).
/// `field` names the configuration key for the error message.
pub fn parse_color(field: &'static str, color: &str) -> Result<Color, TabBarError> {
    let parsed = match color.trim().to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "purple" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Some(Color::Rgb(139, 0, 0)),
        "dark_green" | "darkgreen" => Some(Color::Rgb(0, 100, 0)),
        "dark_yellow" | "darkyellow" => Some(Color::Rgb(184, 134, 11)),
        "dark_blue" | "darkblue" => Some(Color::Rgb(0, 0, 139)),
        "dark_magenta" | "darkmagenta" => Some(Color::Rgb(139, 0, 139)),
        "dark_cyan" | "darkcyan" => Some(Color::Rgb(0, 139, 139)),
        _ => None,
    };

    match parsed {
        Some(color) => Ok(color),
        None => Color::from_str(color.trim()).map_err(|_| TabBarError::InvalidColor {
            field,
            value: color.to_string(),
        }),
    }
}

/// Dimming context - tracks if a modal sheet is visible over the tab bar
#[derive(Debug, Clone, Copy, Default)]
pub struct DimmingContext {
    pub modal_visible: bool,
}

impl DimmingContext {
    pub fn new(modal_visible: bool) -> Self {
        Self { modal_visible }
    }

    /// Apply dimming to a color based on modal state
    pub fn dim_color(&self, color: Color) -> Color {
        if self.modal_visible {
            hex_color(0x444444)
        } else {
            color
        }
    }

    /// Apply dimming to a background color based on modal state
    pub fn dim_background(&self, color: Color) -> Color {
        if self.modal_visible {
            hex_color(0x1A1A1A)
        } else {
            color
        }
    }

    /// Apply dimming to a style based on modal state
    pub fn dim_style(&self, style: Style) -> Style {
        if self.modal_visible {
            style.fg(hex_color(0x444444))
        } else {
            style
        }
    }

    /// Get dimmed border color
    pub fn border_color(&self, is_active: bool) -> Color {
        if self.modal_visible {
            hex_color(0x222222)
        } else if is_active {
            Color::White
        } else {
            hex_color(0x333333)
        }
    }
}
