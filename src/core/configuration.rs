// Tab Bar Configuration
// Visual and behavioral parameters of the floating tab bar, each with a default
//
// Dimensions are logical points. The renderer maps them onto terminal cells
// (see `elements::layout::CellMetrics`).

use ratatui::style::Color;
use std::time::Duration;

use super::error::TabBarError;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           Animation                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Default animation duration (matches the platform ease-in-out default)
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(350);

/// Timing curve of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCurve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Jump straight to the end state
    None,
}

impl AnimationCurve {
    /// Parse a curve name ("linear", "ease_in", "ease-out", "easeInOut", "none")
    pub fn parse(name: &str) -> Result<Self, TabBarError> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "linear" => Ok(AnimationCurve::Linear),
            "easein" => Ok(AnimationCurve::EaseIn),
            "easeout" => Ok(AnimationCurve::EaseOut),
            "easeinout" | "ease" => Ok(AnimationCurve::EaseInOut),
            "none" | "off" => Ok(AnimationCurve::None),
            _ => Err(TabBarError::UnknownCurve(name.to_string())),
        }
    }

    /// Apply the curve to a linear fraction in [0, 1]
    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            AnimationCurve::Linear => t,
            AnimationCurve::EaseIn => t * t,
            AnimationCurve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            AnimationCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            AnimationCurve::None => 1.0,
        }
    }
}

/// Animation descriptor used by the renderer for selection and add-button effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub curve: AnimationCurve,
    pub duration: Duration,
}

impl Animation {
    pub const fn new(curve: AnimationCurve, duration: Duration) -> Self {
        Self { curve, duration }
    }

    pub const fn ease_in_out() -> Self {
        Self::new(AnimationCurve::EaseInOut, DEFAULT_ANIMATION_DURATION)
    }

    pub const fn none() -> Self {
        Self::new(AnimationCurve::None, Duration::ZERO)
    }

    /// Eased progress after `elapsed`, in [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.curve == AnimationCurve::None || self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.curve.ease(t)
    }

    /// Whether an animation started `elapsed` ago has finished
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.curve == AnimationCurve::None || elapsed >= self.duration
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::ease_in_out()
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Configuration                                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Configuration options for the floating tab bar
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarConfiguration {
    pub height: f32,
    pub corner_radius: f32,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub selected_color: Color,
    pub unselected_color: Color,
    pub notification_color: Color,
    pub icon_size: f32,
    pub label_size: f32,
    pub show_labels: bool,
    pub horizontal_padding: f32,
    pub selection_animation: Animation,
    pub add_button_color: Color,
    pub add_button_size: f32,
    pub add_button_icon: String,
    pub add_button_icon_size: f32,
    pub add_button_icon_color: Color,
    pub add_button_animation: Animation,
}

impl Default for TabBarConfiguration {
    fn default() -> Self {
        Self {
            height: 64.0,
            corner_radius: 64.0,
            background_color: Color::White,
            border_color: Color::Gray,
            border_width: 1.0,
            selected_color: Color::Blue,
            unselected_color: Color::DarkGray,
            notification_color: Color::Red,
            icon_size: 24.0,
            label_size: 12.0,
            show_labels: false,
            horizontal_padding: 16.0,
            selection_animation: Animation::ease_in_out(),
            add_button_color: Color::Blue,
            add_button_size: 50.0,
            add_button_icon: "plus".to_string(),
            add_button_icon_size: 22.0,
            add_button_icon_color: Color::White,
            add_button_animation: Animation::ease_in_out(),
        }
    }
}

impl TabBarConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    pub fn with_unselected_color(mut self, color: Color) -> Self {
        self.unselected_color = color;
        self
    }

    pub fn with_notification_color(mut self, color: Color) -> Self {
        self.notification_color = color;
        self
    }

    pub fn with_icon_size(mut self, icon_size: f32) -> Self {
        self.icon_size = icon_size;
        self
    }

    pub fn with_label_size(mut self, label_size: f32) -> Self {
        self.label_size = label_size;
        self
    }

    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    pub fn with_horizontal_padding(mut self, padding: f32) -> Self {
        self.horizontal_padding = padding;
        self
    }

    pub fn with_selection_animation(mut self, animation: Animation) -> Self {
        self.selection_animation = animation;
        self
    }

    pub fn with_add_button_color(mut self, color: Color) -> Self {
        self.add_button_color = color;
        self
    }

    pub fn with_add_button_size(mut self, size: f32) -> Self {
        self.add_button_size = size;
        self
    }

    pub fn with_add_button_icon(mut self, icon: impl Into<String>) -> Self {
        self.add_button_icon = icon.into();
        self
    }

    pub fn with_add_button_icon_size(mut self, size: f32) -> Self {
        self.add_button_icon_size = size;
        self
    }

    pub fn with_add_button_icon_color(mut self, color: Color) -> Self {
        self.add_button_icon_color = color;
        self
    }

    pub fn with_add_button_animation(mut self, animation: Animation) -> Self {
        self.add_button_animation = animation;
        self
    }

    /// All numeric fields paired with their names
    fn dimensions(&self) -> [(&'static str, f32); 8] {
        [
            ("height", self.height),
            ("corner_radius", self.corner_radius),
            ("border_width", self.border_width),
            ("icon_size", self.icon_size),
            ("label_size", self.label_size),
            ("horizontal_padding", self.horizontal_padding),
            ("add_button_size", self.add_button_size),
            ("add_button_icon_size", self.add_button_icon_size),
        ]
    }

    /// Reject negative or non-finite dimensions
    pub fn validate(&self) -> Result<(), TabBarError> {
        for (field, value) in self.dimensions() {
            if !value.is_finite() || value < 0.0 {
                return Err(TabBarError::InvalidDimension { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = TabBarConfiguration::default();

        assert_eq!(config.height, 64.0);
        assert_eq!(config.corner_radius, 64.0);
        assert_eq!(config.background_color, Color::White);
        assert_eq!(config.border_color, Color::Gray);
        assert_eq!(config.border_width, 1.0);
        assert_eq!(config.selected_color, Color::Blue);
        assert_eq!(config.unselected_color, Color::DarkGray);
        assert_eq!(config.notification_color, Color::Red);
        assert_eq!(config.icon_size, 24.0);
        assert_eq!(config.label_size, 12.0);
        assert!(!config.show_labels);
        assert_eq!(config.horizontal_padding, 16.0);
        assert_eq!(config.selection_animation, Animation::ease_in_out());
        assert_eq!(config.add_button_color, Color::Blue);
        assert_eq!(config.add_button_size, 50.0);
        assert_eq!(config.add_button_icon, "plus");
        assert_eq!(config.add_button_icon_size, 22.0);
        assert_eq!(config.add_button_animation, Animation::ease_in_out());
    }

    #[test]
    fn test_custom_values() {
        let config = TabBarConfiguration::new()
            .with_height(80.0)
            .with_corner_radius(40.0)
            .with_background_color(Color::Black)
            .with_selected_color(Color::Red)
            .with_add_button_color(Color::Green)
            .with_add_button_size(60.0)
            .with_add_button_icon("star");

        assert_eq!(config.height, 80.0);
        assert_eq!(config.corner_radius, 40.0);
        assert_eq!(config.background_color, Color::Black);
        assert_eq!(config.selected_color, Color::Red);
        assert_eq!(config.add_button_color, Color::Green);
        assert_eq!(config.add_button_size, 60.0);
        assert_eq!(config.add_button_icon, "star");
        // Untouched fields keep their defaults
        assert_eq!(config.border_width, 1.0);
    }

    #[test]
    fn test_validate_accepts_defaults_and_zero() {
        assert!(TabBarConfiguration::default().validate().is_ok());
        assert!(TabBarConfiguration::default()
            .with_border_width(0.0)
            .with_horizontal_padding(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let err = TabBarConfiguration::default()
            .with_height(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TabBarError::InvalidDimension { field: "height", .. }));

        let err = TabBarConfiguration::default()
            .with_add_button_size(f32::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, TabBarError::InvalidDimension { field: "add_button_size", .. }));
    }

    #[test]
    fn test_curve_parsing() {
        assert_eq!(AnimationCurve::parse("ease_in_out").unwrap(), AnimationCurve::EaseInOut);
        assert_eq!(AnimationCurve::parse("easeInOut").unwrap(), AnimationCurve::EaseInOut);
        assert_eq!(AnimationCurve::parse("ease-out").unwrap(), AnimationCurve::EaseOut);
        assert_eq!(AnimationCurve::parse("Linear").unwrap(), AnimationCurve::Linear);
        assert!(matches!(
            AnimationCurve::parse("bounce"),
            Err(TabBarError::UnknownCurve(name)) if name == "bounce"
        ));
    }

    #[test]
    fn test_animation_progress() {
        let animation = Animation::new(AnimationCurve::Linear, Duration::from_millis(200));
        assert_eq!(animation.progress(Duration::ZERO), 0.0);
        assert!((animation.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-6);
        assert_eq!(animation.progress(Duration::from_millis(400)), 1.0);
        assert!(animation.is_finished(Duration::from_millis(200)));

        let ease = Animation::ease_in_out();
        assert!((ease.progress(DEFAULT_ANIMATION_DURATION / 2) - 0.5).abs() < 1e-3);
        assert!(ease.progress(DEFAULT_ANIMATION_DURATION / 4) < 0.25);

        assert_eq!(Animation::none().progress(Duration::ZERO), 1.0);
        assert!(Animation::none().is_finished(Duration::ZERO));
    }
}
