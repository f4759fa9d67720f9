// Tab Bar Manager
// Provides YAML configuration helpers and an OOP-style floating tab bar wrapper

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::{
    Animation, AnimationCurve, SelectionBinding, TabBarConfiguration, TabBarError, TabDescriptor,
    TabSelectionModel,
};
use crate::elements::{required_height, CellMetrics, FloatingTabBar, FloatingTabBarState, HitTarget};
use crate::utilities::{parse_color, DimmingContext, IconSet};

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Animation configuration from YAML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimationConfigYaml {
    /// Curve name: "linear", "ease_in", "ease_out", "ease_in_out", "none"
    pub curve: Option<String>,
    pub duration_ms: Option<u64>,
}

/// Tab bar configuration from YAML
///
/// Every field is optional; missing fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabBarConfigYaml {
    pub height: Option<f32>,
    pub corner_radius: Option<f32>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<f32>,
    pub selected_color: Option<String>,
    pub unselected_color: Option<String>,
    pub notification_color: Option<String>,
    pub icon_size: Option<f32>,
    pub label_size: Option<f32>,
    pub show_labels: Option<bool>,
    pub horizontal_padding: Option<f32>,
    pub selection_animation: Option<AnimationConfigYaml>,
    pub add_button_color: Option<String>,
    pub add_button_size: Option<f32>,
    pub add_button_icon: Option<String>,
    pub add_button_icon_size: Option<f32>,
    pub add_button_icon_color: Option<String>,
    pub add_button_animation: Option<AnimationConfigYaml>,
    /// Tabs in display order
    #[serde(default)]
    pub tabs: Vec<TabDescriptor>,
    /// Extra icon glyphs (identifier -> glyph)
    #[serde(default)]
    pub icons: HashMap<String, String>,
    /// Initially selected tab (defaults to 0)
    pub selected: Option<usize>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn convert_animation(base: Animation, config: Option<&AnimationConfigYaml>) -> Result<Animation, TabBarError> {
    let Some(config) = config else {
        return Ok(base);
    };
    let curve = match config.curve.as_deref() {
        Some(name) => AnimationCurve::parse(name)?,
        None => base.curve,
    };
    let duration = config
        .duration_ms
        .map(Duration::from_millis)
        .unwrap_or(base.duration);
    Ok(Animation::new(curve, duration))
}

fn merge_color(
    target: &mut ratatui::style::Color,
    field: &'static str,
    value: &Option<String>,
) -> Result<(), TabBarError> {
    if let Some(value) = value {
        *target = parse_color(field, value)?;
    }
    Ok(())
}

impl TabBarConfiguration {
    /// Apply the fields present in `overrides` on top of this configuration
    pub fn merge(mut self, overrides: &TabBarConfigYaml) -> Result<Self, TabBarError> {
        let dimensions = [
            (&mut self.height, overrides.height),
            (&mut self.corner_radius, overrides.corner_radius),
            (&mut self.border_width, overrides.border_width),
            (&mut self.icon_size, overrides.icon_size),
            (&mut self.label_size, overrides.label_size),
            (&mut self.horizontal_padding, overrides.horizontal_padding),
            (&mut self.add_button_size, overrides.add_button_size),
            (&mut self.add_button_icon_size, overrides.add_button_icon_size),
        ];
        for (target, value) in dimensions {
            if let Some(value) = value {
                *target = value;
            }
        }

        merge_color(&mut self.background_color, "background_color", &overrides.background_color)?;
        merge_color(&mut self.border_color, "border_color", &overrides.border_color)?;
        merge_color(&mut self.selected_color, "selected_color", &overrides.selected_color)?;
        merge_color(&mut self.unselected_color, "unselected_color", &overrides.unselected_color)?;
        merge_color(&mut self.notification_color, "notification_color", &overrides.notification_color)?;
        merge_color(&mut self.add_button_color, "add_button_color", &overrides.add_button_color)?;
        merge_color(
            &mut self.add_button_icon_color,
            "add_button_icon_color",
            &overrides.add_button_icon_color,
        )?;

        if let Some(show_labels) = overrides.show_labels {
            self.show_labels = show_labels;
        }
        if let Some(icon) = &overrides.add_button_icon {
            self.add_button_icon = icon.clone();
        }
        self.selection_animation =
            convert_animation(self.selection_animation, overrides.selection_animation.as_ref())?;
        self.add_button_animation =
            convert_animation(self.add_button_animation, overrides.add_button_animation.as_ref())?;

        Ok(self)
    }
}

/// Convert YAML tab bar configuration into a validated configuration
pub fn convert_tab_bar_config(config: &TabBarConfigYaml) -> Result<TabBarConfiguration, TabBarError> {
    let converted = TabBarConfiguration::default().merge(config)?;
    converted.validate()?;
    Ok(converted)
}

/// Parse a tab bar configuration from a YAML string
pub fn parse_tab_bar_config(contents: &str) -> Result<TabBarConfigYaml, TabBarError> {
    Ok(serde_yaml::from_str(contents)?)
}

/// Read and parse a tab bar configuration file
pub fn load_tab_bar_config(path: &Path) -> Result<TabBarConfigYaml, TabBarError> {
    let contents = fs::read_to_string(path)?;
    parse_tab_bar_config(&contents)
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                          Tab Bar Manager - OOP Style Tab Bar Operations                        │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Owns the tabs, configuration, icons, and widget state of one floating tab bar.
/// The selected index stays with the host and is passed in as a binding.
pub struct FloatingTabBarManager {
    tabs: Vec<TabDescriptor>,
    config: TabBarConfiguration,
    icons: IconSet,
    metrics: CellMetrics,
    state: FloatingTabBarState,
    initial_selection: usize,
}

impl FloatingTabBarManager {
    pub fn new(tabs: Vec<TabDescriptor>, config: TabBarConfiguration) -> Self {
        Self {
            tabs,
            config,
            icons: IconSet::default(),
            metrics: CellMetrics::default(),
            state: FloatingTabBarState::new(),
            initial_selection: 0,
        }
    }

    /// Create a tab bar from YAML configuration
    pub fn create(config: &TabBarConfigYaml) -> Result<Self, TabBarError> {
        let tab_bar_config = convert_tab_bar_config(config)?;
        let mut manager = Self::new(config.tabs.clone(), tab_bar_config);
        manager.icons.extend(config.icons.clone());

        if let Some(selected) = config.selected {
            if selected < manager.tabs.len() {
                manager.initial_selection = selected;
            } else {
                warn!(
                    selected,
                    tabs = manager.tabs.len(),
                    "configured selection is out of range, starting on the first tab"
                );
            }
        }
        debug!(tabs = manager.tabs.len(), "floating tab bar created");
        Ok(manager)
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn config(&self) -> &TabBarConfiguration {
        &self.config
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Selection the host should start with
    pub fn initial_selection(&self) -> usize {
        self.initial_selection
    }

    pub fn state(&self) -> &FloatingTabBarState {
        &self.state
    }

    /// Rows to reserve at the bottom of the screen
    pub fn required_height(&self, has_action: bool) -> u16 {
        required_height(&self.config, &self.metrics, has_action)
    }

    /// Render the bar into `buf`, remembering its layout for click detection
    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        selected: usize,
        has_action: bool,
        dimming: DimmingContext,
    ) {
        let widget = FloatingTabBar::new(&self.tabs, &self.config)
            .selected(selected)
            .with_action(has_action)
            .icons(&self.icons)
            .metrics(self.metrics)
            .dimming(dimming);
        widget.render(area, buf, &mut self.state);
    }

    /// Route a click to the bar
    pub fn handle_click<B: SelectionBinding + ?Sized>(
        &mut self,
        x: u16,
        y: u16,
        binding: &mut B,
        on_add: Option<&mut dyn FnMut()>,
    ) -> Option<HitTarget> {
        self.state.handle_click(x, y, self.tabs.len(), binding, on_add)
    }

    /// Navigate to the next tab
    pub fn navigate_next<B: SelectionBinding + ?Sized>(&self, binding: &mut B) -> Option<usize> {
        TabSelectionModel::new(binding, self.tabs.len()).select_next()
    }

    /// Navigate to the previous tab
    pub fn navigate_previous<B: SelectionBinding + ?Sized>(&self, binding: &mut B) -> Option<usize> {
        TabSelectionModel::new(binding, self.tabs.len()).select_previous()
    }

    /// Set the active tab by index
    pub fn set_active<B: SelectionBinding + ?Sized>(&self, binding: &mut B, index: usize) -> Result<(), TabBarError> {
        TabSelectionModel::new(binding, self.tabs.len()).select(index)
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating(std::time::Instant::now())
    }
}
