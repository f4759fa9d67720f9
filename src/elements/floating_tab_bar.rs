// Floating Tab Bar Component
// A rounded bar anchored to the bottom of its area, with the tab buttons split
// around an optional centered add button that floats above the bar.
//
// Usage:
//   let bar = FloatingTabBar::new(&tabs, &config).selected(selected).with_action(true);
//   frame.render_stateful_widget(bar, area, &mut bar_state);
//   // Later, on a mouse click...
//   bar_state.handle_click(col, row, tabs.len(), &mut selected, Some(&mut on_add));

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, StatefulWidget, Widget},
};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::{debug, warn};

use super::animation::{blend, Pulse, SelectionTransition};
use super::layout::{compute_layout, required_height, CellMetrics, HitTarget, TabBarLayout, TabBounds};
use crate::core::{partition, Animation, SelectionBinding, TabBarConfiguration, TabDescriptor, TabSelectionModel};
use crate::utilities::{DimmingContext, IconSet};

const NOTIFICATION_DOT: &str = "●";

fn default_icons() -> &'static IconSet {
    static ICONS: OnceLock<IconSet> = OnceLock::new();
    ICONS.get_or_init(IconSet::default)
}

/// Floating tab bar widget
pub struct FloatingTabBar<'a> {
    tabs: &'a [TabDescriptor],
    config: &'a TabBarConfiguration,
    selected: usize,
    has_action: bool,
    icons: Option<&'a IconSet>,
    dimming: DimmingContext,
    metrics: CellMetrics,
}

impl<'a> FloatingTabBar<'a> {
    pub fn new(tabs: &'a [TabDescriptor], config: &'a TabBarConfiguration) -> Self {
        Self {
            tabs,
            config,
            selected: 0,
            has_action: false,
            icons: None,
            dimming: DimmingContext::default(),
            metrics: CellMetrics::default(),
        }
    }

    /// Current selection as read from the host's binding
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Reserve the center gap and draw the add button
    pub fn with_action(mut self, has_action: bool) -> Self {
        self.has_action = has_action;
        self
    }

    pub fn icons(mut self, icons: &'a IconSet) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn dimming(mut self, dimming: DimmingContext) -> Self {
        self.dimming = dimming;
        self
    }

    pub fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Rows needed below the content to fit the bar and the lifted add button
    pub fn required_height(&self) -> u16 {
        required_height(self.config, &self.metrics, self.has_action)
    }

    fn icon_set(&self) -> &IconSet {
        self.icons.unwrap_or_else(|| default_icons())
    }

    fn border_type(&self) -> BorderType {
        if self.config.border_width >= 2.0 {
            BorderType::Thick
        } else if self.config.corner_radius > 0.0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    fn background(&self) -> ratatui::style::Color {
        self.dimming.dim_background(self.config.background_color)
    }

    /// Render using an explicit clock (animation frames depend on `now`)
    pub fn render_at(self, area: Rect, buf: &mut Buffer, state: &mut FloatingTabBarState, now: Instant) {
        let area = area.intersection(buf.area);
        let split = partition(self.tabs, self.has_action);
        let layout = compute_layout(area, &split, self.config, &self.metrics);
        state.sync(self.selected, self.config, now);

        if layout.bar.width == 0 || layout.bar.height == 0 {
            state.layout = layout;
            return;
        }

        self.render_bar(&layout, buf);

        for placed in split.iter() {
            if let Some(button) = layout.button(placed.index) {
                let weight = state.highlight(placed.index, self.selected, now);
                self.render_button(placed.descriptor, button.bounds, weight, &layout, buf);
            }
        }

        if let Some(bounds) = layout.add_button {
            let intensity = state.pulse.map(|p| p.intensity(now)).unwrap_or(0.0);
            self.render_add_button(bounds, intensity, buf);
        }

        state.layout = layout;
    }

    fn render_bar(&self, layout: &TabBarLayout, buf: &mut Buffer) {
        let fill = Style::default().bg(self.background());
        Clear.render(layout.bar, buf);

        let block = if self.config.border_width > 0.0 {
            Block::default()
                .borders(Borders::ALL)
                .border_type(self.border_type())
                .border_style(Style::default().fg(self.dimming.dim_color(self.config.border_color)))
        } else {
            Block::default()
        };
        block.style(fill).render(layout.bar, buf);
    }

    fn render_button(
        &self,
        tab: &TabDescriptor,
        bounds: TabBounds,
        weight: f32,
        layout: &TabBarLayout,
        buf: &mut Buffer,
    ) {
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }

        let color = blend(self.config.unselected_color, self.config.selected_color, weight);
        let mut style = self
            .dimming
            .dim_style(Style::default().fg(color))
            .bg(self.background());
        if weight >= 0.5 {
            style = style.add_modifier(Modifier::BOLD);
        }

        let show_label = self.config.show_labels && bounds.height >= 2;
        let stack_height = if show_label { 2 } else { 1 };
        let icon_y = bounds.y + (bounds.height - stack_height) / 2;

        let glyph = self.icon_set().resolve(&tab.icon, &tab.title);
        let glyph_width = (Span::raw(glyph.as_str()).width() as u16).min(bounds.width);
        let icon_x = bounds.x + (bounds.width - glyph_width) / 2;
        buf.set_stringn(icon_x, icon_y, &glyph, bounds.width as usize, style);

        if show_label {
            let label_width = (Span::raw(tab.title.as_str()).width() as u16).min(bounds.width);
            let label_x = bounds.x + (bounds.width - label_width) / 2;
            buf.set_stringn(label_x, icon_y + 1, &tab.title, label_width as usize, style);
        }

        if tab.has_notification {
            // Badge sits just right of the icon, one row up
            let dot_x = icon_x + glyph_width;
            let dot_y = icon_y.saturating_sub(1);
            if dot_y >= layout.bar.y && dot_x < layout.bar.right() {
                let dot_style = self
                    .dimming
                    .dim_style(Style::default().fg(self.config.notification_color))
                    .bg(self.background());
                buf.set_string(dot_x, dot_y, NOTIFICATION_DOT, dot_style);
            }
        }
    }

    fn render_add_button(&self, bounds: TabBounds, intensity: f32, buf: &mut Buffer) {
        let area = bounds.area().intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let base = self.config.add_button_color;
        let fill_color = blend(base, self.config.add_button_icon_color, intensity * 0.5);
        let fill = Style::default().bg(self.dimming.dim_background(fill_color));

        Clear.render(area, buf);
        let inner = if area.width >= 3 && area.height >= 3 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.dimming.dim_color(base)));
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        buf.set_style(inner, fill);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let glyph = self.icon_set().resolve(&self.config.add_button_icon, "+");
        let glyph_width = (Span::raw(glyph.as_str()).width() as u16).min(inner.width);
        let icon_style = fill
            .fg(self.dimming.dim_color(self.config.add_button_icon_color))
            .add_modifier(Modifier::BOLD);
        buf.set_stringn(
            inner.x + (inner.width - glyph_width) / 2,
            inner.y + (inner.height - 1) / 2,
            &glyph,
            inner.width as usize,
            icon_style,
        );
    }
}

impl StatefulWidget for FloatingTabBar<'_> {
    type State = FloatingTabBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.render_at(area, buf, state, Instant::now());
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                     Widget state and taps                                      │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Render-side state: last layout (for click detection) and running animations
#[derive(Debug, Default)]
pub struct FloatingTabBarState {
    layout: TabBarLayout,
    transition: Option<SelectionTransition>,
    pulse: Option<Pulse>,
    last_selected: Option<usize>,
    selection_animation: Animation,
    add_button_animation: Animation,
}

impl FloatingTabBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout from the most recent render
    pub fn layout(&self) -> &TabBarLayout {
        &self.layout
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.layout.hit_test(x, y)
    }

    /// Whether another frame is needed to finish an animation
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
            || self.pulse.is_some_and(|p| !p.is_finished(now))
    }

    /// Handle a click at (x, y) against the last rendered layout
    ///
    /// A tab hit writes the new index through `binding` and starts the
    /// selection animation. An add-button hit starts the press pulse and
    /// invokes `on_add`.
    pub fn handle_click<B: SelectionBinding + ?Sized>(
        &mut self,
        x: u16,
        y: u16,
        tab_count: usize,
        binding: &mut B,
        on_add: Option<&mut dyn FnMut()>,
    ) -> Option<HitTarget> {
        self.handle_click_at(x, y, tab_count, binding, on_add, Instant::now())
    }

    pub fn handle_click_at<B: SelectionBinding + ?Sized>(
        &mut self,
        x: u16,
        y: u16,
        tab_count: usize,
        binding: &mut B,
        on_add: Option<&mut dyn FnMut()>,
        now: Instant,
    ) -> Option<HitTarget> {
        let hit = self.layout.hit_test(x, y)?;
        match hit {
            HitTarget::Tab(index) => {
                let previous = binding.selected();
                let mut model = TabSelectionModel::new(binding, tab_count);
                if let Err(e) = model.select(index) {
                    warn!("ignoring click on stale layout: {}", e);
                    return None;
                }
                if model.selected() != previous {
                    self.transition = Some(SelectionTransition::new(
                        Some(previous),
                        index,
                        self.selection_animation,
                        now,
                    ));
                }
            }
            HitTarget::AddButton => {
                debug!("add button tapped");
                self.pulse = Some(Pulse::new(self.add_button_animation, now));
                if let Some(on_add) = on_add {
                    on_add();
                }
            }
        }
        Some(hit)
    }

    /// Reconcile with the selection the host passed to this render
    fn sync(&mut self, selected: usize, config: &TabBarConfiguration, now: Instant) {
        self.selection_animation = config.selection_animation;
        self.add_button_animation = config.add_button_animation;

        if let Some(previous) = self.last_selected {
            let tracked = self.transition.is_some_and(|t| t.to == selected);
            if previous != selected && !tracked {
                // Selection changed outside of a click (keyboard, host code)
                self.transition = Some(SelectionTransition::new(
                    Some(previous),
                    selected,
                    config.selection_animation,
                    now,
                ));
            }
        }
        self.last_selected = Some(selected);

        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
        if self.pulse.is_some_and(|p| p.is_finished(now)) {
            self.pulse = None;
        }
    }

    fn highlight(&self, index: usize, selected: usize, now: Instant) -> f32 {
        match self.transition {
            Some(transition) if transition.to == selected => transition.highlight(index, now),
            _ => {
                if index == selected {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnimationCurve, Constant};
    use ratatui::style::Color;
    use std::time::Duration;

    fn sample_tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("house.fill", "Home"),
            TabDescriptor::new("safari", "Explore").with_notification(true),
            TabDescriptor::new("chart.bar", "Activity"),
            TabDescriptor::new("person", "Profile"),
        ]
    }

    fn area() -> Rect {
        Rect::new(0, 0, 60, 10)
    }

    fn instant_config() -> TabBarConfiguration {
        TabBarConfiguration::default()
            .with_selection_animation(Animation::none())
            .with_add_button_animation(Animation::none())
    }

    fn render(
        tabs: &[TabDescriptor],
        config: &TabBarConfiguration,
        selected: usize,
        has_action: bool,
        state: &mut FloatingTabBarState,
    ) -> Buffer {
        let mut buf = Buffer::empty(area());
        FloatingTabBar::new(tabs, config)
            .selected(selected)
            .with_action(has_action)
            .render_at(area(), &mut buf, state, Instant::now());
        buf
    }

    #[test]
    fn test_renders_rounded_bar_at_bottom() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let buf = render(&tabs, &config, 0, false, &mut state);

        assert_eq!(buf[(0, 6)].symbol(), "╭");
        assert_eq!(buf[(59, 9)].symbol(), "╯");
        assert_eq!(buf[(0, 6)].fg, Color::Gray);
        assert_eq!(buf[(10, 8)].bg, Color::White);
        // Rows above the bar stay untouched
        assert_eq!(buf[(0, 5)].symbol(), " ");
    }

    #[test]
    fn test_selected_icon_uses_selected_color() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let buf = render(&tabs, &config, 0, true, &mut state);

        // Button 0 spans x=3..15 on row 7
        assert_eq!(buf[(8, 7)].symbol(), "⌂");
        assert_eq!(buf[(8, 7)].fg, Color::Blue);
        assert!(buf[(8, 7)].modifier.contains(Modifier::BOLD));

        // Button 2 spans x=34..46
        assert_eq!(buf[(39, 7)].symbol(), "▥");
        assert_eq!(buf[(39, 7)].fg, Color::DarkGray);
    }

    #[test]
    fn test_notification_dot_above_icon() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let buf = render(&tabs, &config, 0, true, &mut state);

        // Explore icon at x=20, dot one column right on the top border row
        assert_eq!(buf[(20, 7)].symbol(), "◎");
        assert_eq!(buf[(21, 6)].symbol(), NOTIFICATION_DOT);
        assert_eq!(buf[(21, 6)].fg, Color::Red);
    }

    #[test]
    fn test_add_button_floats_above_bar() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let buf = render(&tabs, &config, 0, true, &mut state);

        assert_eq!(buf[(26, 5)].symbol(), "╭");
        assert_eq!(buf[(26, 5)].fg, Color::Blue);
        assert_eq!(buf[(29, 6)].symbol(), "+");
        assert_eq!(buf[(29, 6)].fg, Color::White);
        assert_eq!(buf[(29, 6)].bg, Color::Blue);
    }

    #[test]
    fn test_labels_render_below_icons() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default().with_show_labels(true);
        let mut state = FloatingTabBarState::new();
        let buf = render(&tabs, &config, 0, true, &mut state);

        assert_eq!(buf[(8, 7)].symbol(), "⌂");
        // "Home" centered in a 12-wide button starting at x=3
        assert_eq!(buf[(7, 8)].symbol(), "H");
        assert_eq!(buf[(10, 8)].symbol(), "e");
    }

    #[test]
    fn test_borderless_square_bar() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default()
            .with_border_width(0.0)
            .with_corner_radius(0.0);
        let mut state = FloatingTabBarState::new();
        let buf = render(&tabs, &config, 0, false, &mut state);

        assert_eq!(buf[(0, 6)].symbol(), " ");
        assert_eq!(buf[(0, 6)].bg, Color::White);
    }

    #[test]
    fn test_click_selects_tab_and_writes_binding() {
        let tabs = sample_tabs();
        let config = instant_config();
        let mut state = FloatingTabBarState::new();
        let mut selected = 0usize;
        render(&tabs, &config, selected, true, &mut state);

        let hit = state.handle_click(40, 7, tabs.len(), &mut selected, None);
        assert_eq!(hit, Some(HitTarget::Tab(2)));
        assert_eq!(selected, 2);

        let buf = render(&tabs, &config, selected, true, &mut state);
        assert_eq!(buf[(39, 7)].fg, Color::Blue);
        assert_eq!(buf[(8, 7)].fg, Color::DarkGray);
    }

    #[test]
    fn test_click_on_add_button_invokes_callback() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let mut selected = 1usize;
        render(&tabs, &config, selected, true, &mut state);

        let mut taps = 0;
        let mut on_add = || taps += 1;
        let hit = state.handle_click(29, 5, tabs.len(), &mut selected, Some(&mut on_add));

        assert_eq!(hit, Some(HitTarget::AddButton));
        assert_eq!(taps, 1);
        assert_eq!(selected, 1);
        assert!(state.is_animating(Instant::now()));
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let mut selected = 1usize;
        render(&tabs, &config, selected, true, &mut state);

        assert_eq!(state.handle_click(5, 2, tabs.len(), &mut selected, None), None);
        assert_eq!(selected, 1);
    }

    #[test]
    fn test_stale_layout_click_is_ignored() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let mut selected = 0usize;
        render(&tabs, &config, selected, true, &mut state);

        // The host shrank its tab list after the last render
        assert_eq!(state.handle_click(56, 8, 2, &mut selected, None), None);
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_constant_binding_does_not_animate() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let mut binding = Constant(0);
        render(&tabs, &config, 0, false, &mut state);

        let hit = state.handle_click(40, 7, tabs.len(), &mut binding, None);
        assert!(hit.is_some());
        assert!(!state.is_animating(Instant::now()));
    }

    #[test]
    fn test_selection_transition_blends_colors() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default().with_selection_animation(Animation::new(
            AnimationCurve::Linear,
            Duration::from_millis(100),
        ));
        let mut state = FloatingTabBarState::new();
        let start = Instant::now();

        let mut buf = Buffer::empty(area());
        FloatingTabBar::new(&tabs, &config)
            .selected(0)
            .render_at(area(), &mut buf, &mut state, start);

        // Selection moves to tab 2 from outside (keyboard)
        let mut buf = Buffer::empty(area());
        FloatingTabBar::new(&tabs, &config)
            .selected(2)
            .render_at(area(), &mut buf, &mut state, start);
        assert_eq!(buf[(39, 7)].fg, Color::DarkGray);

        let mid = start + Duration::from_millis(50);
        let mut buf = Buffer::empty(area());
        FloatingTabBar::new(&tabs, &config)
            .selected(2)
            .render_at(area(), &mut buf, &mut state, mid);
        assert!(matches!(buf[(39, 7)].fg, Color::Rgb(..)));
        assert!(matches!(buf[(8, 7)].fg, Color::Rgb(..)));
        assert!(state.is_animating(mid));

        let end = start + Duration::from_millis(200);
        let mut buf = Buffer::empty(area());
        FloatingTabBar::new(&tabs, &config)
            .selected(2)
            .render_at(area(), &mut buf, &mut state, end);
        assert_eq!(buf[(39, 7)].fg, Color::Blue);
        assert!(!state.is_animating(end));
    }

    #[test]
    fn test_empty_tabs_render_without_panic() {
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let buf = render(&[], &config, 0, true, &mut state);

        assert_eq!(buf[(29, 6)].symbol(), "+");
        assert!(state.layout().buttons.is_empty());
    }

    #[test]
    fn test_dimming_greys_out_selection() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let mut buf = Buffer::empty(area());
        FloatingTabBar::new(&tabs, &config)
            .dimming(DimmingContext::new(true))
            .render_at(area(), &mut buf, &mut state, Instant::now());

        assert_eq!(buf[(8, 7)].fg, crate::utilities::hex_color(0x444444));
    }

    #[test]
    fn test_large_add_button_on_short_bar_stays_in_buffer() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default()
            .with_height(16.0)
            .with_add_button_size(200.0);
        let area = Rect::new(0, 0, 60, 20);
        let mut state = FloatingTabBarState::new();
        let mut buf = Buffer::empty(area);
        FloatingTabBar::new(&tabs, &config)
            .with_action(true)
            .render_at(area, &mut buf, &mut state, Instant::now());

        let add = state.layout().add_button.unwrap();
        assert_eq!(add, TabBounds { x: 17, y: 7, width: 25, height: 13 });
        assert_eq!(buf[(17, 19)].symbol(), "╰");
        assert_eq!(buf[(29, 13)].symbol(), "+");
        assert_eq!(state.hit_test(29, 19), Some(HitTarget::AddButton));
    }

    #[test]
    fn test_area_larger_than_buffer_is_clipped() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        let mut state = FloatingTabBarState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 8));
        FloatingTabBar::new(&tabs, &config)
            .with_action(true)
            .render_at(area(), &mut buf, &mut state, Instant::now());

        assert_eq!(state.layout().bar, Rect::new(0, 4, 60, 4));
        assert_eq!(buf[(59, 7)].symbol(), "╯");
    }

    #[test]
    fn test_required_height() {
        let tabs = sample_tabs();
        let config = TabBarConfiguration::default();
        assert_eq!(FloatingTabBar::new(&tabs, &config).required_height(), 4);
        assert_eq!(FloatingTabBar::new(&tabs, &config).with_action(true).required_height(), 5);
    }
}
