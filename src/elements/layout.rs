// Floating tab bar layout
// Converts point-based configuration into terminal cells and places the
// bar, the tab buttons, the center gap, and the lifted add button.

use ratatui::layout::Rect;

use crate::core::{Partition, TabBarConfiguration};

/// Size of one terminal cell in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub point_width: f32,
    pub point_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            point_width: 8.0,
            point_height: 16.0,
        }
    }
}

impl CellMetrics {
    /// Points to columns, rounded to nearest
    pub fn cols(&self, points: f32) -> u16 {
        Self::to_cells(points, self.point_width)
    }

    /// Points to rows, rounded to nearest
    pub fn rows(&self, points: f32) -> u16 {
        Self::to_cells(points, self.point_height)
    }

    fn to_cells(points: f32, per_cell: f32) -> u16 {
        if !points.is_finite() || points <= 0.0 || per_cell <= 0.0 {
            return 0;
        }
        (points / per_cell).round().min(u16::MAX as f32) as u16
    }
}

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within these bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }

    pub fn area(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Tab button at this absolute index
    Tab(usize),
    AddButton,
}

/// A tab button placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    /// Absolute index in the tab list
    pub index: usize,
    pub bounds: TabBounds,
}

/// Computed placement of every part of the tab bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabBarLayout {
    pub bar: Rect,
    /// Area inside the border and horizontal padding
    pub content: Rect,
    pub buttons: Vec<ButtonLayout>,
    pub gap: Option<TabBounds>,
    pub add_button: Option<TabBounds>,
}

impl TabBarLayout {
    /// Find what lies under (x, y); the add button sits on top of everything
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        if self.add_button.is_some_and(|b| b.contains(x, y)) {
            return Some(HitTarget::AddButton);
        }
        self.buttons
            .iter()
            .find(|b| b.bounds.contains(x, y))
            .map(|b| HitTarget::Tab(b.index))
    }

    pub fn button(&self, index: usize) -> Option<&ButtonLayout> {
        self.buttons.iter().find(|b| b.index == index)
    }
}

/// Rows taken by the bar itself
pub fn bar_rows(config: &TabBarConfiguration, metrics: &CellMetrics) -> u16 {
    metrics.rows(config.height).max(3)
}

/// Columns taken by the add button (always odd so the icon centers)
pub fn add_button_cols(config: &TabBarConfiguration, metrics: &CellMetrics) -> u16 {
    let width = metrics.cols(config.add_button_size).max(3);
    if width % 2 == 0 {
        width.saturating_add(1)
    } else {
        width
    }
}

/// Rows taken by the add button
pub fn add_button_rows(config: &TabBarConfiguration, metrics: &CellMetrics) -> u16 {
    metrics.rows(config.add_button_size).max(3)
}

/// How far the add button is raised above its centered position
fn add_button_lift(config: &TabBarConfiguration, metrics: &CellMetrics) -> u16 {
    metrics.rows(config.add_button_size / 3.0)
}

/// Rows a host should reserve to show the bar and the lifted add button
pub fn required_height(config: &TabBarConfiguration, metrics: &CellMetrics, has_action: bool) -> u16 {
    let bar = bar_rows(config, metrics);
    if !has_action {
        return bar;
    }
    let add_rows = add_button_rows(config, metrics);
    let centered_top = bar.saturating_sub(add_rows) / 2;
    let overflow = add_button_lift(config, metrics).saturating_sub(centered_top);
    // A button taller than the bar needs its full height on screen
    bar.saturating_add(overflow).max(add_rows)
}

/// Place the bar at the bottom of `area` and lay out its buttons
pub fn compute_layout(
    area: Rect,
    partition: &Partition<'_>,
    config: &TabBarConfiguration,
    metrics: &CellMetrics,
) -> TabBarLayout {
    if area.width == 0 || area.height == 0 {
        return TabBarLayout::default();
    }

    let rows = bar_rows(config, metrics).min(area.height);
    let bar = Rect {
        x: area.x,
        y: area.y + area.height - rows,
        width: area.width,
        height: rows,
    };

    let border: u16 = if config.border_width > 0.0 { 1 } else { 0 };
    let inset = border + metrics.cols(config.horizontal_padding);
    let content = Rect {
        x: bar.x.saturating_add(inset.min(bar.width)),
        y: bar.y + border.min(bar.height),
        width: bar.width.saturating_sub(inset.saturating_mul(2)),
        height: bar.height.saturating_sub(border * 2),
    };

    let gap_width = if partition.reserves_gap() {
        add_button_cols(config, metrics).min(content.width)
    } else {
        0
    };

    let mut buttons = Vec::with_capacity(partition.len());
    let mut gap = None;

    let count = u16::try_from(partition.len()).unwrap_or(u16::MAX);
    let available = content.width - gap_width;
    let (base, extra) = if count > 0 {
        (available / count, available % count)
    } else {
        (0, 0)
    };

    let mut cursor = content.x;
    let mut slot: u16 = 0;
    let mut place = |index: usize, cursor: &mut u16| {
        let width = base + u16::from(slot < extra);
        slot += 1;
        buttons.push(ButtonLayout {
            index,
            bounds: TabBounds {
                x: *cursor,
                y: content.y,
                width,
                height: content.height,
            },
        });
        *cursor += width;
    };

    for placed in &partition.left {
        place(placed.index, &mut cursor);
    }
    if gap_width > 0 {
        let gap_x = if count == 0 {
            content.x + (content.width - gap_width) / 2
        } else {
            cursor
        };
        gap = Some(TabBounds {
            x: gap_x,
            y: content.y,
            width: gap_width,
            height: content.height,
        });
        cursor += gap_width;
    }
    for placed in &partition.right {
        place(placed.index, &mut cursor);
    }

    let add_button = partition.reserves_gap().then(|| {
        let width = add_button_cols(config, metrics).min(bar.width);
        let height = add_button_rows(config, metrics).min(area.height);
        let centered_y = bar.y + bar.height.saturating_sub(height) / 2;
        // Keep the whole button inside `area`, top and bottom
        let y = centered_y
            .saturating_sub(add_button_lift(config, metrics))
            .max(area.y)
            .min(area.bottom().saturating_sub(height));
        TabBounds {
            x: bar.x + (bar.width - width) / 2,
            y,
            width,
            height,
        }
    });

    TabBarLayout {
        bar,
        content,
        buttons,
        gap,
        add_button,
    }
}
