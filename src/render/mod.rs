// Render module - UI rendering functions

pub mod content;
pub mod sheet;

use floating_tab_bar::DimmingContext;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::DemoApp;
use content::{render_header, render_page, render_status};
use sheet::render_add_sheet;

/// Columns kept free on each side of the floating bar
const BAR_INSET_X: u16 = 2;

/// Render one frame of the demo
pub fn render_app(f: &mut Frame, app: &mut DemoApp) {
    let area = f.area();
    let dimming = DimmingContext::new(app.show_add_sheet);
    let bar_height = app.tab_bar.required_height(true);

    let [header, page, bar, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(bar_height),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(
        f,
        header,
        &app.config.application.title,
        &app.config.application.subtitle,
        &dimming,
    );

    let description = app.page_description();
    render_page(
        f,
        page,
        app.tab_bar.tabs().get(app.selected),
        &description,
        app.tab_bar.icons(),
        &dimming,
    );

    let bar_area = Rect {
        x: bar.x + BAR_INSET_X.min(bar.width / 2),
        width: bar.width.saturating_sub(BAR_INSET_X * 2),
        ..bar
    };
    let selected = app.selected;
    app.tab_bar
        .render(bar_area, f.buffer_mut(), selected, true, dimming);

    let status_bar = &app.config.application.status_bar;
    if app.show_add_sheet {
        render_status(f, status, status_bar.modal_text.as_deref().unwrap_or(""), &dimming);
        render_add_sheet(f, area, app.added_items, status_bar.modal_text.as_deref());
    } else {
        render_status(f, status, &status_bar.default_text, &dimming);
    }
}
