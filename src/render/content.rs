// Content rendering

use floating_tab_bar::{DimmingContext, IconSet, TabDescriptor};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the header with the application title and subtitle
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str, dimming: &DimmingContext) {
    let lines = vec![
        Line::styled(
            title.to_string(),
            Style::default()
                .fg(dimming.dim_color(Color::White))
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(subtitle.to_string(), Style::default().fg(dimming.dim_color(Color::Gray))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the page behind the selected tab
pub fn render_page(
    f: &mut Frame,
    area: Rect,
    tab: Option<&TabDescriptor>,
    description: &str,
    icons: &IconSet,
    dimming: &DimmingContext,
) {
    let Some(tab) = tab else {
        let empty = Paragraph::new("No tabs configured")
            .alignment(Alignment::Center)
            .style(Style::default().fg(dimming.dim_color(Color::DarkGray)));
        f.render_widget(empty, area);
        return;
    };

    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![
        Line::styled(
            icons.resolve(&tab.icon, &tab.title),
            Style::default()
                .fg(dimming.dim_color(Color::Magenta))
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            tab.title.clone(),
            Style::default()
                .fg(dimming.dim_color(Color::White))
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(description.to_string(), Style::default().fg(dimming.dim_color(Color::Gray))),
    ];
    if tab.has_notification {
        lines.push(Line::styled(
            "● new activity",
            Style::default().fg(dimming.dim_color(Color::Red)),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, body);
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, text: &str, dimming: &DimmingContext) {
    let status = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(dimming.border_color(false)));
    f.render_widget(status, area);
}
