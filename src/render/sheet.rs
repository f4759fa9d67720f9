// Add item sheet
// Modal sheet opened by the tab bar's add button

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHEET_WIDTH: u16 = 48;
const SHEET_HEIGHT: u16 = 9;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_add_sheet(f: &mut Frame, area: Rect, added_items: usize, hint: Option<&str>) {
    let sheet = centered(area, SHEET_WIDTH, SHEET_HEIGHT);
    f.render_widget(Clear, sheet);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Add New Item ")
        .title_alignment(Alignment::Center);

    let mut lines = vec![
        Line::default(),
        Line::styled(
            "This is where you would implement your add functionality.",
            Style::default().fg(Color::Gray),
        ),
        Line::default(),
        Line::styled(
            format!("Items added so far: {}", added_items),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(hint) = hint {
        lines.push(Line::default());
        lines.push(Line::styled(hint.to_string(), Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, sheet);
}
