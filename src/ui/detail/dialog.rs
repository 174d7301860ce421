use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::Detail;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER};

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 9;

/// First character uppercased, the rest unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Body lines of the modal, without styling.
pub fn detail_lines(detail: &Detail) -> Vec<String> {
    vec![
        format!("ID: {}", detail.id),
        format!("Height: {}", detail.height),
        format!("Weight: {}", detail.weight),
    ]
}

pub fn render_detail_modal(frame: &mut Frame, detail: &Detail) {
    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" Details of {} ", capitalize(&detail.name)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![Line::from("")];
    lines.extend(
        detail_lines(detail)
            .into_iter()
            .map(|line| Line::from(Span::styled(format!("  {line}"), text_style))),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Esc: Close",
            Style::default()
                .fg(HEADER_SEPARATOR)
                .add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
