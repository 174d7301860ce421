use crate::ui::table::{spinner, TableState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PENDING};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    source: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn widget(&self, state: &TableState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, indicator_style) = if state.is_ready() {
            ("●", Style::default().fg(STATUS_OK))
        } else {
            (spinner(state.animation_tick()), Style::default().fg(STATUS_PENDING))
        };

        let status = if state.is_ready() {
            format!("{} items", state.rows().len())
        } else {
            "Loading".to_string()
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(indicator, indicator_style),
            Span::styled("  ", text_style),
            Span::styled("dexview", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.source.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
        ];

        if let Some((id, _)) = state.pending_detail() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} Fetching #{}", spinner(state.animation_tick()), id),
                Style::default().fg(STATUS_PENDING),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
