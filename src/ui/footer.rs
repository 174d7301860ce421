use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// (keys, action) pairs shown while browsing the table.
const TABLE_HINTS: &[(&str, &str)] = &[
    ("↑↓", "Move"),
    ("←→", "Page"),
    ("Enter/Click", "Details"),
    ("q", "Quit"),
];

/// (keys, action) pairs shown while the detail modal is open.
const MODAL_HINTS: &[(&str, &str)] = &[("Esc/Enter/Click", "Close"), ("Ctrl+C", "Quit")];

/// Key hints on the left, version on the right.
pub struct Footer {
    modal_open: bool,
}

impl Footer {
    pub fn new(modal_open: bool) -> Self {
        Self { modal_open }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.modal_open {
            MODAL_HINTS
        } else {
            TABLE_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);
        let separator = Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR));

        let mut spans = vec![Span::raw(" ")];
        for (i, (keys, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(": {action}"), dim));
        }

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(Span::width).sum();
        let inner_width = usize::from(area.width.saturating_sub(2));
        let gap = inner_width.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(footer: Footer) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(footer.widget(frame.area()), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn hints_follow_modal_state() {
        let browsing = render(Footer::new(false));
        assert!(browsing.contains("Details"));
        assert!(!browsing.contains("Close"));

        let modal = render(Footer::new(true));
        assert!(modal.contains("Close"));
        assert!(!modal.contains("Page"));
    }

    #[test]
    fn version_is_shown() {
        assert!(render(Footer::new(false)).contains(&format!("v{VERSION}")));
    }
}
