//! Rendering of the catalog table and mouse hit-testing.

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as GridRow, Table, TableState as GridState},
    Frame,
};

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_PENDING,
};

use super::state::TableState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Width of the id column.
const ID_WIDTH: u16 = 8;

pub fn spinner(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

fn table_block(state: &TableState) -> Block<'static> {
    let mut block = Block::default()
        .title(" Catalog ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.is_ready() {
        let range = state.page_range();
        let position = if range.is_empty() {
            format!(" Page {}/{} ", state.page() + 1, state.page_count())
        } else {
            format!(
                " Page {}/{} │ rows {}-{} of {} ",
                state.page() + 1,
                state.page_count(),
                range.start + 1,
                range.end,
                state.rows().len()
            )
        };
        block = block.title_bottom(Line::from(position).alignment(Alignment::Right));
    }
    block
}

/// Rows of the current page that fit in `area`, as absolute indices.
///
/// The window scrolls so the cursor row is always inside it. Rendering and
/// hit-testing both go through this so a click lands on the drawn row.
pub fn visible_window(state: &TableState, area: Rect) -> Range<usize> {
    let inner = table_block(state).inner(area);
    // One line for the column header.
    let capacity = inner.height.saturating_sub(1) as usize;
    let page = state.page_range();
    if capacity == 0 || page.is_empty() {
        return page.start..page.start;
    }

    let within = state.cursor().unwrap_or(0).saturating_sub(page.start);
    let offset = if within >= capacity {
        within + 1 - capacity
    } else {
        0
    };
    let start = page.start + offset;
    start..(start + capacity).min(page.end)
}

/// Absolute row index under the terminal cell (`column`, `row`), if any.
pub fn row_at(state: &TableState, area: Rect, column: u16, row: u16) -> Option<usize> {
    if !state.is_ready() {
        return None;
    }
    let inner = table_block(state).inner(area);
    let first_data_row = inner.y.saturating_add(1);
    if column < inner.x
        || column >= inner.x.saturating_add(inner.width)
        || row < first_data_row
        || row >= inner.y.saturating_add(inner.height)
    {
        return None;
    }

    let window = visible_window(state, area);
    let index = window.start + (row - first_data_row) as usize;
    window.contains(&index).then_some(index)
}

pub fn render_table(frame: &mut Frame, area: Rect, state: &TableState) {
    let block = table_block(state);

    if state.is_loading() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_loading(frame, inner, state.animation_tick());
        return;
    }

    if state.rows().is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new("No items.")
            .style(Style::default().fg(HEADER_SEPARATOR))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let window = visible_window(state, area);
    let pending_id = state.pending_detail().map(|(id, _)| id);
    let rows: Vec<GridRow> = state.rows()[window.clone()]
        .iter()
        .map(|row| {
            let marker = if pending_id == Some(row.id) {
                Span::styled(
                    format!(" {}", spinner(state.animation_tick())),
                    Style::default().fg(STATUS_PENDING),
                )
            } else {
                Span::raw("")
            };
            GridRow::new(vec![
                Cell::from(row.id.to_string()),
                Cell::from(Line::from(vec![Span::raw(row.name.clone()), marker])),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        })
        .collect();

    let header = GridRow::new(vec![Cell::from("ID"), Cell::from("Name")]).style(
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Length(ID_WIDTH), Constraint::Min(10)])
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let selected = state
        .cursor()
        .filter(|cursor| window.contains(cursor))
        .map(|cursor| cursor - window.start);
    let mut grid_state = GridState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut grid_state);
}

fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner(animation_tick)),
                Style::default().fg(STATUS_PENDING),
            ),
            Span::styled("Loading catalog...", Style::default().fg(HEADER_TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::Row;
    use crate::ui::table::{DetailState, TablePhase};

    fn ready(count: u64, cursor: usize, page_size: usize) -> TableState {
        TableState {
            page_size,
            phase: TablePhase::Ready {
                rows: (1..=count)
                    .map(|id| Row {
                        id,
                        name: format!("item-{id}"),
                    })
                    .collect(),
                cursor,
                detail: DetailState::Idle,
            },
        }
    }

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER_FRAMES.len() as u8));
    }

    #[test]
    fn window_covers_page_when_it_fits() {
        // 10 rows inside borders + header = 13 lines.
        let area = Rect::new(0, 0, 40, 13);
        assert_eq!(visible_window(&ready(25, 12, 10), area), 10..20);
    }

    #[test]
    fn window_scrolls_to_keep_cursor_visible() {
        // Room for 4 data rows.
        let area = Rect::new(0, 0, 40, 7);
        assert_eq!(visible_window(&ready(25, 2, 10), area), 0..4);
        assert_eq!(visible_window(&ready(25, 6, 10), area), 3..7);
        assert_eq!(visible_window(&ready(25, 9, 10), area), 6..10);
    }

    #[test]
    fn row_at_maps_clicks_to_rows() {
        let area = Rect::new(0, 3, 40, 13);
        let state = ready(25, 12, 10);
        // Border at y=3, header at y=4, first data row at y=5.
        assert_eq!(row_at(&state, area, 5, 3), None);
        assert_eq!(row_at(&state, area, 5, 4), None);
        assert_eq!(row_at(&state, area, 5, 5), Some(10));
        assert_eq!(row_at(&state, area, 5, 14), Some(19));
        // Bottom border and outside columns.
        assert_eq!(row_at(&state, area, 5, 15), None);
        assert_eq!(row_at(&state, area, 0, 5), None);
        assert_eq!(row_at(&state, area, 39, 5), None);
    }

    #[test]
    fn row_at_ignores_blank_lines_on_short_page() {
        let area = Rect::new(0, 0, 40, 13);
        let state = ready(23, 21, 10);
        assert_eq!(row_at(&state, area, 5, 2), Some(20));
        assert_eq!(row_at(&state, area, 5, 4), Some(22));
        assert_eq!(row_at(&state, area, 5, 5), None);
    }

    #[test]
    fn row_at_while_loading_is_none() {
        assert_eq!(row_at(&TableState::default(), Rect::new(0, 0, 40, 13), 5, 2), None);
    }
}
