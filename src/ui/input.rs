use crate::ui::app::App;
use crate::ui::table::TableIntent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The modal swallows everything except its close keys.
    if app.table().is_modal_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c')) {
            app.close_detail();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_table(TableIntent::MoveCursor(-1)),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_table(TableIntent::MoveCursor(1)),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => {
            app.dispatch_table(TableIntent::PrevPage)
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => {
            app.dispatch_table(TableIntent::NextPage)
        }
        KeyCode::Home => app.dispatch_table(TableIntent::FirstPage),
        KeyCode::End => app.dispatch_table(TableIntent::LastPage),
        KeyCode::Enter => app.activate_selected(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.table().is_modal_open() {
                app.close_detail();
                return;
            }
            if let Some(index) = app.row_at(mouse.column, mouse.row) {
                app.dispatch_table(TableIntent::SelectRow(index));
                app.activate_selected();
            }
        }
        MouseEventKind::ScrollUp if !app.table().is_modal_open() => {
            app.dispatch_table(TableIntent::MoveCursor(-1))
        }
        MouseEventKind::ScrollDown if !app.table().is_modal_open() => {
            app.dispatch_table(TableIntent::MoveCursor(1))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
