use crate::app::input::helpers::{step_index, Edge};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

const PAGE: isize = 5;

pub fn handle_facilities_input(app: &mut App, key: KeyCode) {
    let len = app.model.store.len();
    match key {
        KeyCode::Esc => app.screen = AppScreen::Map,
        KeyCode::Char('q') => app.running = false,
        KeyCode::Up => move_cursor(app, len, -1, Edge::Wrap),
        KeyCode::Down => move_cursor(app, len, 1, Edge::Wrap),
        KeyCode::PageUp => move_cursor(app, len, -PAGE, Edge::Clamp),
        KeyCode::PageDown => move_cursor(app, len, PAGE, Edge::Clamp),
        KeyCode::Home => app.facility_list_index = 0,
        KeyCode::End => app.facility_list_index = len.saturating_sub(1),
        KeyCode::Enter => {
            if let Some(id) = selected_id(app) {
                app.focus_on(&id);
                app.screen = AppScreen::Map;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = selected_id(app) {
                app.request_delete(&id);
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, len: usize, delta: isize, edge: Edge) {
    app.facility_list_index = step_index(app.facility_list_index, len, delta, edge);
}

fn selected_id(app: &App) -> Option<String> {
    app.model
        .store
        .all()
        .get(app.facility_list_index)
        .map(|f| f.id.clone())
}
