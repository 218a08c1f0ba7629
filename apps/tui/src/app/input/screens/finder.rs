use crate::app::input::helpers::{step_index, Edge};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_finder_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.screen = AppScreen::Map,
        KeyCode::Enter => app.finder_choose(),
        KeyCode::Up => {
            let len = app.finder.results.len();
            app.finder.selected = step_index(app.finder.selected, len, -1, Edge::Wrap);
        }
        KeyCode::Down => {
            let len = app.finder.results.len();
            app.finder.selected = step_index(app.finder.selected, len, 1, Edge::Wrap);
        }
        KeyCode::Backspace => {
            app.finder.query.pop();
            app.refresh_finder();
        }
        KeyCode::Char(c) => {
            app.finder.query.push(c);
            app.refresh_finder();
        }
        _ => {}
    }
}
