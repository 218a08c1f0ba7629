use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_export_input(app: &mut App, key: KeyCode) {
    let Some(export) = &mut app.manual_export else {
        app.screen = AppScreen::Map;
        return;
    };

    match key {
        KeyCode::Up => export.scroll = export.scroll.saturating_sub(1),
        KeyCode::Down => export.scroll = export.scroll.saturating_add(1),
        KeyCode::PageUp => export.scroll = export.scroll.saturating_sub(10),
        KeyCode::PageDown => export.scroll = export.scroll.saturating_add(10),
        KeyCode::Home => export.scroll = 0,
        KeyCode::Esc | KeyCode::Char('q') => {
            app.manual_export = None;
            app.screen = AppScreen::Map;
        }
        _ => {}
    }
}
