use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod export;
mod facilities;
mod finder;
mod help;
mod map;
mod modal;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    // Open dialogs and text fields take every key, including '?'.
    if app.modal.is_open() {
        modal::handle_modal_input(app, key);
        return;
    }

    if app.screen == AppScreen::Finder {
        finder::handle_finder_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Map => map::handle_map_input(app, key),
        AppScreen::Facilities => facilities::handle_facilities_input(app, key),
        AppScreen::ManualExport => export::handle_export_input(app, key),
        AppScreen::Finder => {}
    }
}
