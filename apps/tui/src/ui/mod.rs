// Frame rendering. Each screen draws the full frame; the modal and the help
// popup are layered on top.

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Map => screens::map::render_map_screen(app, f),
        AppScreen::Facilities => screens::facilities::render_facilities(app, f),
        AppScreen::Finder => screens::finder::render_finder(app, f),
        AppScreen::ManualExport => screens::export::render_manual_export(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }

    widgets::popup::render_modal(app, f);
}
