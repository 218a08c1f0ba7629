use crate::app::state::{App, AppScreen};
use crate::controls::ControlAction;
use crate::domain::Category;
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    if app.drag.is_some() {
        handle_drag_input(app, key);
        return;
    }

    if let Some(action) = control_action(app.selected_category(), key) {
        app.control(action);
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => {
            app.selected_marker = None;
            app.status_message.clear();
        }
        KeyCode::Up => app.pan(0.0, 1.0),
        KeyCode::Down => app.pan(0.0, -1.0),
        KeyCode::Left => app.pan(-1.0, 0.0),
        KeyCode::Right => app.pan(1.0, 0.0),
        KeyCode::Char('z') => app.zoom_in(),
        KeyCode::Char('x') => app.zoom_out(),
        KeyCode::Tab => app.select_next_category(),
        KeyCode::BackTab => app.select_prev_category(),
        KeyCode::Char('n') => app.cycle_marker(true),
        KeyCode::Char('N') => app.cycle_marker(false),
        KeyCode::Char('m') => {
            if !app.begin_drag(false) {
                app.status_message = "Select a marker first".to_string();
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('e') => app.start_export(),
        KeyCode::Char('l') => {
            app.facility_list_index = 0;
            app.screen = AppScreen::Facilities;
        }
        KeyCode::Char('/') => app.open_finder(),
        _ => {}
    }
}

/// Key bindings for the category checkboxes and radius sliders.
fn control_action(selected: Category, key: KeyCode) -> Option<ControlAction> {
    match key {
        KeyCode::Char(c @ '1'..='6') => {
            let index = c.to_digit(10)? as usize - 1;
            Category::from_index(index).map(ControlAction::ToggleVisible)
        }
        KeyCode::Char(' ') => Some(ControlAction::ToggleVisible(selected)),
        KeyCode::Char('[' | '-') => Some(ControlAction::StepRadius(selected, -1)),
        KeyCode::Char(']' | '+' | '=') => Some(ControlAction::StepRadius(selected, 1)),
        KeyCode::Char('{') => Some(ControlAction::StepRadius(selected, -10)),
        KeyCode::Char('}') => Some(ControlAction::StepRadius(selected, 10)),
        _ => None,
    }
}

fn handle_drag_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.nudge_drag(0, 1),
        KeyCode::Down => app.nudge_drag(0, -1),
        KeyCode::Left => app.nudge_drag(-1, 0),
        KeyCode::Right => app.nudge_drag(1, 0),
        KeyCode::Enter | KeyCode::Char('m') => app.finish_drag(),
        KeyCode::Esc => app.cancel_drag(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_toggle_their_category() {
        assert_eq!(
            control_action(Category::Subway, KeyCode::Char('5')),
            Some(ControlAction::ToggleVisible(Category::JuniorHigh))
        );
        assert_eq!(control_action(Category::Subway, KeyCode::Char('7')), None);
    }

    #[test]
    fn slider_keys_target_the_selected_category() {
        assert_eq!(
            control_action(Category::Tsuruha, KeyCode::Char(']')),
            Some(ControlAction::StepRadius(Category::Tsuruha, 1))
        );
        assert_eq!(
            control_action(Category::Aeon, KeyCode::Char('{')),
            Some(ControlAction::StepRadius(Category::Aeon, -10))
        );
    }
}
