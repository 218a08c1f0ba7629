use crate::app::state::{App, AppScreen};
use crate::controls::ControlAction;
use crate::domain::Category;
use crate::ui::widgets::controls::{slider_fraction, ROWS_PER_CATEGORY};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

pub fn handle_mouse_input(app: &mut App, event: MouseEvent) {
    if app.screen != AppScreen::Map || app.modal.is_open() || app.show_help {
        return;
    }

    let position = Position::new(event.column, event.row);
    let map_area = app.map_area.get();
    let controls_area = app.controls_area.get();

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if map_area.contains(position) => {
            press_on_map(app, event.column, event.row);
        }
        MouseEventKind::Down(MouseButton::Left) if controls_area.contains(position) => {
            press_on_controls(app, controls_area, event.column, event.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.as_ref().is_some_and(|d| d.via_mouse) {
                app.drag_to_cell(event.column, event.row);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.drag.as_ref().is_some_and(|d| d.via_mouse) {
                app.finish_drag();
            }
        }
        MouseEventKind::ScrollUp if map_area.contains(position) => app.zoom_in(),
        MouseEventKind::ScrollDown if map_area.contains(position) => app.zoom_out(),
        _ => {}
    }
}

fn press_on_map(app: &mut App, column: u16, row: u16) {
    // A click ends a keyboard move without writing it back.
    if app.drag.as_ref().is_some_and(|d| !d.via_mouse) {
        app.cancel_drag();
        return;
    }
    if let Some(id) = app.marker_at(column, row) {
        app.selected_marker = Some(id);
        app.begin_drag(true);
    } else {
        app.selected_marker = None;
    }
}

fn press_on_controls(app: &mut App, area: Rect, column: u16, row: u16) {
    let offset = usize::from(row - area.y);
    let Some(category) = Category::from_index(offset / ROWS_PER_CATEGORY) else {
        return;
    };
    app.selected_category = category.index();

    if offset % ROWS_PER_CATEGORY == 0 {
        app.control(ControlAction::ToggleVisible(category));
    } else if let Some(fraction) = slider_fraction(area, column) {
        app.set_radius_from_slider(category, fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LatLng, Viewport};
    use crate::model::MapModel;
    use crate::store::FacilityStore;
    use crate::test_support::facility;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let model = MapModel::new(
            FacilityStore::from_facilities(vec![facility("S1", Category::Subway, 43.09, 141.36)]),
            Viewport::new(LatLng::new(43.09, 141.36), 4000.0),
        );
        let app = App::new(model);
        app.map_area.set(Rect::new(0, 0, 40, 20));
        app.controls_area.set(Rect::new(50, 0, 30, 12));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_drag_release_moves_the_marker() {
        let mut app = app();
        let (col, row) = app
            .model
            .viewport
            .to_cell(LatLng::new(43.09, 141.36), app.map_area.get())
            .unwrap();

        handle_mouse_input(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert_eq!(app.selected_marker.as_deref(), Some("S1"));
        assert!(app.drag.is_some());

        handle_mouse_input(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), col + 5, row));
        handle_mouse_input(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), col + 5, row));

        assert!(app.drag.is_none());
        let moved = app.model.store.get("S1").unwrap();
        assert!(moved.lng > 141.36);
    }

    #[test]
    fn click_without_move_leaves_store_untouched() {
        let mut app = app();
        let (col, row) = app
            .model
            .viewport
            .to_cell(LatLng::new(43.09, 141.36), app.map_area.get())
            .unwrap();
        handle_mouse_input(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        handle_mouse_input(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), col, row));
        let facility = app.model.store.get("S1").unwrap();
        assert_eq!((facility.lat, facility.lng), (43.09, 141.36));
    }

    #[test]
    fn click_during_keyboard_move_cancels_it() {
        let mut app = app();
        app.selected_marker = Some("S1".to_string());
        assert!(app.begin_drag(false));
        app.nudge_drag(4, 2);

        handle_mouse_input(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        assert!(app.drag.is_none());
        assert_eq!(app.status_message, "Move cancelled");
        assert_eq!(app.selected_marker.as_deref(), Some("S1"));

        handle_mouse_input(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 1, 1));
        let facility = app.model.store.get("S1").unwrap();
        assert_eq!((facility.lat, facility.lng), (43.09, 141.36));
    }

    #[test]
    fn checkbox_row_toggles_visibility() {
        let mut app = app();
        // Third category, first row.
        handle_mouse_input(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 52, 4));
        assert!(!app.model.categories.get(Category::Maxvalu).visible);
        assert_eq!(app.selected_category(), Category::Maxvalu);
    }

    #[test]
    fn slider_row_sets_radius() {
        let mut app = app();
        let area = app.controls_area.get();
        handle_mouse_input(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), area.x + area.width - 1, 1),
        );
        let radius = app.model.categories.get(Category::Subway).radius_m;
        assert!(radius > Category::Subway.default_radius());
    }
}
