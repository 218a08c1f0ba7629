use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_modal_input(app: &mut App, key: KeyCode) {
    if app.add_form.is_some() {
        handle_add_form_input(app, key);
        return;
    }

    match key {
        KeyCode::Enter | KeyCode::Char('y') => app.confirm_modal(),
        KeyCode::Esc | KeyCode::Char('n') => app.cancel_modal(),
        _ => {}
    }
}

fn handle_add_form_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.confirm_modal(),
        KeyCode::Esc => app.cancel_modal(),
        KeyCode::Up | KeyCode::BackTab => {
            if let Some(form) = &mut app.add_form {
                form.prev_category();
            }
        }
        KeyCode::Down | KeyCode::Tab => {
            if let Some(form) = &mut app.add_form {
                form.next_category();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.add_form {
                form.name.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.add_form {
                form.name.push(c);
            }
        }
        _ => {}
    }
}
