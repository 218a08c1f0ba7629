use crate::app::App;
use crate::domain::Category;
use crate::map::parse_hex_color;
use crate::modal::{Modal, ModalAction};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

/// Draw the open modal, if any, over the whole frame.
pub fn render_modal(app: &App, f: &mut Frame<'_>) {
    let Some(modal) = app.modal.current() else {
        return;
    };

    let area = centered_rect(60, 40, f.area());
    f.render_widget(ClearWidget, area);

    let border = match modal.on_confirm {
        ModalAction::DeleteFacility(_) => Color::Red,
        ModalAction::SubmitAddFacility => Color::Green,
        ModalAction::None => Color::Yellow,
    };
    let block = Block::default()
        .title(format!(" {} ", modal.title))
        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let mut lines = vec![TextLine::from(modal.body.clone()), TextLine::from("")];
    if let Some(form) = &app.add_form {
        lines.extend(add_form_lines(&form.name, form.category_index));
        if app.status_message.starts_with("Error") {
            lines.push(TextLine::from(Span::styled(
                app.status_message.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(TextLine::from(""));
    }
    lines.push(button_line(modal));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);

    if let Ok(mut effect) = app.modal_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            let buffer = f.buffer_mut();
            buffer.render_effect(effect, area, app.last_tick);
        }
    }
}

fn add_form_lines(name: &str, category_index: usize) -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{name}_"), Style::default().fg(Color::White)),
        ]),
        TextLine::from(Span::styled(
            "Category (Up/Down):",
            Style::default().fg(Color::Gray),
        )),
    ];

    for category in Category::ALL {
        let selected = category.index() == category_index;
        let style = if selected {
            Style::default()
                .fg(parse_hex_color(category.default_color()))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(TextLine::from(Span::styled(
            format!("  {} {}", if selected { ">" } else { " " }, category.label()),
            style,
        )));
    }
    lines
}

fn button_line(modal: &Modal) -> TextLine<'static> {
    let confirm = match modal.on_confirm {
        ModalAction::DeleteFacility(_) => "[Enter] Delete",
        ModalAction::SubmitAddFacility => "[Enter] Add",
        ModalAction::None => "[Enter] OK",
    };
    let mut spans = vec![Span::styled(
        confirm,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if modal.show_cancel {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[Esc] Cancel", Style::default().fg(Color::Gray)));
    }
    TextLine::from(spans).alignment(Alignment::Center)
}

/// Details of the selected marker, with its delete shortcut.
pub fn render_marker_popup(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Selected ")
        .title_style(Style::default().fg(Color::Magenta))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let Some(marker) = app.current_marker() else {
        let hint = Paragraph::new("Click a marker or press n")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let popup = &marker.popup;
    let mut lines = vec![
        TextLine::from(Span::styled(
            popup.name.clone(),
            Style::default()
                .fg(parse_hex_color(&marker.color))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            popup.address.clone(),
            Style::default().fg(Color::White),
        )),
    ];
    if !popup.note.is_empty() {
        lines.push(TextLine::from(Span::styled(
            popup.note.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(TextLine::from(vec![
        Span::styled(
            format!("{:.6}, {:.6}", marker.position.lat, marker.position.lng),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(TextLine::from(vec![
        Span::styled("[d] Delete", Style::default().fg(Color::Red)),
        Span::raw("  "),
        Span::styled("[m] Move", Style::default().fg(Color::Yellow)),
    ]));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
