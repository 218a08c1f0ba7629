use crate::app::App;
use crate::ui::widgets::controls::render_controls;
use crate::ui::widgets::map_canvas::render_map;
use crate::ui::widgets::popup::render_marker_popup;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SIDE_PANEL_WIDTH: u16 = 34;

pub fn render_map_screen(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Map and side panel
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area());

    render_title(app, f, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(layout[1]);

    render_map(app, f, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(4)])
        .split(body[1]);
    render_controls(app, f, side[0]);
    render_marker_popup(app, f, side[1]);

    render_status(app, f, layout[2]);
    render_shortcuts(f, layout[3]);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = TextLine::from(vec![
        Span::styled(
            "Ward Facility Map",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} facilities", app.model.store.len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    let status_text = Text::from(Span::styled(app.status_message.as_str(), style));

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let gray = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (i, (k, label)) in [
        ("?", "Help"),
        ("1-6", "Layers"),
        ("[ ]", "Radius"),
        ("a", "Add"),
        ("d", "Delete"),
        ("e", "Export"),
        ("/", "Find"),
        ("q", "Quit"),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" | ", gray));
        }
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(": {label}"), gray));
    }

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}
