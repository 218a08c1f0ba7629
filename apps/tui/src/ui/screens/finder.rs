use crate::app::App;
use crate::map::parse_hex_color;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_finder(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(ClearWidget, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let query = Paragraph::new(TextLine::from(vec![
        Span::styled("/ ", Style::default().fg(Color::Yellow)),
        Span::styled(format!("{}_", app.finder.query), Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .title(" Find facility ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(query, chunks[0]);

    let lines: Vec<TextLine<'_>> = if app.finder.results.is_empty() {
        vec![TextLine::from(Span::styled(
            "No matches",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        app.finder
            .results
            .iter()
            .enumerate()
            .filter_map(|(i, id)| app.model.store.get(id).map(|facility| (i, facility)))
            .map(|(i, facility)| {
                let mut style = Style::default().fg(parse_hex_color(facility.category.default_color()));
                if i == app.finder.selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                TextLine::from(vec![
                    Span::styled(format!("{} ", facility.name), style),
                    Span::styled(
                        format!("{} · {}", facility.category.label(), facility.address),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect()
    };

    let results = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Enter: show on map  Esc: back ")
            .borders(Borders::ALL),
    );
    f.render_widget(results, chunks[1]);
}
