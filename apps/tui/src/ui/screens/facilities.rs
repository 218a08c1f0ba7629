use crate::app::App;
use crate::map::parse_hex_color;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_facilities(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let facilities = app.model.store.all();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    if facilities.is_empty() {
        let block = Block::default()
            .title("Facilities")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No facilities.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[0]);
        render_help(f, chunks[1]);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Lat"),
        Cell::from("Lng"),
        Cell::from("Address"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = facilities.len();
    let max_visible_rows = chunks[0].height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.facility_list_index);

    let rows = facilities
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, facility)| {
            let style = if i == app.facility_list_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(parse_hex_color(facility.category.default_color()))
            };

            Row::new(vec![
                Cell::from(facility.id.clone()),
                Cell::from(facility.name.clone()),
                Cell::from(facility.category.label()),
                Cell::from(format!("{:.6}", facility.lat)),
                Cell::from(format!("{:.6}", facility.lng)),
                Cell::from(facility.address.clone()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(16),
        Constraint::Length(30),
        Constraint::Length(20),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Facilities ({} of {})",
                    app.facility_list_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, chunks[0]);
    render_help(f, chunks[1]);
}

fn render_help(f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![
        Span::styled("ESC", key),
        Span::raw(": Back to map   "),
        Span::styled("↑/↓", key),
        Span::raw(": Navigate   "),
        Span::styled("PgUp/PgDn", key),
        Span::raw(": Jump 5 rows   "),
        Span::styled("Enter", key),
        Span::raw(": Show on map   "),
        Span::styled("d", key),
        Span::raw(": Delete"),
    ];
    let paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
