use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const KEY_HELP: &[(&str, &str)] = &[
    ("Arrows", "Pan the map"),
    ("z / x", "Zoom in / out (mouse wheel too)"),
    ("1-6", "Show or hide a category"),
    ("Tab", "Select the next category"),
    ("Space", "Show or hide the selected category"),
    ("[ / ]", "Shrink / grow the selected radius"),
    ("{ / }", "Shrink / grow the radius in large steps"),
    ("n / N", "Select the next / previous marker"),
    ("m", "Move the selected marker (or drag it with the mouse)"),
    ("d", "Delete the selected marker"),
    ("a", "Add a facility at the map centre"),
    ("e", "Copy the facility list"),
    ("l", "Facility list"),
    ("/", "Find a facility"),
    ("Esc", "Clear selection / go back"),
    ("q", "Quit"),
];

fn key_line(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<8}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Ward Facility Map",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Circles show the service radius of each facility. Click a checkbox to hide a category, click a slider to set its radius.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(KEY_HELP.iter().map(|&(key, description)| key_line(key, description)));
    lines
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let popup_area = centered_rect(80, 80, f.area());
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}
