// Category checkboxes and radius sliders. Each category takes two rows:
// the checkbox with its count, then the slider bar with the current radius.

use crate::app::App;
use crate::category::RADIUS_SLIDER;
use crate::domain::Category;
use crate::map::parse_hex_color;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const ROWS_PER_CATEGORY: usize = 2;

const SLIDER_INDENT: u16 = 4;
const SLIDER_LABEL_WIDTH: u16 = 8;

/// Columns (absolute start, width) the slider bar occupies in `area`.
fn slider_span(area: Rect) -> (u16, u16) {
    let width = area
        .width
        .saturating_sub(SLIDER_INDENT + SLIDER_LABEL_WIDTH)
        .max(1);
    (area.x + SLIDER_INDENT, width)
}

/// Fraction along the slider for a click at `column`. Clicks right of the bar
/// count as its end, clicks in the indent are ignored.
pub fn slider_fraction(area: Rect, column: u16) -> Option<f64> {
    let (start, width) = slider_span(area);
    if column < start {
        return None;
    }
    let offset = f64::from(column - start) + 0.5;
    Some((offset / f64::from(width)).clamp(0.0, 1.0))
}

pub fn render_controls(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Layers ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.controls_area.set(inner);

    let (_, bar_width) = slider_span(inner);
    let selected = app.selected_category();
    let mut lines = Vec::with_capacity(Category::ALL.len() * ROWS_PER_CATEGORY);

    for (category, config) in app.model.categories.iter() {
        let color = parse_hex_color(&config.color);
        let mut label_style = Style::default().fg(color);
        if category == selected {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        lines.push(TextLine::from(vec![
            Span::styled(
                if config.visible { "[x] " } else { "[ ] " },
                Style::default().fg(Color::White),
            ),
            Span::styled(category.label(), label_style),
            Span::styled(
                format!(" ({})", app.model.store.count_in(category)),
                Style::default().fg(Color::Gray),
            ),
        ]));

        lines.push(slider_line(config.radius_m, bar_width, color, config.visible));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn slider_line(radius_m: f64, bar_width: u16, color: Color, visible: bool) -> TextLine<'static> {
    let width = usize::from(bar_width);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((RADIUS_SLIDER.fraction(radius_m) * width as f64).round() as usize).min(width);
    let bar_color = if visible { color } else { Color::DarkGray };

    TextLine::from(vec![
        Span::raw(" ".repeat(usize::from(SLIDER_INDENT))),
        Span::styled("━".repeat(filled), Style::default().fg(bar_color)),
        Span::styled("─".repeat(width - filled), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>6} m", format!("{radius_m:.0}")),
            Style::default().fg(Color::Yellow),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clicks_map_to_fractions() {
        let area = Rect::new(10, 0, 32, 12);
        assert_eq!(slider_fraction(area, 11), None);
        let start = slider_fraction(area, 14).unwrap();
        assert!(start < 0.1);
        assert_eq!(slider_fraction(area, 41), Some(1.0));
    }

    #[test]
    fn slider_line_has_fixed_width() {
        let line = slider_line(800.0, 20, Color::Blue, true);
        let width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(width, usize::from(SLIDER_INDENT) + 20 + usize::from(SLIDER_LABEL_WIDTH));
    }
}
