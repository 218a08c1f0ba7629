use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Split every line into rows of at most `width` characters. Rows of one line
/// follow each other directly, so a selection across them copies the line intact.
pub fn wrap_rows(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Shown when neither clipboard route worked: the export text, to be selected by hand.
pub fn render_manual_export(app: &App, f: &mut Frame<'_>) {
    let Some(export) = &app.manual_export else {
        return;
    };

    let block = Block::default()
        .title(" Copy this text manually (↑/↓ scroll, Esc close) ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let area: Rect = f.area();
    let inner = block.inner(area);
    let rows = wrap_rows(&export.text, inner.width);

    // Keep the last page in view when scrolled past the end.
    let max_scroll = rows.len().saturating_sub(usize::from(inner.height));
    let scroll = usize::from(export.scroll).min(max_scroll);

    let lines: Vec<TextLine<'_>> = rows.into_iter().skip(scroll).map(TextLine::from).collect();
    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppScreen;
    use crate::clipboard::CopyOutcome;
    use crate::flows::export::export_text;
    use crate::map::Viewport;
    use crate::model::MapModel;
    use crate::seed::{seed_store, WARD_CENTER};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 40;

    fn manual_export_app() -> App {
        let mut app = App::new(MapModel::new(seed_store(), Viewport::new(WARD_CENTER, 4000.0)));
        let text = export_text(&app.model.store);
        app.finish_export(text, CopyOutcome::Manual);
        assert_eq!(app.screen, AppScreen::ManualExport);
        app
    }

    /// Inner rows of the drawn frame, without the border columns.
    fn screen_rows(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| render_manual_export(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        (1..HEIGHT - 1)
            .map(|y| (1..WIDTH - 1).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn long_lines_are_split_without_losing_characters() {
        let line = "x".repeat(25);
        let rows = wrap_rows(&format!("{line}\n\nab"), 10);
        assert_eq!(rows, vec!["xxxxxxxxxx", "xxxxxxxxxx", "xxxxx", "", "ab"]);
    }

    #[test]
    fn every_export_line_can_be_scrolled_into_view() {
        let mut app = manual_export_app();
        let text = app.manual_export.as_ref().unwrap().text.clone();
        let expected = wrap_rows(&text, WIDTH - 2);
        assert!(text.lines().any(|l| l.chars().count() > usize::from(WIDTH)));

        let mut seen = Vec::new();
        let page = usize::from(HEIGHT - 2);
        let mut scroll = 0;
        while seen.len() < expected.len() {
            app.manual_export.as_mut().unwrap().scroll = u16::try_from(scroll).unwrap();
            let rows = screen_rows(&app);
            let first = scroll.min(expected.len().saturating_sub(page));
            for (offset, row) in rows.iter().enumerate() {
                if first + offset == seen.len() && seen.len() < expected.len() {
                    seen.push(row.trim_end().to_string());
                }
            }
            scroll += page;
        }

        for (row, wrapped) in seen.iter().zip(&expected) {
            assert_eq!(row.as_str(), wrapped.trim_end());
        }

        let reassembled = expected.concat();
        assert!(reassembled.contains("note: 'Toho line terminus'"));
        assert!(reassembled.contains("address: 'Kita 41-jo Higashi 15'"));
        for line in text.lines() {
            assert!(reassembled.contains(line), "missing {line:?}");
        }
    }

    #[test]
    fn scrolling_past_the_end_keeps_the_last_page() {
        let mut app = manual_export_app();
        app.manual_export.as_mut().unwrap().scroll = u16::MAX;
        let rows = screen_rows(&app);
        assert!(rows.iter().any(|row| row.starts_with("];")));
    }
}
