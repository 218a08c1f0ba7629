use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt::{self, Write as _};
use std::io::Stdout;

use crate::app::{handle_input, handle_mouse, App};
use crate::clipboard::{copy_with_fallback, CopyOutcome, SystemClipboard, TerminalSelection};
use crate::domain::Category;
use crate::flows::export::{export_json, export_text};
use crate::model::MapModel;
use crate::ui;

// States for copying the export text
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CopyState {
    Idle,
    Copying,
    Done,
}

impl fmt::Display for CopyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Copying => write!(f, "Copying"),
            Self::Done => write!(f, "Done"),
        }
    }
}

#[derive(Clone, Debug)]
enum CopyEvent {
    Start,
    Finished(String, CopyOutcome),
    Reset,
}

impl fmt::Display for CopyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Finished(_, outcome) => write!(f, "Finished({outcome:?})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug)]
struct StateTransitionError {
    from: CopyState,
    event: CopyEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

struct CopyMachine {
    state: CopyState,
}

impl CopyMachine {
    const fn new() -> Self {
        Self {
            state: CopyState::Idle,
        }
    }

    const fn state(&self) -> CopyState {
        self.state
    }

    fn process_event(
        &mut self,
        event: CopyEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

struct NextState(CopyState);

impl TryFrom<(CopyState, CopyEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (CopyState, CopyEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (CopyState::Idle, CopyEvent::Start) => {
                app.status_message = "Copying facility list...".to_string();
                Ok(Self(CopyState::Copying))
            }
            (CopyState::Copying, CopyEvent::Finished(text, outcome)) => {
                app.finish_export(text, outcome);
                Ok(Self(CopyState::Done))
            }
            (CopyState::Done, CopyEvent::Reset) => Ok(Self(CopyState::Idle)),
            (from, event) => Err(StateTransitionError { from, event }),
        }
    }
}

/// What a headless run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessMode {
    Stats,
    Text,
    Json,
}

/// Run without the terminal UI: print and exit.
pub fn run_headless(model: &MapModel, mode: HeadlessMode) -> Result<()> {
    match mode {
        HeadlessMode::Stats => render_headless_stats(model),
        HeadlessMode::Text => print!("{}", export_text(&model.store)),
        HeadlessMode::Json => println!("{}", export_json(&model.store)?),
    }
    Ok(())
}

fn render_headless_stats(model: &MapModel) {
    print!("{}", headless_stats_report(model));
}

fn headless_stats_report(model: &MapModel) -> String {
    let stats = build_headless_stats(model);
    let mut out = String::new();

    let _ = writeln!(out, "\nWard Facility Map");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "Total facilities: {}", stats.total);
    let _ = writeln!(
        out,
        "Map centre: {:.6}, {:.6} ({:.0} m wide)",
        model.viewport.center.lat, model.viewport.center.lng, model.viewport.span_m
    );

    let _ = writeln!(out, "\nBy category:");
    for row in stats.categories {
        let _ = writeln!(
            out,
            "- {:<12} {:<20} {:>3}  radius {:>5.0} m  {}",
            row.key,
            row.label,
            row.count,
            row.radius_m,
            if row.visible { "shown" } else { "hidden" }
        );
    }
    out
}

fn build_headless_stats(model: &MapModel) -> HeadlessStats {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let config = model.categories.get(category);
            HeadlessCategory {
                key: category.as_str(),
                label: category.label(),
                count: model.store.count_in(category),
                visible: config.visible,
                radius_m: config.radius_m,
            }
        })
        .collect();

    HeadlessStats {
        total: model.store.len(),
        categories,
    }
}

#[derive(Debug)]
struct HeadlessStats {
    total: usize,
    categories: Vec<HeadlessCategory>,
}

#[derive(Debug)]
struct HeadlessCategory {
    key: &'static str,
    label: &'static str,
    count: usize,
    visible: bool,
    radius_m: f64,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut copy_machine = CopyMachine::new();
    let mut mouse_captured = true;

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        let want_capture = app.wants_mouse_capture();
        if want_capture != mouse_captured {
            match crate::terminal::set_mouse_capture(want_capture) {
                Ok(()) => mouse_captured = want_capture,
                Err(e) => tracing::warn!(error = %e, "failed to change mouse capture"),
            }
        }

        let Some(text) = app.pending_export.take() else {
            continue;
        };

        if let Err(e) = copy_machine.process_event(CopyEvent::Start, app) {
            tracing::warn!(error = %e, "export state machine");
            continue;
        }
        // Show the "copying" status while the clipboard tool runs.
        if terminal.draw(|f| ui::ui(app, f)).is_err() {
            // Non-fatal redraw error
        }

        let outcome = copy_with_fallback(&SystemClipboard::new(), &TerminalSelection, &text).await;
        tracing::info!(?outcome, bytes = text.len(), "export finished");

        if let Err(e) = copy_machine.process_event(CopyEvent::Finished(text, outcome), app) {
            tracing::warn!(error = %e, "export state machine");
        }
        if let Err(e) = copy_machine.process_event(CopyEvent::Reset, app) {
            tracing::warn!(error = %e, "export state machine");
        }
        tracing::debug!(state = %copy_machine.state(), "export copy settled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{LatLng, Viewport};
    use crate::seed::seed_store;

    fn app() -> App {
        App::new(MapModel::new(
            seed_store(),
            Viewport::new(LatLng::new(43.09, 141.37), 4000.0),
        ))
    }

    #[test]
    fn copy_machine_runs_a_full_cycle() {
        let mut app = app();
        let mut machine = CopyMachine::new();

        machine.process_event(CopyEvent::Start, &mut app).unwrap();
        assert_eq!(machine.state(), CopyState::Copying);

        machine
            .process_event(
                CopyEvent::Finished("text".to_string(), CopyOutcome::Manual),
                &mut app,
            )
            .unwrap();
        assert_eq!(machine.state(), CopyState::Done);
        assert!(app.manual_export.is_some());

        machine.process_event(CopyEvent::Reset, &mut app).unwrap();
        assert_eq!(machine.state(), CopyState::Idle);
    }

    #[test]
    fn finishing_without_starting_is_rejected() {
        let mut app = app();
        let mut machine = CopyMachine::new();
        let err = machine
            .process_event(
                CopyEvent::Finished(String::new(), CopyOutcome::SystemClipboard),
                &mut app,
            )
            .unwrap_err();
        assert_eq!(err.from, CopyState::Idle);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn headless_stats_count_every_category() {
        let model = MapModel::new(
            seed_store(),
            Viewport::new(LatLng::new(43.09, 141.37), 4000.0),
        );
        let stats = build_headless_stats(&model);
        assert_eq!(stats.total, model.store.len());
        assert_eq!(stats.categories.len(), 6);
        assert_eq!(stats.categories[0].key, "subway");
        assert_eq!(
            stats.categories.iter().map(|c| c.count).sum::<usize>(),
            stats.total
        );
    }

    #[test]
    fn headless_report_lists_category_keys() {
        let model = MapModel::new(
            seed_store(),
            Viewport::new(LatLng::new(43.09, 141.37), 4000.0),
        );
        let report = headless_stats_report(&model);
        for category in Category::ALL {
            let row = report
                .lines()
                .find(|line| line.starts_with(&format!("- {} ", category.as_str())))
                .unwrap_or_else(|| panic!("no row for {category:?}"));
            assert!(row.contains(category.label()));
        }
        assert!(report.contains(&format!("Total facilities: {}", model.store.len())));
    }
}
