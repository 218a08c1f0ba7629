use crate::category::RADIUS_SLIDER;
use crate::clipboard::CopyOutcome;
use crate::controls::{self, ControlAction};
use crate::domain::Category;
use crate::flows::add::{self, AddFacilityForm};
use crate::flows::delete::{self, DeleteOutcome};
use crate::flows::export::export_text;
use crate::map::{LatLng, Marker, RenderTarget};
use crate::modal::{ModalAction, ModalHost};
use crate::model::MapModel;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};

const PAN_FRACTION: f64 = 0.1;
const FINDER_LIMIT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Map,
    Facilities,
    Finder,
    ManualExport,
}

/// A marker being moved. The store is only written when the drag ends.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub facility_id: String,
    pub preview: LatLng,
    pub moved: bool,
    pub via_mouse: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FinderState {
    pub query: String,
    pub results: Vec<String>,
    pub selected: usize,
}

/// Export text that could not be copied automatically.
#[derive(Debug, Clone)]
pub struct ManualExport {
    pub text: String,
    pub scroll: u16,
}

pub struct App {
    pub running: bool,
    pub model: MapModel,
    pub modal: ModalHost,
    pub add_form: Option<AddFacilityForm>,
    pub screen: AppScreen,
    pub selected_category: usize,
    pub selected_marker: Option<String>,
    pub drag: Option<DragState>,
    pub status_message: String,
    pub show_help: bool,
    pub finder: FinderState,
    pub facility_list_index: usize,
    pub pending_export: Option<String>,
    pub manual_export: Option<ManualExport>,
    pub map_area: Cell<Rect>,
    pub controls_area: Cell<Rect>,
    pub modal_fx: Mutex<Option<Effect>>,
    pub last_tick: Duration,
    pub last_frame: Instant,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("facilities", &self.model.store.len())
            .field("selected_marker", &self.selected_marker)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(model: MapModel) -> Self {
        Self {
            running: true,
            model,
            modal: ModalHost::new(),
            add_form: None,
            screen: AppScreen::Map,
            selected_category: 0,
            selected_marker: None,
            drag: None,
            status_message: String::new(),
            show_help: false,
            finder: FinderState::default(),
            facility_list_index: 0,
            pending_export: None,
            manual_export: None,
            map_area: Cell::new(Rect::default()),
            controls_area: Cell::new(Rect::default()),
            modal_fx: Mutex::new(None),
            last_tick: Duration::ZERO,
            last_frame: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_tick = now.duration_since(self.last_frame);
        self.last_frame = now;
    }

    pub fn selected_category(&self) -> Category {
        Category::from_index(self.selected_category).unwrap_or(Category::Subway)
    }

    pub fn select_next_category(&mut self) {
        self.selected_category = (self.selected_category + 1) % Category::ALL.len();
    }

    pub fn select_prev_category(&mut self) {
        self.selected_category =
            (self.selected_category + Category::ALL.len() - 1) % Category::ALL.len();
    }

    // --- controls ---------------------------------------------------------

    pub fn control(&mut self, action: ControlAction) {
        controls::dispatch(&mut self.model, action);
        let category = action.category();
        let config = self.model.categories.get(category);
        self.status_message = format!(
            "{}: {} ({:.0} m)",
            category.label(),
            if config.visible { "shown" } else { "hidden" },
            config.radius_m
        );

        if !config.visible {
            self.clear_selection_in(category);
        }
    }

    /// Slider click: `fraction` of the way along the bar, snapped to the slider step.
    pub fn set_radius_from_slider(&mut self, category: Category, fraction: f64) {
        let raw = fraction.clamp(0.0, 1.0).mul_add(RADIUS_SLIDER.max - RADIUS_SLIDER.min, RADIUS_SLIDER.min);
        let snapped = (raw / RADIUS_SLIDER.step).round() * RADIUS_SLIDER.step;
        self.control(ControlAction::SetRadius(category, RADIUS_SLIDER.clamp(snapped)));
    }

    fn clear_selection_in(&mut self, category: Category) {
        let in_category = self
            .selected_marker
            .as_deref()
            .and_then(|id| self.model.store.get(id))
            .is_some_and(|f| f.category == category);
        if in_category {
            self.selected_marker = None;
            self.drag = None;
        }
    }

    // --- viewport ---------------------------------------------------------

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.model.viewport.pan(dx * PAN_FRACTION, dy * PAN_FRACTION);
    }

    pub fn zoom_in(&mut self) {
        self.model.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.model.viewport.zoom_out();
    }

    pub fn focus_on(&mut self, facility_id: &str) {
        let Some(facility) = self.model.store.get(facility_id) else {
            return;
        };
        let category = facility.category;
        self.model.viewport.center = facility.position();
        self.selected_marker = Some(facility_id.to_string());
        self.selected_category = category.index();
        if !self.model.categories.get(category).visible {
            self.control(ControlAction::SetVisible(category, true));
        }
    }

    // --- markers ----------------------------------------------------------

    /// Every drawn marker, in category order.
    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        self.model
            .categories
            .iter()
            .flat_map(|(_, config)| config.layer.markers().iter())
    }

    pub fn current_marker(&self) -> Option<&Marker> {
        let id = self.selected_marker.as_deref()?;
        self.visible_markers().find(|m| m.facility_id == id)
    }

    pub fn cycle_marker(&mut self, forward: bool) {
        let ids: Vec<String> = self
            .visible_markers()
            .map(|m| m.facility_id.clone())
            .collect();
        if ids.is_empty() {
            self.selected_marker = None;
            return;
        }

        let current = self
            .selected_marker
            .as_ref()
            .and_then(|id| ids.iter().position(|candidate| candidate == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => ids.len() - 1,
            (Some(i), true) => (i + 1) % ids.len(),
            (Some(i), false) => (i + ids.len() - 1) % ids.len(),
        };
        self.selected_marker = Some(ids[next].clone());
    }

    /// Marker drawn at an absolute terminal cell, if any. Later categories win.
    pub fn marker_at(&self, column: u16, row: u16) -> Option<String> {
        let area = self.map_area.get();
        let viewport = self.model.viewport;
        self.visible_markers()
            .filter(|m| viewport.to_cell(m.position, area) == Some((column, row)))
            .last()
            .map(|m| m.facility_id.clone())
    }

    // --- drag -------------------------------------------------------------

    pub fn begin_drag(&mut self, via_mouse: bool) -> bool {
        let Some(marker) = self.current_marker() else {
            return false;
        };
        if !marker.draggable {
            return false;
        }
        self.drag = Some(DragState {
            facility_id: marker.facility_id.clone(),
            preview: marker.position,
            moved: false,
            via_mouse,
        });
        if !via_mouse {
            self.status_message =
                "Moving marker: arrows to move, Enter to drop, Esc to cancel".to_string();
        }
        true
    }

    pub fn drag_to_cell(&mut self, column: u16, row: u16) {
        let area = self.map_area.get();
        let position = self.model.viewport.from_cell(column, row, area);
        if let Some(drag) = &mut self.drag {
            drag.preview = position;
            drag.moved = true;
        }
    }

    /// Keyboard drag: move the preview by whole cells (east/north positive).
    pub fn nudge_drag(&mut self, dx_cells: i32, dy_cells: i32) {
        let area = self.map_area.get();
        let step = self.model.viewport.metres_per_cell(area);
        let viewport = self.model.viewport;
        if let Some(drag) = &mut self.drag {
            use crate::map::Projection;
            let (x, y) = viewport.project(drag.preview);
            // Cells are about twice as tall as wide.
            drag.preview = viewport.unproject(
                f64::from(dx_cells).mul_add(step, x),
                f64::from(dy_cells).mul_add(step * 2.0, y),
            );
            drag.moved = true;
        }
    }

    /// Drop the dragged marker and write its position back to the store.
    pub fn finish_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if !drag.moved {
            return;
        }
        if self.model.finish_drag(&drag.facility_id, drag.preview) {
            self.status_message = format!(
                "Moved to {:.6}, {:.6}",
                drag.preview.lat, drag.preview.lng
            );
        }
    }

    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.status_message = "Move cancelled".to_string();
        }
    }

    // --- modal flows ------------------------------------------------------

    pub fn open_add_dialog(&mut self) {
        let mut form = AddFacilityForm::new();
        form.category_index = self.selected_category;
        self.add_form = Some(form);
        self.modal.show(
            "Add facility",
            "New facilities are placed at the map centre.",
            ModalAction::SubmitAddFacility,
            true,
        );
        self.start_modal_fx();
    }

    pub fn request_delete_selected(&mut self) {
        let Some(id) = self.selected_marker.clone() else {
            self.status_message = "Select a marker first".to_string();
            return;
        };
        self.request_delete(&id);
    }

    pub fn request_delete(&mut self, facility_id: &str) {
        delete::request(&self.model, &mut self.modal, facility_id);
        self.start_modal_fx();
    }

    pub fn confirm_modal(&mut self) {
        let Some(action) = self.modal.confirm_action().cloned() else {
            return;
        };

        match action {
            ModalAction::None => self.modal.hide(),
            ModalAction::SubmitAddFacility => self.submit_add_form(),
            ModalAction::DeleteFacility(id) => {
                self.modal.hide();
                match delete::confirm(&mut self.model, &id) {
                    DeleteOutcome::Deleted(facility) => {
                        if self.selected_marker.as_deref() == Some(id.as_str()) {
                            self.selected_marker = None;
                        }
                        let last = self.model.store.len().saturating_sub(1);
                        self.facility_list_index = self.facility_list_index.min(last);
                        self.status_message = format!("Deleted {}", facility.name);
                    }
                    DeleteOutcome::NotFound => {
                        self.modal.alert("That facility no longer exists.");
                        self.start_modal_fx();
                    }
                }
            }
        }
    }

    fn submit_add_form(&mut self) {
        let Some(form) = &self.add_form else {
            self.modal.hide();
            return;
        };
        match add::submit(&mut self.model, form) {
            Ok(id) => {
                self.modal.hide();
                self.add_form = None;
                self.status_message = format!("Added facility {id}");
                self.selected_marker = Some(id);
            }
            Err(e) => {
                // The dialog stays open for correction.
                self.status_message = format!("Error: {e}");
            }
        }
    }

    pub fn cancel_modal(&mut self) {
        let cancellable = self
            .modal
            .current()
            .is_some_and(|m| m.show_cancel || m.on_confirm == ModalAction::None);
        if cancellable {
            self.modal.hide();
            self.add_form = None;
        }
    }

    fn start_modal_fx(&self) {
        if let Ok(mut effect) = self.modal_fx.lock() {
            *effect = Some(fx::coalesce((250, Interpolation::QuadOut)));
        }
    }

    // --- export -----------------------------------------------------------

    pub fn start_export(&mut self) {
        self.pending_export = Some(export_text(&self.model.store));
        self.status_message = "Copying facility list...".to_string();
    }

    pub fn finish_export(&mut self, text: String, outcome: CopyOutcome) {
        let count = self.model.store.len();
        match outcome {
            CopyOutcome::SystemClipboard => {
                self.modal
                    .alert(format!("Copied {count} facilities to the clipboard."));
                self.start_modal_fx();
                self.status_message = "Export copied".to_string();
            }
            CopyOutcome::TerminalSelection => {
                self.modal.alert(format!(
                    "Copied {count} facilities through the terminal selection."
                ));
                self.start_modal_fx();
                self.status_message = "Export copied".to_string();
            }
            CopyOutcome::Manual => {
                tracing::info!(target: "export", "manual export:\n{text}");
                self.status_message =
                    "Error: clipboard unavailable, copy the text manually".to_string();
                self.manual_export = Some(ManualExport { text, scroll: 0 });
                self.screen = AppScreen::ManualExport;
            }
        }
    }

    /// Mouse reporting is released while the manual-copy viewer is open so
    /// the text can be selected with the terminal's own selection.
    pub fn wants_mouse_capture(&self) -> bool {
        self.screen != AppScreen::ManualExport
    }

    // --- finder -----------------------------------------------------------

    pub fn open_finder(&mut self) {
        self.finder = FinderState::default();
        self.refresh_finder();
        self.screen = AppScreen::Finder;
    }

    pub fn refresh_finder(&mut self) {
        let matcher = SkimMatcherV2::default();
        let query = self.finder.query.trim();

        let mut scored: Vec<(i64, &str)> = self
            .model
            .store
            .all()
            .iter()
            .filter_map(|f| {
                if query.is_empty() {
                    return Some((0, f.id.as_str()));
                }
                let haystack = format!("{} {} {}", f.name, f.address, f.category.label());
                matcher
                    .fuzzy_match(&haystack, query)
                    .map(|score| (score, f.id.as_str()))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        self.finder.results = scored
            .into_iter()
            .take(FINDER_LIMIT)
            .map(|(_, id)| id.to_string())
            .collect();
        self.finder.selected = 0;
    }

    pub fn finder_choose(&mut self) {
        if let Some(id) = self.finder.results.get(self.finder.selected).cloned() {
            self.focus_on(&id);
        }
        self.screen = AppScreen::Map;
    }
}
