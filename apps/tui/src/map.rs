// Map boundary: drawable containers and the coordinate <-> cell transform.
// The renderer only talks to these primitives, never to the terminal canvas.

use crate::domain::MarkerShape;
use ratatui::layout::Rect;
use ratatui::style::Color;

const METRES_PER_DEGREE: f64 = 111_320.0;
const MIN_SPAN_M: f64 = 500.0;
const MAX_SPAN_M: f64 = 40_000.0;
const ZOOM_FACTOR: f64 = 1.5;

/// Fill opacity used for every radius circle.
pub const CIRCLE_FILL_OPACITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Content shown when a marker is selected. Deleting goes through `facility_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPopup {
    pub facility_id: String,
    pub name: String,
    pub address: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub facility_id: String,
    pub position: LatLng,
    pub color: String,
    pub shape: MarkerShape,
    pub draggable: bool,
    pub popup: MarkerPopup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: LatLng,
    pub radius_m: f64,
    pub color: String,
    pub fill_opacity: f64,
}

/// A container that owns every drawable of one category.
pub trait RenderTarget {
    fn clear(&mut self);
    fn add_marker(&mut self, marker: Marker);
    fn add_circle(&mut self, circle: Circle);
    fn markers(&self) -> &[Marker];
    fn circles(&self) -> &[Circle];

    fn is_empty(&self) -> bool {
        self.markers().is_empty() && self.circles().is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Layer {
    markers: Vec<Marker>,
    circles: Vec<Circle>,
}

impl Layer {
    pub const fn new() -> Self {
        Self {
            markers: Vec::new(),
            circles: Vec::new(),
        }
    }

    pub fn marker_for(&self, facility_id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.facility_id == facility_id)
    }
}

impl RenderTarget for Layer {
    fn clear(&mut self) {
        self.markers.clear();
        self.circles.clear();
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn circles(&self) -> &[Circle] {
        &self.circles
    }
}

/// Transform between geographic coordinates and planar metres.
pub trait Projection {
    fn project(&self, point: LatLng) -> (f64, f64);
    fn unproject(&self, x: f64, y: f64) -> LatLng;
}

/// Local equirectangular view centred on `center`, `span_m` metres wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub span_m: f64,
}

impl Viewport {
    pub const fn new(center: LatLng, span_m: f64) -> Self {
        Self { center, span_m }
    }

    pub const fn center(&self) -> LatLng {
        self.center
    }

    fn metres_per_degree_lng(&self) -> f64 {
        METRES_PER_DEGREE * self.center.lat.to_radians().cos()
    }

    /// Canvas bounds in metres for an area of terminal cells.
    /// A cell is roughly twice as tall as it is wide.
    pub fn bounds(&self, area: Rect) -> ([f64; 2], [f64; 2]) {
        let half_w = self.span_m / 2.0;
        let half_h = if area.width == 0 {
            half_w
        } else {
            half_w * f64::from(area.height) * 2.0 / f64::from(area.width)
        };
        ([-half_w, half_w], [-half_h, half_h])
    }

    /// Terminal cell (absolute column, row) a coordinate falls in, if visible.
    pub fn to_cell(&self, point: LatLng, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let ([x_min, x_max], [y_min, y_max]) = self.bounds(area);
        let (x, y) = self.project(point);
        let fx = (x - x_min) / (x_max - x_min);
        let fy = (y_max - y) / (y_max - y_min);
        if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let col = (fx * f64::from(area.width)).floor() as u16;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (fy * f64::from(area.height)).floor() as u16;
        Some((area.x + col, area.y + row))
    }

    /// Coordinate at the middle of an absolute terminal cell.
    pub fn from_cell(&self, column: u16, row: u16, area: Rect) -> LatLng {
        let ([x_min, x_max], [y_min, y_max]) = self.bounds(area);
        let width = f64::from(area.width.max(1));
        let height = f64::from(area.height.max(1));
        let col = f64::from(column.saturating_sub(area.x)) + 0.5;
        let row = f64::from(row.saturating_sub(area.y)) + 0.5;
        let x = (col / width).mul_add(x_max - x_min, x_min);
        let y = (row / height).mul_add(-(y_max - y_min), y_max);
        self.unproject(x, y)
    }

    /// Pan by a fraction of the visible width (east/north positive).
    pub fn pan(&mut self, dx_fraction: f64, dy_fraction: f64) {
        let (x, y) = (dx_fraction * self.span_m, dy_fraction * self.span_m);
        self.center = self.unproject(x, y);
    }

    pub fn zoom_in(&mut self) {
        self.span_m = (self.span_m / ZOOM_FACTOR).max(MIN_SPAN_M);
    }

    pub fn zoom_out(&mut self) {
        self.span_m = (self.span_m * ZOOM_FACTOR).min(MAX_SPAN_M);
    }

    /// Metres covered by one cell horizontally.
    pub fn metres_per_cell(&self, area: Rect) -> f64 {
        self.span_m / f64::from(area.width.max(1))
    }
}

impl Projection for Viewport {
    fn project(&self, point: LatLng) -> (f64, f64) {
        let x = (point.lng - self.center.lng) * self.metres_per_degree_lng();
        let y = (point.lat - self.center.lat) * METRES_PER_DEGREE;
        (x, y)
    }

    fn unproject(&self, x: f64, y: f64) -> LatLng {
        LatLng::new(
            self.center.lat + y / METRES_PER_DEGREE,
            self.center.lng + x / self.metres_per_degree_lng(),
        )
    }
}

/// Parse `#rrggbb` or `#rgb` into a terminal colour. Anything else is grey.
pub fn parse_hex_color(value: &str) -> Color {
    let hex = value.trim().trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    if !hex.is_ascii() {
        return Color::Gray;
    }
    let rgb = match hex.len() {
        6 => channel(&hex[0..2]).zip(channel(&hex[2..4])).zip(channel(&hex[4..6])),
        3 => channel(&hex[0..1])
            .zip(channel(&hex[1..2]))
            .zip(channel(&hex[2..3]))
            .map(|((r, g), b)| ((r * 17, g * 17), b * 17)),
        _ => None,
    };
    rgb.map_or(Color::Gray, |((r, g), b)| Color::Rgb(r, g, b))
}
