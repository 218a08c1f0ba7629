use crate::app::App;
use crate::domain::MarkerShape;
use crate::map::{parse_hex_color, Circle, LatLng, Marker, Projection, RenderTarget};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::canvas::{
    Canvas, Circle as CanvasCircle, Context, Line as CanvasLine, Points,
};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Spacing of the background grid in metres.
const GRID_STEP_M: f64 = 1000.0;
/// A terminal has no alpha; fills are drawn as a dot pattern in a darkened colour.
const FILL_VISIBILITY: f64 = 3.0;

const fn marker_symbol(shape: MarkerShape) -> &'static str {
    match shape {
        MarkerShape::Square => "■",
        MarkerShape::Circle => "●",
    }
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let viewport = app.model.viewport;
    let block = Block::default()
        .title(format!(
            " Map  {:.4}, {:.4}  {:.1} km ",
            viewport.center.lat,
            viewport.center.lng,
            viewport.span_m / 1000.0
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    app.map_area.set(inner);

    let (x_bounds, y_bounds) = viewport.bounds(inner);
    let fill_step = viewport.metres_per_cell(inner);
    let dragged = app.drag.as_ref().map(|d| d.facility_id.as_str());
    let selected = app.selected_marker.as_deref();

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            draw_grid(ctx, x_bounds, y_bounds);

            for (_, config) in app.model.categories.iter() {
                for circle in config.layer.circles() {
                    let (x, y) = viewport.project(circle.center);
                    let color = parse_hex_color(&circle.color);
                    let fill = fill_points(circle, (x, y), fill_step, x_bounds, y_bounds);
                    ctx.draw(&Points {
                        coords: &fill,
                        color: dim(color, circle.fill_opacity * FILL_VISIBILITY),
                    });
                    ctx.draw(&CanvasCircle {
                        x,
                        y,
                        radius: circle.radius_m,
                        color,
                    });
                }
            }
            ctx.layer();

            for marker in app.visible_markers() {
                if Some(marker.facility_id.as_str()) == dragged {
                    continue;
                }
                let highlighted = Some(marker.facility_id.as_str()) == selected;
                print_marker(ctx, &viewport, marker, marker.position, highlighted);
            }

            if let Some(drag) = &app.drag {
                if let Some(marker) = app.visible_markers().find(|m| m.facility_id == drag.facility_id) {
                    print_marker(ctx, &viewport, marker, drag.preview, true);
                }
            }
        });

    f.render_widget(canvas, area);
}

fn print_marker(
    ctx: &mut Context<'_>,
    viewport: &impl Projection,
    marker: &Marker,
    position: LatLng,
    highlighted: bool,
) {
    let (x, y) = viewport.project(position);
    let mut style = Style::default().fg(parse_hex_color(&marker.color));
    if highlighted {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    ctx.print(x, y, Span::styled(marker_symbol(marker.shape), style));
}

/// One point per cell inside both the circle and the visible bounds.
fn fill_points(
    circle: &Circle,
    (cx, cy): (f64, f64),
    step: f64,
    [x_min, x_max]: [f64; 2],
    [y_min, y_max]: [f64; 2],
) -> Vec<(f64, f64)> {
    if step <= 0.0 || circle.fill_opacity <= 0.0 {
        return Vec::new();
    }
    let r = circle.radius_m;
    // Cells are about twice as tall as wide.
    let (x_step, y_step) = (step, step * 2.0);
    let x_span = clip_axis(r, cx, x_min, x_max, x_step);
    let y_span = clip_axis(r, cy, y_min, y_max, y_step);

    let mut points = Vec::new();
    let mut y = y_span[0];
    while y <= y_span[1] {
        let mut x = x_span[0];
        while x <= x_span[1] {
            if x.mul_add(x, y * y) <= r * r {
                points.push((cx + x, cy + y));
            }
            x += x_step;
        }
        y += y_step;
    }
    points
}

/// Offsets from the centre `c` on one axis that are inside both `[-r, r]` and
/// `[lo, hi]`, starting on the grid that begins at `-r`. Empty when the start
/// lies past the end.
fn clip_axis(r: f64, c: f64, lo: f64, hi: f64, step: f64) -> [f64; 2] {
    let skipped = ((lo - c + r) / step).ceil().max(0.0);
    let start = skipped.mul_add(step, -r);
    let end = r.min(hi - c);
    [start, end]
}

/// Scale a colour toward black, keeping `factor` of its intensity.
fn dim(color: Color, factor: f64) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scale = |channel: u8| (f64::from(channel) * factor).round() as u8;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(scale(r), scale(g), scale(b)),
        _ => Color::DarkGray,
    }
}

fn draw_grid(ctx: &mut Context<'_>, [x_min, x_max]: [f64; 2], [y_min, y_max]: [f64; 2]) {
    // Skip the grid when it would be denser than the canvas can show.
    if (x_max - x_min) / GRID_STEP_M > 40.0 {
        return;
    }

    let mut x = (x_min / GRID_STEP_M).ceil() * GRID_STEP_M;
    while x <= x_max {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: y_min,
            x2: x,
            y2: y_max,
            color: Color::Rgb(40, 40, 40),
        });
        x += GRID_STEP_M;
    }

    let mut y = (y_min / GRID_STEP_M).ceil() * GRID_STEP_M;
    while y <= y_max {
        ctx.draw(&CanvasLine {
            x1: x_min,
            y1: y,
            x2: x_max,
            y2: y,
            color: Color::Rgb(40, 40, 40),
        });
        y += GRID_STEP_M;
    }
}
