//! Canvas Charts
//!
//! Draws a [`ChartConfig`] on an HTML5 canvas: line (with filled area),
//! bar and doughnut. Each live chart redraws itself on window resize until
//! it is destroyed.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use hydrowatch::chart::{ChartConfig, ChartError, ChartInstance, ChartKind, ChartSurface, LegendPosition};

/// Axis and label text
const TEXT_COLOR: &str = "#64748b"; // slate-500
/// Horizontal grid lines
const GRID_COLOR: &str = "rgba(148, 163, 184, 0.3)";
const FONT: &str = "12px sans-serif";

/// Number of value-axis intervals
const Y_TICKS: usize = 5;
/// Bar width as a share of its band
const BAR_FILL: f64 = 0.6;
/// Doughnut hole as a share of the outer radius
const CUTOUT: f64 = 0.6;
const LEGEND_HEIGHT: f64 = 28.0;

/// A canvas element charts can be drawn into
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartSurface for CanvasSurface {
    type Instance = CanvasChart;

    fn construct(&mut self, config: &ChartConfig) -> Result<CanvasChart, ChartError> {
        CanvasChart::new(self.canvas.clone(), config.clone())
    }
}

/// A chart currently drawn on a canvas
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl CanvasChart {
    fn new(canvas: HtmlCanvasElement, config: ChartConfig) -> Result<Self, ChartError> {
        draw(&canvas, &config)?;

        let on_resize = if config.options.responsive {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = draw(&canvas, &config) {
                    web_sys::console::warn_1(&format!("Chart redraw failed: {}", e).into());
                }
            });
            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                    .map_err(|_| ChartError::Backend("cannot listen for resize".to_string()))?;
            }
            Some(closure)
        } else {
            None
        };

        Ok(Self { canvas, on_resize })
    }
}

impl ChartInstance for CanvasChart {
    fn destroy(self) {
        if let (Some(window), Some(closure)) = (web_sys::window(), self.on_resize.as_ref()) {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        if let Ok(ctx) = context_2d(&self.canvas) {
            ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
            ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ChartError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| ChartError::Backend("2d context unavailable".to_string()))
}

/// Match the backing store to the element's CSS size; returns that size
fn fit_to_element(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f64, f64) {
    let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let width = canvas.client_width().max(1) as f64;
    let height = canvas.client_height().max(1) as f64;

    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);
    ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0).ok();

    (width, height)
}

/// Draw the whole chart from scratch
fn draw(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<(), ChartError> {
    let ctx = context_2d(canvas)?;
    let (width, height) = fit_to_element(canvas, &ctx);
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_font(FONT);

    match config.kind {
        ChartKind::Line | ChartKind::Bar => {
            let legend_at_top = config.options.legend == LegendPosition::Top;
            let area = PlotArea::new(width, height, legend_at_top);
            let max = axis_max(config);

            draw_value_axis(&ctx, &area, max);
            if config.kind == ChartKind::Line {
                draw_line(&ctx, &area, config, max);
            } else {
                draw_bars(&ctx, &area, config, max);
            }
            draw_category_labels(&ctx, &area, config);
            draw_series_legend(&ctx, width, area.legend_y(height), config);
        }
        ChartKind::Doughnut => draw_doughnut(&ctx, width, height, config),
    }

    Ok(())
}

fn draw_value_axis(ctx: &CanvasRenderingContext2d, area: &PlotArea, max: f64) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");

    for i in 0..=Y_TICKS {
        let value = max * i as f64 / Y_TICKS as f64;
        let y = area.y(value, max);

        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let _ = ctx.fill_text(&format_tick(value), area.left - 8.0, y);
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, area: &PlotArea, config: &ChartConfig, max: f64) {
    let values = &config.dataset.data;
    if values.is_empty() {
        return;
    }

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (area.x_point(i, values.len()), area.y(*v, max)))
        .collect();

    // Filled area under the line
    if config.dataset.fill {
        ctx.begin_path();
        ctx.move_to(points[0].0, area.y(0.0, max));
        ctx.line_to(points[0].0, points[0].1);
        trace_curve(ctx, &points, config.dataset.tension);
        ctx.line_to(points[points.len() - 1].0, area.y(0.0, max));
        ctx.close_path();
        ctx.set_fill_style(&config.color_at(0).into());
        ctx.fill();
    }

    ctx.begin_path();
    ctx.move_to(points[0].0, points[0].1);
    trace_curve(ctx, &points, config.dataset.tension);
    ctx.set_stroke_style(&config.dataset.border_color.as_str().into());
    ctx.set_line_width(config.dataset.border_width);
    ctx.stroke();

    ctx.set_fill_style(&config.dataset.border_color.as_str().into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Continue the current path through `points[1..]`
fn trace_curve(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)], tension: f64) {
    for i in 1..points.len() {
        if tension > 0.0 {
            let (c1, c2) = control_points(points, i, tension);
            ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, points[i].0, points[i].1);
        } else {
            ctx.line_to(points[i].0, points[i].1);
        }
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, area: &PlotArea, config: &ChartConfig, max: f64) {
    let values = &config.dataset.data;
    let baseline = area.y(0.0, max);

    for (i, value) in values.iter().enumerate() {
        let (band_start, band_width) = area.band(i, values.len());
        let bar_width = band_width * BAR_FILL;
        let x = band_start + (band_width - bar_width) / 2.0;
        let y = area.y(*value, max);

        ctx.set_fill_style(&config.color_at(i).into());
        ctx.fill_rect(x, y, bar_width, baseline - y);

        if config.dataset.border_width > 0.0 {
            ctx.set_stroke_style(&config.dataset.border_color.as_str().into());
            ctx.set_line_width(config.dataset.border_width);
            ctx.stroke_rect(x, y, bar_width, baseline - y);
        }
    }
}

fn draw_category_labels(ctx: &CanvasRenderingContext2d, area: &PlotArea, config: &ChartConfig) {
    let n = config.labels.len();
    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");

    for (i, label) in config.labels.iter().enumerate() {
        let x = match config.kind {
            ChartKind::Bar => {
                let (start, width) = area.band(i, n);
                start + width / 2.0
            }
            _ => area.x_point(i, n),
        };
        let _ = ctx.fill_text(label, x, area.top + area.height + 8.0);
    }
}

fn draw_series_legend(ctx: &CanvasRenderingContext2d, width: f64, y: f64, config: &ChartConfig) {
    let label = &config.dataset.label;
    let text_width = ctx.measure_text(label).map(|m| m.width()).unwrap_or(0.0);
    let x = (width - text_width) / 2.0;

    ctx.set_fill_style(&config.dataset.border_color.as_str().into());
    ctx.fill_rect(x - 18.0, y - 5.0, 12.0, 10.0);

    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(label, x, y);
}

fn draw_doughnut(ctx: &CanvasRenderingContext2d, width: f64, height: f64, config: &ChartConfig) {
    let legend_rows = config.labels.len() as f64;
    let legend_height = legend_rows * 18.0 + 8.0;

    let chart_height = (height - legend_height).max(height * 0.5);
    let (legend_top, chart_top) = match config.options.legend {
        LegendPosition::Top => (8.0, legend_height),
        LegendPosition::Bottom => (chart_height + 4.0, 0.0),
    };

    let cx = width / 2.0;
    let cy = chart_top + (chart_height - legend_height.min(chart_height * 0.1)) / 2.0;
    let outer = (width.min(chart_height) / 2.0 - 8.0).max(4.0);
    let inner = outer * CUTOUT;

    for (i, (start, end)) in slice_angles(&config.dataset.data).into_iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.set_fill_style(&config.color_at(i).into());
        ctx.fill();

        ctx.set_stroke_style(&config.dataset.border_color.as_str().into());
        ctx.set_line_width(config.dataset.border_width);
        ctx.stroke();
    }

    // One legend row per slice
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    let x = cx - 60.0;
    for (i, label) in config.labels.iter().enumerate() {
        let y = legend_top + 9.0 + i as f64 * 18.0;
        ctx.set_fill_style(&config.color_at(i).into());
        ctx.fill_rect(x, y - 5.0, 12.0, 10.0);

        ctx.set_fill_style(&TEXT_COLOR.into());
        let value = config.dataset.data.get(i).copied().unwrap_or(0.0);
        let _ = ctx.fill_text(&format!("{} ({})", label, format_tick(value)), x + 18.0, y);
    }
}

/// Plotting rectangle of a cartesian chart, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    const MARGIN_LEFT: f64 = 56.0;
    const MARGIN_RIGHT: f64 = 16.0;
    const MARGIN_BOTTOM: f64 = 32.0;

    fn new(width: f64, height: f64, legend_at_top: bool) -> Self {
        let (top, bottom) = if legend_at_top {
            (LEGEND_HEIGHT, Self::MARGIN_BOTTOM)
        } else {
            (12.0, Self::MARGIN_BOTTOM + LEGEND_HEIGHT)
        };

        Self {
            left: Self::MARGIN_LEFT,
            top,
            width: (width - Self::MARGIN_LEFT - Self::MARGIN_RIGHT).max(1.0),
            height: (height - top - bottom).max(1.0),
        }
    }

    /// Vertical center of the legend row
    fn legend_y(&self, canvas_height: f64) -> f64 {
        if self.top >= LEGEND_HEIGHT {
            LEGEND_HEIGHT / 2.0
        } else {
            canvas_height - LEGEND_HEIGHT / 2.0
        }
    }

    /// Canvas y for a value on a 0..=max axis (canvas y grows downward)
    fn y(&self, value: f64, max: f64) -> f64 {
        let max = if max > 0.0 { max } else { 1.0 };
        self.top + self.height - (value / max) * self.height
    }

    /// x of point `i` of `n`, spread edge to edge; a single point is centered
    fn x_point(&self, i: usize, n: usize) -> f64 {
        if n <= 1 {
            self.left + self.width / 2.0
        } else {
            self.left + (i as f64 / (n - 1) as f64) * self.width
        }
    }

    /// (start, width) of category band `i` of `n`
    fn band(&self, i: usize, n: usize) -> (f64, f64) {
        let width = self.width / n.max(1) as f64;
        (self.left + i as f64 * width, width)
    }
}

/// Top of the value axis; the axis always starts at zero
fn axis_max(config: &ChartConfig) -> f64 {
    nice_max(config.max_value())
}

/// Round an axis maximum up to 1, 2 or 5 times a power of ten
fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Start/end angles of each doughnut slice, clockwise from 12 o'clock.
/// Negative values get an empty slice.
fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    use std::f64::consts::{FRAC_PI_2, TAU};

    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut start = -FRAC_PI_2;

    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 { v.max(0.0) / total * TAU } else { 0.0 };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Bezier control points for the segment ending at `points[i]`
fn control_points(points: &[(f64, f64)], i: usize, tension: f64) -> ((f64, f64), (f64, f64)) {
    let p1 = points[i - 1];
    let p0 = if i >= 2 { points[i - 2] } else { p1 };
    let p2 = points[i];
    let p3 = if i + 1 < points.len() { points[i + 1] } else { p2 };

    let k = tension / 2.0;
    let c1 = (p1.0 + (p2.0 - p0.0) * k, p1.1 + (p2.1 - p0.1) * k);
    let c2 = (p2.0 - (p3.0 - p1.0) * k, p2.1 - (p3.1 - p1.1) * k);
    (c1, c2)
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
