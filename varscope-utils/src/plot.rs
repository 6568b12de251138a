//! Point estimate versus bootstrap median comparison plot

use crate::output::parse_hex_rgb;
use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{info, warn};
use varscope_core::config::PlotConfig;

const AXIS_MAX: f64 = 100.0;
const DIAGONAL_DASHES: usize = 40;

/// One group on the comparison plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    /// Point estimate, percent
    pub x: f64,
    /// Bootstrap median, percent
    pub y: f64,
    /// Bootstrap spread, percent; the bar spans `y +/- scale * err`
    pub err: f64,
    /// `#rrggbb`
    pub color: String,
}

impl PlotPoint {
    pub fn new(
        label: impl Into<String>,
        x: f64,
        y: f64,
        err: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            err,
            color: color.into(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.err.is_finite()
    }
}

/// Render the comparison scatter plot to `output`.
///
/// `.svg` outputs use the SVG backend, anything else is rasterized with the
/// bitmap backend and encoded by extension.
pub fn render_comparison_plot(points: &[PlotPoint], output: &Path, cfg: &PlotConfig) -> Result<()> {
    let drawable = drawable_points(points);
    let offsets = label_offsets(drawable.len(), cfg);
    let size = (cfg.width, cfg.height);

    let rendered = if is_svg(output) {
        let root = SVGBackend::new(output, size).into_drawing_area();
        draw_chart(root, &drawable, &offsets, cfg)
    } else {
        let root = BitMapBackend::new(output, size).into_drawing_area();
        draw_chart(root, &drawable, &offsets, cfg)
    };
    rendered.with_context(|| format!("Failed to render plot to {}", output.display()))?;

    info!(
        "Wrote plot with {} groups to {}",
        drawable.len(),
        output.display()
    );
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// Points that can be placed on the axes; the rest are logged and skipped
fn drawable_points(points: &[PlotPoint]) -> Vec<&PlotPoint> {
    points
        .iter()
        .filter(|p| {
            if p.is_finite() {
                true
            } else {
                warn!(
                    "Skipping {} on plot: non-finite values (x={}, y={}, spread={})",
                    p.label, p.x, p.y, p.err
                );
                false
            }
        })
        .collect()
}

/// Label offsets in axis units, 0 to 4 on each axis per point
fn label_offsets(count: usize, cfg: &PlotConfig) -> Vec<(f64, f64)> {
    if !cfg.label_jitter {
        return vec![(0.0, 0.0); count];
    }

    let mut rng = StdRng::seed_from_u64(cfg.jitter_seed);
    (0..count)
        .map(|_| {
            let dx: i32 = rng.gen_range(0..5);
            let dy: i32 = rng.gen_range(0..5);
            (dx as f64, dy as f64)
        })
        .collect()
}

fn y_axis_label(cfg: &PlotConfig) -> String {
    format!("Freyja boot median +/- {} FWHM", cfg.error_bar_scale)
}

fn rgb(hex: &str) -> RGBColor {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => RGBColor(r, g, b),
        None => {
            warn!("Invalid color '{}', drawing in black", hex);
            BLACK
        }
    }
}

fn plot_error<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow::anyhow!("{}", e)
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    points: &[&PlotPoint],
    offsets: &[(f64, f64)],
    cfg: &PlotConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(plot_error)?;
    let root = root.margin(10, 10, 10, 10);

    let font_size = cfg.font_size as f64;
    let label_area = (cfg.font_size * 3) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(&cfg.title, ("sans-serif", font_size * 1.2))
        .x_label_area_size(label_area)
        .y_label_area_size(label_area)
        .build_cartesian_2d(0.0..AXIS_MAX, 0.0..AXIS_MAX)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Freyja demix prediction")
        .y_desc(y_axis_label(cfg))
        .axis_desc_style(("sans-serif", font_size))
        .label_style(("sans-serif", font_size * 0.8))
        .disable_mesh()
        .draw()
        .map_err(plot_error)?;

    // Dashed y = x reference
    let step = AXIS_MAX / DIAGONAL_DASHES as f64;
    chart
        .draw_series((0..DIAGONAL_DASHES).map(|i| {
            let start = i as f64 * step;
            let end = start + step * 0.6;
            PathElement::new(vec![(start, start), (end, end)], BLACK.stroke_width(2))
        }))
        .map_err(plot_error)?;

    for (point, (dx, dy)) in points.iter().zip(offsets) {
        let color = rgb(&point.color);
        let half_bar = cfg.error_bar_scale * point.err;

        chart
            .draw_series(std::iter::once(ErrorBar::new_vertical(
                point.x,
                point.y - half_bar,
                point.y,
                point.y + half_bar,
                color.stroke_width(2),
                12,
            )))
            .map_err(plot_error)?;

        chart
            .draw_series(std::iter::once(Circle::new(
                (point.x, point.y),
                8,
                color.filled(),
            )))
            .map_err(plot_error)?;

        chart
            .draw_series(std::iter::once(Text::new(
                point.label.clone(),
                (point.x + dx, point.y + dy),
                ("sans-serif", font_size).into_font().color(&color),
            )))
            .map_err(plot_error)?;
    }

    root.present().map_err(plot_error)?;
    Ok(())
}
