use crate::dataset::Observations;
use crate::error::{RegressionError, RegressionResult};
use crate::report::RegressionReport;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 600;
pub const DEFAULT_PLOT_PATH: &str = "regression_plot.png";

const POINT_COLOR: RGBColor = RED;
const LINE_COLOR: RGBColor = BLUE;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { width: PLOT_WIDTH, height: PLOT_HEIGHT, font_size: 16 }
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> RegressionError {
    RegressionError::Plot(e.to_string())
}

/// Renders the observed pairs and the fitted line to `path`.
///
/// A `.svg` extension selects the SVG backend, anything else is written as a
/// bitmap whose format follows the extension.
pub fn draw_regression_plot<P: AsRef<Path>>(
    obs: &Observations,
    report: &RegressionReport,
    path: P,
    config: &PlotConfig,
) -> RegressionResult<()> {
    let path = path.as_ref();
    let size = (config.width, config.height);
    let is_svg = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        draw_on(SVGBackend::new(path, size).into_drawing_area(), obs, report, config)
    } else {
        draw_on(BitMapBackend::new(path, size).into_drawing_area(), obs, report, config)
    }
}

/// Inner margin of the annotation box, in pixels.
const BOX_PAD: i32 = 8;
const LINE_GAP: i32 = 4;

/// Lower-right corner of a box at `origin` holding two stacked text rows of
/// the given (width, height).
fn annotation_corner(origin: (i32, i32), sizes: [(u32, u32); 2]) -> (i32, i32) {
    let width = sizes[0].0.max(sizes[1].0) as i32;
    let height = (sizes[0].1 + sizes[1].1) as i32;
    (origin.0 + width + 2 * BOX_PAD, origin.1 + height + LINE_GAP + 2 * BOX_PAD)
}

/// (lo, hi) widened by 5% on both sides; a zero-width span gets a unit pad.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

fn draw_on<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    obs: &Observations,
    report: &RegressionReport,
    config: &PlotConfig,
) -> RegressionResult<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let line = report.line_points();
    let (x_min, x_max) = report.x_range;
    let (y_min, y_max) = obs
        .y_range()
        .map(|(lo, hi)| (lo.min(line[0].1).min(line[1].1), hi.max(line[0].1).max(line[1].1)))
        .ok_or_else(|| RegressionError::InsufficientData { len: obs.len(), needed: 2 })?;

    let (x_lo, x_hi) = padded(x_min, x_max);
    let (y_lo, y_hi) = padded(y_min, y_max);

    let title = format!("{} vs {}", report.y_column, report.x_column);

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", config.font_size + 4).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(report.x_column.as_str())
        .y_desc(report.y_column.as_str())
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(obs.pairs().map(|point| Circle::new(point, 4, POINT_COLOR.filled())))
        .map_err(plot_err)?
        .label("Actual data")
        .legend(|(x, y)| Circle::new((x, y), 4, POINT_COLOR.filled()));

    chart
        .draw_series(LineSeries::new(line, LINE_COLOR.stroke_width(2)))
        .map_err(plot_err)?
        .label("Regression line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    // equation box in the top-left corner of the plotting area
    let (x_px, y_px) = chart.plotting_area().get_pixel_range();
    let left = x_px.start + 15;
    let top = y_px.start + 15;
    let font = ("sans-serif", config.font_size).into_font();

    let lines = [report.equation(), report.r_squared_label()];
    let sizes = [
        font.box_size(&lines[0]).map_err(plot_err)?,
        font.box_size(&lines[1]).map_err(plot_err)?,
    ];
    let corner = annotation_corner((left, top), sizes);

    root.draw(&Rectangle::new([(left, top), corner], WHITE.filled())).map_err(plot_err)?;
    root.draw(&Rectangle::new([(left, top), corner], BLACK.stroke_width(1))).map_err(plot_err)?;
    let [equation, r2_label] = lines;
    root.draw(&Text::new(equation, (left + BOX_PAD, top + BOX_PAD), font.clone()))
        .map_err(plot_err)?;
    let second_row = top + BOX_PAD + sizes[0].1 as i32 + LINE_GAP;
    root.draw(&Text::new(r2_label, (left + BOX_PAD, second_row), font)).map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
