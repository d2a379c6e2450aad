use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use tracing::debug;

use crate::data::extract::CoordinatePair;
use crate::error::PlotError;

pub const TITLE: &str = "Critic Score vs Global Sales";
pub const X_LABEL: &str = "Critic Score";
pub const Y_LABEL: &str = "Global Sales (millions)";

/// Critic scores are percentages.
pub const X_RANGE: Range<f64> = 0.0..100.0;

const Y_PAD_FRACTION: f64 = 0.05;
const Y_PAD_EPSILON: f64 = 1e-6;

const POINT_COLOR: RGBAColor = RGBAColor(52, 120, 246, 180.0 / 255.0);
const GRID_COLOR: RGBColor = RGBColor(192, 192, 192);
const POINT_RADIUS: i32 = 3;

/// Largest raster accepted, in pixels (a 16384x16384 canvas).
pub const MAX_PIXELS: u64 = 16_384 * 16_384;

/// DejaVu Sans, bundled so chart text renders without system fonts.
static CHART_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

/// Axis ranges for a sample: x is fixed to the score scale, y runs from 0 to
/// 5% above the largest sales value (plus a hair so it is never empty).
/// `None` for an empty sample.
pub fn axis_ranges(sample: &[CoordinatePair]) -> Option<(Range<f64>, Range<f64>)> {
    if sample.is_empty() {
        return None;
    }
    let max_y = sample.iter().map(|p| p.y).fold(0.0, f64::max);
    let pad = max_y * Y_PAD_FRACTION + Y_PAD_EPSILON;
    Some((X_RANGE, 0.0..max_y + pad))
}

/// Render the sample as a scatter plot and write it to `path`.
///
/// The chart is rasterised in memory and encoded before the output file is
/// created, so a failed render never leaves a truncated image behind. The
/// encoding follows the file extension and defaults to PNG.
pub fn render_scatter(
    sample: &[CoordinatePair],
    path: &Path,
    options: &PlotOptions,
) -> Result<(), PlotError> {
    let (x_range, y_range) = axis_ranges(sample).ok_or(PlotError::EmptySample)?;
    let PlotOptions { width, height } = *options;
    let buffer_len = raster_len(width, height).ok_or(PlotError::InvalidSize { width, height })?;
    ensure_font()?;

    let mut pixels = vec![0u8; buffer_len];
    draw_chart(&mut pixels, (width, height), sample, x_range, y_range)?;

    let image = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| PlotError::Draw("pixel buffer does not match image size".to_string()))?;
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let mut encoded = Cursor::new(Vec::new());
    image.write_to(&mut encoded, format)?;

    let io_error = |source: std::io::Error| PlotError::Io {
        path: path.to_path_buf(),
        source,
    };
    {
        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(encoded.get_ref()).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }

    debug!(
        points = sample.len(),
        path = %path.display(),
        ?format,
        "wrote scatter plot"
    );
    Ok(())
}

/// Byte length of an RGB buffer for the given size, or `None` when a side is
/// zero or the canvas exceeds [`MAX_PIXELS`].
fn raster_len(width: u32, height: u32) -> Option<usize> {
    let pixels = u64::from(width).checked_mul(u64::from(height))?;
    if pixels == 0 || pixels > MAX_PIXELS {
        return None;
    }
    usize::try_from(pixels.checked_mul(3)?).ok()
}

fn ensure_font() -> Result<(), PlotError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let registered = *REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, CHART_FONT).is_ok());
    if registered {
        Ok(())
    } else {
        Err(PlotError::Draw("bundled chart font could not be loaded".to_string()))
    }
}

fn draw_chart(
    pixels: &mut [u8],
    size: (u32, u32),
    sample: &[CoordinatePair],
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), PlotError> {
    let root = BitMapBackend::with_buffer(pixels, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, (FONT_FAMILY, 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style((FONT_FAMILY, 14).into_font())
        .axis_desc_style((FONT_FAMILY, 16).into_font())
        .bold_line_style(GRID_COLOR.stroke_width(1))
        .max_light_lines(0)
        .draw()
        .map_err(draw_error)?;

    let points = sample
        .iter()
        .map(|p| Circle::new((p.x, p.y), POINT_RADIUS, POINT_COLOR.filled()));
    chart.draw_series(points).map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

fn draw_error<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}
