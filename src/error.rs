use std::path::PathBuf;

use thiserror::Error;

/// Failures of the record source. Per-field parse problems are never reported
/// here; they only drop the record from the numeric sample.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    #[error("cannot open workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("no sheets found in workbook")]
    NoSheets,
    #[error("no data found in file")]
    Empty,
}

/// Failures of the scatter-plot renderer.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no numeric data to plot")]
    EmptySample,
    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("cannot encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
