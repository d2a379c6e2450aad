use std::path::PathBuf;

use clap::{ArgAction, Parser};
use criticplot::render::scatter::PlotOptions;
use criticplot::report::ReportFormat;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "criticplot",
    version,
    about = "Correlate video-game critic scores with global sales and plot them"
)]
pub struct Cli {
    /// CSV or Excel file with one row per game and a header naming the columns.
    #[arg(short, long, env = "CRITICPLOT_INPUT", default_value = "video_game_sales_clean.csv")]
    pub input: PathBuf,

    /// Where to write the scatter plot; the extension picks the image format.
    #[arg(short, long, env = "CRITICPLOT_OUTPUT", default_value = "critic_vs_global.png")]
    pub output: PathBuf,

    /// Plot width in pixels.
    #[arg(long, env = "CRITICPLOT_WIDTH", default_value_t = 900, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Plot height in pixels.
    #[arg(long, env = "CRITICPLOT_HEIGHT", default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Report format written to stdout.
    #[arg(long, value_enum, env = "CRITICPLOT_FORMAT", default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Only print the statistics.
    #[arg(long)]
    pub no_plot: bool,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
