use clap::ValueEnum;

use crate::processing::statistics::SampleStats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Three human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON object with every statistic, including `n`.
    Json,
}

/// Correlation to 3 decimal places, each mean/stdev pair to 2.
pub fn text_report(stats: &SampleStats) -> String {
    format!(
        "linear correlation in critic score vs global sales: {:.3}\n\
         mean critic score: {:.2}, stdev: {:.2}\n\
         mean global sales: {:.2}, stdev: {:.2}",
        stats.r, stats.mean_x, stats.sd_x, stats.mean_y, stats.sd_y
    )
}

pub fn json_report(stats: &SampleStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}

pub fn render_report(stats: &SampleStats, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(text_report(stats)),
        ReportFormat::Json => json_report(stats),
    }
}
