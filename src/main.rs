mod cli;

use anyhow::Context;
use clap::Parser;
use criticplot::data::{extract, loader};
use criticplot::processing::statistics::SampleStats;
use criticplot::render::scatter;
use criticplot::report::{self, ReportFormat};
use tracing::{info, warn};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let records = loader::load_records(&cli.input)
        .with_context(|| format!("Failed to load records from {:?}", cli.input))?;

    let sample = extract::extract_sample(&records);
    info!(
        records = records.len(),
        valid = sample.len(),
        "built critic score / global sales sample"
    );

    let stats = SampleStats::compute(&sample);
    if stats.is_degenerate() {
        warn!(n = stats.n, "fewer than two valid rows; statistics default to 0");
    }

    let report = report::render_report(&stats, cli.format).context("Failed to format report")?;
    println!("{report}");

    if cli.no_plot {
        return Ok(());
    }

    // A failed plot never discards the report printed above.
    let status = match scatter::render_scatter(&sample, &cli.output, &cli.plot_options()) {
        Ok(()) => {
            info!(path = %cli.output.display(), "scatter plot written");
            format!("made scatter plot: {}", cli.output.display())
        }
        Err(e) => {
            warn!("plot rendering failed: {e}");
            format!("Could not create plot: {e}")
        }
    };

    match cli.format {
        ReportFormat::Text => println!("{status}"),
        // Keep stdout parseable as a single JSON document.
        ReportFormat::Json => eprintln!("{status}"),
    }

    Ok(())
}
