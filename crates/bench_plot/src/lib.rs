
// top-level library module: log files in, chart files out

pub mod chart;
pub mod error;
pub mod host;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use bench_log::{Arity, BenchmarkLog, Environment, Family};

pub use chart::{BarChart, ChartSet, MetricChoice, build_charts};
pub use error::PlotError;
pub use render::{OutputFormat, render};

/// Settings shared by every file of one run.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Forced benchmark family; detected per file when `None`.
    pub family: Option<Family>,
    pub output_dir: PathBuf,
    pub formats: Vec<OutputFormat>,
    pub chart_sets: Vec<ChartSet>,
    pub metric: MetricChoice,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            family: None,
            output_dir: PathBuf::from("."),
            formats: vec![OutputFormat::Svg, OutputFormat::Png],
            chart_sets: vec![ChartSet::All, ChartSet::Openmp],
            metric: MetricChoice::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Paths of the chart files written.
    Rendered(Vec<PathBuf>),
    /// Header was fine but there was nothing to plot.
    Empty,
}

/// Reads one log and interprets it, without drawing anything.
///
/// Returns `None` for the log when no known family shows up in it; the
/// header is still checked so a broken file is reported as such.
pub fn load_log(path: &Path, family: Option<Family>) -> Result<Option<BenchmarkLog>, PlotError> {
    let text = fs::read_to_string(path).map_err(|source| PlotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let log_error = |source| PlotError::Log {
        path: path.to_path_buf(),
        source,
    };

    match family.or_else(|| Family::detect(&text)) {
        Some(family) => BenchmarkLog::parse(&text, family).map(Some).map_err(log_error),
        None => {
            let lines: Vec<&str> = text.lines().collect();
            Environment::from_header(&lines, Arity::One).map_err(log_error)?;
            Ok(None)
        }
    }
}

/// Interprets one log file and writes its charts.
pub fn process_file(path: &Path, options: &PlotOptions) -> Result<FileOutcome, PlotError> {
    let Some(parsed) = load_log(path, options.family)? else {
        log::warn!("{}: no known benchmark family found, skipping", path.display());
        return Ok(FileOutcome::Empty);
    };

    if parsed.records.is_empty() {
        log::warn!(
            "{}: no {} records found, nothing to plot",
            path.display(),
            parsed.family
        );
        return Ok(FileOutcome::Empty);
    }

    log::info!(
        "{}: {} {} records on {} ({})",
        path.display(),
        parsed.records.len(),
        parsed.family,
        parsed.environment.cpu_model,
        parsed.environment.os_name
    );

    let mut written = Vec::new();
    for chart in build_charts(&parsed, &options.chart_sets, options.metric) {
        let paths =
            render(&chart, &options.output_dir, &options.formats).map_err(|source| {
                PlotError::Render {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        written.extend(paths);
    }

    if written.is_empty() {
        log::warn!("{}: no record has a value to plot, nothing written", path.display());
        return Ok(FileOutcome::Empty);
    }

    Ok(FileOutcome::Rendered(written))
}
