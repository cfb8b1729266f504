// CLI that turns GMP benchmark logs into bar charts

use std::path::PathBuf;
use std::process::ExitCode;

use bench_log::Family;
use bench_plot::{ChartSet, FileOutcome, MetricChoice, OutputFormat, PlotOptions, process_file};
use clap::Parser;

// setup command line args

#[derive(Parser)]
#[command(about = "Plot elapsed time and MFLOPS from GMP benchmark logs", long_about = None)]
pub struct CliArgs {
    /// Benchmark log files, one chart set per file.
    #[clap(required = true, value_name = "LOG")]
    paths: Vec<PathBuf>,

    /// Benchmark family of the logs; detected per file if omitted.
    #[clap(long)]
    family: Option<Family>,

    /// Directory the charts are written to.
    #[clap(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output formats: svg (vector) and/or png (raster).
    #[clap(long, value_enum, value_delimiter = ',', default_values_t = [OutputFormat::Svg, OutputFormat::Png])]
    format: Vec<OutputFormat>,

    /// Also plot the operations without OpenMP on their own.
    #[clap(long, action)]
    singlecore: bool,

    #[clap(long, value_enum, default_value_t = MetricChoice::Auto)]
    metric: MetricChoice,
}

impl CliArgs {
    fn plot_options(&self) -> PlotOptions {
        let mut chart_sets = vec![ChartSet::All, ChartSet::Openmp];
        if self.singlecore {
            chart_sets.push(ChartSet::Singlecore);
        }

        PlotOptions {
            family: self.family,
            output_dir: self.output_dir.clone(),
            formats: self.format.clone(),
            chart_sets,
            metric: self.metric,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let options = args.plot_options();

    log::info!("Files to process: {:?}", args.paths);

    let mut rendered = 0;
    let mut failed = 0;

    for path in &args.paths {
        log::info!("Processing file: {}", path.display());

        match process_file(path, &options) {
            Ok(FileOutcome::Rendered(written)) => {
                for chart in &written {
                    log::info!("Wrote {}", chart.display());
                }
                rendered += 1;
            }
            Ok(FileOutcome::Empty) => {}
            Err(err) => {
                log::error!("{err}");
                failed += 1;
            }
        }
    }

    if failed > 0 || rendered == 0 {
        log::error!(
            "{rendered} of {} files plotted, {failed} failed",
            args.paths.len()
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
