//! Prints the host CPU model in the form used for chart file names.

use bench_log::filename_safe;
use bench_plot::host::host_cpu_model;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Print the sanitized CPU model of this machine", long_about = None)]
struct Args {
    /// Keep spaces instead of joining words with underscores.
    #[arg(long)]
    display: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let model = host_cpu_model();

    if args.display {
        println!("{model}");
    } else {
        println!("{}", filename_safe(&model));
    }
}
