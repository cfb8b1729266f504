// Turns an interpreted log into the bar charts we draw.

use bench_log::{BenchmarkLog, Environment, Family, LogRecord, OperationClass, filename_safe};

/// Which records a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSet {
    All,
    /// OpenMP variants only.
    Openmp,
    /// Everything except the OpenMP variants.
    Singlecore,
}

impl ChartSet {
    fn includes(self, record: &LogRecord) -> bool {
        match self {
            ChartSet::All => true,
            ChartSet::Openmp => record.is_parallel(),
            ChartSet::Singlecore => !record.is_parallel(),
        }
    }

    fn file_tag(self) -> &'static str {
        match self {
            ChartSet::All => "all",
            ChartSet::Openmp => "openmp",
            ChartSet::Singlecore => "singlecore",
        }
    }

    fn scope(self) -> &'static str {
        match self {
            ChartSet::All => "Various",
            ChartSet::Openmp => "OpenMP",
            ChartSet::Singlecore => "Single-Core",
        }
    }

    /// Canvas size in pixels; the parallel charts carry longer labels.
    fn size(self) -> (u32, u32) {
        match self {
            ChartSet::Openmp => (1700, 900),
            _ => (1500, 800),
        }
    }
}

/// What the bars measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MetricChoice {
    /// MFLOPS for families that report it, elapsed time otherwise.
    #[default]
    Auto,
    Mflops,
    Elapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Mflops,
    Elapsed,
}

impl Metric {
    fn resolve(choice: MetricChoice, family: Family) -> Self {
        match choice {
            MetricChoice::Mflops => Metric::Mflops,
            MetricChoice::Elapsed => Metric::Elapsed,
            MetricChoice::Auto if family.reports_throughput() => Metric::Mflops,
            MetricChoice::Auto => Metric::Elapsed,
        }
    }

    fn value(self, record: &LogRecord) -> Option<f64> {
        match self {
            Metric::Mflops => record.throughput_mflops,
            Metric::Elapsed => Some(record.elapsed_seconds),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Metric::Mflops => "MFLOPS",
            Metric::Elapsed => "Elapsed Time",
        }
    }

    fn axis(self) -> &'static str {
        match self {
            Metric::Mflops => "MFLOPS",
            Metric::Elapsed => "Elapsed Time (s)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub class: OperationClass,
}

/// Everything the renderer needs for one output chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_desc: String,
    pub bars: Vec<Bar>,
    /// Output file name without extension.
    pub file_stem: String,
    pub size: (u32, u32),
}

impl BarChart {
    /// Upper end of the value axis, leaving headroom for the bar labels.
    pub fn y_max(&self) -> f64 {
        let max = self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        if max > 0.0 { max * 1.1 } else { 1.0 }
    }
}

/// Builds one chart per requested set, skipping sets with nothing to show.
pub fn build_charts(parsed: &BenchmarkLog, sets: &[ChartSet], choice: MetricChoice) -> Vec<BarChart> {
    let metric = Metric::resolve(choice, parsed.family);

    sets.iter()
        .filter_map(|&set| {
            let bars: Vec<Bar> = parsed
                .records
                .iter()
                .filter(|r| set.includes(r))
                .filter_map(|r| {
                    let value = metric.value(r);
                    if value.is_none() {
                        log::warn!("{}: no {} value, left out", r.operation, metric.title());
                    }
                    Some(Bar {
                        label: r.operation.clone(),
                        value: value?,
                        class: r.class(),
                    })
                })
                .collect();

            if bars.is_empty() {
                log::info!("no {} operations to plot", set.file_tag());
                return None;
            }

            Some(BarChart {
                title: format!(
                    "{} for {} GMP Operations on {} ({}, prec={})",
                    metric.title(),
                    set.scope(),
                    parsed.environment.cpu_model,
                    dims_title(&parsed.environment),
                    parsed.environment.precision_bits
                ),
                y_desc: metric.axis().to_string(),
                bars,
                file_stem: file_stem(set, &parsed.environment),
                size: set.size(),
            })
        })
        .collect()
}

/// `<set>_operations_<os>_<cpu>_<dims>_<prec>`
pub fn file_stem(set: ChartSet, env: &Environment) -> String {
    let cpu = if env.cpu_model.is_empty() {
        "Unknown".to_string()
    } else {
        filename_safe(&env.cpu_model)
    };
    let dims = match env.dimension_x {
        Some(dim_x) => format!("{dim_x}_{}", env.dimension),
        None => env.dimension.to_string(),
    };

    format!(
        "{}_operations_{}_{}_{}_{}",
        set.file_tag(),
        filename_safe(&env.os_name),
        cpu,
        dims,
        env.precision_bits
    )
}

fn dims_title(env: &Environment) -> String {
    match env.dimension_x {
        Some(dim_x) => format!(
            "dim=({}, {})",
            group_thousands(dim_x),
            group_thousands(env.dimension)
        ),
        None => format!("dim={}", group_thousands(env.dimension)),
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
