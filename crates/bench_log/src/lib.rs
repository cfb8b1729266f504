#[cfg(test)]
mod tests;

// Interpreter for the plain-text logs written by the GMP benchmark runs.
//
// A log is a short header (OS, CPU, dimensions and precision) followed by
// interleaved invocation / timing lines. Nothing here touches the file
// system; callers hand in text and get structured records back.

pub mod classify;
pub mod cpu;
pub mod error;
pub mod family;
pub mod header;
pub mod record;

pub use classify::{OperationClass, is_parallel};
pub use cpu::{UNKNOWN_CPU_MODEL, filename_safe, raw_cpu_model_from_cpuinfo, sanitize_cpu_model};
pub use error::{LogError, Result};
pub use family::{Arity, Family};
pub use header::Environment;
pub use record::{LogRecord, extract_records};

/// Everything extracted from one benchmark log.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkLog {
    pub family: Family,
    pub environment: Environment,
    pub records: Vec<LogRecord>,
}

impl BenchmarkLog {
    /// Interprets a log that has already been split into lines.
    ///
    /// __Arguments:__
    ///
    /// + `lines` - the log, one entry per line, without line terminators
    ///
    /// + `family` - the benchmark family the log was produced by; decides
    ///   the header schema and the invocation pattern
    ///
    pub fn from_lines<S: AsRef<str>>(lines: &[S], family: Family) -> Result<Self> {
        let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        let environment = Environment::from_header(&lines, family.arity())?;
        let records = extract_records(&lines.join("\n"), family)?;

        Ok(Self {
            family,
            environment,
            records,
        })
    }

    /// Interprets the full text of a log.
    pub fn parse(text: &str, family: Family) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines, family)
    }

    pub fn parallel_records(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter().filter(|r| r.is_parallel())
    }
}
