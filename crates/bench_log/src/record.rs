// Extraction of timing records from the body of a log.

use regex::Regex;

use crate::classify::{OperationClass, is_parallel};
use crate::family::Family;
use crate::Result;

/// Decimal number as printed by iostream, exponent form included.
const FLOAT: &str = r"\d+(?:\.\d*)?(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?";

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Executable name with `./<prefix>` removed.
    pub operation: String,
    pub elapsed_seconds: f64,
    pub throughput_mflops: Option<f64>,
}

impl LogRecord {
    pub fn class(&self) -> OperationClass {
        OperationClass::of(&self.operation)
    }

    pub fn is_parallel(&self) -> bool {
        is_parallel(&self.operation)
    }
}

/// Builds the record pattern for one family.
///
/// Matches an invocation line (optionally behind `time`), then the
/// `Elapsed time:` line and, when present, the `MFLOPS:` line right after it.
fn record_pattern(family: Family) -> Result<Regex> {
    let pattern = format!(
        concat!(
            r"(?:(?:/usr/bin/)?time[ \t]+)?\./{prefix}(\w+)(?:[ \t]+\d+){{{args}}}[ \t]*\r?\n",
            r"Elapsed time:[ \t]+({float})[ \t]+s[ \t]*",
            r"(?:\r?\nMFLOPS:[ \t]+({float}))?",
        ),
        prefix = regex::escape(family.prefix()),
        args = family.arity().arg_count(),
        float = FLOAT,
    );
    Ok(Regex::new(&pattern)?)
}

/// Pulls every invocation/timing triplet out of `text`, in file order.
///
/// Text between or after triplets (result checks, diagnostics) is skipped.
pub fn extract_records(text: &str, family: Family) -> Result<Vec<LogRecord>> {
    let pattern = record_pattern(family)?;

    let records: Vec<LogRecord> = pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let operation = caps.get(1)?.as_str().to_string();
            let elapsed_seconds = caps.get(2)?.as_str().parse::<f64>().ok()?;
            let throughput_mflops = caps.get(3).and_then(|m| m.as_str().parse::<f64>().ok());

            Some(LogRecord {
                operation,
                elapsed_seconds,
                throughput_mflops,
            })
        })
        .collect();

    log::debug!("{family}: extracted {} records", records.len());

    Ok(records)
}
