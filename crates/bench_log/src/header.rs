// Header of a benchmark log.
//
// The first lines are written by the runner script before any benchmark:
//
// ```text
// 0: uname output            (first token is the OS name)
// 1: cpu identification      (usually the `model name` line of /proc/cpuinfo)
// 2: free-form
// 3: ... [dim_x] dim prec    (trailing tokens are the problem shape)
// ```

use crate::cpu::sanitize_cpu_model;
use crate::family::Arity;
use crate::{LogError, Result};

const OS_LINE: usize = 0;
const CPU_LINE: usize = 1;
const SHAPE_LINE: usize = 3;

const UNKNOWN_OS: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub os_name: String,
    /// Sanitized, still space separated.
    pub cpu_model: String,
    pub dimension: u64,
    /// Leading dimension of two-dimensional shapes.
    pub dimension_x: Option<u64>,
    pub precision_bits: u32,
}

impl Environment {
    /// Reads the environment from the fixed header lines of a log.
    ///
    /// Fails with `MalformedHeader` if the shape line is missing, has fewer
    /// trailing tokens than `arity` needs, or holds something other than
    /// positive integers there.
    pub fn from_header(lines: &[&str], arity: Arity) -> Result<Self> {
        if lines.len() <= SHAPE_LINE {
            return Err(LogError::malformed(format!(
                "expected at least {} lines, found {}",
                SHAPE_LINE + 1,
                lines.len()
            )));
        }

        let os_name = lines[OS_LINE]
            .split_whitespace()
            .next()
            .unwrap_or(UNKNOWN_OS)
            .to_string();

        let cpu_model = sanitize_cpu_model(lines[CPU_LINE]);

        let tokens: Vec<&str> = lines[SHAPE_LINE].split_whitespace().collect();
        let needed = arity.arg_count();
        if tokens.len() < needed {
            return Err(LogError::malformed(format!(
                "line {} needs {needed} dimension/precision tokens, found {}: {:?}",
                SHAPE_LINE + 1,
                tokens.len(),
                lines[SHAPE_LINE]
            )));
        }

        // take the trailing tokens, last one is the precision
        let shape = &tokens[tokens.len() - needed..];
        let precision_bits = positive::<u32>(shape[needed - 1], "precision")?;
        let dimension = positive::<u64>(shape[needed - 2], "dimension")?;
        let dimension_x = match arity {
            Arity::One => None,
            Arity::Two => Some(positive::<u64>(shape[0], "dimension")?),
        };

        Ok(Self {
            os_name,
            cpu_model,
            dimension,
            dimension_x,
            precision_bits,
        })
    }
}

fn positive<T>(token: &str, what: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match token.parse::<T>() {
        Ok(v) if v > T::default() => Ok(v),
        _ => Err(LogError::malformed(format!(
            "{what} is not a positive integer: {token:?}"
        ))),
    }
}
