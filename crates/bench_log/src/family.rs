// The benchmark families a log can come from.
//
// Every family ships a set of executables named `<prefix><variant>` that
// take the problem dimensions followed by the precision in bits.

use std::fmt;
use std::str::FromStr;

use crate::LogError;

/// How many problem dimensions a family's executables take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Vector kernels: `<N> <prec>`.
    One,
    /// Matrix-vector kernels: `<M> <N> <prec>`.
    Two,
}

impl Arity {
    /// Number of numeric command line arguments, precision included.
    pub fn arg_count(self) -> usize {
        match self {
            Arity::One => 2,
            Arity::Two => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    InnerProduct,
    Rdot,
    Raxpy,
    Rgemv,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::InnerProduct,
        Family::Rdot,
        Family::Raxpy,
        Family::Rgemv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::InnerProduct => "inner-product",
            Family::Rdot => "rdot",
            Family::Raxpy => "raxpy",
            Family::Rgemv => "rgemv",
        }
    }

    /// Executable name prefix, stripped from operation identifiers.
    pub fn prefix(self) -> &'static str {
        match self {
            Family::InnerProduct => "inner_product_gmp_",
            Family::Rdot => "Rdot_gmp_",
            Family::Raxpy => "Raxpy_gmp_",
            Family::Rgemv => "Rgemv_gmp_",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Family::Rgemv => Arity::Two,
            _ => Arity::One,
        }
    }

    /// Whether the executables print an `MFLOPS:` line after the timing.
    pub fn reports_throughput(self) -> bool {
        !matches!(self, Family::InnerProduct)
    }

    /// Picks the first known family whose executables show up in `text`.
    pub fn detect(text: &str) -> Option<Family> {
        Self::ALL
            .into_iter()
            .find(|family| text.contains(&format!("./{}", family.prefix())))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|family| family.name() == wanted)
            .ok_or_else(|| LogError::UnknownFamily(s.to_string()))
    }
}
