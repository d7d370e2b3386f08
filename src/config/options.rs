//! Options selecting which factorization runs and how it traverses the matrix.
//!
//! Both enums parse from short lowercase names so they can come straight from a command
//! line or a config file: `"lu"`, `"ldu"`, `"dense"`, `"sparse"`.

use std::fmt;
use std::str::FromStr;

use crate::error::LaError;

/// Which factors are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FactorKind {
    /// Unit-lower `L` and upper `U`.
    #[default]
    Lu,
    /// Unit-lower `L`, diagonal `D`, unit-upper `U`.
    Ldu,
}

/// How the elimination visits each row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Every cell right of the pivot, stored or not.
    Dense,
    /// Stored cells only, via the row cursors.
    #[default]
    Sparse,
}

/// Factorization parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactorOptions {
    pub kind: FactorKind,
    pub traversal: Traversal,
}

impl FactorOptions {
    pub fn new(kind: FactorKind, traversal: Traversal) -> Self {
        Self { kind, traversal }
    }
}

impl FromStr for FactorKind {
    type Err = LaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lu" => Ok(FactorKind::Lu),
            "ldu" => Ok(FactorKind::Ldu),
            other => Err(LaError::Format(format!("unknown factorization `{other}`"))),
        }
    }
}

impl FromStr for Traversal {
    type Err = LaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(Traversal::Dense),
            "sparse" => Ok(Traversal::Sparse),
            other => Err(LaError::Format(format!("unknown traversal `{other}`"))),
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FactorKind::Lu => "lu",
            FactorKind::Ldu => "ldu",
        })
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Traversal::Dense => "dense",
            Traversal::Sparse => "sparse",
        })
    }
}
