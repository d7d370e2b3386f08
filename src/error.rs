use thiserror::Error;

// Unified error type for sparsela

#[derive(Error, Debug)]
pub enum LaError {
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("cannot store a non-zero value at ({row}, {col}): cell is outside the sparsity pattern")]
    InvalidSparseWrite { row: usize, col: usize },
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("zero or non-finite pivot at row {row}")]
    SingularMatrix { row: usize },
    #[error("malformed layout: {0}")]
    MalformedLayout(String),
    #[error("solve requested before factorization")]
    NotFactored,
    #[error("format error: {0}")]
    Format(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LaError {
    pub(crate) fn shape(what: &str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        LaError::DimensionMismatch(format!(
            "{what}: {}x{} vs {}x{}",
            lhs.0, lhs.1, rhs.0, rhs.1
        ))
    }
}
