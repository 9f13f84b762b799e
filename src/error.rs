use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransposeError {
    #[error("matrix dimensions must be positive, got {m}x{n}")]
    ZeroDimension { m: usize, n: usize },
    #[error("{n}x{m} matrix has more elements than fit in usize")]
    DimensionOverflow { m: usize, n: usize },
    #[error("{matrix}: expected {expected} elements, got {got}")]
    LengthMismatch {
        matrix: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("no blocking configuration for {n}x{m} (rows x cols)")]
    UnsupportedShape { m: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, TransposeError>;
