//! Cache-aware transpose of dense `i32` matrices.
//!
//! Tuned for a 1KB direct-mapped cache with 32-byte lines (see
//! [`cache::CacheModel`]). The trick is blocking: walk A in small squares so
//! each line of A is used up before it is evicted, and keep diagonal stores
//! out of the way of the row still being read. Block sizes are chosen per
//! shape; anything untuned falls back to a plain row scan.
//!
//! ## Usage
//!
//! ```
//! use trans::{is_transpose, transpose_submit};
//!
//! let a: Vec<i32> = (0..32 * 32).collect();
//! let mut b = vec![0; 32 * 32];
//!
//! transpose_submit(32, 32, &a, &mut b);
//! assert!(is_transpose(32, 32, &a, &b));
//! ```
//!
//! Matrices are row-major. A has `n` rows and `m` columns; B has `m` rows and
//! `n` columns.

pub mod blocked;
pub mod cache;
pub mod error;
pub mod matrix;
pub mod registry;

pub use blocked::Strategy;
pub use error::{Result, TransposeError};
pub use matrix::check::is_transpose;
pub use matrix::naive::transpose_row_scan;

use tracing::instrument;

/// Transpose: b = a^T
///
/// Picks the blocking strategy for this shape (32×32, 64×64, 67×61 are
/// tuned) and falls back to a row scan otherwise.
///
/// # Panics
///
/// Panics if the slice lengths don't match `m * n`.
#[instrument(level = "debug", skip_all, fields(m = m, n = n))]
pub fn transpose_submit(m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    debug_assert!(m > 0, "m must be positive");
    debug_assert!(n > 0, "n must be positive");

    run(Strategy::for_shape(m, n), m, n, a, b);
}

/// Checked variant of [`transpose_submit`].
///
/// Validates dimensions and buffer lengths instead of panicking, and returns
/// the strategy that was used.
#[instrument(level = "debug", skip_all, fields(m = m, n = n))]
pub fn try_transpose(m: usize, n: usize, a: &[i32], b: &mut [i32]) -> Result<Strategy> {
    if m == 0 || n == 0 {
        return Err(TransposeError::ZeroDimension { m, n });
    }
    let expected = m
        .checked_mul(n)
        .ok_or(TransposeError::DimensionOverflow { m, n })?;
    if a.len() != expected {
        return Err(TransposeError::LengthMismatch {
            matrix: "A",
            expected,
            got: a.len(),
        });
    }
    if b.len() != expected {
        return Err(TransposeError::LengthMismatch {
            matrix: "B",
            expected,
            got: b.len(),
        });
    }

    let strategy = Strategy::for_shape(m, n);
    run(strategy, m, n, a, b);
    Ok(strategy)
}

fn run(strategy: Strategy, m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    tracing::debug!(strategy = %strategy.label(), "transposing");
    match strategy {
        Strategy::Blocked(config) => blocked::transpose_blocked(m, n, a, b, &config),
        Strategy::RowScan => transpose_row_scan(m, n, a, b),
    }
}
