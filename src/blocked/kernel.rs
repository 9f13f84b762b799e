//! Blocked transpose driven by a [`BlockingConfig`].

use super::diagonal::DeferredDiagonal;
use super::strategy::{BlockingConfig, DiagonalPolicy, Traversal};

/// Cache-blocked transpose: b = a^T
///
/// Walks A in square blocks of `config.block` so that every element of a
/// cache line of A is consumed before the line can be evicted. Blocks are
/// visited in `config.traversal` order. With [`DiagonalPolicy::Defer`], the
/// diagonal element of each block row is held back and stored only after the
/// rest of the row has been read.
///
/// Blocks that overhang the matrix (when `block` does not divide `m` or `n`)
/// are clipped element by element inside the loop.
///
/// # Arguments
///
/// * `m` - Columns of A, rows of B
/// * `n` - Rows of A, columns of B
/// * `a` - Matrix A (n × m), row-major
/// * `b` - Matrix B (m × n), row-major, fully overwritten
pub fn transpose_blocked(m: usize, n: usize, a: &[i32], b: &mut [i32], config: &BlockingConfig) {
    debug_assert!(m > 0 && n > 0, "dimensions must be positive");
    assert!(config.block > 0, "block size must be positive");
    assert_eq!(a.len(), m * n, "A: expected {}x{}={} elements", n, m, m * n);
    assert_eq!(b.len(), m * n, "B: expected {}x{}={} elements", m, n, m * n);

    let bs = config.block;
    let defer = config.diagonal == DiagonalPolicy::Defer;

    match config.traversal {
        Traversal::BlockRowsOuter => {
            for block_row in (0..n).step_by(bs) {
                for block_col in (0..m).step_by(bs) {
                    transpose_block(m, n, a, b, block_row, block_col, bs, defer);
                }
            }
        }
        Traversal::BlockColsOuter => {
            for block_col in (0..m).step_by(bs) {
                for block_row in (0..n).step_by(bs) {
                    transpose_block(m, n, a, b, block_row, block_col, bs, defer);
                }
            }
        }
    }

    debug_assert!(crate::matrix::check::is_transpose(m, n, a, b));
}

// One bs×bs block of A starting at (block_row, block_col).
#[allow(clippy::too_many_arguments)]
#[inline(always)]
fn transpose_block(
    m: usize,
    n: usize,
    a: &[i32],
    b: &mut [i32],
    block_row: usize,
    block_col: usize,
    bs: usize,
    defer: bool,
) {
    for i in block_row..block_row + bs {
        let mut held = DeferredDiagonal::new();
        for j in block_col..block_col + bs {
            // Last block row/column may run past the matrix edge.
            if i >= n || j >= m {
                continue;
            }
            let value = a[i * m + j];
            if defer && i == j {
                held.hold(i, value);
            } else {
                b[j * n + i] = value;
            }
        }
        held.flush(b, n);
    }
}
