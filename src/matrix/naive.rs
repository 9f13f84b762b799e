/// Simple row-wise scan transpose: b = a^T
///
/// Reads A one row at a time and scatters each element into its column of B.
/// Correct for any shape, but every write to B lands on a different row, so
/// on a small direct-mapped cache nearly every store misses.
///
/// Use this as a correctness baseline and as the fallback for shapes without
/// a blocking configuration.
///
/// # Arguments
///
/// * `m` - Columns of A, rows of B
/// * `n` - Rows of A, columns of B
/// * `a` - Matrix A (n × m), row-major
/// * `b` - Matrix B (m × n), row-major, fully overwritten
///
/// # Example
///
/// ```
/// use trans::matrix::naive::transpose_row_scan;
///
/// let a = vec![1, 2, 3,   // 2×3 matrix
///              4, 5, 6];
/// let mut b = vec![0; 6]; // will be 3×2
///
/// transpose_row_scan(3, 2, &a, &mut b);
///
/// assert_eq!(b, vec![1, 4,
///                    2, 5,
///                    3, 6]);
/// ```
pub fn transpose_row_scan(m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    debug_assert!(m > 0 && n > 0, "dimensions must be positive");
    assert_eq!(a.len(), m * n, "A: expected {}x{}={} elements", n, m, m * n);
    assert_eq!(b.len(), m * n, "B: expected {}x{}={} elements", m, n, m * n);

    for i in 0..n {
        for j in 0..m {
            let tmp = a[i * m + j];
            b[j * n + i] = tmp;
        }
    }

    debug_assert!(crate::matrix::check::is_transpose(m, n, a, b));
}
