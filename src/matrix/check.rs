/// Returns true if `b` (m × n) is the transpose of `a` (n × m).
///
/// Walks A in row-major order and stops at the first element whose mirror
/// in B differs. Never writes to either matrix.
pub fn is_transpose(m: usize, n: usize, a: &[i32], b: &[i32]) -> bool {
    for i in 0..n {
        for j in 0..m {
            if a[i * m + j] != b[j * n + i] {
                return false;
            }
        }
    }
    true
}
