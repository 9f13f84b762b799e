//! Deferred write of a diagonal element.
//!
//! On a square matrix, `A[i][i]` and `B[i][i]` map to the same cache line of a
//! direct-mapped cache. Storing `B[i][i]` while the row of A is still being
//! read evicts that row, and the next read of A misses again. Holding the
//! value in a register until the row is done avoids the ping-pong.

/// Holding slot for the one diagonal element a block row can contain.
///
/// Create one per row of a block and call [`flush`](Self::flush) when the row
/// is done. Since a row `i` intersects the diagonal at most once, a second
/// [`hold`](Self::hold) within the same row is a logic error.
#[derive(Debug, Default)]
pub struct DeferredDiagonal {
    slot: Option<(usize, i32)>,
}

impl DeferredDiagonal {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Stash `value` destined for `B[index][index]`.
    #[inline(always)]
    pub fn hold(&mut self, index: usize, value: i32) {
        debug_assert!(self.slot.is_none(), "two diagonal elements in one row");
        self.slot = Some((index, value));
    }

    /// Write the held value (if any) into B, whose row stride is `stride`.
    #[inline(always)]
    pub fn flush(self, b: &mut [i32], stride: usize) {
        if let Some((r, value)) = self.slot {
            b[r * stride + r] = value;
        }
    }
}
