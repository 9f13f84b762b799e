//! Named transpose variants for an external evaluation driver.
//!
//! A driver runs every registered function under a simulated cache and
//! reports its miss count next to the description. The submission must be
//! registered under [`SUBMISSION_DESC`] exactly; the driver looks it up by
//! that string.

use crate::matrix::check::is_transpose;
use crate::matrix::naive::transpose_row_scan;

/// Signature every registered variant shares: `(m, n, a, b)`.
pub type TransposeFn = fn(usize, usize, &[i32], &mut [i32]);

pub const SUBMISSION_DESC: &str = "Transpose submission";
pub const ROW_SCAN_DESC: &str = "Simple row-wise scan transpose";

#[derive(Clone, Copy)]
pub struct Registered {
    pub func: TransposeFn,
    pub desc: &'static str,
}

#[derive(Default)]
pub struct Registry {
    entries: Vec<Registered>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding the submission followed by the row-scan baseline.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_functions(&mut registry);
        registry
    }

    pub fn register(&mut self, func: TransposeFn, desc: &'static str) {
        tracing::debug!(desc, "registering transpose function");
        self.entries.push(Registered { func, desc });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Registered> {
        self.entries.iter()
    }

    pub fn find(&self, desc: &str) -> Option<TransposeFn> {
        self.entries.iter().find(|e| e.desc == desc).map(|e| e.func)
    }

    /// Run every entry on `a` (n × m) and report whether its output is a
    /// valid transpose.
    pub fn check_all(&self, m: usize, n: usize, a: &[i32]) -> Vec<(&'static str, bool)> {
        self.entries
            .iter()
            .map(|entry| {
                let mut b = vec![0; m * n];
                (entry.func)(m, n, a, &mut b);
                let ok = is_transpose(m, n, a, &b);
                if !ok {
                    tracing::warn!(desc = entry.desc, m, n, "output is not a transpose");
                }
                (entry.desc, ok)
            })
            .collect()
    }
}

/// Register the submission and the baseline, in that order.
pub fn register_functions(registry: &mut Registry) {
    registry.register(crate::transpose_submit, SUBMISSION_DESC);
    registry.register(transpose_row_scan, ROW_SCAN_DESC);
}
