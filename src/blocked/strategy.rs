//! Blocking configuration per matrix shape.
//!
//! Block sizes are tied to [`CacheModel::DEFAULT`]: a 32×32 block row is
//! exactly one line of `i32`s. At 64 columns, rows four apart share a line,
//! so an 8×8 block of B would evict itself; 4×4 blocks halve the live lines.
//! 67×61 has no such aliasing and tolerates much larger 20×20 blocks.

use std::fmt;

use crate::cache::CacheModel;
use crate::error::{Result, TransposeError};

const LINE: usize = CacheModel::DEFAULT.elements_per_line::<i32>();

/// Matrix A's extent: `rows` = N, `cols` = M.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Which block index runs in the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Block rows outer, block columns inner.
    BlockRowsOuter,
    /// Block columns outer, block rows inner.
    BlockColsOuter,
}

/// What to do with `A[i][i]` when it shows up inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalPolicy {
    /// Hold the value until the block row is finished, then store it.
    Defer,
    /// Store it immediately like any other element.
    WriteThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockingConfig {
    /// Edge length of the square block.
    pub block: usize,
    pub traversal: Traversal,
    pub diagonal: DiagonalPolicy,
}

const SHAPE_TABLE: &[(Shape, BlockingConfig)] = &[
    (
        Shape::new(32, 32),
        BlockingConfig {
            block: LINE,
            traversal: Traversal::BlockRowsOuter,
            diagonal: DiagonalPolicy::Defer,
        },
    ),
    (
        Shape::new(64, 64),
        BlockingConfig {
            block: LINE / 2,
            traversal: Traversal::BlockColsOuter,
            diagonal: DiagonalPolicy::Defer,
        },
    ),
    (
        Shape::new(67, 61),
        BlockingConfig {
            block: 20,
            traversal: Traversal::BlockRowsOuter,
            diagonal: DiagonalPolicy::WriteThrough,
        },
    ),
];

/// How a given shape gets transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Blocked(BlockingConfig),
    RowScan,
}

impl Strategy {
    /// Look up the strategy for A with `m` columns and `n` rows.
    ///
    /// Shapes without a tuned configuration fall back to [`Strategy::RowScan`].
    pub fn for_shape(m: usize, n: usize) -> Self {
        match Self::for_shape_strict(m, n) {
            Ok(config) => Strategy::Blocked(config),
            Err(_) => Strategy::RowScan,
        }
    }

    /// Like [`for_shape`](Self::for_shape) but rejects untuned shapes.
    pub fn for_shape_strict(m: usize, n: usize) -> Result<BlockingConfig> {
        let shape = Shape::new(n, m);
        SHAPE_TABLE
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|(_, config)| *config)
            .ok_or(TransposeError::UnsupportedShape { m, n })
    }

    /// Every shape with a tuned configuration.
    pub fn tuned_shapes() -> impl Iterator<Item = Shape> {
        SHAPE_TABLE.iter().map(|(s, _)| *s)
    }

    pub fn label(&self) -> String {
        match self {
            Strategy::RowScan => "row scan".to_string(),
            Strategy::Blocked(c) => {
                let order = match c.traversal {
                    Traversal::BlockRowsOuter => "rows-outer",
                    Traversal::BlockColsOuter => "cols-outer",
                };
                let diag = match c.diagonal {
                    DiagonalPolicy::Defer => ", deferred diagonal",
                    DiagonalPolicy::WriteThrough => "",
                };
                format!("{}x{} blocks, {}{}", c.block, c.block, order, diag)
            }
        }
    }
}
