//! Cache-blocked transpose.
//!
//! A shape is mapped to a [`BlockingConfig`] through [`Strategy::for_shape`];
//! the kernel then walks A block by block so each cache line of A is fully
//! consumed before it can be evicted.
//!
//! Tuned shapes (A rows × cols):
//! - `32x32`: 8×8 blocks, one cache line per block row
//! - `64x64`: 4×4 blocks, block columns outer
//! - `67x61`: 20×20 blocks, ragged edge clipped in-loop

pub mod diagonal;
pub mod kernel;
pub mod strategy;

pub use kernel::transpose_blocked;
pub use strategy::{BlockingConfig, DiagonalPolicy, Shape, Strategy, Traversal};
