//! Parameters of the modeled cache the block sizes are tuned for.
//!
//! The target is a 1KB direct-mapped cache with 32-byte lines: 32 lines, each
//! holding 8 `i32`s. Every memory block maps to exactly one line, so two rows
//! whose addresses differ by a multiple of the capacity evict each other.

/// Geometry of a direct-mapped cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheModel {
    pub capacity_bytes: usize,
    pub line_bytes: usize,
}

impl CacheModel {
    /// 1KB capacity, 32-byte lines.
    pub const DEFAULT: CacheModel = CacheModel {
        capacity_bytes: 1024,
        line_bytes: 32,
    };

    /// Number of lines in the cache.
    pub const fn lines(&self) -> usize {
        self.capacity_bytes / self.line_bytes
    }

    /// How many `T`s one line fill brings in.
    pub const fn elements_per_line<T>(&self) -> usize {
        self.line_bytes / std::mem::size_of::<T>()
    }
}

impl Default for CacheModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}
