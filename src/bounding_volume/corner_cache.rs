use crate::math::{Point, Real};
use std::fmt;
use std::sync::OnceLock;

/// Lazily computed corners of a bounding volume.
///
/// The corners are computed at most once after each mutation of the owning volume.
/// Reading them only requires a shared reference and is safe from several threads;
/// mutating the owning volume requires `&mut` access, which is also what
/// [`CornerCache::invalidate`] takes.
///
/// The cache never takes part in comparisons: two caches are always equal.
#[derive(Clone, Default)]
pub struct CornerCache {
    corners: OnceLock<[Point<Real>; 8]>,
}

impl CornerCache {
    /// Creates an empty cache.
    pub const fn new() -> Self {
        Self {
            corners: OnceLock::new(),
        }
    }

    /// Returns the cached corners, computing them with `compute` if the cache is empty.
    #[inline]
    pub fn get_or_compute(&self, compute: impl FnOnce() -> [Point<Real>; 8]) -> &[Point<Real>; 8] {
        self.corners.get_or_init(compute)
    }

    /// Empties the cache. Must be called after every mutation of the owning volume.
    #[inline]
    pub fn invalidate(&mut self) {
        let _ = self.corners.take();
    }

    /// Are the corners currently cached?
    #[inline]
    pub fn is_cached(&self) -> bool {
        self.corners.get().is_some()
    }
}

impl PartialEq for CornerCache {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl fmt::Debug for CornerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CornerCache")
            .field("cached", &self.is_cached())
            .finish()
    }
}
