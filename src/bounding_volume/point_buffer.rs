use crate::math::{Point, Real};

/// Error raised when a [`PointBuffer`] is built from an invalid range or index list.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointBufferError {
    /// The requested sub-range does not fit in the point slice.
    #[error("the range starting at {offset} with {count} points exceeds the {len} available points")]
    RangeOutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Number of elements requested.
        count: usize,
        /// Length of the underlying slice.
        len: usize,
    },
    /// An index (after adding the base vertex) does not refer to an existing point.
    #[error("index {index} at position {position} (base vertex {base_vertex}) exceeds the {len} available points")]
    IndexOutOfBounds {
        /// Position of the offending index in the index list.
        position: usize,
        /// The offending index.
        index: u32,
        /// The base vertex added to every index.
        base_vertex: usize,
        /// Number of available points.
        len: usize,
    },
}

/// A read-only view on a set of points.
///
/// The view is either a contiguous sub-range of a point slice, or the points
/// referenced by an index list (with a base vertex added to every index). Ranges and
/// indices are validated when the view is created, so iterating never fails.
#[derive(Copy, Clone, Debug)]
pub struct PointBuffer<'a> {
    points: &'a [Point<Real>],
    indices: Option<&'a [u32]>,
    base_vertex: usize,
}

impl<'a> From<&'a [Point<Real>]> for PointBuffer<'a> {
    fn from(points: &'a [Point<Real>]) -> Self {
        Self::new(points)
    }
}

impl<'a> PointBuffer<'a> {
    /// A view on all the given points.
    pub fn new(points: &'a [Point<Real>]) -> Self {
        Self {
            points,
            indices: None,
            base_vertex: 0,
        }
    }

    /// A view on the `count` points starting at `offset`.
    pub fn with_range(
        points: &'a [Point<Real>],
        offset: usize,
        count: usize,
    ) -> Result<Self, PointBufferError> {
        let range = Self::checked_range(points.len(), offset, count)?;
        Ok(Self::new(&points[range]))
    }

    /// A view on the points `points[base_vertex + i]` for each `i` in `indices`.
    pub fn indexed(
        points: &'a [Point<Real>],
        indices: &'a [u32],
        base_vertex: usize,
    ) -> Result<Self, PointBufferError> {
        for (position, index) in indices.iter().enumerate() {
            let resolved = (*index as usize).checked_add(base_vertex);

            if resolved.map_or(true, |i| i >= points.len()) {
                return Err(PointBufferError::IndexOutOfBounds {
                    position,
                    index: *index,
                    base_vertex,
                    len: points.len(),
                });
            }
        }

        Ok(Self {
            points,
            indices: Some(indices),
            base_vertex,
        })
    }

    /// A view on the points referenced by the `count` indices starting at `offset`.
    pub fn indexed_range(
        points: &'a [Point<Real>],
        indices: &'a [u32],
        offset: usize,
        count: usize,
        base_vertex: usize,
    ) -> Result<Self, PointBufferError> {
        let range = Self::checked_range(indices.len(), offset, count)?;
        Self::indexed(points, &indices[range], base_vertex)
    }

    fn checked_range(
        len: usize,
        offset: usize,
        count: usize,
    ) -> Result<core::ops::Range<usize>, PointBufferError> {
        match offset.checked_add(count) {
            Some(end) if end <= len => Ok(offset..end),
            _ => Err(PointBufferError::RangeOutOfBounds { offset, count, len }),
        }
    }

    /// The number of points in this view.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.map_or(self.points.len(), |idx| idx.len())
    }

    /// Does this view contain no point?
    ///
    /// Fitting operations return their zero result for empty views.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th point of this view.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    #[inline]
    pub fn get(&self, i: usize) -> Point<Real> {
        match self.indices {
            Some(indices) => self.points[indices[i] as usize + self.base_vertex],
            None => self.points[i],
        }
    }

    /// Iterates through the points of this view.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// The contiguous slice of points of this view, if it is not indexed.
    pub fn as_slice(&self) -> Option<&'a [Point<Real>]> {
        match self.indices {
            Some(_) => None,
            None => Some(self.points),
        }
    }

    /// Copies the points of this view into a new vector.
    pub fn to_vec(&self) -> Vec<Point<Real>> {
        match self.as_slice() {
            Some(slice) => slice.to_vec(),
            None => self.iter().collect(),
        }
    }
}
