//! Ray picking over a set of bounding volumes.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use crate::query::Ray;
use ordered_float::OrderedFloat;

/// A bounding volume hit by a picking ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickHit<T> {
    /// User data identifying the volume that was hit.
    pub target: T,
    /// The time of impact of the ray on the volume.
    pub time_of_impact: Real,
    /// The point where the ray enters the volume.
    pub point: Point<Real>,
}

/// The set of volumes hit by a picking ray, sorted by increasing time of impact.
#[derive(Clone, Debug)]
pub struct PickResults<T> {
    hits: Vec<PickHit<T>>,
    sorted: bool,
}

impl<T> Default for PickResults<T> {
    fn default() -> Self {
        Self {
            hits: Vec::new(),
            sorted: true,
        }
    }
}

impl<T> PickResults<T> {
    /// Creates an empty set of pick results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit of `ray` on `target` at the given time of impact.
    pub fn push(&mut self, target: T, ray: &Ray, time_of_impact: Real) {
        self.hits.push(PickHit {
            target,
            time_of_impact,
            point: ray.point_at(time_of_impact),
        });
        self.sorted = false;
    }

    /// Sorts the hits by increasing time of impact.
    ///
    /// Hits with equal times of impact keep their insertion order.
    pub fn sort(&mut self) {
        if !self.sorted {
            self.hits
                .sort_by_key(|hit| OrderedFloat(hit.time_of_impact));
            self.sorted = true;
        }
    }

    /// The number of recorded hits.
    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Is this set of results empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Removes every recorded hit.
    pub fn clear(&mut self) {
        self.hits.clear();
        self.sorted = true;
    }

    /// The hit with the smallest time of impact, if any.
    pub fn closest(&self) -> Option<&PickHit<T>> {
        if self.sorted {
            self.hits.first()
        } else {
            self.hits
                .iter()
                .min_by_key(|hit| OrderedFloat(hit.time_of_impact))
        }
    }

    /// The recorded hits, in insertion order unless [`Self::sort`] was called.
    #[inline]
    pub fn hits(&self) -> &[PickHit<T>] {
        &self.hits
    }

    /// Consumes this set of results, returning its hits sorted by time of impact.
    pub fn into_sorted_vec(mut self) -> Vec<PickHit<T>> {
        self.sort();
        self.hits
    }
}

/// Casts `ray` against every candidate volume and collects the hits, sorted by
/// increasing time of impact.
///
/// Each candidate is a pair of user data and the volume to test.
pub fn pick<'a, T, I>(ray: &Ray, max_toi: Real, candidates: I) -> PickResults<T>
where
    I: IntoIterator<Item = (T, &'a dyn BoundingVolume)>,
{
    let mut results = PickResults::new();

    for (target, volume) in candidates {
        if let Some(toi) = volume.cast_ray(ray, max_toi) {
            results.push(target, ray, toi);
        }
    }

    log::trace!("Picking ray {ray:?} hit {} volumes.", results.len());
    results.sort();
    results
}
