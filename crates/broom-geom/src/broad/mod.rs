// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase interfaces, the shared overlap rule, and input validation.
//!
//! Implementations must return pairs deterministically: the pair `(a, b)` is
//! canonicalized such that `a < b`, and the full list is sorted ascending by
//! `(a, b)` with each pair appearing at most once.

use core::cmp::Ordering;
use core::fmt;

use thiserror::Error;

use crate::types::aabb::Aabb;

#[doc = "All-pairs reference broad phase."]
pub mod brute;
#[doc = "Sweep-and-prune broad phase."]
pub mod sweep;

/// Number of scalars one box occupies in the flat coordinate layout.
///
/// Box `i` owns `coords[4 * i .. 4 * i + 4]` = `(min_x, min_y, max_x, max_y)`.
pub const BOX_STRIDE: usize = 4;

/// A coordinate axis of the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis: scalar offsets 0 (min) and 2 (max).
    X = 0,
    /// Vertical axis: scalar offsets 1 (min) and 3 (max).
    Y = 1,
}

impl Axis {
    /// Offset of this axis's min scalar within a box's four scalars.
    pub(crate) fn min_offset(self) -> usize {
        self as usize
    }

    /// Offset of this axis's max scalar within a box's four scalars.
    pub(crate) fn max_offset(self) -> usize {
        self as usize + 2
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Error returned by the broad-phase entry points.
///
/// All variants describe caller input. Internal sweep-state corruption is a
/// bug, not an input condition, and panics instead (see
/// [`sweep::SweepPrune::find_pairs`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BroadPhaseError {
    /// The coordinate slice does not hold a whole number of boxes.
    #[error("coordinate slice length {len} is not a multiple of {BOX_STRIDE}")]
    UnalignedCoords {
        /// Length of the offending slice.
        len: usize,
    },
    /// A box has a NaN or infinite coordinate, which has no place in the
    /// endpoint order.
    #[error("box {index} has a non-finite coordinate")]
    NonFiniteCoord {
        /// Index of the offending box.
        index: usize,
    },
    /// A box has `min > max` on one axis.
    #[error("box {index} has min greater than max on the {axis} axis")]
    InvertedBox {
        /// Index of the offending box.
        index: usize,
        /// Axis on which the box is inverted.
        axis: Axis,
    },
    /// `update` was called with a different box count than the last
    /// detection; incremental repair requires the same boxes.
    #[error("update expected {expected} boxes but the coordinate slice holds {actual}")]
    CountMismatch {
        /// Box count recorded by the last detection.
        expected: usize,
        /// Box count implied by the supplied slice.
        actual: usize,
    },
    /// `update` was called on a context that has never run a detection.
    #[error("update called before any pair detection")]
    UpdateBeforeDetect,
}

/// Broad-phase interface: detect all overlapping box pairs in a flat
/// coordinate slice.
///
/// Taking `&mut self` lets implementations keep working buffers between
/// calls; repeated detection on the same value reuses capacity instead of
/// reallocating.
pub trait BroadPhase {
    /// Detects all overlapping pairs among the boxes in `coords` and returns
    /// them canonically ordered: `(a, b)` with `a < b`, sorted ascending,
    /// each pair at most once.
    ///
    /// # Errors
    /// Returns [`BroadPhaseError`] if `coords` is unaligned, non-finite, or
    /// holds an inverted box. An empty result is a normal outcome, not an
    /// error.
    fn find_pairs(&mut self, coords: &[f32]) -> Result<&[(usize, usize)], BroadPhaseError>;
}

/// Validates a flat coordinate slice and reinterprets it as boxes.
///
/// Checks alignment (length a multiple of [`BOX_STRIDE`]), finiteness of
/// every scalar, and `min <= max` per axis. The cast itself is zero-copy.
pub(crate) fn checked_aabbs(coords: &[f32]) -> Result<&[Aabb], BroadPhaseError> {
    let aabbs: &[Aabb] = bytemuck::try_cast_slice(coords)
        .map_err(|_| BroadPhaseError::UnalignedCoords { len: coords.len() })?;
    for (index, aabb) in aabbs.iter().enumerate() {
        let [min_x, min_y, max_x, max_y] = aabb.to_array();
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return Err(BroadPhaseError::NonFiniteCoord { index });
        }
        if min_x > max_x {
            return Err(BroadPhaseError::InvertedBox { index, axis: Axis::X });
        }
        if min_y > max_y {
            return Err(BroadPhaseError::InvertedBox { index, axis: Axis::Y });
        }
    }
    Ok(aabbs)
}

/// Scalar value an endpoint id refers to.
///
/// Endpoint ids encode `box_index * BOX_STRIDE + scalar_offset`, so the id is
/// both a reference into the coordinate data and the sort tie-break key.
pub(crate) fn endpoint_value(aabbs: &[Aabb], id: usize) -> f32 {
    aabbs[id / BOX_STRIDE].to_array()[id % BOX_STRIDE]
}

/// Total order over endpoints: ascending by scalar value, ties broken by the
/// endpoint id itself.
///
/// The id tie-break makes the comparator total without relying on sort
/// stability, and it fixes the processing order when a min endpoint and a max
/// endpoint share a value, which is what decides whether boxes that only
/// touch at an edge count as overlapping. See [`pair_overlaps`].
pub(crate) fn endpoint_cmp(aabbs: &[Aabb], a: usize, b: usize) -> Ordering {
    endpoint_value(aabbs, a)
        .partial_cmp(&endpoint_value(aabbs, b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.cmp(&b))
}

fn endpoint_lt(aabbs: &[Aabb], a: usize, b: usize) -> bool {
    endpoint_cmp(aabbs, a, b) == Ordering::Less
}

fn axis_overlaps(aabbs: &[Aabb], a: usize, b: usize, axis: Axis) -> bool {
    let a_min = a * BOX_STRIDE + axis.min_offset();
    let a_max = a * BOX_STRIDE + axis.max_offset();
    let b_min = b * BOX_STRIDE + axis.min_offset();
    let b_max = b * BOX_STRIDE + axis.max_offset();
    endpoint_lt(aabbs, a_min, b_max) && endpoint_lt(aabbs, b_min, a_max)
}

/// Overlap test between boxes `a` and `b` under the broad phase's endpoint
/// order.
///
/// On each axis the intervals are compared as `(value, endpoint id)` keys, so
/// strict interval overlap is always reported, strict separation never is,
/// and exact edge contact depends on the indices involved: a shared
/// coordinate between one box's max and another's min counts as overlap only
/// when the id order puts the min endpoint first. [`brute::BruteForce`] and
/// the sweep both follow this rule, which is what makes them comparable
/// pair-for-pair.
#[must_use]
pub fn pair_overlaps(aabbs: &[Aabb], a: usize, b: usize) -> bool {
    axis_overlaps(aabbs, a, b, Axis::X) && axis_overlaps(aabbs, a, b, Axis::Y)
}
