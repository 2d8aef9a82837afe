// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Sweep-and-prune broad phase.
//!
//! Two independent 1D sweeps, one per axis, each produce the candidate
//! pairs whose intervals overlap along that axis; the intersection of the two
//! candidate sets is the true overlap set. Sorting endpoints dominates the
//! cost, so the whole pass is `O(n log n + p)` for `p` emitted candidates,
//! near-linear on real scenes where few boxes crowd together.

use core::cmp::Ordering;
use core::mem;

use crate::broad::{
    checked_aabbs, endpoint_cmp, Axis, BroadPhase, BroadPhaseError, BOX_STRIDE,
};
use crate::types::aabb::Aabb;

/// Sweep-and-prune context: the detection entry point plus the working
/// storage it reuses across calls.
///
/// Repeated [`find_pairs`](SweepPrune::find_pairs) calls on the same value
/// clear and refill the internal vectors without releasing capacity, so an
/// animated scene of roughly constant size settles into zero allocation per
/// frame. [`update`](SweepPrune::update) goes further and repairs the
/// retained endpoint order incrementally instead of re-sorting.
///
/// Determinism: endpoint order is total (value, then endpoint id), pair
/// output is canonical `(a, b)` with `a < b`, sorted ascending, unique.
/// Exact edge contact follows the id tie-break documented at
/// [`pair_overlaps`](crate::broad::pair_overlaps): boxes that only touch
/// may or may not pair up depending on their indices, and this is a stable,
/// tested property of the algorithm rather than an accident.
#[derive(Debug, Default, Clone)]
pub struct SweepPrune {
    /// Per-axis endpoint ids, sorted by the endpoint order. Retained between
    /// calls so `update` can repair them in place.
    boundaries: [Vec<usize>; 2],
    /// Per-axis candidate pairs (scratch, refilled by each sweep).
    candidates: [Vec<(usize, usize)>; 2],
    /// Boxes currently open during a sweep (scratch).
    active: Vec<usize>,
    /// The detected overlap set.
    pairs: Vec<(usize, usize)>,
    /// Scratch output for `update`'s change comparison.
    spare_pairs: Vec<(usize, usize)>,
    /// Indices chosen by the last [`cull`](SweepPrune::cull).
    culled: Vec<usize>,
    /// Box count recorded by the last successful detection.
    nboxes: Option<usize>,
}

impl SweepPrune {
    /// Creates an empty context. All buffers start at zero capacity and grow
    /// on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs from the most recent detection or update, canonically ordered.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Box indices chosen by the last [`cull`](SweepPrune::cull), ascending.
    ///
    /// Empty until `cull` has run; overwritten by each `cull`.
    #[must_use]
    pub fn culled(&self) -> &[usize] {
        &self.culled
    }

    /// Detects all overlapping pairs among the boxes in `coords`.
    ///
    /// Box `i` occupies `coords[4 * i .. 4 * i + 4]` as
    /// `(min_x, min_y, max_x, max_y)`. The result is also available through
    /// [`pairs`](SweepPrune::pairs) until the next detection overwrites it.
    ///
    /// # Errors
    /// Returns [`BroadPhaseError`] if `coords` is unaligned, non-finite, or
    /// holds an inverted box. No pairs found is a normal empty result.
    ///
    /// # Panics
    /// Panics if the sweep's open-box bookkeeping is ever inconsistent. That
    /// indicates a bug in this crate, not bad input; validated input cannot
    /// trigger it.
    pub fn find_pairs(&mut self, coords: &[f32]) -> Result<&[(usize, usize)], BroadPhaseError> {
        let aabbs = checked_aabbs(coords)?;
        let n = aabbs.len();
        self.rebuild_boundaries(n);
        for axis_bounds in &mut self.boundaries {
            axis_bounds.sort_unstable_by(|&a, &b| endpoint_cmp(aabbs, a, b));
        }
        self.sweep_axis(aabbs, Axis::X);
        self.sweep_axis(aabbs, Axis::Y);
        let mut pairs = mem::take(&mut self.pairs);
        intersect_candidates(&mut self.candidates, &mut pairs);
        self.pairs = pairs;
        self.nboxes = Some(n);
        #[cfg(feature = "telemetry")]
        crate::telemetry::detect(
            n,
            [self.candidates[0].len(), self.candidates[1].len()],
            self.pairs.len(),
        );
        Ok(&self.pairs)
    }

    /// Refreshes the overlap set from current coordinate values, assuming the
    /// same boxes as the last detection moved only a little since then.
    ///
    /// Instead of re-sorting, the retained per-axis endpoint lists get one
    /// adjacent-swap repair pass, linear in the endpoint count plus the
    /// number of inversions the motion introduced, which temporal coherence
    /// keeps near zero. The sweep and intersection then run as usual, so the
    /// result is exactly what a fresh [`find_pairs`](SweepPrune::find_pairs)
    /// on the same slice would produce.
    ///
    /// Returns `true` if the overlap set changed, `false` if it is identical
    /// to the previous one.
    ///
    /// # Errors
    /// In addition to the input validation errors, fails with
    /// [`BroadPhaseError::UpdateBeforeDetect`] if no detection has run, and
    /// with [`BroadPhaseError::CountMismatch`] if `coords` holds a different
    /// number of boxes than the last detection.
    ///
    /// # Panics
    /// As [`find_pairs`](SweepPrune::find_pairs): only on an internal sweep
    /// bookkeeping bug, never on validated input.
    pub fn update(&mut self, coords: &[f32]) -> Result<bool, BroadPhaseError> {
        let aabbs = checked_aabbs(coords)?;
        let expected = self.nboxes.ok_or(BroadPhaseError::UpdateBeforeDetect)?;
        if aabbs.len() != expected {
            return Err(BroadPhaseError::CountMismatch {
                expected,
                actual: aabbs.len(),
            });
        }
        for axis_bounds in &mut self.boundaries {
            repair_order(axis_bounds, aabbs);
        }
        self.sweep_axis(aabbs, Axis::X);
        self.sweep_axis(aabbs, Axis::Y);
        let mut fresh = mem::take(&mut self.spare_pairs);
        intersect_candidates(&mut self.candidates, &mut fresh);
        let changed = fresh != self.pairs;
        mem::swap(&mut self.pairs, &mut fresh);
        self.spare_pairs = fresh;
        #[cfg(feature = "telemetry")]
        crate::telemetry::update(
            expected,
            [self.candidates[0].len(), self.candidates[1].len()],
            self.pairs.len(),
            changed,
        );
        Ok(changed)
    }

    /// Reduces the current overlap graph to an overlap-free remainder.
    ///
    /// Treats [`pairs`](SweepPrune::pairs) as edges over box indices and
    /// greedily removes the highest-degree box (ties to the smaller index)
    /// until no edges remain. The removed set (available through
    /// [`culled`](SweepPrune::culled), ascending) is deterministic for a
    /// given overlap set; no minimality is claimed. Hiding the culled boxes
    /// leaves a scene with no mutual overlaps, the usual label-declutter
    /// move.
    pub fn cull(&mut self) {
        self.culled.clear();
        let Some(n) = self.nboxes else {
            return;
        };
        let mut degree = vec![0_usize; n];
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(a, b) in &self.pairs {
            degree[a] += 1;
            degree[b] += 1;
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        let mut remaining = self.pairs.len();
        while remaining > 0 {
            let mut victim = 0;
            let mut best = 0;
            for (index, &d) in degree.iter().enumerate() {
                if d > best {
                    best = d;
                    victim = index;
                }
            }
            for &neighbor in &adjacency[victim] {
                if degree[neighbor] > 0 {
                    degree[neighbor] -= 1;
                    remaining -= 1;
                }
            }
            degree[victim] = 0;
            self.culled.push(victim);
        }
        self.culled.sort_unstable();
    }

    /// Refills the per-axis endpoint lists for `n` boxes, unsorted.
    fn rebuild_boundaries(&mut self, n: usize) {
        for axis in [Axis::X, Axis::Y] {
            let bounds = &mut self.boundaries[axis as usize];
            bounds.clear();
            for i in 0..n {
                bounds.push(i * BOX_STRIDE + axis.min_offset());
                bounds.push(i * BOX_STRIDE + axis.max_offset());
            }
        }
    }

    /// One linear pass over an axis's sorted endpoints, emitting a candidate
    /// pair for every box already open when another box opens.
    fn sweep_axis(&mut self, aabbs: &[Aabb], axis: Axis) {
        let bounds = &self.boundaries[axis as usize];
        let candidates = &mut self.candidates[axis as usize];
        candidates.clear();
        self.active.clear();
        for &endpoint in bounds {
            let boxindex = endpoint / BOX_STRIDE;
            if endpoint % BOX_STRIDE == axis.min_offset() {
                for &open in &self.active {
                    candidates.push((open.min(boxindex), open.max(boxindex)));
                }
                self.active.push(boxindex);
            } else {
                remove_open(&mut self.active, boxindex);
            }
        }
    }
}

impl BroadPhase for SweepPrune {
    fn find_pairs(&mut self, coords: &[f32]) -> Result<&[(usize, usize)], BroadPhaseError> {
        SweepPrune::find_pairs(self, coords)
    }
}

/// Removes one box from the open set.
///
/// # Panics
/// Panics if the box is not open. Endpoints enter and leave the sweep in
/// matched min/max pairs, so a missing entry means the sweep state is
/// corrupt: an internal bug, not a caller error.
fn remove_open(active: &mut Vec<usize>, boxindex: usize) {
    match active.iter().position(|&open| open == boxindex) {
        Some(position) => {
            // Open-set order is irrelevant: candidates get sorted before the
            // intersection step either way.
            active.swap_remove(position);
        }
        None => unreachable!("sweep invariant violated: box {boxindex} is not open"),
    }
}

/// Restores endpoint order after coordinate changes.
///
/// A single insertion pass: cost is linear in the endpoint count plus the
/// number of inversions introduced since the list was last sorted.
fn repair_order(bounds: &mut [usize], aabbs: &[Aabb]) {
    for i in 1..bounds.len() {
        let mut j = i;
        while j > 0 && endpoint_cmp(aabbs, bounds[j - 1], bounds[j]) == Ordering::Greater {
            bounds.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Keeps the candidates confirmed by both axes.
///
/// Sorts both candidate lists lexicographically, then binary-searches each
/// X candidate in the Y list. Each sweep emits an unordered pair at most
/// once, so the output needs no deduplication and inherits the sorted order
/// of the X list.
fn intersect_candidates(
    candidates: &mut [Vec<(usize, usize)>; 2],
    out: &mut Vec<(usize, usize)>,
) {
    candidates[0].sort_unstable();
    candidates[1].sort_unstable();
    out.clear();
    for &pair in &candidates[0] {
        if candidates[1].binary_search(&pair).is_ok() {
            out.push(pair);
        }
    }
}
