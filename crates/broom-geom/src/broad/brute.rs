// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! All-pairs reference broad phase.

use crate::broad::{checked_aabbs, pair_overlaps, BroadPhase, BroadPhaseError};

/// A minimal broad phase testing every box pair directly, in `O(n^2)`.
///
/// Why this exists:
/// - Serves as the correctness and determinism baseline for the sweep: it
///   applies the same endpoint-id overlap rule ([`pair_overlaps`]), so the
///   two produce identical pair lists on identical input.
/// - Keeps the algorithm small and easy to reason about; for a handful of
///   boxes it is also perfectly adequate on its own.
///
/// Output is canonical by construction: the outer index is always the
/// smaller one and both loops ascend, so pairs arrive sorted and unique.
#[derive(Debug, Default)]
pub struct BruteForce {
    pairs: Vec<(usize, usize)>,
}

impl BruteForce {
    /// Creates an empty instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs from the most recent detection, canonically ordered.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

impl BroadPhase for BruteForce {
    fn find_pairs(&mut self, coords: &[f32]) -> Result<&[(usize, usize)], BroadPhaseError> {
        let aabbs = checked_aabbs(coords)?;
        self.pairs.clear();
        for a in 0..aabbs.len() {
            for b in (a + 1)..aabbs.len() {
                if pair_overlaps(aabbs, a, b) {
                    self.pairs.push((a, b));
                }
            }
        }
        Ok(&self.pairs)
    }
}
