// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! broom-geom: 2D AABB sweep-and-prune broad phase.
//!
//! This crate provides:
//! - Axis-aligned bounding boxes over the flat `(min_x, min_y, max_x, max_y)`
//!   coordinate layout ([`Aabb`]).
//! - A broad-phase trait with a deterministic canonical-pair contract
//!   ([`BroadPhase`]).
//! - [`SweepPrune`]: the sweep-and-prune implementation, with reusable
//!   working storage, an incremental `update` for coherent motion, and an
//!   overlap-graph `cull` for declutter use cases.
//! - [`BruteForce`]: the all-pairs reference used as a correctness baseline.
//!
//! Design notes:
//! - Deterministic: endpoint ordering is made total by an endpoint-id
//!   tie-break, so no reliance on sort stability; pair output is canonical
//!   `(a, b)` with `a < b`, sorted ascending, unique.
//! - Float32 throughout; non-finite coordinates are rejected at the API
//!   boundary rather than silently corrupting the sweep order.
//! - Rustdoc is treated as part of the contract; public items are documented.

/// Broad-phase interfaces and implementations.
pub mod broad;
/// Foundational geometric types.
pub mod types;

#[cfg(feature = "telemetry")]
mod telemetry;

pub use broad::brute::BruteForce;
pub use broad::sweep::SweepPrune;
pub use broad::{pair_overlaps, Axis, BroadPhase, BroadPhaseError};
pub use types::aabb::Aabb;
