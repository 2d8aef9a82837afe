//! Core geometry types for the broad phase (AABB).
//!
//! Determinism notes:
//! - Boxes live in a flat `f32` slice owned by the caller; the types here are
//!   zero-copy views, so identical inputs always mean identical bytes.
//! - The plain [`aabb::Aabb::overlaps`] test is inclusive on edges. The broad
//!   phase itself uses an endpoint-id tie-break instead, documented at
//!   [`crate::broad::pair_overlaps`]; the two differ only when boxes touch
//!   exactly.

#[doc = "Axis-aligned bounding boxes over the flat coordinate layout."]
pub mod aabb;
