// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Input validation at the broad-phase entry points: every rejection is a
//! typed error, never a corrupted sweep.

mod common;

use broom_geom::{Aabb, Axis, BroadPhase, BroadPhaseError, BruteForce, SweepPrune};
use common::flatten;

#[test]
fn unaligned_slice_is_rejected() {
    let mut sp = SweepPrune::new();
    let err = sp.find_pairs(&[0.0, 0.0, 1.0]).unwrap_err();
    assert_eq!(err, BroadPhaseError::UnalignedCoords { len: 3 });
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let mut sp = SweepPrune::new();
    let nan = [0.0, 0.0, 1.0, 1.0, 2.0, f32::NAN, 3.0, 3.0];
    assert_eq!(
        sp.find_pairs(&nan).unwrap_err(),
        BroadPhaseError::NonFiniteCoord { index: 1 }
    );
    let inf = [0.0, 0.0, f32::INFINITY, 1.0];
    assert_eq!(
        sp.find_pairs(&inf).unwrap_err(),
        BroadPhaseError::NonFiniteCoord { index: 0 }
    );
}

#[test]
fn inverted_boxes_are_rejected_per_axis() {
    let mut sp = SweepPrune::new();
    let inverted_x = [2.0, 0.0, 1.0, 1.0];
    assert_eq!(
        sp.find_pairs(&inverted_x).unwrap_err(),
        BroadPhaseError::InvertedBox { index: 0, axis: Axis::X }
    );
    let inverted_y = [0.0, 0.0, 1.0, 1.0, 0.0, 5.0, 1.0, 4.0];
    assert_eq!(
        sp.find_pairs(&inverted_y).unwrap_err(),
        BroadPhaseError::InvertedBox { index: 1, axis: Axis::Y }
    );
}

#[test]
fn brute_force_applies_the_same_validation() {
    let mut brute = BruteForce::new();
    assert_eq!(
        brute.find_pairs(&[1.0]).unwrap_err(),
        BroadPhaseError::UnalignedCoords { len: 1 }
    );
    assert_eq!(
        brute.find_pairs(&[2.0, 0.0, 1.0, 1.0]).unwrap_err(),
        BroadPhaseError::InvertedBox { index: 0, axis: Axis::X }
    );
}

#[test]
fn rejected_input_leaves_previous_pairs_intact() {
    let coords = flatten(&[
        Aabb::new(0.0, 0.0, 2.0, 2.0),
        Aabb::new(1.0, 1.0, 3.0, 3.0),
    ]);
    let mut sp = SweepPrune::new();
    sp.find_pairs(&coords).unwrap();
    assert!(sp.find_pairs(&[0.5]).is_err());
    assert_eq!(sp.pairs(), [(0, 1)]);
}

#[test]
fn error_messages_name_the_offender() {
    let message = BroadPhaseError::InvertedBox { index: 7, axis: Axis::Y }.to_string();
    assert_eq!(message, "box 7 has min greater than max on the y axis");
    let message = BroadPhaseError::CountMismatch { expected: 4, actual: 6 }.to_string();
    assert_eq!(
        message,
        "update expected 4 boxes but the coordinate slice holds 6"
    );
}
