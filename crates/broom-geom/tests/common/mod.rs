// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use broom_geom::Aabb;

/// Flattens boxes into the `(min_x, min_y, max_x, max_y)` coordinate layout
/// the broad phase consumes.
pub fn flatten(aabbs: &[Aabb]) -> Vec<f32> {
    aabbs.iter().flat_map(|aabb| aabb.to_array()).collect()
}

/// Builds the coordinate slice for the boxes surviving a cull: every box
/// whose index is not in `culled` (which is sorted ascending).
pub fn survivors(aabbs: &[Aabb], culled: &[usize]) -> Vec<f32> {
    let kept: Vec<Aabb> = aabbs
        .iter()
        .enumerate()
        .filter(|(index, _)| culled.binary_search(index).is_err())
        .map(|(_, aabb)| *aabb)
        .collect();
    flatten(&kept)
}
