// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Largest-volume policy: centroid split of the biggest cell.

use crate::color::{Color, ColorId};
use crate::geom;
use crate::partition::Partition;
use crate::tetra::{CornerRole, Tetra};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Interior gray anchor nearer white.
pub(crate) const LIGHT_ANCHOR: Color = Color::new(0.760, 0.741, 0.753);

/// Interior gray anchor nearer black.
pub(crate) const DARK_ANCHOR: Color = Color::new(0.247, 0.259, 0.244);

/// Builds the seed partition with this policy's anchors.
pub(crate) fn seed() -> Partition {
    Partition::seed(LIGHT_ANCHOR, DARK_ANCHOR)
}

/// Splits the cell of maximal absolute volume at its centroid.
///
/// The scan keeps the first strictly greater candidate, so equal volumes
/// never displace the running maximum and ties resolve to the earliest
/// cell. The parent is replaced in place by four children, each with one
/// corner (A, B, C, D in order) moved to the centroid.
pub(crate) fn step(partition: &mut Partition) -> (ColorId, f64) {
    let (index, best) = select(partition);
    let parent = partition.cells()[index];
    let [a, b, c, d] = parent.corners().map(|id| partition.color(id));

    // Halfway along both diagonals, then halfway between the midpoints:
    // the centroid.
    let split = geom::lerp(geom::lerp(a, b, 0.5), geom::lerp(c, d, 0.5), 0.5);
    let split_id = partition.push_color(split);

    let children = [
        parent.with_corner(CornerRole::A, split_id),
        parent.with_corner(CornerRole::B, split_id),
        parent.with_corner(CornerRole::C, split_id),
        parent.with_corner(CornerRole::D, split_id),
    ];
    partition.splice_cell(index, children);
    (split_id, best)
}

/// First-occurrence max-scan over absolute cell volume.
fn select(partition: &Partition) -> (usize, f64) {
    let mut index = 0;
    let mut best = abs_volume(partition, &partition.cells()[0]);
    for (i, cell) in partition.cells().iter().enumerate().skip(1) {
        let v = abs_volume(partition, cell);
        if v > best {
            index = i;
            best = v;
        }
    }
    (index, best)
}

fn abs_volume(partition: &Partition, cell: &Tetra) -> f64 {
    let [a, b, c, d] = cell.corners().map(|id| partition.color(id));
    geom::signed_volume(a, b, c, d).abs()
}
