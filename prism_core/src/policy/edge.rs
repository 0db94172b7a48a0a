// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Longest-edge policy: off-center split of the longest edge anywhere.
//!
//! The split factor is 0.55 toward the edge's first endpoint, not 0.5.
//! The two halves of a split therefore never come out exactly equal, so a
//! split can never manufacture a tie between its own children. Ties do
//! still arise deeper in the run — refining the three edges of a triangle
//! leaves behind exactly congruent sub-segments in distant cells, and their
//! lengths reach the maximum simultaneously — and resolve through the
//! first-occurrence scan order, which is part of the sequence's definition.

use alloc::vec::Vec;

use crate::color::{Color, ColorId};
use crate::geom;
use crate::partition::Partition;
use crate::tetra::Edge;

/// Interior gray anchor nearer white.
pub(crate) const LIGHT_ANCHOR: Color = Color::new(0.772, 0.749, 0.736);

/// Interior gray anchor nearer black.
pub(crate) const DARK_ANCHOR: Color = Color::new(0.251, 0.237, 0.264);

/// Interpolation factor toward the first endpoint.
pub(crate) const SPLIT_FACTOR: f64 = 0.55;

/// Builds the seed partition with this policy's anchors.
pub(crate) fn seed() -> Partition {
    Partition::seed(LIGHT_ANCHOR, DARK_ANCHOR)
}

/// Splits the longest edge across all cells.
///
/// Every cell containing the chosen edge by value is affected and is
/// replaced by two children sharing one split point, interned exactly once.
/// The rebuilt order is all unaffected cells in their original order,
/// followed by the children in affected-cell order; future tie-breaks
/// follow this concatenation order.
pub(crate) fn step(partition: &mut Partition) -> (ColorId, f64) {
    let (edge, len_sq) = select(partition);

    let split = geom::lerp(
        partition.color(edge.first),
        partition.color(edge.second),
        SPLIT_FACTOR,
    );
    let split_id = partition.push_color(split);

    let cells = partition.take_cells();
    let mut rebuilt = Vec::with_capacity(cells.len() + 2);
    let mut children = Vec::new();
    for cell in &cells {
        match cell.match_edge(edge, partition.arena()) {
            None => rebuilt.push(*cell),
            Some((first_corner, second_corner)) => {
                children.push(cell.with_corner(cell.role_of(first_corner), split_id));
                children.push(cell.with_corner(cell.role_of(second_corner), split_id));
            }
        }
    }
    debug_assert!(!children.is_empty(), "chosen edge must affect its own cell");
    rebuilt.append(&mut children);
    partition.set_cells(rebuilt);
    (split_id, len_sq)
}

/// First-occurrence max-scan over the flattened per-cell edge list.
///
/// Shared edges appear once per owning cell and are deliberately not
/// deduplicated; the duplicates carry equal lengths, so they can never
/// displace the first occurrence.
fn select(partition: &Partition) -> (Edge, f64) {
    let mut best: Option<(Edge, f64)> = None;
    for cell in partition.cells() {
        for edge in cell.edges() {
            let l = geom::length_sq(partition.color(edge.first), partition.color(edge.second));
            if best.is_none_or(|(_, b)| l > b) {
                best = Some((edge, l));
            }
        }
    }
    best.expect("partition is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::SEED_CELLS;
    use crate::tetra::Tetra;

    #[test]
    fn interior_edge_split_grows_by_affected_count() {
        let mut p = seed();
        // The first maximum is the white-red edge, shared by the two upper
        // cells of the adjoining sectors: k = 2, net growth +2.
        let (_, _) = step(&mut p);
        assert_eq!(p.cell_count(), SEED_CELLS + 2);
    }

    #[test]
    fn split_point_is_interned_once_and_shared() {
        let mut p = seed();
        let arena_before = p.arena().len();
        let (split_id, _) = step(&mut p);
        assert_eq!(p.arena().len(), arena_before + 1);
        let sharing = p
            .cells()
            .iter()
            .filter(|cell| cell.corners().contains(&split_id))
            .count();
        // Two affected cells, two children each.
        assert_eq!(sharing, 4);
    }

    #[test]
    fn split_is_off_center_toward_first_endpoint() {
        let mut p = seed();
        let (edge, _) = select(&p);
        let first = p.color(edge.first);
        let second = p.color(edge.second);
        let (split_id, _) = step(&mut p);
        let split = p.color(split_id);
        assert!(geom::length_sq(split, first) < geom::length_sq(split, second));
        assert!(split.value_eq(geom::lerp(first, second, 0.55)));
    }

    #[test]
    fn rebuild_keeps_unaffected_cells_first_in_original_order() {
        let mut p = seed();
        let before = p.cells().to_vec();
        let (edge, _) = select(&p);
        let affected: Vec<Tetra> = before
            .iter()
            .filter(|c| c.match_edge(edge, p.arena()).is_some())
            .copied()
            .collect();
        let unaffected: Vec<Tetra> = before
            .iter()
            .filter(|c| c.match_edge(edge, p.arena()).is_none())
            .copied()
            .collect();
        let (_, _) = step(&mut p);
        assert_eq!(&p.cells()[..unaffected.len()], &unaffected[..]);
        assert_eq!(p.cell_count(), unaffected.len() + 2 * affected.len());
    }

    #[test]
    fn boundary_edge_with_one_owner_grows_by_one() {
        // A partition whittled down to one cell has only boundary edges:
        // k = 1, net growth +1.
        let mut p = seed();
        let mut cells = p.take_cells();
        cells.truncate(1);
        p.set_cells(cells);
        let (_, _) = step(&mut p);
        assert_eq!(p.cell_count(), 2);
    }

    #[test]
    fn split_halves_are_never_equal() {
        // The 0.55 factor leaves the far half strictly longer than the near
        // half, so no split ever creates a tie between its own children.
        let mut p = seed();
        for step_index in 0..200 {
            let (edge, _) = select(&p);
            let first = p.color(edge.first);
            let second = p.color(edge.second);
            let (split_id, _) = step(&mut p);
            let split = p.color(split_id);
            let near = geom::length_sq(split, first);
            let far = geom::length_sq(split, second);
            assert!(far > near, "equal halves at step {step_index}");
        }
    }

    #[test]
    fn max_edge_length_never_increases() {
        let mut p = seed();
        let (_, mut prev) = select(&p);
        for _ in 0..100 {
            let (_, l) = step(&mut p);
            assert!(l <= prev, "edge maximum grew from {prev} to {l}");
            prev = l;
        }
    }
}
