// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered tetrahedral partition of the RGB cube and its fixed seed.
//!
//! A [`Partition`] owns the [`ColorArena`] plus an ordered list of cells
//! whose union covers the cube. Order has no geometric meaning, but it is
//! the tie-break order of every max-scan, so both mutation paths preserve
//! it deterministically: [`splice_cell`](Partition::splice_cell) replaces
//! one retired cell with its children in place, and
//! [`set_cells`](Partition::set_cells) installs a full rebuild.
//!
//! # Seed
//!
//! The seed subdivides the cube into 12 cells over ten fixed points: white
//! and black (exact), the six hue corners in hexagonal cycle order around
//! the main diagonal, and two interior gray anchors supplied per policy —
//! one nearer white, one nearer black. Each of the six adjacent hue pairs
//! contributes an upper cell `(white, light, Hᵢ, Hᵢ₊₁)` and a lower cell
//! `(dark, black, Hᵢ, Hᵢ₊₁)`, so both anchors are shared corners of six
//! cells each.
//!
//! The hue corners sit slightly off the exact cube corners. Exact corners
//! would make every cube edge the same length and the seed volumes pairwise
//! equal, forcing the max-scans into permanent first-occurrence tie-breaks;
//! the perturbations keep the seed's volumes pairwise distinct and its
//! physical edges pairwise distinct in length.

use alloc::vec::Vec;

use crate::color::{Color, ColorArena, ColorId};
use crate::tetra::Tetra;

/// Number of cells in the seed partition.
pub const SEED_CELLS: usize = 12;

/// Exact white.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Exact black.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// The six hue corners in hexagonal cycle order around the main diagonal:
/// red, yellow, green, cyan, blue, magenta. Each carries a small
/// deterministic perturbation off the exact cube corner.
pub const HUE_RING: [Color; 6] = [
    Color::new(0.994, 0.009, 0.003),
    Color::new(0.991, 0.996, 0.007),
    Color::new(0.006, 0.992, 0.011),
    Color::new(0.013, 0.989, 0.997),
    Color::new(0.004, 0.012, 0.988),
    Color::new(0.993, 0.006, 0.994),
];

/// The ordered collection of cells covering the color cube.
#[derive(Clone, Debug)]
pub struct Partition {
    arena: ColorArena,
    cells: Vec<Tetra>,
}

impl Partition {
    /// Builds the 12-cell seed partition around the given gray anchors.
    pub(crate) fn seed(light: Color, dark: Color) -> Self {
        let mut arena = ColorArena::new();
        let white = arena.push(WHITE);
        let black = arena.push(BLACK);
        let light = arena.push(light);
        let dark = arena.push(dark);
        let hues = HUE_RING.map(|c| arena.push(c));

        let mut cells = Vec::with_capacity(SEED_CELLS);
        for i in 0..6 {
            let h0 = hues[i];
            let h1 = hues[(i + 1) % 6];
            cells.push(Tetra::new(white, light, h0, h1));
            cells.push(Tetra::new(dark, black, h0, h1));
        }
        Self { arena, cells }
    }

    /// Returns the cells in tie-break order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Tetra] {
        &self.cells
    }

    /// Returns the number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Resolves a corner handle to its color value.
    #[inline]
    #[must_use]
    pub fn color(&self, id: ColorId) -> Color {
        self.arena[id]
    }

    /// Returns the owning arena.
    #[inline]
    #[must_use]
    pub fn arena(&self) -> &ColorArena {
        &self.arena
    }

    /// Stores a new color and returns its handle.
    pub(crate) fn push_color(&mut self, color: Color) -> ColorId {
        self.arena.push(color)
    }

    /// Replaces the cell at `index` with its four children, in place.
    ///
    /// Every other cell keeps its position; the children occupy positions
    /// `index..index + 4` in the given order.
    pub(crate) fn splice_cell(&mut self, index: usize, children: [Tetra; 4]) {
        self.cells.splice(index..=index, children);
    }

    /// Removes and returns the whole cell list for a rebuild.
    pub(crate) fn take_cells(&mut self) -> Vec<Tetra> {
        core::mem::take(&mut self.cells)
    }

    /// Installs a rebuilt cell list.
    pub(crate) fn set_cells(&mut self, cells: Vec<Tetra>) {
        self.cells = cells;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom;
    use crate::tetra::CornerRole;

    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    const LIGHT: Color = Color::new(0.76, 0.741, 0.753);
    const DARK: Color = Color::new(0.247, 0.259, 0.244);

    #[test]
    fn seed_has_twelve_cells() {
        let p = Partition::seed(LIGHT, DARK);
        assert_eq!(p.cell_count(), SEED_CELLS);
        assert_eq!(p.arena().len(), 10);
    }

    #[test]
    fn seed_anchors_are_shared_by_identity() {
        let p = Partition::seed(LIGHT, DARK);
        // Arena order: white, black, light, dark, hues.
        let light = p.cells()[0].corners()[1];
        let dark = p.cells()[1].corners()[0];
        let shared_light = p
            .cells()
            .iter()
            .filter(|c| c.corners().contains(&light))
            .count();
        let shared_dark = p
            .cells()
            .iter()
            .filter(|c| c.corners().contains(&dark))
            .count();
        assert_eq!(shared_light, 6);
        assert_eq!(shared_dark, 6);
    }

    #[test]
    fn seed_volumes_are_pairwise_distinct() {
        let p = Partition::seed(LIGHT, DARK);
        let vols: Vec<f64> = p
            .cells()
            .iter()
            .map(|cell| {
                let [a, b, c, d] = cell.corners().map(|id| p.color(id));
                geom::signed_volume(a, b, c, d).abs()
            })
            .collect();
        for (i, v) in vols.iter().enumerate() {
            for w in &vols[i + 1..] {
                assert_ne!(v, w, "seed volumes must not tie");
            }
        }
    }

    #[test]
    fn splice_preserves_positions_of_other_cells() {
        let mut p = Partition::seed(LIGHT, DARK);
        let before = p.cells().to_vec();
        let parent = before[3];
        let mid = p.push_color(Color::new(0.5, 0.5, 0.5));
        let children = [
            parent.with_corner(CornerRole::A, mid),
            parent.with_corner(CornerRole::B, mid),
            parent.with_corner(CornerRole::C, mid),
            parent.with_corner(CornerRole::D, mid),
        ];
        p.splice_cell(3, children);
        assert_eq!(p.cell_count(), SEED_CELLS + 3);
        assert_eq!(&p.cells()[..3], &before[..3]);
        assert_eq!(&p.cells()[3..7], &children);
        assert_eq!(&p.cells()[7..], &before[4..]);
    }
}
