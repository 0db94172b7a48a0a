// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tetrahedral cells, corner roles, and edges.
//!
//! A [`Tetra`] is one cell of the space partition: four distinct corner
//! handles in fixed role slots. Cells are immutable — "splitting" always
//! builds new cells via [`Tetra::with_corner`] and retires the original.
//!
//! Two equality relations coexist here and must not be mixed:
//!
//! - **Corner identity** — [`ColorId`] equality. [`Tetra::role_of`] uses it
//!   and treats a miss as a broken partition invariant (panic).
//! - **Edge value equality** — unordered component-wise equality of the two
//!   endpoint values ([`Edge::value_eq`]). Deliberately looser; used only
//!   to collect the cells affected by a longest-edge split.

use crate::color::{ColorArena, ColorId};

/// One of the four corner slots of a [`Tetra`].
///
/// Roles are implementation bookkeeping, not domain meaning: they pin down
/// the deterministic enumeration order of corners and edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerRole {
    /// First slot.
    A,
    /// Second slot.
    B,
    /// Third slot.
    C,
    /// Fourth slot.
    D,
}

impl CornerRole {
    /// All roles in enumeration order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];
}

/// An unordered pair of corners drawn from one cell.
///
/// `first`/`second` record the slot-pair enumeration order, which matters
/// for the deterministic split direction; equality ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Endpoint from the earlier role slot.
    pub first: ColorId,
    /// Endpoint from the later role slot.
    pub second: ColorId,
}

impl Edge {
    /// Unordered component-wise value equality of the endpoint pairs.
    #[must_use]
    pub fn value_eq(self, other: Self, arena: &ColorArena) -> bool {
        let (a, b) = (arena[self.first], arena[self.second]);
        let (c, d) = (arena[other.first], arena[other.second]);
        (a.value_eq(c) && b.value_eq(d)) || (a.value_eq(d) && b.value_eq(c))
    }
}

/// One tetrahedral cell of the partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tetra {
    pub(crate) a: ColorId,
    pub(crate) b: ColorId,
    pub(crate) c: ColorId,
    pub(crate) d: ColorId,
}

impl Tetra {
    /// Creates a cell from four corner handles.
    #[inline]
    #[must_use]
    pub const fn new(a: ColorId, b: ColorId, c: ColorId, d: ColorId) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the corners in role order.
    #[inline]
    #[must_use]
    pub const fn corners(self) -> [ColorId; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the corner in the given role slot.
    #[inline]
    #[must_use]
    pub const fn corner(self, role: CornerRole) -> ColorId {
        match role {
            CornerRole::A => self.a,
            CornerRole::B => self.b,
            CornerRole::C => self.c,
            CornerRole::D => self.d,
        }
    }

    /// Returns a copy of this cell with one corner replaced.
    #[inline]
    #[must_use]
    pub const fn with_corner(self, role: CornerRole, id: ColorId) -> Self {
        let mut out = self;
        match role {
            CornerRole::A => out.a = id,
            CornerRole::B => out.b = id,
            CornerRole::C => out.c = id,
            CornerRole::D => out.d = id,
        }
        out
    }

    /// Finds the role slot holding `id`, compared by identity.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not one of this cell's own corners. Callers only
    /// ever pass corners they just located in this cell, so a miss means
    /// the partition's shared-corner invariant is broken; continuing would
    /// silently corrupt the subdivision.
    #[must_use]
    pub fn role_of(self, id: ColorId) -> CornerRole {
        for role in CornerRole::ALL {
            if self.corner(role) == id {
                return role;
            }
        }
        panic!("corner {id:?} is not part of cell {self:?}");
    }

    /// Returns the six corner-pair edges in fixed enumeration order:
    /// (a,b), (a,c), (a,d), (b,c), (b,d), (c,d).
    ///
    /// This order is the tie-break order of the longest-edge max-scan.
    #[inline]
    #[must_use]
    pub const fn edges(self) -> [Edge; 6] {
        [
            Edge {
                first: self.a,
                second: self.b,
            },
            Edge {
                first: self.a,
                second: self.c,
            },
            Edge {
                first: self.a,
                second: self.d,
            },
            Edge {
                first: self.b,
                second: self.c,
            },
            Edge {
                first: self.b,
                second: self.d,
            },
            Edge {
                first: self.c,
                second: self.d,
            },
        ]
    }

    /// Locates this cell's own corners matching `edge` by value.
    ///
    /// Returns the pair `(matching edge.first, matching edge.second)` as
    /// *this cell's* handles, or `None` if either endpoint value is absent.
    /// Corner replacement during a split must go through the returned
    /// handles (and [`Self::role_of`]), never through the scanned edge's
    /// handles directly: an adjacent cell shares the edge by value, not
    /// necessarily by identity.
    #[must_use]
    pub fn match_edge(self, edge: Edge, arena: &ColorArena) -> Option<(ColorId, ColorId)> {
        let first_value = arena[edge.first];
        let second_value = arena[edge.second];
        let mut first = None;
        let mut second = None;
        for corner in self.corners() {
            if first.is_none() && arena[corner].value_eq(first_value) {
                first = Some(corner);
            } else if second.is_none() && arena[corner].value_eq(second_value) {
                second = Some(corner);
            }
        }
        match (first, second) {
            (Some(f), Some(s)) => Some((f, s)),
            _ => None,
        }
    }
}
