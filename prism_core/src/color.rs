// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color values, identity handles, and the owning arena.
//!
//! Every color the engine ever produces lives in a [`ColorArena`] and is
//! addressed by a [`ColorId`]. Handle equality is the *identity* relation:
//! two colors with equal components but produced as distinct points are
//! distinct corners. Component equality ([`Color::value_eq`]) exists as a
//! separate, looser relation and is used only for edge matching in the
//! longest-edge policy.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

/// An RGB color with `f64` components, conceptually in `[0, 1]`.
///
/// Components are never clamped; the engine only ever produces convex
/// combinations of the seed corners, so they stay in range by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Color {
    /// Creates a color from components.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Component-wise numeric equality.
    ///
    /// This is the loose relation reserved for edge matching. Corner
    /// identity is [`ColorId`] equality, never this.
    #[inline]
    #[must_use]
    pub fn value_eq(self, other: Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// A handle to a color in a [`ColorArena`].
///
/// Unlike a generational handle, a `ColorId` never goes stale: the arena
/// only grows, and colors are never destroyed (retired cells stop
/// referencing them, but the values remain shared corners of their
/// neighbors).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorId {
    pub(crate) idx: u32,
}

impl ColorId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }
}

impl fmt::Debug for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorId({})", self.idx)
    }
}

/// Grow-only storage for all colors a partition references.
#[derive(Clone, Debug, Default)]
pub struct ColorArena {
    colors: Vec<Color>,
}

impl ColorArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Stores a color and returns its handle.
    ///
    /// Values are never deduplicated: pushing the same components twice
    /// yields two distinct identities.
    pub fn push(&mut self, color: Color) -> ColorId {
        let idx = u32::try_from(self.colors.len()).expect("color arena exceeds u32 capacity");
        self.colors.push(color);
        ColorId { idx }
    }

    /// Returns the number of stored colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Index<ColorId> for ColorArena {
    type Output = Color;

    fn index(&self, id: ColorId) -> &Color {
        &self.colors[id.idx as usize]
    }
}
