// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite, deterministic generation of maximally distinct RGB colors.
//!
//! `prism_core` partitions the RGB unit cube into tetrahedra and, on each
//! pull, splits the cell judged largest by the selected policy, emitting the
//! newly introduced interior point as the next color. Because every new color
//! lands inside the biggest remaining gap, the sequence stays visually
//! distinct for as long as the consumer keeps pulling. The crate is `no_std`
//! compatible (with `alloc`).
//!
//! # Architecture
//!
//! One pull of the [`Generator`](generator::Generator) flows through the
//! partition like this:
//!
//! ```text
//!   Generator::advance()
//!       │
//!       ▼
//!   policy scan (largest volume / longest edge) ──► chosen cell or edge
//!       │
//!       ▼
//!   split point ──► ColorArena (new ColorId)
//!       │
//!       ▼
//!   Partition (retire parent cells, insert children) ──► emitted Color
//! ```
//!
//! **[`color`]** — The [`Color`](color::Color) value, the
//! [`ColorId`](color::ColorId) handle, and the grow-only
//! [`ColorArena`](color::ColorArena). Corner identity is handle equality;
//! component equality is a deliberately looser relation used only for edge
//! matching.
//!
//! **[`geom`]** — Pure vector utilities: interpolation, cross/dot products,
//! signed tetrahedron volume, edge lengths.
//!
//! **[`tetra`]** — The immutable [`Tetra`](tetra::Tetra) cell, its corner
//! roles and fixed-order edge enumeration.
//!
//! **[`partition`]** — The ordered cell collection covering the cube, seeded
//! with a fixed 12-cell subdivision.
//!
//! **[`policy`]** — The closed two-policy set:
//! [`LargestVolume`](policy::SplitPolicy::LargestVolume) (centroid split
//! into 4 children) and [`LongestEdge`](policy::SplitPolicy::LongestEdge)
//! (off-center edge split into 2 children per affected cell).
//!
//! **[`generator`]** — The infinite sequence driver. One atomic step per
//! pull; never completes; restartable only from the seed.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and step events for
//! instrumentation, with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

// With `std` enabled the cfg-gated `FloatFuncs` imports drop out, so the
// float methods must come from std's inherent impls.
#[cfg(feature = "std")]
extern crate std;

pub mod color;
pub mod generator;
pub mod geom;
pub mod partition;
pub mod policy;
pub mod tetra;
pub mod trace;
