// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialization, pretty-printing, and JSON export for prism diagnostics.
//!
//! The core engine only ever produces [`Color`](prism_core::color::Color)
//! values; everything textual lives here:
//!
//! - [`css`] — `#rrggbb` hex serialization and the `* { ... }` stylesheet
//!   block emitted by the demos.
//! - [`pretty`] — a [`TraceSink`](prism_core::trace::TraceSink)
//!   implementation with human-readable one-line-per-step output.
//! - [`swatch`] — JSON palette export for downstream tooling.

pub mod css;
pub mod pretty;
pub mod swatch;
