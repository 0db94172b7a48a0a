// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS hex serialization.
//!
//! Components in `[0, 1]` map to bytes via `floor(component * 255)`, each
//! formatted as two lowercase hex digits — so `0.5` becomes `7f` (127),
//! not `80`.

use std::io::{self, Write};

use prism_core::color::Color;

/// Formats a color as a 7-character `#rrggbb` string.
#[must_use]
pub fn hex(color: Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        component_byte(color.r),
        component_byte(color.g),
        component_byte(color.b)
    )
}

/// Maps one `[0, 1]` component to its hex byte: `floor(c * 255)`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "components are in [0, 1], so the floored product fits in u8"
)]
fn component_byte(c: f64) -> u8 {
    (c * 255.0).floor() as u8
}

/// Writes one hex string per line.
pub fn write_lines(writer: &mut dyn Write, colors: &[Color]) -> io::Result<()> {
    for &color in colors {
        writeln!(writer, "{}", hex(color))?;
    }
    Ok(())
}

/// Writes the palette as a `* { ... }` stylesheet block of custom
/// properties, one per color:
///
/// ```text
/// * {
///   --distinct-0: #8e114f;
///   ...
/// }
/// ```
pub fn write_block(writer: &mut dyn Write, colors: &[Color]) -> io::Result<()> {
    writeln!(writer, "* {{")?;
    for (i, &color) in colors.iter().enumerate() {
        writeln!(writer, "  --distinct-{i}: {};", hex(color))?;
    }
    writeln!(writer, "}}")
}
