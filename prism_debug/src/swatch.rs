// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON palette export.
//!
//! [`export`] writes a generated palette as a JSON array of swatch objects,
//! suitable for downstream tooling (theme pipelines, visual inspectors).

use std::io::{self, Write};

use serde_json::{Value, json};

use prism_core::color::Color;

use crate::css;

/// Exports a palette as a JSON array of `{ "hex", "r", "g", "b" }` objects.
///
/// Component values are the exact `f64`s the engine produced; the hex form
/// is the floored CSS byte encoding of [`css::hex`].
pub fn export(colors: &[Color], writer: &mut dyn Write) -> io::Result<()> {
    let swatches: Vec<Value> = colors
        .iter()
        .map(|&color| {
            json!({
                "hex": css::hex(color),
                "r": color.r,
                "g": color.g,
                "b": color.b,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &Value::Array(swatches))?;
    writeln!(writer)
}
