// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints N distinct colors as a `* { ... }` stylesheet block.
//!
//! Usage: `css_palette [count=100] [policy=volume|edge]`

use std::io::{BufWriter, Write, stdout};

use prism_core::color::Color;
use prism_core::generator::Generator;
use prism_core::policy::SplitPolicy;

use prism_debug::css;

const DEFAULT_COUNT: usize = 100;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let count = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_COUNT);
    let policy = match args.get(2).map(String::as_str) {
        Some("edge") => SplitPolicy::LongestEdge,
        _ => SplitPolicy::LargestVolume,
    };

    let colors: Vec<Color> = Generator::new(policy).take(count).collect();

    let mut out = BufWriter::new(stdout());
    css::write_block(&mut out, &colors)?;
    out.flush()
}
