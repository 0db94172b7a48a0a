// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traced subdivision run that exercises the diagnostics pipeline.
//!
//! Runs 60 steps of the longest-edge policy, printing one line per step to
//! stdout via [`PrettyPrintSink`](prism_debug::pretty::PrettyPrintSink),
//! feeding every color into a
//! [`SpreadTracker`](prism_spread_harness::SpreadTracker), then exports the
//! palette as `swatches.json`.

use std::fs::File;
use std::io::BufWriter;

use prism_core::color::Color;
use prism_core::generator::Generator;
use prism_core::policy::SplitPolicy;
use prism_core::trace::Tracer;

use prism_debug::pretty::PrettyPrintSink;
use prism_debug::swatch;

use prism_spread_harness::SpreadTracker;

const STEP_COUNT: usize = 60;

fn main() -> std::io::Result<()> {
    let mut sink = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut generator = Generator::new(SplitPolicy::LongestEdge);
    let mut tracker = SpreadTracker::<STEP_COUNT>::new();

    let mut palette: Vec<Color> = Vec::with_capacity(STEP_COUNT);
    let mut report = None;
    {
        let mut tracer = Tracer::new(&mut sink);
        for _ in 0..STEP_COUNT {
            let color = generator.advance(&mut tracer);
            palette.push(color);
            report = Some(tracker.observe(color));
        }
    }

    if let Some(report) = report {
        println!(
            "spread: grade={} min_distance={:.4} packing_score={:.3} colors={}",
            report.grade.as_str(),
            report.min_distance,
            report.packing_score,
            report.total_colors,
        );
        println!("nearest: {}", tracker.sparkline_ascii(0.0, 0.5));
    }

    let file = File::create("swatches.json")?;
    let mut writer = BufWriter::new(file);
    swatch::export(&palette, &mut writer)?;
    println!("wrote swatches.json ({} colors)", palette.len());
    Ok(())
}
