// Copyright 2026 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of selection/split policies.
//!
//! Both policies share the same step shape — scan the partition for the
//! cell or edge judged largest, introduce exactly one new interior point,
//! retire the split cells for brand-new children — and differ only in the
//! selection metric and split rule:
//!
//! - [`SplitPolicy::LargestVolume`] — pick the cell with the largest
//!   absolute volume, split it at its centroid into 4 children, spliced
//!   into the parent's position.
//! - [`SplitPolicy::LongestEdge`] — pick the longest edge across all
//!   cells, split it 55% of the way toward its first endpoint, replace
//!   every affected cell with 2 children appended after the unaffected
//!   cells.
//!
//! A policy is chosen at [`Generator`](crate::generator::Generator)
//! construction and never mixed with the other within one run: each policy
//! carries its own seed anchor constants, and the two sequences' tie-break
//! orders are not interchangeable.

pub(crate) mod edge;
pub(crate) mod volume;

use crate::color::ColorId;
use crate::partition::Partition;

/// Which selection/split rule drives the subdivision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitPolicy {
    /// Split the cell of maximal absolute volume at its centroid.
    LargestVolume,
    /// Split the edge of maximal squared length, off-center at 0.55.
    LongestEdge,
}

impl SplitPolicy {
    /// Builds this policy's seed partition.
    #[must_use]
    pub(crate) fn seed(self) -> Partition {
        match self {
            Self::LargestVolume => volume::seed(),
            Self::LongestEdge => edge::seed(),
        }
    }

    /// Runs one subdivision step, returning the new corner handle and the
    /// selection metric (absolute volume or squared edge length).
    pub(crate) fn step(self, partition: &mut Partition) -> (ColorId, f64) {
        match self {
            Self::LargestVolume => volume::step(partition),
            Self::LongestEdge => edge::step(partition),
        }
    }
}
