// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack baseline offset modes.

/// Stack baseline offset mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOffset {
    /// Accumulate upward from a zero baseline (d3's `zero`, the default).
    Zero,
    /// Center each category's stack around zero (d3's `silhouette`).
    ///
    /// Every band at a category is shifted down by half that category's
    /// total, so the stack is visually centered at every x-position
    /// independently. This is the classic streamgraph baseline.
    Silhouette,
    /// Streamgraph baseline minimizing weighted changes in slope
    /// (d3's `wiggle`).
    ///
    /// Notes:
    /// - This is primarily intended for positive-valued stacked areas.
    /// - Categories are assumed to be evenly spaced: the kernel sees
    ///   category indices, not x positions, so unit spacing is used.
    /// - Absent values are treated as zero when estimating slopes.
    Wiggle,
    /// Scale each category so the stack spans `[0, 1]` (d3's `expand`).
    ///
    /// A category whose total is zero collapses to zero-thickness bands at
    /// `0.0` rather than dividing by zero.
    Normalize,
}
