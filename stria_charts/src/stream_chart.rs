// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stream chart layout.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Range;

use stria_core::{InvalidInput, Series, SeriesKey, StackedPoint, StackedSeries};
use stria_stack::{StackOffset, derived_baseline, stack};

/// A minimal stream-chart layout builder.
///
/// This wires the stack accumulator the way the stream visual uses it:
/// series are stacked with the silhouette (centered) offset unless the
/// host's "stream type" toggle is off, and a synthesized baseline series is
/// appended after all real series so it draws last as the bottom outline.
#[derive(Clone, Copy, Debug)]
pub struct StreamChartSpec {
    /// Whether to center the stack per category (streamgraph silhouette).
    ///
    /// Default: `true`. When disabled the chart stacks from a zero baseline
    /// like an ordinary stacked area chart.
    pub silhouette: bool,
}

impl StreamChartSpec {
    /// Creates a stream-chart spec with the silhouette offset enabled.
    pub fn new() -> Self {
        Self { silhouette: true }
    }

    /// Sets the silhouette toggle.
    pub fn with_silhouette(mut self, silhouette: bool) -> Self {
        self.silhouette = silhouette;
        self
    }

    /// Computes the stacked layout for the given series (in stack order).
    pub fn layout(&self, series: &[Series]) -> Result<StreamChartLayout, InvalidInput> {
        let offset = if self.silhouette {
            StackOffset::Silhouette
        } else {
            StackOffset::Zero
        };
        let mut stacked = stack(series, offset)?;
        let baseline_key = derived_baseline(&stacked).map(|baseline| {
            let key = baseline.key;
            stacked.push(baseline);
            key
        });
        Ok(StreamChartLayout {
            series: stacked,
            baseline_key,
        })
    }
}

impl Default for StreamChartSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of [`StreamChartSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct StreamChartLayout {
    /// The real series in stack order, followed by the synthesized baseline
    /// series (present whenever the input was non-empty).
    pub series: Vec<StackedSeries>,
    /// Key of the synthesized baseline series within [`Self::series`].
    pub baseline_key: Option<SeriesKey>,
}

/// Splits a stacked series into maximal runs of defined points.
///
/// Area and line generators must skip undefined (null-valued) categories
/// without bridging across them; each returned range is one contiguous
/// stretch of points that can be drawn as a single path segment.
pub fn defined_runs(points: &[StackedPoint]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, p) in points.iter().enumerate() {
        match (p.is_defined(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..points.len());
    }
    runs
}
