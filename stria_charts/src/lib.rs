// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-layout facades over the Stria geometry kernels.
//!
//! Each facade is a thin, per-visual wiring of one kernel:
//! - [`StreamChartSpec`] stacks series and appends the derived baseline
//!   outline (stream/stacked area charts);
//! - [`VoronoiScatterSpec`] maps data points through linear scales and
//!   tessellates the viewport into hit-regions (Voronoi scatter charts);
//! - [`BubbleMapSpec`] tessellates already-projected map bubbles
//!   (Voronoi bubble maps).
//!
//! The facades stop at geometry: SVG/DOM element creation, transitions,
//! tooltips, palettes and selection wiring live in the embedding host.

#![no_std]

extern crate alloc;

mod bubble_map;
mod scale;
mod scatter_chart;
mod stream_chart;

pub use bubble_map::{BubbleMapLayout, BubbleMapSpec, MapBubble};
pub use scale::ScaleLinear;
pub use scatter_chart::VoronoiScatterSpec;
pub use stream_chart::{StreamChartLayout, StreamChartSpec, defined_runs};
