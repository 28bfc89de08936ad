// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Voronoi tessellation clipped to a rectangle.
//!
//! [`tessellate`] partitions a clip rectangle into one convex polygon
//! [`Cell`] per input [`Site`]: each cell's interior is the set of positions
//! closer to its generating site than to any other. Chart plugins use the
//! cells as enlarged hit/selection regions for scatter points and map
//! bubbles.
//!
//! Construction is per-cell incremental clipping: every cell starts as the
//! full clip rectangle and is cut by the perpendicular-bisector half-plane
//! against neighboring sites. Candidates come from a uniform site grid in
//! batches of increasing distance, so a security-radius bound can stop early
//! once no remaining neighbor can reach the cell.
//!
//! The tessellation is a pure function over immutable input; outputs are
//! rebuilt from scratch on every call.

#![no_std]

extern crate alloc;

mod clip;
mod site;
mod tessellate;

pub use site::{Cell, Site};
pub use tessellate::tessellate;
