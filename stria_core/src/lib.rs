// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data model for the Stria chart-geometry kernels.
//!
//! This crate holds the types both kernels operate on:
//! - **Series** data: ordered, nullable values over a shared category domain,
//!   consumed by `stria_stack` and annotated into stacked bands.
//! - **Validation**: the [`InvalidInput`] error taxonomy shared by every
//!   kernel entry point. Malformed inputs (mismatched domains, non-finite
//!   coordinates, degenerate clip rectangles) fail synchronously; degenerate
//!   but valid inputs (null values, coincident or collinear points) never do.
//!
//! Rendering, tooltips, palettes, and host data parsing are collaborators of
//! this workspace, not part of it: the kernels consume plain numeric data and
//! return plain geometric results.

#![no_std]

extern crate alloc;

mod error;
mod series;

pub use error::InvalidInput;
pub use series::{Band, Series, SeriesKey, StackedPoint, StackedSeries};
