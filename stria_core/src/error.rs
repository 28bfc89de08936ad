// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors shared by the geometry kernels.

/// Malformed or inconsistent geometry input.
///
/// This is the only error kind the kernels raise. It is always returned
/// synchronously at the point of detection and never coerced into a default
/// geometry. Degenerate but valid inputs (null values mid-series, coincident
/// or collinear sites, zero/one-site tessellation) are handled without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Series do not share the same category-domain length.
    MismatchedDomains {
        /// Index of the offending series in input order.
        series: usize,
        /// Domain length established by the first series.
        expected: usize,
        /// Domain length of the offending series.
        got: usize,
    },
    /// A series value is NaN or infinite (use `None` for absent values).
    NonFiniteValue {
        /// Index of the offending series in input order.
        series: usize,
        /// Category index of the offending value.
        category: usize,
    },
    /// A site coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Index of the offending site in input order.
        site: usize,
    },
    /// The clip rectangle has non-positive width or height.
    DegenerateClipRect,
}
