// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series and stacked-band records.

extern crate alloc;

use alloc::vec::Vec;

/// Stable identity for a series.
///
/// The key is opaque to the geometry kernels; it exists so the rendering
/// layer can match series across re-renders (enter/update/exit animation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesKey(pub u64);

/// An ordered sequence of nullable values over a shared category domain.
///
/// All series handed to the stack accumulator must have the same length:
/// values are index-aligned across series. `None` means the value is absent
/// at that category; it contributes no height and produces no band, but the
/// slot is kept so index-aligned access across series stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Stable identity of this series.
    pub key: SeriesKey,
    /// Values in category order. `None` = absent.
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// Creates a series from a key and values in category order.
    pub fn new(key: SeriesKey, values: Vec<Option<f64>>) -> Self {
        Self { key, values }
    }

    /// Creates a series where every value is present.
    pub fn from_values(key: SeriesKey, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            key,
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// Number of categories in this series' domain.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no categories.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Vertical extent of one stacked segment: `y0` is the baseline, `y1` the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Bottom of the segment in stacked coordinates.
    pub y0: f64,
    /// Top of the segment (`y0 + value` under the zero offset).
    pub y1: f64,
}

impl Band {
    /// Height of the segment.
    pub fn thickness(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// One category slot of a stacked series.
///
/// `band` is `Some` exactly when `value` is `Some`: absent input values carry
/// no stacked coordinates, and consumers must skip them when generating
/// area/line geometry (without merging the defined neighbors on either side).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedPoint {
    /// The input value at this category, if present.
    pub value: Option<f64>,
    /// The stacked band at this category, if the value was present.
    pub band: Option<Band>,
}

impl StackedPoint {
    /// A slot for an absent input value.
    pub const UNDEFINED: Self = Self {
        value: None,
        band: None,
    };

    /// Returns true if this slot has a stacked band.
    pub fn is_defined(&self) -> bool {
        self.band.is_some()
    }
}

/// A series annotated with stacked bands.
///
/// This is a fresh output record: the accumulator never mutates its input
/// [`Series`], it builds new `StackedSeries` carrying the input key. Outputs
/// are owned by the caller for the duration of one render pass; nothing is
/// cached across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    /// Identity carried over from the input series (or freshly minted for
    /// synthesized series such as the derived baseline).
    pub key: SeriesKey,
    /// One slot per category, index-aligned with the input.
    pub points: Vec<StackedPoint>,
}

impl StackedSeries {
    /// Number of categories.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no categories.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
