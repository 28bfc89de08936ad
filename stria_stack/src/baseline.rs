// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived baseline series for stream charts.

extern crate alloc;

use stria_core::{Band, SeriesKey, StackedPoint, StackedSeries};

/// Synthesizes the stream-chart lower-outline series.
///
/// Selects the visually lowest band (the stacked series with the smallest
/// sum of `y0` over its defined points) and builds a new series whose value
/// and band at each category sit on that series' lower edge. Stream charts
/// draw it as an outline along the bottom of the whole stack; callers must
/// append it *after* all real series so z-order-dependent consumers draw it
/// last.
///
/// The synthesized series gets a fresh key, `1 + max(input keys)`, or the
/// smallest unused key when that would overflow. Either way the key is
/// deterministic for a given input and cannot collide with any real series.
///
/// Returns `None` when `stacked` is empty. Ties on the `y0` sum resolve to
/// the earliest series in stack order.
pub fn derived_baseline(stacked: &[StackedSeries]) -> Option<StackedSeries> {
    let lowest = stacked
        .iter()
        .min_by(|a, b| baseline_sum(a).total_cmp(&baseline_sum(b)))?;
    let key = fresh_key(stacked)?;

    let points = lowest
        .points
        .iter()
        .map(|p| match p.band {
            Some(b) => StackedPoint {
                value: Some(b.y0),
                band: Some(Band { y0: b.y0, y1: b.y0 }),
            },
            None => StackedPoint::UNDEFINED,
        })
        .collect();

    Some(StackedSeries { key, points })
}

fn fresh_key(stacked: &[StackedSeries]) -> Option<SeriesKey> {
    let max_key = stacked.iter().map(|s| s.key.0).max()?;
    match max_key.checked_add(1) {
        Some(k) => Some(SeriesKey(k)),
        // The top of the key space is taken; scan for the smallest gap.
        None => {
            let mut k = 0;
            while stacked.iter().any(|s| s.key.0 == k) {
                k += 1;
            }
            Some(SeriesKey(k))
        }
    }
}

fn baseline_sum(series: &StackedSeries) -> f64 {
    series
        .points
        .iter()
        .filter_map(|p| p.band.map(|b| b.y0))
        .sum()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use stria_core::{InvalidInput, Series, SeriesKey};

    use super::*;
    use crate::{StackOffset, stack};

    fn stacked(offset: StackOffset) -> Result<alloc::vec::Vec<StackedSeries>, InvalidInput> {
        stack(
            &[
                Series::from_values(SeriesKey(7), [1.0, 2.0, 3.0]),
                Series::from_values(SeriesKey(3), [2.0, 1.0, 2.0]),
            ],
            offset,
        )
    }

    #[test]
    fn derived_series_tracks_minimum_baseline_per_category() {
        let stacked = stacked(StackOffset::Silhouette).unwrap();
        let derived = derived_baseline(&stacked).expect("non-empty stack");

        for c in 0..3 {
            let min_y0 = stacked
                .iter()
                .filter_map(|s| s.points[c].band.map(|b| b.y0))
                .fold(f64::INFINITY, f64::min);
            let b = derived.points[c].band.expect("derived band defined");
            assert_eq!(b.y0, min_y0, "derived baseline must hug the lowest edge");
            assert_eq!(b.y1, b.y0, "derived bands have zero thickness");
            assert_eq!(derived.points[c].value, Some(min_y0));
        }
    }

    #[test]
    fn derived_key_is_fresh_and_deterministic() {
        let stacked = stacked(StackOffset::Zero).unwrap();
        let a = derived_baseline(&stacked).unwrap();
        let b = derived_baseline(&stacked).unwrap();

        assert_eq!(a.key, SeriesKey(8), "key is 1 + max(real keys)");
        assert_eq!(a, b, "synthesis is deterministic");
        assert!(
            stacked.iter().all(|s| s.key != a.key),
            "derived key must not collide with real keys"
        );
    }

    #[test]
    fn derived_key_skips_past_the_key_space_top() {
        let stacked = stack(
            &[
                Series::from_values(SeriesKey(u64::MAX), [1.0]),
                Series::from_values(SeriesKey(0), [2.0]),
            ],
            StackOffset::Zero,
        )
        .unwrap();
        let derived = derived_baseline(&stacked).unwrap();

        assert_eq!(
            derived.key,
            SeriesKey(1),
            "max+1 would wrap; the smallest unused key is taken instead"
        );
        assert!(
            stacked.iter().all(|s| s.key != derived.key),
            "derived key must not collide with real keys"
        );
    }

    #[test]
    fn null_slots_stay_undefined_in_derived_series() {
        let stacked = stack(
            &[Series::new(SeriesKey(1), vec![Some(1.0), None])],
            StackOffset::Zero,
        )
        .unwrap();
        let derived = derived_baseline(&stacked).unwrap();
        assert!(derived.points[0].is_defined(), "defined slot carries over");
        assert!(!derived.points[1].is_defined(), "null slot carries over");
    }

    #[test]
    fn empty_stack_has_no_derived_baseline() {
        assert_eq!(derived_baseline(&[]), None);
    }
}
