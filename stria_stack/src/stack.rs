// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stacking accumulation pass and offset post-passes.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use stria_core::{Band, InvalidInput, Series, StackedPoint, StackedSeries};

use crate::offset::StackOffset;

/// Stacks the given series into `(y0, y1)` bands under the given offset.
///
/// Series order is the stacking order: the first series sits at the bottom.
/// All series must share the same category-domain length; a shorter or
/// longer series is a configuration error, not something to truncate or pad.
///
/// Per category, values accumulate in series order. An absent (`None`) value
/// contributes no height and leaves its slot undefined, but does not disturb
/// the accumulator for later series; index-aligned access across the
/// outputs stays valid.
///
/// The result is deterministic for a given input, computed in O(S·C) time
/// and space, and identical across repeated invocations.
pub fn stack(series: &[Series], offset: StackOffset) -> Result<Vec<StackedSeries>, InvalidInput> {
    let categories = validate(series)?;

    let mut out: Vec<StackedSeries> = series
        .iter()
        .map(|s| StackedSeries {
            key: s.key,
            points: Vec::with_capacity(categories),
        })
        .collect();

    // Zero-offset accumulation; `totals` keeps the per-category stack total
    // for the offset post-passes.
    let mut totals: Vec<f64> = Vec::with_capacity(categories);
    for c in 0..categories {
        let mut acc = 0.0;
        for (i, s) in series.iter().enumerate() {
            let point = match s.values[c] {
                None => StackedPoint::UNDEFINED,
                Some(v) => {
                    let band = Band {
                        y0: acc,
                        y1: acc + v,
                    };
                    acc = band.y1;
                    StackedPoint {
                        value: Some(v),
                        band: Some(band),
                    }
                }
            };
            out[i].points.push(point);
        }
        totals.push(acc);
    }

    match offset {
        StackOffset::Zero => {}
        StackOffset::Silhouette => {
            for c in 0..categories {
                shift_category(&mut out, c, -totals[c] / 2.0);
            }
        }
        StackOffset::Wiggle => {
            let baselines = wiggle_baselines(series, &totals, categories);
            for c in 0..categories {
                shift_category(&mut out, c, baselines[c]);
            }
        }
        StackOffset::Normalize => {
            for c in 0..categories {
                let total = totals[c];
                for s in &mut out {
                    if let Some(band) = &mut s.points[c].band {
                        *band = if total == 0.0 {
                            Band { y0: 0.0, y1: 0.0 }
                        } else {
                            Band {
                                y0: band.y0 / total,
                                y1: band.y1 / total,
                            }
                        };
                    }
                }
            }
        }
    }

    Ok(out)
}

fn validate(series: &[Series]) -> Result<usize, InvalidInput> {
    let expected = series.first().map_or(0, Series::len);
    for (i, s) in series.iter().enumerate() {
        if s.len() != expected {
            return Err(InvalidInput::MismatchedDomains {
                series: i,
                expected,
                got: s.len(),
            });
        }
        for (c, v) in s.values.iter().enumerate() {
            if let Some(v) = v
                && !v.is_finite()
            {
                return Err(InvalidInput::NonFiniteValue {
                    series: i,
                    category: c,
                });
            }
        }
    }
    Ok(expected)
}

fn shift_category(out: &mut [StackedSeries], c: usize, dy: f64) {
    for s in out {
        if let Some(band) = &mut s.points[c].band {
            band.y0 += dy;
            band.y1 += dy;
        }
    }
}

/// Per-category baseline shifts for the wiggle offset.
///
/// This is d3's `wiggle` baseline with unit spacing between categories:
/// starting from zero, each step subtracts the thickness-weighted mean slope
/// so the overall silhouette wiggles as little as possible. Absent values
/// count as zero for both thickness and slope.
fn wiggle_baselines(series: &[Series], totals: &[f64], categories: usize) -> Vec<f64> {
    let mut baselines = vec![0.0; categories];
    let mut offset = 0.0;
    for c in 1..categories {
        let total = totals[c];
        let mut weighted = 0.0;
        let mut slope_below = 0.0;
        for s in series {
            let v = s.values[c].unwrap_or(0.0);
            let dv = v - s.values[c - 1].unwrap_or(0.0);
            weighted += (slope_below + 0.5 * dv) * v;
            slope_below += dv;
        }
        if total != 0.0 {
            offset -= weighted / total;
        }
        baselines[c] = offset;
    }
    baselines
}
