// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tessellation driver.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use stria_core::InvalidInput;

use crate::clip::{HalfPlane, Ring, clip_ring};
use crate::site::{Cell, Site};

/// Tessellates the clip rectangle into one Voronoi cell per site.
///
/// Every input site yields exactly one output cell carrying that site's
/// payload; cells are emitted in input order, though consumers must not rely
/// on the order (match by payload or site index instead). Input order never
/// affects cell geometry.
///
/// Degenerate inputs are valid:
/// - zero sites produce zero cells;
/// - a single (distinct) site owns the whole clip rectangle;
/// - collinear sites degenerate into parallel strips;
/// - a site outside the clip rectangle gets a truncated, possibly empty,
///   cell;
/// - coincident sites (identical coordinates, with `0.0` and `-0.0` counting
///   as identical) are grouped: the lowest input index owns the shared
///   region and later duplicates get an empty cell.
///
/// Errors: a clip rectangle with non-positive width or height is
/// [`InvalidInput::DegenerateClipRect`]; any NaN or infinite site coordinate
/// is [`InvalidInput::NonFiniteCoordinate`]. Bad sites are never silently
/// dropped.
pub fn tessellate<P>(sites: Vec<Site<P>>, clip: Rect) -> Result<Vec<Cell<P>>, InvalidInput> {
    if !(clip.x0 < clip.x1 && clip.y0 < clip.y1) {
        return Err(InvalidInput::DegenerateClipRect);
    }
    for (i, s) in sites.iter().enumerate() {
        if !(s.position.x.is_finite() && s.position.y.is_finite()) {
            return Err(InvalidInput::NonFiniteCoordinate { site: i });
        }
    }
    if sites.is_empty() {
        return Ok(Vec::new());
    }

    // Group exact-coordinate duplicates. The owner (lowest input index) of
    // each group competes in the diagram; later duplicates get empty cells.
    let mut owners: HashMap<(u64, u64), usize> = HashMap::with_capacity(sites.len());
    let mut owner_of: Vec<usize> = Vec::with_capacity(sites.len());
    let mut distinct: Vec<Point> = Vec::with_capacity(sites.len());
    for (i, s) in sites.iter().enumerate() {
        let key = (canonical_bits(s.position.x), canonical_bits(s.position.y));
        let owner = *owners.entry(key).or_insert(i);
        owner_of.push(owner);
        if owner == i {
            distinct.push(s.position);
        }
    }

    let grid = SiteGrid::build(&distinct);

    let corners = [
        Point::new(clip.x0, clip.y0),
        Point::new(clip.x1, clip.y0),
        Point::new(clip.x1, clip.y1),
        Point::new(clip.x0, clip.y1),
    ];

    let mut cells = Vec::with_capacity(sites.len());
    let mut candidates: Vec<usize> = Vec::new();
    let mut batch: Vec<(f64, Point)> = Vec::new();
    let mut cell_ring = Ring::new();
    let mut scratch = Ring::new();

    for (i, site) in sites.into_iter().enumerate() {
        if owner_of[i] != i {
            cells.push(Cell {
                site: i,
                payload: site.payload,
                vertices: Ring::new(),
            });
            continue;
        }
        let p = site.position;
        let (bx, by) = grid.bucket_of(p);

        cell_ring.clear();
        cell_ring.extend_from_slice(&corners);

        // Visit neighbor sites in batches of increasing distance, supplied
        // by the grid ring by ring. Within a batch the clip order is sorted
        // by distance with a coordinate tie-break, so the clipping sequence
        // is independent of input order.
        'rings: for r in 0.. {
            // Security radius: a neighbor more than twice as far as the
            // farthest cell vertex cannot cut the cell. Buckets on ring `r`
            // and beyond are at least `ring_min_distance(r)` away.
            let lb = grid.ring_min_distance(r);
            if lb * lb > 4.0 * max_vertex_dist_squared(p, &cell_ring) {
                break;
            }
            candidates.clear();
            if !grid.ring_buckets(bx, by, r, &mut candidates) {
                break;
            }
            batch.clear();
            batch.extend(
                candidates
                    .iter()
                    .map(|&j| distinct[j])
                    .filter(|&q| q != p)
                    .map(|q| (p.distance_squared(q), q)),
            );
            batch.sort_unstable_by(|a, b| {
                a.0.total_cmp(&b.0)
                    .then_with(|| a.1.x.total_cmp(&b.1.x))
                    .then_with(|| a.1.y.total_cmp(&b.1.y))
            });
            for &(d2, q) in &batch {
                if d2 > 4.0 * max_vertex_dist_squared(p, &cell_ring) {
                    // Later batch entries are farther still.
                    break;
                }
                clip_ring(&cell_ring, &HalfPlane::bisector(p, q), &mut scratch);
                core::mem::swap(&mut cell_ring, &mut scratch);
                if cell_ring.is_empty() {
                    break 'rings;
                }
            }
        }

        cells.push(Cell {
            site: i,
            payload: site.payload,
            vertices: cell_ring.clone(),
        });
    }

    Ok(cells)
}

/// Coordinate bits with signed zeros collapsed, so `0.0` and `-0.0` group as
/// the same site position.
fn canonical_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

fn max_vertex_dist_squared(p: Point, ring: &Ring) -> f64 {
    ring.iter().map(|&v| p.distance_squared(v)).fold(0.0, f64::max)
}

/// Uniform bucket grid over the distinct sites.
///
/// Buckets supply neighbor candidates ring by ring outward from a site's own
/// bucket, so on well-distributed inputs each cell looks at a handful of
/// nearby sites instead of all of them. Degenerate extents (all sites on a
/// line or a single point) collapse to zero-width buckets; the traversal
/// then visits every bucket and correctness falls back on the per-neighbor
/// security-radius check.
#[derive(Debug)]
struct SiteGrid {
    x0: f64,
    y0: f64,
    cell_w: f64,
    cell_h: f64,
    side: usize,
    buckets: Vec<Vec<usize>>,
}

impl SiteGrid {
    /// Builds a `side x side` grid with `side = max(1, isqrt(n))`, about one
    /// site per bucket on average.
    fn build(sites: &[Point]) -> Self {
        let mut x0 = f64::INFINITY;
        let mut y0 = f64::INFINITY;
        let mut x1 = f64::NEG_INFINITY;
        let mut y1 = f64::NEG_INFINITY;
        for p in sites {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        let side = sites.len().isqrt().max(1);
        #[allow(clippy::cast_precision_loss, reason = "isqrt of a vec length")]
        let divisions = side as f64;
        let mut grid = Self {
            x0,
            y0,
            cell_w: (x1 - x0) / divisions,
            cell_h: (y1 - y0) / divisions,
            side,
            buckets: vec![Vec::new(); side * side],
        };
        for (j, p) in sites.iter().enumerate() {
            let (bx, by) = grid.bucket_of(*p);
            grid.buckets[by * side + bx].push(j);
        }
        grid
    }

    fn bucket_of(&self, p: Point) -> (usize, usize) {
        (
            self.axis_index(p.x - self.x0, self.cell_w),
            self.axis_index(p.y - self.y0, self.cell_h),
        )
    }

    fn axis_index(&self, offset: f64, cell: f64) -> usize {
        if cell > 0.0 {
            // `offset` is within the site extent, so this never goes
            // negative; the max edge clamps into the last bucket.
            #[allow(clippy::cast_possible_truncation, reason = "clamped to bucket range")]
            let i = (offset / cell) as usize;
            i.min(self.side - 1)
        } else {
            0
        }
    }

    /// Lower bound on the distance from a site to any position in a bucket
    /// on Chebyshev ring `r` of its own bucket. Zero for degenerate bucket
    /// extents, which disables ring-level early termination.
    fn ring_min_distance(&self, r: usize) -> f64 {
        #[allow(clippy::cast_precision_loss, reason = "small ring index")]
        let steps = r.saturating_sub(1) as f64;
        steps * self.cell_w.min(self.cell_h)
    }

    /// Pushes the site indices held by every bucket on Chebyshev ring `r`
    /// around `(bx, by)`. Returns `false` once the whole ring lies off-grid,
    /// which means no unvisited bucket remains.
    fn ring_buckets(&self, bx: usize, by: usize, r: usize, out: &mut Vec<usize>) -> bool {
        #[allow(clippy::cast_possible_wrap, reason = "bucket counts are tiny")]
        let (bx, by, r, side) = (bx as isize, by as isize, r as isize, self.side as isize);
        if r == 0 {
            #[allow(clippy::cast_sign_loss, reason = "bucket indices are in range")]
            out.extend_from_slice(&self.buckets[(by * side + bx) as usize]);
            return true;
        }

        let mut on_grid = false;
        let mut visit = |x: isize, y: isize| {
            if (0..side).contains(&x) && (0..side).contains(&y) {
                on_grid = true;
                #[allow(clippy::cast_sign_loss, reason = "checked in range above")]
                out.extend_from_slice(&self.buckets[(y * side + x) as usize]);
            }
        };
        for x in (bx - r)..=(bx + r) {
            visit(x, by - r);
            visit(x, by + r);
        }
        for y in (by - r + 1)..(by + r) {
            visit(bx - r, y);
            visit(bx + r, y);
        }
        on_grid
    }
}
