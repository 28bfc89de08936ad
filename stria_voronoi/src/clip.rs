// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-plane clipping of convex vertex rings.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// A cell's vertex ring. Most cells have a handful of vertices, so the ring
/// stays inline.
pub(crate) type Ring = SmallVec<[Point; 8]>;

/// Points within this distance of a boundary count as inside, so shared
/// Voronoi edges stay shared instead of opening hairline gaps.
const EPS_CLIP: f64 = 1e-12;

/// The half-plane of positions at least as close to one site as to another.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HalfPlane {
    normal: Vec2,
    offset: f64,
}

impl HalfPlane {
    /// Half-plane of positions at least as close to `a` as to `b`.
    ///
    /// The boundary is the perpendicular bisector of the segment `ab`;
    /// `a` and `b` must be distinct.
    pub(crate) fn bisector(a: Point, b: Point) -> Self {
        let normal = b - a;
        let offset = normal.dot(a.midpoint(b).to_vec2());
        Self { normal, offset }
    }

    /// Negative inside (closer to `a`), positive outside.
    fn signed(&self, p: Point) -> f64 {
        self.normal.dot(p.to_vec2()) - self.offset
    }
}

/// Sutherland–Hodgman clip of a convex ring against one half-plane.
///
/// Winding is preserved. An empty output means the ring lies entirely
/// outside the half-plane.
pub(crate) fn clip_ring(ring: &Ring, hp: &HalfPlane, out: &mut Ring) {
    out.clear();
    let n = ring.len();
    if n == 0 {
        return;
    }

    let mut prev = ring[n - 1];
    let mut d_prev = hp.signed(prev);
    for &cur in ring {
        let d_cur = hp.signed(cur);
        let cur_inside = d_cur <= EPS_CLIP;
        let prev_inside = d_prev <= EPS_CLIP;

        if cur_inside {
            if !prev_inside {
                out.push(boundary_crossing(prev, cur, d_prev, d_cur));
            }
            out.push(cur);
        } else if prev_inside {
            out.push(boundary_crossing(prev, cur, d_prev, d_cur));
        }

        prev = cur;
        d_prev = d_cur;
    }
}

fn boundary_crossing(a: Point, b: Point, da: f64, db: f64) -> Point {
    // Only called when the edge straddles the boundary, so da != db.
    let t = da / (da - db);
    a.lerp(b, t)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use smallvec::smallvec;

    use super::*;

    fn unit_square() -> Ring {
        smallvec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn bisector_keeps_the_near_half() {
        let hp = HalfPlane::bisector(Point::new(0.25, 0.5), Point::new(0.75, 0.5));
        let mut out = Ring::new();
        clip_ring(&unit_square(), &hp, &mut out);

        assert_eq!(out.len(), 4, "clipped square stays a quad");
        for v in &out {
            assert!(v.x <= 0.5 + 1e-12, "all vertices on the near side, got {v:?}");
        }
        assert!(
            out.iter().filter(|v| (v.x - 0.5).abs() < 1e-12).count() == 2,
            "two vertices on the bisector"
        );
    }

    #[test]
    fn ring_fully_inside_is_unchanged() {
        let hp = HalfPlane::bisector(Point::new(0.5, 0.5), Point::new(10.0, 0.5));
        let mut out = Ring::new();
        let ring = unit_square();
        clip_ring(&ring, &hp, &mut out);
        assert_eq!(out, ring, "far bisector must not cut the ring");
    }

    #[test]
    fn ring_fully_outside_clips_away() {
        let hp = HalfPlane::bisector(Point::new(10.0, 0.5), Point::new(0.5, 0.5));
        let mut out = Ring::new();
        clip_ring(&unit_square(), &hp, &mut out);
        assert!(out.is_empty(), "ring on the far side must vanish");
    }
}
