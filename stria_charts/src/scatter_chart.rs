// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Voronoi scatter chart layout.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use stria_core::InvalidInput;
use stria_voronoi::{Cell, Site, tessellate};

/// Layout for a Voronoi-tessellated scatter chart.
///
/// Data points are mapped through the x/y scales into viewport space and the
/// viewport is tessellated so every point owns a hit-region covering the
/// locations nearest to it. The regions are recomputed from scratch on every
/// data update and viewport resize.
#[derive(Clone, Copy, Debug)]
pub struct VoronoiScatterSpec {
    /// Scale mapping data x into viewport x.
    pub x_scale: crate::ScaleLinear,
    /// Scale mapping data y into viewport y.
    pub y_scale: crate::ScaleLinear,
    /// Viewport rectangle the cells are clipped to.
    pub viewport: Rect,
}

impl VoronoiScatterSpec {
    /// Creates a scatter spec.
    pub fn new(x_scale: crate::ScaleLinear, y_scale: crate::ScaleLinear, viewport: Rect) -> Self {
        Self {
            x_scale,
            y_scale,
            viewport,
        }
    }

    /// Tessellates the viewport around the given data-space points.
    ///
    /// Each `(point, payload)` pair yields one cell tagged with the payload.
    /// Non-finite data coordinates surface as
    /// [`InvalidInput::NonFiniteCoordinate`] from the tessellator.
    pub fn layout<P>(&self, points: Vec<(Point, P)>) -> Result<Vec<Cell<P>>, InvalidInput> {
        let sites = points
            .into_iter()
            .map(|(p, payload)| {
                Site::new(
                    Point::new(self.x_scale.map(p.x), self.y_scale.map(p.y)),
                    payload,
                )
            })
            .collect();
        tessellate(sites, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use crate::ScaleLinear;

    use super::*;

    #[test]
    fn points_are_scaled_into_the_viewport_before_tessellation() {
        let spec = VoronoiScatterSpec::new(
            ScaleLinear::new((0.0, 1.0), (0.0, 100.0)),
            // Screen y grows downward.
            ScaleLinear::new((0.0, 1.0), (100.0, 0.0)),
            Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        let cells = spec
            .layout(vec![
                (Point::new(0.25, 0.5), "left"),
                (Point::new(0.75, 0.5), "right"),
            ])
            .unwrap();

        assert_eq!(cells.len(), 2);
        // (0.25, 0.5) lands at viewport (25, 50): its cell is the left half.
        let left = cells.iter().find(|c| c.payload == "left").unwrap();
        assert!(
            left.vertices.iter().all(|v| v.x <= 50.0 + 1e-9),
            "left point owns the left half of the viewport"
        );
    }

    #[test]
    fn non_finite_data_coordinates_are_rejected() {
        let spec = VoronoiScatterSpec::new(
            ScaleLinear::new((0.0, 1.0), (0.0, 100.0)),
            ScaleLinear::new((0.0, 1.0), (100.0, 0.0)),
            Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        let result = spec.layout(vec![(Point::new(f64::INFINITY, 0.5), ())]);
        assert_eq!(
            result,
            Err(InvalidInput::NonFiniteCoordinate { site: 0 }),
            "bad data points must not be silently dropped"
        );
    }
}
