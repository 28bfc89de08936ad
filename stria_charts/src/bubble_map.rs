// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Voronoi bubble map layout.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use stria_core::InvalidInput;
use stria_voronoi::{Cell, Site, tessellate};

/// A map bubble already projected into viewport space.
///
/// Geographic projection happens in the host's map engine; the layout only
/// sees pixel positions and radii.
#[derive(Clone, Debug, PartialEq)]
pub struct MapBubble<P> {
    /// Projected position of the bubble center.
    pub position: Point,
    /// Bubble radius in viewport units.
    pub radius: f64,
    /// Host datum carried through to the cell.
    pub payload: P,
}

/// Layout for a Voronoi bubble map.
#[derive(Clone, Copy, Debug)]
pub struct BubbleMapSpec {
    /// Viewport rectangle the cells are clipped to.
    pub viewport: Rect,
}

impl BubbleMapSpec {
    /// Creates a bubble-map spec for the given viewport.
    pub fn new(viewport: Rect) -> Self {
        Self { viewport }
    }

    /// Tessellates the viewport around the bubble centers.
    ///
    /// The maximum bubble radius is reported alongside the cells: the host
    /// renderer derives each region's fill opacity from
    /// `radius / max_radius`. Non-finite radii are ignored by the maximum.
    pub fn layout<P>(&self, bubbles: Vec<MapBubble<P>>) -> Result<BubbleMapLayout<P>, InvalidInput> {
        let max_radius = bubbles.iter().fold(0.0, |m: f64, b| m.max(b.radius));
        let sites = bubbles
            .into_iter()
            .map(|b| Site::new(b.position, b.payload))
            .collect();
        Ok(BubbleMapLayout {
            cells: tessellate(sites, self.viewport)?,
            max_radius,
        })
    }
}

/// Output of [`BubbleMapSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleMapLayout<P> {
    /// One cell per bubble, in input order.
    pub cells: Vec<Cell<P>>,
    /// Largest bubble radius, or `0.0` when there are no bubbles.
    pub max_radius: f64,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn layout_reports_cells_and_max_radius() {
        let spec = BubbleMapSpec::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        let layout = spec
            .layout(vec![
                MapBubble {
                    position: Point::new(50.0, 50.0),
                    radius: 8.0,
                    payload: "a",
                },
                MapBubble {
                    position: Point::new(150.0, 50.0),
                    radius: 20.0,
                    payload: "b",
                },
            ])
            .unwrap();

        assert_eq!(layout.cells.len(), 2);
        assert_eq!(layout.max_radius, 20.0);
        assert_eq!(layout.cells[0].payload, "a");
        assert!(
            layout.cells.iter().all(|c| !c.is_empty()),
            "bubbles inside the viewport own non-empty regions"
        );
    }

    #[test]
    fn empty_map_has_zero_max_radius() {
        let spec = BubbleMapSpec::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let layout = spec.layout(Vec::<MapBubble<()>>::new()).unwrap();
        assert!(layout.cells.is_empty());
        assert_eq!(layout.max_radius, 0.0);
    }
}
