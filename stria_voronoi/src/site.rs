// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generator sites and output cells.

use kurbo::Point;
use smallvec::SmallVec;

/// A tessellation generator: a planar position plus an opaque payload.
///
/// The payload is host data (identity key, style attributes) the geometry
/// core never inspects; it is moved into the generated [`Cell`] so consumers
/// can map each region back to its datum.
#[derive(Debug, Clone, PartialEq)]
pub struct Site<P> {
    /// Position of the generator.
    pub position: Point,
    /// Host data carried through to the cell.
    pub payload: P,
}

impl<P> Site<P> {
    /// Creates a site.
    pub fn new(position: impl Into<Point>, payload: P) -> Self {
        Self {
            position: position.into(),
            payload,
        }
    }
}

/// One Voronoi cell: the region of the clip rectangle nearer to its
/// generating site than to any other site.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<P> {
    /// Index of the generating site in the input order.
    pub site: usize,
    /// Payload moved from the generating site.
    pub payload: P,
    /// Convex polygon ring, counter-clockwise in a y-up frame, without a
    /// repeated closing vertex.
    ///
    /// Empty when the site's region lies entirely outside the clip rectangle
    /// or the site is a later duplicate of a coincident group.
    pub vertices: SmallVec<[Point; 8]>,
}

impl<P> Cell<P> {
    /// Returns true when the cell has no region inside the clip rectangle.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
