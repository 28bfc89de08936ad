// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `stria_charts_demo`.

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use peniko::Brush;

#[derive(Debug)]
pub(crate) struct SvgDoc {
    view_box: Rect,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    pub(crate) fn polygon(&mut self, vertices: &[Point], fill: &Brush, opacity: Option<f64>) {
        if vertices.is_empty() {
            return;
        }
        self.body.push_str(r#"<path d=""#);
        for (i, v) in vertices.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(self.body, "{cmd}{} {} ", fmt(v.x), fmt(v.y));
        }
        self.body.push_str(r#"Z""#);
        write_paint_attr(&mut self.body, "fill", fill);
        if let Some(o) = opacity {
            let _ = write!(self.body, r#" opacity="{}""#, fmt(o));
        }
        self.body.push_str("/>\n");
    }

    /// A filled band: forward along the top edge, back along the bottom edge.
    pub(crate) fn band(&mut self, top: &[Point], bottom: &[Point], fill: &Brush) {
        if top.is_empty() {
            return;
        }
        self.body.push_str(r#"<path d=""#);
        for (i, v) in top.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(self.body, "{cmd}{} {} ", fmt(v.x), fmt(v.y));
        }
        for v in bottom.iter().rev() {
            let _ = write!(self.body, "L{} {} ", fmt(v.x), fmt(v.y));
        }
        self.body.push_str(r#"Z""#);
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn polyline(&mut self, points: &[Point], stroke: &Brush, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.body.push_str(r#"<path d=""#);
        for (i, v) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(self.body, "{cmd}{} {} ", fmt(v.x), fmt(v.y));
        }
        self.body.push('"');
        self.body.push_str(r#" fill="none""#);
        write_paint_attr(&mut self.body, "stroke", stroke);
        let _ = write!(self.body, r#" stroke-width="{}""#, fmt(width));
        self.body.push_str("/>\n");
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, fill: &Brush) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            fmt(center.x),
            fmt(center.y),
            fmt(radius)
        );
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn into_svg_string(self) -> String {
        let vb = self.view_box;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
                "\n{}</svg>\n"
            ),
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height(),
            self.body
        )
    }
}

fn fmt(v: f64) -> String {
    // Trim float noise so the dumps stay readable.
    format!("{v:.2}")
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}
