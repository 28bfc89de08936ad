// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for the Stria geometry kernels.
mod html;
mod svg;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use stria_charts::{
    BubbleMapSpec, MapBubble, ScaleLinear, StreamChartSpec, VoronoiScatterSpec, defined_runs,
};
use stria_core::{Series, SeriesKey, StackedSeries};

fn main() {
    let sections = vec![streamgraph_demo(), scatter_demo(), bubble_map_demo()];

    let html = html::render_report("Stria charts demo", &sections);
    std::fs::write("stria_charts_demo.html", html).expect("write stria_charts_demo.html");
    println!("wrote stria_charts_demo.html");
}

fn series_fills() -> Vec<Brush> {
    vec![
        Brush::Solid(css::CORNFLOWER_BLUE),
        Brush::Solid(css::TOMATO),
        Brush::Solid(css::ORANGE),
        Brush::Solid(css::MEDIUM_SEA_GREEN),
    ]
}

fn streamgraph_demo() -> html::HtmlSection {
    // Silhouette-stacked streamgraph with a null gap in the middle series.
    // The synthesized baseline series is drawn last as the bottom outline.
    let series = vec![
        Series::from_values(
            SeriesKey(0),
            [1.0, 1.4, 2.0, 2.6, 2.2, 1.8, 1.5, 1.2, 1.0],
        ),
        Series::new(
            SeriesKey(1),
            vec![
                Some(0.6),
                Some(0.9),
                Some(1.2),
                None,
                None,
                Some(1.0),
                Some(0.9),
                Some(0.7),
                Some(0.6),
            ],
        ),
        Series::from_values(
            SeriesKey(2),
            [0.8, 0.7, 0.8, 1.0, 1.3, 1.1, 0.9, 0.8, 0.7],
        ),
    ];

    let layout = StreamChartSpec::new().layout(&series).expect("layout");
    let n = series[0].len();

    let view = Rect::new(0.0, 0.0, 360.0, 180.0);
    #[allow(clippy::cast_precision_loss, reason = "small demo category counts")]
    let x_scale = ScaleLinear::new((0.0, (n - 1) as f64), (20.0, view.x1 - 20.0));
    let (min_y, max_y) = band_extent(&layout.series);
    // Screen y grows downward.
    let y_scale = ScaleLinear::new((min_y, max_y), (view.y1 - 20.0, 20.0));

    let mut doc = svg::SvgDoc::new(view);
    let fills = series_fills();
    for (i, stacked) in layout.series.iter().enumerate() {
        if Some(stacked.key) == layout.baseline_key {
            continue;
        }
        let fill = &fills[i % fills.len()];
        for run in defined_runs(&stacked.points) {
            let mut top = Vec::new();
            let mut bottom = Vec::new();
            for c in run {
                #[allow(clippy::cast_precision_loss, reason = "small demo category counts")]
                let x = x_scale.map(c as f64);
                let band = stacked.points[c].band.expect("defined run");
                top.push(Point::new(x, y_scale.map(band.y1)));
                bottom.push(Point::new(x, y_scale.map(band.y0)));
            }
            doc.band(&top, &bottom, fill);
        }
    }

    // Bottom outline from the baseline series.
    if let Some(key) = layout.baseline_key {
        let baseline = layout
            .series
            .iter()
            .find(|s| s.key == key)
            .expect("baseline present");
        for run in defined_runs(&baseline.points) {
            let outline: Vec<Point> = run
                .map(|c| {
                    #[allow(clippy::cast_precision_loss, reason = "small demo category counts")]
                    let x = x_scale.map(c as f64);
                    let band = baseline.points[c].band.expect("defined run");
                    Point::new(x, y_scale.map(band.y0))
                })
                .collect();
            doc.polyline(&outline, &Brush::Solid(css::BLACK), 1.5);
        }
    }

    html::HtmlSection {
        title: "Streamgraph",
        description: "Silhouette-stacked series with a null gap; the derived baseline outline hugs the lower edge and skips the gap.",
        svg: doc.into_svg_string(),
    }
}

fn scatter_demo() -> html::HtmlSection {
    // Voronoi hit-regions for a scatter plot: each region covers the
    // viewport locations nearest to its data point.
    let view = Rect::new(0.0, 0.0, 300.0, 200.0);
    let spec = VoronoiScatterSpec::new(
        ScaleLinear::new((0.0, 10.0), (view.x0, view.x1)),
        ScaleLinear::new((0.0, 10.0), (view.y1, view.y0)),
        view,
    );

    let data = vec![
        Point::new(1.5, 2.0),
        Point::new(3.0, 7.5),
        Point::new(4.2, 4.8),
        Point::new(6.0, 1.2),
        Point::new(6.8, 8.4),
        Point::new(8.5, 5.0),
        Point::new(9.2, 2.6),
        Point::new(2.2, 9.0),
    ];
    let cells = spec
        .layout(data.iter().map(|&p| (p, ())).collect())
        .expect("layout");

    let mut doc = svg::SvgDoc::new(view);
    let fills = series_fills();
    for (i, cell) in cells.iter().enumerate() {
        doc.polygon(&cell.vertices, &fills[i % fills.len()], Some(0.25));
        doc.polyline(&closed(&cell.vertices), &Brush::Solid(css::DARK_GRAY), 1.0);
    }
    for p in &data {
        let site = Point::new(spec.x_scale.map(p.x), spec.y_scale.map(p.y));
        doc.circle(site, 3.0, &Brush::Solid(css::BLACK));
    }

    html::HtmlSection {
        title: "Voronoi scatter",
        description: "Each point owns a convex hit-region clipped to the viewport; together the regions tile it exactly.",
        svg: doc.into_svg_string(),
    }
}

fn bubble_map_demo() -> html::HtmlSection {
    // Bubble map: region fill opacity scales with bubble radius.
    let view = Rect::new(0.0, 0.0, 300.0, 200.0);
    let bubbles = vec![
        MapBubble {
            position: Point::new(60.0, 50.0),
            radius: 18.0,
            payload: (),
        },
        MapBubble {
            position: Point::new(150.0, 120.0),
            radius: 9.0,
            payload: (),
        },
        MapBubble {
            position: Point::new(230.0, 60.0),
            radius: 24.0,
            payload: (),
        },
        MapBubble {
            position: Point::new(110.0, 170.0),
            radius: 6.0,
            payload: (),
        },
    ];
    let positions: Vec<(Point, f64)> = bubbles.iter().map(|b| (b.position, b.radius)).collect();

    let layout = BubbleMapSpec::new(view).layout(bubbles).expect("layout");

    let mut doc = svg::SvgDoc::new(view);
    for (cell, &(_, radius)) in layout.cells.iter().zip(&positions) {
        let opacity = radius / layout.max_radius;
        doc.polygon(&cell.vertices, &Brush::Solid(css::STEEL_BLUE), Some(opacity));
        doc.polyline(&closed(&cell.vertices), &Brush::Solid(css::DARK_GRAY), 1.0);
    }
    for &(position, radius) in &positions {
        doc.circle(position, radius, &Brush::Solid(css::TOMATO.with_alpha(0.7)));
    }

    html::HtmlSection {
        title: "Voronoi bubble map",
        description: "Already-projected bubbles tessellate the viewport; each region's opacity is its bubble radius over the maximum.",
        svg: doc.into_svg_string(),
    }
}

fn band_extent(series: &[StackedSeries]) -> (f64, f64) {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for s in series {
        for p in &s.points {
            if let Some(band) = p.band {
                min_y = min_y.min(band.y0);
                max_y = max_y.max(band.y1);
            }
        }
    }
    if !min_y.is_finite() || !max_y.is_finite() || min_y == max_y {
        (0.0, 1.0)
    } else {
        (min_y, max_y)
    }
}

fn closed(vertices: &[Point]) -> Vec<Point> {
    let mut out = vertices.to_vec();
    if let Some(&first) = vertices.first() {
        out.push(first);
    }
    out
}
