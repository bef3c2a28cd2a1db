//! Shape layer: the icon's outline geometry.

use std::f64::consts::PI;

use crate::element::Element;
use crate::geometry::{Point, fmt_num, polygon_path};
use crate::settings::{IconSettings, OutlineSize, Shape};

/// Id of the clip path that embedded images are clipped to.
pub const CLIP_PATH_ID: &str = "clip-path-for-embed";

/// Distance kept between the shape and the viewport edge.
///
/// Half of the thickest stroke, so no outline preset clips.
pub const SHAPE_INSET: f64 = OutlineSize::MAX.stroke_width() as f64 / 2.0;

/// Inner-to-outer radius ratio of the star's points.
const STAR_INNER_RATIO: f64 = 0.5;

/// Builds the shape element for the configured shape and size.
///
/// The shape is centered in the size's viewport with radius (or half side)
/// `(D - 8) / 2`.
pub fn build_shape(settings: &IconSettings) -> Element {
    let dimension = settings.size.pixels() as f64;
    let center = dimension / 2.0;
    let radius = center - SHAPE_INSET;

    match settings.shape {
        Shape::Circle => Element::new("circle")
            .attr("cx", fmt_num(center))
            .attr("cy", fmt_num(center))
            .attr("r", fmt_num(radius)),
        Shape::Square => Element::new("rect")
            .attr("x", fmt_num(SHAPE_INSET))
            .attr("y", fmt_num(SHAPE_INSET))
            .attr("width", fmt_num(radius * 2.0))
            .attr("height", fmt_num(radius * 2.0)),
        Shape::Triangle => path(&regular_polygon(center, radius, 3, 0.0)),
        Shape::Diamond => path(&regular_polygon(center, radius, 4, 0.0)),
        Shape::Pentagon => path(&regular_polygon(center, radius, 5, 0.0)),
        Shape::Hexagon => path(&regular_polygon(center, radius, 6, 30.0)),
        Shape::Octagon => path(&regular_polygon(center, radius, 8, 22.5)),
        Shape::Star => path(&star(center, radius, 5)),
    }
}

/// Builds the clip path that mirrors the shape, used to clip embedded images.
pub fn build_clip_path(settings: &IconSettings) -> Element {
    Element::new("clipPath")
        .attr("id", CLIP_PATH_ID)
        .child(build_shape(settings))
}

fn path(points: &[Point]) -> Element {
    Element::new("path").attr("d", polygon_path(points))
}

/// Vertices of a regular polygon with the first vertex pointing up,
/// then rotated clockwise by `rotation` degrees.
fn regular_polygon(center: f64, radius: f64, sides: u32, rotation: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = (rotation - 90.0 + 360.0 * i as f64 / sides as f64) * PI / 180.0;
            Point::new(center + radius * angle.cos(), center + radius * angle.sin())
        })
        .collect()
}

/// Vertices of a star, alternating between outer and inner radius.
fn star(center: f64, radius: f64, points: u32) -> Vec<Point> {
    let inner = radius * STAR_INNER_RATIO;
    (0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { inner };
            let angle = (-90.0 + 180.0 * i as f64 / points as f64) * PI / 180.0;
            Point::new(center + r * angle.cos(), center + r * angle.sin())
        })
        .collect()
}
