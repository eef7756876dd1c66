//! Circular region queries over a built [`QuadTree`].
//!
//! Subtrees are pruned with the query circle's bounding square: a node is only
//! descended into when that square overlaps its cell, and only leaf points are
//! tested against the exact distance.

use tracing::trace;

use crate::geometry::{Bounds, Point, circle_contains_rect, distance_to, rect_intersects_rect};
use crate::quadtree::QuadTree;

impl QuadTree {
    /// Returns every point strictly closer than `radius` to `center`.
    ///
    /// Points exactly `radius` away are excluded. A radius that is not
    /// positive returns nothing. Results follow depth-first quadrant order
    /// (bottom-left, top-left, top-right, bottom-right).
    ///
    /// Cells are pruned with the corner-based [`rect_intersects_rect`], which
    /// is exact only when the root bounds are square. With non-square root
    /// bounds a cell that crosses the query square without either having a
    /// corner inside the other is skipped, and points in it are missed.
    ///
    /// # Examples
    /// ```
    /// use quadrant::{Bounds, Point, QuadTree};
    ///
    /// let points = vec![
    ///     Point::new(100.0, 100.0),
    ///     Point::new(100.0, 300.0),
    ///     Point::new(300.0, 300.0),
    ///     Point::new(55.0, 30.0),
    /// ];
    /// let tree = QuadTree::build(Bounds::new(0.0, 0.0, 400.0, 400.0), 2, points).unwrap();
    ///
    /// let found = tree.query_circle(Point::new(70.0, 80.0), 60.0);
    /// assert_eq!(found, vec![&Point::new(100.0, 100.0), &Point::new(55.0, 30.0)]);
    /// ```
    pub fn query_circle(&self, center: Point, radius: f64) -> Vec<&Point> {
        let mut results = Vec::new();
        self.query_circle_into(center, radius, &mut results);
        results
    }

    /// Same as [`QuadTree::query_circle`], appending to `results` (not cleared first)
    pub fn query_circle_into<'a>(
        &'a self,
        center: Point,
        radius: f64,
        results: &mut Vec<&'a Point>,
    ) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }

        let before = results.len();
        let region = Bounds::around(center, radius);
        collect_in_circle(self, &region, center, radius, results);
        trace!(
            x = center.x,
            y = center.y,
            radius,
            found = results.len() - before,
            "circle query"
        );
    }
}

/// Returns every point of `tree` strictly closer than `radius` to `center`.
///
/// Exact for square root bounds only; see [`QuadTree::query_circle`] for the
/// pruning caveat with non-square bounds.
pub fn spherical_region_query(tree: &QuadTree, center: Point, radius: f64) -> Vec<&Point> {
    tree.query_circle(center, radius)
}

fn collect_in_circle<'a>(
    node: &'a QuadTree,
    region: &Bounds,
    center: Point,
    radius: f64,
    results: &mut Vec<&'a Point>,
) {
    // The circle swallows the whole query square, so nothing needs filtering
    if circle_contains_rect(region, center, radius) {
        results.extend(node.points());
        return;
    }

    if !rect_intersects_rect(region, node.bounds()) {
        return;
    }

    match node.subdivisions() {
        Some(subdivisions) => {
            for child in subdivisions {
                collect_in_circle(child, region, center, radius, results);
            }
        }
        None => results.extend(
            node.points()
                .iter()
                .filter(|&&point| distance_to(point, center) < radius),
        ),
    }
}
