//! # Quadrant - static point quadtree
//!
//! A point quadtree recursively splits a bounded 2D region into four equal
//! quadrants whenever a cell holds more points than its capacity. The tree is
//! built once from a fixed point set and answers two kinds of queries:
//!
//! - **Point search**: find the leaf cell whose closed bounds contain a point
//! - **Circular region query**: collect every point strictly within a radius
//!   of a center, pruning subtrees whose cells the circle cannot reach
//!
//! ## Quick Start
//!
//! ```rust
//! use quadrant::prelude::*;
//!
//! let points = vec![
//!     Point::new(100.0, 100.0),
//!     Point::new(100.0, 300.0),
//!     Point::new(300.0, 300.0),
//!     Point::new(55.0, 30.0),
//! ];
//!
//! // Cells holding more than 2 points are subdivided
//! let tree = QuadTree::build(Bounds::new(0.0, 0.0, 400.0, 400.0), 2, points).unwrap();
//!
//! // Leaf covering a location
//! let leaf = tree.search(Point::new(95.0, 95.0)).unwrap();
//! assert!(leaf.is_leaf());
//!
//! // Points within 60 units of (70, 80)
//! let near = tree.query_circle(Point::new(70.0, 80.0), 60.0);
//! assert_eq!(near.len(), 2);
//!
//! // Outside the root bounds there is no cell
//! assert!(tree.search(Point::new(-2.0, 350.0)).is_none());
//! ```
//!
//! ## How It Works
//!
//! Each subdivided node keeps the full list it was built from and owns four
//! children, visited and filled in the fixed order bottom-left, top-left,
//! top-right, bottom-right. A point on a shared edge goes to the first of those
//! quadrants that contains it, so the exact center of a cell always belongs to
//! its bottom-left child.
//!
//! Construction rejects negative bounds and stops with
//! [`QuadTreeError::MaxDepthExceeded`] instead of recursing forever when more
//! than `capacity` points share a location.

pub mod error;
pub mod geometry;
pub mod prelude;
pub mod quadtree;
pub mod queries;

pub use error::{QuadTreeError, Result};
pub use geometry::{
    Bounds, Point, circle_contains_rect, distance_to, rect_contains_point, rect_contains_rect,
    rect_intersects_rect,
};
pub use quadtree::{
    DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH, Nodes, QuadTree, QuadTreeConfig, Quadrant, Subdivisions,
    search,
};
pub use queries::spherical_region_query;
