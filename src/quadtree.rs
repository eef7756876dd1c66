//! Point quadtree built once from a fixed point set.
//!
//! A node holding more points than its capacity is split along its vertical
//! and horizontal midlines into four equal quadrants, and each point is handed
//! to the first quadrant (bottom-left, top-left, top-right, bottom-right) whose
//! closed bounds contain it. Subdivided nodes keep the point list they were
//! built from; only leaves hold the final point-to-cell assignment.

use std::ops::Index;

use tracing::{debug, trace, warn};

use crate::error::{QuadTreeError, Result};
use crate::geometry::{Bounds, Point};

/// Default maximum number of points a cell holds before it subdivides
pub const DEFAULT_CAPACITY: usize = 4;
/// Default maximum subdivision depth (the root is depth 0)
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Construction parameters shared by every node of a tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Maximum point count before a cell subdivides. Zero subdivides any non-empty cell.
    pub capacity: usize,
    /// Deepest level a node may be created at
    pub max_depth: usize,
}

impl QuadTreeConfig {
    /// Config with the given capacity and the default depth limit
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the capacity
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the depth limit
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Names the four children of a subdivided node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `{x, y, w/2, h/2}`
    BottomLeft,
    /// `{x, y + h/2, w/2, h/2}`
    TopLeft,
    /// `{x + w/2, y + h/2, w/2, h/2}`
    TopRight,
    /// `{x + w/2, y, w/2, h/2}`
    BottomRight,
}

impl Quadrant {
    /// All quadrants in assignment and traversal order
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Self::BottomLeft => 0,
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::BottomRight => 3,
        }
    }
}

/// The four owned children of an internal node
#[derive(Clone, Debug)]
pub struct Subdivisions {
    children: [QuadTree; 4],
}

impl Subdivisions {
    /// Child for the given quadrant
    #[inline]
    pub fn get(&self, quadrant: Quadrant) -> &QuadTree {
        &self.children[quadrant.slot()]
    }

    /// Bottom-left child
    pub fn bottom_left(&self) -> &QuadTree {
        self.get(Quadrant::BottomLeft)
    }

    /// Top-left child
    pub fn top_left(&self) -> &QuadTree {
        self.get(Quadrant::TopLeft)
    }

    /// Top-right child
    pub fn top_right(&self) -> &QuadTree {
        self.get(Quadrant::TopRight)
    }

    /// Bottom-right child
    pub fn bottom_right(&self) -> &QuadTree {
        self.get(Quadrant::BottomRight)
    }

    /// Children in the order bottom-left, top-left, top-right, bottom-right
    pub fn iter(&self) -> std::slice::Iter<'_, QuadTree> {
        self.children.iter()
    }
}

impl Index<Quadrant> for Subdivisions {
    type Output = QuadTree;

    fn index(&self, quadrant: Quadrant) -> &QuadTree {
        self.get(quadrant)
    }
}

impl<'a> IntoIterator for &'a Subdivisions {
    type Item = &'a QuadTree;
    type IntoIter = std::slice::Iter<'a, QuadTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One node of a point quadtree; the root node is the whole tree.
///
/// # Examples
/// ```
/// use quadrant::{Bounds, Point, QuadTree};
///
/// let points = vec![Point::new(25.0, 25.0), Point::new(75.0, 75.0), Point::new(80.0, 20.0)];
/// let tree = QuadTree::build(Bounds::new(0.0, 0.0, 100.0, 100.0), 2, points).unwrap();
///
/// assert!(!tree.is_leaf());
/// let leaf = tree.search(Point::new(90.0, 10.0)).unwrap();
/// assert_eq!(leaf.points(), &[Point::new(80.0, 20.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    /// Cell covered by this node
    bounds: Bounds,
    /// Subdivision threshold, identical on every node
    capacity: usize,
    /// Points this node was built from
    points: Vec<Point>,
    /// Children, present only when the node was subdivided
    subdivisions: Option<Box<Subdivisions>>,
}

impl QuadTree {
    /// Builds a tree over `bounds`, subdividing any cell holding more than `capacity` points.
    ///
    /// Uses [`DEFAULT_MAX_DEPTH`] as the subdivision limit.
    ///
    /// # Errors
    /// [`QuadTreeError::InvalidBounds`] for a negative or NaN width or height, and
    /// [`QuadTreeError::MaxDepthExceeded`] when more than `capacity` points keep
    /// landing in the same cell (for example, identical points).
    pub fn build(bounds: Bounds, capacity: usize, points: impl Into<Vec<Point>>) -> Result<Self> {
        Self::with_config(bounds, QuadTreeConfig::new(capacity), points)
    }

    /// Builds a tree with explicit construction parameters.
    ///
    /// # Errors
    /// Same as [`QuadTree::build`], with the depth limit taken from `config`.
    pub fn with_config(
        bounds: Bounds,
        config: QuadTreeConfig,
        points: impl Into<Vec<Point>>,
    ) -> Result<Self> {
        if !bounds.is_valid() {
            return Err(QuadTreeError::InvalidBounds {
                w: bounds.w,
                h: bounds.h,
            });
        }

        let tree = Self::build_node(bounds, &config, points.into(), 0)?;
        debug!(
            points = tree.len(),
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            capacity = config.capacity,
            "built quadtree"
        );
        Ok(tree)
    }

    fn build_node(
        bounds: Bounds,
        config: &QuadTreeConfig,
        points: Vec<Point>,
        depth: usize,
    ) -> Result<Self> {
        if points.len() <= config.capacity {
            return Ok(Self {
                bounds,
                capacity: config.capacity,
                points,
                subdivisions: None,
            });
        }

        if depth >= config.max_depth {
            warn!(depth, points = points.len(), ?bounds, "quadtree depth limit reached");
            return Err(QuadTreeError::MaxDepthExceeded {
                max_depth: config.max_depth,
            });
        }

        trace!(depth, points = points.len(), ?bounds, "subdividing cell");

        let quadrants = bounds.quadrants();
        let mut partitions: [Vec<Point>; 4] = Default::default();
        for &point in points.iter().filter(|&&point| bounds.contains_point(point)) {
            // First match wins, so edge and center points land in exactly one child
            let slot = quadrants
                .iter()
                .position(|quadrant| quadrant.contains_point(point));
            if let Some(slot) = slot {
                partitions[slot].push(point);
            }
        }

        let [bl_bounds, tl_bounds, tr_bounds, br_bounds] = quadrants;
        let [bl_points, tl_points, tr_points, br_points] = partitions;
        let children = [
            Self::build_node(bl_bounds, config, bl_points, depth + 1)?,
            Self::build_node(tl_bounds, config, tl_points, depth + 1)?,
            Self::build_node(tr_bounds, config, tr_points, depth + 1)?,
            Self::build_node(br_bounds, config, br_points, depth + 1)?,
        ];

        Ok(Self {
            bounds,
            capacity: config.capacity,
            points,
            subdivisions: Some(Box::new(Subdivisions { children })),
        })
    }

    /// Cell covered by this node
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Subdivision threshold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points this node was built from.
    ///
    /// For a leaf this is its final assignment; for a subdivided node it is the
    /// whole list that was partitioned among its children.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Children of a subdivided node, `None` for a leaf
    #[inline]
    pub fn subdivisions(&self) -> Option<&Subdivisions> {
        self.subdivisions.as_deref()
    }

    /// Whether this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.subdivisions.is_none()
    }

    /// Number of points this node was built from
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this node was built from an empty point list
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finds the leaf whose closed bounds contain `point`.
    ///
    /// This is a spatial lookup: the returned leaf need not hold `point`.
    /// Children are tried bottom-left, top-left, top-right, bottom-right and
    /// the first hit wins, matching the order used during construction.
    pub fn search(&self, point: Point) -> Option<&Self> {
        if !self.bounds.contains_point(point) {
            return None;
        }

        match self.subdivisions() {
            None => Some(self),
            Some(subdivisions) => subdivisions.iter().find_map(|child| child.search(point)),
        }
    }

    /// Depth-first pre-order walk over every node with its depth (root is 0)
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![(self, 0)] }
    }

    /// Leaves in depth-first quadrant order
    pub fn leaves(&self) -> impl Iterator<Item = &Self> + '_ {
        self.nodes().filter_map(|(node, _)| node.is_leaf().then_some(node))
    }

    /// Depth of the deepest node below this one
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Total number of nodes, this one included
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of leaves below (or at) this node
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

/// Finds the leaf of `tree` whose closed bounds contain `point`.
///
/// See [`QuadTree::search`].
pub fn search(point: Point, tree: &QuadTree) -> Option<&QuadTree> {
    tree.search(point)
}

/// Pre-order iterator returned by [`QuadTree::nodes`]
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    stack: Vec<(&'a QuadTree, usize)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (&'a QuadTree, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if let Some(subdivisions) = node.subdivisions() {
            // Reversed so bottom-left is popped first
            for child in subdivisions.iter().rev() {
                self.stack.push((child, depth + 1));
            }
        }
        Some((node, depth))
    }
}
