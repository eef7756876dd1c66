//! Points, bounds and the geometric predicates used by the quadtree.
//!
//! All containment tests are closed: a point lying exactly on an edge is
//! inside. Rectangles use a bottom-left origin with y growing upward.

/// A plain 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        distance_to(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: bottom-left corner `(x, y)`, width `w`, height `h`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    /// Width, never negative in a built tree
    pub w: f64,
    /// Height, never negative in a built tree
    pub h: f64,
}

impl Bounds {
    /// Creates bounds from the bottom-left corner and a size
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * radius` centered on `center`
    #[inline]
    pub fn around(center: Point, radius: f64) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            w: radius * 2.0,
            h: radius * 2.0,
        }
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    /// Top edge
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Corners in the order bottom-left, top-left, top-right, bottom-right
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x, self.max_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.max_x(), self.y),
        ]
    }

    /// The four quadrants in the order bottom-left, top-left, top-right, bottom-right.
    ///
    /// The right and top quadrants always reach the parent's far edges, so every
    /// point inside these bounds is inside at least one quadrant.
    pub fn quadrants(&self) -> [Self; 4] {
        let half_w = self.w * 0.5;
        let half_h = self.h * 0.5;
        let mid_x = self.x + half_w;
        let mid_y = self.y + half_h;
        let far_w = far_extent(mid_x, half_w, self.max_x());
        let far_h = far_extent(mid_y, half_h, self.max_y());
        [
            Self::new(self.x, self.y, half_w, half_h),
            Self::new(self.x, mid_y, half_w, far_h),
            Self::new(mid_x, mid_y, far_w, far_h),
            Self::new(mid_x, self.y, far_w, half_h),
        ]
    }

    /// Closed containment of a point
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        rect_contains_point(point, self)
    }

    /// Whether `inner` lies entirely within these bounds
    #[inline]
    pub fn contains_rect(&self, inner: &Self) -> bool {
        rect_contains_rect(self, inner)
    }

    /// Corner-based overlap test, see [`rect_intersects_rect`]
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        rect_intersects_rect(self, other)
    }

    /// Width and height are both non-negative numbers
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w >= 0.0 && self.h >= 0.0
    }
}

/// Smallest extent from `mid` that is at least `half` and whose sum with `mid`
/// does not round below `edge`
fn far_extent(mid: f64, half: f64, edge: f64) -> f64 {
    let mut extent = half.max(edge - mid);
    while mid + extent < edge {
        extent = extent.next_up();
    }
    extent
}

/// Returns true if `point` is inside `rect` or exactly on one of its edges
#[inline]
pub fn rect_contains_point(point: Point, rect: &Bounds) -> bool {
    point.x >= rect.x && point.y >= rect.y && point.x <= rect.max_x() && point.y <= rect.max_y()
}

/// Returns true if `inner` is entirely within `outer` (shared edges allowed)
#[inline]
pub fn rect_contains_rect(outer: &Bounds, inner: &Bounds) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.max_x() <= outer.max_x()
        && inner.max_y() <= outer.max_y()
}

/// Returns true if any corner of either rectangle lies within the other.
///
/// This is not a separating-axis test: two rectangles crossing each other
/// like a plus sign, with no corner inside the other, report `false`.
/// Square cells queried with square regions never cross that way.
pub fn rect_intersects_rect(a: &Bounds, b: &Bounds) -> bool {
    b.corners().into_iter().any(|corner| rect_contains_point(corner, a))
        || a.corners().into_iter().any(|corner| rect_contains_point(corner, b))
}

/// Returns true if the circle at `center` with `radius` covers `rect`,
/// measured as the farthest per-axis reach from the center to the rect.
#[inline]
pub fn circle_contains_rect(rect: &Bounds, center: Point, radius: f64) -> bool {
    let dx = (center.x - rect.x).max(center.x - rect.x + rect.w);
    let dy = (center.y - rect.y).max(center.y - rect.y + rect.h);
    dx <= radius && dy <= radius
}

/// Euclidean distance between two points
#[inline]
pub fn distance_to(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
