//! Geometric primitives: 2D points and center/half-extent rectangles.
//!
//! `Rect` stores HALF-extents: `width` and `height` are the distances from
//! the center to the edges, so the full rectangle spans
//! `center.x ± width` by `center.y ± height`.

/// An immutable 2D point sample.
///
/// Equality is exact componentwise `f64` comparison with no epsilon
/// tolerance. Two points generated from the same coordinates compare
/// equal; points that differ by any representable amount do not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle defined by a center point and half-extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Center of the rectangle.
    pub center: Point,
    /// Half-width: distance from center to the left/right edges.
    pub width: f64,
    /// Half-height: distance from center to the top/bottom edges.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from a center point and half-extents.
    #[inline]
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Rect { center, width, height }
    }

    /// Creates a rectangle from center coordinates and half-extents.
    #[inline]
    pub fn from_center(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { center: Point::new(x, y), width, height }
    }

    /// Center X coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Center Y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Tests whether a point lies strictly inside this rectangle.
    ///
    /// All four comparisons are strict, so a point exactly on any edge is
    /// NOT contained. Sibling quadrants sharing an edge therefore both
    /// exclude points lying exactly on that edge.
    ///
    /// ```
    /// use quadpoint::{Point, Rect};
    ///
    /// let r = Rect::from_center(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.contains(Point::new(9.99, -9.99)));
    /// assert!(!r.contains(Point::new(10.0, 0.0))); // on the edge
    /// ```
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x() - self.width
            && point.x < self.x() + self.width
            && point.y > self.y() - self.height
            && point.y < self.y() + self.height
    }

    /// Tests whether this rectangle intersects another.
    ///
    /// Separating-axis test over half-extents. Unlike [`Rect::contains`]
    /// the comparisons are non-strict: rectangles that merely touch along
    /// an edge or at a corner count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x() - other.width > self.x() + self.width
            || other.x() + other.width < self.x() - self.width
            || other.y() - other.height > self.y() + self.height
            || other.y() + other.height < self.y() - self.height)
    }
}
