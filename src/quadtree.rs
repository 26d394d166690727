//! Region quadtree over 2D point samples.
//!
//! Each node covers a rectangular region and buffers up to `capacity`
//! points. The first insert past capacity splits the node into four
//! quadrant children; the buffered points stay where they are and only
//! the overflowing point (and everything after it) routes into a child.
//! Range queries prune whole subtrees whose regions miss the query
//! rectangle.
//!
//! Nodes own their children exclusively. [`QuadTree::clear`] empties the
//! tree in place but keeps the child nodes allocated, so a tree that is
//! refilled after a clear does not re-allocate its upper levels.

use crate::geom::{Point, Rect};

/// Error returned by [`QuadTree::insert`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum InsertError {
    /// The point could not be routed into any child quadrant.
    ///
    /// Containment is strict on every edge, so this fires for points on or
    /// outside the boundary of the node's region. Callers are expected to
    /// only insert points strictly inside the root bounds; this error
    /// surfaces the violation instead of dropping the point.
    #[error("point ({x}, {y}) lies outside the tree region")]
    OutOfBounds {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },
}

/// The four quadrant children of a split node.
///
/// Y grows downward, matching screen coordinates: the "top" children sit
/// at the smaller y values.
#[derive(Debug, Clone)]
struct Children {
    top_left: QuadTree,
    top_right: QuadTree,
    bottom_left: QuadTree,
    bottom_right: QuadTree,
}

impl Children {
    /// Builds four children that exactly quarter `bounds`: each gets half
    /// the parent's half-extents, centered halfway between the parent's
    /// center and its corners.
    fn quarter(bounds: &Rect, capacity: usize) -> Self {
        let hw = bounds.width / 2.0;
        let hh = bounds.height / 2.0;
        let (x, y) = (bounds.x(), bounds.y());
        Children {
            top_left: QuadTree::new(x - hw, y - hh, hw, hh, capacity),
            top_right: QuadTree::new(x + hw, y - hh, hw, hh, capacity),
            bottom_left: QuadTree::new(x - hw, y + hh, hw, hh, capacity),
            bottom_right: QuadTree::new(x + hw, y + hh, hw, hh, capacity),
        }
    }

    /// Routes a point into the first child whose region strictly contains
    /// it, in the fixed order top_left, top_right, bottom_left,
    /// bottom_right.
    fn insert(&mut self, point: Point) -> Result<(), InsertError> {
        if self.top_left.contains(point) {
            self.top_left.insert(point)
        } else if self.top_right.contains(point) {
            self.top_right.insert(point)
        } else if self.bottom_left.contains(point) {
            self.bottom_left.insert(point)
        } else if self.bottom_right.contains(point) {
            self.bottom_right.insert(point)
        } else {
            Err(InsertError::OutOfBounds { x: point.x, y: point.y })
        }
    }
}

/// A region quadtree node storing 2D points.
///
/// The root doubles as the tree handle; children are created internally
/// on subdivision and are never shared.
///
/// A node is either a LEAF (`split == false`, points go into its own
/// buffer) or INTERIOR (`split == true`, points route into children).
/// The only transition back from INTERIOR to LEAF is [`QuadTree::clear`].
///
/// Coincident points are not collapsed: inserting more than `capacity`
/// copies of the same point recurses without bound, since no amount of
/// subdivision separates them. Callers with duplicate-heavy data must
/// deduplicate first.
#[derive(Debug, Clone)]
pub struct QuadTree {
    bounds: Rect,
    points: Vec<Point>,
    capacity: usize,
    split: bool,
    children: Option<Box<Children>>,
}

impl QuadTree {
    /// Creates a leaf node covering the region centered at `(x, y)` with
    /// the given half-extents.
    ///
    /// `capacity` is the number of points a node buffers before splitting
    /// and is inherited by every child. A capacity of 0 makes the node
    /// split on the very first insert, but since children inherit the
    /// zero capacity no node at any depth can buffer the point: the
    /// insert subdivides until the shrinking quadrants no longer contain
    /// the point and then returns [`InsertError::OutOfBounds`].
    pub fn new(x: f64, y: f64, width: f64, height: f64, capacity: usize) -> Self {
        QuadTree::from_bounds(Rect::from_center(x, y, width, height), capacity)
    }

    /// Creates a leaf node covering `bounds`.
    pub fn from_bounds(bounds: Rect, capacity: usize) -> Self {
        QuadTree {
            bounds,
            points: Vec::with_capacity(capacity),
            capacity,
            split: false,
            children: None,
        }
    }

    /// The region this node covers.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Per-node point buffer capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this node has split into four children.
    #[inline]
    pub fn is_split(&self) -> bool {
        self.split
    }

    /// The points buffered directly in this node, in insertion order.
    ///
    /// Points stored deeper in the tree are not included; use
    /// [`QuadTree::query`] with the node's own bounds widened as needed,
    /// or [`QuadTree::len`] for a count.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Top-left child, if this node has ever subdivided.
    pub fn top_left(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.top_left)
    }

    /// Top-right child, if this node has ever subdivided.
    pub fn top_right(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.top_right)
    }

    /// Bottom-left child, if this node has ever subdivided.
    pub fn bottom_left(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.bottom_left)
    }

    /// Bottom-right child, if this node has ever subdivided.
    pub fn bottom_right(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.bottom_right)
    }

    /// Number of points stored in this node and its whole subtree.
    pub fn len(&self) -> usize {
        let mut count = self.points.len();
        if let Some(children) = &self.children {
            count += children.top_left.len()
                + children.top_right.len()
                + children.bottom_left.len()
                + children.bottom_right.len();
        }
        count
    }

    /// Whether the subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a point lies strictly inside this node's region.
    ///
    /// Check this at the root before inserting: `insert` returns
    /// [`InsertError::OutOfBounds`] for points where this is false.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Whether a query rectangle overlaps this node's region.
    #[inline]
    pub fn intersects(&self, area: &Rect) -> bool {
        self.bounds.intersects(area)
    }

    /// Inserts a point into the subtree.
    ///
    /// While a leaf with spare capacity, the point goes into this node's
    /// buffer. The insert that would overflow the buffer splits the node
    /// instead and routes into a child; the already-buffered points are
    /// NOT redistributed and remain in this node permanently. Once split,
    /// every insert routes into the single child whose region strictly
    /// contains the point.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::OutOfBounds`] when no child region contains
    /// the point. Under the strict containment rule this happens exactly
    /// for points on or outside the boundary of this node's region, which
    /// callers must not insert. No state changes before the error is
    /// detected.
    pub fn insert(&mut self, point: Point) -> Result<(), InsertError> {
        if !self.split {
            if self.points.len() < self.capacity {
                self.points.push(point);
                return Ok(());
            }
            self.subdivide();
        }
        match &mut self.children {
            Some(children) => children.insert(point),
            // split without children cannot happen; refuse rather than drop
            None => Err(InsertError::OutOfBounds { x: point.x, y: point.y }),
        }
    }

    /// Splits this node into four quadrant children.
    ///
    /// Children created by an earlier split survive [`QuadTree::clear`]
    /// and are reused instead of re-allocated. Normally called internally
    /// by `insert` on overflow; calling it on an already split node is a
    /// no-op.
    pub fn subdivide(&mut self) {
        if self.children.is_none() {
            self.children = Some(Box::new(Children::quarter(&self.bounds, self.capacity)));
        }
        self.split = true;
    }

    /// Returns every stored point that lies strictly inside `area`.
    ///
    /// Equivalent to a linear scan of all inserted points filtered by
    /// `area.contains`, but prunes subtrees whose regions do not overlap
    /// `area`. Order is deterministic: this node's matches in insertion
    /// order, then the children's matches in the fixed child order,
    /// recursively. Each stored point appears at most once.
    pub fn query(&self, area: &Rect) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_into(area, &mut found);
        found
    }

    /// Like [`QuadTree::query`], appending matches to `found` so the
    /// allocation can be reused across many queries. `found` is not
    /// cleared first.
    pub fn query_into(&self, area: &Rect, found: &mut Vec<Point>) {
        if !self.bounds.intersects(area) {
            return;
        }
        found.extend(self.points.iter().copied().filter(|&p| area.contains(p)));
        if self.split
            && let Some(children) = &self.children
        {
            children.top_left.query_into(area, found);
            children.top_right.query_into(area, found);
            children.bottom_left.query_into(area, found);
            children.bottom_right.query_into(area, found);
        }
    }

    /// Empties the tree in place.
    ///
    /// Every node's point buffer is cleared and every node reverts to a
    /// leaf. Bounds and capacity are untouched, and child nodes stay
    /// allocated so a subsequent fill can reuse them.
    pub fn clear(&mut self) {
        self.points.clear();
        if let Some(children) = &mut self.children {
            children.top_left.clear();
            children.top_right.clear();
            children.bottom_left.clear();
            children.bottom_right.clear();
        }
        self.split = false;
    }
}
