//! # quadpoint - Region Quadtree Spatial Index
//!
//! A Rust library providing a simple region quadtree for storing 2D point
//! samples and answering axis-aligned rectangular range queries.
//!
//! ## Features
//!
//! - **Recursive Subdivision**: Nodes buffer points up to a capacity, then
//!   split lazily into four quadrant children on overflow
//! - **Range Queries**: Rectangular queries prune whole subtrees that miss
//!   the query region
//! - **Simple API**: Construct over a bounding region, insert points,
//!   query, clear and refill
//! - **Allocation Reuse**: Clearing keeps the node structure allocated for
//!   cheap refills across generations
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::prelude::*;
//!
//! // Cover [0, 200] x [0, 200]: center (100, 100), half-extents 100x100.
//! // Each node buffers up to 4 points before subdividing.
//! let mut tree = QuadTree::new(100.0, 100.0, 100.0, 100.0, 4);
//!
//! tree.insert(Point::new(10.0, 10.0)).unwrap();
//! tree.insert(Point::new(10.0, 20.0)).unwrap();
//! tree.insert(Point::new(150.0, 150.0)).unwrap();
//!
//! // Find all points in a neighborhood rectangle around (10, 15).
//! let area = Rect::from_center(10.0, 15.0, 10.0, 10.0);
//! let found = tree.query(&area);
//! assert_eq!(found.len(), 2);
//!
//! // A results vector can be reused across many queries.
//! let mut found = Vec::new();
//! tree.query_into(&area, &mut found);
//! assert_eq!(found.len(), 2);
//!
//! // Points outside the tree's region are rejected, never dropped.
//! assert!(tree.insert(Point::new(-500.0, -500.0)).is_err());
//! ```
//!
//! ## How It Works
//!
//! Each node covers a rectangle given as a center plus half-extents and
//! buffers points directly until the buffer reaches capacity. The insert
//! that would overflow splits the node into four equal quadrants and
//! routes into the child containing the point; already-buffered points
//! stay in the parent. A range query walks only the nodes whose regions
//! intersect the query rectangle and filters buffered points with a
//! strict containment test, so finding the neighbors of every point in a
//! large set touches a small fraction of the tree per query instead of
//! scanning all pairs.
//!
//! Containment is strict on all four edges while rectangle-rectangle
//! intersection is non-strict; see [`Rect::contains`] and
//! [`Rect::intersects`] for the exact boundary policy.

pub mod geom;
pub mod prelude;
pub mod quadtree;

pub use geom::{Point, Rect};
pub use quadtree::{InsertError, QuadTree};

#[cfg(test)]
mod comparison_tests;
