//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadrant::prelude::*;
//! ```

pub use crate::{Bounds, Point, QuadTree, QuadTreeConfig, QuadTreeError, Quadrant};
pub use crate::{search, spherical_region_query};
