//! Physics module for collision detection
//!
//! Arcade games here only need overlap tests between round-ish sprites; there is
//! no collision response.

pub mod collision;

pub use collision::{axis_aligned_overlap, circles_overlap};
