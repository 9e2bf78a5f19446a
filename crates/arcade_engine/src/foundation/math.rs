//! Math utilities and types
//!
//! Screen-space 2D math. Angles are in degrees, counter-clockwise from +X,
//! matching how arcade games store headings.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Unit vector pointing along `degrees`
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Wrap an angle into `[0, 360)`
pub fn wrap_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}
