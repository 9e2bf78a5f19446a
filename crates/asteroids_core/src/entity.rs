//! Kinematic body shared by every simulated object.

use arcade_engine::foundation::math::{wrap_degrees, Vec2};
use serde::{Deserialize, Serialize};

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Position, velocity and identity data common to ships, lasers and asteroids
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center in screen coordinates
    pub position: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    /// Facing in degrees
    pub heading: f32,
    /// Cleared when the entity is destroyed; dead entities are purged by the world
    pub alive: bool,
    /// Collision radius
    pub radius: f32,
    /// Nominal speed used to derive the spawn velocity, when the type has one
    pub speed: Option<f32>,
}

impl Body {
    /// Create a stationary, live body
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            heading: 0.0,
            alive: true,
            radius,
            speed: None,
        }
    }

    /// Integrate one tick of motion
    ///
    /// Never bounds-checks; see [`Viewport::wrap`].
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Current speed in pixels per tick
    pub fn current_speed(&self) -> f32 {
        self.velocity.magnitude()
    }
}

/// How a type keeps its heading in range after it changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingPolicy {
    /// Never normalized
    Free,
    /// Values above 360 reset to 0; values below 0 are left alone
    ///
    /// A negative spin therefore walks the heading down forever. Kept because
    /// existing content depends on it; use [`HeadingPolicy::Wrapped`] to opt out.
    #[default]
    ResetAboveFullTurn,
    /// Both bounds wrap into `[0, 360)`
    Wrapped,
}

impl HeadingPolicy {
    /// Normalize `heading` under this policy
    pub fn apply(self, heading: f32) -> f32 {
        match self {
            Self::Free => heading,
            Self::ResetAboveFullTurn => {
                if heading > 360.0 {
                    0.0
                } else {
                    heading
                }
            }
            Self::Wrapped => wrap_degrees(heading),
        }
    }
}

/// Toroidal play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Move a body that left the screen to the opposite edge
    ///
    /// Each axis is handled on its own. A body sitting exactly on an edge stays put,
    /// and wrapping an already wrapped body changes nothing.
    pub fn wrap(&self, body: &mut Body) {
        body.position.x = wrap_axis(body.position.x, self.width);
        body.position.y = wrap_axis(body.position.y, self.height);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value > extent {
        0.0
    } else if value < 0.0 {
        extent
    } else {
        value
    }
}
