//! Short-lived projectiles.

use arcade_engine::foundation::math::{heading_vector, Vec2};
use serde::{Deserialize, Serialize};

use crate::constants::{LASER_LIFETIME, LASER_RADIUS, LASER_SPEED};
use crate::entity::Body;

/// Who fired a laser, which decides what it can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Fired by the player; hits asteroids and the enemy ship
    Friendly,
    /// Fired by the enemy; hits only the player ship
    Hostile,
}

/// Laser bolt
#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    /// Kinematic state
    pub body: Body,
    /// Ticks since firing
    pub age: u32,
    /// Who fired it
    pub owner: Owner,
}

impl Laser {
    /// Fire a laser from `position` along `heading`
    ///
    /// `firer_speed` is added to the base laser speed so shots from a moving ship
    /// outrun it.
    pub fn new(position: Vec2, heading: f32, firer_speed: f32, owner: Owner) -> Self {
        let speed = LASER_SPEED + firer_speed;
        let mut body = Body::new(position, LASER_RADIUS);
        body.heading = heading;
        body.speed = Some(speed);
        body.velocity = heading_vector(heading) * speed;

        Self { body, age: 0, owner }
    }

    /// Age one tick and move; expires at [`LASER_LIFETIME`]
    pub fn update(&mut self) {
        self.age += 1;
        self.body.advance();
        if self.age >= LASER_LIFETIME {
            self.body.alive = false;
        }
    }

    /// Whether this laser was fired by the player
    pub fn is_friendly(&self) -> bool {
        self.owner == Owner::Friendly
    }
}
