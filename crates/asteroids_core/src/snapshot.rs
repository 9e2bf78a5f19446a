//! Read-only views of the world for presentation layers.

use arcade_engine::foundation::math::Vec2;
use serde::Serialize;

use crate::asteroid::{Asteroid, AsteroidSize};
use crate::laser::{Laser, Owner};
use crate::ship::{DamageTier, Ship, ShipRole};
use crate::world::Outcome;

/// What a renderer needs to draw a ship
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    /// Player or enemy
    pub role: ShipRole,
    /// Center
    pub position: Vec2,
    /// Facing in degrees
    pub heading: f32,
    /// Still flying
    pub alive: bool,
    /// 1 to 6
    pub damage_state: u8,
    /// Damage sprite tier
    pub damage_tier: DamageTier,
    /// Remaining shield charge
    pub shield: u32,
    /// Remaining shield charge as a percentage
    pub shield_percent: u32,
    /// Shield currently up
    pub shield_active: bool,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        Self {
            role: ship.role,
            position: ship.body.position,
            heading: ship.body.heading,
            alive: ship.is_alive(),
            damage_state: ship.damage_state(),
            damage_tier: ship.damage_tier(),
            shield: ship.shield(),
            shield_percent: ship.shield_percent(),
            shield_active: ship.shield_active(),
        }
    }
}

/// What a renderer needs to draw a laser
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaserView {
    /// Center
    pub position: Vec2,
    /// Direction of travel in degrees
    pub heading: f32,
    /// Who fired it
    pub owner: Owner,
}

impl From<&Laser> for LaserView {
    fn from(laser: &Laser) -> Self {
        Self {
            position: laser.body.position,
            heading: laser.body.heading,
            owner: laser.owner,
        }
    }
}

/// What a renderer needs to draw an asteroid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidView {
    /// Center
    pub position: Vec2,
    /// Spin angle in degrees
    pub heading: f32,
    /// Size tier
    pub size: AsteroidSize,
}

impl From<&Asteroid> for AsteroidView {
    fn from(asteroid: &Asteroid) -> Self {
        Self {
            position: asteroid.body.position,
            heading: asteroid.body.heading,
            size: asteroid.size,
        }
    }
}

/// Score and status text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudView {
    /// Current score
    pub score: u32,
    /// Score needed to win
    pub win_score: u32,
    /// Player shield percentage
    pub shield_percent: u32,
    /// Game state
    pub outcome: Outcome,
    /// Ticks simulated
    pub frame: u64,
}

/// Everything visible after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    /// Player ship
    pub player: ShipView,
    /// Enemy ship
    pub enemy: ShipView,
    /// Live lasers
    pub lasers: Vec<LaserView>,
    /// Live asteroids
    pub asteroids: Vec<AsteroidView>,
    /// Status text
    pub hud: HudView,
}
