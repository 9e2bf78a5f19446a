//! Ships: the player's and the enemy's.
//!
//! Both use the same type. Damage is a counter from 1 to 6; every accepted
//! collision moves it up by one and state 6 is destruction. After a hit the ship
//! ignores further collisions until its cooldown fully expires, so one sustained
//! overlap spanning several ticks counts once.

use arcade_engine::foundation::math::{heading_vector, Vec2};
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLLISION_COOLDOWN_TICKS, DAMAGE_STATE_DESTROYED, DAMAGE_STATE_INITIAL, SHIELD_CHARGE,
    SHIP_DRAG, SHIP_RADIUS, SHIP_THRUST_AMOUNT,
};
use crate::entity::Body;

/// Which side a ship fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipRole {
    /// Driven by input
    Player,
    /// Driven by the enemy controller
    Enemy,
}

/// Visible damage tier derived from the damage state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageTier {
    /// State 1
    Intact,
    /// States 2 and 3
    Scarred,
    /// States 4 and 5
    Critical,
    /// State 6
    Destroyed,
}

impl DamageTier {
    /// Tier for a damage state
    pub const fn from_state(state: u8) -> Self {
        match state {
            0 | 1 => Self::Intact,
            2 | 3 => Self::Scarred,
            4 | 5 => Self::Critical,
            _ => Self::Destroyed,
        }
    }
}

/// A ship with a damage state, a draining shield and a collision cooldown
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Kinematic state
    pub body: Body,
    /// Player or enemy
    pub role: ShipRole,
    damage_state: u8,
    shield: u32,
    shield_active: bool,
    cooldown: u32,
}

impl Ship {
    /// Create an undamaged ship at `position`, facing heading 0
    pub fn new(role: ShipRole, position: Vec2) -> Self {
        Self {
            body: Body::new(position, SHIP_RADIUS),
            role,
            damage_state: DAMAGE_STATE_INITIAL,
            shield: SHIELD_CHARGE,
            shield_active: false,
            cooldown: 0,
        }
    }

    /// Thrust along the current heading; there is no top speed
    pub fn accelerate(&mut self) {
        self.body.velocity += heading_vector(self.body.heading) * SHIP_THRUST_AMOUNT;
    }

    /// Bleed off a fraction of the current velocity
    pub fn decelerate(&mut self) {
        self.body.velocity *= SHIP_DRAG;
    }

    /// Rotate by `delta` degrees
    pub fn turn(&mut self, delta: f32) {
        self.body.heading += delta;
    }

    /// Take one step of damage and start the collision cooldown
    pub fn collide(&mut self) {
        if self.damage_state >= DAMAGE_STATE_DESTROYED {
            return;
        }

        self.damage_state += 1;
        self.cooldown = COLLISION_COOLDOWN_TICKS;
        if self.damage_state == DAMAGE_STATE_DESTROYED {
            self.body.alive = false;
            self.shield_active = false;
        }
    }

    /// Drain one tick of shield charge
    ///
    /// The shield protects only while charge remains after the drain, so the
    /// tick that empties it is already unprotected.
    pub fn activate_shield(&mut self) {
        self.shield = self.shield.saturating_sub(1);
        self.shield_active = self.shield > 0 && self.body.alive;
    }

    /// Drop the shield
    pub fn deactivate_shield(&mut self) {
        self.shield_active = false;
    }

    /// Count the collision cooldown down by one tick
    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Whether a collision would currently be accepted
    ///
    /// Applies to the player; the enemy takes every hit regardless.
    pub fn is_vulnerable(&self) -> bool {
        self.body.alive && !self.shield_active && self.cooldown == 0
    }

    /// Damage state, 1 (intact) to 6 (destroyed)
    pub fn damage_state(&self) -> u8 {
        self.damage_state
    }

    /// Visible damage tier
    pub fn damage_tier(&self) -> DamageTier {
        DamageTier::from_state(self.damage_state)
    }

    /// Remaining shield charge
    pub fn shield(&self) -> u32 {
        self.shield
    }

    /// Remaining shield charge as a whole percentage
    pub fn shield_percent(&self) -> u32 {
        self.shield * 100 / SHIELD_CHARGE
    }

    /// Whether the shield is currently up
    pub fn shield_active(&self) -> bool {
        self.shield_active
    }

    /// Ticks left before collisions count again
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Whether the ship is still flying
    pub fn is_alive(&self) -> bool {
        self.body.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ship() -> Ship {
        Ship::new(ShipRole::Player, Vec2::new(960.0, 540.0))
    }

    #[test]
    fn test_accelerate_along_heading() {
        let mut ship = ship();
        ship.turn(90.0);
        ship.accelerate();
        ship.accelerate();
        assert_relative_eq!(ship.body.velocity, Vec2::new(0.0, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_decelerate_never_reaches_zero_instantly() {
        let mut ship = ship();
        ship.body.velocity = Vec2::new(10.0, -5.0);
        ship.decelerate();
        assert_relative_eq!(ship.body.velocity, Vec2::new(9.8, -4.9), epsilon = 1e-5);

        for _ in 0..100 {
            ship.decelerate();
        }
        assert!(ship.body.current_speed() > 0.0);
    }

    #[test]
    fn test_turn_is_not_normalized() {
        let mut ship = ship();
        for _ in 0..130 {
            ship.turn(3.0);
        }
        assert_eq!(ship.body.heading, 390.0);
        ship.turn(-400.0);
        assert_eq!(ship.body.heading, -10.0);
    }

    #[test]
    fn test_five_collisions_destroy() {
        let mut ship = ship();
        for expected in 2..=5 {
            ship.collide();
            assert_eq!(ship.damage_state(), expected);
            assert!(ship.is_alive());
        }

        ship.collide();
        assert_eq!(ship.damage_state(), 6);
        assert!(!ship.is_alive());
        assert_eq!(ship.damage_tier(), DamageTier::Destroyed);
    }

    #[test]
    fn test_damage_state_never_passes_destroyed() {
        let mut ship = ship();
        for _ in 0..10 {
            ship.collide();
        }
        assert_eq!(ship.damage_state(), DAMAGE_STATE_DESTROYED);
    }

    #[test]
    fn test_collide_starts_cooldown() {
        let mut ship = ship();
        assert!(ship.is_vulnerable());

        ship.collide();
        assert_eq!(ship.cooldown(), COLLISION_COOLDOWN_TICKS);
        assert!(!ship.is_vulnerable());

        for _ in 0..COLLISION_COOLDOWN_TICKS - 1 {
            ship.tick_cooldown();
            assert!(!ship.is_vulnerable());
        }
        ship.tick_cooldown();
        assert!(ship.is_vulnerable());
    }

    #[test]
    fn test_shield_drains_and_protects() {
        let mut ship = ship();
        ship.activate_shield();
        assert!(ship.shield_active());
        assert!(!ship.is_vulnerable());
        assert_eq!(ship.shield(), SHIELD_CHARGE - 1);

        ship.deactivate_shield();
        assert!(ship.is_vulnerable());
        assert_eq!(ship.shield(), SHIELD_CHARGE - 1);
    }

    #[test]
    fn test_shield_revoked_on_tick_it_empties() {
        let mut ship = ship();
        for _ in 0..SHIELD_CHARGE - 1 {
            ship.activate_shield();
        }
        assert_eq!(ship.shield(), 1);
        assert!(ship.shield_active());

        ship.activate_shield();
        assert_eq!(ship.shield(), 0);
        assert!(!ship.shield_active());

        ship.activate_shield();
        assert_eq!(ship.shield(), 0);
        assert!(!ship.shield_active());
    }

    #[test]
    fn test_shield_percent() {
        let mut ship = ship();
        assert_eq!(ship.shield_percent(), 100);
        for _ in 0..255 {
            ship.activate_shield();
        }
        assert_eq!(ship.shield_percent(), 74);
    }

    #[test]
    fn test_damage_tiers() {
        assert_eq!(DamageTier::from_state(1), DamageTier::Intact);
        assert_eq!(DamageTier::from_state(3), DamageTier::Scarred);
        assert_eq!(DamageTier::from_state(4), DamageTier::Critical);
        assert_eq!(DamageTier::from_state(6), DamageTier::Destroyed);
    }
}
