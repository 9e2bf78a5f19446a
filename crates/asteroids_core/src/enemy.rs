//! Enemy ship controller.
//!
//! The enemy always faces the player and shoots along that pursuit heading. How it
//! *moves* is configurable: by default it drifts along a wander heading that is
//! re-rolled about once per second, otherwise it flies straight at the player.

use arcade_engine::foundation::math::{heading_vector, Vec2};
use arcade_engine::foundation::time::IntervalTimer;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AIM_EPSILON, ENEMY_ATTACK_INTERVAL, ENEMY_ATTACK_START_FRAME, ENEMY_INITIAL_SPEED,
    ENEMY_LASER_SPEED_PENALTY, ENEMY_MAX_SPEED, ENEMY_RETARGET_SECONDS, ENEMY_SPEED_RAMP,
};
use crate::laser::{Laser, Owner};
use crate::ship::Ship;

/// Which heading the enemy's velocity follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyMovement {
    /// Drift along a periodically re-rolled random heading
    #[default]
    Wander,
    /// Fly along the pursuit heading
    Pursue,
}

/// Pursuit heading in degrees from `from` towards `to`
///
/// Uses a plain arctangent of the deltas and adds 180 when the target is to the
/// left, so the result lies in `(-90, 270)`.
pub fn pursuit_heading(from: Vec2, to: Vec2) -> f32 {
    let rise = to.y - from.y;
    let mut run = to.x - from.x + AIM_EPSILON;
    if run == 0.0 {
        run = AIM_EPSILON;
    }

    let mut degrees = (rise / run).atan().to_degrees();
    if to.x < from.x {
        degrees += 180.0;
    }
    degrees
}

/// Whether the enemy fires on `frame`
///
/// `frame` is the world's frame counter after it has been incremented for the
/// current tick.
pub const fn is_attack_frame(frame: u64) -> bool {
    frame > ENEMY_ATTACK_START_FRAME && frame % ENEMY_ATTACK_INTERVAL == 0
}

/// Steering and attack state for the enemy ship
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyController {
    movement: EnemyMovement,
    speed: f32,
    wander_heading: f32,
    attack_heading: f32,
    retarget: IntervalTimer,
}

impl EnemyController {
    /// Create a controller at the starting speed
    pub fn new(movement: EnemyMovement) -> Self {
        Self {
            movement,
            speed: ENEMY_INITIAL_SPEED,
            wander_heading: 0.0,
            attack_heading: 0.0,
            retarget: IntervalTimer::new(ENEMY_RETARGET_SECONDS),
        }
    }

    /// Run one tick of steering
    ///
    /// Sets the enemy's velocity from the current speed, ramps the speed towards
    /// the cap, then turns the enemy to face `target`.
    pub fn steer(&mut self, enemy: &mut Ship, target: Vec2) {
        if !enemy.is_alive() {
            return;
        }

        let travel_heading = match self.movement {
            EnemyMovement::Wander => self.wander_heading,
            EnemyMovement::Pursue => pursuit_heading(enemy.body.position, target),
        };
        enemy.body.velocity = heading_vector(travel_heading) * self.speed;

        if self.speed < ENEMY_MAX_SPEED {
            self.speed = (self.speed * ENEMY_SPEED_RAMP).min(ENEMY_MAX_SPEED);
        }

        self.attack_heading = pursuit_heading(enemy.body.position, target);
        enemy.body.heading = self.attack_heading;
    }

    /// Advance the wander timer by `delta_time` seconds, re-rolling the wander
    /// heading each time a full period has elapsed
    ///
    /// Returns `true` when a new heading was picked.
    pub fn update_wander(&mut self, delta_time: f32, rng: &mut impl Rng) -> bool {
        if !self.retarget.tick(delta_time) {
            return false;
        }

        self.wander_heading = f32::from(rng.gen_range(0u16..=360));
        log::trace!("Enemy wander heading now {}", self.wander_heading);
        true
    }

    /// Fire a hostile laser along the last pursuit heading
    ///
    /// The shot inherits the enemy's speed minus a fixed penalty.
    pub fn fire(&self, enemy: &Ship) -> Laser {
        let firer_speed = enemy.body.current_speed() - ENEMY_LASER_SPEED_PENALTY;
        Laser::new(enemy.body.position, self.attack_heading, firer_speed, Owner::Hostile)
    }

    /// Current cruise speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Heading the enemy last aimed along
    pub fn attack_heading(&self) -> f32 {
        self.attack_heading
    }

    /// Heading the enemy drifts along in wander mode
    pub fn wander_heading(&self) -> f32 {
        self.wander_heading
    }

    /// Movement mode
    pub fn movement(&self) -> EnemyMovement {
        self.movement
    }
}
