//! World state and the per-tick update loop.
//!
//! One call to [`World::update`] is one tick:
//!
//! 1. apply held input to the player (turn, thrust, shield) and the fire edge
//! 2. advance every entity, then wrap it onto the screen
//! 3. steer the enemy
//! 4. resolve collisions, appending fragments and scoring
//! 5. purge dead lasers and asteroids
//! 6. count down ship cooldowns and the enemy wander timer
//! 7. let the enemy fire if this is an attack frame
//! 8. decide victory or defeat
//!
//! Once the outcome is decided, further updates do nothing.

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::asteroid::Asteroid;
use crate::collision::{resolve_collisions, CollisionEvent};
use crate::config::SessionConfig;
use crate::constants::{win_score, INITIAL_ROCK_COUNT, SHIP_TURN_AMOUNT};
use crate::enemy::{is_attack_frame, EnemyController};
use crate::entity::Viewport;
use crate::input::{Actions, FrameInput};
use crate::laser::{Laser, Owner};
use crate::ship::{Ship, ShipRole};
use crate::snapshot::{HudView, WorldSnapshot};

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Still playing
    InProgress,
    /// Every asteroid and fragment destroyed
    Victory,
    /// Player ship destroyed first
    Defeat,
}

impl Outcome {
    /// Whether the game has ended
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The whole simulation
pub struct World {
    viewport: Viewport,
    player: Ship,
    enemy: Ship,
    enemy_controller: EnemyController,
    lasers: Vec<Laser>,
    asteroids: Vec<Asteroid>,
    score: u32,
    frame: u64,
    outcome: Outcome,
    rng: StdRng,
}

impl World {
    /// Start a new game: both ships at the center, Large asteroids scattered
    pub fn new(session: &SessionConfig) -> Self {
        let viewport = Viewport::default();
        let mut rng = StdRng::seed_from_u64(session.seed);

        let asteroids = (0..INITIAL_ROCK_COUNT)
            .map(|_| Asteroid::spawn_large(&mut rng, &viewport, session.asteroid_heading))
            .collect();

        log::info!(
            "New world: seed {}, {} asteroids, enemy movement {:?}",
            session.seed,
            INITIAL_ROCK_COUNT,
            session.enemy_movement
        );

        Self {
            viewport,
            player: Ship::new(ShipRole::Player, viewport.center()),
            enemy: Ship::new(ShipRole::Enemy, viewport.center()),
            enemy_controller: EnemyController::new(session.enemy_movement),
            lasers: Vec::new(),
            asteroids,
            score: 0,
            frame: 0,
            outcome: Outcome::InProgress,
            rng,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// `delta_time` is the host's frame time in seconds; it only drives the
    /// enemy's wander retargeting. Returns the collisions resolved this tick.
    pub fn update(&mut self, input: &FrameInput, delta_time: f32) -> Vec<CollisionEvent> {
        if self.outcome.is_over() {
            return Vec::new();
        }

        self.apply_input(input);
        self.advance_entities();

        self.enemy_controller.steer(&mut self.enemy, self.player.body.position);

        let events = resolve_collisions(&mut self.lasers, &mut self.asteroids, &mut self.player, &mut self.enemy);
        for event in &events {
            log::debug!("Frame {}: {:?}", self.frame, event);
            self.score += event.score();
        }

        self.purge_dead();
        self.tick_timers(delta_time);

        self.frame += 1;
        if is_attack_frame(self.frame) && self.enemy.is_alive() {
            let laser = self.enemy_controller.fire(&self.enemy);
            log::debug!("Frame {}: enemy fires along {:.1}", self.frame, laser.body.heading);
            self.lasers.push(laser);
        }

        self.evaluate_outcome();

        log::trace!(
            "Frame {} done: score {}, {} lasers, {} asteroids",
            self.frame,
            self.score,
            self.lasers.len(),
            self.asteroids.len()
        );
        events
    }

    /// Fire one friendly laser from the player's nose
    ///
    /// Ignored once the player is dead or the game is over. Returns whether a
    /// laser was spawned.
    pub fn fire(&mut self) -> bool {
        if !self.player.is_alive() || self.outcome.is_over() {
            return false;
        }

        let body = &self.player.body;
        self.lasers.push(Laser::new(body.position, body.heading, body.current_speed(), Owner::Friendly));
        true
    }

    fn apply_input(&mut self, input: &FrameInput) {
        if !self.player.is_alive() {
            return;
        }

        if input.is_held(Actions::TURN_LEFT) {
            self.player.turn(SHIP_TURN_AMOUNT);
        }
        if input.is_held(Actions::TURN_RIGHT) {
            self.player.turn(-SHIP_TURN_AMOUNT);
        }
        if input.is_held(Actions::THRUST_FORWARD) {
            self.player.accelerate();
        }
        if input.is_held(Actions::THRUST_BACKWARD) {
            self.player.decelerate();
        }
        if input.is_held(Actions::SHIELD) {
            self.player.activate_shield();
        } else {
            self.player.deactivate_shield();
        }

        if input.fire {
            self.fire();
        }
    }

    fn advance_entities(&mut self) {
        let viewport = self.viewport;

        for ship in [&mut self.player, &mut self.enemy] {
            if ship.is_alive() {
                ship.body.advance();
                viewport.wrap(&mut ship.body);
            }
        }
        for laser in &mut self.lasers {
            laser.update();
            viewport.wrap(&mut laser.body);
        }
        for asteroid in &mut self.asteroids {
            asteroid.update();
            viewport.wrap(&mut asteroid.body);
        }
    }

    fn purge_dead(&mut self) {
        self.lasers.retain(|laser| laser.body.alive);
        self.asteroids.retain(|asteroid| asteroid.body.alive);
    }

    fn tick_timers(&mut self, delta_time: f32) {
        self.player.tick_cooldown();
        self.enemy.tick_cooldown();

        if self.enemy.is_alive() {
            self.enemy_controller.update_wander(delta_time, &mut self.rng);
        }
    }

    fn evaluate_outcome(&mut self) {
        let outcome = if self.score >= win_score() {
            Outcome::Victory
        } else if !self.player.is_alive() {
            Outcome::Defeat
        } else {
            Outcome::InProgress
        };

        if outcome != self.outcome {
            log::info!("Frame {}: {:?} with score {}", self.frame, outcome, self.score);
            self.outcome = outcome;
        }
    }

    /// Read-only view of everything a renderer draws
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            player: (&self.player).into(),
            enemy: (&self.enemy).into(),
            lasers: self.lasers.iter().filter(|l| l.body.alive).map(Into::into).collect(),
            asteroids: self.asteroids.iter().filter(|a| a.body.alive).map(Into::into).collect(),
            hud: HudView {
                score: self.score,
                win_score: win_score(),
                shield_percent: self.player.shield_percent(),
                outcome: self.outcome,
                frame: self.frame,
            },
        }
    }

    /// Asteroids destroyed so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current game state
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Player ship
    pub fn player(&self) -> &Ship {
        &self.player
    }

    /// Enemy ship
    pub fn enemy(&self) -> &Ship {
        &self.enemy
    }

    /// Lasers in flight
    pub fn lasers(&self) -> &[Laser] {
        &self.lasers
    }

    /// Asteroids on the field
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Play area
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
