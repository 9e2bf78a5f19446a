//! Fixed gameplay constants.
//!
//! Speeds are in pixels per tick, angles in degrees, durations in ticks unless the
//! name says otherwise.

#![allow(missing_docs)]

// Viewport
pub const SCREEN_WIDTH: f32 = 1920.0;
pub const SCREEN_HEIGHT: f32 = 1080.0;
/// Large asteroids spawn at least this far from every edge
pub const SPAWN_MARGIN: f32 = 100.0;

// Lasers
pub const LASER_RADIUS: f32 = 30.0;
pub const LASER_SPEED: f32 = 10.0;
pub const LASER_LIFETIME: u32 = 60;

// Ships
pub const SHIP_RADIUS: f32 = 30.0;
pub const SHIP_TURN_AMOUNT: f32 = 3.0;
pub const SHIP_THRUST_AMOUNT: f32 = 0.25;
pub const SHIP_DRAG: f32 = 0.98;
pub const SHIELD_CHARGE: u32 = 1000;
pub const COLLISION_COOLDOWN_TICKS: u32 = 100;
pub const DAMAGE_STATE_INITIAL: u8 = 1;
pub const DAMAGE_STATE_DESTROYED: u8 = 6;

// Asteroids
pub const INITIAL_ROCK_COUNT: u32 = 3;
/// Point-awarding destructions in one Large asteroid's full fragmentation tree
pub const POINTS_PER_LARGE_ROCK: u32 = 8;

pub const BIG_ROCK_SPIN: f32 = 1.0;
pub const BIG_ROCK_SPEED: f32 = 1.5;
pub const BIG_ROCK_RADIUS: f32 = 15.0;

pub const MEDIUM_ROCK_SPIN: f32 = -2.0;
pub const MEDIUM_ROCK_RADIUS: f32 = 5.0;

pub const SMALL_ROCK_SPIN: f32 = 5.0;
pub const SMALL_ROCK_RADIUS: f32 = 2.0;

/// Vertical split applied to the two Medium fragments of a Large asteroid
pub const LARGE_SPLIT_DY: f32 = 2.0;
/// Horizontal kick given to the Small fragment of a Large asteroid
pub const LARGE_SPLIT_DX: f32 = 5.0;
/// Diagonal split applied to both Small fragments of a Medium asteroid
pub const MEDIUM_SPLIT: f32 = 1.5;

// Enemy
pub const ENEMY_INITIAL_SPEED: f32 = 2.0;
pub const ENEMY_MAX_SPEED: f32 = 10.0;
pub const ENEMY_SPEED_RAMP: f32 = 1.0013;
/// No attacks on or before this frame
pub const ENEMY_ATTACK_START_FRAME: u64 = 180;
pub const ENEMY_ATTACK_INTERVAL: u64 = 60;
/// Subtracted from the enemy's speed when it fires
pub const ENEMY_LASER_SPEED_PENALTY: f32 = 3.0;
/// Wall-clock seconds between wander heading changes
pub const ENEMY_RETARGET_SECONDS: f32 = 1.0;
/// Keeps the pursuit angle finite when both ships share an x coordinate
pub const AIM_EPSILON: f32 = 0.001;

/// Score that ends the game in victory
pub const fn win_score() -> u32 {
    INITIAL_ROCK_COUNT * POINTS_PER_LARGE_ROCK
}
