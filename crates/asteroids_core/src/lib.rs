//! # Asteroids Core
//!
//! Frame-stepped simulation of a two-ship duel in a field of fragmenting asteroids.
//!
//! ## Features
//!
//! - **World**: one [`World::update`] call per tick, fully deterministic for a given seed
//! - **Entities**: ships with shields and damage states, lasers, three asteroid sizes
//! - **Enemy AI**: wandering or pursuing movement, aimed shots on a fixed cadence
//! - **Presentation seam**: [`WorldSnapshot`] plus the [`Renderer`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use asteroids_core::{Actions, FrameInput, Outcome, SessionConfig, World};
//!
//! let mut world = World::new(&SessionConfig::default());
//! for _ in 0..60 {
//!     world.update(&FrameInput::holding(Actions::TURN_LEFT), 1.0 / 60.0);
//! }
//! assert_eq!(world.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod asteroid;
pub mod collision;
pub mod config;
pub mod constants;
pub mod enemy;
pub mod entity;
pub mod input;
pub mod laser;
pub mod render;
pub mod ship;
pub mod snapshot;
pub mod world;

pub use asteroid::{Asteroid, AsteroidSize};
pub use collision::{resolve_collisions, CollisionEvent, HitCause};
pub use config::{GameConfig, SessionConfig};
pub use enemy::{EnemyController, EnemyMovement};
pub use entity::{Body, HeadingPolicy, Viewport};
pub use input::{Actions, Control, FrameInput};
pub use laser::{Laser, Owner};
pub use render::{render_frame, Renderer};
pub use ship::{DamageTier, Ship, ShipRole};
pub use snapshot::{AsteroidView, HudView, LaserView, ShipView, WorldSnapshot};
pub use world::{Outcome, World};
