//! # Arcade Engine
//!
//! A small, headless runtime layer for frame-stepped 2D arcade games.
//!
//! ## Features
//!
//! - **Frame Loop**: `Engine::run` drives an [`Application`] once per frame
//! - **Configuration**: TOML and RON loading through the [`config::Config`] trait
//! - **Input**: held-key tracking with edge-triggered presses
//! - **Collision**: cheap proximity tests for screen-space entities
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         if engine.frame() >= 600 {
//!             engine.request_exit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod physics;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use config::{Config, ConfigError, EngineConfig};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, Application,
        Engine, EngineConfig, EngineError,
        config::{Config, ConfigError},
        foundation::{
            math::{heading_vector, Vec2},
            time::{IntervalTimer, Timer},
        },
        input::InputManager,
        physics::axis_aligned_overlap,
    };
}
