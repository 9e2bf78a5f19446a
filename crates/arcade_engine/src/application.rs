//! Application trait and lifecycle management

use crate::engine::Engine;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive your game from the engine loop.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Use this to set up your initial
    /// game state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame. Implement your game logic here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Render the application
    ///
    /// Called after update. Headless applications can leave this as a no-op.
    fn render(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called when the loop stops. Use this to report results or save state.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
