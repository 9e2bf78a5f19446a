//! Core engine implementation

use crate::{
    application::Application,
    config::EngineConfig,
    foundation::time::Timer,
};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns frame pacing and decides when the main loop stops.
pub struct Engine {
    /// Frame timing
    timer: Timer,

    /// Engine configuration
    config: EngineConfig,

    /// Frames completed so far
    frame: u64,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        if let Some(step) = config.fixed_timestep {
            if !step.is_finite() || step <= 0.0 {
                return Err(EngineError::InitializationFailed(format!(
                    "fixed timestep must be positive, got {step}"
                )));
            }
        }

        log::info!("Initializing engine...");

        Ok(Self {
            timer: Timer::new(),
            config,
            frame: 0,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");

        while engine.running {
            let delta_time = engine.next_delta();

            app.update(&mut engine, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

            app.render(&mut engine)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;

            engine.frame += 1;
            if engine.config.max_frames.is_some_and(|max| engine.frame >= max) {
                log::info!("Frame limit {} reached", engine.frame);
                engine.running = false;
            }
        }

        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames in {:.2}s ({:.1} fps)",
            engine.frame,
            engine.timer.total_time(),
            engine.average_fps()
        );
        Ok(())
    }

    fn next_delta(&mut self) -> f32 {
        self.timer.update();
        self.config.fixed_timestep.unwrap_or_else(|| self.timer.delta_time())
    }

    /// Stop the loop after the current frame
    pub fn request_exit(&mut self) {
        self.running = false;
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Wall-clock frames per second averaged over the run so far
    ///
    /// Measured even under a fixed timestep, where it shows how fast the loop
    /// actually ran.
    pub fn average_fps(&self) -> f32 {
        self.timer.average_fps()
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine initialization failed
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;

    #[derive(Default)]
    struct CountingApp {
        initialized: bool,
        updates: u32,
        renders: u32,
        cleaned_up: bool,
        total_time: f32,
        stop_at: Option<u64>,
    }

    impl Application for CountingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            self.initialized = true;
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            self.total_time += delta_time;
            if self.stop_at == Some(engine.frame()) {
                engine.request_exit();
            }
            Ok(())
        }

        fn render(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            self.renders += 1;
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    #[test]
    fn test_run_stops_at_frame_limit() {
        let mut app = CountingApp::default();
        Engine::run(EngineConfig::new().with_fixed_fps(10).with_max_frames(5), &mut app).unwrap();

        assert!(app.initialized);
        assert!(app.cleaned_up);
        assert_eq!(app.updates, 5);
        assert_eq!(app.renders, 5);
        assert!((app.total_time - 0.5).abs() < 1e-5);
    }

    struct SettingsReader {
        seen_timestep: Option<Option<f32>>,
        fps: f32,
    }

    impl Application for SettingsReader {
        fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            self.seen_timestep = Some(engine.config().fixed_timestep);
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            Ok(())
        }

        fn cleanup(&mut self, engine: &mut Engine) {
            self.fps = engine.average_fps();
        }
    }

    #[test]
    fn test_application_sees_config_and_frame_rate() {
        let mut app = SettingsReader { seen_timestep: None, fps: -1.0 };
        Engine::run(EngineConfig::new().with_fixed_fps(20).with_max_frames(4), &mut app).unwrap();

        assert_eq!(app.seen_timestep, Some(Some(1.0 / 20.0)));
        assert!(app.fps >= 0.0);
    }

    #[test]
    fn test_request_exit_finishes_current_frame() {
        let mut app = CountingApp {
            stop_at: Some(2),
            ..CountingApp::default()
        };
        Engine::run(EngineConfig::new(), &mut app).unwrap();

        assert_eq!(app.updates, 3);
        assert_eq!(app.renders, 3);
    }

    #[test]
    fn test_rejects_non_positive_timestep() {
        let config = EngineConfig {
            fixed_timestep: Some(0.0),
            ..EngineConfig::default()
        };
        assert!(matches!(Engine::new(config), Err(EngineError::InitializationFailed(_))));
    }

    struct FailingApp;

    impl Application for FailingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
            Err(AppError::GameLogic("boom".to_string()))
        }

        fn cleanup(&mut self, _engine: &mut Engine) {}
    }

    #[test]
    fn test_update_error_propagates() {
        let result = Engine::run(EngineConfig::new().with_max_frames(3), &mut FailingApp);
        assert!(matches!(result, Err(EngineError::ApplicationError(_))));
    }
}
