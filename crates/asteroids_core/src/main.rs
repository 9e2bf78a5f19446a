//! Headless runner: plays one session with a scripted pilot and prints the final
//! snapshot as RON.
//!
//! Usage: `asteroids-headless [config.toml|config.ron]`

use std::error::Error;
use std::path::Path;

use arcade_engine::foundation::logging;
use arcade_engine::physics::circles_overlap;
use arcade_engine::prelude::*;
use asteroids_core::{
    render_frame, AsteroidView, Control, FrameInput, GameConfig, HudView, LaserView, Renderer,
    ShipView, World,
};
use log::{info, trace};

const DEFAULT_CONFIG_PATH: &str = "asteroids.toml";
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

/// Pilot raises the shield when an asteroid comes this close
const DANGER_RADIUS: f32 = 80.0;
/// Frames between trigger pulls
const FIRE_CADENCE: u64 = 12;
/// Frames between thrust bursts, and how long each burst lasts
const THRUST_PERIOD: u64 = 90;
const THRUST_BURST: u64 = 10;

/// Renderer that only logs what it would draw
#[derive(Default)]
struct LogRenderer {
    draw_calls: u64,
}

impl Renderer for LogRenderer {
    fn draw_ship(&mut self, ship: &ShipView) {
        self.draw_calls += 1;
        trace!(
            "{:?} ship at ({:.0}, {:.0}) facing {:.0}, {:?}",
            ship.role,
            ship.position.x,
            ship.position.y,
            ship.heading,
            ship.damage_tier
        );
    }

    fn draw_shield(&mut self, ship: &ShipView) {
        self.draw_calls += 1;
        trace!("{:?} shield at {}%", ship.role, ship.shield_percent);
    }

    fn draw_laser(&mut self, laser: &LaserView) {
        self.draw_calls += 1;
        trace!("{:?} laser at ({:.0}, {:.0})", laser.owner, laser.position.x, laser.position.y);
    }

    fn draw_asteroid(&mut self, asteroid: &AsteroidView) {
        self.draw_calls += 1;
        trace!("{:?} asteroid at ({:.0}, {:.0})", asteroid.size, asteroid.position.x, asteroid.position.y);
    }

    fn draw_hud(&mut self, hud: &HudView) {
        self.draw_calls += 1;
        trace!("Score {}/{} shield {}% {:?}", hud.score, hud.win_score, hud.shield_percent, hud.outcome);
    }
}

/// One game driven by a scripted pilot
struct HeadlessSession {
    config: GameConfig,
    world: Option<World>,
    input: InputManager<Control>,
    renderer: LogRenderer,
}

impl HeadlessSession {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            world: None,
            input: InputManager::new(),
            renderer: LogRenderer::default(),
        }
    }

    /// Feed the pilot's key states for `frame` into the input manager
    fn pilot(&mut self, frame: u64, world: &World) {
        let player = world.player();
        let threatened = world.asteroids().iter().any(|asteroid| {
            circles_overlap(player.body.position, DANGER_RADIUS, asteroid.body.position, asteroid.body.radius)
        });

        self.input.handle_key_input(Control::TurnLeft, true);
        self.input.handle_key_input(Control::ThrustForward, frame % THRUST_PERIOD < THRUST_BURST);
        self.input.handle_key_input(Control::Shield, threatened);

        // Release between pulls so every pull registers as a fresh press
        self.input.handle_key_input(Control::Fire, frame % FIRE_CADENCE == 0);
    }
}

impl Application for HeadlessSession {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        info!(
            "Starting headless session with seed {}, timestep {:?}",
            self.config.session.seed,
            engine.config().fixed_timestep
        );
        self.world = Some(World::new(&self.config.session));
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        let Some(mut world) = self.world.take() else {
            return Err(AppError::GameLogic("update before initialize".to_string()));
        };

        self.pilot(engine.frame(), &world);
        let input = FrameInput::from_input(&mut self.input);
        world.update(&input, delta_time);

        if world.outcome().is_over() {
            info!("Game over at frame {}: {:?}", world.frame(), world.outcome());
            engine.request_exit();
        }

        self.world = Some(world);
        Ok(())
    }

    fn render(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        if let Some(world) = &self.world {
            render_frame(&world.snapshot(), &mut self.renderer);
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        info!(
            "Session ended after {} frames, {} draw calls, {:.0} fps",
            engine.frame(),
            self.renderer.draw_calls,
            engine.average_fps()
        );

        let Some(world) = &self.world else {
            return;
        };
        info!("Final score {} ({:?})", world.score(), world.outcome());

        match ron::ser::to_string_pretty(&world.snapshot(), ron::ser::PrettyConfig::default()) {
            Ok(text) => println!("{text}"),
            Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
        }
    }
}

/// Load the session config and apply the headless frame cap
///
/// Runs before the logger exists, so it reports whether defaults were used
/// instead of logging it.
fn load_config(path: &Path) -> Result<(GameConfig, bool), ConfigError> {
    let defaulted = !path.exists();
    let mut config = GameConfig::load_or_default(path)?;

    if config.engine.max_frames.is_none() {
        config.engine.max_frames = Some(DEFAULT_MAX_FRAMES);
    }
    Ok((config, defaulted))
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let (config, defaulted) = load_config(Path::new(&path))?;
    logging::init(&config.engine.log_level);
    if defaulted {
        info!("Config {path} not found, using defaults");
    }

    let engine_config = config.engine.clone();
    let mut session = HeadlessSession::new(config);
    Engine::run(engine_config, &mut session)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_reports_defaults() {
        let path = std::env::temp_dir().join(format!("asteroids_headless_missing_{}.toml", std::process::id()));
        let (config, defaulted) = load_config(&path).unwrap();

        assert!(defaulted);
        assert_eq!(config.session, GameConfig::default().session);
        assert_eq!(config.engine.max_frames, Some(DEFAULT_MAX_FRAMES));
    }

    #[test]
    fn test_present_config_keeps_its_frame_cap() {
        let path = std::env::temp_dir().join(format!("asteroids_headless_present_{}.ron", std::process::id()));
        std::fs::write(&path, "(engine: (max_frames: Some(42)), session: (seed: 5))").unwrap();

        let (config, defaulted) = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!defaulted);
        assert_eq!(config.engine.max_frames, Some(42));
        assert_eq!(config.session.seed, 5);
    }
}
