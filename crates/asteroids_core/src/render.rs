//! Presentation seam.
//!
//! The core never draws anything itself. A host implements [`Renderer`] and
//! [`render_frame`] walks a snapshot, dispatching each entity to the matching call.

use crate::snapshot::{AsteroidView, HudView, LaserView, ShipView, WorldSnapshot};
use crate::world::Outcome;

/// Abstract drawing calls, one per entity kind
pub trait Renderer {
    /// Draw a ship hull
    fn draw_ship(&mut self, ship: &ShipView);

    /// Draw the shield bubble around a ship
    fn draw_shield(&mut self, ship: &ShipView);

    /// Draw a laser bolt
    fn draw_laser(&mut self, laser: &LaserView);

    /// Draw an asteroid
    fn draw_asteroid(&mut self, asteroid: &AsteroidView);

    /// Draw score, shield percentage and the victory or defeat banner
    fn draw_hud(&mut self, hud: &HudView);
}

/// Draw one frame
///
/// The player is hidden once dead or once the game is over; the enemy is hidden
/// once dead.
pub fn render_frame<R: Renderer + ?Sized>(snapshot: &WorldSnapshot, renderer: &mut R) {
    let player = &snapshot.player;
    if player.alive && snapshot.hud.outcome == Outcome::InProgress {
        renderer.draw_ship(player);
        if player.shield_active {
            renderer.draw_shield(player);
        }
    }

    for laser in &snapshot.lasers {
        renderer.draw_laser(laser);
    }
    for asteroid in &snapshot.asteroids {
        renderer.draw_asteroid(asteroid);
    }

    renderer.draw_hud(&snapshot.hud);

    if snapshot.enemy.alive {
        renderer.draw_ship(&snapshot.enemy);
    }
}
