//! Collision detection and resolution.
//!
//! Three pairings run once per tick, each only between live participants:
//!
//! 1. friendly lasers against asteroids
//! 2. asteroids against the player
//! 3. hostile lasers against the player, friendly lasers against the enemy
//!
//! Hostile lasers pass through asteroids. The player is only hit while its shield
//! is down and its cooldown has expired; the enemy has no such protection.

use arcade_engine::foundation::math::Vec2;
use arcade_engine::physics::axis_aligned_overlap;
use serde::Serialize;

use crate::asteroid::{Asteroid, AsteroidSize};
use crate::entity::Body;
use crate::laser::{Laser, Owner};
use crate::ship::Ship;

/// What struck the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitCause {
    /// Flew into an asteroid
    Asteroid,
    /// Shot by the enemy
    HostileLaser,
}

/// Outcome of a single accepted collision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CollisionEvent {
    /// A friendly laser broke an asteroid; worth one point
    AsteroidDestroyed {
        /// Size of the destroyed asteroid
        size: AsteroidSize,
        /// Where it broke
        position: Vec2,
        /// Number of fragments it left
        fragments: usize,
    },
    /// The player took damage
    PlayerHit {
        /// What hit it
        cause: HitCause,
        /// Damage state after the hit
        damage_state: u8,
    },
    /// The enemy took damage
    EnemyHit {
        /// Damage state after the hit
        damage_state: u8,
    },
}

impl CollisionEvent {
    /// Points this event is worth
    pub const fn score(&self) -> u32 {
        match self {
            Self::AsteroidDestroyed { .. } => 1,
            Self::PlayerHit { .. } | Self::EnemyHit { .. } => 0,
        }
    }
}

fn touching(a: &Body, b: &Body) -> bool {
    a.alive && b.alive && axis_aligned_overlap(a.position, a.radius, b.position, b.radius)
}

/// Run every pairing for one tick
///
/// Fragments from destroyed asteroids are appended to `asteroids` only after the
/// laser pass, so a fragment is never hit on the tick it is created.
pub fn resolve_collisions(
    lasers: &mut [Laser],
    asteroids: &mut Vec<Asteroid>,
    player: &mut Ship,
    enemy: &mut Ship,
) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    let fragments = lasers_against_asteroids(lasers, asteroids, &mut events);
    asteroids.extend(fragments);

    asteroids_against_player(asteroids, player, &mut events);
    lasers_against_ships(lasers, player, enemy, &mut events);

    events
}

fn lasers_against_asteroids(
    lasers: &mut [Laser],
    asteroids: &mut [Asteroid],
    events: &mut Vec<CollisionEvent>,
) -> Vec<Asteroid> {
    let mut fragments = Vec::new();

    for laser in lasers.iter_mut().filter(|laser| laser.is_friendly()) {
        for asteroid in asteroids.iter_mut() {
            if !touching(&laser.body, &asteroid.body) {
                continue;
            }

            laser.body.alive = false;
            let pieces = asteroid.collide();
            events.push(CollisionEvent::AsteroidDestroyed {
                size: asteroid.size,
                position: asteroid.body.position,
                fragments: pieces.len(),
            });
            fragments.extend(pieces);
        }
    }

    fragments
}

fn asteroids_against_player(asteroids: &[Asteroid], player: &mut Ship, events: &mut Vec<CollisionEvent>) {
    for asteroid in asteroids {
        if player.is_vulnerable() && touching(&player.body, &asteroid.body) {
            player.collide();
            events.push(CollisionEvent::PlayerHit {
                cause: HitCause::Asteroid,
                damage_state: player.damage_state(),
            });
        }
    }
}

fn lasers_against_ships(
    lasers: &mut [Laser],
    player: &mut Ship,
    enemy: &mut Ship,
    events: &mut Vec<CollisionEvent>,
) {
    for laser in lasers.iter_mut() {
        match laser.owner {
            Owner::Hostile => {
                if player.is_vulnerable() && touching(&player.body, &laser.body) {
                    laser.body.alive = false;
                    player.collide();
                    events.push(CollisionEvent::PlayerHit {
                        cause: HitCause::HostileLaser,
                        damage_state: player.damage_state(),
                    });
                }
            }
            Owner::Friendly => {
                if touching(&enemy.body, &laser.body) {
                    laser.body.alive = false;
                    enemy.collide();
                    events.push(CollisionEvent::EnemyHit {
                        damage_state: enemy.damage_state(),
                    });
                }
            }
        }
    }
}
