//! Asteroid hazards and their fragmentation tree.
//!
//! Fragmentation is fixed, not random: a Large asteroid always breaks into two
//! Medium and one Small, a Medium into two Small, and a Small into nothing. The
//! win score is derived from that fan-out.

use arcade_engine::foundation::math::{heading_vector, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BIG_ROCK_RADIUS, BIG_ROCK_SPEED, BIG_ROCK_SPIN, LARGE_SPLIT_DX, LARGE_SPLIT_DY,
    MEDIUM_ROCK_RADIUS, MEDIUM_ROCK_SPIN, MEDIUM_SPLIT, SMALL_ROCK_RADIUS, SMALL_ROCK_SPIN,
    SPAWN_MARGIN,
};
use crate::entity::{Body, HeadingPolicy, Viewport};

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    /// Spawned at game start, breaks into two Medium and one Small
    Large,
    /// Breaks into two Small
    Medium,
    /// Terminal size
    Small,
}

impl AsteroidSize {
    /// Collision radius for this size
    pub const fn radius(self) -> f32 {
        match self {
            Self::Large => BIG_ROCK_RADIUS,
            Self::Medium => MEDIUM_ROCK_RADIUS,
            Self::Small => SMALL_ROCK_RADIUS,
        }
    }

    /// Degrees added to the heading every tick
    pub const fn spin_rate(self) -> f32 {
        match self {
            Self::Large => BIG_ROCK_SPIN,
            Self::Medium => MEDIUM_ROCK_SPIN,
            Self::Small => SMALL_ROCK_SPIN,
        }
    }

    /// Score earned by destroying an asteroid of this size and every fragment it
    /// leaves behind
    pub const fn full_clear_score(self) -> u32 {
        match self {
            Self::Small => 1,
            Self::Medium => 1 + 2 * Self::Small.full_clear_score(),
            Self::Large => {
                1 + 2 * Self::Medium.full_clear_score() + Self::Small.full_clear_score()
            }
        }
    }
}

/// A spinning rock drifting across the field
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    /// Kinematic state
    pub body: Body,
    /// Size tier
    pub size: AsteroidSize,
    /// Degrees per tick
    pub spin: f32,
    heading_policy: HeadingPolicy,
}

impl Asteroid {
    /// Spawn a Large asteroid at a random point inside the spawn margin, drifting
    /// along a random heading
    pub fn spawn_large(rng: &mut impl Rng, viewport: &Viewport, heading_policy: HeadingPolicy) -> Self {
        let position = Vec2::new(
            rng.gen_range(SPAWN_MARGIN..=viewport.width - SPAWN_MARGIN),
            rng.gen_range(SPAWN_MARGIN..=viewport.height - SPAWN_MARGIN),
        );
        let heading = f32::from(rng.gen_range(0u16..=360));

        let mut body = Body::new(position, AsteroidSize::Large.radius());
        body.heading = heading;
        body.speed = Some(BIG_ROCK_SPEED);
        body.velocity = heading_vector(heading) * BIG_ROCK_SPEED;

        Self {
            body,
            size: AsteroidSize::Large,
            spin: AsteroidSize::Large.spin_rate(),
            heading_policy,
        }
    }

    /// Create an asteroid of `size` with an explicit velocity
    pub fn fragment(
        size: AsteroidSize,
        position: Vec2,
        velocity: Vec2,
        heading: f32,
        heading_policy: HeadingPolicy,
    ) -> Self {
        let mut body = Body::new(position, size.radius());
        body.velocity = velocity;
        body.heading = heading_policy.apply(heading);

        Self {
            body,
            size,
            spin: size.spin_rate(),
            heading_policy,
        }
    }

    /// Heading normalization applied by [`Asteroid::spin`]
    pub fn heading_policy(&self) -> HeadingPolicy {
        self.heading_policy
    }

    /// Rotate by one tick of spin
    pub fn spin(&mut self) {
        self.body.heading = self.heading_policy.apply(self.body.heading + self.spin);
    }

    /// Spin, then drift
    pub fn update(&mut self) {
        self.spin();
        self.body.advance();
    }

    /// Destroy this asteroid and return the fragments it breaks into
    ///
    /// Fragments share the parent's position and heading and take its velocity
    /// plus a fixed per-size offset.
    pub fn collide(&mut self) -> Vec<Asteroid> {
        self.body.alive = false;

        let position = self.body.position;
        let velocity = self.body.velocity;
        let heading = self.body.heading;
        let policy = self.heading_policy;
        let spawn = |size, offset: Vec2| Self::fragment(size, position, velocity + offset, heading, policy);

        match self.size {
            AsteroidSize::Large => vec![
                spawn(AsteroidSize::Medium, Vec2::new(0.0, LARGE_SPLIT_DY)),
                spawn(AsteroidSize::Medium, Vec2::new(0.0, -LARGE_SPLIT_DY)),
                spawn(AsteroidSize::Small, Vec2::new(LARGE_SPLIT_DX, 0.0)),
            ],
            AsteroidSize::Medium => vec![
                spawn(AsteroidSize::Small, Vec2::new(MEDIUM_SPLIT, MEDIUM_SPLIT)),
                spawn(AsteroidSize::Small, Vec2::new(-MEDIUM_SPLIT, -MEDIUM_SPLIT)),
            ],
            AsteroidSize::Small => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn asteroid(size: AsteroidSize) -> Asteroid {
        Asteroid::fragment(
            size,
            Vec2::new(400.0, 300.0),
            Vec2::new(1.0, -0.5),
            90.0,
            HeadingPolicy::ResetAboveFullTurn,
        )
    }

    /// Destroy `root` and every fragment below it, counting destructions
    fn destroy_tree(root: Asteroid) -> u32 {
        let mut pending = vec![root];
        let mut destroyed = 0;
        while let Some(mut rock) = pending.pop() {
            pending.extend(rock.collide());
            assert!(!rock.body.alive);
            destroyed += 1;
        }
        destroyed
    }

    #[test]
    fn test_large_fragments() {
        let mut large = asteroid(AsteroidSize::Large);
        let fragments = large.collide();

        assert!(!large.body.alive);
        assert_eq!(fragments.len(), 3);

        let sizes: Vec<_> = fragments.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![AsteroidSize::Medium, AsteroidSize::Medium, AsteroidSize::Small]);

        assert_eq!(fragments[0].body.velocity, Vec2::new(1.0, 1.5));
        assert_eq!(fragments[1].body.velocity, Vec2::new(1.0, -2.5));
        assert_eq!(fragments[2].body.velocity, Vec2::new(6.0, -0.5));
        for fragment in &fragments {
            assert_eq!(fragment.body.position, large.body.position);
            assert!(fragment.body.alive);
        }
    }

    #[test]
    fn test_medium_fragments() {
        let mut medium = asteroid(AsteroidSize::Medium);
        let fragments = medium.collide();

        assert!(!medium.body.alive);
        assert_eq!(fragments.len(), 2);
        assert!(fragments.iter().all(|f| f.size == AsteroidSize::Small));
        assert_eq!(fragments[0].body.velocity, Vec2::new(2.5, 1.0));
        assert_eq!(fragments[1].body.velocity, Vec2::new(-0.5, -2.0));
    }

    #[test]
    fn test_small_is_terminal() {
        let mut small = asteroid(AsteroidSize::Small);
        assert!(small.collide().is_empty());
        assert!(!small.body.alive);
    }

    #[test]
    fn test_full_tree_destruction_counts() {
        assert_eq!(destroy_tree(asteroid(AsteroidSize::Large)), 8);
        assert_eq!(destroy_tree(asteroid(AsteroidSize::Medium)), 3);
        assert_eq!(destroy_tree(asteroid(AsteroidSize::Small)), 1);
    }

    #[test]
    fn test_full_clear_score_matches_tree() {
        for size in [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small] {
            assert_eq!(size.full_clear_score(), destroy_tree(asteroid(size)));
        }
    }

    #[test]
    fn test_fragments_use_size_radius_and_spin() {
        let fragments = asteroid(AsteroidSize::Large).collide();
        assert_eq!(fragments[0].body.radius, MEDIUM_ROCK_RADIUS);
        assert_eq!(fragments[0].spin, MEDIUM_ROCK_SPIN);
        assert_eq!(fragments[2].body.radius, SMALL_ROCK_RADIUS);
        assert_eq!(fragments[2].spin, SMALL_ROCK_SPIN);
    }

    #[test]
    fn test_spawn_large_stays_inside_margin() {
        let viewport = Viewport::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let rock = Asteroid::spawn_large(&mut rng, &viewport, HeadingPolicy::default());
            let p = rock.body.position;
            assert!(p.x >= SPAWN_MARGIN && p.x <= viewport.width - SPAWN_MARGIN);
            assert!(p.y >= SPAWN_MARGIN && p.y <= viewport.height - SPAWN_MARGIN);
            assert!((0.0..=360.0).contains(&rock.body.heading));
            assert_relative_eq!(rock.body.current_speed(), BIG_ROCK_SPEED, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_spin_resets_above_full_turn() {
        let mut small = asteroid(AsteroidSize::Small);
        small.body.heading = 358.0;
        small.spin();
        assert_eq!(small.body.heading, 0.0);
    }

    #[test]
    fn test_negative_spin_is_never_normalized_by_default() {
        let mut medium = asteroid(AsteroidSize::Medium);
        medium.body.heading = 1.0;
        medium.spin();
        assert_eq!(medium.body.heading, -1.0);

        for _ in 0..100 {
            medium.spin();
        }
        assert_eq!(medium.body.heading, -201.0);
    }

    #[test]
    fn test_wrapped_policy_keeps_negative_spin_in_range() {
        let mut medium = Asteroid::fragment(
            AsteroidSize::Medium,
            Vec2::zeros(),
            Vec2::zeros(),
            1.0,
            HeadingPolicy::Wrapped,
        );
        medium.spin();
        assert_relative_eq!(medium.body.heading, 359.0, epsilon = 1e-4);
    }

    #[test]
    fn test_update_spins_and_drifts() {
        let mut large = asteroid(AsteroidSize::Large);
        large.update();
        assert_eq!(large.body.heading, 91.0);
        assert_eq!(large.body.position, Vec2::new(401.0, 299.5));
    }
}
