//! Time-driven enemy factory.
//!
//! Every spawn shortens the wait before the next one, down to a floor, so
//! pressure keeps rising the longer a session lasts.

use rand::Rng;

use crate::constants::{
    SPAWN_FAR_EDGE, SPAWN_INITIAL_INTERVAL, SPAWN_INTERVAL_STEP, SPAWN_MIN_INTERVAL,
    SPAWN_NEAR_EDGE,
};
use crate::entities::{Enemy, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Right,
        SpawnEdge::Top,
        SpawnEdge::Bottom,
    ];

    /// A uniformly random point on this edge's spawn line.
    pub fn sample_point(self, rng: &mut impl Rng) -> Vec2 {
        let along = rng.gen_range(SPAWN_NEAR_EDGE..SPAWN_FAR_EDGE) as f32;
        let near = SPAWN_NEAR_EDGE as f32;
        let far = SPAWN_FAR_EDGE as f32;
        match self {
            SpawnEdge::Left => Vec2::new(near, along),
            SpawnEdge::Right => Vec2::new(far, along),
            SpawnEdge::Top => Vec2::new(along, near),
            SpawnEdge::Bottom => Vec2::new(along, far),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnController {
    /// Seconds until the next spawn.
    pub countdown: f64,
    /// Countdown value applied after the next spawn.
    pub max_interval: f64,
}

impl Default for SpawnController {
    fn default() -> Self {
        SpawnController::new()
    }
}

impl SpawnController {
    pub fn new() -> Self {
        SpawnController {
            countdown: SPAWN_INITIAL_INTERVAL,
            max_interval: SPAWN_INITIAL_INTERVAL,
        }
    }

    pub fn reset(&mut self) {
        *self = SpawnController::new();
    }

    /// Run the countdown down by `dt` and push at most one enemy.
    /// Returns the edge the enemy came from when one spawned.
    pub fn advance(
        &mut self,
        dt: f32,
        enemies: &mut Vec<Enemy>,
        rng: &mut impl Rng,
    ) -> Option<SpawnEdge> {
        self.countdown -= f64::from(dt);
        if self.countdown > 0.0 {
            return None;
        }

        let edge = SpawnEdge::ALL[rng.gen_range(0..SpawnEdge::ALL.len())];
        let position = edge.sample_point(rng);
        enemies.push(Enemy::new(position));

        self.countdown = self.max_interval;
        self.max_interval = (self.max_interval - SPAWN_INTERVAL_STEP).max(SPAWN_MIN_INTERVAL);

        log::debug!(
            "spawned enemy on {:?} edge at ({:.0}, {:.0}); next in {:.2}s",
            edge,
            position.x,
            position.y,
            self.countdown
        );
        Some(edge)
    }
}
