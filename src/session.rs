//! One round of gameplay: the player, everything on the map, the spawner
//! and the score.  `advance` runs one frame in a fixed order.

use rand::Rng;

use crate::compute::{prune, resolve_pickups, resolve_player_hits, resolve_projectile_hits};
use crate::constants::DISPLAY_SCORE_STEP;
use crate::entities::{Enemy, ItemDrop, Player, Projectile};
use crate::input::InputFrame;
use crate::spawn::SpawnController;

/// Tally of one `advance` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub shots_fired: u32,
    pub enemies_spawned: u32,
    pub hits_taken: u32,
    pub kills: u32,
    pub drops_spawned: u32,
    pub hearts_collected: u32,
    pub nukes_collected: u32,
    pub score_gained: u32,
    /// The player died during this frame.
    pub player_died: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GameplaySession {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub drops: Vec<ItemDrop>,
    pub spawner: SpawnController,
    pub score: u32,
    /// HUD counter that climbs toward `score`.
    pub display_score: u32,
    /// Seconds played this session.
    pub elapsed: f32,
}

impl GameplaySession {
    pub fn new() -> Self {
        GameplaySession::default()
    }

    /// Start over: fresh player, empty map, zero score, spawner rewound.
    pub fn reset(&mut self) {
        *self = GameplaySession::new();
    }

    pub fn is_over(&self) -> bool {
        self.player.dead
    }

    /// Advance the round by `dt` seconds.
    pub fn advance(&mut self, input: &InputFrame, dt: f32, rng: &mut impl Rng) -> FrameReport {
        let mut report = FrameReport::default();
        let was_alive = self.player.is_alive();
        let score_before = self.score;
        self.elapsed += dt;

        // 1. Player (may fire)
        if let Some(projectile) = self.player.advance(dt, input) {
            self.projectiles.push(projectile);
            report.shots_fired += 1;
        }

        // 2. Spawning stops once the player is dead
        if self.player.is_alive() && self.spawner.advance(dt, &mut self.enemies, rng).is_some() {
            report.enemies_spawned += 1;
        }

        // 3. Movement
        let target = self.player.position;
        let player_dead = self.player.dead;
        for enemy in &mut self.enemies {
            enemy.advance(dt, target, player_dead);
        }
        for projectile in &mut self.projectiles {
            projectile.advance(dt);
        }

        // 4. Enemies reaching the player
        report.hits_taken = resolve_player_hits(&mut self.player, &mut self.enemies);

        // 5. Projectiles reaching enemies
        let shots = resolve_projectile_hits(
            &mut self.projectiles,
            &mut self.enemies,
            self.player.hit_count,
            &mut self.drops,
            rng,
        );
        self.score += shots.score;
        report.kills = shots.kills;
        report.drops_spawned = shots.drops_spawned;

        // 6. Drops age out or get picked up
        for drop in &mut self.drops {
            drop.advance(dt);
        }
        let pickups = resolve_pickups(&mut self.player, &mut self.enemies, &mut self.drops);
        self.score += pickups.score;
        report.hearts_collected = pickups.hearts;
        report.nukes_collected = pickups.nukes;

        // 7. Pruning
        prune(&mut self.enemies, &mut self.projectiles);

        if self.display_score < self.score {
            self.display_score += (self.score - self.display_score).min(DISPLAY_SCORE_STEP);
        }

        report.score_gained = self.score - score_before;
        report.player_died = was_alive && self.player.dead;
        if report.player_died {
            log::info!(
                "player died after {:.1}s with score {}",
                self.elapsed,
                self.score
            );
        }
        report
    }
}
