//! Collision and scoring passes.
//!
//! Each pass borrows exactly the collections it touches from the session
//! and returns the score it earned, so the session stays the single owner
//! of all game state.  All randomness comes through the injected `rng`.

use rand::Rng;

use crate::constants::{
    DROP_REGION_MIN, DROP_REGION_SIZE, HEART_CHANCE, NUKE_CHANCE, PLAYER_RADIUS,
    SCORE_ENEMY_KILL, SCORE_PICKUP,
};
use crate::entities::{DropKind, Enemy, ItemDrop, Player, Projectile, Vec2};

/// What the projectile pass did this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShotOutcome {
    pub score: u32,
    pub kills: u32,
    pub drops_spawned: u32,
}

/// What the pickup pass did this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickupOutcome {
    pub score: u32,
    pub hearts: u32,
    pub nukes: u32,
    pub expired: u32,
}

// ── Drops ────────────────────────────────────────────────────────────────────

/// Map one uniform draw in [0, 1) to a drop.
pub fn roll_drop(chance: f64) -> Option<DropKind> {
    if chance < NUKE_CHANCE {
        Some(DropKind::Nuke)
    } else if chance < HEART_CHANCE {
        Some(DropKind::Heart)
    } else {
        None
    }
}

/// Square in the middle of the island where kills may leave drops.
pub fn in_drop_region(position: Vec2) -> bool {
    let max = DROP_REGION_MIN + DROP_REGION_SIZE;
    (DROP_REGION_MIN..max).contains(&position.x) && (DROP_REGION_MIN..max).contains(&position.y)
}

// ── Player ↔ enemies ─────────────────────────────────────────────────────────

/// Every enemy touching a living player costs one hit and dies.  No score.
/// Returns the number of hits taken.
pub fn resolve_player_hits(player: &mut Player, enemies: &mut [Enemy]) -> u32 {
    let mut hits = 0;
    for enemy in enemies.iter_mut() {
        if player.dead {
            break;
        }
        if player.position.distance(enemy.position) < PLAYER_RADIUS + enemy.radius {
            player.take_hit();
            enemy.dead = true;
            hits += 1;
        }
    }
    hits
}

// ── Projectiles ↔ enemies ────────────────────────────────────────────────────

/// Full pairwise scan.  A projectile touching any enemy is spent; an enemy
/// it finds alive dies for `SCORE_ENEMY_KILL` and, inside the drop region
/// while the player is hurt, rolls once for a drop.
pub fn resolve_projectile_hits(
    projectiles: &mut [Projectile],
    enemies: &mut [Enemy],
    player_hit_count: u32,
    drops: &mut Vec<ItemDrop>,
    rng: &mut impl Rng,
) -> ShotOutcome {
    let mut outcome = ShotOutcome::default();

    for projectile in projectiles.iter_mut() {
        for enemy in enemies.iter_mut() {
            if projectile.position.distance(enemy.position) >= projectile.radius + enemy.radius {
                continue;
            }
            projectile.collided = true;
            if enemy.dead {
                continue;
            }
            enemy.dead = true;
            outcome.score += SCORE_ENEMY_KILL;
            outcome.kills += 1;

            if player_hit_count > 0 && in_drop_region(enemy.position) {
                if let Some(kind) = roll_drop(rng.gen::<f64>()) {
                    log::debug!(
                        "{:?} dropped at ({:.0}, {:.0})",
                        kind,
                        enemy.position.x,
                        enemy.position.y
                    );
                    drops.push(ItemDrop::new(kind, enemy.position));
                    outcome.drops_spawned += 1;
                }
            }
        }
    }

    outcome
}

// ── Pickups ──────────────────────────────────────────────────────────────────

/// Expire old drops and collect the ones under the player.  Hearts are
/// handled before nukes.  Drop ages must already be advanced for the frame.
pub fn resolve_pickups(
    player: &mut Player,
    enemies: &mut Vec<Enemy>,
    drops: &mut Vec<ItemDrop>,
) -> PickupOutcome {
    let mut outcome = PickupOutcome::default();
    let at = player.position;

    drops.retain(|drop| {
        if drop.kind != DropKind::Heart {
            return true;
        }
        if drop.should_despawn() {
            outcome.expired += 1;
            return false;
        }
        if drop.pickup_contains(at) {
            player.heal();
            outcome.score += SCORE_PICKUP;
            outcome.hearts += 1;
            return false;
        }
        true
    });

    drops.retain(|drop| {
        if drop.kind != DropKind::Nuke {
            return true;
        }
        if drop.should_despawn() {
            outcome.expired += 1;
            return false;
        }
        if drop.pickup_contains(at) {
            let live = enemies.iter().filter(|e| !e.dead).count() as u32;
            outcome.score += live * SCORE_ENEMY_KILL + SCORE_PICKUP;
            outcome.nukes += 1;
            enemies.clear();
            log::debug!("nuke cleared {} enemies", live);
            return false;
        }
        true
    });

    outcome
}

// ── Pruning ──────────────────────────────────────────────────────────────────

/// Drop dead enemies, spent projectiles and projectiles that left the map.
pub fn prune(enemies: &mut Vec<Enemy>, projectiles: &mut Vec<Projectile>) {
    enemies.retain(|e| !e.dead);
    projectiles.retain(|p| !p.collided && !p.out_of_bounds());
}
