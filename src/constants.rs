//! Fixed world numbers shared by the entities, the spawner and the
//! collision pass.  World units are the 2496×2496 island map
//! offset by (-500, -500).

// ── Viewport ─────────────────────────────────────────────────────────────────

pub const VIEW_WIDTH: f32 = 1280.0;
pub const VIEW_HEIGHT: f32 = 720.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = 500.0;
pub const PLAYER_START_Y: f32 = 300.0;
pub const PLAYER_SPEED: f32 = 400.0;
/// Collision radius used against enemies.
pub const PLAYER_RADIUS: f32 = 32.0;
pub const MAX_HITS: u32 = 10;
pub const HIT_FLASH_DURATION: f32 = 0.2;

// Movement is allowed only while the player is inside these limits, so the
// player can overshoot each limit by at most one step.
pub const PLAY_MIN_X: f32 = 225.0;
pub const PLAY_MAX_X: f32 = 1275.0;
pub const PLAY_MIN_Y: f32 = 200.0;
pub const PLAY_MAX_Y: f32 = 1250.0;

// ── Enemy ────────────────────────────────────────────────────────────────────

pub const ENEMY_SPEED: f32 = 150.0;
pub const ENEMY_RADIUS: f32 = 30.0;

// ── Projectile ───────────────────────────────────────────────────────────────

pub const PROJECTILE_SPEED: f32 = 1000.0;
pub const PROJECTILE_RADIUS: f32 = 18.0;
/// Projectiles outside [MIN, MAX] on either axis are pruned.
pub const PROJECTILE_MIN_COORD: f32 = -600.0;
pub const PROJECTILE_MAX_COORD: f32 = 2100.0;

// ── Spawning ─────────────────────────────────────────────────────────────────

pub const SPAWN_INITIAL_INTERVAL: f64 = 3.0;
pub const SPAWN_INTERVAL_STEP: f64 = 0.02;
pub const SPAWN_MIN_INTERVAL: f64 = 0.5;
/// Enemies appear on the lines x or y = -500 / 2000, anywhere in [-500, 2000).
pub const SPAWN_NEAR_EDGE: i32 = -500;
pub const SPAWN_FAR_EDGE: i32 = 2000;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const SCORE_ENEMY_KILL: u32 = 100;
pub const SCORE_PICKUP: u32 = 25;
/// Largest step the HUD score counter takes toward the real score per frame.
pub const DISPLAY_SCORE_STEP: u32 = 25;

// ── Drops ────────────────────────────────────────────────────────────────────

pub const DROP_REGION_MIN: f32 = 208.0;
pub const DROP_REGION_SIZE: f32 = 1080.0;
pub const NUKE_CHANCE: f64 = 0.10;
/// Cumulative: heart wins for rolls in [NUKE_CHANCE, HEART_CHANCE).
pub const HEART_CHANCE: f64 = 0.35;
pub const DROP_LIFETIME: f32 = 10.0;
pub const DROP_PICKUP_MARGIN: f32 = 10.0;
pub const HEART_BOX_WIDTH: f32 = 60.0;
pub const HEART_BOX_HEIGHT: f32 = 48.0;
pub const NUKE_BOX_WIDTH: f32 = 64.0;
pub const NUKE_BOX_HEIGHT: f32 = 64.0;
