//! Game entity records and their per-frame movement.
//!
//! Entities only move themselves; every interaction between them (hits,
//! pickups, scoring) lives in `compute`.

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::constants::{
    DROP_LIFETIME, DROP_PICKUP_MARGIN, ENEMY_RADIUS, ENEMY_SPEED, HEART_BOX_HEIGHT,
    HEART_BOX_WIDTH, HIT_FLASH_DURATION, MAX_HITS, NUKE_BOX_HEIGHT, NUKE_BOX_WIDTH,
    PLAYER_SPEED, PLAYER_START_X, PLAYER_START_Y, PLAY_MAX_X, PLAY_MAX_Y, PLAY_MIN_X,
    PLAY_MIN_Y, PROJECTILE_MAX_COORD, PROJECTILE_MIN_COORD, PROJECTILE_RADIUS,
    PROJECTILE_SPEED,
};
use crate::input::{Action, InputFrame};
use crate::sprite::{Animation, Sprite, Tint};

// ── Vector ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction; `None` for the zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > f32::EPSILON {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

// ── Direction ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    pub fn index(self) -> usize {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Frame shown while the fire key is held.
const PLAYER_SHOOT_FRAME: usize = 0;
/// Frame shown while standing still.
const PLAYER_IDLE_FRAME: usize = 1;

#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vec2,
    pub facing: Direction,
    pub hit_count: u32,
    pub dead: bool,
    pub moving: bool,
    /// Seconds left of the red flash after a hit.
    pub hit_flash: f32,
    /// One walk cycle per facing, indexed by `Direction::index`.
    pub animations: [Animation; 4],
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            facing: Direction::Down,
            hit_count: 0,
            dead: false,
            moving: false,
            hit_flash: 0.0,
            animations: std::array::from_fn(|_| Animation::new(4, 8)),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Hits the player can still take.
    pub fn hearts_left(&self) -> u32 {
        MAX_HITS - self.hit_count
    }

    /// Apply one frame of input.  Returns the projectile fired this frame,
    /// if any.
    ///
    /// Every held direction moves the player on its own axis, so diagonals
    /// are real movement; only the facing collapses, with right winning
    /// over left and both winning over up/down.  Holding fire plants the
    /// player in place.
    pub fn advance(&mut self, dt: f32, input: &InputFrame) -> Option<Projectile> {
        let firing = input.held(Action::Fire);
        self.moving = false;

        if self.is_alive() && !firing {
            let right = input.held(Action::Right);
            let left = input.held(Action::Left);
            let up = input.held(Action::Up);
            let down = input.held(Action::Down);

            let facing = if right {
                Some(Direction::Right)
            } else if left {
                Some(Direction::Left)
            } else if up {
                Some(Direction::Up)
            } else if down {
                Some(Direction::Down)
            } else {
                None
            };

            if let Some(facing) = facing {
                self.facing = facing;
                self.moving = true;

                let step = PLAYER_SPEED * dt;
                if right && self.position.x < PLAY_MAX_X {
                    self.position.x += step;
                }
                if left && self.position.x > PLAY_MIN_X {
                    self.position.x -= step;
                }
                if up && self.position.y > PLAY_MIN_Y {
                    self.position.y -= step;
                }
                if down && self.position.y < PLAY_MAX_Y {
                    self.position.y += step;
                }
            }
        }

        if self.hit_flash > 0.0 {
            self.hit_flash = (self.hit_flash - dt).max(0.0);
        }

        let moving = self.moving;
        let animation = &mut self.animations[self.facing.index()];
        if firing {
            animation.set_frame(PLAYER_SHOOT_FRAME);
        } else if moving {
            animation.advance(dt);
        } else {
            animation.set_frame(PLAYER_IDLE_FRAME);
        }

        if self.is_alive() && input.just_pressed(Action::Fire) {
            Some(Projectile::new(self.position, self.facing))
        } else {
            None
        }
    }

    /// Count one hit.  Hits past `MAX_HITS` are ignored; reaching it kills
    /// the player.
    pub fn take_hit(&mut self) {
        if self.hit_count < MAX_HITS {
            self.hit_count += 1;
            self.hit_flash = HIT_FLASH_DURATION;
            if self.hit_count >= MAX_HITS {
                self.dead = true;
            }
        }
    }

    /// Undo one hit, never below zero.
    pub fn heal(&mut self) {
        self.hit_count = self.hit_count.saturating_sub(1);
    }
}

impl Sprite for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn glyph(&self, frame: usize) -> &'static str {
        let stride = frame % 2 == 0;
        match (self.facing, stride) {
            (Direction::Down, true) => "▼",
            (Direction::Down, false) => "▽",
            (Direction::Up, true) => "▲",
            (Direction::Up, false) => "△",
            (Direction::Left, true) => "◀",
            (Direction::Left, false) => "◁",
            (Direction::Right, true) => "▶",
            (Direction::Right, false) => "▷",
        }
    }

    fn tint(&self) -> Tint {
        if self.hit_flash > 0.0 {
            Tint::Red
        } else {
            Tint::White
        }
    }

    fn animation(&self) -> Option<&Animation> {
        Some(&self.animations[self.facing.index()])
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub position: Vec2,
    pub radius: f32,
    pub dead: bool,
    pub animation: Animation,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Enemy {
            position,
            radius: ENEMY_RADIUS,
            dead: false,
            animation: Animation::new(10, 6),
        }
    }

    /// Walk straight at `target` unless the player is dead.
    pub fn advance(&mut self, dt: f32, target: Vec2, player_dead: bool) {
        self.animation.advance(dt);
        if player_dead {
            return;
        }
        if let Some(heading) = (target - self.position).normalized() {
            self.position += heading * (ENEMY_SPEED * dt);
        }
    }
}

impl Sprite for Enemy {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn glyph(&self, frame: usize) -> &'static str {
        if frame % 2 == 0 {
            "☠"
        } else {
            "☗"
        }
    }

    fn tint(&self) -> Tint {
        Tint::Green
    }

    fn animation(&self) -> Option<&Animation> {
        Some(&self.animation)
    }
}

// ── Projectile ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Projectile {
    pub position: Vec2,
    pub direction: Direction,
    pub radius: f32,
    pub collided: bool,
}

impl Projectile {
    pub fn new(position: Vec2, direction: Direction) -> Self {
        Projectile {
            position,
            direction,
            radius: PROJECTILE_RADIUS,
            collided: false,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction.unit() * (PROJECTILE_SPEED * dt);
    }

    pub fn out_of_bounds(&self) -> bool {
        let range = PROJECTILE_MIN_COORD..=PROJECTILE_MAX_COORD;
        !range.contains(&self.position.x) || !range.contains(&self.position.y)
    }
}

impl Sprite for Projectile {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn glyph(&self, _frame: usize) -> &'static str {
        "●"
    }

    fn tint(&self) -> Tint {
        Tint::Cyan
    }
}

// ── Item drops ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropKind {
    /// Removes one hit.
    Heart,
    /// Clears every enemy on the map.
    Nuke,
}

#[derive(Clone, Debug)]
pub struct ItemDrop {
    pub kind: DropKind,
    pub position: Vec2,
    /// Seconds since the drop appeared.
    pub age: f32,
}

impl ItemDrop {
    pub fn new(kind: DropKind, position: Vec2) -> Self {
        ItemDrop {
            kind,
            position,
            age: 0.0,
        }
    }

    pub fn heart(position: Vec2) -> Self {
        ItemDrop::new(DropKind::Heart, position)
    }

    pub fn nuke(position: Vec2) -> Self {
        ItemDrop::new(DropKind::Nuke, position)
    }

    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
    }

    pub fn should_despawn(&self) -> bool {
        self.age > DROP_LIFETIME
    }

    /// Pickup test: the sprite box centred on the drop (whole-unit origin),
    /// grown by the pickup margin, half-open on the far edges.
    pub fn pickup_contains(&self, point: Vec2) -> bool {
        let (width, height) = match self.kind {
            DropKind::Heart => (HEART_BOX_WIDTH, HEART_BOX_HEIGHT),
            DropKind::Nuke => (NUKE_BOX_WIDTH, NUKE_BOX_HEIGHT),
        };
        let left = self.position.x.trunc() - (width / 2.0).trunc() - DROP_PICKUP_MARGIN;
        let top = self.position.y.trunc() - (height / 2.0).trunc() - DROP_PICKUP_MARGIN;
        let right = left + width + 2.0 * DROP_PICKUP_MARGIN;
        let bottom = top + height + 2.0 * DROP_PICKUP_MARGIN;
        point.x >= left && point.x < right && point.y >= top && point.y < bottom
    }
}

impl Sprite for ItemDrop {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn glyph(&self, _frame: usize) -> &'static str {
        match self.kind {
            DropKind::Heart => "♥",
            DropKind::Nuke => "☢",
        }
    }

    fn tint(&self) -> Tint {
        match self.kind {
            DropKind::Heart => Tint::Magenta,
            DropKind::Nuke => Tint::Yellow,
        }
    }
}
