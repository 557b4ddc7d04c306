use approx::assert_relative_eq;

use skull_island::constants::MAX_HITS;
use skull_island::entities::*;
use skull_island::input::{Action, InputFrame, InputSnapshot};
use skull_island::sprite::{Animation, Sprite, Tint};

fn held(actions: &[Action]) -> InputFrame {
    let snap = InputSnapshot::with(actions);
    InputFrame::new(snap, snap)
}

fn pressed(actions: &[Action]) -> InputFrame {
    InputFrame::new(InputSnapshot::default(), InputSnapshot::with(actions))
}

// ── Player movement ───────────────────────────────────────────────────────────

#[test]
fn player_starts_unhurt_facing_down() {
    let p = Player::new();
    assert_eq!(p.position, Vec2::new(500.0, 300.0));
    assert_eq!(p.facing, Direction::Down);
    assert_eq!(p.hit_count, 0);
    assert!(p.is_alive());
    assert_eq!(p.hearts_left(), MAX_HITS);
}

#[test]
fn move_right() {
    let mut p = Player::new();
    let shot = p.advance(0.1, &held(&[Action::Right]));
    assert!(shot.is_none());
    assert_relative_eq!(p.position.x, 540.0);
    assert_relative_eq!(p.position.y, 300.0);
    assert_eq!(p.facing, Direction::Right);
    assert!(p.moving);
}

#[test]
fn diagonal_moves_both_axes_but_faces_horizontal() {
    let mut p = Player::new();
    p.advance(0.1, &held(&[Action::Right, Action::Up]));
    assert_relative_eq!(p.position.x, 540.0);
    assert_relative_eq!(p.position.y, 260.0);
    assert_eq!(p.facing, Direction::Right);

    let mut p = Player::new();
    p.advance(0.1, &held(&[Action::Left, Action::Down]));
    assert_relative_eq!(p.position.x, 460.0);
    assert_relative_eq!(p.position.y, 340.0);
    assert_eq!(p.facing, Direction::Left);
}

#[test]
fn right_beats_left_for_facing() {
    let mut p = Player::new();
    p.advance(0.1, &held(&[Action::Left, Action::Right]));
    assert_eq!(p.facing, Direction::Right);
    // Both axes apply, so they cancel out
    assert_relative_eq!(p.position.x, 500.0);
}

#[test]
fn vertical_only_faces_vertical() {
    let mut p = Player::new();
    p.advance(0.1, &held(&[Action::Up]));
    assert_eq!(p.facing, Direction::Up);
    p.advance(0.1, &held(&[Action::Down]));
    assert_eq!(p.facing, Direction::Down);
}

#[test]
fn movement_stops_at_play_area_limits() {
    let mut p = Player::new();
    p.position = Vec2::new(1280.0, 1260.0);
    p.advance(0.1, &held(&[Action::Right, Action::Down]));
    assert_eq!(p.position, Vec2::new(1280.0, 1260.0));

    p.position = Vec2::new(220.0, 190.0);
    p.advance(0.1, &held(&[Action::Left, Action::Up]));
    assert_eq!(p.position, Vec2::new(220.0, 190.0));
}

#[test]
fn holding_fire_plants_the_player() {
    let mut p = Player::new();
    p.advance(0.1, &held(&[Action::Fire, Action::Right]));
    assert_eq!(p.position, Vec2::new(500.0, 300.0));
    assert!(!p.moving);
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn fire_press_emits_projectile_in_facing_direction() {
    let mut p = Player::new();
    p.facing = Direction::Left;
    let shot = p.advance(0.016, &pressed(&[Action::Fire])).expect("shot on press");
    assert_eq!(shot.direction, Direction::Left);
    assert_eq!(shot.position, p.position);
    assert!(!shot.collided);
}

#[test]
fn holding_fire_does_not_repeat() {
    let mut p = Player::new();
    assert!(p.advance(0.016, &pressed(&[Action::Fire])).is_some());
    for _ in 0..30 {
        assert!(p.advance(0.016, &held(&[Action::Fire])).is_none());
    }
}

#[test]
fn dead_player_neither_moves_nor_shoots() {
    let mut p = Player::new();
    p.dead = true;
    assert!(p.advance(0.1, &pressed(&[Action::Fire])).is_none());
    p.advance(0.1, &held(&[Action::Right]));
    assert_eq!(p.position, Vec2::new(500.0, 300.0));
}

// ── Hits and healing ──────────────────────────────────────────────────────────

#[test]
fn hits_cap_at_max_and_kill() {
    let mut p = Player::new();
    for i in 1..MAX_HITS {
        p.take_hit();
        assert_eq!(p.hit_count, i);
        assert!(p.is_alive());
    }
    p.take_hit();
    assert_eq!(p.hit_count, MAX_HITS);
    assert!(p.dead);

    p.take_hit();
    p.take_hit();
    assert_eq!(p.hit_count, MAX_HITS);
    assert!(p.dead);
}

#[test]
fn heal_floors_at_zero() {
    let mut p = Player::new();
    p.take_hit();
    p.heal();
    assert_eq!(p.hit_count, 0);
    p.heal();
    assert_eq!(p.hit_count, 0);
}

#[test]
fn hit_flash_tints_then_clears() {
    let mut p = Player::new();
    assert_eq!(p.tint(), Tint::White);
    p.take_hit();
    assert_eq!(p.tint(), Tint::Red);
    p.advance(0.1, &held(&[]));
    assert_eq!(p.tint(), Tint::Red);
    p.advance(0.15, &held(&[]));
    assert_eq!(p.tint(), Tint::White);
}

#[test]
fn idle_and_shooting_frames() {
    let mut p = Player::new();
    p.advance(0.016, &held(&[]));
    assert_eq!(p.current_frame(), 1);
    p.advance(0.016, &held(&[Action::Fire]));
    assert_eq!(p.current_frame(), 0);
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_walks_toward_target() {
    let mut e = Enemy::new(Vec2::ZERO);
    e.advance(1.0, Vec2::new(300.0, 400.0), false);
    assert_relative_eq!(e.position.x, 90.0, epsilon = 1e-3);
    assert_relative_eq!(e.position.y, 120.0, epsilon = 1e-3);
    assert_relative_eq!(e.radius, 30.0);
}

#[test]
fn enemy_holds_still_when_player_dead() {
    let mut e = Enemy::new(Vec2::new(10.0, 10.0));
    e.advance(1.0, Vec2::new(300.0, 400.0), true);
    assert_eq!(e.position, Vec2::new(10.0, 10.0));
}

#[test]
fn enemy_on_top_of_target_stays_finite() {
    let mut e = Enemy::new(Vec2::new(500.0, 300.0));
    e.advance(1.0, Vec2::new(500.0, 300.0), false);
    assert_eq!(e.position, Vec2::new(500.0, 300.0));
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_flies_straight() {
    let mut shot = Projectile::new(Vec2::new(500.0, 300.0), Direction::Up);
    shot.advance(0.1);
    assert_relative_eq!(shot.position.x, 500.0);
    assert_relative_eq!(shot.position.y, 200.0);

    let mut shot = Projectile::new(Vec2::new(500.0, 300.0), Direction::Right);
    shot.advance(0.25);
    assert_relative_eq!(shot.position.x, 750.0);
    assert_relative_eq!(shot.radius, 18.0);
}

#[test]
fn projectile_bounds() {
    let inside = Projectile::new(Vec2::new(2000.0, -500.0), Direction::Up);
    assert!(!inside.out_of_bounds());
    let outside = Projectile::new(Vec2::new(2200.0, 300.0), Direction::Right);
    assert!(outside.out_of_bounds());
    let above = Projectile::new(Vec2::new(300.0, -700.0), Direction::Up);
    assert!(above.out_of_bounds());
}

// ── Drops ─────────────────────────────────────────────────────────────────────

#[test]
fn drops_despawn_after_ten_seconds() {
    let mut d = ItemDrop::heart(Vec2::new(500.0, 500.0));
    d.advance(10.0);
    assert!(!d.should_despawn());
    d.advance(0.01);
    assert!(d.should_despawn());
}

#[test]
fn heart_pickup_box() {
    let d = ItemDrop::heart(Vec2::new(500.0, 300.0));
    // x in [460, 540), y in [266, 334)
    assert!(d.pickup_contains(Vec2::new(500.0, 300.0)));
    assert!(d.pickup_contains(Vec2::new(460.0, 266.0)));
    assert!(d.pickup_contains(Vec2::new(539.9, 333.9)));
    assert!(!d.pickup_contains(Vec2::new(540.0, 300.0)));
    assert!(!d.pickup_contains(Vec2::new(500.0, 334.0)));
    assert!(!d.pickup_contains(Vec2::new(459.9, 300.0)));
}

#[test]
fn nuke_pickup_box_is_wider() {
    let d = ItemDrop::nuke(Vec2::new(500.0, 300.0));
    // x in [458, 542), y in [258, 342)
    assert!(d.pickup_contains(Vec2::new(541.0, 341.0)));
    assert!(d.pickup_contains(Vec2::new(458.0, 258.0)));
    assert!(!d.pickup_contains(Vec2::new(542.0, 300.0)));
    assert!(!d.pickup_contains(Vec2::new(500.0, 257.0)));
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[test]
fn animation_loops_one_frame_per_step() {
    let mut a = Animation::new(3, 10);
    a.advance(0.11);
    assert_eq!(a.frame(), 1);
    a.advance(0.11);
    assert_eq!(a.frame(), 2);
    a.advance(0.11);
    assert_eq!(a.frame(), 0);

    a.looping = false;
    a.set_frame(2);
    a.advance(0.11);
    assert_eq!(a.frame(), 2);

    a.set_frame(99);
    assert_eq!(a.frame(), a.frames() - 1);
}

#[test]
fn static_sprites_have_no_animation() {
    let shot = Projectile::new(Vec2::ZERO, Direction::Down);
    assert!(shot.animation().is_none());
    assert_eq!(shot.current_frame(), 0);

    let d = ItemDrop::nuke(Vec2::ZERO);
    assert!(d.animation().is_none());
    assert_eq!(d.glyph(0), "☢");

    let e = Enemy::new(Vec2::ZERO);
    assert!(e.animation().is_some());
}
