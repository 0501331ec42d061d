//! Tuning numbers.  All durations are in ticks at the 50 Hz reference rate.

use crate::geometry::Vec2;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_START: Vec2 = Vec2::new(900.0, 400.0);
pub const PLAYER_SIZE: Vec2 = Vec2::new(88.0, 76.0);
pub const PLAYER_START_SPEED: u32 = 10;
pub const PLAYER_MAX_SPEED: u32 = 10;
pub const PLAYER_START_LIVES: u32 = 3;
/// Speed lost per tick of contact with hazard balls.
pub const HAZARD_SPEED_PENALTY: u32 = 2;

pub const CURE_COST: u32 = 50;
pub const CURE_SPEED_GAIN: u32 = 2;
pub const CURE_FLASH_LIFE: i32 = 20;
pub const CURE_FLASH_SIZE: Vec2 = Vec2::new(60.0, 60.0);

pub const SHIELD_DURATION: u32 = 2500;
/// Shield hit region grows the player box by this much on each axis...
pub const SHIELD_INFLATE: f32 = 120.0;
/// ...and is then shifted by this offset.
pub const SHIELD_OFFSET: Vec2 = Vec2::new(-25.0, -25.0);
/// Where the shield imagery sits relative to the player center.
pub const SHIELD_DRAW_OFFSET: Vec2 = Vec2::new(5.0, -10.0);
pub const SHIELD_SIZE: Vec2 = Vec2::new(200.0, 200.0);

// ── Beams ────────────────────────────────────────────────────────────────────

pub const BEAM_SPEED: f32 = 10.0;
pub const BEAM_LENGTH: f32 = 80.0;
pub const BEAM_THICKNESS: f32 = 24.0;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: Vec2 = Vec2::new(70.0, 60.0);
pub const ENEMY_DESCENT_SPEED: f32 = 6.0;
pub const ENEMY_STOP_MIN: f32 = 50.0;
pub const ENEMY_BOMB_INTERVAL_MIN: u64 = 50;
pub const ENEMY_BOMB_INTERVAL_MAX: u64 = 300;
pub const ENEMY_VARIANTS: u8 = 3;
pub const ENEMY_SPAWN_EVERY: u64 = 200;
/// Basic enemies only appear before this tick.
pub const ENEMY_SPAWN_UNTIL: u64 = 500;
pub const ENEMY_SCORE: u32 = 10;

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_SIZE: Vec2 = Vec2::new(400.0, 225.0);
pub const BOSS_DESCENT_SPEED: f32 = 5.0;
pub const BOSS_STOP_LINE: f32 = 70.0;
pub const BOSS_BOMB_INTERVAL: u64 = 30;
pub const BOSS_SPAWN_AT: u64 = 500;
pub const BOSS_HIT_POINTS: u32 = 3;
pub const BOSS_SCORE: u32 = 100;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const PROJECTILE_SPEED: f32 = 6.0;
pub const PROJECTILE_SCORE: u32 = 1;
pub const BOSS_BOMB_SIZE: Vec2 = Vec2::new(120.0, 120.0);
pub const BOSS_BOMB_HUES: u8 = 6;

// ── Hazard balls ─────────────────────────────────────────────────────────────

pub const HAZARD_SIZE: Vec2 = Vec2::new(60.0, 60.0);
pub const HAZARD_DESCENT_SPEED: f32 = 1.0;
pub const HAZARD_STOP_MIN: f32 = 50.0;
pub const HAZARD_LIFE: i32 = 750;
pub const HAZARD_SPAWN_EVERY: u64 = 250;
pub const HAZARD_VARIANTS: u8 = 3;

// ── Items ────────────────────────────────────────────────────────────────────

pub const ITEM_SIZE: Vec2 = Vec2::new(50.0, 50.0);
pub const ITEM_DURATION: i32 = 150;
pub const ITEM_SPAWN_EVERY: u64 = 500;

// ── Explosions ───────────────────────────────────────────────────────────────

pub const EXPLOSION_SIZE: Vec2 = Vec2::new(100.0, 100.0);
pub const EXPLOSION_LIFE_LARGE: i32 = 100;
pub const EXPLOSION_LIFE_SMALL: i32 = 50;
/// Two-frame animations flip every this many ticks.
pub const ANIMATION_PERIOD: i32 = 10;
