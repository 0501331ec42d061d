#![allow(dead_code)]

use beam_fighter::compute::init_state;
use beam_fighter::config::GameConfig;
use beam_fighter::entities::*;
use beam_fighter::geometry::{Rect, Vec2};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Player sits centered on (900, 400) with an 88×76 box.
pub fn make_state() -> GameState {
    let mut s = init_state(GameConfig::default()).unwrap();
    s.frame = 1; // no spawn rule fires on frame 1
    s
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// An enemy that has finished descending and will not fire during a test.
pub fn holding_enemy(x: f32, y: f32) -> Enemy {
    Enemy {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::new(70.0, 60.0)),
        vy: 0.0,
        stop_line: 0.0,
        descent: Descent::Holding,
        bomb_interval: 1_000_000,
        variant: 0,
        status: Lifecycle::Active,
    }
}

pub fn holding_boss(x: f32, y: f32) -> Boss {
    Boss {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::new(400.0, 225.0)),
        vy: 0.0,
        stop_line: 0.0,
        descent: Descent::Holding,
        bomb_interval: 1_000_000,
        status: Lifecycle::Active,
    }
}

/// A resting bomb; zero velocity keeps it where it is placed.
pub fn bomb_at(x: f32, y: f32) -> Projectile {
    Projectile {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::new(50.0, 50.0)),
        velocity: Vec2::ZERO,
        kind: ProjectileKind::Bomb(BombSize::Large),
        status: Lifecycle::Active,
    }
}

/// Eastbound beam that lands centered on (x, y) after one tick.
pub fn beam_reaching(x: f32, y: f32) -> Beam {
    Beam {
        rect: Rect::from_center(Vec2::new(x - 10.0, y), Vec2::new(80.0, 24.0)),
        velocity: Vec2::new(10.0, 0.0),
        facing: Facing::East,
        status: Lifecycle::Active,
    }
}

pub fn resting_hazard(x: f32, y: f32) -> HazardBall {
    HazardBall {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::new(60.0, 60.0)),
        vy: 0.0,
        stop_line: 0.0,
        descent: Descent::Holding,
        ttl: 750,
        variant: 0,
        status: Lifecycle::Active,
    }
}

pub fn item_at(x: f32, y: f32, kind: ItemKind) -> Item {
    Item {
        rect: Rect::from_center(Vec2::new(x, y), Vec2::new(50.0, 50.0)),
        kind,
        active: true,
        countdown: 150,
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
