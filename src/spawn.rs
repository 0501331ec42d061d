/// Spawning scheduler.  Everything is keyed off the frame counter, so a
/// seeded RNG reproduces a match exactly.

use rand::Rng;

use crate::constants::*;
use crate::entities::{
    BombSize, Boss, Descent, Enemy, GameState, HazardBall, Item, ItemKind, Lifecycle, Projectile,
    ProjectileKind,
};
use crate::geometry::{direction_to, Playfield, Rect, Vec2};

/// Run every spawn rule for frame `state.frame`.
pub fn run(state: &mut GameState, rng: &mut impl Rng) {
    let t = state.frame;
    let field = state.config.playfield;

    if t % HAZARD_SPAWN_EVERY == 0 {
        state.hazards.push(new_hazard(&field, rng));
        tracing::debug!(frame = t, "hazard ball spawned");
    }

    if t < ENEMY_SPAWN_UNTIL && t % ENEMY_SPAWN_EVERY == 0 {
        state.enemies.push(new_enemy(&field, rng));
        tracing::debug!(frame = t, "enemy spawned");
    } else if t == BOSS_SPAWN_AT {
        state.boss = Some(new_boss(&field));
        tracing::debug!(frame = t, "boss spawned");
    }

    fire_projectiles(state, rng);

    if t % ITEM_SPAWN_EVERY == 0 {
        let item = new_item(&field, rng);
        tracing::debug!(frame = t, kind = ?item.kind, "item spawned");
        state.items.push(item);
    }
}

/// Holding enemies and the boss drop ordnance on their own interval, aimed at
/// where the player is right now.
fn fire_projectiles(state: &mut GameState, rng: &mut impl Rng) {
    let t = state.frame;
    let target = state.player.rect;

    let mut fired: Vec<Projectile> = state
        .enemies
        .iter()
        .filter(|e| e.status == Lifecycle::Active && e.descent == Descent::Holding)
        .filter(|e| t % e.bomb_interval == 0)
        .map(|e| {
            let size = match rng.gen_range(0..3) {
                0 => BombSize::Large,
                1 => BombSize::Small,
                _ => BombSize::Medium,
            };
            aimed_projectile(&e.rect, &target, ProjectileKind::Bomb(size))
        })
        .collect();

    if let Some(boss) = &state.boss {
        if boss.status == Lifecycle::Active
            && boss.descent == Descent::Holding
            && t % boss.bomb_interval == 0
        {
            let hue = rng.gen_range(0..BOSS_BOMB_HUES);
            fired.push(aimed_projectile(&boss.rect, &target, ProjectileKind::BossBomb { hue }));
        }
    }

    state.projectiles.extend(fired);
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn projectile_size(kind: ProjectileKind) -> Vec2 {
    match kind {
        ProjectileKind::Bomb(BombSize::Large) => Vec2::new(50.0, 50.0),
        ProjectileKind::Bomb(BombSize::Medium) => Vec2::new(30.0, 30.0),
        ProjectileKind::Bomb(BombSize::Small) => Vec2::new(10.0, 10.0),
        ProjectileKind::BossBomb { .. } => BOSS_BOMB_SIZE,
    }
}

/// Projectile released just below `from`'s center, heading for `target`.
/// If the two centers coincide it falls straight down.
pub fn aimed_projectile(from: &Rect, target: &Rect, kind: ProjectileKind) -> Projectile {
    let dir = direction_to(from, target).unwrap_or(Vec2::new(0.0, 1.0));
    let origin = from.center() + Vec2::new(0.0, from.h / 2.0);
    Projectile {
        rect: Rect::from_center(origin, projectile_size(kind)),
        velocity: dir * PROJECTILE_SPEED,
        kind,
        status: Lifecycle::Active,
    }
}

pub fn new_enemy(field: &Playfield, rng: &mut impl Rng) -> Enemy {
    let x = rng.gen_range(0.0..=field.width);
    Enemy {
        rect: Rect::from_center(Vec2::new(x, 0.0), ENEMY_SIZE),
        vy: ENEMY_DESCENT_SPEED,
        stop_line: rng.gen_range(ENEMY_STOP_MIN..field.height / 2.0),
        descent: Descent::Descending,
        bomb_interval: rng.gen_range(ENEMY_BOMB_INTERVAL_MIN..=ENEMY_BOMB_INTERVAL_MAX),
        variant: rng.gen_range(0..ENEMY_VARIANTS),
        status: Lifecycle::Active,
    }
}

pub fn new_boss(field: &Playfield) -> Boss {
    Boss {
        rect: Rect::from_center(Vec2::new(field.width / 2.0, 0.0), BOSS_SIZE),
        vy: BOSS_DESCENT_SPEED,
        stop_line: BOSS_STOP_LINE,
        descent: Descent::Descending,
        bomb_interval: BOSS_BOMB_INTERVAL,
        status: Lifecycle::Active,
    }
}

pub fn new_hazard(field: &Playfield, rng: &mut impl Rng) -> HazardBall {
    let x = rng.gen_range(0.0..=field.width);
    HazardBall {
        rect: Rect::from_center(Vec2::new(x, 0.0), HAZARD_SIZE),
        vy: HAZARD_DESCENT_SPEED,
        stop_line: rng.gen_range(HAZARD_STOP_MIN..=field.height),
        descent: Descent::Descending,
        ttl: HAZARD_LIFE,
        variant: rng.gen_range(0..HAZARD_VARIANTS),
        status: Lifecycle::Active,
    }
}

pub fn new_item(field: &Playfield, rng: &mut impl Rng) -> Item {
    let center = Vec2::new(rng.gen_range(0.0..=field.width), rng.gen_range(0.0..=field.height));
    let kind = if rng.gen_bool(0.5) {
        ItemKind::Plain
    } else {
        ItemKind::Shield
    };
    Item {
        rect: Rect::from_center(center, ITEM_SIZE),
        kind,
        active: true,
        countdown: ITEM_DURATION,
    }
}
