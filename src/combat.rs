/// Collision & combat resolution.
///
/// Rules run in a fixed order.  Each rule first takes a snapshot of which
/// entities overlap (no mutation), then applies removals, score and spawns
/// from that snapshot.  Removed entities stay in their collections, tagged,
/// until the end-of-tick purge.

use crate::config::BossRule;
use crate::constants::{
    BOSS_SCORE, ENEMY_SCORE, EXPLOSION_LIFE_LARGE, EXPLOSION_LIFE_SMALL, EXPLOSION_SIZE,
    PROJECTILE_SCORE, SHIELD_DURATION,
};
use crate::entities::{
    Explosion, GameEvent, GameState, GameStatus, ItemKind, Lifecycle, LossCause,
};
use crate::geometry::Rect;
use crate::movement::Sprite;
use crate::player::{shield_active, shield_region, slowed_speed};

/// Resolve every collision rule for the current tick.  Stops early once the
/// match is lost or cleared.
pub fn resolve(state: &mut GameState) {
    let rules: [fn(&mut GameState); 9] = [
        boss_vs_beams,
        enemies_vs_beams,
        projectiles_vs_beams,
        player_vs_hazards,
        player_vs_projectiles,
        player_vs_plain_items,
        player_vs_shield_items,
        shield_vs_enemies,
        shield_vs_projectiles,
    ];
    for rule in rules {
        rule(state);
        if state.status != GameStatus::Playing {
            return;
        }
    }
}

// ── Snapshot helpers ─────────────────────────────────────────────────────────

/// Indices of active sprites overlapping `region`.
fn touching<S: Sprite>(region: &Rect, sprites: &[S]) -> Vec<usize> {
    sprites
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active() && s.rect().intersects(region))
        .map(|(i, _)| i)
        .collect()
}

/// For each active target, the overlapping shots it claims.  A shot is
/// claimed by the first target it overlaps and cannot hit another.
fn claim_hits<T: Sprite, S: Sprite>(targets: &[T], shots: &[S]) -> Vec<(usize, Vec<usize>)> {
    let mut claimed = vec![false; shots.len()];
    let mut hits = Vec::new();

    for (ti, target) in targets.iter().enumerate() {
        if !target.is_active() {
            continue;
        }
        let mine: Vec<usize> = touching(target.rect(), shots)
            .into_iter()
            .filter(|&si| !claimed[si])
            .collect();
        if mine.is_empty() {
            continue;
        }
        for &si in &mine {
            claimed[si] = true;
        }
        hits.push((ti, mine));
    }
    hits
}

fn explosion_at(rect: &Rect, ttl: i32) -> Explosion {
    Explosion {
        rect: Rect::from_center(rect.center(), EXPLOSION_SIZE),
        ttl,
        status: Lifecycle::Active,
    }
}

// ── Rules ────────────────────────────────────────────────────────────────────

/// Rule 1.  One hit per tick of contact, however many beams overlap.
fn boss_vs_beams(state: &mut GameState) {
    let boss_rect = match &state.boss {
        Some(boss) if boss.is_active() => boss.rect,
        _ => return,
    };
    let hits = touching(&boss_rect, &state.beams);
    if hits.is_empty() {
        return;
    }

    for i in hits {
        state.beams[i].status = Lifecycle::Removed;
    }
    state.explosions.push(explosion_at(&boss_rect, EXPLOSION_LIFE_LARGE));
    state.boss_hits_left = state.boss_hits_left.saturating_sub(1);

    let defeated = match state.config.boss_rule {
        BossRule::HitPoints => state.boss_hits_left == 0,
        BossRule::Literal => false,
    };
    let leaves_play = defeated || state.config.boss_rule == BossRule::Literal;
    if leaves_play {
        if let Some(boss) = state.boss.as_mut() {
            boss.status = Lifecycle::Removed;
        }
    }

    if defeated {
        state.hud.score_up(BOSS_SCORE);
        state.status = GameStatus::Cleared;
        state.events.push(GameEvent::BossDefeated);
        tracing::info!(frame = state.frame, score = state.hud.score, "boss defeated");
    } else {
        state.events.push(GameEvent::BossHit {
            hits_left: state.boss_hits_left,
        });
        tracing::debug!(frame = state.frame, hits_left = state.boss_hits_left, "boss hit");
    }
}

/// Rule 2.
fn enemies_vs_beams(state: &mut GameState) {
    for (ei, beams) in claim_hits(&state.enemies, &state.beams) {
        for bi in beams {
            state.beams[bi].status = Lifecycle::Removed;
        }
        let enemy = &mut state.enemies[ei];
        enemy.status = Lifecycle::Removed;
        state.explosions.push(explosion_at(&enemy.rect, EXPLOSION_LIFE_LARGE));
        state.hud.score_up(ENEMY_SCORE);
    }
}

/// Rule 3.
fn projectiles_vs_beams(state: &mut GameState) {
    for (pi, beams) in claim_hits(&state.projectiles, &state.beams) {
        for bi in beams {
            state.beams[bi].status = Lifecycle::Removed;
        }
        let projectile = &mut state.projectiles[pi];
        projectile.status = Lifecycle::Removed;
        state.explosions.push(explosion_at(&projectile.rect, EXPLOSION_LIFE_SMALL));
        state.hud.score_up(PROJECTILE_SCORE);
    }
}

/// Rule 4.  Speed drops once per tick of contact.
fn player_vs_hazards(state: &mut GameState) {
    let hits = touching(&state.player.rect, &state.hazards);
    if hits.is_empty() {
        return;
    }
    for i in hits {
        state.hazards[i].status = Lifecycle::Removed;
    }

    let speed = slowed_speed(&state.player);
    state.player.speed = speed;
    state.events.push(GameEvent::SpeedLost { speed });
    tracing::debug!(frame = state.frame, speed, "hazard ball hit");

    if speed == 0 {
        state.status = GameStatus::Lost(LossCause::SpeedDepleted);
        tracing::info!(frame = state.frame, score = state.hud.score, "speed depleted");
    }
}

/// Rule 5.  One life per tick of contact.
fn player_vs_projectiles(state: &mut GameState) {
    let hits = touching(&state.player.rect, &state.projectiles);
    if hits.is_empty() {
        return;
    }
    for i in hits {
        state.projectiles[i].status = Lifecycle::Removed;
    }

    let lives_left = state.player.lives.saturating_sub(1);
    state.player.lives = lives_left;
    state.events.push(GameEvent::PlayerHit { lives_left });
    tracing::info!(frame = state.frame, lives_left, "player hit");

    if lives_left == 0 {
        state.status = GameStatus::Lost(LossCause::OutOfLives);
        tracing::info!(frame = state.frame, score = state.hud.score, "out of lives");
    }
}

/// Rule 6.  Touching any plain item clears every plain item on the field.
fn player_vs_plain_items(state: &mut GameState) {
    let touched = touching(&state.player.rect, &state.items)
        .into_iter()
        .any(|i| state.items[i].kind == ItemKind::Plain);
    if !touched {
        return;
    }
    for item in state.items.iter_mut().filter(|i| i.kind == ItemKind::Plain) {
        item.active = false;
    }
}

/// Rule 7.
fn player_vs_shield_items(state: &mut GameState) {
    let hits: Vec<usize> = touching(&state.player.rect, &state.items)
        .into_iter()
        .filter(|&i| state.items[i].kind == ItemKind::Shield)
        .collect();
    if hits.is_empty() {
        return;
    }
    for i in hits {
        state.items[i].active = false;
    }
    state.player.shield_timer = SHIELD_DURATION;
    state.events.push(GameEvent::ShieldRaised);
    tracing::info!(frame = state.frame, "shield raised");
}

/// Rule 8.  No score for shield kills.
fn shield_vs_enemies(state: &mut GameState) {
    if !shield_active(&state.player) {
        return;
    }
    let region = shield_region(&state.player);
    for i in touching(&region, &state.enemies) {
        let enemy = &mut state.enemies[i];
        enemy.status = Lifecycle::Removed;
        state.explosions.push(explosion_at(&enemy.rect, EXPLOSION_LIFE_LARGE));
    }
}

/// Rule 9.
fn shield_vs_projectiles(state: &mut GameState) {
    if !shield_active(&state.player) {
        return;
    }
    let region = shield_region(&state.player);
    for i in touching(&region, &state.projectiles) {
        let projectile = &mut state.projectiles[i];
        projectile.status = Lifecycle::Removed;
        state.explosions.push(explosion_at(&projectile.rect, EXPLOSION_LIFE_SMALL));
    }
}
