mod common;

use beam_fighter::combat::resolve;
use beam_fighter::compute::tick;
use beam_fighter::config::BossRule;
use beam_fighter::entities::*;
use beam_fighter::geometry::Vec2;
use beam_fighter::input::FrameInput;

use common::{
    beam_reaching, bomb_at, holding_boss, holding_enemy, item_at, make_state, resting_hazard,
    seeded_rng,
};

fn idle(s: &GameState) -> GameState {
    tick(s, &FrameInput::default(), &mut seeded_rng()).unwrap()
}

// ── Beams ─────────────────────────────────────────────────────────────────────

#[test]
fn beam_destroys_enemy_for_ten_points() {
    let mut s = make_state();
    s.enemies.push(holding_enemy(300.0, 200.0));
    s.beams.push(beam_reaching(300.0, 200.0));

    let s2 = idle(&s);
    assert!(s2.enemies.is_empty());
    assert!(s2.beams.is_empty());
    assert_eq!(s2.hud.score, 10);
    assert_eq!(s2.explosions.len(), 1);
    assert_eq!(s2.explosions[0].ttl, 100);
    assert_eq!(s2.explosions[0].rect.center(), Vec2::new(300.0, 200.0));
}

#[test]
fn beam_destroys_projectile_for_one_point() {
    let mut s = make_state();
    s.projectiles.push(bomb_at(300.0, 200.0));
    s.beams.push(beam_reaching(300.0, 200.0));

    let s2 = idle(&s);
    assert!(s2.projectiles.is_empty());
    assert!(s2.beams.is_empty());
    assert_eq!(s2.hud.score, 1);
    assert_eq!(s2.explosions.len(), 1);
    assert_eq!(s2.explosions[0].ttl, 50);
}

#[test]
fn one_beam_scores_at_most_once() {
    let mut s = make_state();
    s.enemies.push(holding_enemy(300.0, 200.0));
    s.enemies.push(holding_enemy(310.0, 200.0));
    s.beams.push(beam_reaching(305.0, 200.0));

    let s2 = idle(&s);
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.hud.score, 10);
    assert_eq!(s2.explosions.len(), 1);
}

#[test]
fn beam_leaving_the_playfield_is_gone_within_the_tick() {
    let mut s = make_state();
    s.beams.push(beam_reaching(1175.0, 200.0));
    let s2 = idle(&s);
    assert!(s2.beams.is_empty());
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[test]
fn boss_takes_three_hits_to_clear() {
    let mut s = make_state();
    s.boss = Some(holding_boss(600.0, 150.0));

    for hits_left in [2, 1] {
        s.beams.push(beam_reaching(600.0, 150.0));
        s = idle(&s);
        assert_eq!(s.boss_hits_left, hits_left);
        assert!(s.boss.is_some());
        assert!(s.beams.is_empty());
        assert_eq!(s.status, GameStatus::Playing);
        assert!(s.events.contains(&GameEvent::BossHit { hits_left }));
    }

    s.beams.push(beam_reaching(600.0, 150.0));
    s = idle(&s);
    assert_eq!(s.status, GameStatus::Cleared);
    assert_eq!(s.hud.score, 100);
    assert!(s.boss.is_none());
    assert!(s.events.contains(&GameEvent::BossDefeated));
    assert_eq!(s.explosions.len(), 3);
}

#[test]
fn boss_takes_one_hit_per_tick_however_many_beams() {
    let mut s = make_state();
    s.boss = Some(holding_boss(600.0, 150.0));
    s.beams.push(beam_reaching(600.0, 120.0));
    s.beams.push(beam_reaching(600.0, 180.0));

    let s2 = idle(&s);
    assert_eq!(s2.boss_hits_left, 2);
    assert!(s2.beams.is_empty());
    assert_eq!(s2.explosions.len(), 1);
}

#[test]
fn literal_rule_removes_boss_on_first_hit_without_clearing() {
    let mut s = make_state();
    s.config.boss_rule = BossRule::Literal;
    s.boss = Some(holding_boss(600.0, 150.0));
    s.beams.push(beam_reaching(600.0, 150.0));

    let s2 = idle(&s);
    assert!(s2.boss.is_none());
    assert_eq!(s2.boss_hits_left, 2);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.hud.score, 0);
    assert!(s2.events.contains(&GameEvent::BossHit { hits_left: 2 }));
}

// ── Player contact ────────────────────────────────────────────────────────────

#[test]
fn hazard_balls_drain_speed_until_the_match_is_lost() {
    let mut s = make_state();
    for expected in [8, 6, 4, 2] {
        s.hazards.push(resting_hazard(900.0, 400.0));
        s = idle(&s);
        assert_eq!(s.player.speed, expected);
        assert!(s.hazards.is_empty());
        assert_eq!(s.status, GameStatus::Playing);
        assert!(s.events.contains(&GameEvent::SpeedLost { speed: expected }));
    }
    s.hazards.push(resting_hazard(900.0, 400.0));
    s = idle(&s);
    assert_eq!(s.player.speed, 0);
    assert_eq!(s.status, GameStatus::Lost(LossCause::SpeedDepleted));
}

#[test]
fn two_hazards_in_one_tick_cost_speed_once() {
    let mut s = make_state();
    s.hazards.push(resting_hazard(890.0, 400.0));
    s.hazards.push(resting_hazard(910.0, 400.0));
    let s2 = idle(&s);
    assert_eq!(s2.player.speed, 8);
    assert!(s2.hazards.is_empty());
}

#[test]
fn projectile_costs_a_life() {
    let mut s = make_state();
    s.projectiles.push(bomb_at(900.0, 400.0));
    s.projectiles.push(bomb_at(910.0, 410.0));

    let s2 = idle(&s);
    assert_eq!(s2.player.lives, 2);
    assert!(s2.projectiles.is_empty());
    assert_eq!(s2.status, GameStatus::Playing);
    assert!(s2.events.contains(&GameEvent::PlayerHit { lives_left: 2 }));
}

#[test]
fn last_life_lost_ends_the_match() {
    let mut s = make_state();
    s.player.lives = 1;
    s.projectiles.push(bomb_at(900.0, 400.0));

    let s2 = idle(&s);
    assert_eq!(s2.player.lives, 0);
    assert_eq!(s2.status, GameStatus::Lost(LossCause::OutOfLives));
}

#[test]
fn loss_stops_later_rules_in_the_same_tick() {
    let mut s = make_state();
    s.player.speed = 2;
    s.hazards.push(resting_hazard(900.0, 400.0));
    s.projectiles.push(bomb_at(900.0, 400.0));

    let s2 = idle(&s);
    assert_eq!(s2.status, GameStatus::Lost(LossCause::SpeedDepleted));
    assert_eq!(s2.player.lives, 3);
}

// ── Items ─────────────────────────────────────────────────────────────────────

#[test]
fn shield_item_raises_shield_for_2500_ticks() {
    let mut s = make_state();
    s.items.push(item_at(900.0, 400.0, ItemKind::Shield));

    let s2 = idle(&s);
    assert_eq!(s2.player.shield_timer, 2500);
    assert!(s2.items.is_empty());
    assert!(s2.events.contains(&GameEvent::ShieldRaised));
}

#[test]
fn inactive_shield_item_does_nothing() {
    let mut s = make_state();
    let mut item = item_at(900.0, 400.0, ItemKind::Shield);
    item.active = false;
    s.items.push(item);

    resolve(&mut s);
    assert_eq!(s.player.shield_timer, 0);
    assert!(s.events.is_empty());
}

#[test]
fn touching_a_plain_item_clears_every_plain_item() {
    let mut s = make_state();
    s.items.push(item_at(900.0, 400.0, ItemKind::Plain));
    s.items.push(item_at(100.0, 100.0, ItemKind::Plain));
    s.items.push(item_at(200.0, 100.0, ItemKind::Shield));

    let s2 = idle(&s);
    assert_eq!(s2.items.len(), 1);
    assert_eq!(s2.items[0].kind, ItemKind::Shield);
    assert_eq!(s2.items[0].countdown, 149);
    assert_eq!(s2.player.shield_timer, 0);
}

// ── Shield ────────────────────────────────────────────────────────────────────

#[test]
fn shield_destroys_enemies_and_projectiles_without_score() {
    let mut s = make_state();
    s.player.shield_timer = 100;
    // Inside the shield region but clear of the fighter's own box.
    s.enemies.push(holding_enemy(990.0, 300.0));
    s.projectiles.push(bomb_at(990.0, 300.0));

    let s2 = idle(&s);
    assert!(s2.enemies.is_empty());
    assert!(s2.projectiles.is_empty());
    assert_eq!(s2.hud.score, 0);
    assert_eq!(s2.player.lives, 3);
    assert_eq!(s2.explosions.len(), 2);
    assert_eq!(s2.player.shield_timer, 99);
}

#[test]
fn no_shield_no_protection() {
    let mut s = make_state();
    s.enemies.push(holding_enemy(990.0, 300.0));
    s.projectiles.push(bomb_at(990.0, 300.0));

    let s2 = idle(&s);
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.projectiles.len(), 1);
    assert!(s2.explosions.is_empty());
}
