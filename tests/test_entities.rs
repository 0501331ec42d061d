mod common;

use beam_fighter::entities::*;
use beam_fighter::geometry::{Playfield, Vec2};
use beam_fighter::hud::*;

use common::{holding_enemy, make_state};

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(
        GameStatus::Lost(LossCause::OutOfLives),
        GameStatus::Lost(LossCause::SpeedDepleted)
    );
    assert_ne!(ItemKind::Plain, ItemKind::Shield);
    assert_ne!(
        ProjectileKind::BossBomb { hue: 0 },
        ProjectileKind::BossBomb { hue: 1 }
    );

    let kind = ProjectileKind::Bomb(BombSize::Small);
    assert_eq!(kind.clone(), ProjectileKind::Bomb(BombSize::Small));
}

#[test]
fn game_state_clone_is_independent() {
    let original = make_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.translate(Vec2::new(99.0, 0.0));
    cloned.hud.score = 999;
    cloned.enemies.push(holding_enemy(5.0, 5.0));

    assert_eq!(original.player.rect.center(), Vec2::new(900.0, 400.0));
    assert_eq!(original.hud.score, 0);
    assert!(original.enemies.is_empty());
}

// ── HUD ───────────────────────────────────────────────────────────────────────

#[test]
fn hud_lines_sit_along_the_bottom() {
    let s = make_state();
    let field = Playfield::new(1200.0, 600.0);
    let [score, lives, speed] = s.hud.lines(&s.player, &field);

    assert_eq!(score.text, "Score: 0");
    assert_eq!(score.anchor, Vec2::new(100.0, 550.0));
    assert_eq!(lives.text, "Lives: 3");
    assert_eq!(lives.anchor, Vec2::new(300.0, 550.0));
    assert_eq!(speed.text, "Speed: 10");
    assert_eq!(speed.tone, Tone::Meter);
}

#[test]
fn spend_refuses_to_go_negative() {
    let mut hud = Hud { score: 60 };
    assert!(hud.spend(50));
    assert_eq!(hud.score, 10);
    assert!(!hud.spend(50));
    assert_eq!(hud.score, 10);
}

#[test]
fn score_saturates() {
    let mut hud = Hud { score: u32::MAX - 1 };
    hud.score_up(10);
    assert_eq!(hud.score, u32::MAX);
}

#[test]
fn banner_is_centered() {
    let line = banner(BANNER_CLEAR, Tone::Triumph, &Playfield::new(1200.0, 600.0));
    assert_eq!(line.text, "GAME CLEAR!");
    assert_eq!(line.anchor, Vec2::new(600.0, 300.0));
}
