/// Per-tick state transition.
///
/// The input transitions and `tick` take an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and return a new one.
/// `init_state` builds the first state from a validated config, and
/// `purge_removed` sweeps a state in place at the end of a tick.

use rand::Rng;

use crate::config::GameConfig;
use crate::constants::{BOSS_HIT_POINTS, CURE_COST, CURE_FLASH_LIFE, CURE_FLASH_SIZE};
use crate::entities::{CureFlash, GameEvent, GameState, GameStatus, Lifecycle};
use crate::error::GameError;
use crate::geometry::{Rect, Vec2};
use crate::hud::Hud;
use crate::input::FrameInput;
use crate::movement::{purge, step, step_all};
use crate::player::{can_cure, cured_speed, fire_beam, move_player, new_player, tick_shield};
use crate::{combat, spawn};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a validated configuration.
pub fn init_state(config: GameConfig) -> Result<GameState, GameError> {
    config.validate()?;
    Ok(GameState {
        config,
        player: new_player(),
        enemies: Vec::new(),
        boss: None,
        boss_hits_left: BOSS_HIT_POINTS,
        projectiles: Vec::new(),
        beams: Vec::new(),
        explosions: Vec::new(),
        hazards: Vec::new(),
        items: Vec::new(),
        cure_flashes: Vec::new(),
        hud: Hud::default(),
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
    })
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire a beam in the fighter's current facing.
pub fn player_fire(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.beams.push(fire_beam(&state.player));
    next.events.push(GameEvent::BeamFired);
    next
}

/// Trade 50 points for 2 speed.  No-op below 50 points or at full speed.
pub fn player_cure(state: &GameState) -> GameState {
    if !can_cure(&state.player, state.hud.score) {
        return state.clone();
    }
    let mut next = state.clone();
    if !next.hud.spend(CURE_COST) {
        return state.clone();
    }
    let speed = cured_speed(&state.player);
    next.player.speed = speed;

    let field = state.config.playfield;
    let anchor = Vec2::new(field.width - 120.0, field.height - 100.0);
    next.cure_flashes.push(CureFlash {
        rect: Rect::from_center(anchor, CURE_FLASH_SIZE),
        ttl: CURE_FLASH_LIFE,
        status: Lifecycle::Active,
    });
    next.events.push(GameEvent::Cured { speed });
    tracing::debug!(frame = state.frame, speed, "cured");
    next
}

pub fn player_move(state: &GameState, input: &FrameInput) -> GameState {
    GameState {
        player: move_player(&state.player, input, &state.config.playfield),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.
///
/// Phases run in a fixed order: input, spawning, movement, collisions, purge.
/// A quit request is honoured before anything else is touched, and a finished
/// match is returned unchanged.
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    rng: &mut impl Rng,
) -> Result<GameState, GameError> {
    if input.quit {
        return Ok(GameState {
            status: GameStatus::Quit,
            events: Vec::new(),
            ..state.clone()
        });
    }
    if state.status != GameStatus::Playing {
        return Ok(state.clone());
    }

    // ── 1. Input ─────────────────────────────────────────────────────────────
    let mut next = GameState {
        events: Vec::new(),
        ..state.clone()
    };
    if input.fire {
        next = player_fire(&next);
    }
    if input.cure {
        next = player_cure(&next);
    }
    next = player_move(&next, input);

    // ── 2. Spawning ──────────────────────────────────────────────────────────
    spawn::run(&mut next, rng);

    // ── 3. Movement ──────────────────────────────────────────────────────────
    let field = next.config.playfield;
    tick_shield(&mut next.player);
    step_all(&mut next.items, &field)?;
    step_all(&mut next.beams, &field)?;
    step_all(&mut next.enemies, &field)?;
    step_all(&mut next.projectiles, &field)?;
    step_all(&mut next.hazards, &field)?;
    step_all(&mut next.cure_flashes, &field)?;
    if let Some(boss) = next.boss.as_mut() {
        step(boss, &field)?;
    }
    step_all(&mut next.explosions, &field)?;

    // ── 4. Collisions ────────────────────────────────────────────────────────
    combat::resolve(&mut next);

    // ── 5. Purge ─────────────────────────────────────────────────────────────
    purge_removed(&mut next);

    next.frame += 1;
    Ok(next)
}

/// Drop every removed entity and inactive item.  Safe to call more than once.
pub fn purge_removed(state: &mut GameState) {
    purge(&mut state.items);
    purge(&mut state.beams);
    purge(&mut state.enemies);
    purge(&mut state.projectiles);
    purge(&mut state.hazards);
    purge(&mut state.cure_flashes);
    purge(&mut state.explosions);
    if state.boss.as_ref().is_some_and(|b| b.status == Lifecycle::Removed) {
        state.boss = None;
    }
}
