//! Game loop orchestrator and the collaborator seams it drives.
//!
//! One iteration: poll input → tick the world → render → pace the clock.
//! Hits, losses and clears additionally show a banner and pause.

use rand::Rng;

use crate::assets::Imagery;
use crate::compute::{init_state, tick};
use crate::config::GameConfig;
use crate::constants::{SHIELD_DRAW_OFFSET, SHIELD_SIZE};
use crate::entities::{GameEvent, GameState, GameStatus, LossCause};
use crate::error::GameError;
use crate::geometry::{Rect, Vec2};
use crate::hud::{banner, HudLine, Tone, BANNER_CLEAR, BANNER_HIT, BANNER_LOST};
use crate::input::FrameInput;
use crate::movement::Sprite;
use crate::player::shield_active;

pub trait Surface {
    fn begin_frame(&mut self) -> Result<(), GameError>;
    /// Called once per visible entity per frame.
    fn draw_entity(&mut self, imagery: Imagery, rect: &Rect) -> Result<(), GameError>;
    fn draw_text(&mut self, text: &str, anchor: Vec2, tone: Tone) -> Result<(), GameError>;
    fn present(&mut self) -> Result<(), GameError>;
}

pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

pub trait Clock {
    /// Block until the next tick is due.
    fn wait_tick(&mut self);
    /// Block for `ticks` whole ticks.
    fn pause(&mut self, ticks: u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    Quit,
    Lost(LossCause),
    Cleared,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub end: MatchEnd,
    pub score: u32,
    pub frames: u64,
}

/// Owns the world and the RNG for one match.
pub struct Game<R: Rng> {
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, GameError> {
        Ok(Self {
            state: init_state(config)?,
            rng,
        })
    }

    /// Start from a hand-built state.
    pub fn from_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn step(&mut self, input: &FrameInput) -> Result<&GameState, GameError> {
        self.state = tick(&self.state, input, &mut self.rng)?;
        Ok(&self.state)
    }
}

/// Play until the match ends or the player quits.
pub fn run_match<R, S, I, C>(
    game: &mut Game<R>,
    surface: &mut S,
    input: &mut I,
    clock: &mut C,
) -> Result<MatchReport, GameError>
where
    R: Rng,
    S: Surface,
    I: InputSource,
    C: Clock,
{
    let pause_ticks = game.state().config.pause_ticks;
    tracing::info!(config = ?game.state().config, "match started");

    loop {
        let frame_input = input.poll();
        let state = game.step(&frame_input)?;

        let hit = state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerHit { .. }));
        let overlay = match state.status {
            GameStatus::Quit => None,
            GameStatus::Lost(_) => Some(banner(BANNER_LOST, Tone::Alert, &state.config.playfield)),
            GameStatus::Cleared => {
                Some(banner(BANNER_CLEAR, Tone::Triumph, &state.config.playfield))
            }
            GameStatus::Playing if hit => {
                Some(banner(BANNER_HIT, Tone::Alert, &state.config.playfield))
            }
            GameStatus::Playing => None,
        };

        let end = match state.status {
            GameStatus::Playing => None,
            GameStatus::Quit => Some(MatchEnd::Quit),
            GameStatus::Lost(cause) => Some(MatchEnd::Lost(cause)),
            GameStatus::Cleared => Some(MatchEnd::Cleared),
        };
        if end == Some(MatchEnd::Quit) {
            return Ok(report(state, MatchEnd::Quit));
        }

        render(state, surface, overlay.as_ref())?;
        if overlay.is_some() {
            clock.pause(pause_ticks);
        }
        if let Some(end) = end {
            tracing::info!(?end, score = state.hud.score, frames = state.frame, "match over");
            return Ok(report(state, end));
        }
        clock.wait_tick();
    }
}

fn report(state: &GameState, end: MatchEnd) -> MatchReport {
    MatchReport {
        end,
        score: state.hud.score,
        frames: state.frame,
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn draw_all<T: Sprite, S: Surface>(sprites: &[T], surface: &mut S) -> Result<(), GameError> {
    sprites
        .iter()
        .filter(|s| s.is_active())
        .try_for_each(|s| surface.draw_entity(s.imagery(), s.rect()))
}

/// Draw one frame: entities back to front, then the HUD, then `overlay`.
pub fn render<S: Surface>(
    state: &GameState,
    surface: &mut S,
    overlay: Option<&HudLine>,
) -> Result<(), GameError> {
    surface.begin_frame()?;

    draw_all(&state.items, surface)?;

    let player = &state.player;
    surface.draw_entity(Imagery::Fighter(player.facing), &player.rect)?;
    if shield_active(player) {
        let at = player.rect.center() + SHIELD_DRAW_OFFSET;
        surface.draw_entity(Imagery::Shield, &Rect::from_center(at, SHIELD_SIZE))?;
    }

    draw_all(&state.beams, surface)?;
    draw_all(&state.enemies, surface)?;
    draw_all(&state.projectiles, surface)?;
    draw_all(&state.hazards, surface)?;
    draw_all(&state.cure_flashes, surface)?;
    if let Some(boss) = &state.boss {
        draw_all(std::slice::from_ref(boss), surface)?;
    }
    draw_all(&state.explosions, surface)?;

    for line in state.hud.lines(player, &state.config.playfield) {
        surface.draw_text(&line.text, line.anchor, line.tone)?;
    }
    if let Some(line) = overlay {
        surface.draw_text(&line.text, line.anchor, line.tone)?;
    }

    surface.present()
}
