/// Immutable match configuration, built once at startup and carried by the
/// game state.

use std::time::Duration;

use crate::constants::{BOSS_SIZE, ENEMY_STOP_MIN, PLAYER_SIZE, PLAYER_START};
use crate::error::GameError;
use crate::geometry::{in_bounds, Playfield, Rect};

/// How the boss reacts to beam hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BossRule {
    /// The boss stays in play until its hit counter runs out.
    #[default]
    HitPoints,
    /// The boss leaves play on the first hit; its counter is decremented but
    /// can no longer end the match.
    Literal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub playfield: Playfield,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Length of the pause after a hit, a loss or a clear.
    pub pause_ticks: u32,
    pub boss_rule: BossRule,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(1200.0, 600.0),
            tick_rate: 50,
            pause_ticks: 100,
            boss_rule: BossRule::HitPoints,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.tick_rate == 0 {
            return Err(GameError::InvalidConfig {
                reason: "tick rate must be positive".into(),
            });
        }
        let field = self.playfield;
        if !field.width.is_finite() || !field.height.is_finite() {
            return Err(GameError::InvalidConfig {
                reason: format!("playfield {}x{} is not finite", field.width, field.height),
            });
        }
        if field.width < BOSS_SIZE.x || field.height < BOSS_SIZE.y {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "playfield {}x{} is smaller than the boss ({}x{})",
                    field.width, field.height, BOSS_SIZE.x, BOSS_SIZE.y
                ),
            });
        }
        if field.height / 2.0 <= ENEMY_STOP_MIN {
            return Err(GameError::InvalidConfig {
                reason: format!("playfield height {} leaves no room for enemy stop-lines", field.height),
            });
        }
        // The fighter always starts at the same point.
        let start = Rect::from_center(PLAYER_START, PLAYER_SIZE);
        if in_bounds(&start, &field) != (true, true) {
            return Err(GameError::InvalidConfig {
                reason: format!(
                    "playfield {}x{} does not contain the player's start at ({}, {})",
                    field.width, field.height, PLAYER_START.x, PLAYER_START.y
                ),
            });
        }
        Ok(())
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
