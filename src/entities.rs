/// All game entity types. Pure data, no logic.

use crate::config::GameConfig;
use crate::geometry::{Rect, Vec2};
use crate::hud::Hud;

/// Whether an entity still belongs to the world.  `Removed` entities are
/// dropped from their collection at the end of the tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Removed,
}

/// One of the eight compass octants the fighter can face.
/// Screen coordinates: north is up (negative y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

/// Scripted descent of enemies, the boss and hazard balls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Descent {
    Descending,
    Holding,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Pixels moved per held arrow key per tick, always in 0..=10.
    pub speed: u32,
    pub facing: Facing,
    /// Ticks of shield left; 0 means no shield.
    pub shield_timer: u32,
    pub lives: u32,
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub vy: f32,
    pub stop_line: f32,
    pub descent: Descent,
    /// Drops a bomb whenever the frame counter is a multiple of this.
    pub bomb_interval: u64,
    pub variant: u8,
    pub status: Lifecycle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub rect: Rect,
    pub vy: f32,
    pub stop_line: f32,
    pub descent: Descent,
    pub bomb_interval: u64,
    pub status: Lifecycle,
}

/// Descending obstacle that costs the player speed on contact.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardBall {
    pub rect: Rect,
    pub vy: f32,
    pub stop_line: f32,
    pub descent: Descent,
    /// Ticks left before the ball fades out.
    pub ttl: i32,
    pub variant: u8,
    pub status: Lifecycle,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BombSize {
    Large,
    Small,
    Medium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileKind {
    Bomb(BombSize),
    BossBomb { hue: u8 },
}

/// Enemy or boss ordnance.  The direction is frozen at spawn time.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub velocity: Vec2,
    pub kind: ProjectileKind,
    pub status: Lifecycle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub rect: Rect,
    pub velocity: Vec2,
    pub facing: Facing,
    pub status: Lifecycle,
}

// ── Transient effects ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub rect: Rect,
    pub ttl: i32,
    pub status: Lifecycle,
}

/// Short marker shown next to the speed meter after a successful cure.
#[derive(Clone, Debug, PartialEq)]
pub struct CureFlash {
    pub rect: Rect,
    pub ttl: i32,
    pub status: Lifecycle,
}

// ── Items ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Placeholder pickup: touching it only clears it away.
    Plain,
    /// Grants the player a shield.
    Shield,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub rect: Rect,
    pub kind: ItemKind,
    pub active: bool,
    /// Ticks left while active.
    pub countdown: i32,
}

// ── Match state ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossCause {
    SpeedDepleted,
    OutOfLives,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Lost(LossCause),
    Cleared,
    Quit,
}

/// Things that happened during the last tick that the front end may want to
/// react to (banners, pauses, logs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    BeamFired,
    Cured { speed: u32 },
    SpeedLost { speed: u32 },
    PlayerHit { lives_left: u32 },
    BossHit { hits_left: u32 },
    BossDefeated,
    ShieldRaised,
}

/// The entire game state.  Cloneable so the per-tick transition can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    /// Beam hits the boss can still take.  Lives on the world, not on the boss
    /// sprite, so it outlasts the sprite under `BossRule::Literal`.
    pub boss_hits_left: u32,
    pub projectiles: Vec<Projectile>,
    pub beams: Vec<Beam>,
    pub explosions: Vec<Explosion>,
    pub hazards: Vec<HazardBall>,
    pub items: Vec<Item>,
    pub cure_flashes: Vec<CureFlash>,
    pub hud: Hud,
    pub status: GameStatus,
    /// Ticks completed so far; drives every spawn rule.
    pub frame: u64,
    /// Events raised by the most recent tick only.
    pub events: Vec<GameEvent>,
}
