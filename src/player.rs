/// Player rules: movement, facing, beams, shield and the speed stat.

use crate::constants::{
    BEAM_LENGTH, BEAM_SPEED, BEAM_THICKNESS, CURE_COST, CURE_SPEED_GAIN, HAZARD_SPEED_PENALTY,
    PLAYER_MAX_SPEED, PLAYER_SIZE, PLAYER_START, PLAYER_START_LIVES, PLAYER_START_SPEED,
    SHIELD_INFLATE, SHIELD_OFFSET,
};
use crate::entities::{Beam, Facing, Lifecycle, Player};
use crate::geometry::{in_bounds, Playfield, Rect, Vec2};
use crate::input::FrameInput;

impl Facing {
    /// Octant for a summed key step, each axis in -1..=1.  `None` when the
    /// keys cancel out.
    pub fn from_step(dx: i32, dy: i32) -> Option<Facing> {
        let facing = match (dx.signum(), dy.signum()) {
            (1, 0) => Facing::East,
            (1, -1) => Facing::NorthEast,
            (0, -1) => Facing::North,
            (-1, -1) => Facing::NorthWest,
            (-1, 0) => Facing::West,
            (-1, 1) => Facing::SouthWest,
            (0, 1) => Facing::South,
            (1, 1) => Facing::SouthEast,
            _ => return None,
        };
        Some(facing)
    }

    pub fn step(self) -> (i32, i32) {
        match self {
            Facing::East => (1, 0),
            Facing::NorthEast => (1, -1),
            Facing::North => (0, -1),
            Facing::NorthWest => (-1, -1),
            Facing::West => (-1, 0),
            Facing::SouthWest => (-1, 1),
            Facing::South => (0, 1),
            Facing::SouthEast => (1, 1),
        }
    }

    pub fn unit(self) -> Vec2 {
        let (dx, dy) = self.step();
        let d = Vec2::new(dx as f32, dy as f32);
        d.normalized().unwrap_or(Vec2::new(1.0, 0.0))
    }
}

pub fn new_player() -> Player {
    Player {
        rect: Rect::from_center(PLAYER_START, PLAYER_SIZE),
        speed: PLAYER_START_SPEED,
        facing: Facing::East,
        shield_timer: 0,
        lives: PLAYER_START_LIVES,
    }
}

/// Apply the held arrow keys.  Each key moves `speed` pixels; if the combined
/// move would leave the playfield on either axis the player stays put.
pub fn move_player(player: &Player, input: &FrameInput, field: &Playfield) -> Player {
    let (dx, dy) = input
        .held_steps()
        .fold((0, 0), |(ax, ay), (sx, sy)| (ax + sx, ay + sy));
    let step = player.speed as f32;
    let moved = player.rect.offset(Vec2::new(dx as f32 * step, dy as f32 * step));

    Player {
        rect: if in_bounds(&moved, field) == (true, true) {
            moved
        } else {
            player.rect
        },
        facing: Facing::from_step(dx, dy).unwrap_or(player.facing),
        ..player.clone()
    }
}

/// Region in which an active shield destroys enemies and projectiles.
pub fn shield_region(player: &Player) -> Rect {
    player.rect.inflate(SHIELD_INFLATE, SHIELD_INFLATE).offset(SHIELD_OFFSET)
}

pub fn shield_active(player: &Player) -> bool {
    player.shield_timer > 0
}

/// Count the shield down by one tick.
pub fn tick_shield(player: &mut Player) {
    player.shield_timer = player.shield_timer.saturating_sub(1);
}

/// A beam leaving the nose of the fighter in its current facing.
pub fn fire_beam(player: &Player) -> Beam {
    let dir = player.facing.unit();
    let center = player.rect.center() + Vec2::new(player.rect.w * dir.x, player.rect.h * dir.y);
    let size = Vec2::new(
        dir.x.abs() * BEAM_LENGTH + dir.y.abs() * BEAM_THICKNESS,
        dir.y.abs() * BEAM_LENGTH + dir.x.abs() * BEAM_THICKNESS,
    );
    Beam {
        rect: Rect::from_center(center, size),
        velocity: dir * BEAM_SPEED,
        facing: player.facing,
        status: Lifecycle::Active,
    }
}

pub fn can_cure(player: &Player, score: u32) -> bool {
    score >= CURE_COST && player.speed < PLAYER_MAX_SPEED
}

pub fn cured_speed(player: &Player) -> u32 {
    (player.speed + CURE_SPEED_GAIN).min(PLAYER_MAX_SPEED)
}

/// Speed after brushing a hazard ball.
pub fn slowed_speed(player: &Player) -> u32 {
    player.speed.saturating_sub(HAZARD_SPEED_PENALTY)
}
