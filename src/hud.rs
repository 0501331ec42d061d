/// HUD counters.  Pure state: the surface decides how the lines look.

use crate::entities::Player;
use crate::geometry::{Playfield, Vec2};

pub const BANNER_HIT: &str = "HIT!";
pub const BANNER_LOST: &str = "GAME OVER";
pub const BANNER_CLEAR: &str = "GAME CLEAR!";

/// Colour role of a piece of text; the surface maps it to a real colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Score,
    Lives,
    Meter,
    Alert,
    Triumph,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudLine {
    pub text: String,
    /// Center of the label in world pixels.
    pub anchor: Vec2,
    pub tone: Tone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
}

impl Hud {
    pub fn score_up(&mut self, add: u32) {
        self.score = self.score.saturating_add(add);
    }

    /// Spend `cost` points.  Returns false, leaving the score untouched, when
    /// there are not enough.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.score.checked_sub(cost) {
            Some(left) => {
                self.score = left;
                true
            }
            None => false,
        }
    }

    /// Score, lives and speed meter along the bottom of the playfield.
    pub fn lines(&self, player: &Player, field: &Playfield) -> [HudLine; 3] {
        let row = field.height - 50.0;
        [
            HudLine {
                text: format!("Score: {}", self.score),
                anchor: Vec2::new(100.0, row),
                tone: Tone::Score,
            },
            HudLine {
                text: format!("Lives: {}", player.lives),
                anchor: Vec2::new(300.0, row),
                tone: Tone::Lives,
            },
            HudLine {
                text: format!("Speed: {}", player.speed),
                anchor: Vec2::new(500.0, row),
                tone: Tone::Meter,
            },
        ]
    }
}

/// Banner centered on the playfield.
pub fn banner(text: &str, tone: Tone, field: &Playfield) -> HudLine {
    HudLine {
        text: text.to_string(),
        anchor: Vec2::new(field.width / 2.0, field.height / 2.0),
        tone,
    }
}
