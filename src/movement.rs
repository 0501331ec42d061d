/// Per-entity update rules.
///
/// Every sprite-like entity implements [`Sprite`]; the three movement models
/// (linear, descend-then-hold, timed decay) are small helpers the impls share.

use crate::assets::Imagery;
use crate::constants::ANIMATION_PERIOD;
use crate::entities::{
    Beam, Boss, CureFlash, Descent, Enemy, Explosion, HazardBall, Item, ItemKind, Lifecycle,
    Projectile, ProjectileKind,
};
use crate::error::GameError;
use crate::geometry::{in_bounds, Playfield, Rect, Vec2};

pub trait Sprite {
    /// Name used in errors and logs.
    const KIND: &'static str;

    fn rect(&self) -> &Rect;
    fn status(&self) -> Lifecycle;
    /// Advance one tick.  Only ever called on active sprites.
    fn advance(&mut self, field: &Playfield);
    fn imagery(&self) -> Imagery;

    fn is_active(&self) -> bool {
        self.status() == Lifecycle::Active
    }
}

/// Advance a single sprite, refusing ones that already left the world.
pub fn step<S: Sprite>(sprite: &mut S, field: &Playfield) -> Result<(), GameError> {
    if !sprite.is_active() {
        return Err(GameError::InvalidEntityState { kind: S::KIND });
    }
    sprite.advance(field);
    Ok(())
}

pub fn step_all<S: Sprite>(sprites: &mut [S], field: &Playfield) -> Result<(), GameError> {
    sprites.iter_mut().try_for_each(|s| step(s, field))
}

/// Drop every non-active sprite.  Returns how many were dropped; a second call
/// in the same tick drops nothing.
pub fn purge<S: Sprite>(sprites: &mut Vec<S>) -> usize {
    let before = sprites.len();
    sprites.retain(|s| s.is_active());
    before - sprites.len()
}

// ── Movement models ──────────────────────────────────────────────────────────

fn advance_linear(rect: &mut Rect, velocity: Vec2, field: &Playfield) -> Lifecycle {
    rect.translate(velocity);
    match in_bounds(rect, field) {
        (true, true) => Lifecycle::Active,
        _ => Lifecycle::Removed,
    }
}

/// Once the center has passed `stop_line` the entity stops for good.
fn advance_descent(rect: &mut Rect, vy: &mut f32, stop_line: f32, descent: &mut Descent) {
    if rect.center().y > stop_line {
        *vy = 0.0;
        *descent = Descent::Holding;
    }
    rect.translate(Vec2::new(0.0, *vy));
}

fn decay(ttl: &mut i32) -> Lifecycle {
    *ttl -= 1;
    if *ttl < 0 {
        Lifecycle::Removed
    } else {
        Lifecycle::Active
    }
}

/// Which of two animation frames to show for a countdown value.
pub fn two_frame(ttl: i32) -> u8 {
    ttl.div_euclid(ANIMATION_PERIOD).rem_euclid(2) as u8
}

// ── Sprite impls ─────────────────────────────────────────────────────────────

impl Sprite for Beam {
    const KIND: &'static str = "beam";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, field: &Playfield) {
        self.status = advance_linear(&mut self.rect, self.velocity, field);
    }

    fn imagery(&self) -> Imagery {
        Imagery::Beam(self.facing)
    }
}

impl Sprite for Projectile {
    const KIND: &'static str = "projectile";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, field: &Playfield) {
        self.status = advance_linear(&mut self.rect, self.velocity, field);
    }

    fn imagery(&self) -> Imagery {
        match self.kind {
            ProjectileKind::Bomb(size) => Imagery::Bomb(size),
            ProjectileKind::BossBomb { hue } => Imagery::BossBomb(hue),
        }
    }
}

impl Sprite for Enemy {
    const KIND: &'static str = "enemy";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, _field: &Playfield) {
        advance_descent(&mut self.rect, &mut self.vy, self.stop_line, &mut self.descent);
    }

    fn imagery(&self) -> Imagery {
        Imagery::Alien(self.variant)
    }
}

impl Sprite for Boss {
    const KIND: &'static str = "boss";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, _field: &Playfield) {
        advance_descent(&mut self.rect, &mut self.vy, self.stop_line, &mut self.descent);
    }

    fn imagery(&self) -> Imagery {
        Imagery::Boss
    }
}

impl Sprite for HazardBall {
    const KIND: &'static str = "hazard ball";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, _field: &Playfield) {
        advance_descent(&mut self.rect, &mut self.vy, self.stop_line, &mut self.descent);
        self.status = decay(&mut self.ttl);
    }

    fn imagery(&self) -> Imagery {
        Imagery::Hazard {
            variant: self.variant,
            frame: two_frame(self.ttl),
        }
    }
}

impl Sprite for Explosion {
    const KIND: &'static str = "explosion";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, _field: &Playfield) {
        self.status = decay(&mut self.ttl);
    }

    fn imagery(&self) -> Imagery {
        Imagery::Explosion(two_frame(self.ttl))
    }
}

impl Sprite for CureFlash {
    const KIND: &'static str = "cure flash";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        self.status
    }

    fn advance(&mut self, _field: &Playfield) {
        self.status = decay(&mut self.ttl);
    }

    fn imagery(&self) -> Imagery {
        Imagery::CureFlash
    }
}

/// Items have no separate lifecycle tag: an inactive item is a removed one.
impl Sprite for Item {
    const KIND: &'static str = "item";

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn status(&self) -> Lifecycle {
        if self.active {
            Lifecycle::Active
        } else {
            Lifecycle::Removed
        }
    }

    fn advance(&mut self, _field: &Playfield) {
        self.countdown -= 1;
        if self.countdown <= 0 {
            self.active = false;
        }
    }

    fn imagery(&self) -> Imagery {
        match self.kind {
            ItemKind::Plain => Imagery::PlainItem,
            ItemKind::Shield => Imagery::ShieldItem,
        }
    }
}
