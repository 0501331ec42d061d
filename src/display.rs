/// Rendering layer: all terminal I/O lives here.
///
/// The simulation works in world pixels; this module scales the playfield
/// onto whatever terminal grid is available and draws each entity as a small
/// glyph block looked up from the asset table.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use beam_fighter::assets::{AssetProvider, AssetTable, Imagery};
use beam_fighter::entities::{BombSize, Facing};
use beam_fighter::error::GameError;
use beam_fighter::game::Surface;
use beam_fighter::geometry::{Playfield, Rect, Vec2};
use beam_fighter::hud::Tone;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_SHIELD: Color = Color::Cyan;
const C_BEAM: Color = Color::Cyan;
const C_ENEMY: [Color; 3] = [Color::Green, Color::Red, Color::Magenta];
const C_BOSS: Color = Color::DarkRed;
const C_BOMB: Color = Color::Magenta;
const C_BOSS_BOMB: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];
const C_EXPLOSION: Color = Color::Yellow;
const C_HAZARD: [Color; 3] = [Color::DarkYellow, Color::DarkCyan, Color::DarkMagenta];
const C_ITEM_PLAIN: Color = Color::Yellow;
const C_ITEM_SHIELD: Color = Color::Cyan;
const C_CURE: Color = Color::Green;

const C_HUD_SCORE: Color = Color::Blue;
const C_HUD_LIVES: Color = Color::White;
const C_HUD_METER: Color = Color::Red;
const C_BANNER_ALERT: Color = Color::Blue;
const C_BANNER_TRIUMPH: Color = Color::DarkYellow;

/// A block of characters; spaces are transparent.
#[derive(Clone, Debug)]
pub struct Glyph {
    pub art: &'static [&'static str],
    pub color: Color,
}

/// The terminal's asset table: one glyph per imagery name.
pub fn glyph_atlas() -> AssetTable<Glyph> {
    AssetTable::from_fn(glyph_for)
}

fn glyph_for(imagery: Imagery) -> Glyph {
    let (art, color): (&'static [&'static str], Color) = match imagery {
        Imagery::Fighter(facing) => (
            match facing {
                Facing::East => &["█►"],
                Facing::West => &["◄█"],
                Facing::North => &["▲", "█"],
                Facing::South => &["█", "▼"],
                Facing::NorthEast => &[" ◥", "█ "],
                Facing::NorthWest => &["◤ ", " █"],
                Facing::SouthEast => &["█ ", " ◢"],
                Facing::SouthWest => &[" █", "◣ "],
            },
            C_PLAYER,
        ),
        Imagery::Shield => (&["╭───╮", "│   │", "╰───╯"], C_SHIELD),
        Imagery::Beam(facing) => (
            match facing {
                Facing::East | Facing::West => &["━━"],
                Facing::North | Facing::South => &["┃"],
                Facing::NorthEast | Facing::SouthWest => &["╱"],
                Facing::NorthWest | Facing::SouthEast => &["╲"],
            },
            C_BEAM,
        ),
        Imagery::Alien(variant) => (
            match variant {
                0 => &["«▼»", "╚═╝"],
                1 => &["(◎)", "╰─╯"],
                _ => &["/Ж\\", "╯ ╰"],
            },
            C_ENEMY[usize::from(variant) % C_ENEMY.len()],
        ),
        Imagery::Boss => (&["╔═══════╗", "║ ◉   ◉ ║", "╚═╦═╦═╦═╝"], C_BOSS),
        Imagery::Bomb(size) => (
            match size {
                BombSize::Large => &["●"],
                BombSize::Medium => &["•"],
                BombSize::Small => &["·"],
            },
            C_BOMB,
        ),
        Imagery::BossBomb(hue) => (&["◯"], C_BOSS_BOMB[usize::from(hue) % C_BOSS_BOMB.len()]),
        Imagery::Explosion(frame) => (
            if frame == 0 {
                &["\\|/", "-*-", "/|\\"]
            } else {
                &["/|\\", "-+-", "\\|/"]
            },
            C_EXPLOSION,
        ),
        Imagery::Hazard { variant, frame } => (
            if frame == 0 { &["◐"] } else { &["◑"] },
            C_HAZARD[usize::from(variant) % C_HAZARD.len()],
        ),
        Imagery::PlainItem => (&["[?]"], C_ITEM_PLAIN),
        Imagery::ShieldItem => (&["[S]"], C_ITEM_SHIELD),
        Imagery::CureFlash => (&["+2"], C_CURE),
    };
    Glyph { art, color }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Score => C_HUD_SCORE,
        Tone::Lives => C_HUD_LIVES,
        Tone::Meter => C_HUD_METER,
        Tone::Alert => C_BANNER_ALERT,
        Tone::Triumph => C_BANNER_TRIUMPH,
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface<W: Write> {
    out: W,
    field: Playfield,
    atlas: AssetTable<Glyph>,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, field: Playfield, atlas: AssetTable<Glyph>) -> Self {
        Self {
            out,
            field,
            atlas,
            cols: 80,
            rows: 24,
        }
    }

    /// Terminal cell under a world point, as signed coordinates.
    fn cell(&self, at: Vec2) -> (i32, i32) {
        let col = (at.x / self.field.width * f32::from(self.cols)).floor() as i32;
        let row = (at.y / self.field.height * f32::from(self.rows)).floor() as i32;
        (col, row)
    }

    /// Print `line` starting at (`col`, `row`), skipping spaces and anything
    /// that falls off the grid.
    fn put_line(&mut self, col: i32, row: i32, line: &str, transparent: bool) -> Result<(), GameError> {
        if row < 0 || row >= i32::from(self.rows) {
            return Ok(());
        }
        for (i, ch) in line.chars().enumerate() {
            let c = col + i as i32;
            if c < 0 || c >= i32::from(self.cols) || (transparent && ch == ' ') {
                continue;
            }
            self.out.queue(cursor::MoveTo(c as u16, row as u16))?;
            self.out.queue(Print(ch))?;
        }
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn begin_frame(&mut self) -> Result<(), GameError> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_entity(&mut self, imagery: Imagery, rect: &Rect) -> Result<(), GameError> {
        let glyph = self.atlas.fetch(imagery)?.clone();
        let (col, row) = self.cell(rect.center());
        let height = glyph.art.len() as i32;
        let top = row - height / 2;

        self.out.queue(style::SetForegroundColor(glyph.color))?;
        for (i, line) in glyph.art.iter().enumerate() {
            let width = line.chars().count() as i32;
            self.put_line(col - width / 2, top + i as i32, line, true)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, tone: Tone) -> Result<(), GameError> {
        let (col, row) = self.cell(anchor);
        let width = text.chars().count() as i32;
        self.out.queue(style::SetForegroundColor(tone_color(tone)))?;
        self.put_line(col - width / 2, row, text, false)
    }

    fn present(&mut self) -> Result<(), GameError> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;
        Ok(())
    }
}
