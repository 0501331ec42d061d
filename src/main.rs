mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use beam_fighter::config::{BossRule, GameConfig};
use beam_fighter::entities::LossCause;
use beam_fighter::game::{run_match, Clock, Game, InputSource, MatchEnd, MatchReport};
use beam_fighter::geometry::Playfield;
use beam_fighter::input::FrameInput;

use display::{glyph_atlas, TerminalSurface};

#[derive(Parser)]
#[command(name = "beam_fighter")]
#[command(about = "Terminal arcade shooter: dodge, shoot, survive the boss")]
struct Args {
    /// Seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Playfield width in world pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Playfield height in world pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// How beam hits on the boss are counted
    #[arg(long, value_enum, default_value_t = BossRuleArg::HitPoints)]
    boss_rule: BossRuleArg,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum BossRuleArg {
    /// Boss survives until three hits
    HitPoints,
    /// Boss leaves on the first hit
    Literal,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            playfield: Playfield::new(self.width, self.height),
            boss_rule: match self.boss_rule {
                BossRuleArg::HitPoints => BossRule::HitPoints,
                BossRuleArg::Literal => BossRule::Literal,
            },
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many ticks.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 6 ticks (120 ms at
/// 50 Hz) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 6;

/// Turns crossterm key events into one `FrameInput` per tick.
///
/// Arrow keys use a last-seen map so several can be held at once; Space and
/// C only count on `Press`, so holding them fires exactly once.
struct TerminalInput {
    rx: mpsc::Receiver<Event>,
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

impl TerminalInput {
    fn new(rx: mpsc::Receiver<Event>) -> Self {
        Self {
            rx,
            key_frame: HashMap::new(),
            frame: 0,
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> FrameInput {
        self.frame += 1;
        let mut input = FrameInput::default();

        while let Ok(ev) = self.rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    self.key_frame.insert(code, self.frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => input.quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            input.quit = true
                        }
                        KeyCode::Char(' ') => input.fire = true,
                        KeyCode::Char('c') | KeyCode::Char('C') => input.cure = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code, self.frame);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            }
        }

        input.up = self.is_held(KeyCode::Up);
        input.down = self.is_held(KeyCode::Down);
        input.left = self.is_held(KeyCode::Left);
        input.right = self.is_held(KeyCode::Right);
        input
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

struct FrameClock {
    tick: Duration,
    last: Instant,
}

impl FrameClock {
    fn new(tick: Duration) -> Self {
        Self {
            tick,
            last: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn wait_tick(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.tick {
            thread::sleep(self.tick - elapsed);
        }
        self.last = Instant::now();
    }

    fn pause(&mut self, ticks: u32) {
        thread::sleep(self.tick * ticks);
        self.last = Instant::now();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let config = args.config();
    config.validate().context("rejecting command-line settings")?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, rng)?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut surface = TerminalSurface::new(&mut out, config.playfield, glyph_atlas());
    let mut input = TerminalInput::new(rx);
    let mut clock = FrameClock::new(config.tick_duration());
    let result = run_match(&mut game, &mut surface, &mut input, &mut clock);
    drop(surface);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();

    let report = result.context("match aborted")?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &MatchReport) {
    let outcome = match report.end {
        MatchEnd::Quit => "quit",
        MatchEnd::Cleared => "cleared",
        MatchEnd::Lost(LossCause::SpeedDepleted) => "lost (out of speed)",
        MatchEnd::Lost(LossCause::OutOfLives) => "lost (out of lives)",
    };
    println!(
        "Match {outcome} after {} ticks. Final score: {}",
        report.frames, report.score
    );
}
