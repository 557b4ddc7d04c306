mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
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

use skull_island::config::GameConfig;
use skull_island::highscore::{HighScoreFile, ScoreStore};
use skull_island::input::InputSnapshot;
use skull_island::screen::ScreenMachine;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// once OS key-repeat is running (≥ 15 Hz) a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Hold window for fire and confirm on terminals without release events.
/// Must outlast the OS delay before the first repeat (≈500 ms), otherwise a
/// single long press reads as released and then pressed again.
const ONE_SHOT_HOLD_WINDOW: u64 = 40;

/// Longest frame delta fed to the simulation, in seconds.  Stops a stalled
/// terminal from teleporting every skull onto the player.
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "skull_island", about = "Top-down arcade shooter for the terminal")]
struct Args {
    /// TOML config file
    #[arg(long, default_value = "skull_island.toml")]
    config: PathBuf,

    /// Fixed RNG seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// High score file (overrides the config)
    #[arg(long)]
    high_score: Option<PathBuf>,

    /// Log file (overrides the config); filter with RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Returns true if `key` was seen within the last `window` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64, window: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= window)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64, window: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame, window))
}

/// Reduce the held-key map to the game's action snapshot.  With release
/// events available, one-shot keys leave the map on release and need no
/// longer window.
fn snapshot(key_frame: &HashMap<KeyCode, u64>, frame: u64, keyboard_enhanced: bool) -> InputSnapshot {
    use KeyCode::{Char, Down, Enter, Left, Right, Up};
    let one_shot = if keyboard_enhanced {
        HOLD_WINDOW
    } else {
        ONE_SHOT_HOLD_WINDOW
    };
    InputSnapshot {
        up: any_held(key_frame, &[Up, Char('w'), Char('W')], frame, HOLD_WINDOW),
        down: any_held(key_frame, &[Down, Char('s'), Char('S')], frame, HOLD_WINDOW),
        left: any_held(key_frame, &[Left, Char('a'), Char('A')], frame, HOLD_WINDOW),
        right: any_held(key_frame, &[Right, Char('d'), Char('D')], frame, HOLD_WINDOW),
        fire: any_held(key_frame, &[Char(' ')], frame, one_shot),
        confirm: any_held(key_frame, &[Enter], frame, one_shot),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame the still-"fresh" keys become an
/// `InputSnapshot`, and the screen machine derives press edges from
/// consecutive snapshots.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence, or `ONE_SHOT_HOLD_WINDOW` for fire and confirm.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    keyboard_enhanced: bool,
) -> anyhow::Result<()> {
    let mut store = HighScoreFile::new(&config.high_score_path);
    let high_score = store.load();
    log::info!("high score {} from {}", high_score, store.path().display());
    let mut machine = ScreenMachine::new(high_score);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_time = config.frame_duration();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {}
                    }
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let dt = last_frame.elapsed().as_secs_f32().min(MAX_FRAME_DT);
        last_frame = Instant::now();

        let input = snapshot(&key_frame, frame, keyboard_enhanced);
        machine.update(input, dt, &mut rng, &mut store);

        let (width, height) = terminal::size()?;
        display::render(out, &machine, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, config_err) = GameConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = args.high_score {
        config.high_score_path = path;
    }
    if let Some(path) = args.log_file {
        config.log_file = path;
    }

    init_logging(&config.log_file)?;
    match config_err {
        Some(e) if e.is_not_found() => log::info!("no config at {}, using defaults", args.config.display()),
        Some(e) => log::warn!("{e}; using defaults"),
        None => log::info!("loaded config from {}", args.config.display()),
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    // Writing the flags succeeds even where they are ignored, so ask first.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("key release events: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &config, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("game loop failed: {e:#}");
    }
    result
}
