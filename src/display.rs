/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// screen machine.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use skull_island::constants::{MAX_HITS, VIEW_HEIGHT, VIEW_WIDTH};
use skull_island::entities::Vec2;
use skull_island::screen::{Screen, ScreenMachine};
use skull_island::session::GameplaySession;
use skull_island::sprite::{Sprite, Tint};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEARTS: Color = Color::Red;
const C_HUD_EMPTY: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;
const C_NEW_BEST: Color = Color::Yellow;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::White => Color::White,
        Tint::Red => Color::Red,
        Tint::Green => Color::Green,
        Tint::Yellow => Color::Yellow,
        Tint::Cyan => Color::Cyan,
        Tint::Magenta => Color::Magenta,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    machine: &ScreenMachine,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match machine.screen {
        Screen::MainMenu => draw_main_menu(out, machine, width, height)?,
        Screen::HowToPlay => draw_how_to_play(out, width, height)?,
        Screen::Gameplay => draw_gameplay(out, &machine.session, width, height)?,
        Screen::GameOver => draw_game_over(out, machine, width, height)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Menus ─────────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_main_menu<W: Write>(
    out: &mut W,
    machine: &ScreenMachine,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let best = format!("Best Score: {}", machine.high_score);
    let lines: &[(&str, Color)] = &[
        ("☠  SKULL  ISLAND  ☠", C_TITLE),
        ("", C_HINT),
        (best.as_str(), C_HUD_SCORE),
        ("", C_HINT),
        ("PRESS ENTER TO START", Color::White),
        ("Q / ESC : Quit", C_HINT),
    ];
    draw_centered(out, lines, width, height)
}

fn draw_how_to_play<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("HOW TO PLAY", C_TITLE),
        ("", C_HINT),
        ("Arrows / WASD : Move", Color::White),
        ("SPACE : Shoot (standing still)", Color::White),
        ("", C_HINT),
        ("☠  Skulls hunt you down. Ten bites and you are done.", Color::Green),
        ("♥  Heart: heals one bite", Color::Magenta),
        ("☢  Nuke: wipes out every skull", Color::Yellow),
        ("", C_HINT),
        ("PRESS ENTER TO BEGIN", Color::White),
    ];
    draw_centered(out, lines, width, height)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    machine: &ScreenMachine,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let summary = &machine.summary;
    let score_line = format!("Final Score: {}", summary.final_score);
    let (best_line, best_color) = if summary.is_new_high_score {
        (format!("NEW HIGH SCORE: {}", summary.high_score), C_NEW_BEST)
    } else {
        (format!("High Score: {}", summary.high_score), C_TITLE)
    };
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (score_line.as_str(), C_HUD_SCORE),
        (best_line.as_str(), best_color),
        ("ENTER - Play Again  Q - Quit", Color::White),
    ];
    draw_centered(out, lines, width, height)
}

// ── Gameplay ──────────────────────────────────────────────────────────────────

/// Maps world units to terminal cells inside the border, centred on the
/// player like a follow camera.
struct Camera {
    centre: Vec2,
    cols: u16,
    rows: u16,
    units_per_col: f32,
    units_per_row: f32,
}

impl Camera {
    fn new(centre: Vec2, width: u16, height: u16) -> Self {
        // Inner area: columns 1..width-1, rows 2..height-2
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Camera {
            centre,
            cols,
            rows,
            units_per_col: VIEW_WIDTH / f32::from(cols),
            units_per_row: VIEW_HEIGHT / f32::from(rows),
        }
    }

    /// Terminal cell for a world point, or `None` when it is off screen.
    fn project(&self, at: Vec2) -> Option<(u16, u16)> {
        let col = ((at.x - self.centre.x) / self.units_per_col + f32::from(self.cols) / 2.0).floor();
        let row = ((at.y - self.centre.y) / self.units_per_row + f32::from(self.rows) / 2.0).floor();
        if col < 0.0 || row < 0.0 || col >= f32::from(self.cols) || row >= f32::from(self.rows) {
            return None;
        }
        Some((col as u16 + 1, row as u16 + 2))
    }
}

fn draw_gameplay<W: Write>(
    out: &mut W,
    session: &GameplaySession,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    draw_border(out, width, height)?;
    draw_hud(out, session, width)?;

    let camera = Camera::new(session.player.position, width, height);
    for drop in &session.drops {
        draw_sprite(out, &camera, drop)?;
    }
    for enemy in &session.enemies {
        draw_sprite(out, &camera, enemy)?;
    }
    for projectile in &session.projectiles {
        draw_sprite(out, &camera, projectile)?;
    }
    if session.player.is_alive() {
        draw_sprite(out, &camera, &session.player)?;
    }

    draw_controls_hint(out, height)
}

fn draw_sprite<W: Write, S: Sprite>(
    out: &mut W,
    camera: &Camera,
    sprite: &S,
) -> std::io::Result<()> {
    if let Some((col, row)) = camera.project(sprite.position()) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(tint_color(sprite.tint())))?;
        out.queue(Print(sprite.glyph(sprite.current_frame())))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &GameplaySession, width: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("SCORE: {:>8}", session.display_score)))?;

    // Hearts — right, full then empty
    let full = session.player.hearts_left() as usize;
    let empty = MAX_HITS as usize - full;
    let rx = width.saturating_sub(MAX_HITS as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEARTS))?;
    out.queue(Print("♥".repeat(full)))?;
    out.queue(style::SetForegroundColor(C_HUD_EMPTY))?;
    out.queue(Print("♡".repeat(empty)))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}
