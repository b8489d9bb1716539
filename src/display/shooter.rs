/// Shooter frame: the 800×600 arena scaled onto the terminal.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use portfolio_arcade::entities::{
    Bullet, GameState, GameStatus, Target, ARENA_HEIGHT, ARENA_WIDTH, BULLET_SPAWN_Y,
    BULLET_X_OFFSET,
};

use super::{draw_banner, draw_frame, draw_hint, finish_frame, Viewport};

const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_TARGET: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;

/// Maps arena coordinates onto terminal cells inside the border.
///
/// Rows: 0 = HUD, 1 = top border, 2.. = arena, h-2 = bottom border,
/// h-1 = controls hint.
struct Projection {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Projection {
    fn new(view: Viewport) -> Self {
        Projection {
            left: 1,
            top: 2,
            cols: view.width.saturating_sub(2).max(1),
            rows: view.height.saturating_sub(4).max(1),
        }
    }

    fn col(&self, x: f32) -> i32 {
        self.left as i32 + (x / ARENA_WIDTH * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        self.top as i32 + (y / ARENA_HEIGHT * self.rows as f32).floor() as i32
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.left as i32
            && col < (self.left + self.cols) as i32
            && row >= self.top as i32
            && row < (self.top + self.rows) as i32
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.status() {
        GameStatus::Playing => {
            let proj = Projection::new(view);
            draw_frame(out, 0, 1, view.width, view.height.saturating_sub(2))?;
            draw_hud(out, state, view)?;
            for target in &state.targets {
                draw_target(out, target, &proj)?;
            }
            for bullet in &state.bullets {
                draw_bullet(out, bullet, &proj)?;
            }
            draw_player(out, state, &proj)?;
            draw_hint(out, view, "SPACE : Shoot   R : Restart   Q : Menu")?;
        }
        GameStatus::Won => {
            draw_banner(
                out,
                view,
                &[
                    ("╔════════════════════╗", Color::Yellow),
                    ("║     YOU  WIN!      ║", Color::Yellow),
                    ("╚════════════════════╝", Color::Yellow),
                    ("R - Restart  Q - Menu", Color::White),
                ],
            )?;
        }
    }

    finish_frame(out, view)
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print("[ SHOOTER ]"))?;

    let counts = format!(
        "Targets:{:>4}  Bullets:{:>4}",
        state.targets.len(),
        state.bullets.len()
    );
    let rx = view.width.saturating_sub(counts.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&counts))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Filled rectangle, clipped to the arena.
fn draw_target<W: Write>(out: &mut W, target: &Target, proj: &Projection) -> std::io::Result<()> {
    let c0 = proj.col(target.x);
    let c1 = proj.col(target.x + target.width()).max(c0 + 1);
    let r0 = proj.row(target.y);
    let r1 = proj.row(target.y + target.height()).max(r0 + 1);

    out.queue(style::SetForegroundColor(C_TARGET))?;
    for row in r0..r1 {
        for col in c0..c1 {
            if proj.contains(col, row) {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print("█"))?;
            }
        }
    }
    Ok(())
}

/// Bullets are drawn as a point at the centre-top of their hit box.
fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet, proj: &Projection) -> std::io::Result<()> {
    let col = proj.col(bullet.x + BULLET_X_OFFSET);
    let row = proj.row(bullet.y);
    if proj.contains(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetForegroundColor(C_BULLET))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    let col = proj.col(state.player_x);
    // The gun sits on the arena floor
    let row = proj.row(BULLET_SPAWN_Y).min((proj.top + proj.rows) as i32 - 1);
    if proj.contains(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(Print("▲"))?;
    }
    Ok(())
}
