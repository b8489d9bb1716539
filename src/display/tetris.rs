/// Tetris frame: the well, a ghost of the landing spot and the next piece.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use portfolio_arcade::tetris::compute::drop_distance;
use portfolio_arcade::tetris::{TetrisState, TetrisStatus, Tetromino, WELL_HEIGHT, WELL_WIDTH};

use super::{draw_banner, draw_frame, draw_hint, finish_frame, Viewport};

/// Each well column is two terminal cells wide so blocks look square.
const CELL_W: u16 = 2;
const C_GHOST: Color = Color::DarkGrey;
const C_HUD: Color = Color::Yellow;

fn color_of(kind: Tetromino) -> Color {
    match kind {
        Tetromino::I => Color::Cyan,
        Tetromino::O => Color::Yellow,
        Tetromino::T => Color::Magenta,
        Tetromino::S => Color::Green,
        Tetromino::Z => Color::Red,
        Tetromino::J => Color::Blue,
        Tetromino::L => Color::DarkYellow,
    }
}

pub fn render<W: Write>(out: &mut W, state: &TetrisState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if state.status == TetrisStatus::GameOver {
        let lines = format!("Lines: {}", state.lines);
        draw_banner(
            out,
            view,
            &[
                ("╔════════════════════╗", Color::Red),
                ("║    GAME  OVER      ║", Color::Red),
                ("╚════════════════════╝", Color::Red),
                (lines.as_str(), Color::Yellow),
                ("R - Restart  Q - Menu", Color::White),
            ],
        )?;
        return finish_frame(out, view);
    }

    let frame_w = WELL_WIDTH as u16 * CELL_W + 2;
    let frame_h = WELL_HEIGHT as u16 + 2;
    let left = (view.width / 2).saturating_sub(frame_w / 2);
    let top = 1;

    draw_frame(out, left, top, frame_w, frame_h)?;

    // Locked cells
    for (r, row) in state.board.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(kind) = cell {
                draw_block(out, left, top, r as i32, c as i32, color_of(*kind), "██")?;
            }
        }
    }

    // Ghost, then the live piece over it
    let ghost = state.piece.shifted(0, drop_distance(state));
    for (r, c) in ghost.cells() {
        draw_block(out, left, top, r, c, C_GHOST, "░░")?;
    }
    for (r, c) in state.piece.cells() {
        draw_block(out, left, top, r, c, color_of(state.piece.kind), "██")?;
    }

    draw_sidebar(out, state, left + frame_w + 2, top)?;
    draw_hint(out, view, "← → Move  ↑ Rotate  ↓ Drop  SPACE Slam  R Restart  Q Menu")?;
    finish_frame(out, view)
}

fn draw_block<W: Write>(
    out: &mut W,
    left: u16,
    top: u16,
    row: i32,
    col: i32,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    // Cells above the well are not drawn
    if row < 0 || col < 0 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(
        left + 1 + col as u16 * CELL_W,
        top + 1 + row as u16,
    ))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_sidebar<W: Write>(
    out: &mut W,
    state: &TetrisState,
    x: u16,
    top: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(x, top))?;
    out.queue(Print("[ TETRIS ]"))?;
    out.queue(cursor::MoveTo(x, top + 2))?;
    out.queue(Print(format!("Lines: {:>4}", state.lines)))?;
    out.queue(cursor::MoveTo(x, top + 4))?;
    out.queue(Print("Next:"))?;

    out.queue(style::SetForegroundColor(color_of(state.next)))?;
    for (r, c) in state.next.cells(0) {
        out.queue(cursor::MoveTo(x + c as u16 * CELL_W, top + 6 + r as u16))?;
        out.queue(Print("██"))?;
    }
    Ok(())
}
