/// Pure falling-block logic.
///
/// Same shape as the shooter's `compute`: every function takes the current
/// `TetrisState` and returns a new one.  Nothing changes once the status is
/// `GameOver`.

use rand::Rng;

use super::entities::{
    Board, Piece, TetrisState, TetrisStatus, Tetromino, WELL_HEIGHT, WELL_WIDTH,
};

/// Column offsets tried, in order, when a rotation is blocked.
const WALL_KICKS: [i32; 5] = [0, -1, 1, -2, 2];

fn random_kind(rng: &mut impl Rng) -> Tetromino {
    Tetromino::ALL[rng.gen_range(0..Tetromino::ALL.len())]
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn init_state(rng: &mut impl Rng) -> TetrisState {
    let first = random_kind(rng);
    TetrisState {
        board: Board::default(),
        piece: Piece::spawn(first),
        next: random_kind(rng),
        lines: 0,
        status: TetrisStatus::Playing,
    }
}

/// Empty well, new pieces, zero lines.
pub fn reset(_state: &TetrisState, rng: &mut impl Rng) -> TetrisState {
    init_state(rng)
}

// ── Queries ──────────────────────────────────────────────────────────────────

/// How many rows the active piece can fall before it rests.
pub fn drop_distance(state: &TetrisState) -> i32 {
    let mut dy = 0;
    while state.board.fits(&state.piece.shifted(0, dy + 1)) {
        dy += 1;
    }
    dy
}

// ── Moves ────────────────────────────────────────────────────────────────────

fn try_place(state: &TetrisState, candidate: Piece) -> TetrisState {
    if state.status == TetrisStatus::GameOver || !state.board.fits(&candidate) {
        return state.clone();
    }
    TetrisState {
        piece: candidate,
        ..state.clone()
    }
}

pub fn move_left(state: &TetrisState) -> TetrisState {
    try_place(state, state.piece.shifted(-1, 0))
}

pub fn move_right(state: &TetrisState) -> TetrisState {
    try_place(state, state.piece.shifted(1, 0))
}

/// Rotate clockwise, nudging sideways off walls and stacks if needed.
pub fn rotate(state: &TetrisState) -> TetrisState {
    if state.status == TetrisStatus::GameOver {
        return state.clone();
    }
    let turned = state.piece.rotated();
    WALL_KICKS
        .iter()
        .map(|&dx| turned.shifted(dx, 0))
        .find(|p| state.board.fits(p))
        .map(|piece| TetrisState {
            piece,
            ..state.clone()
        })
        .unwrap_or_else(|| state.clone())
}

/// One row down; locks the piece if it cannot fall.
pub fn move_down(state: &TetrisState, rng: &mut impl Rng) -> TetrisState {
    if state.status == TetrisStatus::GameOver {
        return state.clone();
    }
    let lower = state.piece.shifted(0, 1);
    if state.board.fits(&lower) {
        TetrisState {
            piece: lower,
            ..state.clone()
        }
    } else {
        lock_piece(state, rng)
    }
}

/// Timer-driven fall.  Identical to a soft drop.
pub fn gravity_tick(state: &TetrisState, rng: &mut impl Rng) -> TetrisState {
    move_down(state, rng)
}

/// Drop straight to the resting row and lock.
pub fn hard_drop(state: &TetrisState, rng: &mut impl Rng) -> TetrisState {
    if state.status == TetrisStatus::GameOver {
        return state.clone();
    }
    let dropped = TetrisState {
        piece: state.piece.shifted(0, drop_distance(state)),
        ..state.clone()
    };
    lock_piece(&dropped, rng)
}

// ── Locking ──────────────────────────────────────────────────────────────────

/// Remove full rows, shifting everything above down.  Returns the new board
/// and the number of rows removed.
pub fn clear_lines(board: &Board) -> (Board, u32) {
    let kept: Vec<_> = board
        .cells
        .iter()
        .filter(|row| row.iter().any(|c| c.is_none()))
        .copied()
        .collect();
    let cleared = WELL_HEIGHT - kept.len();

    let mut out = Board::default();
    for (i, row) in kept.into_iter().enumerate() {
        out.cells[cleared + i] = row;
    }
    (out, cleared as u32)
}

fn lock_piece(state: &TetrisState, rng: &mut impl Rng) -> TetrisState {
    let mut board = state.board.clone();
    let mut above_top = false;
    for (r, c) in state.piece.cells() {
        if r < 0 {
            above_top = true;
            continue;
        }
        if (c as usize) < WELL_WIDTH && (r as usize) < WELL_HEIGHT {
            board.cells[r as usize][c as usize] = Some(state.piece.kind);
        }
    }

    let (board, cleared) = clear_lines(&board);
    if cleared > 0 {
        log::debug!("cleared {} line(s)", cleared);
    }

    let piece = Piece::spawn(state.next);
    let status = if above_top || !board.fits(&piece) {
        log::debug!("well topped out after {} lines", state.lines + cleared);
        TetrisStatus::GameOver
    } else {
        TetrisStatus::Playing
    };

    TetrisState {
        board,
        piece,
        next: random_kind(rng),
        lines: state.lines + cleared,
        status,
    }
}
