/// Falling-block entity types — pure data, no game rules.

pub const WELL_WIDTH: usize = 10;
pub const WELL_HEIGHT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tetromino {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::O,
        Tetromino::T,
        Tetromino::S,
        Tetromino::Z,
        Tetromino::J,
        Tetromino::L,
    ];

    /// Side of the square box the piece rotates in.
    pub fn box_size(self) -> i32 {
        match self {
            Tetromino::I => 4,
            Tetromino::O => 2,
            _ => 3,
        }
    }

    /// Occupied `(row, col)` cells in the spawn orientation.
    fn base_cells(self) -> [(i32, i32); 4] {
        match self {
            Tetromino::I => [(1, 0), (1, 1), (1, 2), (1, 3)],
            Tetromino::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            Tetromino::T => [(0, 1), (1, 0), (1, 1), (1, 2)],
            Tetromino::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
            Tetromino::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
            Tetromino::J => [(0, 0), (1, 0), (1, 1), (1, 2)],
            Tetromino::L => [(0, 2), (1, 0), (1, 1), (1, 2)],
        }
    }

    /// Occupied cells after `rotation` clockwise quarter turns, relative to
    /// the top-left of the piece's box.
    pub fn cells(self, rotation: u8) -> [(i32, i32); 4] {
        let n = self.box_size();
        let mut cells = self.base_cells();
        for _ in 0..(rotation % 4) {
            for cell in cells.iter_mut() {
                let (r, c) = *cell;
                *cell = (c, n - 1 - r);
            }
        }
        cells
    }
}

/// The active, still-falling piece.  `x`/`y` locate the top-left of its
/// rotation box; `y` may be negative right after spawning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: Tetromino,
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// New piece centred at the top of the well.
    pub fn spawn(kind: Tetromino) -> Self {
        Piece {
            kind,
            rotation: 0,
            x: (WELL_WIDTH as i32 - kind.box_size()) / 2,
            y: 0,
        }
    }

    /// Absolute `(row, col)` cells this piece covers.
    pub fn cells(&self) -> [(i32, i32); 4] {
        let mut cells = self.kind.cells(self.rotation);
        for cell in cells.iter_mut() {
            cell.0 += self.y;
            cell.1 += self.x;
        }
        cells
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Piece {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Piece {
            rotation: (self.rotation + 1) % 4,
            ..*self
        }
    }
}

/// Locked cells, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub cells: [[Option<Tetromino>; WELL_WIDTH]; WELL_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Board {
            cells: [[None; WELL_WIDTH]; WELL_HEIGHT],
        }
    }
}

impl Board {
    /// Cell contents; `None` for empty or out-of-range coordinates.
    pub fn get(&self, row: i32, col: i32) -> Option<Tetromino> {
        if row < 0 || col < 0 {
            return None;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }

    /// Whether a piece cell may sit at `(row, col)`.  Rows above the well
    /// are open; walls, floor and locked cells are not.
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        if col < 0 || col >= WELL_WIDTH as i32 || row >= WELL_HEIGHT as i32 {
            return false;
        }
        row < 0 || self.cells[row as usize][col as usize].is_none()
    }

    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(r, c)| self.is_free(r, c))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TetrisStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TetrisState {
    pub board: Board,
    pub piece: Piece,
    /// Kind that spawns after the current piece locks.
    pub next: Tetromino,
    /// Rows cleared this session.
    pub lines: u32,
    pub status: TetrisStatus,
}
