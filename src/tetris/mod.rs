/// Falling-block mini-game
///
/// A 10×20 well with the seven standard tetrominoes and a fixed-rate gravity
/// timer.

pub mod compute;
pub mod entities;
pub mod session;

pub use entities::{Board, Piece, TetrisState, TetrisStatus, Tetromino, WELL_HEIGHT, WELL_WIDTH};
pub use session::TetrisLoop;
