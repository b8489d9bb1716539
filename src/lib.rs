/// Portfolio arcade - the two mini-games from a personal portfolio site
///
/// - `entities` / `compute`: the shooter's data and pure per-tick rules
/// - `arcade`: the shooter's game-loop owner (`ArcadeLoop`)
/// - `tetris`: the falling-block game
/// - `timer`: fixed-rate timers driven by injected time
/// - `config`: settings loaded from JSON

pub mod arcade;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod tetris;
pub mod timer;

pub use arcade::ArcadeLoop;
pub use config::{Settings, SettingsError, ShooterRules, TetrisRules};
pub use error::ArcadeError;
pub use tetris::TetrisLoop;
