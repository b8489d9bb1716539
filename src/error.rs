/// Crate-level error type for the terminal host.

use crate::config::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum ArcadeError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub type Result<T> = std::result::Result<T, ArcadeError>;
