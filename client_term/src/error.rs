use std::io;
use std::path::PathBuf;

use game_core::SurfaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("terminal is {cols}x{rows} cells, too small for two paddles and a ball")]
    TerminalTooSmall { cols: u16, rows: u16 },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("could not open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not install logger: {0}")]
    Logger(String),
}
