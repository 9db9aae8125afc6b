//! Error type shared by the simulation library.

use thiserror::Error;

/// Errors raised by simulation operations and file I/O.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed or serialized.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration parsed but describes an arena entities cannot move in.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A symbol index outside the agent's symbol table was requested.
    #[error("symbol index {index} out of range (table has {len} symbols)")]
    SymbolIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of symbols in the table.
        len: usize,
    },
}

/// Convenience result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
