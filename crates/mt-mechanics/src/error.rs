//! Error types for the mechanics engine.

/// Errors that can occur while resolving dice or loading the game catalog.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice count was not a positive integer.
    #[error("invalid dice count '{0}': expected a positive number")]
    InvalidCount(String),

    /// More dice were requested than the configured maximum.
    #[error("cannot roll {count} dice at once (maximum is {max})")]
    TooManyDice {
        /// How many dice were requested.
        count: u32,
        /// The configured upper bound.
        max: u32,
    },

    /// A custom dice table has no outcomes to choose from.
    #[error("custom dice table '{0}' has no outcomes")]
    EmptyTable(String),

    /// A game system identifier is not in the catalog.
    #[error("unknown game system: {0}")]
    UnknownGame(String),

    /// A custom dice table is not defined for the active game system.
    #[error("unknown custom dice table: {0}")]
    UnknownTable(String),

    /// The catalog source could not be parsed.
    #[error("invalid game catalog: {0}")]
    InvalidCatalog(String),

    /// The catalog file could not be read.
    #[error("failed to read game catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
