//! Error types for smash-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in smash-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table dump could not be decoded
    #[error("failed to parse table dump '{path}': {source}")]
    DumpParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No table dump exists for a character
    #[error("no table dump found for '{0}'")]
    DumpNotFound(String),

    /// The page yielded fewer tables than the layout requires
    #[error("'{character}' has {count} tables, expected one at index {index}")]
    MissingTable {
        character: String,
        index: usize,
        count: usize,
    },

    /// A row's cell count does not match its record shape
    #[error("expected {expected} cells for {kind} '{group}' but found {found}")]
    RecordShape {
        kind: &'static str,
        group: String,
        expected: usize,
        found: usize,
    },

    /// A cell holds a value the builder cannot interpret
    #[error("unexpected value '{value}' for {field} in '{group}'")]
    UnexpectedCell {
        field: &'static str,
        group: String,
        value: String,
    },

    /// A move group collides with the reserved specials key
    #[error("move group '{0}' collides with a reserved key")]
    ReservedGroup(String),

    /// More than four special slots were detected
    #[error("'{character}' has more than four special groups (extra group '{label}')")]
    GroupingOverflow { character: String, label: String },

    /// No persisted moveset for a character
    #[error("no moveset stored for '{0}'")]
    CharacterNotFound(String),

    /// The moveset has no entry for the requested move
    #[error("'{character}' has no move '{name}'")]
    MoveNotFound { character: String, name: String },

    /// A move group has no parts left to narrate
    #[error("no valid moves in the group '{0}'")]
    EmptyMoveGroup(String),

    /// A record has none of the fields narration understands
    #[error("unrecognized move data for '{0}'")]
    UnrecognizedMoveShape(String),

    /// CSV writing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
