//! Error types for table parsing and determinization.

use thiserror::Error;

/// Errors surfaced by the table adapters and the subset-construction engine.
///
/// All failures are fatal to the current conversion; there is nothing to
/// retry. Row numbers are 1-based and count the header row.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transition table is empty")]
    EmptyTable,

    #[error("header row declares no alphabet symbols")]
    EmptyAlphabet,

    #[error("duplicate symbol {0:?} in alphabet")]
    DuplicateSymbol(String),

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: duplicate state {state:?}")]
    DuplicateState { row: usize, state: String },

    #[error("row {row}: state label is empty")]
    EmptyStateLabel { row: usize },

    #[error("symbol {0:?} is not in the alphabet")]
    UnknownSymbol(String),

    #[error("no initial state designated")]
    NoInitialState,

    #[error("initial state {0:?} does not appear in the transition table")]
    UnknownInitialState(String),

    #[error("final state {0:?} does not appear in the transition table")]
    UnknownFinalState(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
