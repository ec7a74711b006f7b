//! Error types for bid ingestion.
//!
//! The tree itself has no failure modes: a missed lookup is `None` and
//! removing a missing id is a no-op. Errors only arise while turning
//! external input into [`Bid`](crate::types::Bid) values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a currency amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Text is not a decimal number after stripping `$` and `,`
    #[error("invalid amount: {0:?}")]
    Invalid(String),

    /// Decimal value cannot be represented as `f64`
    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

/// Failure while loading bids from CSV
#[derive(Debug, Error)]
pub enum LoadError {
    /// The CSV file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the underlying stream failed
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// A row has fewer columns than the bid layout requires
    #[error("row {row}: expected at least {expected} columns, found {found}")]
    MissingColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row's amount column failed to parse
    #[error("row {row}: {source}")]
    Amount {
        row: usize,
        #[source]
        source: AmountError,
    },
}
