//! Crate-wide error type.

use thiserror::Error;

/// Errors produced by table construction, parsing, and search setup.
///
/// Degenerate 2-opt moves are *not* errors: [`crate::tour::Tour::two_opt`]
/// signals them with `None` and callers simply redraw. Worker faults during
/// a parallel run are collected into the run outcome as
/// [`crate::parallel::WorkerFailure`] values rather than surfaced here.
#[derive(Debug, Error)]
pub enum Error {
    /// A 2-opt neighbourhood only exists for 3 or more towns.
    #[error("a 2-opt search needs at least 3 towns, table has {0}")]
    TooFewTowns(usize),

    /// An annealing parameter failed validation.
    #[error("invalid annealing configuration: {0}")]
    Config(String),

    /// A parallel run was requested with zero workers.
    #[error("parallel search needs at least one worker")]
    NoWorkers,

    /// A parallel run was requested with zero restarts per worker.
    #[error("parallel search needs at least one restart per worker")]
    NoRestarts,

    /// The distance matrix is not lower-triangular over the town list.
    #[error("malformed distance table: {0}")]
    MalformedTable(String),

    /// A distance file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An underlying I/O failure while reading a distance file or
    /// spawning a worker thread.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Every worker of a parallel run failed before submitting a tour.
    #[error("all {0} search workers failed")]
    AllWorkersFailed(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
