use std::backtrace::Backtrace;

use crate::solver::cell::{Axis, CellId};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Structural problems in a puzzle definition or catalog/store mismatch.
///
/// Note that a contradiction (an emptied domain) is *not* an error: it is an
/// expected search outcome, recovered by backtracking. These variants cover
/// the cases where the solver would otherwise dereference a cell or clue
/// that does not exist.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    #[error("no domain recorded for cell {0}")]
    MissingDomain(CellId),
    #[error("run starting at {0} has no clue cell before it")]
    MissingClue(CellId),
    #[error("cell {0} is referenced as a clue but is not a clue cell")]
    NotAClueCell(CellId),
    #[error("clue cell {0} has no {1} target")]
    MissingClueTarget(CellId, Axis),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
