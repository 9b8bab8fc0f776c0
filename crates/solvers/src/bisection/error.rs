use thiserror::Error;

use super::BracketError;

/// Errors that prevent the bisection solver from starting.
///
/// Conditions met while solving (no sign change, domain errors) are
/// reported through the returned `SolverResult` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),
}
