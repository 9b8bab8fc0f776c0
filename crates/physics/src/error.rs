use rootfind_solvers::bisection;
use thiserror::Error;

/// Errors raised while setting up or solving a physical equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{quantity} must be finite and positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("energy range [{lo}, {hi}] eV must satisfy 0 < lo < hi < {depth} eV")]
    InvalidRange { lo: f64, hi: f64, depth: f64 },

    #[error("bisection could not start")]
    Bisection(#[from] bisection::Error),
}

/// Returns `value` if it is finite and positive.
pub(crate) fn positive(quantity: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { quantity, value })
    }
}
