use thiserror::Error;

use crate::Domain;

/// Errors raised when an equation cannot be evaluated at `x`.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// `x` lies outside the equation's domain.
    #[error("x = {x} is outside the domain {domain}")]
    OutsideDomain { x: f64, domain: Domain },

    /// The function returned NaN or an infinity at `x`.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

impl DomainError {
    /// Returns the `x` at which evaluation failed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::OutsideDomain { x, .. } | Self::NonFinite { x, .. } => *x,
        }
    }
}
