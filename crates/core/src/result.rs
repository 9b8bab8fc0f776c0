use thiserror::Error;

use crate::DomainError;

/// A recoverable condition that ended a solve without convergence.
///
/// Failures are reported inside a [`SolverResult`] rather than as an `Err`,
/// so a caller can inspect the last estimate and fall back to another method
/// (for example, bisection after Newton hits a flat derivative).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Failure {
    /// The equation could not be evaluated at an iterate.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Bracket search ran out of room or shifts before finding a sign change.
    #[error("no sign change found in [{lo}, {hi}]")]
    NoBracket { lo: f64, hi: f64 },

    /// The secant denominator `f(x_k) - f(x_{k-1})` vanished.
    #[error("secant stagnated: f({x_prev}) == f({x}) == {residual}")]
    Stagnation { x_prev: f64, x: f64, residual: f64 },

    /// Newton's method hit `f'(x) == 0`.
    #[error("zero derivative at x = {x}")]
    ZeroDerivative { x: f64 },
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Converged according to the configured criteria.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// Stopped on a recoverable failure.
    Failed(Failure),
}

/// The outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// Last computed estimate of the root.
    ///
    /// Always defined, including when the solve did not converge.
    pub root: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Final solver status.
    pub status: Status,
}

impl SolverResult {
    /// Creates a converged result.
    #[must_use]
    pub fn converged(root: f64, iterations: usize) -> Self {
        Self {
            root,
            iterations,
            status: Status::Converged,
        }
    }

    /// Creates a result for an exhausted iteration budget.
    #[must_use]
    pub fn max_iters(root: f64, iterations: usize) -> Self {
        Self {
            root,
            iterations,
            status: Status::MaxIters,
        }
    }

    /// Creates a result for a solve stopped by its observer.
    #[must_use]
    pub fn stopped(root: f64, iterations: usize) -> Self {
        Self {
            root,
            iterations,
            status: Status::StoppedByObserver,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failed(failure: impl Into<Failure>, root: f64, iterations: usize) -> Self {
        Self {
            root,
            iterations,
            status: Status::Failed(failure.into()),
        }
    }

    /// Returns true only if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the failure, if the solve failed.
    #[must_use]
    pub fn failure(&self) -> Option<Failure> {
        match self.status {
            Status::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns the root if converged, otherwise the failure or `None` for a
    /// solve that merely ran out of iterations or was stopped.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] if the solve failed.
    pub fn converged_root(&self) -> Result<Option<f64>, Failure> {
        match self.status {
            Status::Converged => Ok(Some(self.root)),
            Status::MaxIters | Status::StoppedByObserver => Ok(None),
            Status::Failed(failure) => Err(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_converged_status_counts_as_converged() {
        assert!(SolverResult::converged(1.0, 3).is_converged());
        assert!(!SolverResult::max_iters(1.0, 3).is_converged());
        assert!(!SolverResult::stopped(1.0, 3).is_converged());
        assert!(!SolverResult::failed(Failure::ZeroDerivative { x: 0.0 }, 0.0, 1).is_converged());
    }

    #[test]
    fn failure_keeps_last_estimate() {
        let result = SolverResult::failed(
            DomainError::NonFinite {
                x: 2.0,
                value: f64::INFINITY,
            },
            1.5,
            4,
        );

        assert_eq!(result.root, 1.5);
        assert_eq!(result.iterations, 4);
        assert!(matches!(result.failure(), Some(Failure::Domain(_))));
    }

    #[test]
    fn converged_root_splits_outcomes() {
        assert_eq!(SolverResult::converged(2.0, 1).converged_root(), Ok(Some(2.0)));
        assert_eq!(SolverResult::max_iters(2.0, 1).converged_root(), Ok(None));
        assert_eq!(
            SolverResult::failed(Failure::NoBracket { lo: 0.0, hi: 1.0 }, 0.5, 0).converged_root(),
            Err(Failure::NoBracket { lo: 0.0, hi: 1.0 })
        );
    }
}
