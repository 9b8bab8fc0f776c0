use thiserror::Error;

/// Convergence criteria shared by all solvers.
///
/// - `abs_tol` bounds the residual `|f(x)|` for the iterative solvers and the
///   bracket width for bisection.
/// - `rel_tol` bounds the relative step `|x_{k+1} - x_k| / |x_{k+1}|`.
/// - `max_iter` caps the number of iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceCriteria {
    abs_tol: f64,
    rel_tol: f64,
    max_iter: usize,
}

/// Errors that can occur when validating [`ConvergenceCriteria`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CriteriaError {
    #[error("abs_tol must be finite and positive, got {0}")]
    AbsTol(f64),

    #[error("rel_tol must be finite and non-negative, got {0}")]
    RelTol(f64),

    #[error("max_iter must be at least 1")]
    MaxIter,
}

impl Default for ConvergenceCriteria {
    fn default() -> Self {
        Self {
            abs_tol: 1e-8,
            rel_tol: 1e-8,
            max_iter: 100,
        }
    }
}

impl ConvergenceCriteria {
    /// Creates validated convergence criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs_tol` is not finite and positive, `rel_tol` is
    /// negative or non-finite, or `max_iter` is zero.
    pub fn new(abs_tol: f64, rel_tol: f64, max_iter: usize) -> Result<Self, CriteriaError> {
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(CriteriaError::AbsTol(abs_tol));
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(CriteriaError::RelTol(rel_tol));
        }
        if max_iter == 0 {
            return Err(CriteriaError::MaxIter);
        }

        Ok(Self {
            abs_tol,
            rel_tol,
            max_iter,
        })
    }

    /// Returns a copy with a different absolute tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs_tol` is not finite and positive.
    pub fn with_abs_tol(self, abs_tol: f64) -> Result<Self, CriteriaError> {
        Self::new(abs_tol, self.rel_tol, self.max_iter)
    }

    /// Returns a copy with a different iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iter` is zero.
    pub fn with_max_iter(self, max_iter: usize) -> Result<Self, CriteriaError> {
        Self::new(self.abs_tol, self.rel_tol, max_iter)
    }

    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns true if `|residual| < abs_tol`.
    #[must_use]
    pub fn is_residual_converged(&self, residual: f64) -> bool {
        residual.abs() < self.abs_tol
    }

    /// Returns true if the step from `x` to `x_next` is below `rel_tol`
    /// relative to `|x_next|`.
    #[must_use]
    pub fn is_step_converged(&self, x: f64, x_next: f64) -> bool {
        (x_next - x).abs() < self.rel_tol * x_next.abs()
    }
}
