use rootfind_core::ConvergenceCriteria;
use thiserror::Error;

/// How far the lower endpoint moves on each bracket-search shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchStep {
    /// A fraction of the initial bracket width.
    Fraction(f64),

    /// A fixed distance in `x`.
    Fixed(f64),
}

/// Bounded linear scan used when the initial bracket has no sign change.
///
/// The lower endpoint is shifted upward by `step` until the residual changes
/// sign, the endpoint reaches the upper bound, or `max_shifts` shifts have
/// been made. A `max_shifts` of zero disables the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketSearch {
    step: SearchStep,
    max_shifts: usize,
}

/// Errors that can occur when validating a [`BracketSearch`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SearchError {
    #[error("step fraction must be in (0, 1], got {0}")]
    Fraction(f64),

    #[error("fixed step must be finite and positive, got {0}")]
    Fixed(f64),
}

impl Default for BracketSearch {
    /// One percent of the initial range per shift, enough shifts to cover it.
    fn default() -> Self {
        Self {
            step: SearchStep::Fraction(0.01),
            max_shifts: 100,
        }
    }
}

impl BracketSearch {
    /// Creates a validated bracket search.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not positive and finite, or a
    /// fractional step exceeds one.
    pub fn new(step: SearchStep, max_shifts: usize) -> Result<Self, SearchError> {
        match step {
            SearchStep::Fraction(f) if !(f > 0.0 && f <= 1.0) => {
                return Err(SearchError::Fraction(f));
            }
            SearchStep::Fixed(dx) if !(dx.is_finite() && dx > 0.0) => {
                return Err(SearchError::Fixed(dx));
            }
            _ => {}
        }
        Ok(Self { step, max_shifts })
    }

    /// A search that never shifts: a bracket without a sign change fails
    /// immediately.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            step: SearchStep::Fraction(1.0),
            max_shifts: 0,
        }
    }

    #[must_use]
    pub fn step(&self) -> SearchStep {
        self.step
    }

    #[must_use]
    pub fn max_shifts(&self) -> usize {
        self.max_shifts
    }

    /// Resolves the step size for an initial bracket of the given width.
    #[must_use]
    pub fn step_size(&self, width: f64) -> f64 {
        match self.step {
            SearchStep::Fraction(f) => f * width,
            SearchStep::Fixed(dx) => dx,
        }
    }
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    criteria: ConvergenceCriteria,
    search: BracketSearch,
}

impl Config {
    /// Creates a config from already-validated parts.
    #[must_use]
    pub fn new(criteria: ConvergenceCriteria, search: BracketSearch) -> Self {
        Self { criteria, search }
    }

    /// Returns a copy with different convergence criteria.
    #[must_use]
    pub fn with_criteria(self, criteria: ConvergenceCriteria) -> Self {
        Self { criteria, ..self }
    }

    /// Returns a copy with a different bracket search.
    #[must_use]
    pub fn with_search(self, search: BracketSearch) -> Self {
        Self { search, ..self }
    }

    #[must_use]
    pub fn criteria(&self) -> &ConvergenceCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn search(&self) -> &BracketSearch {
        &self.search
    }
}
