use thiserror::Error;

/// Errors that can occur when validating an initial bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Ordered finite bounds, not yet known to bracket a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) lo: f64,
    pub(super) hi: f64,
}

impl Bounds {
    /// Validates and orders the endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        if a < b {
            Ok(Self { lo: a, hi: b })
        } else {
            Ok(Self { lo: b, hi: a })
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// A validated bracket: the residual changes sign between `lo` and `hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
    lo_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from bounds with known, differing residual signs.
    ///
    /// Returns `None` if the signs match.
    pub(super) fn new(bounds: Bounds, lo_sign: Sign, hi_sign: Sign) -> Option<Self> {
        (lo_sign != hi_sign).then_some(Self {
            lo: bounds.lo,
            hi: bounds.hi,
            lo_sign,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Shrinks the bracket to the half that still contains the sign change.
    ///
    /// A midpoint with the same sign as `lo` replaces `lo`; otherwise it
    /// replaces `hi`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.lo_sign == sign {
            self.lo = x;
        } else {
            self.hi = x;
        }
    }
}

/// The sign of a nonzero residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    ///
    /// Zero maps to `Positive`; solvers treat exact zeros as roots before
    /// asking for a sign.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
