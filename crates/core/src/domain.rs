use std::fmt;

/// One end of a [`Domain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// The endpoint belongs to the domain.
    Closed(f64),

    /// The endpoint is excluded from the domain.
    Open(f64),

    /// No limit on this side.
    Unbounded,
}

/// The interval of `x` values on which an equation can be evaluated.
///
/// Physical equations often have poles or branch cuts (a division by
/// `V - E`, a square root of a negative quantity), so every equation carries
/// the interval outside of which its value is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    lo: Bound,
    hi: Bound,
}

impl Domain {
    /// Creates a domain from its two bounds.
    #[must_use]
    pub const fn new(lo: Bound, hi: Bound) -> Self {
        Self { lo, hi }
    }

    /// The whole real line.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// The open interval `(lo, hi)`.
    #[must_use]
    pub const fn open(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Open(lo), Bound::Open(hi))
    }

    /// The closed interval `[lo, hi]`.
    #[must_use]
    pub const fn closed(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Closed(lo), Bound::Closed(hi))
    }

    /// The half-open interval `[lo, hi)`.
    #[must_use]
    pub const fn closed_open(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Closed(lo), Bound::Open(hi))
    }

    /// The lower bound.
    #[must_use]
    pub fn lo(&self) -> Bound {
        self.lo
    }

    /// The upper bound.
    #[must_use]
    pub fn hi(&self) -> Bound {
        self.hi
    }

    /// Returns true if `x` lies inside the domain.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let above_lo = match self.lo {
            Bound::Closed(lo) => x >= lo,
            Bound::Open(lo) => x > lo,
            Bound::Unbounded => !x.is_nan(),
        };
        let below_hi = match self.hi {
            Bound::Closed(hi) => x <= hi,
            Bound::Open(hi) => x < hi,
            Bound::Unbounded => !x.is_nan(),
        };
        above_lo && below_hi
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lo {
            Bound::Closed(lo) => write!(f, "[{lo}, ")?,
            Bound::Open(lo) => write!(f, "({lo}, ")?,
            Bound::Unbounded => write!(f, "(-inf, ")?,
        }
        match self.hi {
            Bound::Closed(hi) => write!(f, "{hi}]"),
            Bound::Open(hi) => write!(f, "{hi})"),
            Bound::Unbounded => write!(f, "inf)"),
        }
    }
}
