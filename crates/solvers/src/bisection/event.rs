use super::Bracket;

/// Event emitted by the bisection solver for each evaluation after the
/// initial endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The lower endpoint was shifted during bracket search.
    Shift {
        /// Shift counter (1-based).
        shift: usize,
        /// The new lower endpoint.
        lo: f64,
        /// Residual at the new lower endpoint.
        residual: f64,
    },

    /// A midpoint was evaluated inside a validated bracket.
    Midpoint {
        /// Iteration counter (1-based).
        iter: usize,
        /// The midpoint.
        x: f64,
        /// Residual at the midpoint.
        residual: f64,
        /// Bracket before it is shrunk around `x`.
        bracket: Bracket,
    },
}

impl Event {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Shift { lo, .. } => *lo,
            Event::Midpoint { x, .. } => *x,
        }
    }

    /// Returns the residual at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Event::Shift { residual, .. } | Event::Midpoint { residual, .. } => *residual,
        }
    }
}
