use std::fmt;

use super::Branches;

/// Which quantization condition a bound state satisfies.
///
/// Even states match `tan(k w / 2)` against `y2`, odd states against `y3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParityCase {
    Even,
    Odd,
}

impl ParityCase {
    /// Returns the parity of level `n` (0 is the ground state).
    #[must_use]
    pub fn from_level(n: usize) -> Self {
        if n % 2 == 0 { Self::Even } else { Self::Odd }
    }

    /// Selects the branch this parity is matched against.
    #[must_use]
    pub fn comparison(self, branches: &Branches) -> f64 {
        match self {
            Self::Even => branches.y2,
            Self::Odd => branches.y3,
        }
    }
}

impl fmt::Display for ParityCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_alternates_with_level() {
        assert_eq!(ParityCase::from_level(0), ParityCase::Even);
        assert_eq!(ParityCase::from_level(1), ParityCase::Odd);
        assert_eq!(ParityCase::from_level(6), ParityCase::Even);
        assert_eq!(ParityCase::from_level(7), ParityCase::Odd);
    }

    #[test]
    fn comparison_picks_matching_branch() {
        let branches = Branches {
            y1: 1.0,
            y2: 2.0,
            y3: -3.0,
        };

        assert_eq!(ParityCase::Even.comparison(&branches), 2.0);
        assert_eq!(ParityCase::Odd.comparison(&branches), -3.0);
    }
}
