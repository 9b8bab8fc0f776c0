use std::f64::consts::FRAC_PI_2;

use log::{debug, warn};
use rootfind_core::{ConvergenceCriteria, Failure, SolverResult};
use rootfind_solvers::bisection;
use uom::si::{energy::electronvolt, f64::Energy};

use crate::error::Error;

use super::{ParityCase, QuantizationEquation, SquareWell};

/// Default lower edge of the search range (eV).
pub const DEFAULT_MIN_ENERGY: f64 = 0.001;

/// Default gap between the top of the search range and the well depth (eV).
pub const DEFAULT_EDGE_CLEARANCE: f64 = 0.001;

/// Gap kept between a level's bracket and the poles of `tan(k w / 2)`.
const PHASE_CLEARANCE: f64 = 1e-9;

/// Solves square-well energy levels one at a time.
///
/// Level `n` uses the even condition for even `n` and the odd condition for
/// odd `n`. Its bracket is the part of `[E_min, E_max]` on which
/// `k w / 2 ∈ (nπ/2, (n+1)π/2)`, so each level is isolated from its
/// neighbours and from the poles of `tan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParitySelector {
    well: SquareWell,
    min_energy: f64,
    max_energy: f64,
    config: bisection::Config,
}

/// A solved (or unsolved) energy level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLevel {
    pub n: usize,
    pub parity: ParityCase,
    pub result: SolverResult,
}

impl EnergyLevel {
    /// Returns the level energy if the solve converged.
    #[must_use]
    pub fn energy(&self) -> Option<Energy> {
        self.result
            .is_converged()
            .then(|| Energy::new::<electronvolt>(self.result.root))
    }
}

impl ParitySelector {
    /// Creates a selector over `[0.001, V - 0.001]` eV with bisection
    /// stopping once the bracket is narrower than 1 meV.
    #[must_use]
    pub fn new(well: SquareWell) -> Self {
        Self {
            well,
            min_energy: DEFAULT_MIN_ENERGY,
            max_energy: well.depth_ev() - DEFAULT_EDGE_CLEARANCE,
            config: default_config(),
        }
    }

    /// Returns a copy searching `[min, max]` instead of the default range.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < min < max < V`.
    pub fn with_range(self, min: Energy, max: Energy) -> Result<Self, Error> {
        let lo = min.get::<electronvolt>();
        let hi = max.get::<electronvolt>();
        let depth = self.well.depth_ev();

        if !(lo > 0.0 && lo < hi && hi < depth) {
            return Err(Error::InvalidRange { lo, hi, depth });
        }

        Ok(Self {
            min_energy: lo,
            max_energy: hi,
            ..self
        })
    }

    /// Returns a copy using a different bisection config.
    #[must_use]
    pub fn with_config(self, config: bisection::Config) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn well(&self) -> &SquareWell {
        &self.well
    }

    #[must_use]
    pub fn config(&self) -> &bisection::Config {
        &self.config
    }

    /// Returns the parity of level `n`.
    #[must_use]
    pub fn parity(&self, n: usize) -> ParityCase {
        ParityCase::from_level(n)
    }

    /// Returns the equation level `n` must satisfy.
    #[must_use]
    pub fn equation(&self, n: usize) -> QuantizationEquation {
        QuantizationEquation::new(self.well, self.parity(n))
    }

    /// Returns the energy window (eV) searched for level `n`.
    ///
    /// The window may be empty (`lo >= hi`) when the level would sit above
    /// the search range.
    #[must_use]
    pub fn window(&self, n: usize) -> [f64; 2] {
        #[allow(clippy::cast_precision_loss)]
        let start = n as f64 * FRAC_PI_2;
        let lo = self.well.energy_at_half_phase(start + PHASE_CLEARANCE);
        let hi = self.well.energy_at_half_phase(start + FRAC_PI_2 - PHASE_CLEARANCE);
        [lo.max(self.min_energy), hi.min(self.max_energy)]
    }

    /// Returns the bracket for level `n`, or `None` if its window is empty.
    #[must_use]
    pub fn bracket(&self, n: usize) -> Option<[f64; 2]> {
        let [lo, hi] = self.window(n);
        (lo < hi).then_some([lo, hi])
    }

    /// Solves level `n`.
    ///
    /// A level with no room left in the search range is reported as
    /// [`Failure::NoBracket`] without evaluating the equation.
    ///
    /// # Errors
    ///
    /// Returns an error if bisection rejects the level's bracket.
    pub fn solve(&self, n: usize) -> Result<EnergyLevel, Error> {
        let parity = self.parity(n);

        let result = match self.bracket(n) {
            Some(bracket) => bisection::solve_unobserved(&self.equation(n), bracket, &self.config)?,
            None => {
                let [lo, hi] = self.window(n);
                warn!("level {n} lies outside [{}, {}] eV", self.min_energy, self.max_energy);
                SolverResult::failed(Failure::NoBracket { lo, hi }, lo, 0)
            }
        };

        debug!("level {n} ({parity}): {:?} at E = {} eV", result.status, result.root);
        Ok(EnergyLevel { n, parity, result })
    }

    /// Solves levels `0..count`, each independently of the others.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`ParitySelector::solve`].
    pub fn solve_levels(&self, count: usize) -> Result<Vec<EnergyLevel>, Error> {
        (0..count).map(|n| self.solve(n)).collect()
    }
}

fn default_config() -> bisection::Config {
    // Known-good tolerance, unwrap is safe.
    let criteria = ConvergenceCriteria::default().with_abs_tol(0.001).unwrap();
    bisection::Config::default().with_criteria(criteria)
}
