use rootfind_core::{Domain, Equation};

use super::{ParityCase, SquareWell};

/// The quantization condition for one parity of a [`SquareWell`].
///
/// The residual is `y1(E) - y2(E)` for even states and `y1(E) - y3(E)` for
/// odd states, with `E` in eV on the open domain `(0, V)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizationEquation {
    well: SquareWell,
    parity: ParityCase,
}

impl QuantizationEquation {
    #[must_use]
    pub fn new(well: SquareWell, parity: ParityCase) -> Self {
        Self { well, parity }
    }

    #[must_use]
    pub fn well(&self) -> &SquareWell {
        &self.well
    }

    #[must_use]
    pub fn parity(&self) -> ParityCase {
        self.parity
    }
}

impl Equation for QuantizationEquation {
    fn domain(&self) -> Domain {
        Domain::open(0.0, self.well.depth_ev())
    }

    fn value(&self, energy: f64) -> f64 {
        let branches = self.well.branches(energy);
        branches.y1 - self.parity.comparison(&branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::{DomainError, evaluate};
    use uom::si::{
        energy::electronvolt,
        f64::{Energy, Length},
        length::nanometer,
    };

    fn well() -> SquareWell {
        SquareWell::electron(
            Energy::new::<electronvolt>(20.0),
            Length::new::<nanometer>(1.0),
        )
        .expect("valid well")
    }

    #[test]
    fn residual_subtracts_parity_branch() {
        let well = well();
        let branches = well.branches(3.0);

        let even = QuantizationEquation::new(well, ParityCase::Even);
        let odd = QuantizationEquation::new(well, ParityCase::Odd);

        assert_relative_eq!(even.value(3.0), branches.y1 - branches.y2);
        assert_relative_eq!(odd.value(3.0), branches.y1 - branches.y3);
    }

    #[test]
    fn ground_state_residual_changes_sign() {
        let equation = QuantizationEquation::new(well(), ParityCase::Even);

        assert!(equation.value(0.3) < 0.0);
        assert!(equation.value(0.33) > 0.0);
    }

    #[test]
    fn well_edges_are_outside_domain() {
        let well = well();
        let equation = QuantizationEquation::new(well, ParityCase::Odd);

        assert!(matches!(
            evaluate(&equation, 0.0),
            Err(DomainError::OutsideDomain { .. })
        ));
        assert!(matches!(
            evaluate(&equation, well.depth_ev()),
            Err(DomainError::OutsideDomain { .. })
        ));
    }
}
