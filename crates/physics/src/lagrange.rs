//! The L1 Lagrange point of a two-body system.
//!
//! At distance `r` from the primary along the line to the secondary, the
//! net acceleration in the rotating frame is
//!
//! ```text
//! F(r) = G M / r² - G m / (R - r)² - ω² r
//! ```
//!
//! and L1 is the root of `F` between the two bodies.

use rootfind_core::{Differentiable, Domain, Equation};
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Mass},
    length::meter,
    mass::kilogram,
};

use crate::{
    constants::{EARTH_MASS, EARTH_MOON_DISTANCE, G, MOON_ANGULAR_VELOCITY, MOON_MASS},
    error::{Error, positive},
};

/// Force balance along the primary–secondary axis, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct L1Equation {
    primary_gm: f64,
    secondary_gm: f64,
    separation: f64,
    omega_squared: f64,
}

impl L1Equation {
    /// Creates the equation for a primary and secondary of the given masses
    /// orbiting at `separation` with angular velocity `omega`.
    ///
    /// # Errors
    ///
    /// Returns an error if any quantity is not finite and positive.
    pub fn new(
        primary: Mass,
        secondary: Mass,
        separation: Length,
        omega: AngularVelocity,
    ) -> Result<Self, Error> {
        let primary = positive("primary mass", primary.get::<kilogram>())?;
        let secondary = positive("secondary mass", secondary.get::<kilogram>())?;
        let separation = positive("separation", separation.get::<meter>())?;
        let omega = positive("angular velocity", omega.get::<radian_per_second>())?;

        Ok(Self {
            primary_gm: G * primary,
            secondary_gm: G * secondary,
            separation,
            omega_squared: omega * omega,
        })
    }

    /// The Earth–Moon system.
    #[must_use]
    pub fn earth_moon() -> Self {
        Self {
            primary_gm: G * EARTH_MASS,
            secondary_gm: G * MOON_MASS,
            separation: EARTH_MOON_DISTANCE,
            omega_squared: MOON_ANGULAR_VELOCITY * MOON_ANGULAR_VELOCITY,
        }
    }

    /// Distance between the two bodies.
    #[must_use]
    pub fn separation(&self) -> Length {
        Length::new::<meter>(self.separation)
    }
}

impl Equation for L1Equation {
    fn domain(&self) -> Domain {
        Domain::open(0.0, self.separation)
    }

    fn value(&self, r: f64) -> f64 {
        let d = self.separation - r;
        self.primary_gm / (r * r) - self.secondary_gm / (d * d) - self.omega_squared * r
    }
}

impl Differentiable for L1Equation {
    fn derivative(&self, r: f64) -> f64 {
        let d = self.separation - r;
        -2.0 * self.primary_gm / r.powi(3)
            - 2.0 * self.secondary_gm / d.powi(3)
            - self.omega_squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::{ConvergenceCriteria, DomainError, Status, evaluate};
    use rootfind_solvers::{bisection, newton, secant};

    const L1: f64 = 3.260_45e8;

    #[test]
    fn typed_constructor_matches_earth_moon() {
        let equation = L1Equation::new(
            Mass::new::<kilogram>(EARTH_MASS),
            Mass::new::<kilogram>(MOON_MASS),
            Length::new::<meter>(EARTH_MOON_DISTANCE),
            AngularVelocity::new::<radian_per_second>(MOON_ANGULAR_VELOCITY),
        )
        .expect("valid system");

        assert_eq!(equation, L1Equation::earth_moon());
    }

    #[test]
    fn rejects_non_positive_mass() {
        let result = L1Equation::new(
            Mass::new::<kilogram>(-1.0),
            Mass::new::<kilogram>(MOON_MASS),
            Length::new::<meter>(EARTH_MOON_DISTANCE),
            AngularVelocity::new::<radian_per_second>(MOON_ANGULAR_VELOCITY),
        );

        assert!(matches!(
            result,
            Err(Error::NonPositive {
                quantity: "primary mass",
                ..
            })
        ));
    }

    #[test]
    fn derivative_matches_central_difference() {
        let equation = L1Equation::earth_moon();
        let r = 3.0e8;
        let h = 1.0;

        let slope = (equation.value(r + h) - equation.value(r - h)) / (2.0 * h);

        assert_relative_eq!(equation.derivative(r), slope, max_relative = 1e-6);
        assert!(equation.derivative(r) < 0.0);
    }

    #[test]
    fn newton_finds_l1() {
        let equation = L1Equation::earth_moon();

        for r0 in [2.5e8, 3.0e8, 3.5e8] {
            let result = newton::solve_unobserved(&equation, r0, &ConvergenceCriteria::default())
                .expect("finite guess");

            assert_eq!(result.status, Status::Converged);
            assert_eq!(result.iterations, 4);
            assert_relative_eq!(result.root, L1, max_relative = 1e-5);
        }
    }

    #[test]
    fn secant_finds_l1() {
        let equation = L1Equation::earth_moon();

        let result =
            secant::solve_unobserved(&equation, 3.2e8, 3.7e8, &ConvergenceCriteria::default())
                .expect("finite guesses");

        assert_eq!(result.status, Status::Converged);
        assert_relative_eq!(result.root, L1, max_relative = 1e-5);
    }

    #[test]
    fn bisection_finds_l1_to_a_metre() {
        let equation = L1Equation::earth_moon();
        let criteria = ConvergenceCriteria::default()
            .with_abs_tol(1.0)
            .expect("valid tolerance");
        let config = bisection::Config::default().with_criteria(criteria);

        let result =
            bisection::solve_unobserved(&equation, [3.2e8, 3.7e8], &config).expect("valid bracket");

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 26);
        assert_relative_eq!(result.root, 3.260_450_71e8, max_relative = 1e-8);
    }

    #[test]
    fn bisection_with_default_config_resolves_l1_to_float_spacing() {
        let equation = L1Equation::earth_moon();

        let result =
            bisection::solve_unobserved(&equation, [3.2e8, 3.7e8], &bisection::Config::default())
                .expect("valid bracket");

        assert_eq!(result.status, Status::Converged);
        assert!(result.iterations < 100);
        assert_relative_eq!(result.root, 3.260_450_716_6e8, max_relative = 1e-9);
    }

    #[test]
    fn bodies_are_outside_domain() {
        let equation = L1Equation::earth_moon();

        assert!(matches!(
            evaluate(&equation, 0.0),
            Err(DomainError::OutsideDomain { .. })
        ));
        assert!(matches!(
            evaluate(&equation, EARTH_MOON_DISTANCE),
            Err(DomainError::OutsideDomain { .. })
        ));
    }
}
