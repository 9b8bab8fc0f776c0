//! The secant method.
//!
//! # Algorithm
//!
//! Starting from two guesses, the secant method replaces the derivative in
//! Newton's update with the slope through the last two iterates:
//!
//! ```text
//! x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
//! ```
//!
//! The solve converges when `|f(x_k)| < abs_tol` (root `x_k`) or when the
//! relative step `|x_{k+1} - x_k| < rel_tol * |x_{k+1}|` (root `x_{k+1}`).
//! If the two residuals are equal the update is undefined and the solve
//! ends with [`Failure::Stagnation`](rootfind_core::Failure::Stagnation).

use log::debug;
use rootfind_core::{ConvergenceCriteria, Equation, Failure, Observer, SolverResult, evaluate};
use thiserror::Error;

use crate::Action;

/// Errors that prevent the secant solver from starting.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },
}

/// Event emitted after each secant update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The iterate the update started from.
    pub x: f64,
    /// The new iterate.
    pub x_next: f64,
    /// Residual at `x`.
    pub residual: f64,
}

/// Finds a root of the equation starting from the guesses `x0` and `x1`.
///
/// The observer receives an [`Event`] after each update.
///
/// # Errors
///
/// Returns an error if either guess is non-finite.
pub fn solve<E, Obs>(
    equation: &E,
    x0: f64,
    x1: f64,
    criteria: &ConvergenceCriteria,
    mut observer: Obs,
) -> Result<SolverResult, Error>
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    for value in [x0, x1] {
        if !value.is_finite() {
            return Err(Error::NonFiniteGuess { value });
        }
    }

    let result = iterate(equation, x0, x1, criteria, &mut observer);
    debug!(
        "secant from ({x0}, {x1}) finished after {} iteration(s): {:?} at x = {}",
        result.iterations, result.status, result.root
    );
    Ok(result)
}

/// Finds a root of the equation without observer support.
///
/// # Errors
///
/// Returns an error if either guess is non-finite.
pub fn solve_unobserved<E>(
    equation: &E,
    x0: f64,
    x1: f64,
    criteria: &ConvergenceCriteria,
) -> Result<SolverResult, Error>
where
    E: Equation + ?Sized,
{
    solve(equation, x0, x1, criteria, ())
}

fn iterate<E, Obs>(
    equation: &E,
    x0: f64,
    x1: f64,
    criteria: &ConvergenceCriteria,
    observer: &mut Obs,
) -> SolverResult
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut f_prev = match evaluate(equation, x0) {
        Ok(residual) => residual,
        Err(error) => return SolverResult::failed(error, x0, 0),
    };
    let mut f_x = match evaluate(equation, x1) {
        Ok(residual) => residual,
        Err(error) => return SolverResult::failed(error, x1, 0),
    };
    let (mut x_prev, mut x) = (x0, x1);

    for iter in 1..=criteria.max_iter() {
        let completed = iter - 1;

        if criteria.is_residual_converged(f_x) {
            return SolverResult::converged(x, completed);
        }

        #[allow(clippy::float_cmp)]
        if f_x == f_prev {
            let failure = Failure::Stagnation {
                x_prev,
                x,
                residual: f_x,
            };
            return SolverResult::failed(failure, x, completed);
        }

        let x_next = x - f_x * (x - x_prev) / (f_x - f_prev);

        let event = Event {
            iter,
            x,
            x_next,
            residual: f_x,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return SolverResult::stopped(x, completed);
        }

        if criteria.is_step_converged(x, x_next) {
            return SolverResult::converged(x_next, iter);
        }

        let f_next = match evaluate(equation, x_next) {
            Ok(residual) => residual,
            Err(error) => return SolverResult::failed(error, x_next, iter),
        };

        (x_prev, f_prev) = (x, f_x);
        (x, f_x) = (x_next, f_next);
    }

    if criteria.is_residual_converged(f_x) {
        SolverResult::converged(x, criteria.max_iter())
    } else {
        SolverResult::max_iters(x, criteria.max_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::{Domain, DomainError, EquationModel, Status};

    #[test]
    fn finds_square_root_of_two() {
        let model = EquationModel::new(|x: f64| x * x - 2.0, Domain::unbounded());

        let result = solve_unobserved(&model, 1.0, 2.0, &ConvergenceCriteria::default())
            .expect("finite guesses");

        assert_eq!(result.status, Status::Converged);
        assert_relative_eq!(result.root, 2.0_f64.sqrt(), epsilon = 1e-8);
        assert_eq!(result.iterations, 5);
    }

    #[test]
    fn residual_check_accepts_exact_second_guess() {
        let model = EquationModel::new(|x: f64| x - 3.0, Domain::unbounded());

        let result = solve_unobserved(&model, 0.0, 3.0, &ConvergenceCriteria::default())
            .expect("finite guesses");

        assert_eq!(result, SolverResult::converged(3.0, 0));
    }

    #[test]
    fn step_check_converges_on_small_update() {
        // A loose relative tolerance accepts the first update: the residual
        // check alone would keep iterating.
        let model = EquationModel::new(|x: f64| x.powi(3) - 1000.0, Domain::unbounded());
        let criteria = ConvergenceCriteria::new(1e-12, 0.5, 100).expect("valid criteria");

        let result = solve_unobserved(&model, 9.0, 11.0, &criteria).expect("finite guesses");

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn reports_stagnation_on_equal_residuals() {
        // Symmetric guesses on an even function give equal residuals.
        let model = EquationModel::new(|x: f64| x * x - 2.0, Domain::unbounded());

        let result = solve_unobserved(&model, -1.0, 1.0, &ConvergenceCriteria::default())
            .expect("finite guesses");

        assert!(!result.is_converged());
        assert_eq!(
            result.failure(),
            Some(Failure::Stagnation {
                x_prev: -1.0,
                x: 1.0,
                residual: -1.0,
            })
        );
        assert_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn reports_domain_failure_when_update_leaves_domain() {
        let model = EquationModel::new(|x: f64| x.ln() - 0.1, Domain::open(0.0, f64::INFINITY));

        // The chord through (5, ln 5) and (10, ln 10) crosses zero below x = 0.
        let result = solve_unobserved(&model, 10.0, 5.0, &ConvergenceCriteria::default())
            .expect("finite guesses");

        assert!(matches!(
            result.failure(),
            Some(Failure::Domain(DomainError::OutsideDomain { .. }))
        ));
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn max_iters_keeps_last_iterate() {
        let model = EquationModel::new(|x: f64| x.cos() - x, Domain::unbounded());
        let criteria = ConvergenceCriteria::new(1e-15, 0.0, 2).expect("valid criteria");

        let result = solve_unobserved(&model, 0.0, 1.0, &criteria).expect("finite guesses");

        assert_eq!(result.status, Status::MaxIters);
        assert_eq!(result.iterations, 2);
        assert_relative_eq!(result.root, 0.736_299, epsilon = 1e-6);
    }

    #[test]
    fn rejects_non_finite_guess() {
        let model = EquationModel::new(|x: f64| x, Domain::unbounded());

        let result = solve_unobserved(&model, 0.0, f64::NAN, &ConvergenceCriteria::default());

        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let model = EquationModel::new(|x: f64| x * x - 2.0, Domain::unbounded());

        let mut seen = Vec::new();
        let observer = |event: &Event| {
            seen.push(event.x_next);
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let result = solve(&model, 1.0, 2.0, &ConvergenceCriteria::default(), observer)
            .expect("finite guesses");

        assert_eq!(result.status, Status::StoppedByObserver);
        assert_eq!(result.iterations, 1);
        assert_eq!(seen.len(), 2);
        assert_relative_eq!(seen[0], 4.0 / 3.0);
    }
}
