//! Newton–Raphson iteration.
//!
//! # Algorithm
//!
//! ```text
//! x_{k+1} = x_k - f(x_k) / f'(x_k)
//! ```
//!
//! Each iteration checks convergence twice, in a fixed order:
//!
//! 1. `|f(x_k)| < abs_tol` before the update, reporting `x_k`;
//! 2. `|x_{k+1} - x_k| < rel_tol * |x_{k+1}|` after the update, reporting
//!    `x_{k+1}`.
//!
//! The order matters: the residual check catches flat trajectories whose
//! steps never shrink, and the step check catches steep ones whose residual
//! stays above `abs_tol`. Reordering them changes which trajectories are
//! classified as converged.
//!
//! A zero derivative ends the solve with
//! [`Failure::ZeroDerivative`](rootfind_core::Failure::ZeroDerivative)
//! instead of dividing by zero.

use log::{debug, warn};
use rootfind_core::{
    ConvergenceCriteria, Differentiable, Failure, Observer, SolverResult, evaluate,
    evaluate_derivative,
};
use thiserror::Error;

use crate::Action;

/// Errors that prevent Newton's method from starting.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },
}

/// Event emitted after each Newton update.
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
    /// Derivative at `x`.
    pub derivative: f64,
}

/// Finds a root of the equation starting from `x0`.
///
/// The observer receives an [`Event`] after each update. `iterations` in the
/// result counts completed updates.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite.
pub fn solve<E, Obs>(
    equation: &E,
    x0: f64,
    criteria: &ConvergenceCriteria,
    mut observer: Obs,
) -> Result<SolverResult, Error>
where
    E: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { value: x0 });
    }

    let result = iterate(equation, x0, criteria, &mut observer);
    debug!(
        "newton from {x0} finished after {} iteration(s): {:?} at x = {}",
        result.iterations, result.status, result.root
    );
    Ok(result)
}

/// Finds a root of the equation without observer support.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite.
pub fn solve_unobserved<E>(
    equation: &E,
    x0: f64,
    criteria: &ConvergenceCriteria,
) -> Result<SolverResult, Error>
where
    E: Differentiable + ?Sized,
{
    solve(equation, x0, criteria, ())
}

fn iterate<E, Obs>(
    equation: &E,
    x0: f64,
    criteria: &ConvergenceCriteria,
    observer: &mut Obs,
) -> SolverResult
where
    E: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = x0;

    for completed in 0..criteria.max_iter() {
        let residual = match evaluate(equation, x) {
            Ok(residual) => residual,
            Err(error) => return SolverResult::failed(error, x, completed),
        };
        if criteria.is_residual_converged(residual) {
            return SolverResult::converged(x, completed);
        }

        let derivative = match evaluate_derivative(equation, x) {
            Ok(derivative) => derivative,
            Err(error) => return SolverResult::failed(error, x, completed),
        };
        if derivative == 0.0 {
            warn!("newton hit a zero derivative at x = {x}");
            return SolverResult::failed(Failure::ZeroDerivative { x }, x, completed);
        }

        let x_next = x - residual / derivative;

        let event = Event {
            iter: completed + 1,
            x,
            x_next,
            residual,
            derivative,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return SolverResult::stopped(x, completed);
        }

        if criteria.is_step_converged(x, x_next) {
            return SolverResult::converged(x_next, completed + 1);
        }

        x = x_next;
    }

    SolverResult::max_iters(x, criteria.max_iter())
}
