//! Bisection with a bounded bracket search.
//!
//! # Algorithm
//!
//! Bisection keeps an interval `[lo, hi]` whose endpoint residuals have
//! opposite signs. Each iteration evaluates the midpoint `c`; if `f(c)` has
//! the same sign as `f(lo)` the midpoint replaces `lo`, otherwise it replaces
//! `hi`. The solve converges once `hi - lo <= abs_tol` (the root is reported
//! as the final midpoint), or immediately if any evaluation is exactly zero.
//!
//! If `abs_tol` is finer than the float spacing near the root, the bracket
//! eventually spans two adjacent floats and its midpoint rounds onto an
//! endpoint. The solve then reports `Converged` at that midpoint without
//! evaluating it, with `iterations` counting the midpoints evaluated so far.
//!
//! The update rule is purely comparison based, so identical inputs always
//! produce identical iteration counts and roots.
//!
//! # Bracket search
//!
//! If the initial endpoints share a sign, the lower endpoint is shifted
//! upward by a [`BracketSearch`] step until a sign change appears. The scan
//! is bounded by both the upper endpoint and `max_shifts`; running out of
//! either reports [`Failure::NoBracket`](rootfind_core::Failure::NoBracket).
//!
//! # Observer Events
//!
//! - [`Event::Shift`]: after each bracket-search shift
//! - [`Event::Midpoint`]: after each midpoint evaluation
//!
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod bracket;
mod config;
mod error;
mod event;
mod search;


pub use bracket::{Bracket, BracketError, Sign};
pub use config::{BracketSearch, Config, SearchError, SearchStep};
pub use error::Error;
pub use event::Event;

use log::debug;
use rootfind_core::{ConvergenceCriteria, Equation, Observer, SolverResult, evaluate};

use crate::Action;

use bracket::Bounds;
use search::{Search, find_bracket};

/// Finds a root of the equation inside `bracket` using bisection.
///
/// The bracket may be given in either order. The observer receives an
/// [`Event`] for each evaluation after the two initial endpoints.
///
/// # Errors
///
/// Returns an error if the bracket endpoints are non-finite or equal.
/// Everything else, including a missing sign change, is reported through
/// the returned [`SolverResult`].
pub fn solve<E, Obs>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<SolverResult, Error>
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;

    let result = match find_bracket(equation, bounds, config.search(), &mut observer) {
        Search::Bracketed(bracket) => bisect(equation, bracket, config.criteria(), &mut observer),
        Search::Finished(result) => result,
    };

    debug!(
        "bisection on [{}, {}] finished after {} iteration(s): {:?} at x = {}",
        bounds.lo, bounds.hi, result.iterations, result.status, result.root
    );
    Ok(result)
}

/// Finds a root of the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket endpoints are non-finite or equal.
pub fn solve_unobserved<E>(
    equation: &E,
    bracket: [f64; 2],
    config: &Config,
) -> Result<SolverResult, Error>
where
    E: Equation + ?Sized,
{
    solve(equation, bracket, config, ())
}

/// Halves a validated bracket until it is narrower than `abs_tol` or can no
/// longer be split.
fn bisect<E, Obs>(
    equation: &E,
    mut bracket: Bracket,
    criteria: &ConvergenceCriteria,
    observer: &mut Obs,
) -> SolverResult
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    for iter in 1..=criteria.max_iter() {
        if bracket.width() <= criteria.abs_tol() {
            return SolverResult::converged(bracket.midpoint(), iter - 1);
        }

        let mid = bracket.midpoint();
        let [lo, hi] = bracket.as_array();
        if mid <= lo || mid >= hi {
            return SolverResult::converged(mid, iter - 1);
        }

        let residual = match evaluate(equation, mid) {
            Ok(residual) => residual,
            Err(error) => return SolverResult::failed(error, mid, iter - 1),
        };

        let event = Event::Midpoint {
            iter,
            x: mid,
            residual,
            bracket,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return SolverResult::stopped(mid, iter);
        }

        if residual == 0.0 {
            return SolverResult::converged(mid, iter);
        }

        bracket.shrink(mid, Sign::of(residual));
    }

    let root = bracket.midpoint();
    if bracket.width() <= criteria.abs_tol() {
        SolverResult::converged(root, criteria.max_iter())
    } else {
        SolverResult::max_iters(root, criteria.max_iter())
    }
}
