use log::{debug, warn};
use rootfind_core::{Equation, Failure, Observer, SolverResult, evaluate};

use crate::Action;

use super::{
    BracketSearch, Event,
    bracket::{Bounds, Bracket, Sign},
};

pub(super) enum Search {
    Bracketed(Bracket),
    Finished(SolverResult),
}

/// Tracks the evaluated point with the smallest residual magnitude.
///
/// Reported as the root estimate when no bracket is found.
struct Best {
    x: f64,
    residual: f64,
}

impl Best {
    fn update(&mut self, x: f64, residual: f64) {
        if residual.abs() < self.residual.abs() {
            self.x = x;
            self.residual = residual;
        }
    }
}

/// Evaluates the endpoints and, if they share a sign, scans the lower
/// endpoint upward until a sign change appears.
pub(super) fn find_bracket<E, Obs>(
    equation: &E,
    bounds: Bounds,
    search: &BracketSearch,
    observer: &mut Obs,
) -> Search
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    let Bounds { mut lo, hi } = bounds;

    let lo_residual = match evaluate(equation, lo) {
        Ok(residual) => residual,
        Err(error) => return Search::Finished(SolverResult::failed(error, lo, 0)),
    };
    if lo_residual == 0.0 {
        return Search::Finished(SolverResult::converged(lo, 0));
    }

    let hi_residual = match evaluate(equation, hi) {
        Ok(residual) => residual,
        Err(error) => return Search::Finished(SolverResult::failed(error, hi, 0)),
    };
    if hi_residual == 0.0 {
        return Search::Finished(SolverResult::converged(hi, 0));
    }

    let hi_sign = Sign::of(hi_residual);
    if let Some(bracket) = Bracket::new(bounds, Sign::of(lo_residual), hi_sign) {
        return Search::Bracketed(bracket);
    }

    let mut best = Best {
        x: lo,
        residual: lo_residual,
    };
    best.update(hi, hi_residual);

    let step = search.step_size(bounds.width());
    if search.max_shifts() > 0 {
        warn!(
            "no sign change on [{lo}, {hi}], scanning upward in steps of {step} (at most {} shifts)",
            search.max_shifts()
        );
    }

    for shift in 1..=search.max_shifts() {
        lo += step;
        if lo >= hi {
            break;
        }

        let residual = match evaluate(equation, lo) {
            Ok(residual) => residual,
            Err(error) => return Search::Finished(SolverResult::failed(error, best.x, 0)),
        };

        let event = Event::Shift {
            shift,
            lo,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            best.update(lo, residual);
            return Search::Finished(SolverResult::stopped(best.x, 0));
        }

        if residual == 0.0 {
            return Search::Finished(SolverResult::converged(lo, 0));
        }

        if let Some(bracket) = Bracket::new(Bounds { lo, hi }, Sign::of(residual), hi_sign) {
            debug!("bracket search found a sign change on [{lo}, {hi}] after {shift} shift(s)");
            return Search::Bracketed(bracket);
        }

        best.update(lo, residual);
    }

    Search::Finished(SolverResult::failed(
        Failure::NoBracket {
            lo: bounds.lo,
            hi: bounds.hi,
        },
        best.x,
        0,
    ))
}
