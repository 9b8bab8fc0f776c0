//! Scalar root-finding solvers.
//!
//! Each solver drives the residual of an [`Equation`] toward zero and
//! returns a [`SolverResult`]. Preconditions (a malformed bracket, a
//! non-finite guess) are rejected with an `Err`; conditions met while
//! iterating (no sign change, a vanishing derivative, a point outside the
//! domain) end the solve with a [`Failure`] so callers can fall back to
//! another method.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval, with a
//!   bounded bracket search
//! - [`secant`]: derivative-free two-point iteration
//! - [`newton`]: derivative-based iteration for [`Differentiable`] equations
//!
//! All solvers accept an [`Observer`] that sees each evaluation and may
//! return [`Action::StopEarly`].
//!
//! [`Equation`]: rootfind_core::Equation
//! [`Differentiable`]: rootfind_core::Differentiable
//! [`Failure`]: rootfind_core::Failure
//! [`Observer`]: rootfind_core::Observer
//! [`SolverResult`]: rootfind_core::SolverResult

mod action;

pub mod bisection;
pub mod newton;
pub mod secant;

pub use action::Action;
