//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Equation`] and [`Differentiable`]: a scalar function on a [`Domain`],
//!   optionally with its derivative
//! - [`EquationModel`]: a closure-backed equation
//! - [`evaluate`] / [`evaluate_derivative`]: checked evaluation that turns
//!   out-of-domain points and non-finite values into a [`DomainError`]
//! - [`ConvergenceCriteria`]: tolerances and iteration cap
//! - [`SolverResult`]: root estimate, iteration count, and [`Status`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod criteria;
mod domain;
mod equation;
mod error;
mod model;
mod observer;
mod result;

pub use criteria::{ConvergenceCriteria, CriteriaError};
pub use domain::{Bound, Domain};
pub use equation::{Differentiable, Equation, evaluate, evaluate_derivative};
pub use error::DomainError;
pub use model::{EquationModel, NoDerivative};
pub use observer::Observer;
pub use result::{Failure, SolverResult, Status};
