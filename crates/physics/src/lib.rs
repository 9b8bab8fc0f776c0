//! Physical equations solved with `rootfind`.
//!
//! - [`quantum_well`]: bound-state energies of a finite square well
//! - [`lagrange`]: the L1 point of a two-body system

pub mod constants;
mod error;
pub mod lagrange;
pub mod quantum_well;

pub use error::Error;
pub use lagrange::L1Equation;
pub use quantum_well::{EnergyLevel, ParityCase, ParitySelector, SquareWell};
