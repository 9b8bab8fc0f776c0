//! Bound states of a finite square well.
//!
//! Energies are found one level at a time by [`ParitySelector`], which picks
//! the even or odd quantization condition for each level and hands a
//! level-specific bracket to bisection.

mod equation;
mod parity;
mod selector;
mod well;


pub use equation::QuantizationEquation;
pub use parity::ParityCase;
pub use selector::{DEFAULT_EDGE_CLEARANCE, DEFAULT_MIN_ENERGY, EnergyLevel, ParitySelector};
pub use well::{Branches, SquareWell};
