use uom::si::{
    energy::electronvolt,
    f64::{Energy, Length, Mass},
    length::meter,
    mass::kilogram,
};

use crate::{
    constants::{ELECTRON_MASS, HBAR, JOULES_PER_EV},
    error::{Error, positive},
};

/// A one-dimensional finite square potential well.
///
/// Bound-state energies `E` (measured from the bottom of the well, in eV)
/// satisfy one of two quantization conditions, written in terms of the
/// [`Branches`] of the well at `E`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareWell {
    depth: Energy,
    width: Length,
    mass: Mass,
}

/// The three curves whose crossings give the bound-state energies.
///
/// - `y1 = tan(k w / 2)` with `k = sqrt(2 m E) / ħ`
/// - `y2 = sqrt((V - E) / E)`, matched by even states
/// - `y3 = -sqrt(E / (V - E))`, matched by odd states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branches {
    pub y1: f64,
    pub y2: f64,
    pub y3: f64,
}

impl SquareWell {
    /// Creates a well of the given depth and width holding a particle of
    /// the given mass.
    ///
    /// # Errors
    ///
    /// Returns an error if any quantity is not finite and positive.
    pub fn new(depth: Energy, width: Length, mass: Mass) -> Result<Self, Error> {
        positive("well depth", depth.get::<electronvolt>())?;
        positive("well width", width.get::<meter>())?;
        positive("particle mass", mass.get::<kilogram>())?;
        Ok(Self { depth, width, mass })
    }

    /// Creates a well holding an electron.
    ///
    /// # Errors
    ///
    /// Returns an error if the depth or width is not finite and positive.
    pub fn electron(depth: Energy, width: Length) -> Result<Self, Error> {
        Self::new(depth, width, Mass::new::<kilogram>(ELECTRON_MASS))
    }

    #[must_use]
    pub fn depth(&self) -> Energy {
        self.depth
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Well depth in eV, the unit the quantization equations are solved in.
    #[must_use]
    pub fn depth_ev(&self) -> f64 {
        self.depth.get::<electronvolt>()
    }

    /// Evaluates the three branch curves at `energy` (eV).
    ///
    /// Values are raw IEEE results: outside `(0, V)` or at a pole of `tan`
    /// they may be NaN or infinite.
    #[must_use]
    pub fn branches(&self, energy: f64) -> Branches {
        let v = self.depth_ev();
        Branches {
            y1: self.half_phase(energy).tan(),
            y2: ((v - energy) / energy).sqrt(),
            y3: -(energy / (v - energy)).sqrt(),
        }
    }

    /// Returns `k w / 2` at `energy` (eV).
    #[must_use]
    pub fn half_phase(&self, energy: f64) -> f64 {
        let joules = energy * JOULES_PER_EV;
        let k = (2.0 * self.mass.get::<kilogram>() * joules).sqrt() / HBAR;
        0.5 * k * self.width.get::<meter>()
    }

    /// Inverse of [`SquareWell::half_phase`]: the energy (eV) at which
    /// `k w / 2` equals `phase`.
    #[must_use]
    pub fn energy_at_half_phase(&self, phase: f64) -> f64 {
        let k = 2.0 * phase / self.width.get::<meter>();
        let joules = (HBAR * k).powi(2) / (2.0 * self.mass.get::<kilogram>());
        joules / JOULES_PER_EV
    }
}
