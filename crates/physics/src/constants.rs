//! Physical constants in SI units.

/// Reduced Planck constant (J·s).
pub const HBAR: f64 = 1.054_571_8e-34;

/// Electron rest mass (kg).
pub const ELECTRON_MASS: f64 = 9.1094e-31;

/// Joules per electronvolt.
pub const JOULES_PER_EV: f64 = 1.602_176_620_8e-19;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.674e-11;

/// Earth mass (kg).
pub const EARTH_MASS: f64 = 5.974e24;

/// Moon mass (kg).
pub const MOON_MASS: f64 = 7.348e22;

/// Mean Earth–Moon distance (m).
pub const EARTH_MOON_DISTANCE: f64 = 3.844e8;

/// Lunar orbital angular velocity (rad/s).
pub const MOON_ANGULAR_VELOCITY: f64 = 2.662e-6;
