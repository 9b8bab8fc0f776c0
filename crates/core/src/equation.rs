use crate::{Domain, DomainError};

/// A scalar equation `f(x) = 0` on a domain.
///
/// Implementors only provide the raw function; domain membership and
/// finiteness are enforced by [`evaluate`], which is what solvers call.
pub trait Equation {
    /// The interval on which [`Equation::value`] is defined.
    fn domain(&self) -> Domain;

    /// Computes `f(x)`.
    ///
    /// Only called with `x` inside [`Equation::domain`].
    fn value(&self, x: f64) -> f64;
}

/// An equation that also provides its first derivative.
pub trait Differentiable: Equation {
    /// Computes `f'(x)`.
    ///
    /// Only called with `x` inside [`Equation::domain`].
    fn derivative(&self, x: f64) -> f64;
}

impl<E: Equation + ?Sized> Equation for &E {
    fn domain(&self) -> Domain {
        (**self).domain()
    }

    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<E: Differentiable + ?Sized> Differentiable for &E {
    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

/// Evaluates `f(x)`, checking the domain and the result.
///
/// # Errors
///
/// Returns [`DomainError::OutsideDomain`] if `x` is not in the equation's
/// domain, or [`DomainError::NonFinite`] if `f(x)` is NaN or infinite.
pub fn evaluate<E: Equation + ?Sized>(equation: &E, x: f64) -> Result<f64, DomainError> {
    check_domain(equation, x)?;
    finite(x, equation.value(x))
}

/// Evaluates `f'(x)`, checking the domain and the result.
///
/// # Errors
///
/// Returns [`DomainError::OutsideDomain`] if `x` is not in the equation's
/// domain, or [`DomainError::NonFinite`] if `f'(x)` is NaN or infinite.
pub fn evaluate_derivative<E: Differentiable + ?Sized>(
    equation: &E,
    x: f64,
) -> Result<f64, DomainError> {
    check_domain(equation, x)?;
    finite(x, equation.derivative(x))
}

fn check_domain<E: Equation + ?Sized>(equation: &E, x: f64) -> Result<(), DomainError> {
    let domain = equation.domain();
    if domain.contains(x) {
        Ok(())
    } else {
        Err(DomainError::OutsideDomain { x, domain })
    }
}

fn finite(x: f64, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { x, value })
    }
}
