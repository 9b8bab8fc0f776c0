use crate::{Differentiable, Domain, Equation};

/// Marker for an [`EquationModel`] built without a derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDerivative;

/// A closure-backed equation with an optional derivative.
///
/// The derivative is part of the type: `EquationModel<F>` implements only
/// [`Equation`], while `EquationModel<F, D>` built with
/// [`EquationModel::with_derivative`] also implements [`Differentiable`].
/// Derivative-based solvers therefore reject models without one at compile
/// time.
///
/// ```
/// use rootfind_core::{Domain, EquationModel, evaluate, evaluate_derivative};
///
/// let model = EquationModel::new(|x: f64| x * x - 2.0, Domain::unbounded())
///     .with_derivative(|x: f64| 2.0 * x);
///
/// assert_eq!(evaluate(&model, 2.0), Ok(2.0));
/// assert_eq!(evaluate_derivative(&model, 2.0), Ok(4.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EquationModel<F, D = NoDerivative> {
    function: F,
    derivative: D,
    domain: Domain,
}

impl<F> EquationModel<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a model from `f` and the domain on which it is defined.
    pub fn new(function: F, domain: Domain) -> Self {
        Self {
            function,
            derivative: NoDerivative,
            domain,
        }
    }

    /// Attaches the derivative `f'`.
    pub fn with_derivative<D>(self, derivative: D) -> EquationModel<F, D>
    where
        D: Fn(f64) -> f64,
    {
        EquationModel {
            function: self.function,
            derivative,
            domain: self.domain,
        }
    }
}

impl<F, D> Equation for EquationModel<F, D>
where
    F: Fn(f64) -> f64,
{
    fn domain(&self) -> Domain {
        self.domain
    }

    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl<F, D> Differentiable for EquationModel<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}
