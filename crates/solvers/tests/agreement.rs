use approx::assert_relative_eq;

use rootfind_core::{ConvergenceCriteria, Domain, EquationModel, Failure};
use rootfind_solvers::{bisection, newton, secant};

/// f(x) = x³ - 2x - 5, Wallis's classic test equation (root ≈ 2.0946).
fn wallis() -> EquationModel<impl Fn(f64) -> f64, impl Fn(f64) -> f64> {
    EquationModel::new(|x: f64| x.powi(3) - 2.0 * x - 5.0, Domain::unbounded())
        .with_derivative(|x: f64| 3.0 * x * x - 2.0)
}

#[test]
fn solvers_agree_on_shared_equation() {
    let model = wallis();
    let criteria = ConvergenceCriteria::default();
    let tolerance = 10.0 * criteria.abs_tol();

    let bisected = bisection::solve_unobserved(
        &model,
        [2.0, 3.0],
        &bisection::Config::default().with_criteria(criteria),
    )
    .expect("valid bracket");
    let secant = secant::solve_unobserved(&model, 2.0, 3.0, &criteria).expect("finite guesses");
    let newton = newton::solve_unobserved(&model, 2.0, &criteria).expect("finite guess");

    for result in [bisected, secant, newton] {
        assert!(result.is_converged(), "{result:?}");
    }
    assert_relative_eq!(secant.root, bisected.root, epsilon = tolerance);
    assert_relative_eq!(newton.root, bisected.root, epsilon = tolerance);
    assert_relative_eq!(bisected.root, 2.094_551_481_542_327, epsilon = tolerance);
}

#[test]
fn square_root_of_two_agrees_across_solvers() {
    let model = EquationModel::new(|x: f64| x * x - 2.0, Domain::unbounded())
        .with_derivative(|x: f64| 2.0 * x);
    let criteria = ConvergenceCriteria::default();
    let tolerance = 10.0 * criteria.abs_tol();

    let bisected =
        bisection::solve_unobserved(&model, [0.0, 2.0], &bisection::Config::default())
            .expect("valid bracket");
    let secant = secant::solve_unobserved(&model, 1.0, 2.0, &criteria).expect("finite guesses");
    let newton = newton::solve_unobserved(&model, 1.0, &criteria).expect("finite guess");

    assert_relative_eq!(secant.root, bisected.root, epsilon = tolerance);
    assert_relative_eq!(newton.root, bisected.root, epsilon = tolerance);
}

#[test]
fn bisection_recovers_where_newton_fails() {
    let model = EquationModel::new(|x: f64| x.powi(3) - 8.0, Domain::unbounded())
        .with_derivative(|x: f64| 3.0 * x * x);
    let criteria = ConvergenceCriteria::default();

    let newton = newton::solve_unobserved(&model, 0.0, &criteria).expect("finite guess");
    let Some(Failure::ZeroDerivative { x }) = newton.failure() else {
        panic!("expected a zero derivative, got {newton:?}");
    };

    let fallback =
        bisection::solve_unobserved(&model, [x, 10.0], &bisection::Config::default())
            .expect("valid bracket");

    assert!(fallback.is_converged());
    assert_relative_eq!(fallback.root, 2.0, epsilon = 1e-8);
}

#[test]
fn repeated_solves_are_identical() {
    let model = wallis();
    let criteria = ConvergenceCriteria::default();
    let config = bisection::Config::default();

    assert_eq!(
        bisection::solve_unobserved(&model, [2.0, 3.0], &config),
        bisection::solve_unobserved(&model, [2.0, 3.0], &config),
    );
    assert_eq!(
        secant::solve_unobserved(&model, 2.0, 3.0, &criteria),
        secant::solve_unobserved(&model, 2.0, 3.0, &criteria),
    );
    assert_eq!(
        newton::solve_unobserved(&model, 2.0, &criteria),
        newton::solve_unobserved(&model, 2.0, &criteria),
    );
}
