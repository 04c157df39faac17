//! Newton root-finding and function inversion.

use super::{BisectionSolver, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Newton root finder and function inverter.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` for quadratic
/// convergence on smooth functions. Near-zero derivatives and non-finite
/// iterates are reported as structured errors instead of diverging
/// silently; [`NewtonSolver::invert_with_fallback`] degrades to bisection
/// when a Newton step is unusable.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use slicer_core::math::solvers::{NewtonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonSolver::new(SolverConfig::default());
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, df, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` using the explicit derivative `df`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find a root of
    /// * `df` - Derivative of `f`
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    pub fn find_root<F, G>(&self, f: F, df: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::from(1e-30).unwrap();

        for _ in 0..self.config.max_iterations {
            let f_val = f(x);
            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let df_val = df(x);
            if df_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            x = x - f_val / df_val;

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Solve `f(x) = target` given `f` and its derivative.
    ///
    /// Runs [`NewtonSolver::find_root`] on the shifted function
    /// `x ↦ f(x) - target`.
    ///
    /// # Example
    ///
    /// ```
    /// use slicer_core::math::solvers::NewtonSolver;
    ///
    /// // Invert the cumulative profile f(x) = x² on [0, ∞) at 0.25
    /// let solver = NewtonSolver::with_defaults();
    /// let x = solver.invert(|x: f64| x * x, |x| 2.0 * x, 0.25, 1.0).unwrap();
    /// assert!((x - 0.5).abs() < 1e-9);
    /// ```
    pub fn invert<F, G>(&self, f: F, df: G, target: T, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.find_root(|x| f(x) - target, df, x0)
    }

    /// Solve `f(x) = target`, falling back to bisection on `[a, b]` when
    /// the Newton iteration stalls on a near-zero derivative or leaves the
    /// finite range.
    ///
    /// Non-convergence within the iteration cap is still reported as an
    /// error; only derivative and instability failures trigger the
    /// fallback.
    pub fn invert_with_fallback<F, G>(
        &self,
        f: F,
        df: G,
        target: T,
        x0: T,
        a: T,
        b: T,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        match self.invert(&f, df, target, x0) {
            Ok(x) => Ok(x),
            Err(SolverError::DerivativeNearZero { .. })
            | Err(SolverError::NumericalInstability(_)) => {
                let bisection = BisectionSolver::new(self.config);
                bisection.find_root(|x| f(x) - target, a, b)
            }
            Err(e) => Err(e),
        }
    }
}
