//! Root-finding solvers for numerical inversion.
//!
//! The optimisation pipeline occasionally needs to invert a monotone
//! profile function (evaluate `f^{-1}(v)` given `f` and its derivative).
//! This module supplies that operation with explicit convergence semantics:
//! a tolerance, an iteration cap, and a bracketing fallback, none of which
//! are left implicit.
//!
//! ## Available Solvers
//!
//! - [`NewtonSolver`]: fast quadratic convergence using derivatives, with
//!   [`NewtonSolver::invert`] for solving `f(x) = target`
//! - [`BisectionSolver`]: robust bracketing method, used directly or as the
//!   fallback in [`NewtonSolver::invert_with_fallback`]
//!
//! ## Configuration
//!
//! Both solvers take a [`SolverConfig`]:
//! - `tolerance`: convergence tolerance (default: 1e-10)
//! - `max_iterations`: maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use slicer_core::math::solvers::{NewtonSolver, SolverConfig};
//!
//! // Invert f(x) = x³ at target 8 (find 2)
//! let solver = NewtonSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x * x;
//! let df = |x: f64| 3.0 * x * x;
//!
//! let x = solver.invert(f, df, 8.0, 1.0).unwrap();
//! assert!((x - 2.0).abs() < 1e-9);
//! ```

mod bisection;
mod config;
mod newton;

pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton::NewtonSolver;
