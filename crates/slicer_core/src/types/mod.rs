//! Shared value types for the slicing workspace.
//!
//! - [`VecN`]: dynamically-sized numeric vector used for both points on the
//!   periodic unit domain and unit-length projection directions
//! - [`SolverError`]: structured errors from root-finding solvers

mod error;
mod vector;

pub use error::SolverError;
pub use vector::VecN;
