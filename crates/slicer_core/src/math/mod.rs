//! Numerical computation modules.
//!
//! - [`solvers`]: Newton and bisection root finders, used to invert
//!   monotone profile functions
//! - [`utility`]: small numeric helpers (`clamp`, `sgn`)

pub mod solvers;
pub mod utility;
