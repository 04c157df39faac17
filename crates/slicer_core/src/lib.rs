//! # slicer_core: Geometry and Numerics Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! slicer_core is the bottom layer of the two-layer workspace, providing:
//! - Dynamically-sized numeric vectors over any float type (`types::vector`)
//! - Toroidal (periodic) difference and distance metrics (`metric`)
//! - Root-finding and function inversion solvers (`math::solvers`)
//! - Small numeric utilities: clamp, sign (`math::utility`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependency on the sampling layer and a minimal external
//! footprint:
//! - num-traits: traits for generic numerical computation
//! - thiserror: structured error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use slicer_core::metric::toroidal_distance;
//! use slicer_core::types::VecN;
//!
//! // Points on the periodic unit interval: 0.1 and 0.95 are 0.15 apart
//! // once the domain wraps at 0/1.
//! let a = VecN::from_vec(vec![0.1]);
//! let b = VecN::from_vec(vec![0.95]);
//! let d = toroidal_distance(&a, &b);
//! assert!((d - 0.15_f64).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod metric;
pub mod types;
