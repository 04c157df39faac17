//! Periodicity-aware metrics on the unit torus.
//!
//! Points live in `[0,1)^d` with every axis wrapping at 0/1, so distances
//! must be measured as on a d-torus rather than a bounded box. This module
//! provides the two wrap-aware operations the optimisation loop scores
//! point sets with:
//!
//! - [`toroidal_difference`]: per-axis wrapped difference vector
//! - [`toroidal_distance`]: minimum-image Euclidean distance
//!
//! The two functions deliberately use *different* per-axis selection rules;
//! see [`toroidal_difference`] for the details.

mod toroidal;

pub use toroidal::{toroidal_difference, toroidal_distance};
