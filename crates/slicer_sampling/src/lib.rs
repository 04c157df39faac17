//! # slicer_sampling: Stochastic Generation for Sliced Optimisation
//!
//! ## Layer 2 (Sampling) Role
//!
//! slicer_sampling sits on top of `slicer_core` and provides the random
//! machinery a slicing-based point-set optimiser consumes each iteration:
//!
//! - Seeded RNG wrapper over `rand`/`rand_distr` (`rng`)
//! - Stratified projection-direction generation (`directions`)
//! - Uniform sampling inside the unit ball and unit hypercube (`volume`)
//! - Toroidal tile export to a C header (`export`)
//!
//! ## Ownership of Randomness
//!
//! There is no process-global engine. Every generator either owns a
//! [`SliceRng`] (seeded exactly once at construction) or borrows one
//! mutably per call, so reproducibility is a property of the instance and
//! concurrent misuse is rejected by the borrow checker.
//!
//! ## Usage Example
//!
//! ```rust
//! use slicer_sampling::directions::DirectionSampler;
//! use slicer_sampling::rng::SliceRng;
//! use slicer_sampling::volume::sample_in_cube;
//!
//! // Seed the initial point set
//! let mut rng = SliceRng::from_seed(7);
//! let points: Vec<_> = (0..32).map(|_| sample_in_cube(2, &mut rng)).collect();
//!
//! // Draw projection axes for one optimisation pass
//! let mut sampler = DirectionSampler::new(2, 42);
//! for dir in sampler.sample_batch(64) {
//!     assert!((dir.norm() - 1.0).abs() < 1e-9);
//! }
//! # let _ = points;
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod directions;
pub mod export;
pub mod rng;
pub mod volume;

pub use rng::SliceRng;
