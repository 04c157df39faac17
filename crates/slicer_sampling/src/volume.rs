//! Uniform sampling inside unit volumes.
//!
//! These samplers seed the optimiser's initial point set. Both take an
//! explicit [`SliceRng`] so the caller controls seeding and stream
//! ownership.

use crate::rng::SliceRng;
use slicer_core::types::VecN;

/// Draw a point uniformly inside the solid unit ball in `R^dim`.
///
/// A normalised Gaussian vector gives a uniform direction; scaling it by
/// `U^(1/dim)` with `U ~ Uniform(0,1)` compensates for the volume element
/// growing as `r^dim`, making the distribution uniform over the ball's
/// volume rather than concentrated near the surface.
///
/// # Panics
///
/// Panics if `dim == 0`.
///
/// # Examples
///
/// ```rust
/// use slicer_sampling::rng::SliceRng;
/// use slicer_sampling::volume::sample_in_ball;
///
/// let mut rng = SliceRng::from_seed(42);
/// let p = sample_in_ball(3, &mut rng);
/// assert!(p.norm() <= 1.0);
/// ```
pub fn sample_in_ball(dim: usize, rng: &mut SliceRng) -> VecN<f64> {
    assert!(dim > 0, "dimension must be positive");

    let mut components = vec![0.0; dim];
    rng.fill_normal(&mut components);
    let mut v = VecN::from_vec(components).normalized();

    let radius = rng.gen_uniform().powf(1.0 / dim as f64);
    v.scale(radius);
    v
}

/// Draw a point uniformly inside the unit hypercube `[0, 1)^dim`.
///
/// # Panics
///
/// Panics if `dim == 0`.
///
/// # Examples
///
/// ```rust
/// use slicer_sampling::rng::SliceRng;
/// use slicer_sampling::volume::sample_in_cube;
///
/// let mut rng = SliceRng::from_seed(42);
/// let p = sample_in_cube(4, &mut rng);
/// assert!(p.iter().all(|&c| (0.0..1.0).contains(&c)));
/// ```
pub fn sample_in_cube(dim: usize, rng: &mut SliceRng) -> VecN<f64> {
    assert!(dim > 0, "dimension must be positive");

    let mut components = vec![0.0; dim];
    rng.fill_uniform(&mut components);
    VecN::from_vec(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_points_inside_unit_ball() {
        let mut rng = SliceRng::from_seed(42);
        for dim in [1, 2, 3, 5] {
            for _ in 0..500 {
                let p = sample_in_ball(dim, &mut rng);
                assert_eq!(p.dim(), dim);
                assert!(p.norm() <= 1.0 + 1e-12, "norm {} escapes ball", p.norm());
            }
        }
    }

    #[test]
    fn test_ball_radius_power_is_uniform() {
        // r = U^(1/dim) implies r^dim ~ Uniform(0,1), so its sample mean
        // converges to 0.5.
        let mut rng = SliceRng::from_seed(7);
        let dim = 3;
        let n = 50_000;
        let mean: f64 = (0..n)
            .map(|_| sample_in_ball(dim, &mut rng).norm().powi(dim as i32))
            .sum::<f64>()
            / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean of norm^dim was {}", mean);
    }

    #[test]
    fn test_cube_components_in_half_open_range() {
        let mut rng = SliceRng::from_seed(1);
        for _ in 0..2_000 {
            let p = sample_in_cube(4, &mut rng);
            assert!(p.iter().all(|&c| (0.0..1.0).contains(&c)));
        }
    }

    #[test]
    fn test_reproducible_with_same_seed() {
        let mut a = SliceRng::from_seed(3);
        let mut b = SliceRng::from_seed(3);
        assert_eq!(sample_in_ball(2, &mut a), sample_in_ball(2, &mut b));
        assert_eq!(sample_in_cube(2, &mut a), sample_in_cube(2, &mut b));
    }

    #[test]
    #[should_panic(expected = "dimension must be positive")]
    fn test_ball_zero_dim_panics() {
        let mut rng = SliceRng::from_seed(0);
        let _ = sample_in_ball(0, &mut rng);
    }

    #[test]
    #[should_panic(expected = "dimension must be positive")]
    fn test_cube_zero_dim_panics() {
        let mut rng = SliceRng::from_seed(0);
        let _ = sample_in_cube(0, &mut rng);
    }
}
