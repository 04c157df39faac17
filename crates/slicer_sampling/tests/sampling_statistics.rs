//! Statistical verification of the sampling policies.
//!
//! These tests draw large batches and check the empirical behaviour the
//! generators are designed for:
//!
//! 1. **Branch mix in 2-D**: stratified vs axis-aligned frequencies
//! 2. **Norm laws**: unit directions, ball radius distribution
//! 3. **Stream semantics**: reproducibility and call-order dependence

use slicer_sampling::directions::{DirectionSampler, FIRST_AXIS_CUTOFF, STRATIFIED_FRACTION};
use slicer_sampling::rng::SliceRng;
use slicer_sampling::volume::{sample_in_ball, sample_in_cube};

/// Sample count for frequency estimates; binomial standard error at
/// p = 0.15 is about 0.001 here, so a 0.01 tolerance is generous.
const N: usize = 100_000;

#[test]
fn test_planar_branch_frequencies() {
    let mut sampler = DirectionSampler::new(2, 42);
    let batch = sampler.sample_batch(N);

    let mut axis_x = 0_usize;
    let mut axis_y = 0_usize;
    for dir in &batch {
        if dir[0] == 1.0 && dir[1] == 0.0 {
            axis_x += 1;
        } else if dir[0] == 0.0 && dir[1] == 1.0 {
            axis_y += 1;
        }
    }
    let stratified = N - axis_x - axis_y;

    let f_stratified = stratified as f64 / N as f64;
    let f_axis_x = axis_x as f64 / N as f64;
    let f_axis_y = axis_y as f64 / N as f64;

    assert!(
        (f_stratified - STRATIFIED_FRACTION).abs() < 0.01,
        "stratified fraction {} too far from {}",
        f_stratified,
        STRATIFIED_FRACTION
    );
    let axis_share = FIRST_AXIS_CUTOFF - STRATIFIED_FRACTION;
    assert!(
        (f_axis_x - axis_share).abs() < 0.01,
        "x-axis fraction {} too far from {}",
        f_axis_x,
        axis_share
    );
    assert!(
        (f_axis_y - axis_share).abs() < 0.01,
        "y-axis fraction {} too far from {}",
        f_axis_y,
        axis_share
    );
}

#[test]
fn test_all_directions_unit_norm() {
    for dim in [2, 3, 5, 10] {
        let mut sampler = DirectionSampler::new(dim, 7);
        for dir in sampler.sample_batch(5_000) {
            assert!(
                (dir.norm() - 1.0).abs() < 1e-9,
                "dim {} direction has norm {}",
                dim,
                dir.norm()
            );
        }
    }
}

#[test]
fn test_stratified_angles_cover_all_bins() {
    // With one jittered draw per angular bin at 70% rate, a large batch
    // must leave no quadrant of the circle empty.
    let mut sampler = DirectionSampler::new(2, 11);
    let batch = sampler.sample_batch(10_000);

    let mut quadrants = [0_usize; 4];
    for dir in &batch {
        let q = match (dir[0] >= 0.0, dir[1] >= 0.0) {
            (true, true) => 0,
            (false, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        };
        quadrants[q] += 1;
    }
    for (q, &count) in quadrants.iter().enumerate() {
        assert!(count > 1_000, "quadrant {} undersampled: {}", q, count);
    }
}

#[test]
fn test_ball_norm_power_uniform() {
    // r = U^(1/dim) implies norm^dim ~ Uniform(0,1): mean 1/2, second
    // moment 1/3.
    let mut rng = SliceRng::from_seed(3);
    let dim = 4;
    let powers: Vec<f64> = (0..N)
        .map(|_| sample_in_ball(dim, &mut rng).norm().powi(dim as i32))
        .collect();

    let mean = powers.iter().sum::<f64>() / N as f64;
    let second = powers.iter().map(|p| p * p).sum::<f64>() / N as f64;

    assert!((mean - 0.5).abs() < 0.005, "mean {}", mean);
    assert!((second - 1.0 / 3.0).abs() < 0.005, "second moment {}", second);
}

#[test]
fn test_ball_never_escapes() {
    let mut rng = SliceRng::from_seed(5);
    for _ in 0..20_000 {
        assert!(sample_in_ball(3, &mut rng).norm() <= 1.0 + 1e-12);
    }
}

#[test]
fn test_cube_components_half_open() {
    let mut rng = SliceRng::from_seed(8);
    for _ in 0..20_000 {
        let p = sample_in_cube(3, &mut rng);
        assert!(p.iter().all(|&c| (0.0..1.0).contains(&c)));
    }
}

#[test]
fn test_batches_depend_on_call_history_not_later_seeds() {
    // The engine is seeded once per sampler; a second batch is a pure
    // continuation of the stream. Two samplers with identical seeds and
    // call histories stay in lockstep, and there is no per-call seed that
    // could perturb the second batch.
    let mut a = DirectionSampler::new(2, 1234);
    let mut b = DirectionSampler::new(2, 1234);

    let first_a = a.sample_batch(500);
    let first_b = b.sample_batch(500);
    assert_eq!(first_a, first_b);
    assert_eq!(a.sample_batch(500), b.sample_batch(500));

    // Different call history, same seed: the later batch differs.
    let mut c = DirectionSampler::new(2, 1234);
    let _ = c.sample_batch(100);
    let mut d = DirectionSampler::new(2, 1234);
    let _ = d.sample_batch(500);
    assert_ne!(c.sample_batch(500), d.sample_batch(500));
}
