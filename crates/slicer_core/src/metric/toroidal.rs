//! Toroidal difference and distance on the periodic unit domain.

use crate::types::VecN;
use num_traits::Float;

/// Per-axis wrapped difference of two points on the unit torus.
///
/// For each axis `i`, with `raw = v1[i] - v2[i]`:
/// - if `raw + 1` lies in `[0, 1)`, the component becomes `raw + 1`;
/// - else if `raw - 1` lies in `[0, 1)`, it becomes `raw - 1`;
/// - otherwise it stays `raw`.
///
/// # Compatibility note
///
/// The half-open range test is asymmetric around zero: for points in
/// `[0,1)` it maps every negative raw difference to its representative in
/// `[0, 1)`, which is *not* always the minimum-image component. For a raw
/// difference of `-0.2` this returns `0.8` while [`toroidal_distance`]
/// measures `0.2` on that axis. Downstream consumers depend on this exact
/// rule, so it is kept as-is rather than unified with the distance rule.
///
/// # Panics
///
/// Panics if the two vectors have different dimensions.
///
/// # Examples
///
/// ```
/// use slicer_core::metric::toroidal_difference;
/// use slicer_core::types::VecN;
///
/// let a = VecN::from_vec(vec![0.1_f64]);
/// let b = VecN::from_vec(vec![0.95_f64]);
/// // raw = -0.85, raw + 1 = 0.15 lies in [0,1)
/// let d = toroidal_difference(&a, &b);
/// assert!((d[0] - 0.15).abs() < 1e-12);
/// ```
pub fn toroidal_difference<T: Float>(v1: &VecN<T>, v2: &VecN<T>) -> VecN<T> {
    assert_eq!(v1.dim(), v2.dim(), "dimension mismatch");

    let mut res = VecN::zeros(v1.dim());
    for i in 0..v1.dim() {
        let raw = v1[i] - v2[i];
        res[i] = raw;
        if raw + T::one() < T::one() && raw + T::one() >= T::zero() {
            res[i] = raw + T::one();
        }
        if raw - T::one() < T::one() && raw - T::one() >= T::zero() {
            res[i] = raw - T::one();
        }
    }
    res
}

/// Minimum-image Euclidean distance between two points on the unit torus.
///
/// For each axis the candidate among `{raw, raw + 1, raw - 1}` with the
/// smallest squared magnitude is kept (true minimum-image convention); the
/// result is the Euclidean norm of the selected components. This selection
/// rule differs from [`toroidal_difference`], which picks by range
/// membership instead of magnitude.
///
/// # Panics
///
/// Panics if the two vectors have different dimensions.
///
/// # Examples
///
/// ```
/// use slicer_core::metric::toroidal_distance;
/// use slicer_core::types::VecN;
///
/// let a = VecN::from_vec(vec![0.1_f64]);
/// let b = VecN::from_vec(vec![0.95_f64]);
/// // candidates {-0.85, 0.15, -1.85}: 0.15 has least magnitude
/// assert!((toroidal_distance(&a, &b) - 0.15).abs() < 1e-12);
/// ```
pub fn toroidal_distance<T: Float>(v1: &VecN<T>, v2: &VecN<T>) -> T {
    assert_eq!(v1.dim(), v2.dim(), "dimension mismatch");

    let mut res = VecN::zeros(v1.dim());
    for i in 0..v1.dim() {
        let raw = v1[i] - v2[i];
        res[i] = raw;
        if res[i] * res[i] > (raw + T::one()) * (raw + T::one()) {
            res[i] = raw + T::one();
        }
        if res[i] * res[i] > (raw - T::one()) * (raw - T::one()) {
            res[i] = raw - T::one();
        }
    }
    res.norm()
}
