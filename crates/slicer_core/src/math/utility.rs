//! Small numeric helpers.

use num_traits::Float;

/// Restrict `v` to the closed interval `[min, max]`.
///
/// # Examples
///
/// ```
/// use slicer_core::math::utility::clamp;
///
/// assert_eq!(clamp(1.5_f64, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-0.2_f64, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.3_f64, 0.0, 1.0), 0.3);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(v: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "clamp bounds out of order");
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Sign of `val`: `-1`, `0`, or `1`.
///
/// NaN maps to `0` (neither comparison holds).
///
/// # Examples
///
/// ```
/// use slicer_core::math::utility::sgn;
///
/// assert_eq!(sgn(-3.2_f64), -1);
/// assert_eq!(sgn(0.0_f64), 0);
/// assert_eq!(sgn(7.0_f64), 1);
/// ```
#[inline]
pub fn sgn<T: Float>(val: T) -> i32 {
    (T::zero() < val) as i32 - (val < T::zero()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_clamp_below() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_above() {
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_at_bounds() {
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_integers() {
        assert_eq!(clamp(7, 0, 5), 5);
    }

    #[test]
    fn test_sgn_negative() {
        assert_eq!(sgn(-0.001_f64), -1);
    }

    #[test]
    fn test_sgn_zero() {
        assert_eq!(sgn(0.0_f64), 0);
        assert_eq!(sgn(-0.0_f64), 0);
    }

    #[test]
    fn test_sgn_positive() {
        assert_eq!(sgn(1e-300_f64), 1);
    }

    #[test]
    fn test_sgn_nan() {
        assert_eq!(sgn(f64::NAN), 0);
    }

    #[test]
    fn test_sgn_f32() {
        assert_eq!(sgn(-2.0_f32), -1);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_clamp_result_within_bounds(
                v in prop::num::f64::NORMAL,
                lo in -100.0..0.0_f64,
                hi in 0.0..100.0_f64
            ) {
                let c = clamp(v, lo, hi);
                prop_assert!(c >= lo && c <= hi);
            }

            #[test]
            fn test_sgn_matches_signum(v in prop::num::f64::NORMAL) {
                prop_assert_eq!(sgn(v), v.signum() as i32);
            }
        }
    }
}
