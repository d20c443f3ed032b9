//! Free-standing scalar math functions.
//!
//! These are thin wrappers around the [`Scalar`], [`Trig`], [`Sqrt`] and [`MinMax`] traits, for
//! call sites that read better in function form (`math::clamp(x, lo, hi)`).

use crate::{AngleUnit, Degrees, MinMax, Scalar, Sqrt, Trig};

/// Mathematical constants in single and double precision.
pub mod consts {
    /// Constants for [`f32`].
    pub mod f32 {
        pub const PI: f32 = std::f32::consts::PI;
        pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;
        pub const E: f32 = std::f32::consts::E;
        /// Multiply a value in radians by this to obtain degrees.
        pub const RAD_TO_DEG: f32 = 180.0 / PI;
        /// Multiply a value in degrees by this to obtain radians.
        pub const DEG_TO_RAD: f32 = PI / 180.0;
    }

    /// Constants for [`f64`].
    pub mod f64 {
        pub const PI: f64 = std::f64::consts::PI;
        pub const INV_PI: f64 = std::f64::consts::FRAC_1_PI;
        pub const E: f64 = std::f64::consts::E;
        /// Multiply a value in radians by this to obtain degrees.
        pub const RAD_TO_DEG: f64 = 180.0 / PI;
        /// Multiply a value in degrees by this to obtain radians.
        pub const DEG_TO_RAD: f64 = PI / 180.0;
    }
}

/// Returns `-1`, `0` or `1` depending on the sign of `val`.
#[inline]
pub fn sign<T: Scalar>(val: T) -> T {
    val.sign()
}

#[inline]
pub fn abs<T: Scalar>(val: T) -> T {
    val.abs()
}

#[inline]
pub fn min<T: MinMax>(a: T, b: T) -> T {
    a.min(b)
}

#[inline]
pub fn max<T: MinMax>(a: T, b: T) -> T {
    a.max(b)
}

/// Returns the smallest value in `vals`, or [`None`] if it is empty.
///
/// # Examples
///
/// ```
/// # use uu_linalg::math;
/// assert_eq!(math::min_of(&[4, -2, 9]), Some(-2));
/// assert_eq!(math::min_of::<f32>(&[]), None);
/// ```
pub fn min_of<T: MinMax + Copy>(vals: &[T]) -> Option<T> {
    vals.iter().copied().reduce(MinMax::min)
}

/// Returns the largest value in `vals`, or [`None`] if it is empty.
///
/// # Examples
///
/// ```
/// # use uu_linalg::math;
/// assert_eq!(math::max_of(&[4.0, -2.0, 9.5]), Some(9.5));
/// ```
pub fn max_of<T: MinMax + Copy>(vals: &[T]) -> Option<T> {
    vals.iter().copied().reduce(MinMax::max)
}

#[inline]
pub fn clamp<T: MinMax>(x: T, min: T, max: T) -> T {
    x.clamp(min, max)
}

/// Linearly interpolates between `min` and `max`. `factor` is not clamped.
#[inline]
pub fn lerp<T: Scalar>(min: T, max: T, factor: T) -> T {
    min.lerp(max, factor)
}

/// Remainder with the sign of the dividend (`fmod` for floats, `%` for integers).
///
/// # Panics
///
/// Panics for integer types if `b` is zero.
#[inline]
pub fn modulo<T: Scalar>(a: T, b: T) -> T {
    a.modulo(b)
}

#[inline]
pub fn sin<T: Trig>(val: T) -> T {
    val.sin()
}

#[inline]
pub fn cos<T: Trig>(val: T) -> T {
    val.cos()
}

#[inline]
pub fn tan<T: Trig>(val: T) -> T {
    val.tan()
}

/// Returns `(sin(val), cos(val))`.
#[inline]
pub fn sin_cos<T: Trig>(val: T) -> (T, T) {
    val.sin_cos()
}

#[inline]
pub fn asin<T: Trig>(val: T) -> T {
    val.asin()
}

#[inline]
pub fn acos<T: Trig>(val: T) -> T {
    val.acos()
}

#[inline]
pub fn atan<T: Trig>(val: T) -> T {
    val.atan()
}

#[inline]
pub fn atan2<T: Trig>(y: T, x: T) -> T {
    y.atan2(x)
}

#[inline]
pub fn sqrt<T: Sqrt>(val: T) -> T {
    val.sqrt()
}

#[inline]
pub fn inv_sqrt<T: Sqrt>(val: T) -> T {
    val.inv_sqrt()
}

#[inline]
pub fn exp<T: Scalar>(val: T) -> T {
    val.exp()
}

/// Natural logarithm.
#[inline]
pub fn ln<T: Scalar>(val: T) -> T {
    val.ln()
}

#[inline]
pub fn pow<T: Scalar>(a: T, b: T) -> T {
    a.powf(b)
}

#[inline]
pub fn floor<T: Scalar>(val: T) -> T {
    val.floor()
}

#[inline]
pub fn ceil<T: Scalar>(val: T) -> T {
    val.ceil()
}

#[inline]
pub fn trunc<T: Scalar>(val: T) -> T {
    val.trunc()
}

#[inline]
pub fn round<T: Scalar>(val: T) -> T {
    val.round()
}

#[inline]
pub fn is_normal<T: Scalar>(val: T) -> bool {
    val.is_normal()
}

#[inline]
pub fn is_finite<T: Scalar>(val: T) -> bool {
    val.is_finite()
}

#[inline]
pub fn is_nan<T: Scalar>(val: T) -> bool {
    val.is_nan()
}

#[inline]
pub fn is_inf<T: Scalar>(val: T) -> bool {
    val.is_infinite()
}

/// Computes `sqrt(v₀² + v₁² + …)` without undue overflow or underflow.
///
/// Each value is scaled by the largest magnitude before squaring. Integer inputs are evaluated in
/// [`f64`]. Returns zero for an empty slice or if all values are zero.
///
/// # Examples
///
/// ```
/// # use uu_linalg::math;
/// assert_eq!(math::hypot(&[3.0, 4.0]), 5.0);
/// assert_eq!(math::hypot(&[3, -4]), 5);
/// assert_eq!(math::hypot(&[1e300, 1e300]), 1e300 * 2.0f64.sqrt());
/// ```
pub fn hypot<T: Scalar>(vals: &[T]) -> T {
    let largest = vals
        .iter()
        .map(|v| v.to_f64().abs())
        .fold(0.0, f64::max);
    if largest == 0.0 {
        return T::ZERO;
    }

    if T::IS_FLOAT {
        let largest = T::from_f64(largest);
        let sum = vals.iter().fold(T::ZERO, |acc, &v| {
            let scaled = v / largest;
            acc + scaled * scaled
        });
        largest * sum.sqrt()
    } else {
        let sum: f64 = vals
            .iter()
            .map(|v| {
                let scaled = v.to_f64() / largest;
                scaled * scaled
            })
            .sum();
        T::from_f64(largest * sum.sqrt())
    }
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn rad_to_deg<T: Scalar>(angle: T) -> T {
    Degrees::from_radians(angle)
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn deg_to_rad<T: Scalar>(angle: T) -> T {
    Degrees::to_radians(angle)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn min_max_clamp() {
        assert_eq!(min(3, -1), -1);
        assert_eq!(max(3.0, -1.0), 3.0);
        assert_eq!(clamp(12, 0, 10), 10);
        assert_eq!(clamp(-0.5f32, 0.0, 1.0), 0.0);
        assert_eq!(max_of(&[1u8, 9, 3]), Some(9));
        assert_eq!(min_of::<i32>(&[]), None);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn angle_units() {
        assert_relative_eq!(rad_to_deg(consts::f64::PI), 180.0);
        assert_relative_eq!(deg_to_rad(90.0f32), consts::f32::PI / 2.0);
    }

    #[test]
    fn inv_sqrt_is_exact() {
        assert_eq!(inv_sqrt(4.0f64), 0.5);
        assert_eq!(inv_sqrt(16.0f32), 0.25);
    }

    #[test]
    fn hypot_handles_zero() {
        assert_eq!(hypot::<f32>(&[]), 0.0);
        assert_eq!(hypot(&[0.0, -0.0]), 0.0);
        assert_eq!(hypot(&[0, 0, 0]), 0);
    }

    #[test]
    fn hypot_extremes() {
        assert_eq!(hypot(&[i32::MIN, 0]), i32::MIN.saturating_neg());
        assert_relative_eq!(hypot(&[3e19f32, 4e19]), 5e19);
        assert_relative_eq!(hypot(&[3e-40f32, 4e-40]), 5e-40, max_relative = 1e-5);
    }

    #[test]
    fn hypot_many() {
        assert_relative_eq!(hypot(&[1.0f64, 2.0, 2.0]), 3.0);
        assert_relative_eq!(hypot(&[-2.0f32, 3.0, 6.0]), 7.0);
    }
}
