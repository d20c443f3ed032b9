//! Approximate equality via the [`approx`] crate.
//!
//! Compound types are considered *equal* if all of their elements are, using the same tolerance
//! for every element.
//!
//! ```
//! # use uu_linalg::*;
//! use approx::assert_relative_eq;
//!
//! let v = vec3(0.1f32 + 0.2, 1.0, 2.0);
//! assert_relative_eq!(v, vec3(0.3, 1.0, 2.0));
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Angle, AngleUnit, Matrix, Vector};

macro_rules! approx_impls {
    ([$($params:tt)*] $ty:ty, $elems:ident) => {
        impl<T: AbsDiffEq, $($params)*> AbsDiffEq for $ty
        where
            T::Epsilon: Clone,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.$elems()
                    .iter()
                    .zip(other.$elems())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
            }
        }

        impl<T: RelativeEq, $($params)*> RelativeEq for $ty
        where
            T::Epsilon: Clone,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.$elems()
                    .iter()
                    .zip(other.$elems())
                    .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
            }
        }

        impl<T: UlpsEq, $($params)*> UlpsEq for $ty
        where
            T::Epsilon: Clone,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.$elems()
                    .iter()
                    .zip(other.$elems())
                    .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
            }
        }
    };
}

approx_impls!([const N: usize] Vector<T, N>, as_slice);
approx_impls!([const N: usize, U: AngleUnit] Angle<T, N, U>, as_slice);
approx_impls!([const R: usize, const C: usize] Matrix<T, R, C>, as_flat_slice);

#[cfg(test)]
mod tests {
    use approx::{
        abs_diff_eq, assert_abs_diff_eq, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
        relative_eq,
    };

    use crate::{vec2, Ang1f, Degrees, Mat2f, Vec2f};

    #[test]
    fn vector() {
        assert_relative_eq!(vec2(1.0, 2.0), vec2(1.0 + f32::EPSILON, 2.0));
        assert_relative_ne!(vec2(1.0, 2.0), vec2(1.0, 2.1));
        assert_abs_diff_eq!(Vec2f::X, vec2(1.05, -0.05), epsilon = 0.1);
        assert!(!abs_diff_eq!(Vec2f::X, vec2(1.05, -0.2), epsilon = 0.1));
        assert_ulps_eq!(vec2(1.0f64, 0.5), vec2(1.0, 0.5));
    }

    #[test]
    fn nan_never_matches() {
        assert!(!relative_eq!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0)));
    }

    #[test]
    fn matrix() {
        let a = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.000001]]);
        assert_relative_eq!(a, b, epsilon = 1e-5);
        assert!(!relative_eq!(a, b * 2.0));
    }

    #[test]
    fn angle() {
        let a = Ang1f::<Degrees>::new(90.0);
        assert_abs_diff_eq!(a, Ang1f::new(90.0001), epsilon = 1e-3);
    }
}
