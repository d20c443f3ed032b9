//! Uniform random sampling of scalars.
//!
//! All random fills in this crate take a caller-provided [`fastrand::Rng`]. Seed it with
//! [`fastrand::Rng::with_seed`] for reproducible results.

/// Scalars that can be drawn uniformly from a closed range.
pub trait Uniform: Sized {
    /// Draws a value from `[min, max]`.
    ///
    /// Floating-point draws cover `[min, max)` in practice; `max` is only hit when `min == max`.
    ///
    /// # Panics
    ///
    /// Integer implementations panic if `min > max`.
    fn sample(rng: &mut fastrand::Rng, min: Self, max: Self) -> Self;
}

macro_rules! uniform_int {
    ($($types:ident),+) => {
        $(
            impl Uniform for $types {
                fn sample(rng: &mut fastrand::Rng, min: Self, max: Self) -> Self {
                    rng.$types(min..=max)
                }
            }
        )+
    };
}
uniform_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! uniform_float {
    ($($types:ident),+) => {
        $(
            impl Uniform for $types {
                fn sample(rng: &mut fastrand::Rng, min: Self, max: Self) -> Self {
                    min + (max - min) * rng.$types()
                }
            }
        )+
    };
}
uniform_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_bounds() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            let f = f32::sample(&mut rng, -2.0, 3.0);
            assert!((-2.0..=3.0).contains(&f));
            let i = i32::sample(&mut rng, -5, 5);
            assert!((-5..=5).contains(&i));
        }
    }

    #[test]
    fn degenerate_range() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(f64::sample(&mut rng, 4.5, 4.5), 4.5);
        assert_eq!(u8::sample(&mut rng, 9, 9), 9);
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        for _ in 0..16 {
            assert_eq!(f64::sample(&mut a, 0.0, 1.0), f64::sample(&mut b, 0.0, 1.0));
        }
    }
}
