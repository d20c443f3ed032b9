use std::{fmt, ops};

/// Types that support the trigonometric functions.
///
/// Integer types implement this by computing in [`f64`] and truncating the result.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes sine and cosine of `self` (in radians) at once.
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self` (the Y coordinate) and `x`.
    fn atan2(self, x: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;

    /// Computes `1 / sqrt(self)`.
    ///
    /// This is an exact reciprocal, not a fast approximation.
    fn inv_sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// The full scalar math surface used by [`Vector`], [`Angle`] and [`Matrix`].
///
/// Implemented for [`f32`], [`f64`] and the signed integer types. The "continuous" operations
/// behave as follows for integers:
///
/// - [`floor`], [`ceil`], [`trunc`] and [`round`] return the value unchanged.
/// - [`is_finite`] and [`is_normal`] are always `true`, [`is_nan`] and [`is_infinite`] always
///   `false`.
/// - Trigonometric, exponential and root functions are evaluated in [`f64`] and truncated toward
///   zero.
///
/// [`Vector`]: crate::Vector
/// [`Angle`]: crate::Angle
/// [`Matrix`]: crate::Matrix
/// [`floor`]: Scalar::floor
/// [`ceil`]: Scalar::ceil
/// [`trunc`]: Scalar::trunc
/// [`round`]: Scalar::round
/// [`is_finite`]: Scalar::is_finite
/// [`is_normal`]: Scalar::is_normal
/// [`is_nan`]: Scalar::is_nan
/// [`is_infinite`]: Scalar::is_infinite
pub trait Scalar:
    Number + ops::Rem<Output = Self> + PartialOrd + MinMax + Trig + Sqrt + fmt::Debug
{
    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    fn abs(self) -> Self;

    /// Returns whether `self` lies in `[-tolerance, tolerance]`.
    ///
    /// Unlike `self.abs() <= tolerance`, this does not overflow for the most negative integer.
    /// A negative or NaN `tolerance` contains nothing.
    fn is_within(self, tolerance: Self) -> bool {
        tolerance >= Self::ZERO && -tolerance <= self && self <= tolerance
    }

    /// Returns `-1`, `0` or `1` depending on the sign of `self`.
    ///
    /// Unlike [`f32::signum`], zero (of either sign) maps to zero.
    fn sign(self) -> Self {
        if self == Self::ZERO {
            Self::ZERO
        } else if self > Self::ZERO {
            Self::ONE
        } else {
            -Self::ONE
        }
    }

    /// Remainder of `self / rhs`, with the sign of `self` (C `fmod` semantics for floats).
    fn modulo(self, rhs: Self) -> Self {
        self % rhs
    }

    /// Linear interpolation from `self` toward `other`. `factor` is not clamped.
    fn lerp(self, other: Self, factor: Self) -> Self {
        self + (other - self) * factor
    }

    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn powf(self, exponent: Self) -> Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    fn round(self) -> Self;

    fn is_normal(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    /// Lossy conversion to [`f64`].
    fn to_f64(self) -> f64;
    /// Lossy conversion from [`f64`] (`as` semantics).
    fn from_f64(value: f64) -> Self;
}

/// Explicit numeric conversion (`as` semantics) between the built-in numeric types.
///
/// This is what [`Vector::cast`][crate::Vector::cast] and friends use to convert elementwise.
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! cast_impls {
    ($($from:ty),+) => {
        $(
            cast_impls!(@from $from => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
        )+
    };
    (@from $from:ty => $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
cast_impls!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, x: Self) -> Self {
                    self.atan2(x)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                fn inv_sqrt(self) -> Self {
                    1.0 / self.sqrt()
                }
            }

            impl Scalar for $types {
                const IS_FLOAT: bool = true;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn exp(self) -> Self {
                    self.exp()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }

                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn trunc(self) -> Self {
                    self.trunc()
                }

                fn round(self) -> Self {
                    self.round()
                }

                fn is_normal(self) -> bool {
                    self.is_normal()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                fn is_infinite(self) -> bool {
                    self.is_infinite()
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! signed_int_impls {
    ($($types:ty),+) => {
        $(
            impl Trig for $types {
                fn sin(self) -> Self {
                    (self as f64).sin() as Self
                }

                fn cos(self) -> Self {
                    (self as f64).cos() as Self
                }

                fn tan(self) -> Self {
                    (self as f64).tan() as Self
                }

                fn sin_cos(self) -> (Self, Self) {
                    let (sin, cos) = (self as f64).sin_cos();
                    (sin as Self, cos as Self)
                }

                fn asin(self) -> Self {
                    (self as f64).asin() as Self
                }

                fn acos(self) -> Self {
                    (self as f64).acos() as Self
                }

                fn atan(self) -> Self {
                    (self as f64).atan() as Self
                }

                fn atan2(self, x: Self) -> Self {
                    (self as f64).atan2(x as f64) as Self
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as Self
                }

                fn inv_sqrt(self) -> Self {
                    (1.0 / (self as f64).sqrt()) as Self
                }
            }

            impl Scalar for $types {
                const IS_FLOAT: bool = false;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn exp(self) -> Self {
                    (self as f64).exp() as Self
                }

                fn ln(self) -> Self {
                    (self as f64).ln() as Self
                }

                fn powf(self, exponent: Self) -> Self {
                    (self as f64).powf(exponent as f64) as Self
                }

                fn floor(self) -> Self {
                    self
                }

                fn ceil(self) -> Self {
                    self
                }

                fn trunc(self) -> Self {
                    self
                }

                fn round(self) -> Self {
                    self
                }

                fn is_normal(self) -> bool {
                    true
                }

                fn is_finite(self) -> bool {
                    true
                }

                fn is_nan(self) -> bool {
                    false
                }

                fn is_infinite(self) -> bool {
                    false
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )+
    };
}
signed_int_impls!(i8, i16, i32, i64, i128);
