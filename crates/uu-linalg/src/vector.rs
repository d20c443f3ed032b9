use std::{array, fmt};

use crate::{
    error::{check_len, Error, Result},
    math,
    traits::{Number, Sqrt},
    Angle, AngleUnit, Cast, Mat2, MinMax, One, Scalar, Trig, Uniform, Zero,
};

mod ops;

/// Single-element vector.
pub type Vec1<T> = Vector<T, 1>;
/// Vector with 2 elements.
pub type Vec2<T> = Vector<T, 2>;
/// [`Vec2`] of [`f32`].
pub type Vec2f = Vec2<f32>;
/// [`Vec2`] of [`f64`].
pub type Vec2d = Vec2<f64>;
/// [`Vec2`] of [`i32`].
pub type Vec2i = Vec2<i32>;
/// Vector with 3 elements.
pub type Vec3<T> = Vector<T, 3>;
/// [`Vec3`] of [`f32`].
pub type Vec3f = Vec3<f32>;
/// [`Vec3`] of [`f64`].
pub type Vec3d = Vec3<f64>;
/// [`Vec3`] of [`i32`].
pub type Vec3i = Vec3<i32>;
/// Vector with 4 elements.
pub type Vec4<T> = Vector<T, 4>;
/// [`Vec4`] of [`f32`].
pub type Vec4f = Vec4<f32>;
/// [`Vec4`] of [`f64`].
pub type Vec4d = Vec4<f64>;
/// [`Vec4`] of [`i32`].
pub type Vec4i = Vec4<i32>;

/// An ordered tuple of `N` elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::cast`] converts every element of a vector with a different element type.
/// - [`Vector::from_slice`] copies from a flat buffer of exactly `N` elements.
/// - `From<[T; N]>` converts arrays, and `From<Vector<T, N>>` converts back.
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and for vectors with up to 4 dimensions
///   `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors along each axis.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, [`x()`][Vec4::x], [`y()`][Vec4::y], [`z()`][Vec4::z]
///   and [`w()`][Vec4::w] return elements by name, and the matching `set_*` methods replace them.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays and panic when out of bounds.
/// - [`Vector::get`] and [`Vector::get_mut`] are the checked variants and return [`Option`]s.
/// - [`Vector::get_unchecked`] skips the bounds check and is `unsafe`.
/// - [`Vector::as_slice`], [`Vector::as_array`] and [`Vector::copy_to_slice`] expose the elements
///   in order, element 0 first, for handing them to APIs that expect flat arrays.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when the element type `T` also
///   allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The zero vector.
    ///
    /// Every element is [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// Resets every element to 0.
    pub fn zero(&mut self) {
        *self = Self::ZERO;
    }
}

impl<T: Zero + One> Vector<T, 1> {
    /// The unit vector along +X.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// The unit vector along +X.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// The unit vector along +Y.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// The unit vector along +X.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along +Y.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along +Z.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// The unit vector along +X.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// The unit vector along +Y.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along +Z.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along +W.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Repeats `elem` in all `N` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v: Vec4i = Vector::splat(-3);
    /// assert_eq!(v, vec4(-3, -3, -3, -3));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with each index from `0` to `N - 1`.
    ///
    /// Same semantics as [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v: Vec3<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(v, [0usize, 1, 4]);
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from an array of its elements.
    ///
    /// Equivalent to the [`From`] impl, but usable in `const` contexts.
    #[inline]
    pub const fn from_array(elems: [T; N]) -> Self {
        Self(elems)
    }

    /// Copies a vector out of a flat buffer that must hold exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = Vec3f::from_slice(&[1.0, 2.0, 3.0])?;
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// assert!(Vec3f::from_slice(&[1.0, 2.0]).is_err());
    /// # Ok::<(), uu_linalg::Error>(())
    /// ```
    pub fn from_slice(slice: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        check_len(N, slice.len())?;
        Ok(Self::from_fn(|i| slice[i]))
    }

    /// Transforms every element with `f`, possibly changing the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = vec2(1.5f32, -2.0).map(f32::abs);
    /// assert_eq!(v, vec2(1.5, 2.0));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let pairs = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(pairs, vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Converts each element to the element type `U` (with `as` semantics).
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v: Vec3i = vec3(1.9f32, -2.5, 300.0).cast();
    /// assert_eq!(v, vec3(1, -2, 300));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Copies the first `M` elements into a shorter vector.
    ///
    /// `M` must not exceed `N`; this is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = vec4(1, 2, 3, 4).truncate_to::<3>();
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    pub fn truncate_to<const M: usize>(&self) -> Vector<T, M>
    where
        T: Copy,
    {
        const { assert!(M <= N, "cannot truncate a vector to a larger dimension") };
        Vector::from_fn(|i| self.0[i])
    }

    /// Borrows the elements as a fixed-size array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as a fixed-size array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mut v = vec2(4, 5);
    /// v.as_mut_slice()[0] = -1;
    /// assert_eq!(v, [-1, 5]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Copies the elements into `out`, which must hold exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mut buf = [0.0; 3];
    /// vec3(1.0, 2.0, 3.0).copy_to_slice(&mut buf)?;
    /// assert_eq!(buf, [1.0, 2.0, 3.0]);
    /// # Ok::<(), uu_linalg::Error>(())
    /// ```
    pub fn copy_to_slice(&self, out: &mut [T]) -> Result<()>
    where
        T: Copy,
    {
        check_len(N, out.len())?;
        out.copy_from_slice(&self.0);
        Ok(())
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        self.0.get_unchecked(index)
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        self.0.get_unchecked_mut(index)
    }

    /// Sum of the squared elements.
    ///
    /// Prefer this over [`Vector::length`] for comparisons, since it does not need a square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Euclidean length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec3(3.0, 4.0, 0.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns whether the length of `self` exceeds `len`, without computing a square root.
    pub fn is_length_greater_than(&self, len: T) -> bool
    where
        T: Number + PartialOrd,
    {
        self.length2() > len * len
    }

    /// Returns whether the length of `self` is below `len`, without computing a square root.
    pub fn is_length_less_than(&self, len: T) -> bool
    where
        T: Number + PartialOrd,
    {
        self.length2() < len * len
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn dist_to(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (other - self).length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec2(1, 1).dist_to2(vec2(4, 5)), 25);
    /// ```
    pub fn dist_to2(self, other: Self) -> T
    where
        T: Number,
    {
        (other - self).length2()
    }

    /// Scales the vector to unit length.
    ///
    /// Float vectors are first divided by their largest magnitude, so the result has unit length
    /// even when the squared length would overflow or underflow.
    ///
    /// The length of `self` must not be zero. This is only checked in debug builds; in release
    /// builds a zero-length float vector produces NaN elements. Use [`Vector::try_normalize`] when
    /// the input may be zero (eg. a velocity).
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = vec2(-8.0, 0.0).normalize();
    /// assert_eq!(v, vec2(-1.0, 0.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Scalar,
    {
        match self.unit_and_length() {
            Ok((unit, _)) => unit,
            Err(_) => {
                debug_assert!(false, "attempt to normalize a zero-length vector");
                self / T::ZERO
            }
        }
    }

    /// Divides this vector by its length, or reports [`Error::ZeroLength`] if the length is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Ok(vec2(0.0, -1.0)));
    /// assert_eq!(Vec3f::ZERO.try_normalize(), Err(Error::ZeroLength));
    /// ```
    pub fn try_normalize(self) -> Result<Self>
    where
        T: Scalar,
    {
        self.unit_and_length().map(|(unit, _)| unit)
    }

    /// Normalizes `self` in place and returns its previous length.
    ///
    /// A zero-length vector is left unchanged and [`Error::ZeroLength`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mut v = vec2(0.0, 3.0);
    /// assert_eq!(v.normalize_in_place(), Ok(3.0));
    /// assert_eq!(v, Vec2f::Y);
    /// ```
    pub fn normalize_in_place(&mut self) -> Result<T>
    where
        T: Scalar,
    {
        let (unit, len) = self.unit_and_length()?;
        *self = unit;
        Ok(len)
    }

    /// Returns the unit vector along `self` and the length of `self`.
    ///
    /// The length is computed by [`math::hypot`] and is infinite if it exceeds the range of `T`.
    fn unit_and_length(self) -> Result<(Self, T)>
    where
        T: Scalar,
    {
        let len = math::hypot(self.as_slice());
        if len == T::ZERO {
            log::debug!("rejecting normalization of zero-length vector");
            return Err(Error::ZeroLength);
        }
        if !T::IS_FLOAT {
            return Ok((self / len, len));
        }

        let largest = self.0.iter().fold(T::ZERO, |acc, elem| acc.max(elem.abs()));
        let scaled = self.map(|elem| elem / largest);
        Ok((scaled / scaled.length(), len))
    }

    /// Sum of the element-wise products.
    ///
    /// The sign tells whether the vectors point into the same half-space (positive), are
    /// perpendicular (zero) or point away from each other (negative).
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec3(2, -1, 4).dot(vec3(3, 2, 1)), 8);
    /// assert_eq!(Vec2i::X.dot(Vec2i::Y), 0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Unsigned angle between `self` and `other` in radians, in range `[0, π]`.
    ///
    /// The result is meaningless if either vector has zero length.
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Per-element minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// // NaN elements lose against numbers.
    /// let v = vec2(f32::NAN, 1.0).min(vec2(0.5, f32::INFINITY));
    /// assert_eq!(v, vec2(0.5, 1.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Per-element maximum.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps each element into `[min[i], max[i]]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = vec3(-1.0, 0.5, 7.0);
    /// assert_eq!(v.clamp(Vec3f::ZERO, Vector::splat(1.0)), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `factor` is not clamped, so values outside `0..=1` extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.5), vec2(5.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(20.0, 30.0));
    /// ```
    pub fn lerp(self, other: Self, factor: T) -> Self
    where
        T: Scalar,
    {
        Self::from_fn(|i| self[i].lerp(other[i], factor))
    }

    /// Moves `self` toward `other` by `factor`, like [`Vector::lerp`].
    pub fn lerp_in_place(&mut self, other: Self, factor: T)
    where
        T: Scalar,
    {
        *self = self.lerp(other, factor);
    }

    /// Returns whether every element lies within the closed interval given by the corresponding
    /// elements of `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let (min, max) = (vec2(0, 0), vec2(10, 5));
    /// assert!(vec2(10, 0).within_aabb(min, max));
    /// assert!(!vec2(3, 6).within_aabb(min, max));
    /// ```
    pub fn within_aabb(&self, min: Self, max: Self) -> bool
    where
        T: PartialOrd,
    {
        (0..N).all(|i| min[i] <= self[i] && self[i] <= max[i])
    }

    /// Flips the sign of every element.
    pub fn negate(&mut self)
    where
        T: Number,
    {
        *self = -*self;
    }

    /// Returns whether the magnitude of every element is at most `tolerance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert!(vec2(0.001, -0.002).is_zero(0.01));
    /// assert!(!vec2(0.001, -0.2).is_zero(0.01));
    /// assert!(Vec3i::ZERO.is_zero(0));
    /// ```
    pub fn is_zero(&self, tolerance: T) -> bool
    where
        T: Scalar,
    {
        self.0.iter().all(|elem| elem.is_within(tolerance))
    }

    /// Overwrites each element with an independent uniform draw from `[min[i], max[i]]`.
    ///
    /// # Panics
    ///
    /// For integer element types, panics if any `min[i] > max[i]`.
    pub fn randomize(&mut self, min: Self, max: Self, rng: &mut fastrand::Rng)
    where
        T: Uniform + Copy,
    {
        for i in 0..N {
            self[i] = T::sample(rng, min[i], max[i]);
        }
        log::trace!("randomized {N}-element vector");
    }
}

macro_rules! named_elements {
    ($n:literal: $($get:ident, $set:ident => $index:literal);+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Returns element ", stringify!($index), " (`", stringify!($get), "`).")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.0[$index]
                }

                #[doc = concat!("Replaces element ", stringify!($index), " (`", stringify!($get), "`).")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.0[$index] = value;
                }
            )+
        }
    };
}
named_elements!(1: x, set_x => 0);
named_elements!(2: x, set_x => 0; y, set_y => 1);
named_elements!(3: x, set_x => 0; y, set_y => 1; z, set_z => 2);
named_elements!(4: x, set_x => 0; y, set_y => 1; z, set_z => 2; w, set_w => 3);

impl<T> Vector<T, 1> {
    /// Adds a Y component.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, value].into()
    }
}

impl<T> Vector<T, 2> {
    /// Drops the Y component.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, ..] = self.into_array();
        [x].into()
    }

    /// Adds a Z component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(vec2(7, 8).extend(9), vec3(7, 8, 9));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Turns the vector clockwise by `angle` radians.
    ///
    /// Assumes +X points right and +Y points up.
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Turns the vector counterclockwise by `angle` radians.
    ///
    /// Assumes +X points right and +Y points up.
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Rotates `self` counterclockwise by `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = Vec2f::X.rotated(Ang1f::<Degrees>::new(90.0));
    /// assert!((v - Vec2f::Y).is_zero(1e-6));
    /// ```
    pub fn rotated<U: AngleUnit>(self, angle: Angle<T, 1, U>) -> Self
    where
        T: Scalar,
    {
        self.rotate_counterclockwise(angle.to_radians().value())
    }

    /// Rotates `self` counterclockwise by `angle`, in place.
    pub fn rotate_in_place<U: AngleUnit>(&mut self, angle: Angle<T, 1, U>)
    where
        T: Scalar,
    {
        *self = self.rotated(angle);
    }

    /// Converts this direction into the angle it forms with the X axis (counterclockwise).
    ///
    /// This is the inverse of [`Angle::forward`] for one-component angles. Returns
    /// [`Error::ZeroLength`] for the zero vector, which has no direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a: Ang1f<Degrees> = vec2(0.0, 5.0).to_angle()?;
    /// assert!((a.value() - 90.0).abs() < 1e-4);
    /// # Ok::<(), uu_linalg::Error>(())
    /// ```
    pub fn to_angle<U: AngleUnit>(self) -> Result<Angle<T, 1, U>>
    where
        T: Scalar,
    {
        let dir = self.try_normalize()?;
        Ok(Angle::from_radians([dir.y().atan2(dir.x())]))
    }

    /// Signed clockwise angle in radians that turns `self` onto `other`.
    ///
    /// Assumes +X points right and +Y points up. With +Y pointing down, swap the operands.
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// 2D cross product: `self.x * other.y - self.y * other.x`.
    ///
    /// Positive when `other` lies counterclockwise of `self`.
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z()
    }
}

impl<T> Vector<T, 3> {
    /// Drops the Z component.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Adds a W component.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Right-handed cross product.
    ///
    /// The result is perpendicular to both operands and follows the right-hand rule, so swapping
    /// the operands negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Rotates `self` by the yaw/pitch/roll rotation described by `angle`.
    ///
    /// The X axis is mapped onto [`Angle::forward`], the Y axis onto the left vector (the negated
    /// [`Angle::right`]) and the Z axis onto [`Angle::up`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let angle = Ang3f::<Degrees>::new(30.0, 45.0, 10.0);
    /// let v = Vec3f::X.rotated(angle);
    /// assert!((v - angle.forward()).is_zero(1e-6));
    /// ```
    pub fn rotated<U: AngleUnit>(self, angle: Angle<T, 3, U>) -> Self
    where
        T: Scalar,
    {
        angle.to_matrix() * self
    }

    /// Rotates `self` by `angle`, in place.
    pub fn rotate_in_place<U: AngleUnit>(&mut self, angle: Angle<T, 3, U>)
    where
        T: Scalar,
    {
        *self = self.rotated(angle);
    }

    /// Converts this direction into pitch and yaw angles (roll is always zero).
    ///
    /// The pitch is the elevation above the XY plane (`asin(z)` of the normalized vector), the yaw
    /// is the counterclockwise angle from the X axis in the XY plane (`atan2(y, x)`). This is the
    /// inverse of [`Angle::forward`]. Returns [`Error::ZeroLength`] for the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a: Ang3d<Degrees> = vec3(0.0, 0.0, 2.0).to_angle()?;
    /// assert!((a.pitch() - 90.0).abs() < 1e-9);
    /// # Ok::<(), uu_linalg::Error>(())
    /// ```
    pub fn to_angle<U: AngleUnit>(self) -> Result<Angle<T, 3, U>>
    where
        T: Scalar,
    {
        let dir = self.try_normalize()?;
        // Rounding can push |z| slightly past 1, where `asin` is undefined.
        let pitch = dir.z().clamp(-T::ONE, T::ONE).asin();
        let yaw = dir.y().atan2(dir.x());
        Ok(Angle::from_radians([pitch, yaw, T::ZERO]))
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Shorthand for a [`Vec1`] holding `x`.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Shorthand for a [`Vec2`] holding `x` and `y`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for a [`Vec3`] holding `x`, `y` and `z`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for a [`Vec4`] holding `x`, `y`, `z` and `w`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{Ang1f, Ang3f, Degrees, Radians};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::Y.y(), 1.0);
        assert_eq!(Vec3f::Y.z(), 0.0);
        assert_eq!(Vec4f::W.w(), 1.0);

        let mut v = vec2(0, 1);
        v.set_x(777);
        assert_eq!(v.x(), 777);
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y(), 9);
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let i = v.as_slice().len();
        let _ = v[i];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(0.26f32, 1.0)), "(0.3, 1.0)");
    }

    #[test]
    fn length() {
        assert_eq!(vec3(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(vec3(3.0, 4.0, 0.0).length2(), 25.0);
        assert!(vec2(3.0, 4.0).is_length_greater_than(4.9));
        assert!(!vec2(3.0, 4.0).is_length_greater_than(5.0));
        assert!(vec2(3.0, 4.0).is_length_less_than(5.1));
        assert!(!vec2(3, 4).is_length_less_than(5));
    }

    #[test]
    fn normalize() {
        assert_relative_eq!(vec3(3.0f32, 4.0, 0.0).normalize(), vec3(0.6, 0.8, 0.0));
        assert_relative_eq!(vec3(3.0f32, 4.0, 0.0).normalize().length(), 1.0);
        assert_eq!(Vec2f::ZERO.try_normalize(), Err(Error::ZeroLength));

        let mut v = Vec3d::ZERO;
        assert_eq!(v.normalize_in_place(), Err(Error::ZeroLength));
        assert_eq!(v, Vec3d::ZERO);
    }

    #[test]
    fn normalize_extreme_magnitudes() {
        // Squared lengths overflow to infinity here.
        let huge = vec3(3e19f32, 4e19, 0.0);
        assert_abs_diff_eq!(huge.try_normalize().unwrap(), vec3(0.6, 0.8, 0.0), epsilon = 1e-6);
        assert_relative_eq!(huge.normalize().length(), 1.0, epsilon = 1e-6);

        // And underflow to zero or a subnormal here.
        assert_eq!(vec2(3e-23f32, 0.0).try_normalize(), Ok(Vec2f::X));
        assert_eq!(vec2(0.0f32, -1e-40).normalize(), vec2(0.0, -1.0));

        let mut v = vec2(f32::MAX, f32::MAX);
        assert_eq!(v.normalize_in_place(), Ok(f32::INFINITY));
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);

        let a: Ang3f<Degrees> = huge.to_angle().unwrap();
        assert_abs_diff_eq!(a.pitch(), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(a.yaw(), 53.130_1, epsilon = 1e-3);
        let flat: Ang1f<Degrees> = vec2(0.0f32, 1e-30).to_angle().unwrap();
        assert_abs_diff_eq!(flat.value(), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn is_zero_at_integer_extremes() {
        assert!(!vec2(i32::MIN, 0).is_zero(0));
        assert!(!vec2(i32::MIN, 0).is_zero(i32::MAX));
        assert!(vec2(i32::MIN + 1, i32::MAX).is_zero(i32::MAX));
        assert!(!Vec2i::ZERO.is_zero(-1));
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(vec3(7, -7, 9) / 2, vec3(3, -3, 4));
        let mut v = vec2(10, 11);
        v /= 3;
        assert_eq!(v, vec2(3, 3));
    }

    #[test]
    fn float_division_uses_reciprocal() {
        let v = vec2(1.0f64, 3.0) / 4.0;
        assert_eq!(v, vec2(0.25, 0.75));
    }

    #[test]
    fn distances() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 6.0, 3.0);
        assert_eq!(a.dist_to(b), 5.0);
        assert_eq!(a.dist_to2(b), 25.0);
        assert_eq!(b.dist_to2(a), 25.0);
    }

    #[test]
    fn rotate() {
        assert_relative_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X, epsilon = 1e-6);
        assert_relative_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y, epsilon = 1e-6);
        assert_relative_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y, epsilon = 1e-6);

        let mut v = Vec2f::X;
        v.rotate_in_place(Ang1f::<Radians>::new(TAU / 2.0));
        assert_abs_diff_eq!(v, -Vec2f::X, epsilon = 1e-6);
    }

    #[test]
    fn rotate_3d_maps_axes_onto_basis() {
        let angle = Ang3f::<Degrees>::new(-20.0, 135.0, 60.0);
        assert_abs_diff_eq!(Vec3f::X.rotated(angle), angle.forward(), epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3f::Y.rotated(angle), -angle.right(), epsilon = 1e-6);
        assert_abs_diff_eq!(Vec3f::Z.rotated(angle), angle.up(), epsilon = 1e-6);

        let v = vec3(1.0, -2.0, 0.5);
        assert_relative_eq!(v.rotated(angle).length(), v.length(), epsilon = 1e-5);
    }

    #[test]
    fn to_angle_roundtrip() {
        let a: Ang3f<Degrees> = vec3(1.0, 1.0, 0.0).to_angle().unwrap();
        assert_abs_diff_eq!(a.pitch(), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(a.yaw(), 45.0, epsilon = 1e-4);
        assert_eq!(a.roll(), 0.0);

        let dir = vec3(-0.3f64, 0.2, -0.9).normalize();
        let back = dir.to_angle::<Radians>().unwrap().forward();
        assert_abs_diff_eq!(back, dir, epsilon = 1e-12);

        let flat: Ang1f<Radians> = vec2(-1.0, 0.0).to_angle().unwrap();
        assert_relative_eq!(flat.value(), TAU / 2.0);

        assert_eq!(Vec3f::ZERO.to_angle::<Radians>(), Err(Error::ZeroLength));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn cross_anticommutes() {
        let a = vec3(1.5, -2.0, 0.25);
        let b = vec3(-3.0, 0.5, 4.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(b).dot(a), 0.0);
    }

    #[test]
    fn abs_angle() {
        assert_relative_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_relative_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
        assert_relative_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        let (min, max) = (vec3(-1.0, 0.0, 2.0), vec3(1.0, 0.5, 3.0));
        let v = vec3(-5.0, 0.25, 9.0);
        let once = v.clamp(min, max);
        assert_eq!(once, vec3(-1.0, 0.25, 3.0));
        assert_eq!(once.clamp(min, max), once);
    }

    #[test]
    fn negate_and_zero() {
        let mut v = vec3(1, -2, 3);
        v.negate();
        assert_eq!(v, vec3(-1, 2, -3));
        v.zero();
        assert_eq!(v, Vec3i::ZERO);
    }

    #[test]
    fn truncate_and_cast() {
        let v = vec4(1.5f64, 2.5, 3.5, 4.5);
        assert_eq!(v.truncate_to::<2>(), vec2(1.5, 2.5));
        assert_eq!(v.truncate_to::<4>(), v);
        assert_eq!(v.cast::<f32>(), vec4(1.5f32, 2.5, 3.5, 4.5));
        assert_eq!(v.cast::<i64>(), vec4(1i64, 2, 3, 4));
    }

    #[test]
    fn buffers() {
        let v = vec4(1u8, 2, 3, 4);
        let mut out = [0u8; 4];
        v.copy_to_slice(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(
            v.copy_to_slice(&mut [0u8; 5]),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(Vec4::from_slice(&out), Ok(v));
        assert_eq!(bytemuck::cast::<_, [u8; 4]>(v), [1, 2, 3, 4]);
    }

    #[test]
    fn randomize_respects_bounds() {
        let mut rng = fastrand::Rng::with_seed(1234);
        let (min, max) = (vec3(-1.0, 10.0, 0.0), vec3(1.0, 20.0, 0.0));
        let mut v = Vec3f::ZERO;
        for _ in 0..100 {
            v.randomize(min, max, &mut rng);
            assert!(v.within_aabb(min, max), "{v:?}");
        }

        let mut a = Vec4i::ZERO;
        let mut b = Vec4i::ZERO;
        a.randomize(Vector::splat(-100), Vector::splat(100), &mut fastrand::Rng::with_seed(5));
        b.randomize(Vector::splat(-100), Vector::splat(100), &mut fastrand::Rng::with_seed(5));
        assert_eq!(a, b);
    }
}
