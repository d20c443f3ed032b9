//! Orientation angles with a compile-time unit.

use std::{fmt, hash::Hash, marker::PhantomData};

use crate::{
    error::Result,
    math::consts,
    traits::{Number, Sqrt},
    Cast, Mat3, MinMax, Scalar, Uniform, Vec2, Vec3, Vector, Zero,
};

mod ops;

/// A unit in which angle components are stored.
///
/// Implemented by the [`Radians`] and [`Degrees`] marker types. The unit of an [`Angle`] is part of
/// its type, so radian and degree angles cannot be mixed without an explicit conversion.
pub trait AngleUnit: Copy + Default + fmt::Debug + Hash + Eq + Send + Sync + 'static {
    /// Short unit suffix used when displaying angles.
    const NAME: &'static str;

    /// Whether this unit is [`Radians`].
    const IS_RADIANS: bool;

    /// The size of a full turn in this unit.
    fn full_turn<T: Scalar>() -> T;

    /// Converts `value` from this unit into radians.
    fn to_radians<T: Scalar>(value: T) -> T;

    /// Converts `value` from radians into this unit.
    fn from_radians<T: Scalar>(value: T) -> T;
}

/// Marker for angles stored in radians. This is the default unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Radians;

/// Marker for angles stored in degrees.
///
/// Wrapping needs a full turn of 360 to fit in the element type, so `i8` angles cannot be
/// normalized in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Degrees;

impl AngleUnit for Radians {
    const NAME: &'static str = "rad";
    const IS_RADIANS: bool = true;

    fn full_turn<T: Scalar>() -> T {
        T::from_f64(std::f64::consts::TAU)
    }

    #[inline]
    fn to_radians<T: Scalar>(value: T) -> T {
        value
    }

    #[inline]
    fn from_radians<T: Scalar>(value: T) -> T {
        value
    }
}

impl AngleUnit for Degrees {
    const NAME: &'static str = "deg";
    const IS_RADIANS: bool = false;

    /// # Panics
    ///
    /// Panics if `T` cannot represent 360.
    fn full_turn<T: Scalar>() -> T {
        let turn = T::from_f64(360.0);
        assert!(
            turn.to_f64() == 360.0,
            "`{}` cannot represent a full turn of 360 degrees",
            std::any::type_name::<T>()
        );
        turn
    }

    fn to_radians<T: Scalar>(value: T) -> T {
        T::from_f64(value.to_f64() * consts::f64::DEG_TO_RAD)
    }

    fn from_radians<T: Scalar>(value: T) -> T {
        T::from_f64(value.to_f64() * consts::f64::RAD_TO_DEG)
    }
}

/// A one-component angle (a rotation in the plane).
pub type Ang1<T, U = Radians> = Angle<T, 1, U>;
/// A one-component angle with [`f32`] elements.
pub type Ang1f<U = Radians> = Ang1<f32, U>;
/// A one-component angle with [`f64`] elements.
pub type Ang1d<U = Radians> = Ang1<f64, U>;
/// A three-component (pitch, yaw, roll) angle.
pub type Ang3<T, U = Radians> = Angle<T, 3, U>;
/// A three-component angle with [`f32`] elements.
pub type Ang3f<U = Radians> = Ang3<f32, U>;
/// A three-component angle with [`f64`] elements.
pub type Ang3d<U = Radians> = Ang3<f64, U>;

/// An orientation made of `N` rotation components stored in unit `U`.
///
/// A rotation in `D` dimensions has `D * (D - 1) / 2` components, so 2D orientations use an
/// [`Ang1`] and 3D orientations use an [`Ang3`] holding *pitch*, *yaw* and *roll*, in that order.
///
/// # Conventions
///
/// The basis is right-handed. At zero rotation, [`forward`][Ang3::forward] points along +X, the
/// left vector along +Y and [`up`][Ang3::up] along +Z. Yaw turns counterclockwise around Z
/// (toward +Y), pitch raises the forward vector toward +Z, and roll turns the right and up vectors
/// around the forward vector.
///
/// ```
/// # use uu_linalg::*;
/// let up = Ang3d::<Degrees>::new(90.0, 0.0, 0.0).forward();
/// assert!((up - Vec3d::Z).is_zero(1e-12));
///
/// let left = Ang3d::<Degrees>::new(0.0, 90.0, 0.0).forward();
/// assert!((left - Vec3d::Y).is_zero(1e-12));
/// ```
///
/// # Units
///
/// The unit is a type parameter. Convert explicitly with [`Angle::to_radians`],
/// [`Angle::to_degrees`] or [`Angle::convert`]:
///
/// ```
/// # use uu_linalg::*;
/// let deg = Ang1d::<Degrees>::new(180.0);
/// let rad: Ang1d = deg.to_radians();
/// assert!((rad.value() - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[repr(transparent)]
pub struct Angle<T, const N: usize, U: AngleUnit = Radians> {
    values: Vector<T, N>,
    unit: PhantomData<U>,
}

unsafe impl<T: bytemuck::Zeroable, const N: usize, U: AngleUnit> bytemuck::Zeroable
    for Angle<T, N, U>
{
}
unsafe impl<T: bytemuck::Pod, const N: usize, U: AngleUnit> bytemuck::Pod for Angle<T, N, U> {}

impl<T: Clone, const N: usize, U: AngleUnit> Clone for Angle<T, N, U> {
    fn clone(&self) -> Self {
        Self::from_vector(self.values.clone())
    }
}

impl<T: Copy, const N: usize, U: AngleUnit> Copy for Angle<T, N, U> {}

impl<T: Hash, const N: usize, U: AngleUnit> Hash for Angle<T, N, U> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl<T: Zero, const N: usize, U: AngleUnit> Angle<T, N, U> {
    /// An angle with every component set to 0.
    pub const ZERO: Self = Self::from_vector(Vector::ZERO);

    /// Resets every component to 0.
    pub fn zero(&mut self) {
        *self = Self::ZERO;
    }
}

impl<T, const N: usize, U: AngleUnit> Angle<T, N, U> {
    /// Wraps a vector of components that are already in unit `U`.
    #[inline]
    pub const fn from_vector(values: Vector<T, N>) -> Self {
        Self {
            values,
            unit: PhantomData,
        }
    }

    /// Creates an angle from components given in radians, converting them into unit `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a = Ang1d::<Degrees>::from_radians([std::f64::consts::FRAC_PI_2]);
    /// assert!((a.value() - 90.0).abs() < 1e-12);
    /// ```
    pub fn from_radians(values: impl Into<Vector<T, N>>) -> Self
    where
        T: Scalar,
    {
        Self::from_vector(values.into().map(U::from_radians))
    }

    /// Copies an angle out of a flat buffer that must hold exactly `N` components.
    pub fn from_slice(slice: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        Vector::from_slice(slice).map(Self::from_vector)
    }

    /// Returns the components, in unit `U`, as a [`Vector`].
    #[inline]
    pub fn into_vector(self) -> Vector<T, N> {
        self.values
    }

    /// Returns a reference to the components as a [`Vector`].
    #[inline]
    pub const fn as_vector(&self) -> &Vector<T, N> {
        &self.values
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.values.as_mut_slice()
    }

    /// Copies the components into `out`, which must hold exactly `N` elements.
    pub fn copy_to_slice(&self, out: &mut [T]) -> Result<()>
    where
        T: Copy,
    {
        self.values.copy_to_slice(out)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    /// Returns a reference to the component at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.values.get_unchecked(index)
    }

    /// Applies a closure to each component, keeping the unit.
    pub fn map<F, T2>(self, f: F) -> Angle<T2, N, U>
    where
        F: FnMut(T) -> T2,
    {
        Angle::from_vector(self.values.map(f))
    }

    /// Converts each component to the element type `T2` (with `as` semantics), keeping the unit.
    pub fn cast<T2>(self) -> Angle<T2, N, U>
    where
        T: Cast<T2>,
    {
        Angle::from_vector(self.values.cast())
    }

    /// Converts this angle into unit `U2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a = Ang3d::<Degrees>::new(90.0, 180.0, 0.0).convert::<Radians>();
    /// assert!((a.yaw() - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn convert<U2: AngleUnit>(self) -> Angle<T, N, U2>
    where
        T: Scalar,
    {
        if U::IS_RADIANS == U2::IS_RADIANS {
            return Angle::from_vector(self.values);
        }
        Angle::from_vector(self.values.map(|v| U2::from_radians(U::to_radians(v))))
    }

    /// Converts this angle into radians.
    pub fn to_radians(self) -> Angle<T, N, Radians>
    where
        T: Scalar,
    {
        self.convert()
    }

    /// Converts this angle into degrees.
    pub fn to_degrees(self) -> Angle<T, N, Degrees>
    where
        T: Scalar,
    {
        self.convert()
    }

    /// Returns the components converted into radians.
    fn radians(&self) -> Vector<T, N>
    where
        T: Scalar,
    {
        self.values.map(U::to_radians)
    }

    /// Returns whether every component is a finite number.
    ///
    /// Always `true` for integer element types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert!(Ang3f::<Radians>::new(1.0, 2.0, 3.0).is_valid());
    /// assert!(!Ang3f::<Radians>::new(1.0, f32::NAN, 3.0).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool
    where
        T: Scalar,
    {
        self.values.as_slice().iter().all(|v| v.is_finite())
    }

    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.values.length2()
    }

    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.values.length()
    }

    /// Flips the sign of every component.
    pub fn negate(&mut self)
    where
        T: Number,
    {
        self.values.negate();
    }

    /// Returns whether the magnitude of every component is at most `tolerance`.
    pub fn is_zero(&self, tolerance: T) -> bool
    where
        T: Scalar,
    {
        self.values.is_zero(tolerance)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_vector(self.values.min(other.values))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_vector(self.values.max(other.values))
    }

    /// Component-wise clamp between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_vector(self.values.clamp(min.values, max.values))
    }

    /// Component-wise linear interpolation. `factor` is not clamped and no wrap-around is applied.
    pub fn lerp(self, other: Self, factor: T) -> Self
    where
        T: Scalar,
    {
        Self::from_vector(self.values.lerp(other.values, factor))
    }

    pub fn lerp_in_place(&mut self, other: Self, factor: T)
    where
        T: Scalar,
    {
        *self = self.lerp(other, factor);
    }

    /// Overwrites each component with an independent uniform draw from `[min[i], max[i]]`.
    pub fn randomize(&mut self, min: Self, max: Self, rng: &mut fastrand::Rng)
    where
        T: Uniform + Copy,
    {
        self.values.randomize(min.values, max.values, rng);
    }

    /// Wraps every component into the half-open range `[0, full turn)`.
    ///
    /// That is `[0, 2π)` for [`Radians`] and `[0, 360)` for [`Degrees`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a = Ang3d::<Degrees>::new(-90.0, 360.0, 725.0).normalize();
    /// assert_eq!(a, Ang3d::<Degrees>::new(270.0, 0.0, 5.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Scalar,
    {
        let turn = U::full_turn::<T>();
        Self::from_vector(self.values.map(|v| wrap(v, turn)))
    }

    /// Wraps every component into `[0, full turn)` in place.
    pub fn normalize_in_place(&mut self)
    where
        T: Scalar,
    {
        *self = self.normalize();
    }

    /// Wraps every component into the signed range `(-half turn, half turn]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let a = Ang3d::<Degrees>::new(270.0, -180.0, 180.0).normalize_signed();
    /// assert_eq!(a, Ang3d::<Degrees>::new(-90.0, 180.0, 180.0));
    /// ```
    pub fn normalize_signed(self) -> Self
    where
        T: Scalar,
    {
        let turn = U::full_turn::<T>();
        let half = turn / (T::ONE + T::ONE);
        Self::from_vector(self.values.map(|v| {
            let v = wrap(v, turn);
            if v > half {
                v - turn
            } else {
                v
            }
        }))
    }
}

/// Wraps `value` into `[0, turn)`.
fn wrap<T: Scalar>(value: T, turn: T) -> T {
    let mut v = value.modulo(turn);
    if v < T::ZERO {
        v = v + turn;
    }
    // `-ε + turn` can round up to `turn`.
    if v >= turn {
        v = T::ZERO;
    }
    v
}

impl<T, U: AngleUnit> Angle<T, 1, U> {
    /// Creates a one-component angle in unit `U`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::from_vector(Vector::from_array([value]))
    }

    /// Returns the single component.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.values[0]
    }

    pub fn set_value(&mut self, value: T) {
        self.values[0] = value;
    }

    /// Returns the unit vector obtained by rotating +X counterclockwise by this angle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let f = Ang1d::<Degrees>::new(90.0).forward();
    /// assert!((f - Vec2d::Y).is_zero(1e-12));
    /// ```
    pub fn forward(&self) -> Vec2<T>
    where
        T: Scalar,
    {
        let (sin, cos) = self.radians()[0].sin_cos();
        Vector::from_array([cos, sin])
    }

    /// Returns the unit vector perpendicular to [`forward`][Self::forward], pointing to its right
    /// (clockwise).
    pub fn right(&self) -> Vec2<T>
    where
        T: Scalar,
    {
        let (sin, cos) = self.radians()[0].sin_cos();
        Vector::from_array([sin, -cos])
    }

    /// Same as [`forward`][Self::forward].
    pub fn to_vector(&self) -> Vec2<T>
    where
        T: Scalar,
    {
        self.forward()
    }
}

impl<T, U: AngleUnit> Angle<T, 3, U> {
    /// Creates an angle from its pitch, yaw and roll in unit `U`.
    #[inline]
    pub const fn new(pitch: T, yaw: T, roll: T) -> Self {
        Self::from_vector(Vector::from_array([pitch, yaw, roll]))
    }

    /// Rotation that raises [`forward`][Self::forward] above the XY plane.
    #[inline]
    pub fn pitch(&self) -> T
    where
        T: Copy,
    {
        self.values[0]
    }

    /// Counterclockwise rotation around the Z axis.
    #[inline]
    pub fn yaw(&self) -> T
    where
        T: Copy,
    {
        self.values[1]
    }

    /// Rotation around the [`forward`][Self::forward] axis.
    #[inline]
    pub fn roll(&self) -> T
    where
        T: Copy,
    {
        self.values[2]
    }

    pub fn set_pitch(&mut self, pitch: T) {
        self.values[0] = pitch;
    }

    pub fn set_yaw(&mut self, yaw: T) {
        self.values[1] = yaw;
    }

    pub fn set_roll(&mut self, roll: T) {
        self.values[2] = roll;
    }

    /// `(sin, cos)` of pitch, yaw and roll.
    fn sin_cos(&self) -> [(T, T); 3]
    where
        T: Scalar,
    {
        self.radians().into_array().map(|v| v.sin_cos())
    }

    /// Returns the unit direction this angle is facing.
    ///
    /// `(cos(pitch) cos(yaw), cos(pitch) sin(yaw), sin(pitch))`. Roll does not affect it.
    pub fn forward(&self) -> Vec3<T>
    where
        T: Scalar,
    {
        let [(sp, cp), (sy, cy), _] = self.sin_cos();
        Vector::from_array([cp * cy, cp * sy, sp])
    }

    /// Returns the unit vector pointing to the right of [`forward`][Self::forward].
    pub fn right(&self) -> Vec3<T>
    where
        T: Scalar,
    {
        let [(sp, cp), (sy, cy), (sr, cr)] = self.sin_cos();
        Vector::from_array([cr * sy - sr * sp * cy, -cr * cy - sr * sp * sy, sr * cp])
    }

    /// Returns the unit vector pointing up, relative to [`forward`][Self::forward] and the roll.
    pub fn up(&self) -> Vec3<T>
    where
        T: Scalar,
    {
        let [(sp, cp), (sy, cy), (sr, cr)] = self.sin_cos();
        Vector::from_array([-cr * sp * cy - sr * sy, -cr * sp * sy + sr * cy, cr * cp])
    }

    /// Same as [`forward`][Self::forward].
    pub fn to_vector(&self) -> Vec3<T>
    where
        T: Scalar,
    {
        self.forward()
    }

    /// Returns the rotation matrix with columns `forward`, `-right` and `up`.
    ///
    /// Multiplying a vector by it rotates the vector from the reference frame into this
    /// orientation, so `to_matrix() * Vec3::X == forward()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let m = Ang3d::<Degrees>::new(10.0, 20.0, 30.0).to_matrix();
    /// assert!((m.determinant() - 1.0).abs() < 1e-12);
    /// ```
    pub fn to_matrix(&self) -> Mat3<T>
    where
        T: Scalar,
    {
        Mat3::from_columns([self.forward(), -self.right(), self.up()])
    }
}

impl<T: Default, const N: usize, U: AngleUnit> Default for Angle<T, N, U> {
    fn default() -> Self {
        Self::from_vector(Vector::default())
    }
}

impl<T, const N: usize, U: AngleUnit> From<[T; N]> for Angle<T, N, U> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_vector(value.into())
    }
}

impl<T, const N: usize, U: AngleUnit> From<Vector<T, N>> for Angle<T, N, U> {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        Self::from_vector(value)
    }
}

impl<T: fmt::Debug, const N: usize, U: AngleUnit> fmt::Debug for Angle<T, N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.values, U::NAME)
    }
}

impl<T: fmt::Display, const N: usize, U: AngleUnit> fmt::Display for Angle<T, N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.values, f)
    }
}

/// Constructs an [`Ang1`] in unit `U`.
#[inline]
pub const fn ang1<T, U: AngleUnit>(value: T) -> Ang1<T, U> {
    Angle::from_vector(Vector::from_array([value]))
}

/// Constructs an [`Ang3`] from pitch, yaw and roll in unit `U`.
#[inline]
pub const fn ang3<T, U: AngleUnit>(pitch: T, yaw: T, roll: T) -> Ang3<T, U> {
    Angle::from_vector(Vector::from_array([pitch, yaw, roll]))
}
