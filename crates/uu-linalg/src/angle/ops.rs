//! Implementations of `std::ops`.
//!
//! Both operands of a binary operator must use the same [`AngleUnit`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::Scalar;

use super::{Angle, AngleUnit};

impl<T, const N: usize, U: AngleUnit> Index<usize> for Angle<T, N, U> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T, const N: usize, U: AngleUnit> IndexMut<usize> for Angle<T, N, U> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl<T, T2, const N: usize, U: AngleUnit> PartialEq<Angle<T2, N, U>> for Angle<T, N, U>
where
    T: PartialEq<T2>,
{
    fn eq(&self, other: &Angle<T2, N, U>) -> bool {
        self.values == other.values
    }
}

impl<T: Eq, const N: usize, U: AngleUnit> Eq for Angle<T, N, U> {}

impl<T, const N: usize, U: AngleUnit> Neg for Angle<T, N, U>
where
    T: Neg,
{
    type Output = Angle<T::Output, N, U>;

    fn neg(self) -> Self::Output {
        Angle::from_vector(-self.values)
    }
}

impl<T, const N: usize, U: AngleUnit> Add for Angle<T, N, U>
where
    T: Add,
{
    type Output = Angle<T::Output, N, U>;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::from_vector(self.values + rhs.values)
    }
}

impl<T, const N: usize, U: AngleUnit> AddAssign for Angle<T, N, U>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.values += rhs.values;
    }
}

impl<T, const N: usize, U: AngleUnit> Sub for Angle<T, N, U>
where
    T: Sub,
{
    type Output = Angle<T::Output, N, U>;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::from_vector(self.values - rhs.values)
    }
}

impl<T, const N: usize, U: AngleUnit> SubAssign for Angle<T, N, U>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.values -= rhs.values;
    }
}

/// Scales every component.
impl<T, const N: usize, U: AngleUnit> Mul<T> for Angle<T, N, U>
where
    T: Mul + Copy,
{
    type Output = Angle<T::Output, N, U>;

    fn mul(self, rhs: T) -> Self::Output {
        Angle::from_vector(self.values * rhs)
    }
}

impl<T, const N: usize, U: AngleUnit> MulAssign<T> for Angle<T, N, U>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.values *= rhs;
    }
}

/// Divides every component, with the same float/integer rules as [`Vector`](crate::Vector).
impl<T, const N: usize, U: AngleUnit> Div<T> for Angle<T, N, U>
where
    T: Scalar,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Angle::from_vector(self.values / rhs)
    }
}

impl<T, const N: usize, U: AngleUnit> DivAssign<T> for Angle<T, N, U>
where
    T: Scalar,
{
    fn div_assign(&mut self, rhs: T) {
        self.values /= rhs;
    }
}
