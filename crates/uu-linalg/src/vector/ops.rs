//! Operator impls.
//!
//! `+` and `-` combine two vectors element by element. `*` and `/` only take a scalar right-hand
//! side and scale every element; there is no element-wise vector product.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::Scalar;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

/// Equality against anything that can be viewed as a slice of `N` comparable elements.
macro_rules! eq_impls {
    ($($rhs:ty: $other:ident => $slice:expr;)+) => {$(
        impl<T: PartialEq<U>, U, const N: usize> PartialEq<$rhs> for Vector<T, N> {
            #[inline]
            fn eq(&self, $other: &$rhs) -> bool {
                self.as_slice() == $slice
            }
        }
    )+};
}

eq_impls! {
    Vector<U, N>: other => other.as_slice();
    [U; N]: other => &other[..];
    [U]: other => other;
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {$(
        impl<T: $op, const N: usize> $op for Vector<T, N> {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: Self) -> Self::Output {
                self.zip(rhs).map(|(l, r)| $op::$method(l, r))
            }
        }

        impl<T: $assign, const N: usize> $assign for Vector<T, N> {
            fn $assign_method(&mut self, rhs: Self) {
                for (l, r) in self.0.iter_mut().zip(rhs.0) {
                    $assign::$assign_method(l, r);
                }
            }
        }
    )+};
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

impl<T: Mul + Copy, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn mul(self, factor: T) -> Self::Output {
        self.map(|elem| elem * factor)
    }
}

impl<T: MulAssign + Copy, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, factor: T) {
        for elem in &mut self.0 {
            *elem *= factor;
        }
    }
}

/// Floating-point vectors are multiplied by the reciprocal of the divisor. Integer vectors divide
/// (and truncate) each element.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, divisor: T) -> Self {
        if T::IS_FLOAT {
            self * (T::ONE / divisor)
        } else {
            self.map(|elem| elem / divisor)
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, divisor: T) {
        *self = *self / divisor;
    }
}
