use std::{array, fmt, mem};

use crate::{
    error::{check_len, Result},
    traits::Number,
    Cast, One, Scalar, Trig, Uniform, Vector, Zero,
};

mod ops;

/// Square matrix of size 1.
pub type Mat1<T> = Matrix<T, 1, 1>;
pub type Mat1f = Mat1<f32>;
/// Square matrix of size 2.
pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat2f = Mat2<f32>;
pub type Mat2d = Mat2<f64>;
/// Square matrix of size 3.
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;
/// Square matrix of size 4, the usual size of homogeneous transforms.
pub type Mat4<T> = Matrix<T, 4, 4>;
pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;

// Rectangular shapes, named `Mat{rows}x{columns}`.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
pub type Mat2x4<T> = Matrix<T, 2, 4>;
pub type Mat3x2<T> = Matrix<T, 3, 2>;
pub type Mat3x4<T> = Matrix<T, 3, 4>;
pub type Mat4x2<T> = Matrix<T, 4, 2>;
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A grid of `R` rows by `C` columns, stored row by row.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take arrays (or [`Vector`]s) of rows or
///   columns.
/// - [`Matrix::from_fn`] calls a closure with the `(row, col)` position of every element.
/// - [`Matrix::from_slice`] reads a flat row-major buffer.
/// - [`Matrix::from_diagonal`] builds a square matrix that is zero outside its diagonal.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] build 2x2 rotations.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are available as constants.
///
/// # Element Access
///
/// Indexing uses a `(row, col)` tuple, with 0-based indices, and panics when either index is out
/// of range. [`Matrix::get`] and [`Matrix::get_mut`] are the checked alternatives.
///
/// ```
/// # use uu_linalg::*;
/// let mut mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
/// mat[(1, 2)] = 60;
/// assert_eq!(mat.row(1), [4, 5, 60]);
/// assert_eq!(mat.get(1, 2), Some(&60));
/// assert_eq!(mat.get(2, 0), None);
/// ```
///
/// [`Matrix::as_flat_slice`] and [`Matrix::copy_to_slice`] expose the elements in the same
/// row-major order, for APIs that take flat arrays.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// `min(R, C)`.
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Builds a matrix out of `R` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let by_rows = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let by_columns = Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]);
    /// assert_eq!(by_rows, by_columns);
    /// assert_eq!(by_rows.column(1), [2, 5]);
    /// ```
    pub fn from_rows<V: Into<Vector<T, C>>>(rows: [V; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Builds a matrix out of `C` columns.
    pub fn from_columns<V: Into<Vector<T, R>>>(columns: [V; C]) -> Self {
        let mut columns = columns.map(|col| col.into().into_array().into_iter());
        Self(array::from_fn(|_| {
            array::from_fn(|col| columns[col].next().unwrap())
        }))
    }

    /// Builds a matrix by calling `cb(row, col)` once per element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let kronecker = Mat3::from_fn(|row, col| (row == col) as i32);
    /// assert_eq!(kronecker, Mat3::IDENTITY);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Copies a matrix out of a flat row-major buffer of exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mat = Mat2x3::from_slice(&[1, 2, 3, 4, 5, 6])?;
    /// assert_eq!(mat.row(1), [4, 5, 6]);
    /// assert!(Mat2::<i32>::from_slice(&[1, 2, 3]).is_err());
    /// # Ok::<(), uu_linalg::Error>(())
    /// ```
    pub fn from_slice(slice: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        check_len(R * C, slice.len())?;
        Ok(Self::from_fn(|row, col| slice[row * C + col]))
    }

    /// Transforms every element with `f`, possibly changing the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let signs = Mat2::from_rows([[-3, 0], [7, -1]]).map(|v: i32| v.signum());
    /// assert_eq!(signs, Mat2::from_rows([[-1, 0], [1, -1]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts each element to the element type `U` (with `as` semantics).
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Returns the transposed matrix: row `i` of the result is column `i` of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let tall: Mat3x2<i32> = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]).transpose();
    /// assert_eq!(tall.row(2), [3, 6]);
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        Matrix::from_columns(self.0)
    }

    /// Checked element access. Returns [`None`] when `row >= R` or `col >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(mat.get(1, 2), Some(&6));
    /// assert_eq!(mat.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns a reference to the element at `(row, col)` without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be less than `R` and `col` less than `C`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < R && col < C);
        self.0.get_unchecked(row).get_unchecked(col)
    }

    /// Returns a mutable reference to the element at `(row, col)` without bounds checking.
    ///
    /// # Safety
    ///
    /// `row` must be less than `R` and `col` less than `C`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < R && col < C);
        self.0.get_unchecked_mut(row).get_unchecked_mut(col)
    }

    /// Returns a copy of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `R`.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Returns a copy of column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(mat.column(2), [3, 6]);
    /// ```
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        assert!(index < C, "column index {index} out of bounds for {R}x{C} matrix");
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns all elements as a flat slice in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mat = Mat2::from_rows([[9, 8], [7, 6]]);
    /// assert_eq!(mat.as_flat_slice(), &[9, 8, 7, 6]);
    /// ```
    pub fn as_flat_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns all elements as a mutable flat slice in row-major order.
    pub fn as_flat_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Copies the elements in row-major order into `out`, which must hold exactly `R * C` elements.
    pub fn copy_to_slice(&self, out: &mut [T]) -> Result<()>
    where
        T: Copy,
    {
        check_len(R * C, out.len())?;
        out.copy_from_slice(self.as_flat_slice());
        Ok(())
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
    /// assert!(Mat3f::ZERO.is_zero(0.0));
    /// assert!(!Mat3f::IDENTITY.is_zero(0.5));
    /// ```
    pub fn is_zero(&self, tolerance: T) -> bool
    where
        T: Scalar,
    {
        self.as_flat_slice().iter().all(|elem| elem.is_within(tolerance))
    }

    /// Overwrites every element with an independent uniform draw from `[min, max]`.
    ///
    /// # Panics
    ///
    /// For integer element types, panics if `min > max`.
    pub fn randomize(&mut self, min: T, max: T, rng: &mut fastrand::Rng)
    where
        T: Uniform + Copy,
    {
        for elem in self.as_flat_mut_slice() {
            *elem = T::sample(rng, min, max);
        }
        log::trace!("randomized {R}x{C} matrix");
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All zeros.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);

    /// Resets every element to 0.
    pub fn zero(&mut self) {
        *self = Self::ZERO;
    }
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the main diagonal, zeros elsewhere.
    ///
    /// For non-square shapes the diagonal stops at the smaller dimension.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this.0[i][i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Copies out the main diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mat = Mat2::from_rows([[5, -1], [2, 8]]);
    /// assert_eq!(mat.diagonal(), [5, 8]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Builds a scaling matrix: `diag` on the main diagonal, zeros elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let scale = Mat3::from_diagonal([2, 3, 4]);
    /// assert_eq!(scale * vec3(1, 1, 1), [2, 3, 4]);
    /// assert_eq!(scale.diagonal(), [2, 3, 4]);
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        let mut this = Self::ZERO;
        for i in 0..N {
            this.0[i][i] = diag[i];
        }
        this
    }

    /// Sums the main diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// assert_eq!(Mat2::from_rows([[4, 9], [9, -1]]).trace(), 3);
    /// assert_eq!(Mat4d::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Swaps the rows and columns of this square matrix in place.
    pub fn transpose_in_place(&mut self) {
        for i in 0..N {
            for j in i + 1..N {
                let (upper, lower) = self.0.split_at_mut(j);
                mem::swap(&mut upper[i][j], &mut lower[0][i]);
            }
        }
    }

    /// Returns the `M`x`M` submatrix left after deleting row `row` and column `col`.
    ///
    /// `M` must be `N - 1`; this is checked at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(mat.minor::<2>(1, 0), Matrix::from_rows([
    ///     [2, 3],
    ///     [8, 9],
    /// ]));
    /// ```
    pub fn minor<const M: usize>(&self, row: usize, col: usize) -> Matrix<T, M, M>
    where
        T: Copy,
    {
        const { assert!(M + 1 == N, "a minor has exactly one row and column less") };
        assert!(
            row < N && col < N,
            "minor position ({row}, {col}) out of bounds for {N}x{N} matrix"
        );
        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self.0[r][c]
        })
    }

    /// Computes the determinant.
    ///
    /// Matrices up to 2x2 use closed forms. Larger matrices are expanded by cofactors along the
    /// first row, which takes `O(N!)` time and is only meant for the small sizes used for
    /// transforms.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uu_linalg::*;
    /// let shear = Mat2::from_rows([[1, 5], [0, 1]]);
    /// assert_eq!(shear.determinant(), 1);
    /// assert_eq!(Mat3::from_diagonal([2, 3, 4]).determinant(), 24);
    /// ```
    pub fn determinant(&self) -> T
    where
        T: Number,
    {
        if N > 2 {
            log::trace!("expanding {N}x{N} determinant by cofactors");
        }
        let cols: [usize; N] = array::from_fn(|i| i);
        self.cofactor_expansion(0, &cols)
    }

    /// Determinant of the submatrix made of rows `row..N` and the columns in `cols`.
    fn cofactor_expansion(&self, row: usize, cols: &[usize]) -> T
    where
        T: Number,
    {
        let m = &self.0;
        match *cols {
            [] => T::ONE,
            [c] => m[row][c],
            [c0, c1] => m[row][c0] * m[row + 1][c1] - m[row][c1] * m[row + 1][c0],
            _ => {
                let mut rest = [0; N];
                let mut det = T::ZERO;
                for (i, &col) in cols.iter().enumerate() {
                    let mut len = 0;
                    for &other in cols.iter().filter(|&&other| other != col) {
                        rest[len] = other;
                        len += 1;
                    }
                    let term = m[row][col] * self.cofactor_expansion(row + 1, &rest[..len]);
                    det = if i % 2 == 0 { det + term } else { det - term };
                }
                det
            }
        }
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Trig,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Trig,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    /// Creates a matrix from an array of rows.
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

struct FormatRow<'a, T>(&'a [T]);

impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", elem)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row)))
            .finish()
    }
}

/// Prints one row per line, elements separated by commas.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, elem) in row.iter().enumerate() {
                if c != 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(elem, f)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec3, Error};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]).column(1), [2, 5]);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // One bracketed list per row.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // Alternate form breaks between rows only.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(mat.to_string(), "[0, 1]\n[2, 3]");
        assert_eq!(format!("{:.1}", Mat1f::IDENTITY), "[1.0]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
    }

    #[test]
    fn is_zero_at_integer_extremes() {
        let mut mat = Mat2::<i32>::ZERO;
        assert!(mat.is_zero(0));
        mat[(1, 0)] = i32::MIN;
        assert!(!mat.is_zero(i32::MAX));
    }

    #[test]
    fn transpose_twice() {
        let mat = Mat3x4::from_fn(|r, c| (r * 4 + c) as i32);
        assert_eq!(mat.transpose().transpose(), mat);

        let mut square = Mat3::from_fn(|r, c| r * 3 + c);
        let transposed = square.transpose();
        square.transpose_in_place();
        assert_eq!(square, transposed);
        square.transpose_in_place();
        assert_eq!(square, Mat3::from_fn(|r, c| r * 3 + c));
    }

    #[test]
    fn flat_buffers() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.as_flat_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(Mat2x3::from_slice(mat.as_flat_slice()), Ok(mat));

        let mut out = [0; 6];
        mat.copy_to_slice(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 5, 6]);
        assert_eq!(
            mat.copy_to_slice(&mut [0; 4]),
            Err(Error::LengthMismatch {
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_is_neutral() {
        assert_eq!(Mat4f::IDENTITY * Mat4f::IDENTITY, Mat4f::IDENTITY);
        assert_eq!(
            Mat1::<i64>::IDENTITY * Mat1::IDENTITY,
            Mat1::<i64>::IDENTITY
        );

        let m = Mat3::from_fn(|r, c| (r as i32 - 1) * 7 + c as i32);
        let id = Mat3::<i32>::IDENTITY;
        assert_eq!(id * m, m);
        assert_eq!(m * id, m);
        assert_eq!(id * vec3(1, 2, 3), vec3(1, 2, 3));

        let mut n = m;
        n *= id;
        assert_eq!(n, m);
    }

    #[test]
    fn elementwise() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Mat2::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2::from_rows([[9, 18], [27, 36]]));
        assert_eq!(a * 3, Mat2::from_rows([[3, 6], [9, 12]]));
        assert_eq!(b / 7, Mat2::from_rows([[1, 2], [4, 5]]));
        assert_eq!(-a, Mat2::from_rows([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2;
        c /= 20;
        assert_eq!(c, a);
        c.negate();
        assert_eq!(c, -a);
        c.zero();
        assert!(c.is_zero(0));

        assert_eq!(Mat2d::IDENTITY / 4.0, Mat2d::from_diagonal([0.25, 0.25]));
    }

    #[test]
    fn minor() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [ 1,  2,  3,  4],
            [ 5,  6,  7,  8],
            [ 9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        assert_eq!(
            mat.minor::<3>(0, 0),
            Matrix::from_rows([[6, 7, 8], [10, 11, 12], [14, 15, 16]])
        );
        assert_eq!(
            mat.minor::<3>(3, 3),
            Matrix::from_rows([[1, 2, 3], [5, 6, 7], [9, 10, 11]])
        );
        assert_eq!(
            mat.minor::<3>(1, 2),
            Matrix::from_rows([[1, 2, 4], [9, 10, 12], [13, 14, 16]])
        );
    }

    #[test]
    #[should_panic]
    fn minor_out_of_bounds() {
        Mat3::<i32>::IDENTITY.minor::<2>(3, 0);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix::<f32, 0, 0>::IDENTITY.determinant(), 1.0);

        assert_eq!(Mat2::from_rows([[1, 2], [3, 4]]).determinant(), -2);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);
    }

    #[test]
    fn determinant_matches_first_row_expansion() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [ 3,  2, -1,  4],
            [ 2,  1,  5,  7],
            [ 0,  5,  2, -6],
            [-1,  2,  1,  0],
        ]);
        let expanded = (0..4).fold(0, |acc, col| {
            let sign = if col % 2 == 0 { 1 } else { -1 };
            acc + sign * mat[(0, col)] * mat.minor::<3>(0, col).determinant()
        });
        assert_eq!(mat.determinant(), expanded);
        assert_eq!(mat.determinant(), mat.transpose().determinant());

        // Swapping two rows flips the sign.
        let swapped = Matrix::from_rows([mat.row(1), mat.row(0), mat.row(2), mat.row(3)]);
        assert_eq!(swapped.determinant(), -mat.determinant());
    }

    #[test]
    fn rotation() {
        let cw = Mat2f::rotation_clockwise(0.0);
        let ccw = Mat2f::rotation_counterclockwise(0.0);
        assert_eq!(ccw, cw);
        assert_eq!(cw, Mat2f::IDENTITY);

        let cw = Mat2f::rotation_clockwise(PI / 2.0);
        assert_abs_diff_eq!(cw * vec2(0.0, 1.0), vec2(1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(cw.determinant(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            cw * Mat2f::rotation_counterclockwise(PI / 2.0),
            Mat2f::IDENTITY,
            epsilon = 1e-6
        );
    }

    #[test]
    fn randomize_within_bounds() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut mat = Mat4f::ZERO;
        mat.randomize(-2.0, 2.0, &mut rng);
        assert!(mat.as_flat_slice().iter().all(|e| (-2.0..=2.0).contains(e)));
        assert!(!mat.is_zero(0.0));

        let mut ints = Mat3::<i8>::ZERO;
        ints.randomize(5, 5, &mut rng);
        assert_eq!(ints, Mat3::from_fn(|_, _| 5i8));
    }
}
