use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dynamically-sized heap-allocated matrix.
///
/// Column-major `Vec<T>` storage, so every column of a sample table is a
/// contiguous slice. Used both as the `N×(M+1)` sample table handed to
/// [`Interpolator::fit_matrix`](crate::interp::Interpolator::fit_matrix)
/// and as the `N×1` query matrix of
/// [`Interpolator::eval_matrix`](crate::interp::Interpolator::eval_matrix).
///
/// # Examples
///
/// ```
/// use tabinterp::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.col(0), &[1.0, 3.0]);
/// assert_eq!(a.nrows(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use tabinterp::DynMatrix;
    /// let m = DynMatrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Transposes the data to column-major internal storage.
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use tabinterp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let mut data = vec![T::zero(); nrows * ncols];
        for i in 0..nrows {
            for j in 0..ncols {
                data[j * nrows + i] = row_major[i * ncols + j];
            }
        }
        Self { data, nrows, ncols }
    }

    /// Stack equal-length columns side by side.
    ///
    /// Panics if the columns differ in length.
    ///
    /// ```
    /// use tabinterp::DynMatrix;
    /// let xs = [0.0, 1.0, 2.0];
    /// let ys = [0.0, 1.0, 4.0];
    /// let m = DynMatrix::from_columns(&[&xs, &ys]);
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m[(2, 1)], 4.0);
    /// ```
    pub fn from_columns(columns: &[&[T]]) -> Self {
        let nrows = columns.first().map_or(0, |c| c.len());
        let mut data = Vec::with_capacity(nrows * columns.len());
        for (j, c) in columns.iter().enumerate() {
            assert_eq!(
                c.len(),
                nrows,
                "column {} has length {}, expected {}",
                j,
                c.len(),
                nrows,
            );
            data.extend_from_slice(c);
        }
        Self {
            data,
            nrows,
            ncols: columns.len(),
        }
    }

    /// Single-column `N×1` matrix.
    pub fn column(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            nrows: values.len(),
            ncols: 1,
        }
    }
}

impl<T> DynMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// View column `j` as a contiguous slice.
    #[inline]
    pub fn col(&self, j: usize) -> &[T] {
        let start = j * self.nrows;
        &self.data[start..start + self.nrows]
    }

    /// Flat column-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[col * self.nrows + row]
    }

    #[inline]
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T] {
        let start = col * self.nrows + row_start;
        let end = col * self.nrows + self.nrows;
        &self.data[start..end]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }

    #[inline]
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T] {
        let start = col * self.nrows + row_start;
        let end = col * self.nrows + self.nrows;
        &mut self.data[start..end]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_column_major() {
        let m = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(m.col(2), &[3.0, 6.0]);
    }

    #[test]
    fn from_columns_matches_from_rows() {
        let a = DynMatrix::from_columns(&[&[1.0_f64, 3.0], &[2.0, 4.0]]);
        let b = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn from_columns_ragged_panics() {
        let _ = DynMatrix::from_columns(&[&[1.0_f64, 3.0], &[2.0]]);
    }

    #[test]
    fn index_mut_and_col_slice() {
        let mut m = DynMatrix::<f64>::zeros(3, 2);
        m[(1, 1)] = 7.0;
        assert_eq!(m.col(1), &[0.0, 7.0, 0.0]);
        *m.get_mut(2, 0) = -1.0;
        assert_eq!(m.col_as_slice(0, 1), &[0.0, -1.0]);
    }

    #[test]
    fn column_vector() {
        let m = DynMatrix::column(&[1.0_f64, 2.0, 3.0]);
        assert_eq!(m.ncols(), 1);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.col(0), &[1.0, 2.0, 3.0]);
    }
}
