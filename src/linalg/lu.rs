use alloc::vec;
use alloc::vec::Vec;

use crate::dynmatrix::DynMatrix;
use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
///
/// A pivot is treated as zero when it falls below `ε · max|a_ij|`, so the
/// test is independent of the overall scale of the system.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
) -> Result<(), LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut scale = T::zero();
    for j in 0..n {
        for &v in a.col_as_slice(j, 0) {
            scale = scale.max(v.abs());
        }
    }
    if scale == T::zero() {
        return if n == 0 { Ok(()) } else { Err(LinalgError::Singular) };
    }
    let tol = T::epsilon() * scale;

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val <= tol {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = *a.get(col, j);
                *a.get_mut(col, j) = *a.get(max_row, j);
                *a.get_mut(max_row, j) = tmp;
            }
        }

        // Column-major elimination:
        // 1. Scale sub-column by 1/pivot
        // 2. For each column j > col, a[col+1:n, j] -= a[col, j] * a[col+1:n, col]
        let inv_pivot = T::one() / *a.get(col, col);
        for x in a.col_as_mut_slice(col, col + 1) {
            *x = *x * inv_pivot;
        }

        for j in (col + 1)..n {
            let a_col_j = *a.get(col, j);
            if a_col_j == T::zero() {
                continue;
            }
            for row in (col + 1)..n {
                let l = *a.get(row, col);
                let u = a.get_mut(row, j);
                *u = *u - a_col_j * l;
            }
        }
    }

    Ok(())
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from `lu_in_place`.
/// `perm` is the row permutation from `lu_in_place`.
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: FloatScalar>(lu: &impl MatrixRef<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum / *lu.get(i, i);
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// Solve the square system `A·x = b` by LU with partial pivoting.
    ///
    /// The matrix itself is left untouched; factorization happens on a copy.
    ///
    /// ```
    /// use tabinterp::DynMatrix;
    ///
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let x = a.solve(&[4.0, 11.0]).unwrap();
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        assert!(self.is_square(), "solve requires a square matrix");
        let n = self.nrows();
        assert_eq!(b.len(), n, "rhs length mismatch");
        let mut lu = self.clone();
        let mut perm = vec![0usize; n];
        lu_in_place(&mut lu, &mut perm)?;
        let mut x = vec![T::zero(); n];
        lu_solve(&lu, &perm, b, &mut x);
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_3x3() {
        let a = DynMatrix::from_rows(3, 3, &[2.0_f64, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
        let x = a.solve(&[8.0, -11.0, -3.0]).unwrap();
        for (xi, expected) in x.iter().zip([2.0, 3.0, -1.0]) {
            assert!((xi - expected).abs() < 1e-12, "{xi} vs {expected}");
        }
    }

    #[test]
    fn solve_needs_pivoting() {
        // Zero in the (0,0) position forces a row swap
        let a = DynMatrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]);
        let x = a.solve(&[3.0, 5.0]).unwrap();
        assert!((x[0] - 5.0).abs() < 1e-14);
        assert!((x[1] - 3.0).abs() < 1e-14);
    }

    #[test]
    fn singular_detected() {
        let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
        assert_eq!(a.solve(&[1.0, 2.0]).unwrap_err(), LinalgError::Singular);
        let z = DynMatrix::<f64>::zeros(2, 2);
        assert_eq!(z.solve(&[0.0, 0.0]).unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn small_scale_system_is_not_singular() {
        // Entries around 1e-20 are well conditioned despite being tiny
        let a = DynMatrix::from_rows(2, 2, &[2e-20_f64, 1e-20, 1e-20, 2e-20]);
        let x = a.solve(&[3e-20, 3e-20]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn permutation_recorded() {
        let mut a = DynMatrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]);
        let mut perm = [0usize; 2];
        lu_in_place(&mut a, &mut perm).unwrap();
        assert_eq!(perm, [1, 0]);
    }
}
