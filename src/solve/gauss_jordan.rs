use num_traits::ToPrimitive;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::solve::rref::{is_false_identity_row, rref, rref_with_tolerance};
use crate::traits::Scalar;

/// Classify the outcome of a reduction over an augmented matrix.
///
/// Free columns mean the system lacks a unique solution; the matrix is
/// then scanned bottom-up (where degenerate rows accumulate) for a false
/// identity row `0 = c`, which proves inconsistency.
fn classify<T: Scalar>(
    m: &Matrix<T>,
    reduction: Result<(), LinalgError>,
) -> Result<(), LinalgError> {
    match reduction {
        Ok(()) => Ok(()),
        Err(LinalgError::FreeColumns) => {
            for i in (0..m.nrows()).rev() {
                if is_false_identity_row(m.row(i)) {
                    return Err(LinalgError::NoSolutions);
                }
            }
            Err(LinalgError::InfiniteSolutions)
        }
        Err(_) => Err(LinalgError::Unknown),
    }
}

#[inline]
fn underdetermined<T>(m: &Matrix<T>) -> bool {
    m.nrows() < m.ncols() - 1
}

/// Solve a system of linear equations by Gauss-Jordan elimination.
///
/// The input is an augmented matrix: coefficients plus the right-hand
/// side as the last column. The matrix is reduced to RREF **in place**;
/// no solution vector is allocated. On `Ok(())` the caller reads the
/// solution out of the last column.
///
/// Expected numeric outcomes are errors, never panics:
///
/// - [`LinalgError::UnderdeterminedSystem`] — fewer equations than
///   variables (`nrows < ncols - 1`); returned before the matrix is
///   touched.
/// - [`LinalgError::NoSolutions`] — reduction exposed a `0 = c` row.
/// - [`LinalgError::InfiniteSolutions`] — free columns but no
///   inconsistent row.
///
/// # Examples
///
/// ```
/// use linsys::{gauss_jordan, Matrix};
///
/// let mut m: Matrix<f64> = Matrix::from_rows(vec![
///     vec![2.0, 1.0, -1.0, 8.0],
///     vec![-3.0, -1.0, 2.0, -11.0],
///     vec![-2.0, 1.0, 2.0, -3.0],
/// ]).unwrap();
///
/// gauss_jordan(&mut m).unwrap();
///
/// // x = 2, y = 3, z = -1
/// assert!((m[0][3] - 2.0).abs() < 1e-10);
/// assert!((m[1][3] - 3.0).abs() < 1e-10);
/// assert!((m[2][3] + 1.0).abs() < 1e-10);
/// ```
pub fn gauss_jordan<T: Scalar>(matrix: &mut Matrix<T>) -> Result<(), LinalgError> {
    if underdetermined(matrix) {
        return Err(LinalgError::UnderdeterminedSystem);
    }
    let reduction = rref(matrix);
    classify(matrix, reduction)
}

/// [`gauss_jordan`] with near-zero clamping during reduction.
///
/// Uses [`rref_with_tolerance`](crate::solve::rref_with_tolerance), so
/// elements whose magnitude falls below `zero_tolerance` are treated as
/// exact zeros when deciding pivots and classifying the outcome. Useful
/// for floating-point systems whose rank decisions would otherwise hinge
/// on rounding residue.
pub fn gauss_jordan_with_tolerance<T: Scalar + ToPrimitive>(
    matrix: &mut Matrix<T>,
    zero_tolerance: f64,
) -> Result<(), LinalgError> {
    if underdetermined(matrix) {
        return Err(LinalgError::UnderdeterminedSystem);
    }
    let reduction = rref_with_tolerance(matrix, zero_tolerance);
    classify(matrix, reduction)
}
