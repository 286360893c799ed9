use num_traits::ToPrimitive;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::traits::Scalar;

/// Scan column `col` strictly below `start_row` for a nonzero entry.
///
/// Pivot search only looks downward; entries above the current row are
/// already settled by earlier pivots.
fn find_next_pivot<T: Scalar>(m: &Matrix<T>, start_row: usize, col: usize) -> Option<usize> {
    ((start_row + 1)..m.nrows()).find(|&r| !m[r][col].is_zero())
}

/// True iff the row encodes `0 = c` with `c != 0`: the last (augmented)
/// element is nonzero and every other element is zero. Such a row proves
/// the system inconsistent.
///
/// ```
/// use linsys::solve::is_false_identity_row;
/// assert!(is_false_identity_row(&[0.0, 0.0, 5.0]));
/// assert!(!is_false_identity_row(&[0.0, 1.0, 5.0]));
/// assert!(!is_false_identity_row(&[0.0, 0.0, 0.0]));
/// ```
pub fn is_false_identity_row<T: Scalar>(row: &[T]) -> bool {
    match row.split_last() {
        Some((last, rest)) => !last.is_zero() && rest.iter().all(|x| x.is_zero()),
        None => false,
    }
}

/// True iff every element of the row is equal (e.g. an all-zero `0 = 0`
/// row, or any other degenerate all-equal row).
pub fn is_identity_row<T: PartialEq>(row: &[T]) -> bool {
    row.windows(2).all(|w| w[0] == w[1])
}

/// Shared elimination driver. `clamp` post-processes every element of a
/// mutated row; the plain variant passes the identity.
fn reduce<T: Scalar>(m: &mut Matrix<T>, clamp: &dyn Fn(T) -> T) -> Result<(), LinalgError> {
    let mut free_columns = false;
    let pivots = m.nrows().min(m.ncols());

    for i in 0..pivots {
        // A zero pivot must be replaced from below, or the column is free.
        if m[i][i].is_zero() {
            match find_next_pivot(m, i, i) {
                Some(r) => {
                    m.exchange_rows(i, r);
                }
                None => {
                    free_columns = true;
                    continue;
                }
            }
        }

        // Eliminate column i from every other row.
        for r in 0..m.nrows() {
            if r == i || m[r][i].is_zero() {
                continue;
            }
            let factor = T::zero() - m[r][i] / m[i][i];
            m.linear_comb_rows(r, T::one(), i, factor);
            // Force the eliminated entry to exact zero; exact arithmetic
            // residue here would fake a pivot later.
            m.row_mut(r)[i] = T::zero();
            for x in m.row_mut(r) {
                *x = clamp(*x);
            }
        }

        // Normalize the pivot to 1.
        let pivot_inv = T::one() / m[i][i];
        m.scale_row(i, pivot_inv);
        for x in m.row_mut(i) {
            *x = clamp(*x);
        }
    }

    if free_columns {
        Err(LinalgError::FreeColumns)
    } else {
        Ok(())
    }
}

/// Reduce a matrix to reduced row-echelon form in place.
///
/// There is no restriction on the matrix shape; shape validation belongs
/// to the caller (see [`gauss_jordan`](crate::solve::gauss_jordan)).
/// Returns `Ok(())` when every column up to `min(nrows, ncols)` produced
/// a pivot, and [`LinalgError::FreeColumns`] when at least one column had
/// no usable pivot. In the latter case the matrix is still reduced as far
/// as possible; the free columns are simply left uneliminated.
///
/// Comparisons against zero are exact, which is the reason to run this
/// over [`Fraction`](crate::Fraction) elements when solvability decisions
/// must not be at the mercy of rounding. For floating point, see
/// [`rref_with_tolerance`].
///
/// ```
/// use linsys::{Matrix, solve::rref};
///
/// let mut m = Matrix::from_rows(vec![
///     vec![2.0, 0.0, 4.0],
///     vec![0.0, 4.0, 8.0],
/// ]).unwrap();
/// rref(&mut m).unwrap();
/// assert_eq!(m.row(0), &[1.0, 0.0, 2.0]);
/// assert_eq!(m.row(1), &[0.0, 1.0, 2.0]);
/// ```
pub fn rref<T: Scalar>(matrix: &mut Matrix<T>) -> Result<(), LinalgError> {
    reduce(matrix, &|x| x)
}

/// [`rref`], clamping near-zero elements to exactly zero as it goes.
///
/// After each row mutation, any element whose `f64` image lies strictly
/// inside `(-zero_tolerance, zero_tolerance)` is replaced by zero. This
/// keeps floating-point residue from masquerading as a pivot, at the cost
/// of a caller-chosen precision policy.
///
/// ```
/// use linsys::{LinalgError, Matrix, solve::rref_with_tolerance};
///
/// // Row 1 is dependent on row 0 in the coefficient columns; without
/// // clamping, ~1e-16 of elimination residue would fake a pivot there.
/// let mut m = Matrix::from_rows(vec![
///     vec![3.0, 6.0, 9.0],
///     vec![1.0, 2.0, 4.0],
/// ]).unwrap();
/// assert_eq!(
///     rref_with_tolerance(&mut m, 1e-10),
///     Err(LinalgError::FreeColumns),
/// );
/// ```
pub fn rref_with_tolerance<T: Scalar + ToPrimitive>(
    matrix: &mut Matrix<T>,
    zero_tolerance: f64,
) -> Result<(), LinalgError> {
    reduce(matrix, &|x| match x.to_f64() {
        Some(v) if v > -zero_tolerance && v < zero_tolerance => T::zero(),
        _ => x,
    })
}
