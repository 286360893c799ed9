mod ops;

use core::ops::{Index, IndexMut};

use crate::error::LinalgError;
use crate::traits::Scalar;

/// A dense `nrows x ncols` matrix backed by one contiguous buffer.
///
/// Rows are addressed through an offset table, so exchanging two rows is
/// an O(1) swap of offsets rather than an O(ncols) data move. Row views
/// are plain slices borrowed from the buffer: `m[i]` and [`Matrix::row`]
/// hand out `&[T]`, `m[i][j]` indexes an element, and the borrow checker
/// guarantees a view can neither outlive the matrix nor alias a mutation.
///
/// Element and row access is bounds-checked and panics out of range;
/// shape-dependent arithmetic (`&a + &b`, `&a * &b`, matrix-vector
/// products) returns `Result` instead. Duplicating the buffer is the
/// explicit [`Clone`].
///
/// # Examples
///
/// ```
/// use linsys::Matrix;
///
/// let m = Matrix::from_rows(vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
/// ]).unwrap();
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m[1][2], 6);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    row_map: Vec<usize>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use linsys::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[1][2], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be nonzero"
        );
        Self {
            data: vec![T::zero(); nrows * ncols],
            row_map: (0..nrows).map(|i| i * ncols).collect(),
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use linsys::Matrix;
    /// let id = Matrix::<i64>::identity(3);
    /// assert_eq!(id[0][0], 1);
    /// assert_eq!(id[0][1], 0);
    /// assert_eq!(id[2][2], 1);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            *m.element_mut(i, i) = T::one();
        }
        m
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use linsys::Matrix;
    /// let m = Matrix::from_fn(2, 2, |i, j| (2 * i + j) as i64);
    /// assert_eq!(m[1][0], 2);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be nonzero"
        );
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            row_map: (0..nrows).map(|i| i * ncols).collect(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a nested row collection.
    ///
    /// Fails with [`LinalgError::InvalidShape`] when there are no rows,
    /// a row is empty, or the rows have unequal lengths.
    ///
    /// ```
    /// use linsys::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[1][0], 3.0);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        if rows.is_empty() {
            return Err(LinalgError::InvalidShape("matrix cannot have zero rows"));
        }
        let ncols = rows[0].len();
        if ncols == 0 {
            return Err(LinalgError::InvalidShape(
                "matrix cannot have a row with zero elements",
            ));
        }
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in &rows {
            if row.len() != ncols {
                return Err(LinalgError::InvalidShape(
                    "all rows of the matrix must have the same length",
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            row_map: (0..nrows).map(|i| i * ncols).collect(),
            nrows,
            ncols,
        })
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
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

    /// View row `i` as a slice. Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "matrix row index out of range");
        let start = self.row_map[i];
        &self.data[start..start + self.ncols]
    }

    /// View row `i` as a mutable slice. Panics if `i` is out of range.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows, "matrix row index out of range");
        let start = self.row_map[i];
        &mut self.data[start..start + self.ncols]
    }

    /// Iterate over the rows as slices, in logical order.
    ///
    /// ```
    /// use linsys::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let rows: Vec<&[i32]> = m.rows().collect();
    /// assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.row_map
            .iter()
            .map(move |&start| &self.data[start..start + self.ncols])
    }

    #[inline]
    fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        let start = self.row_map[i];
        &mut self.data[start + j]
    }

    /// Mutable view of row `r1` together with a shared view of row `r2`.
    fn two_rows_mut(&mut self, r1: usize, r2: usize) -> (&mut [T], &[T]) {
        debug_assert_ne!(r1, r2);
        let (off1, off2) = (self.row_map[r1], self.row_map[r2]);
        let ncols = self.ncols;
        if off1 < off2 {
            let (head, tail) = self.data.split_at_mut(off2);
            (&mut head[off1..off1 + ncols], &tail[..ncols])
        } else {
            let (head, tail) = self.data.split_at_mut(off1);
            (&mut tail[..ncols], &head[off2..off2 + ncols])
        }
    }
}

// ── Row operations ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Replace row `r1` with the linear combination `a·row(r1) + b·row(r2)`.
    ///
    /// Panics if either row index is out of range. `r1 == r2` is allowed
    /// and scales the row by `a + b` elementwise. Returns `self` for
    /// chaining.
    ///
    /// ```
    /// use linsys::Matrix;
    /// let mut m = Matrix::from_rows(vec![vec![1, 2], vec![10, 20]]).unwrap();
    /// m.linear_comb_rows(0, 2, 1, 3);
    /// assert_eq!(m.row(0), &[32, 64]);
    /// ```
    pub fn linear_comb_rows(&mut self, r1: usize, a: T, r2: usize, b: T) -> &mut Self {
        assert!(
            r1 < self.nrows && r2 < self.nrows,
            "matrix row index out of range"
        );
        if r1 == r2 {
            for x in self.row_mut(r1) {
                *x = a * *x + b * *x;
            }
        } else {
            let (dst, src) = self.two_rows_mut(r1, r2);
            for (x, &y) in dst.iter_mut().zip(src.iter()) {
                *x = a * *x + b * y;
            }
        }
        self
    }

    /// Exchange two rows in O(1) by swapping their offsets in the row
    /// table; no element data moves.
    ///
    /// After an exchange the logical row order is a permutation over the
    /// fixed storage: any row slice fetched after the call observes the
    /// swapped content. Panics if either index is out of range. Returns
    /// `self` for chaining.
    ///
    /// ```
    /// use linsys::Matrix;
    /// let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// m.exchange_rows(0, 1);
    /// assert_eq!(m.row(0), &[3, 4]);
    /// m.exchange_rows(0, 1);
    /// assert_eq!(m.row(0), &[1, 2]);
    /// ```
    pub fn exchange_rows(&mut self, r1: usize, r2: usize) -> &mut Self {
        assert!(
            r1 < self.nrows && r2 < self.nrows,
            "matrix row index out of range"
        );
        self.row_map.swap(r1, r2);
        self
    }

    /// Scale row `i` by `factor` in place.
    ///
    /// Panics if `i` is out of range. Returns `self` for chaining.
    pub fn scale_row(&mut self, i: usize, factor: T) -> &mut Self {
        assert!(i < self.nrows, "matrix row index out of range");
        for x in self.row_mut(i) {
            *x = *x * factor;
        }
        self
    }

    /// Scale the whole matrix by `factor` in place.
    ///
    /// In-place on purpose: producing a fresh matrix per scaling would
    /// copy the entire buffer, so this is not an operator overload.
    pub fn scale(&mut self, factor: T) -> &mut Self {
        for i in 0..self.nrows {
            self.scale_row(i, factor);
        }
        self
    }
}

// ── Indexing ────────────────────────────────────────────────────────

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    /// `m[i]` is row `i`; `m[i][j]` is an element.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        self.row(i)
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        self.row_mut(i)
    }
}

/// Logical element-wise equality between matrices of possibly different
/// element types (row exchanges are accounted for).
impl<T: PartialEq<U>, U> PartialEq<Matrix<U>> for Matrix<T> {
    fn eq(&self, rhs: &Matrix<U>) -> bool {
        self.nrows == rhs.nrows
            && self.ncols == rhs.ncols
            && self
                .rows()
                .zip(rhs.rows())
                .all(|(a, b)| a.iter().zip(b.iter()).all(|(x, y)| x == y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    fn assert_rows(m: &Matrix<i64>, expected: &[&[i64]]) {
        assert_eq!(m.nrows(), expected.len());
        for (i, row) in expected.iter().enumerate() {
            assert_eq!(m.row(i), *row, "row {}", i);
        }
    }

    #[test]
    fn from_rows_round_trips() {
        let m = sample();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 3);
        assert_rows(&m, &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
    }

    #[test]
    fn zeros_and_identity() {
        let z = Matrix::<i64>::zeros(3, 3);
        assert_rows(&z, &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);

        let id = Matrix::<i64>::identity(3);
        assert_rows(&id, &[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        assert!(id.is_square());
    }

    #[test]
    fn construction_rejects_bad_shapes() {
        assert_eq!(
            Matrix::<f64>::from_rows(vec![]).unwrap_err(),
            LinalgError::InvalidShape("matrix cannot have zero rows")
        );
        assert_eq!(
            Matrix::<f64>::from_rows(vec![vec![], vec![]]).unwrap_err(),
            LinalgError::InvalidShape("matrix cannot have a row with zero elements")
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![1.2, 2.2], vec![3.2, 1.1, 7.0]]).unwrap_err(),
            LinalgError::InvalidShape("all rows of the matrix must have the same length")
        );
    }

    #[test]
    #[should_panic(expected = "matrix dimensions must be nonzero")]
    fn zero_dimensions_panic() {
        let _ = Matrix::<f64>::zeros(0, 3);
    }

    #[test]
    fn element_access_and_iteration() {
        let m = sample();
        assert_eq!(m[1][2], 6);

        let mut seen = Vec::new();
        for row in m.rows() {
            for &x in row {
                seen.push(x);
            }
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    #[should_panic(expected = "matrix row index out of range")]
    fn row_access_out_of_range_panics() {
        let m = sample();
        let _ = m[5][0];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn column_access_out_of_range_panics() {
        let m = sample();
        let _ = m[0][5];
    }

    #[test]
    fn linear_comb_rows() {
        let mut m = sample();
        m.linear_comb_rows(0, 2, 1, 3);
        assert_rows(&m, &[&[14, 19, 24], &[4, 5, 6], &[7, 8, 9]]);
    }

    #[test]
    fn linear_comb_same_row() {
        let mut m = sample();
        m.linear_comb_rows(1, 2, 1, 3);
        assert_rows(&m, &[&[1, 2, 3], &[20, 25, 30], &[7, 8, 9]]);
    }

    #[test]
    fn exchange_rows_swaps_views() {
        let mut m = sample();
        m.exchange_rows(0, 1);
        assert_rows(&m, &[&[4, 5, 6], &[1, 2, 3], &[7, 8, 9]]);
    }

    #[test]
    fn exchange_rows_is_involutive() {
        let mut m = sample();
        m.exchange_rows(0, 2).exchange_rows(0, 2);
        assert_rows(&m, &[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
    }

    #[test]
    fn row_operations_after_exchange_follow_logical_rows() {
        // Mutations through the row table land on logical rows, not
        // physical buffer positions.
        let mut m = sample();
        m.exchange_rows(0, 2).scale_row(0, 10);
        assert_rows(&m, &[&[70, 80, 90], &[4, 5, 6], &[1, 2, 3]]);
    }

    #[test]
    fn scale_row_and_matrix() {
        let mut m = sample();
        m.scale_row(0, 5);
        assert_rows(&m, &[&[5, 10, 15], &[4, 5, 6], &[7, 8, 9]]);

        let mut m = sample();
        m.scale(5);
        assert_rows(&m, &[&[5, 10, 15], &[20, 25, 30], &[35, 40, 45]]);
    }

    #[test]
    fn composite_row_operations_chain() {
        let mut m = sample();
        m.linear_comb_rows(0, 1, 1, 2).scale_row(0, 3).exchange_rows(0, 1);
        assert_rows(&m, &[&[4, 5, 6], &[27, 36, 45], &[7, 8, 9]]);
    }

    #[test]
    #[should_panic(expected = "matrix row index out of range")]
    fn linear_comb_out_of_range_panics() {
        let mut m = sample();
        m.linear_comb_rows(5, 1, 0, 2);
    }

    #[test]
    #[should_panic(expected = "matrix row index out of range")]
    fn exchange_out_of_range_panics() {
        let mut m = sample();
        m.exchange_rows(10, 0);
    }

    #[test]
    #[should_panic(expected = "matrix row index out of range")]
    fn scale_row_out_of_range_panics() {
        let mut m = sample();
        m.scale_row(10, 0);
    }

    #[test]
    fn equality_is_logical() {
        let mut a = sample();
        let b = Matrix::from_rows(vec![vec![4, 5, 6], vec![1, 2, 3], vec![7, 8, 9]]).unwrap();
        assert_ne!(a, b);
        a.exchange_rows(0, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn from_fn_fills_row_major() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as i64);
        assert_rows(&m, &[&[0, 1, 2], &[3, 4, 5]]);
    }
}
