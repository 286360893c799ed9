//! # linsys
//!
//! Dense matrix and vector containers, an exact rational scalar type, and
//! an in-place RREF / Gauss-Jordan engine that classifies linear systems
//! (unique / no / infinitely-many solutions) without panicking on
//! expected failure modes.
//!
//! ## Quick start
//!
//! ```
//! use linsys::{gauss_jordan, LinalgError, Matrix};
//!
//! // Solve an augmented system Ax = b (last column is b):
//! //   2x +  y -  z =   8
//! //  -3x -  y + 2z = -11
//! //  -2x +  y + 2z =  -3
//! let mut m: Matrix<f64> = Matrix::from_rows(vec![
//!     vec![2.0, 1.0, -1.0, 8.0],
//!     vec![-3.0, -1.0, 2.0, -11.0],
//!     vec![-2.0, 1.0, 2.0, -3.0],
//! ]).unwrap();
//!
//! gauss_jordan(&mut m).unwrap();
//!
//! // The matrix is now in reduced row-echelon form and the solution
//! // x = 2, y = 3, z = -1 sits in the augmented column.
//! assert!((m[0][3] - 2.0).abs() < 1e-10);
//! assert!((m[1][3] - 3.0).abs() < 1e-10);
//! assert!((m[2][3] + 1.0).abs() < 1e-10);
//!
//! // Inconsistent or dependent systems come back as typed errors, not
//! // panics — see LinalgError::NoSolutions / InfiniteSolutions.
//! let mut singular = Matrix::from_rows(vec![
//!     vec![1.0, 1.0, 1.0],
//!     vec![1.0, 1.0, 2.0],
//! ]).unwrap();
//! assert_eq!(gauss_jordan(&mut singular), Err(LinalgError::NoSolutions));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — dense `Matrix<T>` with one contiguous buffer, slice row
//!   views through an offset table (row exchange is an O(1) offset swap),
//!   row operations, and dimension-checked arithmetic.
//!
//! - [`vector`] — fixed-length heap `Vector<T>` with dot product, scaling,
//!   add/sub, and the `magnitude` / `magnitude_squared` pair.
//!
//! - [`fraction`] — `Fraction`, an exact `i64` rational in lowest terms.
//!   Use it as the element type when comparisons against zero must be
//!   exact instead of tolerance-based.
//!
//! - [`solve`] — the in-place [`rref`] engine and the [`gauss_jordan`]
//!   solver with its three-way outcome classification, plus
//!   `_with_tolerance` variants that clamp floating-point residue.
//!
//! - [`vectorspace`] — dependence tests, cosine angles, cross products,
//!   and set independence via the null-space method.
//!
//! - [`plane`] — `ax + by + cz = k` planes for the 3-D helpers.
//!
//! - [`benchmark`] — a small input-size/iterations timing harness.
//!
//! - [`error`] / [`traits`] — the shared [`LinalgError`] taxonomy and the
//!   [`Scalar`] element trait.
//!
//! ## Error philosophy
//!
//! Expected numeric outcomes (unsolvable systems, free columns, shape
//! mismatches between operands) are `Result`s carrying a [`LinalgError`].
//! Contract violations (indexing out of range, zero-dimension
//! constructors) panic. Nothing in the solving pipeline panics on
//! well-formed input data.

pub mod benchmark;
pub mod error;
pub mod fraction;
pub mod matrix;
pub mod plane;
pub mod solve;
pub mod traits;
pub mod vector;
pub mod vectorspace;

pub use error::LinalgError;
pub use fraction::Fraction;
pub use matrix::Matrix;
pub use plane::Plane;
pub use solve::{gauss_jordan, gauss_jordan_with_tolerance, rref, rref_with_tolerance};
pub use traits::Scalar;
pub use vector::Vector;
