//! In-place row reduction and linear-system solving.
//!
//! [`rref`] reduces any matrix to reduced row-echelon form and reports
//! whether free columns were encountered. [`gauss_jordan`] wraps it with
//! augmented-matrix validation and classifies the outcome into unique /
//! no / infinitely-many solutions. The `_with_tolerance` variants clamp
//! near-zero floating point residue to exact zero while reducing.
//!
//! All four functions mutate the matrix they are given and return
//! `Result<(), LinalgError>`; on success the solution sits in the last
//! column of the reduced matrix.

mod gauss_jordan;
mod rref;

pub use gauss_jordan::{gauss_jordan, gauss_jordan_with_tolerance};
pub use rref::{is_false_identity_row, is_identity_row, rref, rref_with_tolerance};
