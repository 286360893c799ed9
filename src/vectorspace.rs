//! Vector-space helpers built on top of the core containers: pairwise
//! dependence tests, angles, cross products, and linear independence of
//! vector sets via the null-space method.
//!
//! Everything here consumes the public [`Vector`](crate::Vector) /
//! [`Matrix`](crate::Matrix) API and reports failures through the shared
//! [`LinalgError`] taxonomy.

use num_traits::ToPrimitive;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::plane::Plane;
use crate::solve::rref;
use crate::traits::Scalar;
use crate::vector::Vector;

#[inline]
fn as_f64<T: ToPrimitive>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Test two vectors for linear dependence via the Cauchy-Schwarz
/// equality: they are dependent iff `(v1 · v2)² == |v1|²·|v2|²`.
///
/// The comparison runs in `f64` over the squared magnitudes, so no
/// square root is taken. Fails with [`LinalgError::IncompatibleVectors`]
/// when the lengths differ.
///
/// ```
/// use linsys::{vectorspace::are_linearly_dependent, Vector};
///
/// let v1 = Vector::from_slice(&[1.0, 2.0]);
/// let v2 = Vector::from_slice(&[-1.0, -2.0]);
/// assert!(are_linearly_dependent(&v1, &v2).unwrap());
///
/// let v3 = Vector::from_slice(&[1.0, 55.0]);
/// assert!(!are_linearly_dependent(&v1, &v3).unwrap());
/// ```
pub fn are_linearly_dependent<T: Scalar + ToPrimitive>(
    v1: &Vector<T>,
    v2: &Vector<T>,
) -> Result<bool, LinalgError> {
    let dot = as_f64(v1.dot(v2)?);
    let m1 = as_f64(v1.magnitude_squared());
    let m2 = as_f64(v2.magnitude_squared());
    Ok(dot * dot == m1 * m2)
}

/// Cosine of the angle between two vectors.
///
/// Fails with [`LinalgError::IncompatibleVectors`] when the lengths
/// differ.
///
/// ```
/// use linsys::{vectorspace::cosine_angle, Vector};
///
/// let v1 = Vector::from_slice(&[1.0, 1.0]);
/// let v2 = Vector::from_slice(&[-2.0, -2.0]);
/// assert_eq!(cosine_angle(&v1, &v2).unwrap(), -1.0);
/// ```
pub fn cosine_angle<T: Scalar + ToPrimitive>(
    v1: &Vector<T>,
    v2: &Vector<T>,
) -> Result<f64, LinalgError> {
    let dot = as_f64(v1.dot(v2)?);
    let m1 = as_f64(v1.magnitude_squared());
    let m2 = as_f64(v2.magnitude_squared());
    Ok(dot / (m1 * m2).sqrt())
}

/// Cross product of two 3-dimensional vectors.
///
/// Fails with [`LinalgError::IncompatibleVectors`] unless both vectors
/// have exactly three components.
///
/// ```
/// use linsys::{vectorspace::cross, Vector};
///
/// let x = Vector::from_slice(&[1, 0, 0]);
/// let y = Vector::from_slice(&[0, 1, 0]);
/// assert_eq!(cross(&x, &y).unwrap().as_slice(), &[0, 0, 1]);
/// ```
pub fn cross<T: Scalar>(v1: &Vector<T>, v2: &Vector<T>) -> Result<Vector<T>, LinalgError> {
    if v1.len() != 3 || v2.len() != 3 {
        return Err(LinalgError::IncompatibleVectors {
            left: v1.len(),
            right: v2.len(),
        });
    }
    let (a1, a2, a3) = (v1[0], v1[1], v1[2]);
    let (b1, b2, b3) = (v2[0], v2[1], v2[2]);
    Ok(Vector::from_vec(vec![
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ]))
}

/// Whether `vec` points along the plane's normal (cosine exactly 1).
///
/// Fails with [`LinalgError::IncompatibleVectors`] unless `vec` has
/// three components.
pub fn is_normal_to_plane<T: Scalar + ToPrimitive>(
    plane: &Plane<T>,
    vec: &Vector<T>,
) -> Result<bool, LinalgError> {
    if vec.len() != 3 {
        return Err(LinalgError::IncompatibleVectors {
            left: 3,
            right: vec.len(),
        });
    }
    Ok(cosine_angle(plane.normal(), vec)? == 1.0)
}

/// Test a set of vectors for linear independence using the null-space
/// method.
///
/// The vectors become the rows of a homogeneous augmented matrix (zero
/// right-hand column) which is run through [`rref`]: a clean reduction
/// means only the trivial combination reaches zero (independent), free
/// columns mean nontrivial combinations exist (dependent).
///
/// Errors:
/// - [`LinalgError::UnderdeterminedSystem`] for fewer than two vectors —
///   independence of a single vector is not a meaningful question here;
/// - [`LinalgError::IncompatibleVectors`] when the vectors have mixed
///   lengths.
///
/// More vectors than dimensions is answered directly with `Ok(false)`.
///
/// ```
/// use linsys::{vectorspace::are_linearly_independent, Vector};
///
/// let basis = [
///     Vector::from_slice(&[1.0, 0.0, 0.0]),
///     Vector::from_slice(&[0.0, 1.0, 0.0]),
///     Vector::from_slice(&[0.0, 0.0, 1.0]),
/// ];
/// assert!(are_linearly_independent(&basis).unwrap());
/// ```
pub fn are_linearly_independent<T: Scalar>(
    vectors: &[Vector<T>],
) -> Result<bool, LinalgError> {
    if vectors.len() < 2 {
        return Err(LinalgError::UnderdeterminedSystem);
    }

    let dim = vectors[0].len();
    for v in vectors {
        if v.len() != dim {
            return Err(LinalgError::IncompatibleVectors {
                left: dim,
                right: v.len(),
            });
        }
    }

    // A set wider than the space it lives in is always dependent.
    if vectors.len() > dim {
        return Ok(false);
    }

    let mut m = Matrix::zeros(vectors.len(), dim + 1);
    for (i, v) in vectors.iter().enumerate() {
        m.row_mut(i)[..dim].copy_from_slice(v.as_slice());
    }

    match rref(&mut m) {
        // Unique solution: only the trivial combination gives zero.
        Ok(()) => Ok(true),
        // A homogeneous system cannot be inconsistent; free columns
        // mean infinitely many combinations, hence dependence.
        Err(LinalgError::FreeColumns) => Ok(false),
        Err(_) => Err(LinalgError::Unknown),
    }
}
