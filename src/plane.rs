use crate::error::LinalgError;
use crate::traits::Scalar;
use crate::vector::Vector;

/// A plane in 3-space, `ax + by + cz = k`.
///
/// Stores the normal vector `(a, b, c)`, one point known to lie on the
/// plane, and the raw coefficient tuple `(a, b, c, k)`.
///
/// # Examples
///
/// ```
/// use linsys::Plane;
///
/// let p = Plane::new(3.0, 5.0, 9.0, -26.0).unwrap();
/// assert_eq!(p.normal().as_slice(), &[3.0, 5.0, 9.0]);
/// let (a, b, c, k) = *p.coefficients();
/// let pt = p.point();
/// assert_eq!(a * pt[0] + b * pt[1] + c * pt[2], k);
/// ```
#[derive(Debug, Clone)]
pub struct Plane<T> {
    normal: Vector<T>,
    point: Vector<T>,
    coefficients: (T, T, T, T),
}

impl<T: Scalar> Plane<T> {
    /// Build a plane from the coefficients of `ax + by + cz = k`.
    ///
    /// Fails with [`LinalgError::InvalidShape`] when `a`, `b` and `c` are
    /// all zero, since that equation describes no plane. The stored point is
    /// derived from the first nonzero coefficient (`(k/a, 0, 0)`,
    /// `(0, k/b, 0)` or `(0, 0, k/c)`).
    pub fn new(a: T, b: T, c: T, k: T) -> Result<Self, LinalgError> {
        if a.is_zero() && b.is_zero() && c.is_zero() {
            return Err(LinalgError::InvalidShape(
                "plane normal coefficients cannot all be zero",
            ));
        }
        let normal = Vector::from_vec(vec![a, b, c]);
        let mut point = Vector::zeros(3);
        if !a.is_zero() {
            point[0] = k / a;
        } else if !b.is_zero() {
            point[1] = k / b;
        } else {
            point[2] = k / c;
        }
        Ok(Self {
            normal,
            point,
            coefficients: (a, b, c, k),
        })
    }

    /// Build a plane from a normal vector and a point on the plane,
    /// i.e. the solution set of `normal · (x - point) = 0`.
    ///
    /// Fails with [`LinalgError::IncompatibleVectors`] unless both
    /// vectors have exactly three components.
    ///
    /// ```
    /// use linsys::{Plane, Vector};
    ///
    /// let n = Vector::from_slice(&[-4.0, -3.0, 9.0]);
    /// let x0 = Vector::from_slice(&[-5.0, 3.0, -3.0]);
    /// let p = Plane::from_normal_and_point(&n, &x0).unwrap();
    ///
    /// let (a, b, c, k) = *p.coefficients();
    /// let pt = p.point();
    /// assert_eq!(a * pt[0] + b * pt[1] + c * pt[2], k);
    /// ```
    pub fn from_normal_and_point(
        normal: &Vector<T>,
        point: &Vector<T>,
    ) -> Result<Self, LinalgError> {
        if normal.len() != 3 || point.len() != 3 {
            return Err(LinalgError::IncompatibleVectors {
                left: normal.len(),
                right: point.len(),
            });
        }
        let k = normal.dot(point)?;
        Ok(Self {
            normal: normal.clone(),
            point: point.clone(),
            coefficients: (normal[0], normal[1], normal[2], k),
        })
    }

    /// The normal vector `(a, b, c)`.
    pub fn normal(&self) -> &Vector<T> {
        &self.normal
    }

    /// A point known to lie on the plane.
    pub fn point(&self) -> &Vector<T> {
        &self.point
    }

    /// The raw `(a, b, c, k)` coefficients.
    pub fn coefficients(&self) -> &(T, T, T, T) {
        &self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_from_coefficients() {
        let p = Plane::new(3.0, 5.0, 9.0, -26.0).unwrap();

        assert_eq!(p.normal().as_slice(), &[3.0, 5.0, 9.0]);
        assert_eq!(*p.coefficients(), (3.0, 5.0, 9.0, -26.0));

        let (a, b, c, k) = *p.coefficients();
        let pt = p.point();
        assert_eq!(a * pt[0] + b * pt[1] + c * pt[2], k);
    }

    #[test]
    fn point_derivation_skips_zero_coefficients() {
        let p = Plane::new(0.0, 0.0, 4.0, 8.0).unwrap();
        assert_eq!(p.point().as_slice(), &[0.0, 0.0, 2.0]);
    }

    #[test]
    fn degenerate_normal_is_rejected() {
        assert_eq!(
            Plane::new(0.0, 0.0, 0.0, 1.0).map(|_| ()),
            Err(LinalgError::InvalidShape(
                "plane normal coefficients cannot all be zero"
            ))
        );
    }

    #[test]
    fn plane_from_normal_and_point() {
        let n = Vector::from_slice(&[-4.0, -3.0, 9.0]);
        let x0 = Vector::from_slice(&[-5.0, 3.0, -3.0]);
        let p = Plane::from_normal_and_point(&n, &x0).unwrap();

        assert_eq!(p.normal().as_slice(), &[-4.0, -3.0, 9.0]);
        // k = n · x0 = 20 - 9 - 27 = -16
        assert_eq!(*p.coefficients(), (-4.0, -3.0, 9.0, -16.0));

        let (a, b, c, k) = *p.coefficients();
        let pt = p.point();
        assert_eq!(a * pt[0] + b * pt[1] + c * pt[2], k);
    }

    #[test]
    fn non_3d_inputs_are_rejected() {
        let n = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let x0 = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            Plane::from_normal_and_point(&n, &x0).map(|_| ()),
            Err(LinalgError::IncompatibleVectors { left: 4, right: 4 })
        );
    }

}
