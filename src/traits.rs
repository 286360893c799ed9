use core::fmt::Debug;
use num_traits::{Num, One, Zero};

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds. Covers `f32`,
/// `f64`, all integer primitives, and [`Fraction`](crate::Fraction).
///
/// Row reduction only needs ring/field arithmetic plus an exact
/// comparison to zero, so this is the single bound used throughout the
/// crate. Operations that additionally need an `f64` image of the values
/// (magnitudes, cosines, tolerance clamping) add
/// [`num_traits::ToPrimitive`] on top.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fraction;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn primitive_elements_are_scalars() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<u64>();
    }

    #[test]
    fn fraction_is_a_scalar() {
        assert_scalar::<Fraction>();
    }
}
