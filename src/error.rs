use core::fmt;

/// Errors from fallible operations in this crate.
///
/// Expected numeric outcomes (an unsolvable system, a free column found
/// during reduction, a dimension mismatch between operands) are always
/// reported through `Result<_, LinalgError>`. Contract violations (row or
/// element index out of range, zero-dimension constructor arguments) panic
/// instead; they are caller bugs, not data-dependent outcomes.
///
/// ```
/// use linsys::{gauss_jordan, LinalgError, Matrix};
///
/// // 3 equations, 4 unknowns: rejected before any reduction happens.
/// let mut m = Matrix::<f64>::zeros(3, 5);
/// assert_eq!(gauss_jordan(&mut m), Err(LinalgError::UnderdeterminedSystem));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// A fraction was constructed with a zero denominator.
    ZeroDenominator,
    /// Matrix operands (or a matrix and a vector) have incompatible shapes.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// Two vectors have different lengths where equal lengths are required.
    IncompatibleVectors {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// A matrix or plane was constructed from degenerate input
    /// (zero rows, an empty row, ragged rows, an all-zero plane normal).
    InvalidShape(&'static str),
    /// The augmented matrix has fewer equations than variables.
    UnderdeterminedSystem,
    /// Row reduction found a column with no usable pivot.
    FreeColumns,
    /// The system of equations is inconsistent.
    NoSolutions,
    /// The system of equations has infinitely many solutions.
    InfiniteSolutions,
    /// An unexpected error was propagated through classification.
    Unknown,
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::ZeroDenominator => write!(f, "denominator cannot be zero"),
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::IncompatibleVectors { left, right } => write!(
                f,
                "incompatible vector dimensions: {} vs {}",
                left, right
            ),
            LinalgError::InvalidShape(msg) => write!(f, "{}", msg),
            LinalgError::UnderdeterminedSystem => write!(
                f,
                "the number of equations in the augmented matrix is less than the number of variables"
            ),
            LinalgError::FreeColumns => write!(
                f,
                "free columns detected during row reduction; the system does not have a unique solution"
            ),
            LinalgError::NoSolutions => write!(f, "this system of equations has no solutions"),
            LinalgError::InfiniteSolutions => {
                write!(f, "this system of equations has infinite solutions")
            }
            LinalgError::Unknown => write!(f, "unknown error"),
        }
    }
}

impl std::error::Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            LinalgError::NoSolutions.to_string(),
            "this system of equations has no solutions"
        );
        assert_eq!(
            LinalgError::DimensionMismatch {
                expected: (2, 3),
                got: (3, 2),
            }
            .to_string(),
            "dimension mismatch: expected 2x3, got 3x2"
        );
        assert_eq!(
            LinalgError::IncompatibleVectors { left: 2, right: 5 }.to_string(),
            "incompatible vector dimensions: 2 vs 5"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<LinalgError>();
    }
}
