use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::num::ParseIntError;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;

use num_integer::Integer;
use num_traits::{Num, One, ToPrimitive, Zero};

use crate::error::LinalgError;

/// An exact rational number stored as a reduced `num/den` pair of `i64`.
///
/// The main advantage over floating point is that comparisons against zero
/// stay exact, which is what decides solvability during row reduction.
/// Values are immutable once constructed: every arithmetic operator
/// produces a new, fully reduced fraction.
///
/// Invariants: `den > 0` (the sign lives in the numerator) and
/// `gcd(|num|, den) == 1`. Arithmetic uses plain `i64` operations and can
/// overflow on extreme inputs; arbitrary precision is out of scope.
///
/// # Examples
///
/// ```
/// use linsys::Fraction;
///
/// let f = Fraction::new(18, 24).unwrap();
/// assert_eq!(f.numer(), 3);
/// assert_eq!(f.denom(), 4);
/// assert_eq!(f.as_f64(), 0.75);
///
/// let g = Fraction::new(1, 4).unwrap();
/// assert_eq!(f + g, Fraction::new(1, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Create a fraction, reduced to lowest terms.
    ///
    /// Fails with [`LinalgError::ZeroDenominator`] when `den == 0`.
    ///
    /// ```
    /// use linsys::{Fraction, LinalgError};
    ///
    /// assert_eq!(Fraction::new(18, -24).unwrap().to_string(), "-3/4");
    /// assert_eq!(Fraction::new(5, 0), Err(LinalgError::ZeroDenominator));
    /// ```
    pub fn new(num: i64, den: i64) -> Result<Self, LinalgError> {
        if den == 0 {
            return Err(LinalgError::ZeroDenominator);
        }
        Ok(Self::reduced(num, den))
    }

    /// Reduce and normalize the sign into the numerator. `den` must be nonzero.
    fn reduced(num: i64, den: i64) -> Self {
        debug_assert_ne!(den, 0);
        if num == 0 {
            return Self { num: 0, den: 1 };
        }
        let g = num.gcd(&den);
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Self { num: -num, den: -den }
        } else {
            Self { num, den }
        }
    }

    /// The (sign-carrying) numerator of the reduced form.
    #[inline]
    pub fn numer(&self) -> i64 {
        self.num
    }

    /// The (always positive) denominator of the reduced form.
    #[inline]
    pub fn denom(&self) -> i64 {
        self.den
    }

    /// The `f64` image of this fraction.
    ///
    /// ```
    /// use linsys::Fraction;
    /// assert_eq!(Fraction::new(3, 4).unwrap().as_f64(), 0.75);
    /// ```
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Division that reports a zero divisor instead of panicking.
    ///
    /// Mirrors `i64::checked_div`.
    ///
    /// ```
    /// use linsys::Fraction;
    /// use num_traits::Zero;
    ///
    /// let f = Fraction::new(1, 2).unwrap();
    /// assert_eq!(f.checked_div(Fraction::zero()), None);
    /// ```
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.num == 0 {
            None
        } else {
            Some(Self::reduced(self.num * rhs.den, self.den * rhs.num))
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

// ── Arithmetic: Fraction ⊗ Fraction ─────────────────────────────────

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(
            self.num * rhs.den + rhs.num * self.den,
            self.den * rhs.den,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::reduced(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        if rhs.num == 0 {
            panic!("attempt to divide by zero");
        }
        Fraction::reduced(self.num * rhs.den, self.den * rhs.num)
    }
}

/// Remainder after truncated division, matching primitive integers:
/// `a % b == a - (a / b).trunc() * b`.
impl Rem for Fraction {
    type Output = Fraction;

    fn rem(self, rhs: Fraction) -> Fraction {
        let q = self / rhs;
        self - rhs * (q.num / q.den)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction { num: -self.num, den: self.den }
    }
}

// ── Arithmetic: Fraction ⊗ i64 ──────────────────────────────────────

impl Add<i64> for Fraction {
    type Output = Fraction;

    fn add(self, rhs: i64) -> Fraction {
        Fraction::reduced(self.num + self.den * rhs, self.den)
    }
}

impl Add<Fraction> for i64 {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        rhs + self
    }
}

impl Sub<i64> for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: i64) -> Fraction {
        Fraction::reduced(self.num - self.den * rhs, self.den)
    }
}

impl Sub<Fraction> for i64 {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        -rhs + self
    }
}

impl Mul<i64> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: i64) -> Fraction {
        Fraction::reduced(self.num * rhs, self.den)
    }
}

impl Mul<Fraction> for i64 {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        rhs * self
    }
}

impl Div<i64> for Fraction {
    type Output = Fraction;

    fn div(self, rhs: i64) -> Fraction {
        if rhs == 0 {
            panic!("attempt to divide by zero");
        }
        Fraction::reduced(self.num, self.den * rhs)
    }
}

impl Div<Fraction> for i64 {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        if rhs.num == 0 {
            panic!("attempt to divide by zero");
        }
        Fraction::reduced(rhs.den * self, rhs.num)
    }
}

// ── num-traits: Zero / One / Num ────────────────────────────────────

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction { num: 0, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction { num: 1, den: 1 }
    }
}

/// Failure parsing a `"p/q"` fraction literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    /// The numerator or denominator is not a valid integer.
    InvalidInteger(ParseIntError),
    /// The denominator parsed to zero.
    ZeroDenominator,
}

impl fmt::Display for ParseFractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFractionError::InvalidInteger(e) => write!(f, "invalid fraction literal: {}", e),
            ParseFractionError::ZeroDenominator => write!(f, "denominator cannot be zero"),
        }
    }
}

impl std::error::Error for ParseFractionError {}

impl From<ParseIntError> for ParseFractionError {
    fn from(e: ParseIntError) -> Self {
        ParseFractionError::InvalidInteger(e)
    }
}

impl Num for Fraction {
    type FromStrRadixErr = ParseFractionError;

    /// Parse `"p/q"` or a bare integer `"p"` in the given radix.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseFractionError> {
        let (num_s, den_s) = match s.split_once('/') {
            Some((n, d)) => (n, d),
            None => (s, "1"),
        };
        let num = i64::from_str_radix(num_s.trim(), radix)?;
        let den = i64::from_str_radix(den_s.trim(), radix)?;
        if den == 0 {
            return Err(ParseFractionError::ZeroDenominator);
        }
        Ok(Fraction::reduced(num, den))
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, ParseFractionError> {
        Fraction::from_str_radix(s, 10)
    }
}

impl ToPrimitive for Fraction {
    fn to_i64(&self) -> Option<i64> {
        Some(self.num / self.den)
    }

    fn to_u64(&self) -> Option<u64> {
        let q = self.num / self.den;
        if q < 0 {
            None
        } else {
            Some(q as u64)
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// ── Comparisons ─────────────────────────────────────────────────────
//
// Fraction-to-Fraction comparisons are exact (the reduced pair is
// canonical, ordering cross-multiplies in i128). Comparisons against f64
// go through the f64 image and accept floating error; comparisons
// against i64 cross-multiply exactly.

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = self.num as i128 * rhs.den as i128;
        let b = rhs.num as i128 * self.den as i128;
        a.cmp(&b)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num as i128 == self.den as i128 * *rhs as i128
    }
}

impl PartialEq<Fraction> for i64 {
    fn eq(&self, rhs: &Fraction) -> bool {
        rhs == self
    }
}

impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, rhs: &i64) -> Option<Ordering> {
        let a = self.num as i128;
        let b = self.den as i128 * *rhs as i128;
        Some(a.cmp(&b))
    }
}

impl PartialOrd<Fraction> for i64 {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        rhs.partial_cmp(self).map(Ordering::reverse)
    }
}

impl PartialEq<f64> for Fraction {
    fn eq(&self, rhs: &f64) -> bool {
        self.as_f64() == *rhs
    }
}

impl PartialEq<Fraction> for f64 {
    fn eq(&self, rhs: &Fraction) -> bool {
        *self == rhs.as_f64()
    }
}

impl PartialOrd<f64> for Fraction {
    fn partial_cmp(&self, rhs: &f64) -> Option<Ordering> {
        self.as_f64().partial_cmp(rhs)
    }
}

impl PartialOrd<Fraction> for f64 {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        self.partial_cmp(&rhs.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn construction_reduces() {
        let f = frac(18, 24);
        assert_eq!(f.numer(), 3);
        assert_eq!(f.denom(), 4);
    }

    #[test]
    fn construction_normalizes_sign() {
        let f = frac(18, -24);
        assert_eq!(f.numer(), -3);
        assert_eq!(f.denom(), 4);

        let g = frac(-18, -24);
        assert_eq!(g.numer(), 3);
        assert_eq!(g.denom(), 4);
    }

    #[test]
    fn zero_numerator_collapses() {
        let f = frac(0, -5);
        assert_eq!(f.numer(), 0);
        assert_eq!(f.denom(), 1);
        assert!(f.is_zero());
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert_eq!(Fraction::new(24, 0), Err(LinalgError::ZeroDenominator));
    }

    #[test]
    fn converts_to_f64() {
        assert_eq!(frac(18, 24).as_f64(), 0.75);
    }

    #[test]
    fn addition_with_integers() {
        let f = frac(11, 5);
        let sum = 1 + f + 11;
        assert_eq!(sum.numer(), 71);
        assert_eq!(sum.denom(), 5);
    }

    #[test]
    fn addition_with_fractions() {
        let sum = 1 + frac(4, 5) + frac(11, 5);
        assert_eq!(sum.numer(), 4);
        assert_eq!(sum.denom(), 1);
    }

    #[test]
    fn negation() {
        let f = -frac(11, 5);
        assert_eq!(f.numer(), -11);
        assert_eq!(f.denom(), 5);
    }

    #[test]
    fn subtraction_with_integers() {
        let diff = 10 - frac(11, 5) - 1;
        assert_eq!(diff.numer(), 34);
        assert_eq!(diff.denom(), 5);
    }

    #[test]
    fn subtraction_with_fractions() {
        let diff = 10 - frac(11, 5) - frac(1, 5);
        assert_eq!(diff.numer(), 38);
        assert_eq!(diff.denom(), 5);
    }

    #[test]
    fn multiplication_with_integers() {
        let prod = 3 * frac(11, 5) * 2;
        assert_eq!(prod.numer(), 66);
        assert_eq!(prod.denom(), 5);
    }

    #[test]
    fn multiplication_with_fractions() {
        let prod = 3 * frac(11, 5) * frac(2, 5);
        assert_eq!(prod.numer(), 66);
        assert_eq!(prod.denom(), 25);
    }

    #[test]
    fn division_with_integers() {
        let q = (22 / frac(11, 5)) / 2;
        assert_eq!(q.numer(), 5);
        assert_eq!(q.denom(), 1);
    }

    #[test]
    fn division_with_fractions() {
        let q = 3 * (frac(11, 5) / frac(11, 5));
        assert_eq!(q.numer(), 3);
        assert_eq!(q.denom(), 1);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn division_by_zero_fraction_panics() {
        let _ = frac(1, 2) / Fraction::zero();
    }

    #[test]
    fn checked_div_reports_zero_divisor() {
        assert_eq!(frac(1, 2).checked_div(Fraction::zero()), None);
        assert_eq!(frac(1, 2).checked_div(frac(1, 4)), Some(frac(2, 1)));
    }

    #[test]
    fn remainder_matches_truncated_division() {
        // 7/2 % 3/2 = 7/2 - 2*(3/2) = 1/2
        assert_eq!(frac(7, 2) % frac(3, 2), frac(1, 2));
        assert_eq!(frac(-7, 2) % frac(3, 2), frac(-1, 2));
    }

    #[test]
    fn fraction_comparisons() {
        let f1 = frac(1, 4);
        let f2 = frac(2, 4);
        let f3 = frac(3, 4);

        assert!(f1 < f2);
        assert!(f1 <= f2);
        assert!(f1 != f2);
        assert!(f3 > f2);
        assert!(f3 >= f2);
        assert_eq!(frac(2, 8), f1);
    }

    #[test]
    fn integer_comparisons() {
        let f1 = frac(1, 4);
        let f3 = frac(3, 4);

        assert!(0 < f1);
        assert!(0 != f1);
        assert!(1 > f3);
        assert!(f3 < 1);
        assert_eq!(frac(8, 4), 2);
    }

    #[test]
    fn float_comparisons() {
        let f1 = frac(1, 4);
        assert!(0.0 < f1);
        assert!(f1 == 0.25);
        assert!(1.0 > f1);
        assert!(f1 != 0.3);
    }

    #[test]
    fn parses_literals() {
        assert_eq!("18/24".parse::<Fraction>().unwrap(), frac(3, 4));
        assert_eq!("-7".parse::<Fraction>().unwrap(), frac(-7, 1));
        assert_eq!(
            "1/0".parse::<Fraction>(),
            Err(ParseFractionError::ZeroDenominator)
        );
        assert!(matches!(
            "x/2".parse::<Fraction>(),
            Err(ParseFractionError::InvalidInteger(_))
        ));
    }

    #[test]
    fn displays_reduced_form() {
        assert_eq!(frac(18, 24).to_string(), "3/4");
        assert_eq!(frac(10, 5).to_string(), "2");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
    }

    #[test]
    fn sums_an_iterator() {
        let total: Fraction = [frac(1, 2), frac(1, 3), frac(1, 6)].into_iter().sum();
        assert_eq!(total, frac(1, 1));
    }
}
