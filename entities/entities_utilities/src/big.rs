//! Big Number Operations
//!
//! Provides the arbitrary precision integer used by the numeric kernel.
//!
//! This module uses the `malachite` crate for the heavy lifting. The kernel only
//! needs a small slice of big-integer arithmetic: addition, subtraction,
//! multiplication, truncating division, modular exponentiation and powers of
//! ten. Everything here is a thin, infallible-where-possible wrapper so the
//! primality and decimal code can stay independent of malachite's trait zoo.

use malachite::base::num::arithmetic::traits::{ModPow, Pow};
use malachite::{Integer, Natural};

/// Big number representation using malachite's Integer
///
/// Values are signed; operations that are only meaningful for non-negative
/// operands (modular exponentiation) return `None` when that is violated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0u32),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u128
    pub fn from_u128(value: u128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to u128
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u128(&self) -> Option<u128> {
        u128::try_from(&self.value).ok()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Returns true if positive or zero, false if negative
    pub fn is_positive(&self) -> bool {
        self.value >= 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number equals one
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two big numbers, truncating toward zero: x / y
    ///
    /// Returns None if dividing by zero
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Remainder of truncating division: x % y
    ///
    /// The result takes the sign of the dividend. Returns None if dividing by zero.
    pub fn rem(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value % &other.value,
        })
    }

    /// Quotient and remainder in one call: (x / y, x % y)
    ///
    /// Returns None if dividing by zero
    pub fn div_rem(&self, other: &Self) -> Option<(Self, Self)> {
        let quotient = self.div(other)?;
        let remainder = self.minus(&quotient.times(other));
        Some((quotient, remainder))
    }

    /// Bitwise OR: x | y
    pub fn bitor(&self, other: &Self) -> Self {
        Self {
            value: &self.value | &other.value,
        }
    }

    /// Left shift: x << y
    ///
    /// y can be negative for right shift
    pub fn lshift(&self, shift: i32) -> Self {
        if shift >= 0 {
            Self {
                value: &self.value << shift as u64,
            }
        } else {
            Self {
                value: &self.value >> (-shift) as u64,
            }
        }
    }

    /// Raise ten to `exp`: 10^exp
    pub fn pow10(exp: u32) -> Self {
        Self {
            value: Integer::from(10u32).pow(u64::from(exp)),
        }
    }

    /// Modular exponentiation: self^exp mod modulus
    ///
    /// All three operands must be non-negative and the modulus non-zero;
    /// otherwise returns None. The base is reduced before exponentiation,
    /// so it may be larger than the modulus.
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> Option<Self> {
        let base = Natural::try_from(&self.value).ok()?;
        let exp = Natural::try_from(&exp.value).ok()?;
        let modulus = Natural::try_from(&modulus.value).ok()?;
        if modulus == 0u32 {
            return None;
        }
        if modulus == 1u32 {
            return Some(Self::zero());
        }
        let reduced = &base % &modulus;
        Some(Self {
            value: Integer::from(reduced.mod_pow(&exp, &modulus)),
        })
    }

    /// Modular squaring: self^2 mod modulus
    ///
    /// Returns None if the modulus is zero. The result takes the sign of
    /// the square, which is never negative.
    pub fn square_mod(&self, modulus: &Self) -> Option<Self> {
        self.times(self).rem(modulus)
    }

    /// Check whether the value is non-negative and fits in `bits` bits
    pub fn fits_in_bits(&self, bits: u32) -> bool {
        self.value >= 0 && self.value < (Integer::from(1u32) << u64::from(bits))
    }

    /// Compare two big numbers (signed comparison)
    ///
    /// Returns:
    /// - -1 if self < other
    /// - 0 if self == other
    /// - 1 if self > other
    pub fn comp(&self, other: &Self) -> i32 {
        match self.value.cmp(&other.value) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_operations() {
        let a = BigNumber::from_u64(100);
        let b = BigNumber::from_u64(50);

        assert_eq!(a.plus(&b).to_u64(), Some(150));
        assert_eq!(a.minus(&b).to_u64(), Some(50));
        assert_eq!(a.times(&b).to_u64(), Some(5000));
        assert_eq!(a.div(&b).unwrap().to_u64(), Some(2));
        assert_eq!(a.rem(&b).unwrap().to_u64(), Some(0));
    }

    #[test]
    fn test_division_by_zero() {
        let a = BigNumber::from_u64(7);
        assert!(a.div(&BigNumber::zero()).is_none());
        assert!(a.rem(&BigNumber::zero()).is_none());
        assert!(a.div_rem(&BigNumber::zero()).is_none());
    }

    #[test]
    fn test_div_rem_truncates() {
        let (q, r) = BigNumber::from_u64(150)
            .div_rem(&BigNumber::from_u64(100))
            .unwrap();
        assert_eq!(q.to_u64(), Some(1));
        assert_eq!(r.to_u64(), Some(50));

        let (q, r) = BigNumber::from_i64(-150)
            .div_rem(&BigNumber::from_u64(100))
            .unwrap();
        assert_eq!(q.to_i64(), Some(-1));
        assert_eq!(r.to_i64(), Some(-50));
    }

    #[test]
    fn test_shift_operations() {
        let a = BigNumber::from_u64(10);

        assert_eq!(a.lshift(2).to_u64(), Some(40));
        assert_eq!(a.lshift(-1).to_u64(), Some(5));
        assert_eq!(BigNumber::from_u32(1).lshift(64).to_u128(), Some(1u128 << 64));
    }

    #[test]
    fn test_pow10() {
        assert_eq!(BigNumber::pow10(0).to_u64(), Some(1));
        assert_eq!(BigNumber::pow10(2).to_u64(), Some(100));
        assert_eq!(BigNumber::pow10(28).to_u128(), Some(10u128.pow(28)));
    }

    #[test]
    fn test_mod_pow() {
        let r = BigNumber::from_u64(4)
            .mod_pow(&BigNumber::from_u64(13), &BigNumber::from_u64(497))
            .unwrap();
        assert_eq!(r.to_u64(), Some(445));

        // Base larger than the modulus is reduced first
        let r = BigNumber::from_u64(1000)
            .mod_pow(&BigNumber::from_u64(2), &BigNumber::from_u64(7))
            .unwrap();
        assert_eq!(r.to_u64(), Some((1000u64 * 1000) % 7));
    }

    #[test]
    fn test_mod_pow_rejects_bad_operands() {
        let one = BigNumber::from_u64(1);
        assert!(one.mod_pow(&one, &BigNumber::zero()).is_none());
        assert!(BigNumber::from_i64(-2).mod_pow(&one, &one).is_none());
    }

    #[test]
    fn test_square_mod_wide_operands() {
        let n = BigNumber::from_u64(u64::MAX - 58);
        let x = BigNumber::from_u64(u64::MAX - 60);
        let expected = (u128::from(u64::MAX - 60) * u128::from(u64::MAX - 60))
            % u128::from(u64::MAX - 58);
        assert_eq!(x.square_mod(&n).unwrap().to_u128(), Some(expected));
    }

    #[test]
    fn test_fits_in_bits() {
        let max96 = BigNumber::from_u128((1u128 << 96) - 1);
        assert!(max96.fits_in_bits(96));
        assert!(!max96.plus(&BigNumber::from_u32(1)).fits_in_bits(96));
        assert!(!BigNumber::from_i64(-1).fits_in_bits(96));
    }

    #[test]
    fn test_comparison() {
        let a = BigNumber::from_u64(100);
        let b = BigNumber::from_u64(50);

        assert_eq!(a.comp(&b), 1);
        assert_eq!(b.comp(&a), -1);
        assert_eq!(a.comp(&a.clone()), 0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(BigNumber::from_i64(-5).to_u64(), None);
        assert_eq!(BigNumber::from_u128(u128::MAX).to_u64(), None);
        assert_eq!(BigNumber::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigNumber::from_u64(12345).to_string(), "12345");
    }
}
