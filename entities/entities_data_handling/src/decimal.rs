//! 128-bit Decimal Module
//!
//! Storage type for the fixed-scale 128-bit decimal encoding.
//!
//! ## Layout
//!
//! A value is four 32-bit words, serialized little-endian in this order:
//!
//! ```text
//!   word 0  lo     bits  0..32 of the significand
//!   word 1  mid    bits 32..64 of the significand
//!   word 2  hi     bits 64..96 of the significand
//!   word 3  flags  bits 16..24: scale (0..=28)
//!                  bit 31:      sign (1 = negative)
//!                  all other bits reserved, must be zero
//! ```
//!
//! The represented value is `(sign ? -1 : 1) * significand / 10^scale`.
//!
//! [`Decimal128`] is a raw container: [`Decimal128::from_words`] and
//! [`Decimal128::from_le_bytes`] accept any pattern, and
//! [`Decimal128::validate`] reports patterns that violate the layout.
//! The checked constructors never produce such patterns.
//!
//! Equality is representational: `1.5` and `1.50` are different values of
//! this type even though they denote the same number.

use crate::error::{NumericError, NumericResult};
use entities_utilities::BigNumber;
use std::fmt;
use std::str::FromStr;

/// Largest scale the encoding allows
pub const MAX_SCALE: u8 = 28;

/// Width of the significand in bits
pub const SIGNIFICAND_BITS: u32 = 96;

const SCALE_SHIFT: u32 = 16;
const SCALE_MASK: u32 = 0x00FF_0000;
const SIGN_MASK: u32 = 0x8000_0000;
const RESERVED_MASK: u32 = !(SCALE_MASK | SIGN_MASK);
const SIGNIFICAND_MAX: u128 = (1u128 << SIGNIFICAND_BITS) - 1;

/// A 128-bit fixed-scale decimal value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decimal128 {
    lo: u32,
    mid: u32,
    hi: u32,
    flags: u32,
}

impl Decimal128 {
    /// Zero with scale 0
    pub const ZERO: Decimal128 = Decimal128 {
        lo: 0,
        mid: 0,
        hi: 0,
        flags: 0,
    };

    /// Build a value from its significand words, sign and scale
    ///
    /// # Errors
    /// `Domain` if `scale` exceeds [`MAX_SCALE`].
    pub fn new(lo: u32, mid: u32, hi: u32, negative: bool, scale: u8) -> NumericResult<Self> {
        if scale > MAX_SCALE {
            return Err(NumericError::domain(format!(
                "scale {} exceeds maximum {}",
                scale, MAX_SCALE
            )));
        }
        let mut flags = u32::from(scale) << SCALE_SHIFT;
        if negative {
            flags |= SIGN_MASK;
        }
        Ok(Self { lo, mid, hi, flags })
    }

    /// Build a value from a big-integer significand
    ///
    /// # Errors
    /// - `Domain` if the significand is negative or the scale exceeds [`MAX_SCALE`]
    /// - `MalformedEncoding` if the significand needs more than 96 bits
    pub fn from_components(significand: &BigNumber, scale: u8, negative: bool) -> NumericResult<Self> {
        if !significand.is_positive() {
            return Err(NumericError::domain(format!(
                "significand {} is negative",
                significand
            )));
        }
        if !significand.fits_in_bits(SIGNIFICAND_BITS) {
            return Err(NumericError::malformed(format!(
                "significand {} exceeds {} bits",
                significand, SIGNIFICAND_BITS
            )));
        }
        let magnitude = significand.to_u128().ok_or_else(|| {
            NumericError::malformed(format!("significand {} exceeds 128 bits", significand))
        })?;
        let [lo, mid, hi] = split_words(magnitude);
        Self::new(lo, mid, hi, negative, scale)
    }

    /// Integer value with scale 0
    pub fn from_i64(value: i64) -> Self {
        let [lo, mid, hi] = split_words(u128::from(value.unsigned_abs()));
        let flags = if value < 0 { SIGN_MASK } else { 0 };
        Self { lo, mid, hi, flags }
    }

    /// Reinterpret four words `[lo, mid, hi, flags]` without validation
    pub fn from_words(words: [u32; 4]) -> Self {
        let [lo, mid, hi, flags] = words;
        Self { lo, mid, hi, flags }
    }

    /// The four words `[lo, mid, hi, flags]`
    pub fn to_words(&self) -> [u32; 4] {
        [self.lo, self.mid, self.hi, self.flags]
    }

    /// Reinterpret the 16-byte little-endian layout without validation
    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let word = |i: usize| {
            u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Self::from_words([word(0), word(4), word(8), word(12)])
    }

    /// The 16-byte little-endian layout
    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.to_words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Significand words `[lo, mid, hi]`
    pub fn significand_words(&self) -> [u32; 3] {
        [self.lo, self.mid, self.hi]
    }

    /// Raw flags word
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Scale byte as stored; only guaranteed to be in range after [`validate`](Self::validate)
    pub fn scale(&self) -> u8 {
        ((self.flags & SCALE_MASK) >> SCALE_SHIFT) as u8
    }

    /// Sign flag
    pub fn is_negative(&self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    /// True if the significand is zero, regardless of sign or scale
    pub fn is_zero(&self) -> bool {
        self.lo == 0 && self.mid == 0 && self.hi == 0
    }

    /// Check the layout invariants of the flags word
    ///
    /// # Errors
    /// `MalformedEncoding` if reserved flag bits are set or the scale exceeds [`MAX_SCALE`].
    pub fn validate(&self) -> NumericResult<()> {
        if self.flags & RESERVED_MASK != 0 {
            return Err(NumericError::malformed(format!(
                "reserved flag bits set: {:#010x}",
                self.flags & RESERVED_MASK
            )));
        }
        if self.scale() > MAX_SCALE {
            return Err(NumericError::malformed(format!(
                "scale {} exceeds maximum {}",
                self.scale(),
                MAX_SCALE
            )));
        }
        Ok(())
    }

    fn significand_u128(&self) -> u128 {
        (u128::from(self.hi) << 64) | (u128::from(self.mid) << 32) | u128::from(self.lo)
    }
}

fn split_words(magnitude: u128) -> [u32; 3] {
    [
        magnitude as u32,
        (magnitude >> 32) as u32,
        (magnitude >> 64) as u32,
    ]
}

impl fmt::Display for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.significand_u128().to_string();
        let scale = usize::from(self.scale());
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int_digits, frac_digits) = padded.split_at(padded.len() - scale);
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(int_digits)?;
        if scale > 0 {
            write!(f, ".{}", frac_digits)?;
        }
        Ok(())
    }
}

impl FromStr for Decimal128 {
    type Err = NumericError;

    /// Parse a plain decimal literal such as `1.50`, `-0.001` or `+42`
    ///
    /// The number of fraction digits becomes the scale, so trailing zeros
    /// are preserved. Exponent notation and digit separators are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(NumericError::domain(format!("no digits in {:?}", s)));
        }
        if frac_digits.len() > usize::from(MAX_SCALE) {
            return Err(NumericError::domain(format!(
                "{:?} has more than {} fraction digits",
                s, MAX_SCALE
            )));
        }

        let mut significand: u128 = 0;
        for c in int_digits.chars().chain(frac_digits.chars()) {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| NumericError::domain(format!("invalid digit {:?} in {:?}", c, s)))?;
            significand = significand
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(digit)))
                .filter(|v| *v <= SIGNIFICAND_MAX)
                .ok_or_else(|| {
                    NumericError::domain(format!("{:?} does not fit in {} bits", s, SIGNIFICAND_BITS))
                })?;
        }

        let [lo, mid, hi] = split_words(significand);
        Self::new(lo, mid, hi, negative, frac_digits.len() as u8)
    }
}
