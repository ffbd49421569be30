//! Float Bit Layout Module
//!
//! Raw bit reinterpretation of IEEE-754 binary floating-point values.
//!
//! [`FloatBits`] ties a float type to the unsigned integer of the same width
//! and describes the layout of its fields. Conversion is a pure
//! reinterpretation (`to_bits`/`from_bits`); no numeric conversion happens.
//!
//! ```text
//!   binary32: | sign (1) | exponent (8)  | mantissa (23) |   bias 127
//!   binary64: | sign (1) | exponent (11) | mantissa (52) |   bias 1023
//! ```

use crate::bits::BitWidth;
use num_traits::Float;

/// An IEEE-754 binary floating-point type with a known field layout
pub trait FloatBits: Float {
    /// Unsigned integer of the same width
    type Bits: BitWidth + Into<u64>;

    /// Number of stored mantissa bits (no implicit leading bit)
    const MANTISSA_BITS: u32;
    /// Number of exponent bits
    const EXPONENT_BITS: u32;
    /// Exponent bias
    const EXPONENT_BIAS: i32;

    /// Reinterpret the value as its raw bit pattern
    fn to_raw(self) -> Self::Bits;

    /// Reinterpret a raw bit pattern as a value
    fn from_raw(bits: Self::Bits) -> Self;

    /// Narrow a u64 to the low bits that fit in [`Self::Bits`](FloatBits::Bits)
    fn truncate_raw(raw: u64) -> Self::Bits;

    /// Bit position of the sign bit
    fn sign_shift() -> u32 {
        Self::MANTISSA_BITS + Self::EXPONENT_BITS
    }

    /// Biased exponent value reserved for infinities and NaN
    fn max_biased_exponent() -> u32 {
        (1u32 << Self::EXPONENT_BITS) - 1
    }

    /// Assemble a raw bit pattern from its three fields
    ///
    /// Fields wider than their slot are truncated to the slot.
    fn assemble(sign_bit: u32, biased_exponent: u32, mantissa: u64) -> Self::Bits {
        let mantissa_mask = (1u64 << Self::MANTISSA_BITS) - 1;
        let exponent_mask = u64::from(Self::max_biased_exponent());
        let raw = (u64::from(sign_bit & 1) << Self::sign_shift())
            | ((u64::from(biased_exponent) & exponent_mask) << Self::MANTISSA_BITS)
            | (mantissa & mantissa_mask);
        Self::truncate_raw(raw)
    }
}

impl FloatBits for f32 {
    type Bits = u32;

    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 127;

    fn to_raw(self) -> u32 {
        self.to_bits()
    }

    fn from_raw(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    fn truncate_raw(raw: u64) -> u32 {
        raw as u32
    }
}

impl FloatBits for f64 {
    type Bits = u64;

    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1023;

    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn truncate_raw(raw: u64) -> u64 {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(<f32 as FloatBits>::sign_shift(), 31);
        assert_eq!(<f64 as FloatBits>::sign_shift(), 63);
        assert_eq!(<f32 as FloatBits>::max_biased_exponent(), 255);
        assert_eq!(<f64 as FloatBits>::max_biased_exponent(), 2047);
    }

    #[test]
    fn test_reinterpretation_is_exact() {
        assert_eq!(1.0f32.to_raw(), 0x3F80_0000);
        assert_eq!((-0.0f32).to_raw(), 0x8000_0000);
        assert_eq!(f32::from_raw(0x3FC0_0000), 1.5);
        assert_eq!(1.0f64.to_raw(), 0x3FF0_0000_0000_0000);
    }

    #[test]
    fn test_assemble() {
        assert_eq!(<f32 as FloatBits>::assemble(0, 127, 0x40_0000), 0x3FC0_0000);
        assert_eq!(<f32 as FloatBits>::assemble(1, 0, 0), 0x8000_0000);
        assert_eq!(<f64 as FloatBits>::assemble(0, 1023, 0), 0x3FF0_0000_0000_0000);
    }

    #[test]
    fn test_assemble_truncates_oversized_fields() {
        // Each field keeps only the bits of its slot
        assert_eq!(<f32 as FloatBits>::assemble(3, 0x17F, 0xFF80_0001), 0xBF80_0001);
        assert_eq!(<f64 as FloatBits>::assemble(1, 0xFFFF, u64::MAX), u64::MAX);
        assert_eq!(<f32 as FloatBits>::truncate_raw(0x1_2345_6789), 0x2345_6789);
    }
}
