//! Float Decomposition Module
//!
//! Splits binary floating-point values into their bit fields and into
//! integer and fractional parts.
//!
//! Field extraction is pure bit reinterpretation, so it is defined for every
//! input including NaN, infinities and subnormals. Part splitting is value
//! arithmetic: NaN propagates, and an infinite input yields an infinite
//! integer part with a NaN fractional part. Use
//! [`FloatDecomposer::checked_parts`] to reject non-finite input instead.

use entities_data_handling::bits::extract_field;
use entities_data_handling::{FloatBits, NumericError, NumericResult};

/// Fields of a binary floating-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatComponents {
    /// +1 or -1, never 0; -0.0 has sign -1
    pub sign: i32,
    /// Biased exponent minus the bias
    pub exponent: i32,
    /// Stored mantissa with the implicit leading bit for normal values
    pub significand: u64,
    /// Raw sign bit (0 or 1)
    pub sign_bit: u32,
    /// Raw exponent field
    pub biased_exponent: u32,
    /// Raw stored mantissa field
    pub raw_mantissa: u64,
}

impl FloatComponents {
    /// Reassemble the raw bit pattern from the raw fields
    pub fn to_raw_bits<F: FloatBits>(&self) -> F::Bits {
        F::assemble(self.sign_bit, self.biased_exponent, self.raw_mantissa)
    }
}

/// Integer/fractional split of a float; both parts share the input's type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatParts<F> {
    /// The input truncated toward zero
    pub integer_part: F,
    /// The input minus its integer part
    pub fractional_part: F,
}

/// Float decomposition operations
pub struct FloatDecomposer;

impl FloatDecomposer {
    /// Decompose a float into its fields
    ///
    /// # Examples
    /// ```
    /// use usecases_decomposition::FloatDecomposer;
    ///
    /// let c = FloatDecomposer::decompose(-1.5f32);
    /// assert_eq!((c.sign, c.exponent, c.significand), (-1, 0, 0xC0_0000));
    /// assert_eq!((c.sign_bit, c.biased_exponent, c.raw_mantissa), (1, 127, 0x40_0000));
    /// ```
    pub fn decompose<F: FloatBits>(value: F) -> FloatComponents {
        let raw: u64 = value.to_raw().into();
        let sign_bit = extract_field(raw, F::sign_shift(), 1) as u32;
        let biased_exponent = extract_field(raw, F::MANTISSA_BITS, F::EXPONENT_BITS) as u32;
        let raw_mantissa = extract_field(raw, 0, F::MANTISSA_BITS);

        let is_normal = biased_exponent != 0 && biased_exponent != F::max_biased_exponent();
        let significand = if is_normal {
            raw_mantissa | (1u64 << F::MANTISSA_BITS)
        } else {
            raw_mantissa
        };

        FloatComponents {
            sign: if sign_bit == 1 { -1 } else { 1 },
            exponent: biased_exponent as i32 - F::EXPONENT_BIAS,
            significand,
            sign_bit,
            biased_exponent,
            raw_mantissa,
        }
    }

    /// Decompose a 32-bit float into its fields
    ///
    /// # Arguments
    /// * `value` - Any `f32`, including NaN, infinities and subnormals
    ///
    /// # Returns
    /// Sign, unbiased exponent and a significand of up to 24 bits
    pub fn decompose_float32(value: f32) -> FloatComponents {
        Self::decompose(value)
    }

    /// Decompose a 64-bit float into its fields
    ///
    /// # Arguments
    /// * `value` - Any `f64`, including NaN, infinities and subnormals
    ///
    /// # Returns
    /// Sign, unbiased exponent and a significand of up to 53 bits
    pub fn decompose_float64(value: f64) -> FloatComponents {
        Self::decompose(value)
    }

    /// Rebuild a float from the raw fields of its components
    pub fn recompose<F: FloatBits>(components: &FloatComponents) -> F {
        F::from_raw(components.to_raw_bits::<F>())
    }

    /// Split a float into its integer and fractional parts
    ///
    /// `integer_part + fractional_part == value` holds exactly for every
    /// finite input; both parts carry the sign of the input.
    pub fn get_parts<F: FloatBits>(value: F) -> FloatParts<F> {
        let integer_part = value.trunc();
        FloatParts {
            integer_part,
            fractional_part: value - integer_part,
        }
    }

    /// Split a 32-bit float into integer and fractional parts
    ///
    /// # Arguments
    /// * `value` - Input; NaN and infinities propagate as described on [`get_parts`](Self::get_parts)
    ///
    /// # Returns
    /// The truncated value and the remainder, both as `f32`
    pub fn get_float_parts32(value: f32) -> FloatParts<f32> {
        Self::get_parts(value)
    }

    /// Split a 64-bit float into integer and fractional parts
    ///
    /// # Arguments
    /// * `value` - Input; NaN and infinities propagate as described on [`get_parts`](Self::get_parts)
    ///
    /// # Returns
    /// The truncated value and the remainder, both as `f64`
    pub fn get_float_parts64(value: f64) -> FloatParts<f64> {
        Self::get_parts(value)
    }

    /// Split a float into parts, rejecting NaN and infinities
    ///
    /// # Errors
    /// `Domain` if the input is not finite.
    pub fn checked_parts<F: FloatBits>(value: F) -> NumericResult<FloatParts<F>> {
        if !value.is_finite() {
            let bits: u64 = value.to_raw().into();
            return Err(NumericError::domain(format!(
                "cannot split non-finite value (bits {:#x}) into parts",
                bits
            )));
        }
        Ok(Self::get_parts(value))
    }
}
