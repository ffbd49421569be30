//! Decimal Decomposition Module
//!
//! Splits a [`Decimal128`] into its significand, scale and sign, and into
//! integer and fractional parts, using exact big-integer arithmetic.
//!
//! Integer and fractional parts are reported as magnitudes so that
//! `integer_part * 10^scale + fractional_part_as_integer == significand`
//! holds for every value. The sign lives in [`DecimalComponents::sign`] and
//! in [`DecimalParts::fractional_part`].

use entities_data_handling::{Decimal128, NumericError, NumericResult};
use entities_utilities::BigNumber;

/// Significand, scale and sign of a decimal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalComponents {
    /// 96-bit unsigned significand
    pub significand: BigNumber,
    /// Power-of-ten divisor, 0..=28
    pub scale: u8,
    /// True for negative values
    pub sign: bool,
}

/// Integer/fractional split of a decimal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    /// `significand / 10^scale`, truncated
    pub integer_part: BigNumber,
    /// The value minus its signed integer part, at the value's scale
    pub fractional_part: Decimal128,
    /// `significand - integer_part * 10^scale`
    pub fractional_part_as_integer: BigNumber,
}

/// Decimal decomposition operations
pub struct DecimalDecomposer;

impl DecimalDecomposer {
    /// Extract significand, scale and sign
    ///
    /// The significand is assembled as `hi << 64 | mid << 32 | lo`.
    ///
    /// # Errors
    /// `MalformedEncoding` if the scale exceeds 28 or reserved flag bits are set.
    pub fn get_components(value: &Decimal128) -> NumericResult<DecimalComponents> {
        value.validate()?;
        let [lo, mid, hi] = value.significand_words();
        let significand = BigNumber::from_u32(hi)
            .lshift(64)
            .bitor(&BigNumber::from_u32(mid).lshift(32))
            .bitor(&BigNumber::from_u32(lo));

        Ok(DecimalComponents {
            significand,
            scale: value.scale(),
            sign: value.is_negative(),
        })
    }

    /// Split a decimal into integer and fractional parts
    ///
    /// A zero fractional part is reported without a sign, so `-3.00`
    /// yields a fractional part of `0.00`.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::Decimal128;
    /// use usecases_decomposition::DecimalDecomposer;
    ///
    /// let value: Decimal128 = "-12.345".parse().unwrap();
    /// let parts = DecimalDecomposer::get_parts(&value).unwrap();
    /// assert_eq!(parts.integer_part.to_u64(), Some(12));
    /// assert_eq!(parts.fractional_part.to_string(), "-0.345");
    /// assert_eq!(parts.fractional_part_as_integer.to_u64(), Some(345));
    /// ```
    ///
    /// # Errors
    /// Same as [`get_components`](Self::get_components).
    pub fn get_parts(value: &Decimal128) -> NumericResult<DecimalParts> {
        let components = Self::get_components(value)?;
        let scale_factor = BigNumber::pow10(u32::from(components.scale));
        let (integer_part, fractional_part_as_integer) = components
            .significand
            .div_rem(&scale_factor)
            .ok_or_else(|| NumericError::malformed("scale factor is zero"))?;

        let negative = components.sign && !fractional_part_as_integer.is_zero();
        let fractional_part =
            Decimal128::from_components(&fractional_part_as_integer, components.scale, negative)?;

        Ok(DecimalParts {
            integer_part,
            fractional_part,
            fractional_part_as_integer,
        })
    }

    /// Rebuild a decimal from its components
    ///
    /// # Errors
    /// - `Domain` if the scale exceeds 28 or the significand is negative
    /// - `MalformedEncoding` if the significand needs more than 96 bits
    pub fn recompose(components: &DecimalComponents) -> NumericResult<Decimal128> {
        Decimal128::from_components(&components.significand, components.scale, components.sign)
    }
}
