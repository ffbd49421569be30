//! Kernel Facades
//!
//! One function per external operation of the kernel.

use crate::common_facades::{log_rejected_decimal, FACADE_TARGET};
use entities_data_handling::{Decimal128, NumericResult};
use usecases_bit_permutation::BitPermutation;
use usecases_decomposition::{
    DecimalComponents, DecimalDecomposer, DecimalParts, FloatComponents, FloatDecomposer, FloatParts,
};
use usecases_primality::PrimalityOracle;

/// Reverse the bit order of a 16-bit value
pub fn reverse_bits16(x: u16) -> u16 {
    let result = BitPermutation::reverse_bits16(x);
    tracing::trace!(target: FACADE_TARGET, input = x, result, "reverse_bits16");
    result
}

/// Reverse the bit order of a 32-bit value
pub fn reverse_bits32(x: u32) -> u32 {
    let result = BitPermutation::reverse_bits32(x);
    tracing::trace!(target: FACADE_TARGET, input = x, result, "reverse_bits32");
    result
}

/// Reverse the bit order of a 64-bit value
pub fn reverse_bits64(x: u64) -> u64 {
    let result = BitPermutation::reverse_bits64(x);
    tracing::trace!(target: FACADE_TARGET, input = x, result, "reverse_bits64");
    result
}

/// Deterministic primality test for a 64-bit value
pub fn is_prime64(n: u64) -> bool {
    let result = PrimalityOracle::is_prime(n);
    tracing::trace!(target: FACADE_TARGET, n, result, "is_prime64");
    result
}

/// Split a 32-bit float into sign, exponent and significand
pub fn decompose_float32(v: f32) -> FloatComponents {
    let result = FloatDecomposer::decompose_float32(v);
    tracing::trace!(
        target: FACADE_TARGET,
        input = f64::from(v),
        sign = result.sign,
        exponent = result.exponent,
        significand = result.significand,
        "decompose_float32"
    );
    result
}

/// Split a 32-bit float into integer and fractional parts
///
/// Non-finite input propagates NaN rather than failing.
pub fn get_float_parts32(v: f32) -> FloatParts<f32> {
    let result = FloatDecomposer::get_float_parts32(v);
    tracing::trace!(
        target: FACADE_TARGET,
        input = f64::from(v),
        integer_part = f64::from(result.integer_part),
        fractional_part = f64::from(result.fractional_part),
        "get_float_parts32"
    );
    result
}

/// Split a 128-bit decimal into significand, scale and sign
pub fn get_decimal_components(v: &Decimal128) -> NumericResult<DecimalComponents> {
    match DecimalDecomposer::get_components(v) {
        Ok(result) => {
            tracing::trace!(
                target: FACADE_TARGET,
                input = %v,
                significand = %result.significand,
                scale = result.scale,
                sign = result.sign,
                "get_decimal_components"
            );
            Ok(result)
        }
        Err(e) => {
            log_rejected_decimal("get_decimal_components", v, &e);
            Err(e)
        }
    }
}

/// Split a 128-bit decimal into integer and fractional parts
pub fn get_decimal_parts(v: &Decimal128) -> NumericResult<DecimalParts> {
    match DecimalDecomposer::get_parts(v) {
        Ok(result) => {
            tracing::trace!(
                target: FACADE_TARGET,
                input = %v,
                integer_part = %result.integer_part,
                fractional_part = %result.fractional_part,
                "get_decimal_parts"
            );
            Ok(result)
        }
        Err(e) => {
            log_rejected_decimal("get_decimal_parts", v, &e);
            Err(e)
        }
    }
}
