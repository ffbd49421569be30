//! FFI Facades
//!
//! `extern "C"` versions of the kernel facades. Every argument and result is
//! passed by value as a `#[repr(C)]` type, so no function here dereferences a
//! caller pointer. Big-integer results are at most 96 bits wide and are
//! returned as three little-endian 32-bit words.

use crate::kernel_facades;
use entities_data_handling::{Decimal128, ErrorKind, NumericError};
use entities_utilities::BigNumber;

/// Status codes carried by fallible results
pub const NK_OK: i32 = 0;
pub const NK_DOMAIN_ERROR: i32 = 1;
pub const NK_MALFORMED_ENCODING: i32 = 2;

/// Fields of a 32-bit float
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NkFloatComponents {
    pub sign: i32,
    pub exponent: i32,
    pub significand: u32,
    pub sign_bit: u32,
    pub biased_exponent: u32,
    pub raw_mantissa: u32,
}

/// Integer/fractional split of a 32-bit float
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NkFloatParts {
    pub integer_part: f32,
    pub fractional_part: f32,
}

/// 128-bit decimal as four words `[lo, mid, hi, flags]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NkDecimal {
    pub words: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NkDecimalComponents {
    pub status: i32,
    pub significand: [u32; 3],
    pub scale: u8,
    pub sign: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NkDecimalParts {
    pub status: i32,
    pub integer_part: [u32; 3],
    pub fractional_part: NkDecimal,
    pub fractional_part_as_integer: [u32; 3],
}

fn status_of(error: &NumericError) -> i32 {
    match error.kind() {
        ErrorKind::Domain => NK_DOMAIN_ERROR,
        ErrorKind::MalformedEncoding => NK_MALFORMED_ENCODING,
    }
}

fn to_words(value: &BigNumber) -> Result<[u32; 3], NumericError> {
    let magnitude = value
        .to_u128()
        .filter(|_| value.fits_in_bits(96))
        .ok_or_else(|| NumericError::malformed(format!("{} exceeds 96 bits", value)))?;
    Ok([
        magnitude as u32,
        (magnitude >> 32) as u32,
        (magnitude >> 64) as u32,
    ])
}

/// C entry point for [`kernel_facades::reverse_bits16`]
#[no_mangle]
pub extern "C" fn nk_reverse_bits16(x: u16) -> u16 {
    kernel_facades::reverse_bits16(x)
}

/// C entry point for [`kernel_facades::reverse_bits64`]
#[no_mangle]
pub extern "C" fn nk_reverse_bits64(x: u64) -> u64 {
    kernel_facades::reverse_bits64(x)
}

/// C entry point for [`kernel_facades::is_prime64`]
#[no_mangle]
pub extern "C" fn nk_is_prime64(n: u64) -> bool {
    kernel_facades::is_prime64(n)
}

/// C entry point for [`kernel_facades::decompose_float32`]
#[no_mangle]
pub extern "C" fn nk_decompose_float32(v: f32) -> NkFloatComponents {
    let c = kernel_facades::decompose_float32(v);
    // binary32 fields are at most 24 bits wide
    NkFloatComponents {
        sign: c.sign,
        exponent: c.exponent,
        significand: c.significand as u32,
        sign_bit: c.sign_bit,
        biased_exponent: c.biased_exponent,
        raw_mantissa: c.raw_mantissa as u32,
    }
}

/// C entry point for [`kernel_facades::get_float_parts32`]
#[no_mangle]
pub extern "C" fn nk_get_float_parts32(v: f32) -> NkFloatParts {
    let p = kernel_facades::get_float_parts32(v);
    NkFloatParts {
        integer_part: p.integer_part,
        fractional_part: p.fractional_part,
    }
}

/// C entry point for [`kernel_facades::get_decimal_components`]
///
/// # Returns
/// `status` is [`NK_OK`] on success; the other fields are zero on error
#[no_mangle]
pub extern "C" fn nk_get_decimal_components(value: NkDecimal) -> NkDecimalComponents {
    let decimal = Decimal128::from_words(value.words);
    let result = kernel_facades::get_decimal_components(&decimal).and_then(|c| {
        Ok(NkDecimalComponents {
            status: NK_OK,
            significand: to_words(&c.significand)?,
            scale: c.scale,
            sign: c.sign,
        })
    });
    result.unwrap_or_else(|e| NkDecimalComponents {
        status: status_of(&e),
        ..Default::default()
    })
}

/// C entry point for [`kernel_facades::get_decimal_parts`]
///
/// # Returns
/// `status` is [`NK_OK`] on success; the other fields are zero on error
#[no_mangle]
pub extern "C" fn nk_get_decimal_parts(value: NkDecimal) -> NkDecimalParts {
    let decimal = Decimal128::from_words(value.words);
    let result = kernel_facades::get_decimal_parts(&decimal).and_then(|p| {
        Ok(NkDecimalParts {
            status: NK_OK,
            integer_part: to_words(&p.integer_part)?,
            fractional_part: NkDecimal {
                words: p.fractional_part.to_words(),
            },
            fractional_part_as_integer: to_words(&p.fractional_part_as_integer)?,
        })
    });
    result.unwrap_or_else(|e| NkDecimalParts {
        status: status_of(&e),
        ..Default::default()
    })
}
