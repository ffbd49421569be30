//! Use Cases Layer: Decomposition
//!
//! Splits numeric values into their constituent fields without losing bits.
//!
//! ## Overview
//!
//! The `usecases_decomposition` crate is part of the use cases layer. It
//! provides two independent decomposers:
//!
//! - **[`float`](float/index.html)**: IEEE-754 binary floats into sign,
//!   exponent and significand, and into integer/fractional parts
//! - **[`decimal`](decimal/index.html)**: 128-bit decimals into significand,
//!   scale and sign, and into integer/fractional parts
//!
//! ## Architecture
//!
//! Bit layouts and the decimal storage type come from
//! `entities_data_handling`; decimal significand arithmetic uses
//! `entities_utilities::BigNumber`.

pub mod decimal;
pub mod float;

pub use decimal::{DecimalComponents, DecimalDecomposer, DecimalParts};
pub use float::{FloatComponents, FloatDecomposer, FloatParts};
