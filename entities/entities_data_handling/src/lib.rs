//! Entities Layer: Data Handling
//!
//! This crate provides the value types and bit layouts that every numeric
//! algorithm in the workspace is built on.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer. It holds
//! data representations only; the algorithms that operate on them live in the
//! use-case crates.
//!
//! ## Modules
//!
//! - **[`bits`](bits/index.html)**: The [`BitWidth`] numeric-capability trait
//!   for fixed-width unsigned integers, swap-network masks, and field
//!   extraction helpers.
//!
//! - **[`float_bits`](float_bits/index.html)**: The [`FloatBits`] trait, raw bit
//!   reinterpretation of `f32`/`f64` together with their IEEE-754 field layout.
//!
//! - **[`decimal`](decimal/index.html)**: [`Decimal128`], the 128-bit fixed-scale
//!   decimal encoding (96-bit significand, scale 0..=28, sign flag).
//!
//! - **[`error`](error/index.html)**: [`NumericError`], the two-class error
//!   taxonomy (domain errors and malformed encodings) shared by all crates.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Decimal128, FloatBits};
//!
//! let d: Decimal128 = "1.50".parse().unwrap();
//! assert_eq!(d.scale(), 2);
//! assert_eq!(1.5f32.to_raw(), 0x3FC0_0000);
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): Arbitrary precision
//!   integers used for decimal significands

pub mod bits;
pub mod decimal;
pub mod error;
pub mod float_bits;

// Re-export main types for convenience
pub use bits::BitWidth;
pub use decimal::{Decimal128, MAX_SCALE};
pub use error::{ErrorKind, NumericError, NumericResult};
pub use float_bits::FloatBits;
