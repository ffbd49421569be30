//! Entities Layer: Utilities
//!
//! Provides utility types:
//! - Arbitrary precision integers (`BigNumber`), backed by malachite

pub mod big;

pub use big::BigNumber;
