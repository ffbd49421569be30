//! Use Cases Layer: Bit Permutation
//!
//! Reverses the bit order of fixed-width unsigned integers.
//!
//! ## Overview
//!
//! The `usecases_bit_permutation` crate is part of the use cases layer. It
//! implements bit reversal once, generically over
//! [`BitWidth`](entities_data_handling::BitWidth), and instantiates it for the
//! widths callers need.
//!
//! ## Modules
//!
//! - **[`reverse`](reverse/index.html)**: Swap-network bit reversal
//!
//! ## See Also
//!
//! - [`entities_data_handling::bits`](../entities_data_handling/bits/index.html): Width trait and masks

pub mod reverse;

pub use reverse::BitPermutation;
