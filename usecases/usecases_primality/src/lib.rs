//! Use Cases Layer: Primality
//!
//! Deterministic primality testing for unsigned 64-bit integers.
//!
//! ## Overview
//!
//! The `usecases_primality` crate is part of the use cases layer. It answers
//! "is `n` prime?" exactly for every `u64`: no false positives and no false
//! negatives. Modular exponentiation is delegated to
//! [`BigNumber`](entities_utilities::BigNumber).
//!
//! ## Modules
//!
//! - **[`miller_rabin`](miller_rabin/index.html)**: Small-value bitmask, trial
//!   division, and deterministic Miller-Rabin rounds
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): Big number arithmetic

pub mod miller_rabin;

pub use miller_rabin::PrimalityOracle;
