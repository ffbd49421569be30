//! API Facades Layer
//!
//! Provides the flat functional surface of the numeric kernel.
//!
//! All facades call the use-case crates; none contains numeric logic of its
//! own. Two flavors are provided:
//!
//! - [`kernel_facades`]: Rust signatures returning plain structs
//! - [`ffi_facades`]: `extern "C"` signatures over `#[repr(C)]` values, for
//!   callers in other languages
//!
//! The facades are the only layer that logs. Events are emitted through
//! `tracing` under the [`FACADE_TARGET`] target; installing a subscriber is
//! up to the embedding application.

pub mod common_facades;
pub mod ffi_facades;
pub mod kernel_facades;

pub use common_facades::FACADE_TARGET;
pub use kernel_facades::*;

// Re-export the value types that appear in facade signatures
pub use entities_data_handling::{Decimal128, ErrorKind, NumericError};
pub use entities_utilities::BigNumber;
pub use usecases_decomposition::{DecimalComponents, DecimalParts, FloatComponents, FloatParts};
