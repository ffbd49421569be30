//! Common API Facades
//!
//! Logging helpers shared by the facade modules.

use entities_data_handling::{Decimal128, NumericError};

/// `tracing` target for every facade event
pub const FACADE_TARGET: &str = "numeric_kernel::facade";

/// Report a decimal the kernel refused to decompose
pub(crate) fn log_rejected_decimal(operation: &'static str, value: &Decimal128, error: &NumericError) {
    tracing::warn!(
        target: FACADE_TARGET,
        operation,
        kind = ?error.kind(),
        error = %error,
        words = ?value.to_words(),
        "Rejected decimal encoding"
    );
}
