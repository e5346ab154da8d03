//! Stable error codes surfaced to the presentation layer.
//! Each code names a distinct notification category, so a stock shortfall
//! reads differently from a missing field.

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const REFERENCE_ERROR: &str = "REFERENCE_ERROR";
pub const INSUFFICIENT_STOCK: &str = "INSUFFICIENT_STOCK";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";

/// Maps an error to its stable code.
pub trait TallyErrorCode {
    fn error_code(&self) -> &'static str;
}
