// ============================================================================
// Decimal Errors
// Error types for 96-bit scaled decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing, converting or operating on
/// [`Decimal`](crate::Decimal) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Result or conversion target cannot represent the value
    Overflow,
    /// Attempted division or remainder with a zero divisor
    DivisionByZero,
    /// Text does not match the grammar permitted by the parse style
    InvalidFormat,
    /// Structurally invalid constructor input (word array length, scale
    /// out of range, reserved flag bits set)
    InvalidArgument,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::Overflow => {
                write!(f, "decimal overflow: value cannot be represented in 96 bits")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::InvalidFormat => {
                write!(f, "invalid format: input does not match the requested style")
            },
            DecimalError::InvalidArgument => {
                write!(f, "invalid argument: malformed bit pattern or scale")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecimalError::Overflow.to_string(),
            "decimal overflow: value cannot be represented in 96 bits"
        );
        assert_eq!(DecimalError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DecimalError::Overflow, DecimalError::Overflow);
        assert_ne!(DecimalError::Overflow, DecimalError::InvalidFormat);
    }
}
