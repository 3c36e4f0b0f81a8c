//! # Error Types
//!
//! Domain-specific error types for vowly-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vowly-core errors (this file)                                         │
//! │  ├── LedgerError      - Lifecycle and payment rule violations          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vowly-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  vowly-service errors (separate crate)                                 │
//! │  └── ServiceError     - What the API layer sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → LedgerError → ServiceError → Frontend         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (booking id, status, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::BookingStatus;

// =============================================================================
// Ledger Error
// =============================================================================

/// Booking lifecycle errors.
///
/// These errors represent business rule violations. All ledger operations
/// are total: they either return a new booking snapshot or one of these.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Payment amount is not positive.
    ///
    /// ## When This Occurs
    /// - Gateway callback with zero or negative amount
    /// - A quote sent with a non-positive total
    #[error("Invalid payment amount: {amount_cents} centavos (must be positive)")]
    InvalidPaymentAmount { amount_cents: i64 },

    /// Operation attempted on an incompatible current status.
    ///
    /// ## When This Occurs
    /// - Payment against a cancelled or settled booking
    /// - Accepting a quote that was never sent (or already decided)
    /// - Cancelling a booking that already reached a terminal state
    ///
    /// ## User Workflow
    /// ```text
    /// submit_payment on cancelled booking
    ///      │
    ///      ▼
    /// InvalidBookingState { booking_id, current_status: Cancelled, .. }
    ///      │
    ///      ▼
    /// UI shows: "This booking is cancelled and can no longer be paid"
    /// ```
    #[error("Booking {booking_id} is {current_status:?}, cannot {operation}")]
    InvalidBookingState {
        booking_id: String,
        current_status: BookingStatus,
        operation: &'static str,
    },

    /// Unrecognized payment kind string from the gateway.
    ///
    /// ## When This Occurs
    /// A malformed or unsupported webhook payload. This is an integration
    /// bug on the sender's side - never retried, never coerced.
    #[error("Unknown payment type: '{0}'")]
    UnknownPaymentType(String),

    /// A payment event with this transaction id was already applied.
    ///
    /// ## When This Occurs
    /// Payment gateways retry callbacks by design. The ledger detects the
    /// replay; the service layer converts it into a success-no-op returning
    /// the existing booking state, so retries are transparent upstream.
    #[error("Payment {transaction_id} was already applied")]
    DuplicatePayment { transaction_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before lifecycle logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LedgerError::InvalidBookingState {
            booking_id: "b-123".to_string(),
            current_status: BookingStatus::Cancelled,
            operation: "apply payment",
        };
        assert_eq!(
            err.to_string(),
            "Booking b-123 is Cancelled, cannot apply payment"
        );

        let err = LedgerError::InvalidPaymentAmount { amount_cents: -500 };
        assert_eq!(
            err.to_string(),
            "Invalid payment amount: -500 centavos (must be positive)"
        );

        let err = LedgerError::DuplicatePayment {
            transaction_id: "tx-9".to_string(),
        };
        assert_eq!(err.to_string(), "Payment tx-9 was already applied");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "transaction_id".to_string(),
        };
        assert_eq!(err.to_string(), "transaction_id is required");

        let err = ValidationError::TooLong {
            field: "service_name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "service_name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_ledger_error() {
        let validation_err = ValidationError::Required {
            field: "reason".to_string(),
        };
        let ledger_err: LedgerError = validation_err.into();
        assert!(matches!(ledger_err, LedgerError::Validation(_)));
    }
}
