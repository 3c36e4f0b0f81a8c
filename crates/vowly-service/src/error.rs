//! # API Error Type
//!
//! Unified error type for the service layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vowly                                  │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  POST /bookings/:id/payments                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  BookingService method                                           │  │
//! │  │  Result<BookingView, ServiceError>                               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Ledger error? ─── LedgerError::InvalidBookingState ──┐         │  │
//! │  │         │                                             │         │  │
//! │  │         ▼                                             ▼         │  │
//! │  │  Database error? ── DbError::RevisionConflict ── ServiceError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  // e.message = "Booking b-1 is Cancelled, cannot apply a payment"     │
//! │  // e.code = "BUSINESS_LOGIC"                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The API layer serializes this directly; we include both a
//! machine-readable `code` and a human-readable `message`.

use serde::Serialize;
use vowly_core::LedgerError;
use vowly_db::DbError;

/// API error returned from service methods.
///
/// ## Serialization
/// This is what the frontend receives when a call fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Booking not found: 8f41..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await api.submitPayment(bookingId, payload);
/// } catch (e) {
///   switch (e.code) {
///     case 'BUSINESS_LOGIC':
///       showNotification(e.message);
///       break;
///     case 'CONFLICT':
///       refetchAndRetry();
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Payment amount/shape rejected (400)
    PaymentError,

    /// Lifecycle rule violation (422)
    BusinessLogic,

    /// Concurrent modification - reload and retry (409)
    Conflict,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ServiceError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Internal, message)
    }
}

/// Converts ledger errors to API errors.
impl From<LedgerError> for ServiceError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidPaymentAmount { .. } => {
                ServiceError::new(ErrorCode::PaymentError, err.to_string())
            }
            LedgerError::InvalidBookingState { .. } => {
                ServiceError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            LedgerError::UnknownPaymentType(_) => {
                ServiceError::new(ErrorCode::ValidationError, err.to_string())
            }
            // Normally converted to a success-no-op before reaching here;
            // surfaces as a conflict if it ever escapes.
            LedgerError::DuplicatePayment { .. } => {
                ServiceError::new(ErrorCode::Conflict, err.to_string())
            }
            LedgerError::Validation(e) => ServiceError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ServiceError::not_found(&entity, &id),
            DbError::DuplicateTransaction { .. } | DbError::RevisionConflict { .. } => {
                ServiceError::new(ErrorCode::Conflict, err.to_string())
            }
            DbError::UniqueViolation { field, value } => ServiceError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ServiceError::new(ErrorCode::ValidationError, "Invalid reference")
            }
            DbError::ConnectionFailed(_) => {
                ServiceError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ServiceError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                ServiceError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vowly_core::BookingStatus;

    #[test]
    fn test_ledger_error_mapping() {
        let err: ServiceError = LedgerError::InvalidPaymentAmount { amount_cents: -5 }.into();
        assert_eq!(err.code, ErrorCode::PaymentError);

        let err: ServiceError = LedgerError::InvalidBookingState {
            booking_id: "b-1".to_string(),
            current_status: BookingStatus::Cancelled,
            operation: "apply a payment",
        }
        .into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert!(err.message.contains("Cancelled"));

        let err: ServiceError = LedgerError::UnknownPaymentType("promo".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_db_error_mapping() {
        let err: ServiceError = DbError::not_found("Booking", "b-404").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Booking not found: b-404");

        let err: ServiceError = DbError::revision_conflict("b-1").into();
        assert_eq!(err.code, ErrorCode::Conflict);

        let err: ServiceError = DbError::DuplicateTransaction {
            transaction_id: "tx-1".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[test]
    fn test_serializes_camel_case_with_screaming_code() {
        let err = ServiceError::not_found("Booking", "b-1");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Booking not found: b-1");
    }
}
