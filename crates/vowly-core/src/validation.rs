//! # Validation Module
//!
//! Input validation utilities for Vowly.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service layer (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: input rule validation                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints (transaction_id!)                              │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vowly_core::validation::{validate_transaction_id, validate_service_name};
//!
//! validate_transaction_id("pm_1NirD82eZvKYlo2C").unwrap();
//! validate_service_name("Full-Day Photography").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_CANCEL_REASON_LEN, MAX_SERVICE_NAME_LEN, MAX_TRANSACTION_ID_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a gateway transaction id.
///
/// ## Rules
/// - Must not be empty (it is the idempotency key)
/// - Must be at most 100 characters
/// - Must contain no whitespace
///
/// ## Example
/// ```rust
/// use vowly_core::validation::validate_transaction_id;
///
/// assert!(validate_transaction_id("tx-20260314-0001").is_ok());
/// assert!(validate_transaction_id("").is_err());
/// assert!(validate_transaction_id("has space").is_err());
/// ```
pub fn validate_transaction_id(transaction_id: &str) -> ValidationResult<()> {
    let transaction_id = transaction_id.trim();

    if transaction_id.is_empty() {
        return Err(ValidationError::Required {
            field: "transaction_id".to_string(),
        });
    }

    if transaction_id.len() > MAX_TRANSACTION_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "transaction_id".to_string(),
            max: MAX_TRANSACTION_ID_LEN,
        });
    }

    if transaction_id.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::InvalidFormat {
            field: "transaction_id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a service name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_service_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "service_name".to_string(),
        });
    }

    if name.len() > MAX_SERVICE_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "service_name".to_string(),
            max: MAX_SERVICE_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a cancellation reason.
///
/// ## Rules
/// - Must not be empty (the audit trail needs a reason)
/// - Must be at most 500 characters
pub fn validate_cancellation_reason(reason: &str) -> ValidationResult<()> {
    let reason = reason.trim();

    if reason.is_empty() {
        return Err(ValidationError::Required {
            field: "reason".to_string(),
        });
    }

    if reason.len() > MAX_CANCEL_REASON_LEN {
        return Err(ValidationError::TooLong {
            field: "reason".to_string(),
            max: MAX_CANCEL_REASON_LEN,
        });
    }

    Ok(())
}

/// Validates a payment method label.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_payment_method(method: &str) -> ValidationResult<()> {
    let method = method.trim();

    if method.is_empty() {
        return Err(ValidationError::Required {
            field: "method".to_string(),
        });
    }

    if method.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "method".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Rules
/// - Must be a valid UUID format
/// - 36 characters with hyphens: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
///
/// ## Example
/// ```rust
/// use vowly_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
