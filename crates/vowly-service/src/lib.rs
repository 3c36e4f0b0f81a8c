//! # vowly-service: Booking Orchestration for Vowly
//!
//! The single writer in front of the booking ledger. This crate is "the
//! caller" that the core's concurrency contract constrains: it serializes
//! mutations per booking id, runs the pure ledger transforms, persists
//! results atomically, and converts replayed payments into transparent
//! no-ops.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vowly Service Layer                              │
//! │                                                                         │
//! │  HTTP route / webhook handler (out of scope)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 vowly-service (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐   │   │
//! │  │   │ BookingService│   │ BookingLocks  │   │ ServiceError  │   │   │
//! │  │   │ (service.rs)  │   │  (locks.rs)   │   │  (error.rs)   │   │   │
//! │  │   │               │   │               │   │               │   │   │
//! │  │   │ load→transform│◄──│ one writer    │   │ code+message  │   │   │
//! │  │   │ →persist→view │   │ per booking   │   │ for the API   │   │   │
//! │  │   └───────┬───────┘   └───────────────┘   └───────────────┘   │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              │                                                          │
//! │              ├──► vowly-core  (pure ledger transforms)                 │
//! │              └──► vowly-db    (atomic persistence)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vowly_db::{Database, DbConfig};
//! use vowly_service::{BookingService, PaymentRequest};
//!
//! let db = Database::new(DbConfig::new("./vowly.db")).await?;
//! let service = BookingService::new(db);
//!
//! let view = service
//!     .submit_payment(&booking_id, PaymentRequest {
//!         kind: "downpayment".into(),
//!         amount_cents: 15_000_00,
//!         method: "gcash".into(),
//!         transaction_id: "pm_1NirD8".into(),
//!         occurred_at: None,
//!     })
//!     .await?;
//! assert_eq!(view.display_label, "Partially Paid");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod locks;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ErrorCode, ServiceError};
pub use locks::BookingLocks;
pub use service::{BookingService, BookingView, CreateBookingRequest, PaymentRequest};
