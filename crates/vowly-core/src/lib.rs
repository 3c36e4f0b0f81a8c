//! # vowly-core: Pure Business Logic for Vowly
//!
//! This crate is the **heart** of Vowly, a wedding-services marketplace.
//! It contains the booking lifecycle and payment-progress reconciliation
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vowly Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (React/TypeScript)                     │   │
//! │  │   Vendor Browse ──► Booking Dashboard ──► Payment Flow          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON API                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vowly-service                                │   │
//! │  │   submit_payment, accept_quote, cancel, get_booking, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vowly-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│  │   │
//! │  │   │  Booking  │  │   Money   │  │ lifecycle │  │   rules   │  │   │
//! │  │   │  Payment  │  │  progress │  │ payments  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vowly-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Booking, PaymentEvent, BookingStatus, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - Booking lifecycle operations (payments, quotes, cancellation)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every ledger operation takes a booking snapshot and
//!    returns a new one - the input is never mutated
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No Partial Application**: A transform either returns a fully
//!    consistent booking or an error - derived fields never drift
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use vowly_core::ledger;
//! use vowly_core::{Booking, BookingStatus, Money, PaymentEvent, PaymentKind};
//!
//! let booking = Booking::new_request(
//!     "4b4e3a66-9f2a-4c57-8f49-111111111111",
//!     "4b4e3a66-9f2a-4c57-8f49-222222222222",
//!     "Full-Day Photography",
//!     None,
//!     Money::from_cents(50_000_00),
//! );
//!
//! let event = PaymentEvent {
//!     kind: PaymentKind::Downpayment,
//!     amount_cents: 15_000_00,
//!     method: "gcash".to_string(),
//!     transaction_id: "tx-001".to_string(),
//!     occurred_at: Utc::now(),
//! };
//!
//! let paid = ledger::apply_payment(&booking, &[], &event).unwrap();
//! assert_eq!(paid.status, BookingStatus::DownpaymentPaid);
//! assert_eq!(paid.remaining_balance(), Money::from_cents(35_000_00));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vowly_core::Money` instead of
// `use vowly_core::money::Money`

pub use error::{LedgerError, LedgerResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length for a service name.
///
/// ## Business Reason
/// Matches the column size used by vendor listings; anything longer is
/// almost certainly pasted garbage.
pub const MAX_SERVICE_NAME_LEN: usize = 200;

/// Maximum length for a cancellation reason.
///
/// ## Business Reason
/// The reason is an audit note shown to coordinators, not an essay.
pub const MAX_CANCEL_REASON_LEN: usize = 500;

/// Maximum length for a gateway transaction id.
///
/// Gateway references are short opaque tokens; a very long value indicates
/// a malformed webhook payload.
pub const MAX_TRANSACTION_ID_LEN: usize = 100;
