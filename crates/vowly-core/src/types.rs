//! # Domain Types
//!
//! Core domain types used throughout Vowly.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Booking      │   │  PaymentEvent   │   │  PaymentRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  kind           │   │  id (UUID)      │       │
//! │  │  status         │   │  amount_cents   │   │  booking_id(FK) │       │
//! │  │  total_amount   │   │  transaction_id │   │  transaction_id │       │
//! │  │  total_paid     │   │  occurred_at    │   │  (UNIQUE)       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  BookingStatus  │   │  PaymentKind    │   │  DisplayStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Request        │   │  Downpayment    │   │  UI buckets     │       │
//! │  │  QuoteSent      │   │  FullPayment    │   │  derived, never │       │
//! │  │  ... (9 states) │   │  RemainingBal.  │   │  stored         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived vs Stored
//! `remaining_balance` and `payment_progress` are ALWAYS derived from
//! `total_amount_cents` and `total_paid_cents`. They are never stored and
//! never independently settable, so they cannot drift.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::money::Money;

// =============================================================================
// Booking Status
// =============================================================================

/// The lifecycle stage of a booking.
///
/// ## Lifecycle Order
/// ```text
/// request → quote_sent → quote_accepted → confirmed
///         → downpayment_paid → paid_in_full* → completed*
///
/// Side branches from any non-terminal state:
///         → quote_rejected*          → cancelled*
///
/// (* = terminal)
/// ```
///
/// ## Note on `quote_accepted`
/// `accept_quote` moves a booking straight to `Confirmed`; the
/// `QuoteAccepted` variant exists because historical rows carry it. It
/// ranks between `QuoteSent` and `Confirmed` and displays in the same
/// bucket as `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Couple has requested the service; no quote yet.
    Request,
    /// Vendor/coordinator has sent a quote.
    QuoteSent,
    /// Couple accepted the quote (legacy stored value, see type docs).
    QuoteAccepted,
    /// Booking is confirmed; awaiting downpayment.
    Confirmed,
    /// Downpayment received; balance outstanding.
    DownpaymentPaid,
    /// Contract fully settled.
    PaidInFull,
    /// Service delivered; booking archived.
    Completed,
    /// Couple declined the quote.
    QuoteRejected,
    /// Booking cancelled before completion.
    Cancelled,
}

impl BookingStatus {
    /// Position along the main lifecycle line, if this status is on it.
    ///
    /// ## Usage
    /// Monotonicity checks: a transform never produces a status with a
    /// lower rank than the current one. Side-branch terminals
    /// (`QuoteRejected`, `Cancelled`) are not on the line and return `None`.
    pub const fn lifecycle_rank(&self) -> Option<u8> {
        match self {
            BookingStatus::Request => Some(0),
            BookingStatus::QuoteSent => Some(1),
            BookingStatus::QuoteAccepted => Some(2),
            BookingStatus::Confirmed => Some(3),
            BookingStatus::DownpaymentPaid => Some(4),
            BookingStatus::PaidInFull => Some(5),
            BookingStatus::Completed => Some(6),
            BookingStatus::QuoteRejected | BookingStatus::Cancelled => None,
        }
    }

    /// Whether this status is terminal (no further mutation except
    /// `complete` on `PaidInFull`).
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::PaidInFull
                | BookingStatus::Completed
                | BookingStatus::QuoteRejected
                | BookingStatus::Cancelled
        )
    }

    /// Whether a payment event may be applied in this status.
    ///
    /// ## Rules
    /// Any state up to and including `DownpaymentPaid` accepts payment.
    /// Settled and side-branch terminal states do not.
    pub const fn accepts_payment(&self) -> bool {
        matches!(
            self,
            BookingStatus::Request
                | BookingStatus::QuoteSent
                | BookingStatus::QuoteAccepted
                | BookingStatus::Confirmed
                | BookingStatus::DownpaymentPaid
        )
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Request
    }
}

// =============================================================================
// Payment Kind
// =============================================================================

/// The kind of a payment event, as declared by the gateway callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Partial payment towards the contract.
    Downpayment,
    /// Settles the full contract in one payment.
    FullPayment,
    /// Settles the outstanding balance.
    RemainingBalance,
}

impl PaymentKind {
    /// Wire string as sent by the payment gateway.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Downpayment => "downpayment",
            PaymentKind::FullPayment => "full_payment",
            PaymentKind::RemainingBalance => "remaining_balance",
        }
    }
}

/// Parses the gateway's wire string.
///
/// ## Error
/// Any unrecognized string fails with [`LedgerError::UnknownPaymentType`] -
/// a malformed event is an integration bug, never silently coerced.
impl FromStr for PaymentKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "downpayment" => Ok(PaymentKind::Downpayment),
            "full_payment" => Ok(PaymentKind::FullPayment),
            "remaining_balance" => Ok(PaymentKind::RemainingBalance),
            other => Err(LedgerError::UnknownPaymentType(other.to_string())),
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A booking of one vendor service by one couple.
///
/// ## Snapshot Semantics
/// A `Booking` value is an immutable snapshot. Ledger operations take a
/// snapshot and return a new one; the caller persists it atomically using
/// the `revision` field as an optimistic-concurrency guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Booking {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The couple that requested this booking.
    pub couple_id: String,

    /// The vendor providing the service.
    pub vendor_id: String,

    /// Display name of the booked service.
    pub service_name: String,

    /// Wedding date, if already scheduled.
    #[ts(as = "Option<String>")]
    pub event_date: Option<NaiveDate>,

    /// Current lifecycle stage.
    pub status: BookingStatus,

    /// Full contracted price in centavos.
    pub total_amount_cents: i64,

    /// Cumulative amount received in centavos.
    pub total_paid_cents: i64,

    /// When the last payment was applied.
    #[ts(as = "Option<String>")]
    pub last_payment_at: Option<DateTime<Utc>>,

    /// Method/channel of the last payment.
    pub payment_method: Option<String>,

    /// Gateway reference of the last payment.
    pub transaction_id: Option<String>,

    /// Audit note set by `cancel`.
    pub cancellation_reason: Option<String>,

    /// When the booking was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the booking was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// Optimistic-concurrency version, bumped on every persisted write.
    pub revision: i64,
}

impl Booking {
    /// Creates a fresh booking request.
    ///
    /// ## Lifecycle
    /// A booking is born in `Request` with `total_paid = 0`. The contracted
    /// amount may be known up front (fixed-price packages) or set later by
    /// `send_quote`.
    pub fn new_request(
        couple_id: &str,
        vendor_id: &str,
        service_name: &str,
        event_date: Option<NaiveDate>,
        total_amount: Money,
    ) -> Self {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4().to_string(),
            couple_id: couple_id.to_string(),
            vendor_id: vendor_id.to_string(),
            service_name: service_name.trim().to_string(),
            event_date,
            status: BookingStatus::Request,
            total_amount_cents: total_amount.cents(),
            total_paid_cents: 0,
            last_payment_at: None,
            payment_method: None,
            transaction_id: None,
            cancellation_reason: None,
            created_at: now,
            updated_at: now,
            revision: 0,
        }
    }

    /// Returns the contracted price as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }

    /// Returns the cumulative amount paid as Money.
    #[inline]
    pub fn total_paid(&self) -> Money {
        Money::from_cents(self.total_paid_cents)
    }

    /// Derived: outstanding balance, floored at zero.
    ///
    /// Never stored - computed from the two stored amounts so it cannot
    /// drift out of sync.
    #[inline]
    pub fn remaining_balance(&self) -> Money {
        self.total_amount().saturating_sub(self.total_paid())
    }

    /// Derived: payment progress as an integer percentage 0-100.
    ///
    /// ## Guarantees
    /// - `0` iff nothing has been paid (or nothing is quoted)
    /// - `100` iff the contract is fully settled
    /// - partial payments land in `1..=99`
    #[inline]
    pub fn payment_progress(&self) -> u8 {
        self.total_paid().ratio_percent(self.total_amount())
    }
}

// =============================================================================
// Payment Event
// =============================================================================

/// A payment event produced by a gateway webhook or a user-initiated
/// payment confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentEvent {
    /// What this payment is for.
    pub kind: PaymentKind,

    /// Amount paid in centavos. Must be positive.
    pub amount_cents: i64,

    /// Payment method/channel ("gcash", "bank_transfer", "card", ...).
    pub method: String,

    /// Gateway reference. Globally unique; the idempotency key.
    pub transaction_id: String,

    /// When the payment occurred at the gateway.
    #[ts(as = "String")]
    pub occurred_at: DateTime<Utc>,
}

impl PaymentEvent {
    /// Returns the payment amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Payment Record
// =============================================================================

/// An applied payment event, persisted for audit and idempotency.
///
/// One row per applied event. The UNIQUE constraint on `transaction_id` is
/// the durable form of the idempotency set consulted by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct PaymentRecord {
    pub id: String,
    pub booking_id: String,
    pub kind: PaymentKind,
    /// Amount as stated by the gateway, in centavos. Recorded verbatim even
    /// when settlement math clamps or overrides it.
    pub amount_cents: i64,
    pub method: String,
    pub transaction_id: String,
    /// When the payment occurred at the gateway.
    #[ts(as = "String")]
    pub occurred_at: DateTime<Utc>,
    /// When this record was written.
    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Builds the audit row for an applied event.
    pub fn from_event(booking_id: &str, event: &PaymentEvent) -> Self {
        PaymentRecord {
            id: Uuid::new_v4().to_string(),
            booking_id: booking_id.to_string(),
            kind: event.kind,
            amount_cents: event.amount_cents,
            method: event.method.clone(),
            transaction_id: event.transaction_id.clone(),
            occurred_at: event.occurred_at,
            recorded_at: Utc::now(),
        }
    }

    /// Returns the stated amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Display Status
// =============================================================================

/// User-facing status bucket.
///
/// ## One Source of Truth
/// UI, reporting, and tests all consume this derivation (via
/// [`crate::ledger::display_status`]) instead of branching on raw status
/// strings. `QuoteAccepted` and `Confirmed` share one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    /// Request sent, awaiting vendor response.
    Inquiry,
    /// Quote delivered, awaiting couple decision.
    QuoteSent,
    /// Booked and awaiting downpayment.
    Confirmed,
    /// Downpayment received, balance outstanding.
    PartiallyPaid,
    /// Fully settled.
    Paid,
    /// Service delivered.
    Completed,
    /// Couple declined the quote.
    QuoteDeclined,
    /// Cancelled before completion.
    Cancelled,
}

impl DisplayStatus {
    /// Stable label shown in the couple's dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Inquiry => "Request Sent",
            DisplayStatus::QuoteSent => "Quote Sent",
            DisplayStatus::Confirmed => "Confirmed",
            DisplayStatus::PartiallyPaid => "Partially Paid",
            DisplayStatus::Paid => "Paid in Full",
            DisplayStatus::Completed => "Completed",
            DisplayStatus::QuoteDeclined => "Quote Declined",
            DisplayStatus::Cancelled => "Cancelled",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_rank_ordering() {
        let line = [
            BookingStatus::Request,
            BookingStatus::QuoteSent,
            BookingStatus::QuoteAccepted,
            BookingStatus::Confirmed,
            BookingStatus::DownpaymentPaid,
            BookingStatus::PaidInFull,
            BookingStatus::Completed,
        ];
        for pair in line.windows(2) {
            assert!(pair[0].lifecycle_rank().unwrap() < pair[1].lifecycle_rank().unwrap());
        }

        assert_eq!(BookingStatus::QuoteRejected.lifecycle_rank(), None);
        assert_eq!(BookingStatus::Cancelled.lifecycle_rank(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(BookingStatus::PaidInFull.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::QuoteRejected.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());

        assert!(!BookingStatus::Request.is_terminal());
        assert!(!BookingStatus::QuoteSent.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(!BookingStatus::DownpaymentPaid.is_terminal());
    }

    #[test]
    fn test_accepts_payment() {
        assert!(BookingStatus::Request.accepts_payment());
        assert!(BookingStatus::Confirmed.accepts_payment());
        assert!(BookingStatus::DownpaymentPaid.accepts_payment());

        assert!(!BookingStatus::PaidInFull.accepts_payment());
        assert!(!BookingStatus::Completed.accepts_payment());
        assert!(!BookingStatus::QuoteRejected.accepts_payment());
        assert!(!BookingStatus::Cancelled.accepts_payment());
    }

    #[test]
    fn test_payment_kind_parse() {
        assert_eq!(
            "downpayment".parse::<PaymentKind>().unwrap(),
            PaymentKind::Downpayment
        );
        assert_eq!(
            "full_payment".parse::<PaymentKind>().unwrap(),
            PaymentKind::FullPayment
        );
        assert_eq!(
            " remaining_balance ".parse::<PaymentKind>().unwrap(),
            PaymentKind::RemainingBalance
        );

        let err = "gcash_promo".parse::<PaymentKind>().unwrap_err();
        assert!(matches!(err, LedgerError::UnknownPaymentType(s) if s == "gcash_promo"));
    }

    #[test]
    fn test_payment_kind_roundtrip() {
        for kind in [
            PaymentKind::Downpayment,
            PaymentKind::FullPayment,
            PaymentKind::RemainingBalance,
        ] {
            assert_eq!(kind.as_str().parse::<PaymentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_new_request_defaults() {
        let booking = Booking::new_request(
            "couple-1",
            "vendor-1",
            "  Garden Venue  ",
            None,
            Money::from_cents(250_000_00),
        );

        assert_eq!(booking.status, BookingStatus::Request);
        assert_eq!(booking.service_name, "Garden Venue");
        assert_eq!(booking.total_paid_cents, 0);
        assert_eq!(booking.revision, 0);
        assert_eq!(booking.remaining_balance(), Money::from_cents(250_000_00));
        assert_eq!(booking.payment_progress(), 0);
        assert!(booking.last_payment_at.is_none());
    }

    #[test]
    fn test_derived_fields_consistency() {
        let mut booking = Booking::new_request(
            "couple-1",
            "vendor-1",
            "Photography",
            None,
            Money::from_cents(50_000_00),
        );
        booking.total_paid_cents = 15_000_00;

        assert_eq!(booking.remaining_balance(), Money::from_cents(35_000_00));
        assert_eq!(booking.payment_progress(), 30);
    }

    #[test]
    fn test_display_status_labels() {
        assert_eq!(DisplayStatus::Inquiry.label(), "Request Sent");
        assert_eq!(DisplayStatus::PartiallyPaid.label(), "Partially Paid");
        assert_eq!(DisplayStatus::Paid.label(), "Paid in Full");
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&BookingStatus::DownpaymentPaid).unwrap();
        assert_eq!(json, "\"downpayment_paid\"");

        let back: BookingStatus = serde_json::from_str("\"quote_sent\"").unwrap();
        assert_eq!(back, BookingStatus::QuoteSent);
    }
}
