//! # Booking Ledger
//!
//! The booking lifecycle state machine and payment-progress reconciliation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Booking Lifecycle                                 │
//! │                                                                         │
//! │  request ──send_quote──► quote_sent ──accept_quote──► confirmed        │
//! │                              │                            │             │
//! │                         reject_quote                 apply_payment      │
//! │                              │                            │             │
//! │                              ▼                            ▼             │
//! │                       quote_rejected*            downpayment_paid       │
//! │                                                           │             │
//! │                                                      apply_payment      │
//! │                                                           │             │
//! │                                                           ▼             │
//! │              cancel (any non-terminal) ──► cancelled*  paid_in_full*    │
//! │                                                           │             │
//! │                                                        complete         │
//! │                                                           │             │
//! │                                                           ▼             │
//! │                                                       completed*        │
//! │                                                                         │
//! │  (* = terminal)                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design
//! Every operation is a pure transform: it takes the current booking
//! snapshot by reference and returns a NEW snapshot (or a typed error).
//! The caller owns reading the current state and persisting the result
//! atomically - this module performs no I/O and holds no state.
//!
//! Derived fields (`remaining_balance`, `payment_progress`) are recomputed
//! from the stored amounts on every read, so a transform can never leave
//! them inconsistent.
//!
//! ## Idempotency
//! `apply_payment` takes the set of already-applied transaction ids and
//! rejects replays with [`LedgerError::DuplicatePayment`]. The service
//! layer converts that rejection into a success-no-op (gateways retry
//! callbacks by design); the database backs it with a UNIQUE constraint.

use chrono::Utc;

use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::types::{Booking, BookingStatus, DisplayStatus, PaymentEvent, PaymentKind};
use crate::validation::{validate_cancellation_reason, validate_transaction_id};

// =============================================================================
// Payment Application
// =============================================================================

/// Applies a payment event to a booking, returning the new snapshot.
///
/// ## Arguments
/// * `booking` - current booking snapshot
/// * `applied_transaction_ids` - transaction ids of every payment already
///   applied to this booking (the idempotency set, loaded from the payment
///   audit trail)
/// * `event` - the payment event from the gateway
///
/// ## Checks (in order)
/// 1. `amount_cents > 0`, else [`LedgerError::InvalidPaymentAmount`]
/// 2. well-formed transaction id
/// 3. transaction id not already applied, else
///    [`LedgerError::DuplicatePayment`]
/// 4. current status accepts payment and the booking has a contracted
///    amount, else [`LedgerError::InvalidBookingState`]
///
/// ## Settlement Rules
/// ```text
/// Downpayment:
///     total_paid += amount        (clamped to total_amount)
///     status     = downpayment_paid
///                  (or paid_in_full when the clamped total settles
///                   the contract - progress 100 and a non-settled
///                   status must never coexist)
///
/// FullPayment / RemainingBalance:
///     total_paid = total_amount   (full settlement; the stated amount
///                                  is recorded in the audit trail but
///                                  does not drive the math)
///     status     = paid_in_full
/// ```
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use vowly_core::ledger::apply_payment;
/// use vowly_core::{Booking, BookingStatus, Money, PaymentEvent, PaymentKind};
///
/// let booking = Booking::new_request(
///     "c-1", "v-1", "Catering", None, Money::from_cents(50_000_00),
/// );
/// let event = PaymentEvent {
///     kind: PaymentKind::Downpayment,
///     amount_cents: 15_000_00,
///     method: "gcash".into(),
///     transaction_id: "tx1".into(),
///     occurred_at: Utc::now(),
/// };
///
/// let paid = apply_payment(&booking, &[], &event).unwrap();
/// assert_eq!(paid.status, BookingStatus::DownpaymentPaid);
/// assert_eq!(paid.total_paid_cents, 15_000_00);
/// ```
pub fn apply_payment(
    booking: &Booking,
    applied_transaction_ids: &[String],
    event: &PaymentEvent,
) -> LedgerResult<Booking> {
    if event.amount_cents <= 0 {
        return Err(LedgerError::InvalidPaymentAmount {
            amount_cents: event.amount_cents,
        });
    }

    validate_transaction_id(&event.transaction_id)?;

    // Idempotency first: a replayed callback must short-circuit before any
    // state checks, so a retry of the settling payment on an already
    // settled booking is still recognized as a replay, not a state error.
    if applied_transaction_ids
        .iter()
        .any(|tx| tx == &event.transaction_id)
    {
        return Err(LedgerError::DuplicatePayment {
            transaction_id: event.transaction_id.clone(),
        });
    }

    if !booking.status.accepts_payment() {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "apply a payment",
        });
    }

    // A booking with no contracted amount has nothing to pay against.
    if booking.total_amount_cents <= 0 {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "apply a payment before an amount is quoted",
        });
    }

    let total = booking.total_amount();
    let new_paid = match event.kind {
        // Clamp so total_paid never exceeds total_amount.
        PaymentKind::Downpayment => (booking.total_paid() + event.amount()).min(total),
        PaymentKind::FullPayment | PaymentKind::RemainingBalance => total,
    };

    let target = if new_paid >= total {
        BookingStatus::PaidInFull
    } else {
        BookingStatus::DownpaymentPaid
    };

    let mut next = booking.clone();
    next.total_paid_cents = new_paid.cents();
    next.status = advance(booking.status, target);
    next.last_payment_at = Some(event.occurred_at);
    next.payment_method = Some(event.method.clone());
    next.transaction_id = Some(event.transaction_id.clone());
    next.updated_at = event.occurred_at;

    Ok(next)
}

// =============================================================================
// Quote Operations
// =============================================================================

/// Sends a quote for a requested booking.
///
/// ## Precondition
/// Status must be `Request`.
pub fn send_quote(booking: &Booking, quoted_total: Money) -> LedgerResult<Booking> {
    if !quoted_total.is_positive() {
        return Err(LedgerError::Validation(
            crate::error::ValidationError::MustBePositive {
                field: "quoted_total".to_string(),
            },
        ));
    }

    if booking.status != BookingStatus::Request {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "send a quote",
        });
    }

    let mut next = booking.clone();
    next.total_amount_cents = quoted_total.cents();
    next.status = BookingStatus::QuoteSent;
    next.updated_at = Utc::now();

    Ok(next)
}

/// Accepts a sent quote, confirming the booking.
///
/// ## Precondition
/// Status must be `QuoteSent`.
///
/// ## Note
/// Moves directly to `Confirmed` - acceptance and confirmation are one
/// decision in this flow (see `BookingStatus` docs for the legacy
/// `QuoteAccepted` stored value).
pub fn accept_quote(booking: &Booking) -> LedgerResult<Booking> {
    if booking.status != BookingStatus::QuoteSent {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "accept the quote",
        });
    }

    let mut next = booking.clone();
    next.status = BookingStatus::Confirmed;
    next.updated_at = Utc::now();

    Ok(next)
}

/// Rejects a sent quote (terminal).
///
/// ## Precondition
/// Status must be `QuoteSent`.
pub fn reject_quote(booking: &Booking) -> LedgerResult<Booking> {
    if booking.status != BookingStatus::QuoteSent {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "reject the quote",
        });
    }

    let mut next = booking.clone();
    next.status = BookingStatus::QuoteRejected;
    next.updated_at = Utc::now();

    Ok(next)
}

// =============================================================================
// Cancellation & Completion
// =============================================================================

/// Cancels a booking (terminal), storing the reason for audit.
///
/// ## Precondition
/// Status must not already be terminal.
pub fn cancel(booking: &Booking, reason: &str) -> LedgerResult<Booking> {
    validate_cancellation_reason(reason)?;

    if booking.status.is_terminal() {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "cancel",
        });
    }

    let mut next = booking.clone();
    next.status = BookingStatus::Cancelled;
    next.cancellation_reason = Some(reason.trim().to_string());
    next.updated_at = Utc::now();

    Ok(next)
}

/// Marks a fully paid booking as completed (service delivered).
///
/// ## Precondition
/// Status must be `PaidInFull`.
pub fn complete(booking: &Booking) -> LedgerResult<Booking> {
    if booking.status != BookingStatus::PaidInFull {
        return Err(LedgerError::InvalidBookingState {
            booking_id: booking.id.clone(),
            current_status: booking.status,
            operation: "mark as completed",
        });
    }

    let mut next = booking.clone();
    next.status = BookingStatus::Completed;
    next.updated_at = Utc::now();

    Ok(next)
}

// =============================================================================
// Display Derivation
// =============================================================================

/// Maps a booking to its user-facing status bucket.
///
/// ## One Source of Truth
/// UI, reporting, and tests all call this instead of branching on raw
/// status strings. Payment fields participate: a `Confirmed` (or legacy
/// `QuoteAccepted`) row that already carries payments - data predating the
/// ledger - displays as partially paid rather than merely confirmed.
pub fn display_status(booking: &Booking) -> DisplayStatus {
    match booking.status {
        BookingStatus::Request => DisplayStatus::Inquiry,
        BookingStatus::QuoteSent => DisplayStatus::QuoteSent,
        BookingStatus::QuoteAccepted | BookingStatus::Confirmed => {
            if booking.total_paid_cents > 0 {
                DisplayStatus::PartiallyPaid
            } else {
                DisplayStatus::Confirmed
            }
        }
        BookingStatus::DownpaymentPaid => DisplayStatus::PartiallyPaid,
        BookingStatus::PaidInFull => DisplayStatus::Paid,
        BookingStatus::Completed => DisplayStatus::Completed,
        BookingStatus::QuoteRejected => DisplayStatus::QuoteDeclined,
        BookingStatus::Cancelled => DisplayStatus::Cancelled,
    }
}

// =============================================================================
// Internal Helpers
// =============================================================================

/// Forward-only status advance.
///
/// Returns the later-ranked of the two statuses: a payment event can move
/// a booking forward along the lifecycle but never backward.
fn advance(current: BookingStatus, target: BookingStatus) -> BookingStatus {
    match (current.lifecycle_rank(), target.lifecycle_rank()) {
        (Some(c), Some(t)) if c > t => current,
        _ => target,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
