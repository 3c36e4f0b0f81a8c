//! # Booking Service
//!
//! The caller-side orchestration in front of the booking ledger.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Mutation, Start To Finish                        │
//! │                                                                         │
//! │  submit_payment(booking_id, request)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Acquire per-booking lock ◄── at most one writer per booking id     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Load booking snapshot + applied transaction ids                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. ledger::apply_payment (pure, vowly-core)                           │
//! │       │                                                                 │
//! │       ├── DuplicatePayment ──► return EXISTING state (success no-op)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. record_payment_and_update (one transaction, vowly-db)              │
//! │       │                                                                 │
//! │       ├── DuplicateTransaction ──► reload, return state (no-op)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. BookingView from the PERSISTED snapshot                            │
//! │                                                                         │
//! │  UI state transitions are driven only by the returned view, never by   │
//! │  assumptions made before the call resolved.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ServiceError;
use crate::locks::BookingLocks;
use vowly_core::ledger;
use vowly_core::validation::{validate_payment_method, validate_service_name, validate_uuid};
use vowly_core::{
    Booking, BookingStatus, DisplayStatus, LedgerError, LedgerResult, Money, PaymentEvent,
    PaymentKind, PaymentRecord,
};
use vowly_db::{Database, DbError};

// =============================================================================
// Request DTOs
// =============================================================================

/// Input for creating a booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub couple_id: String,
    pub vendor_id: String,
    pub service_name: String,
    pub event_date: Option<NaiveDate>,
    /// Contracted price in centavos. Zero for services quoted later.
    #[serde(default)]
    pub total_amount_cents: i64,
}

/// Input for submitting a payment, as received from a gateway webhook or
/// the couple's payment confirmation.
///
/// ## Note
/// `kind` arrives as the gateway's raw wire string; parsing it is where
/// malformed payloads are caught.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub kind: String,
    pub amount_cents: i64,
    pub method: String,
    pub transaction_id: String,
    /// When the payment occurred at the gateway. Defaults to now.
    pub occurred_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Booking View
// =============================================================================

/// Dashboard projection of one booking.
///
/// ## One Source of Truth
/// Status bucket, label, progress, and balance are all derived here from
/// the ledger's own derivations - the frontend renders this and never
/// branches on raw status strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: String,
    pub couple_id: String,
    pub vendor_id: String,
    pub service_name: String,
    pub event_date: Option<NaiveDate>,
    pub status: BookingStatus,
    pub display_status: DisplayStatus,
    pub display_label: String,
    pub total_amount_cents: i64,
    pub total_paid_cents: i64,
    pub remaining_balance_cents: i64,
    pub payment_progress: u8,
    pub last_payment_at: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub cancellation_reason: Option<String>,
}

impl From<&Booking> for BookingView {
    fn from(booking: &Booking) -> Self {
        let display = ledger::display_status(booking);
        BookingView {
            id: booking.id.clone(),
            couple_id: booking.couple_id.clone(),
            vendor_id: booking.vendor_id.clone(),
            service_name: booking.service_name.clone(),
            event_date: booking.event_date,
            status: booking.status,
            display_status: display,
            display_label: display.label().to_string(),
            total_amount_cents: booking.total_amount_cents,
            total_paid_cents: booking.total_paid_cents,
            remaining_balance_cents: booking.remaining_balance().cents(),
            payment_progress: booking.payment_progress(),
            last_payment_at: booking.last_payment_at,
            payment_method: booking.payment_method.clone(),
            transaction_id: booking.transaction_id.clone(),
            cancellation_reason: booking.cancellation_reason.clone(),
        }
    }
}

// =============================================================================
// Booking Service
// =============================================================================

/// Orchestrates booking mutations: load → pure transform → atomic persist.
///
/// Cheap to clone; clones share the database pool and the lock registry.
#[derive(Debug, Clone)]
pub struct BookingService {
    db: Database,
    locks: BookingLocks,
}

impl BookingService {
    /// Creates a service in front of the given database.
    pub fn new(db: Database) -> Self {
        BookingService {
            db,
            locks: BookingLocks::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Gets one booking as a dashboard view.
    pub async fn get_booking(&self, booking_id: &str) -> Result<BookingView, ServiceError> {
        let booking = self.load(booking_id).await?;
        Ok(BookingView::from(&booking))
    }

    /// Lists a couple's bookings, most recent first.
    pub async fn list_for_couple(
        &self,
        couple_id: &str,
    ) -> Result<Vec<BookingView>, ServiceError> {
        let bookings = self.db.bookings().list_for_couple(couple_id).await?;
        Ok(bookings.iter().map(BookingView::from).collect())
    }

    // -------------------------------------------------------------------------
    // Booking creation
    // -------------------------------------------------------------------------

    /// Creates a new booking request.
    pub async fn create_request(
        &self,
        request: CreateBookingRequest,
    ) -> Result<BookingView, ServiceError> {
        validate_uuid(&request.couple_id).map_err(LedgerError::from)?;
        validate_uuid(&request.vendor_id).map_err(LedgerError::from)?;
        validate_service_name(&request.service_name).map_err(LedgerError::from)?;
        if request.total_amount_cents < 0 {
            return Err(ServiceError::validation(
                "totalAmountCents must not be negative",
            ));
        }

        let booking = Booking::new_request(
            &request.couple_id,
            &request.vendor_id,
            &request.service_name,
            request.event_date,
            Money::from_cents(request.total_amount_cents),
        );

        self.db.bookings().insert(&booking).await?;

        info!(
            booking_id = %booking.id,
            service = %booking.service_name,
            "Booking request created"
        );

        Ok(BookingView::from(&booking))
    }

    // -------------------------------------------------------------------------
    // Quote operations
    // -------------------------------------------------------------------------

    /// Sends a quote for a requested booking.
    pub async fn send_quote(
        &self,
        booking_id: &str,
        quoted_total_cents: i64,
    ) -> Result<BookingView, ServiceError> {
        self.mutate(booking_id, "send_quote", |booking| {
            ledger::send_quote(booking, Money::from_cents(quoted_total_cents))
        })
        .await
    }

    /// Accepts a sent quote, confirming the booking.
    pub async fn accept_quote(&self, booking_id: &str) -> Result<BookingView, ServiceError> {
        self.mutate(booking_id, "accept_quote", ledger::accept_quote).await
    }

    /// Rejects a sent quote (terminal).
    pub async fn reject_quote(&self, booking_id: &str) -> Result<BookingView, ServiceError> {
        self.mutate(booking_id, "reject_quote", ledger::reject_quote).await
    }

    // -------------------------------------------------------------------------
    // Cancellation & completion
    // -------------------------------------------------------------------------

    /// Cancels a booking, storing the reason for audit.
    pub async fn cancel(
        &self,
        booking_id: &str,
        reason: &str,
    ) -> Result<BookingView, ServiceError> {
        self.mutate(booking_id, "cancel", |booking| ledger::cancel(booking, reason))
            .await
    }

    /// Marks a fully paid booking as completed.
    pub async fn complete(&self, booking_id: &str) -> Result<BookingView, ServiceError> {
        self.mutate(booking_id, "complete", ledger::complete).await
    }

    // -------------------------------------------------------------------------
    // Payments
    // -------------------------------------------------------------------------

    /// Applies a payment to a booking.
    ///
    /// ## Idempotency
    /// A replayed transaction id - whether caught by the ledger's check or
    /// by the database UNIQUE constraint - returns the EXISTING booking
    /// state as a success, so gateway retries are transparent to upstream
    /// retry logic.
    pub async fn submit_payment(
        &self,
        booking_id: &str,
        request: PaymentRequest,
    ) -> Result<BookingView, ServiceError> {
        debug!(
            booking_id = %booking_id,
            transaction_id = %request.transaction_id,
            kind = %request.kind,
            amount = %request.amount_cents,
            "submit_payment"
        );

        let kind: PaymentKind = request.kind.parse().map_err(ServiceError::from)?;
        validate_payment_method(&request.method).map_err(LedgerError::from)?;

        let event = PaymentEvent {
            kind,
            amount_cents: request.amount_cents,
            method: request.method.trim().to_string(),
            transaction_id: request.transaction_id.trim().to_string(),
            occurred_at: request.occurred_at.unwrap_or_else(Utc::now),
        };

        let _guard = self.locks.acquire(booking_id).await;

        let booking = self.load(booking_id).await?;
        let applied = self.db.bookings().applied_transaction_ids(booking_id).await?;

        let next = match ledger::apply_payment(&booking, &applied, &event) {
            Ok(next) => next,
            Err(LedgerError::DuplicatePayment { transaction_id }) => {
                warn!(
                    booking_id = %booking_id,
                    transaction_id = %transaction_id,
                    "Replayed payment ignored"
                );
                return Ok(BookingView::from(&booking));
            }
            Err(err) => return Err(err.into()),
        };

        let record = PaymentRecord::from_event(booking_id, &event);
        let persisted = match self.db.bookings().record_payment_and_update(&next, &record).await {
            Ok(persisted) => persisted,
            Err(DbError::DuplicateTransaction { transaction_id }) => {
                // A second process recorded this transaction between our
                // read and write. Same answer: the existing state.
                warn!(
                    booking_id = %booking_id,
                    transaction_id = %transaction_id,
                    "Replayed payment caught by database constraint"
                );
                let current = self.load(booking_id).await?;
                return Ok(BookingView::from(&current));
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            booking_id = %booking_id,
            transaction_id = %event.transaction_id,
            total_paid = %persisted.total_paid_cents,
            status = ?persisted.status,
            "Payment applied"
        );

        Ok(BookingView::from(&persisted))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Loads a booking or fails with NotFound.
    async fn load(&self, booking_id: &str) -> Result<Booking, ServiceError> {
        self.db
            .bookings()
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking", booking_id))
    }

    /// Shared flow for non-payment mutations:
    /// lock → load → pure transform → revision-guarded persist.
    async fn mutate<F>(
        &self,
        booking_id: &str,
        operation: &'static str,
        transform: F,
    ) -> Result<BookingView, ServiceError>
    where
        F: FnOnce(&Booking) -> LedgerResult<Booking>,
    {
        let _guard = self.locks.acquire(booking_id).await;

        let booking = self.load(booking_id).await?;
        let next = transform(&booking)?;
        let persisted = self.db.bookings().update(&next).await?;

        info!(
            booking_id = %booking_id,
            operation = operation,
            status = ?persisted.status,
            "Booking updated"
        );

        Ok(BookingView::from(&persisted))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use vowly_db::DbConfig;

    const COUPLE: &str = "11111111-1111-4111-8111-111111111111";
    const VENDOR: &str = "22222222-2222-4222-8222-222222222222";

    async fn setup() -> (Database, BookingService) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = BookingService::new(db.clone());
        (db, service)
    }

    fn create_request(total_amount_cents: i64) -> CreateBookingRequest {
        CreateBookingRequest {
            couple_id: COUPLE.to_string(),
            vendor_id: VENDOR.to_string(),
            service_name: "Full-Day Photography".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 11, 21),
            total_amount_cents,
        }
    }

    fn payment(kind: &str, amount_cents: i64, transaction_id: &str) -> PaymentRequest {
        PaymentRequest {
            kind: kind.to_string(),
            amount_cents,
            method: "gcash".to_string(),
            transaction_id: transaction_id.to_string(),
            occurred_at: None,
        }
    }

    // -------------------------------------------------------------------------
    // Creation and reads
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_and_get() {
        let (_db, service) = setup().await;

        let created = service.create_request(create_request(50_000_00)).await.unwrap();
        assert_eq!(created.status, BookingStatus::Request);
        assert_eq!(created.display_status, DisplayStatus::Inquiry);
        assert_eq!(created.display_label, "Request Sent");
        assert_eq!(created.payment_progress, 0);

        let fetched = service.get_booking(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_request_validation() {
        let (_db, service) = setup().await;

        let mut bad_couple = create_request(0);
        bad_couple.couple_id = "not-a-uuid".to_string();
        let err = service.create_request(bad_couple).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut bad_name = create_request(0);
        bad_name.service_name = "   ".to_string();
        let err = service.create_request(bad_name).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = service.create_request(create_request(-1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_get_missing_booking() {
        let (_db, service) = setup().await;
        let err = service.get_booking("missing-id").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_list_for_couple() {
        let (_db, service) = setup().await;

        service.create_request(create_request(10_000_00)).await.unwrap();
        service.create_request(create_request(20_000_00)).await.unwrap();

        let listed = service.list_for_couple(COUPLE).await.unwrap();
        assert_eq!(listed.len(), 2);

        let other = service
            .list_for_couple("99999999-9999-4999-8999-999999999999")
            .await
            .unwrap();
        assert!(other.is_empty());
    }

    // -------------------------------------------------------------------------
    // Payment scenarios, end to end
    // -------------------------------------------------------------------------

    /// Downpayment on a fresh request.
    #[tokio::test]
    async fn test_scenario_downpayment() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        let view = service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap();

        assert_eq!(view.status, BookingStatus::DownpaymentPaid);
        assert_eq!(view.total_paid_cents, 15_000_00);
        assert_eq!(view.remaining_balance_cents, 35_000_00);
        assert_eq!(view.payment_progress, 30);
        assert_eq!(view.display_status, DisplayStatus::PartiallyPaid);
        assert!(view.last_payment_at.is_some());
    }

    /// Remaining balance settles the contract.
    #[tokio::test]
    async fn test_scenario_balance_settles() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap();
        let view = service
            .submit_payment(&booking.id, payment("remaining_balance", 35_000_00, "tx2"))
            .await
            .unwrap();

        assert_eq!(view.status, BookingStatus::PaidInFull);
        assert_eq!(view.total_paid_cents, 50_000_00);
        assert_eq!(view.remaining_balance_cents, 0);
        assert_eq!(view.payment_progress, 100);
        assert_eq!(view.display_label, "Paid in Full");
    }

    /// Replaying the same event is a transparent no-op.
    #[tokio::test]
    async fn test_scenario_replay_is_noop() {
        let (db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        let first = service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap();
        let replay = service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap();

        // Identical result, no double-counting to 30,000
        assert_eq!(replay, first);
        assert_eq!(replay.total_paid_cents, 15_000_00);

        // Exactly one audit row
        let records = db.bookings().payments(&booking.id).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    /// Payments against a cancelled booking fail and change nothing.
    #[tokio::test]
    async fn test_scenario_payment_on_cancelled() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();
        service.cancel(&booking.id, "Wedding postponed").await.unwrap();

        let err = service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let view = service.get_booking(&booking.id).await.unwrap();
        assert_eq!(view.status, BookingStatus::Cancelled);
        assert_eq!(view.total_paid_cents, 0);
        assert_eq!(view.cancellation_reason.as_deref(), Some("Wedding postponed"));
    }

    /// A rejected quote is terminal.
    #[tokio::test]
    async fn test_scenario_reject_then_accept() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(0)).await.unwrap();
        service.send_quote(&booking.id, 80_000_00).await.unwrap();

        let rejected = service.reject_quote(&booking.id).await.unwrap();
        assert_eq!(rejected.status, BookingStatus::QuoteRejected);
        assert_eq!(rejected.display_status, DisplayStatus::QuoteDeclined);

        let err = service.accept_quote(&booking.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    // -------------------------------------------------------------------------
    // Full lifecycle
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (db, service) = setup().await;
        let booking = service.create_request(create_request(0)).await.unwrap();

        let quoted = service.send_quote(&booking.id, 120_000_00).await.unwrap();
        assert_eq!(quoted.status, BookingStatus::QuoteSent);
        assert_eq!(quoted.total_amount_cents, 120_000_00);

        let confirmed = service.accept_quote(&booking.id).await.unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert_eq!(confirmed.display_label, "Confirmed");

        let down = service
            .submit_payment(&booking.id, payment("downpayment", 36_000_00, "tx-dp"))
            .await
            .unwrap();
        assert_eq!(down.payment_progress, 30);

        let settled = service
            .submit_payment(&booking.id, payment("remaining_balance", 84_000_00, "tx-bal"))
            .await
            .unwrap();
        assert_eq!(settled.status, BookingStatus::PaidInFull);
        assert_eq!(settled.payment_progress, 100);

        let done = service.complete(&booking.id).await.unwrap();
        assert_eq!(done.status, BookingStatus::Completed);
        assert_eq!(done.display_label, "Completed");

        // Audit trail holds both payments, oldest first
        let records = db.bookings().payments(&booking.id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].transaction_id, "tx-dp");
        assert_eq!(records[1].transaction_id, "tx-bal");
    }

    // -------------------------------------------------------------------------
    // Input rejection
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_unknown_payment_kind() {
        let (db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        let err = service
            .submit_payment(&booking.id, payment("store_credit", 15_000_00, "tx1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("store_credit"));

        // Nothing recorded
        assert!(db.bookings().payments(&booking.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_positive_amount() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        for bad in [0, -15_000_00] {
            let err = service
                .submit_payment(&booking.id, payment("downpayment", bad, "tx1"))
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::PaymentError);
        }

        let view = service.get_booking(&booking.id).await.unwrap();
        assert_eq!(view.total_paid_cents, 0);
        assert_eq!(view.status, BookingStatus::Request);
    }

    #[tokio::test]
    async fn test_payment_before_quote() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(0)).await.unwrap();

        let err = service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    /// Two different payments racing on one booking both land, serialized.
    #[tokio::test]
    async fn test_concurrent_distinct_payments() {
        let (db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        let a = {
            let service = service.clone();
            let id = booking.id.clone();
            tokio::spawn(async move {
                service
                    .submit_payment(&id, payment("downpayment", 10_000_00, "tx-a"))
                    .await
            })
        };
        let b = {
            let service = service.clone();
            let id = booking.id.clone();
            tokio::spawn(async move {
                service
                    .submit_payment(&id, payment("downpayment", 20_000_00, "tx-b"))
                    .await
            })
        };

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        // No lost update: both payments counted exactly once
        let view = service.get_booking(&booking.id).await.unwrap();
        assert_eq!(view.total_paid_cents, 30_000_00);
        assert_eq!(db.bookings().payments(&booking.id).await.unwrap().len(), 2);
    }

    /// A webhook retry racing the original lands exactly once.
    #[tokio::test]
    async fn test_concurrent_duplicate_payment() {
        let (db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = service.clone();
            let id = booking.id.clone();
            handles.push(tokio::spawn(async move {
                service
                    .submit_payment(&id, payment("downpayment", 15_000_00, "tx-retry"))
                    .await
            }));
        }
        for handle in handles {
            // Every caller sees success - replays are transparent
            handle.await.unwrap().unwrap();
        }

        let view = service.get_booking(&booking.id).await.unwrap();
        assert_eq!(view.total_paid_cents, 15_000_00);
        assert_eq!(db.bookings().payments(&booking.id).await.unwrap().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_view_serializes_camel_case() {
        let (_db, service) = setup().await;
        let booking = service.create_request(create_request(50_000_00)).await.unwrap();
        let view = service
            .submit_payment(&booking.id, payment("downpayment", 15_000_00, "tx1"))
            .await
            .unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "downpayment_paid");
        assert_eq!(json["displayStatus"], "partially_paid");
        assert_eq!(json["displayLabel"], "Partially Paid");
        assert_eq!(json["totalPaidCents"], 1_500_000);
        assert_eq!(json["remainingBalanceCents"], 3_500_000);
        assert_eq!(json["paymentProgress"], 30);
    }
}
