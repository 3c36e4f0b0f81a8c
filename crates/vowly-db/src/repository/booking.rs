//! # Booking Repository
//!
//! Database operations for bookings and their payment audit trail.
//!
//! ## Write Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Write Discipline                             │
//! │                                                                         │
//! │  1. READ SNAPSHOT                                                      │
//! │     └── get_by_id() → Booking { revision: N }                          │
//! │                                                                         │
//! │  2. PURE TRANSFORM (vowly-core, no I/O)                                │
//! │     └── ledger::apply_payment(...) → new snapshot, revision still N    │
//! │                                                                         │
//! │  3. ATOMIC WRITE                                                       │
//! │     └── record_payment_and_update() in ONE transaction:                │
//! │         ├── INSERT booking_payments (UNIQUE transaction_id)            │
//! │         └── UPDATE bookings ... WHERE id = ? AND revision = N          │
//! │             (0 rows → RevisionConflict, transaction rolls back)        │
//! │                                                                         │
//! │  Either the payment record AND the new booking state land together,    │
//! │  or neither does.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::{DbError, DbResult};
use vowly_core::{Booking, PaymentRecord};

/// Columns selected for a full booking row, in struct field order.
const BOOKING_COLUMNS: &str = "\
    id, couple_id, vendor_id, service_name, event_date, status, \
    total_amount_cents, total_paid_cents, last_payment_at, payment_method, \
    transaction_id, cancellation_reason, created_at, updated_at, revision";

/// Repository for booking database operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookingRepository { pool }
    }

    /// Gets a booking by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1");

        let booking = sqlx::query_as::<_, Booking>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Lists all bookings for a couple, most recent first.
    ///
    /// ## Usage
    /// The couple's dashboard view.
    pub async fn list_for_couple(&self, couple_id: &str) -> DbResult<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE couple_id = ?1 ORDER BY created_at DESC"
        );

        let bookings = sqlx::query_as::<_, Booking>(&sql)
            .bind(couple_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookings)
    }

    /// Inserts a new booking row.
    pub async fn insert(&self, booking: &Booking) -> DbResult<()> {
        debug!(id = %booking.id, service = %booking.service_name, "Inserting booking");

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, couple_id, vendor_id, service_name, event_date, status,
                total_amount_cents, total_paid_cents, last_payment_at,
                payment_method, transaction_id, cancellation_reason,
                created_at, updated_at, revision
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6,
                ?7, ?8, ?9,
                ?10, ?11, ?12,
                ?13, ?14, ?15
            )
            "#,
        )
        .bind(&booking.id)
        .bind(&booking.couple_id)
        .bind(&booking.vendor_id)
        .bind(&booking.service_name)
        .bind(booking.event_date)
        .bind(booking.status)
        .bind(booking.total_amount_cents)
        .bind(booking.total_paid_cents)
        .bind(booking.last_payment_at)
        .bind(&booking.payment_method)
        .bind(&booking.transaction_id)
        .bind(&booking.cancellation_reason)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .bind(booking.revision)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persists a transformed booking snapshot.
    ///
    /// ## Optimistic Concurrency
    /// `booking.revision` must be the revision that was READ; the UPDATE is
    /// guarded by it and bumps it. Zero rows affected means another writer
    /// got there first ([`DbError::RevisionConflict`]) or the row is gone
    /// ([`DbError::NotFound`]).
    ///
    /// ## Returns
    /// The persisted booking with its new revision.
    pub async fn update(&self, booking: &Booking) -> DbResult<Booking> {
        let mut tx = self.pool.begin().await?;
        let persisted = update_guarded(&mut tx, booking).await?;
        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(persisted)
    }

    /// Records an applied payment and persists the new booking snapshot in
    /// ONE transaction.
    ///
    /// ## Atomicity
    /// The payment audit row and the booking update land together or not at
    /// all. A replayed transaction id fails the UNIQUE constraint and maps
    /// to [`DbError::DuplicateTransaction`]; a concurrent writer fails the
    /// revision guard and maps to [`DbError::RevisionConflict`]. In both
    /// cases nothing is written.
    pub async fn record_payment_and_update(
        &self,
        booking: &Booking,
        record: &PaymentRecord,
    ) -> DbResult<Booking> {
        debug!(
            booking_id = %record.booking_id,
            transaction_id = %record.transaction_id,
            amount = %record.amount_cents,
            "Recording payment"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO booking_payments (
                id, booking_id, kind, amount_cents, method,
                transaction_id, occurred_at, recorded_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&record.id)
        .bind(&record.booking_id)
        .bind(record.kind)
        .bind(record.amount_cents)
        .bind(&record.method)
        .bind(&record.transaction_id)
        .bind(record.occurred_at)
        .bind(record.recorded_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { field, .. } if field.contains("transaction_id") => {
                DbError::DuplicateTransaction {
                    transaction_id: record.transaction_id.clone(),
                }
            }
            other => other,
        })?;

        let persisted = update_guarded(&mut tx, booking).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(persisted)
    }

    /// Gets the payment audit trail for a booking, oldest first.
    pub async fn payments(&self, booking_id: &str) -> DbResult<Vec<PaymentRecord>> {
        let records = sqlx::query_as::<_, PaymentRecord>(
            r#"
            SELECT id, booking_id, kind, amount_cents, method,
                   transaction_id, occurred_at, recorded_at
            FROM booking_payments
            WHERE booking_id = ?1
            ORDER BY recorded_at, id
            "#,
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Gets the transaction ids of every payment applied to a booking.
    ///
    /// ## Usage
    /// The idempotency set passed to `ledger::apply_payment`.
    pub async fn applied_transaction_ids(&self, booking_id: &str) -> DbResult<Vec<String>> {
        let ids: Vec<String> = sqlx::query_scalar(
            "SELECT transaction_id FROM booking_payments WHERE booking_id = ?1",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}

/// Revision-guarded booking UPDATE within an open transaction.
///
/// Shared by `update` and `record_payment_and_update` so both paths enforce
/// the same guard.
async fn update_guarded(
    tx: &mut Transaction<'_, Sqlite>,
    booking: &Booking,
) -> DbResult<Booking> {
    let result = sqlx::query(
        r#"
        UPDATE bookings SET
            event_date = ?2,
            status = ?3,
            total_amount_cents = ?4,
            total_paid_cents = ?5,
            last_payment_at = ?6,
            payment_method = ?7,
            transaction_id = ?8,
            cancellation_reason = ?9,
            updated_at = ?10,
            revision = revision + 1
        WHERE id = ?1 AND revision = ?11
        "#,
    )
    .bind(&booking.id)
    .bind(booking.event_date)
    .bind(booking.status)
    .bind(booking.total_amount_cents)
    .bind(booking.total_paid_cents)
    .bind(booking.last_payment_at)
    .bind(&booking.payment_method)
    .bind(&booking.transaction_id)
    .bind(&booking.cancellation_reason)
    .bind(booking.updated_at)
    .bind(booking.revision)
    .execute(&mut **tx)
    .await?;

    if result.rows_affected() == 0 {
        // Distinguish a concurrent writer from a missing row.
        let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM bookings WHERE id = ?1")
            .bind(&booking.id)
            .fetch_optional(&mut **tx)
            .await?;

        return Err(match exists {
            Some(_) => DbError::revision_conflict(&booking.id),
            None => DbError::not_found("Booking", &booking.id),
        });
    }

    let mut persisted = booking.clone();
    persisted.revision += 1;
    Ok(persisted)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{NaiveDate, Utc};
    use vowly_core::{BookingStatus, Money, PaymentEvent, PaymentKind};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_booking() -> Booking {
        let mut booking = Booking::new_request(
            "11111111-1111-4111-8111-111111111111",
            "22222222-2222-4222-8222-222222222222",
            "Garden Venue Package",
            NaiveDate::from_ymd_opt(2026, 11, 21),
            Money::from_cents(250_000_00),
        );
        booking.status = BookingStatus::Confirmed;
        booking
    }

    fn sample_record(booking_id: &str, transaction_id: &str) -> PaymentRecord {
        PaymentRecord::from_event(
            booking_id,
            &PaymentEvent {
                kind: PaymentKind::Downpayment,
                amount_cents: 75_000_00,
                method: "gcash".to_string(),
                transaction_id: transaction_id.to_string(),
                occurred_at: Utc::now(),
            },
        )
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let db = test_db().await;
        let booking = sample_booking();

        db.bookings().insert(&booking).await.unwrap();

        let loaded = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
        assert_eq!(loaded, booking);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = test_db().await;
        let loaded = db.bookings().get_by_id("nope").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_list_for_couple() {
        let db = test_db().await;
        let first = sample_booking();
        let mut second = sample_booking();
        second.id = "33333333-3333-4333-8333-333333333333".to_string();
        second.service_name = "Bridal Hair & Makeup".to_string();
        let mut other_couple = sample_booking();
        other_couple.id = "44444444-4444-4444-8444-444444444444".to_string();
        other_couple.couple_id = "99999999-9999-4999-8999-999999999999".to_string();

        for b in [&first, &second, &other_couple] {
            db.bookings().insert(b).await.unwrap();
        }

        let listed = db.bookings().list_for_couple(&first.couple_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|b| b.couple_id == first.couple_id));
    }

    #[tokio::test]
    async fn test_update_bumps_revision() {
        let db = test_db().await;
        let booking = sample_booking();
        db.bookings().insert(&booking).await.unwrap();

        let mut changed = booking.clone();
        changed.status = BookingStatus::DownpaymentPaid;
        changed.total_paid_cents = 75_000_00;

        let persisted = db.bookings().update(&changed).await.unwrap();
        assert_eq!(persisted.revision, booking.revision + 1);

        let loaded = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, BookingStatus::DownpaymentPaid);
        assert_eq!(loaded.total_paid_cents, 75_000_00);
        assert_eq!(loaded.revision, booking.revision + 1);
    }

    #[tokio::test]
    async fn test_update_stale_revision_conflicts() {
        let db = test_db().await;
        let booking = sample_booking();
        db.bookings().insert(&booking).await.unwrap();

        // First writer wins
        let mut first = booking.clone();
        first.total_paid_cents = 10_000_00;
        db.bookings().update(&first).await.unwrap();

        // Second writer still holds the stale revision
        let mut second = booking.clone();
        second.total_paid_cents = 20_000_00;
        let err = db.bookings().update(&second).await.unwrap_err();
        assert!(matches!(err, DbError::RevisionConflict { .. }));

        // First write survives untouched
        let loaded = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
        assert_eq!(loaded.total_paid_cents, 10_000_00);
    }

    #[tokio::test]
    async fn test_update_missing_row_not_found() {
        let db = test_db().await;
        let booking = sample_booking();

        let err = db.bookings().update(&booking).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_payment_and_update_atomic() {
        let db = test_db().await;
        let booking = sample_booking();
        db.bookings().insert(&booking).await.unwrap();

        let mut paid = booking.clone();
        paid.status = BookingStatus::DownpaymentPaid;
        paid.total_paid_cents = 75_000_00;
        let record = sample_record(&booking.id, "tx-atomic-1");

        let persisted = db
            .bookings()
            .record_payment_and_update(&paid, &record)
            .await
            .unwrap();
        assert_eq!(persisted.revision, booking.revision + 1);

        let payments = db.bookings().payments(&booking.id).await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].transaction_id, "tx-atomic-1");
        assert_eq!(payments[0].kind, PaymentKind::Downpayment);

        let ids = db.bookings().applied_transaction_ids(&booking.id).await.unwrap();
        assert_eq!(ids, vec!["tx-atomic-1".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_transaction_id_rejected() {
        let db = test_db().await;
        let booking = sample_booking();
        db.bookings().insert(&booking).await.unwrap();

        let mut paid = booking.clone();
        paid.total_paid_cents = 75_000_00;
        paid.status = BookingStatus::DownpaymentPaid;
        let record = sample_record(&booking.id, "tx-dup");

        let persisted = db
            .bookings()
            .record_payment_and_update(&paid, &record)
            .await
            .unwrap();

        // Replay with the SAME transaction id against the fresh snapshot
        let mut again = persisted.clone();
        again.total_paid_cents = 150_000_00;
        let replay = sample_record(&booking.id, "tx-dup");

        let err = db
            .bookings()
            .record_payment_and_update(&again, &replay)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::DuplicateTransaction { transaction_id } if transaction_id == "tx-dup"
        ));

        // Nothing was double-applied
        let loaded = db.bookings().get_by_id(&booking.id).await.unwrap().unwrap();
        assert_eq!(loaded.total_paid_cents, 75_000_00);
        assert_eq!(db.bookings().payments(&booking.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_revision_conflict_rolls_back_payment_record() {
        let db = test_db().await;
        let booking = sample_booking();
        db.bookings().insert(&booking).await.unwrap();

        // Another writer bumps the revision first
        let mut winner = booking.clone();
        winner.total_paid_cents = 5_000_00;
        db.bookings().update(&winner).await.unwrap();

        // This writer still holds the stale snapshot
        let mut stale = booking.clone();
        stale.total_paid_cents = 75_000_00;
        let record = sample_record(&booking.id, "tx-rollback");

        let err = db
            .bookings()
            .record_payment_and_update(&stale, &record)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::RevisionConflict { .. }));

        // The payment insert was rolled back with the failed update
        assert!(db.bookings().payments(&booking.id).await.unwrap().is_empty());
    }
}
