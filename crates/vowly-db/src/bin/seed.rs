//! # Seed Data Generator
//!
//! Populates the database with sample bookings for development.
//!
//! ## Usage
//! ```bash
//! # Generate 24 bookings (default)
//! cargo run -p vowly-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p vowly-db --bin seed -- --count 100
//!
//! # Specify database path
//! cargo run -p vowly-db --bin seed -- --db ./data/vowly.db
//! ```
//!
//! ## Generated Bookings
//! Creates bookings across vendor categories (venue, photography, catering,
//! florals, music, beauty) and spreads them over the whole lifecycle:
//! fresh requests, sent quotes, confirmed bookings, partially and fully paid
//! bookings, and a few cancellations. Paid bookings get a consistent payment
//! audit trail - every seeded state is produced by the real ledger
//! transforms and repository writes, never by raw row fiddling.

use std::env;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, Utc};
use vowly_core::{ledger, Booking, Money, PaymentEvent, PaymentKind};
use vowly_db::{Database, DbConfig, DbResult};

/// Vendor service catalog: (category, services with base price in pesos).
const CATALOG: &[(&str, &[(&str, i64)])] = &[
    (
        "venue",
        &[
            ("Garden Venue Package", 250_000),
            ("Ballroom Venue Package", 380_000),
            ("Beachfront Venue Package", 420_000),
        ],
    ),
    (
        "photography",
        &[
            ("Full-Day Photography", 85_000),
            ("Photo & Video Bundle", 140_000),
            ("Same-Day Edit Video", 60_000),
        ],
    ),
    (
        "catering",
        &[
            ("Plated Dinner for 100", 180_000),
            ("Buffet for 150", 210_000),
            ("Cocktail Reception", 95_000),
        ],
    ),
    (
        "florals",
        &[
            ("Ceremony & Reception Florals", 70_000),
            ("Bridal Bouquet & Entourage", 25_000),
        ],
    ),
    (
        "music",
        &[
            ("Acoustic Ceremony Set", 35_000),
            ("Full Band Reception", 90_000),
        ],
    ),
    (
        "beauty",
        &[
            ("Bridal Hair & Makeup", 30_000),
            ("Entourage Hair & Makeup", 45_000),
        ],
    ),
];

/// Payment channels seen in production.
const METHODS: &[&str] = &["gcash", "bank_transfer", "card"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env(),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 24;
    let mut db_path = String::from("./vowly_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(24);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Vowly Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of bookings to generate (default: 24)");
                println!("  -d, --db <PATH>    Database file path (default: ./vowly_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Vowly Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!("Bookings: {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();
    println!("Generating bookings...");

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        seed_booking(&db, seed).await?;
        generated += 1;

        if generated % 10 == 0 {
            println!("  Generated {} bookings...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} bookings in {:?}", generated, elapsed);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Creates one booking and drives it to a lifecycle stage picked by `seed`.
async fn seed_booking(db: &Database, seed: usize) -> DbResult<()> {
    let (category, services) = CATALOG[seed % CATALOG.len()];
    let (service_name, base_pesos) = services[(seed / CATALOG.len()) % services.len()];

    let couple_id = uuid::Uuid::from_str(&format!(
        "00000000-0000-4000-8000-{:012}",
        (seed % 8) + 1
    ))
    .expect("static couple id")
    .to_string();
    let vendor_id = uuid::Uuid::new_v4().to_string();

    let event_date = NaiveDate::from_ymd_opt(2026, 1 + (seed % 12) as u32, 1 + (seed % 27) as u32);
    let quote = Money::from_pesos(base_pesos + (seed as i64 * 137) % 10_000);
    let method = METHODS[seed % METHODS.len()];

    // Born as a request; the quoted amount is attached by send_quote below.
    let booking = Booking::new_request(&couple_id, &vendor_id, service_name, event_date, Money::zero());
    db.bookings().insert(&booking).await?;

    // Stage 0: fresh request - nothing more to do
    if seed % 6 == 0 {
        return Ok(());
    }

    // Stage 1+: quote sent
    let quoted = ledger::send_quote(&booking, quote).expect("send_quote on fresh request");
    let mut current = db.bookings().update(&quoted).await?;
    if seed % 6 == 1 {
        return Ok(());
    }

    // Stage 5: couple walked away after the quote
    if seed % 6 == 5 {
        let cancelled = ledger::cancel(&current, "Couple chose another vendor")
            .expect("cancel non-terminal booking");
        db.bookings().update(&cancelled).await?;
        return Ok(());
    }

    // Stage 2+: confirmed
    let confirmed = ledger::accept_quote(&current).expect("accept sent quote");
    current = db.bookings().update(&confirmed).await?;
    if seed % 6 == 2 {
        return Ok(());
    }

    // Stage 3+: downpayment (30% of the quote)
    let downpayment = PaymentEvent {
        kind: PaymentKind::Downpayment,
        amount_cents: quote.cents() * 30 / 100,
        method: method.to_string(),
        transaction_id: format!("seed-tx-{seed}-dp"),
        occurred_at: Utc::now() - Duration::days(14),
    };
    let paid = ledger::apply_payment(&current, &[], &downpayment).expect("downpayment applies");
    let record = vowly_core::PaymentRecord::from_event(&current.id, &downpayment);
    current = db.bookings().record_payment_and_update(&paid, &record).await?;
    if seed % 6 == 3 {
        return Ok(());
    }

    // Stage 4: balance settled
    let balance = PaymentEvent {
        kind: PaymentKind::RemainingBalance,
        amount_cents: current.remaining_balance().cents(),
        method: method.to_string(),
        transaction_id: format!("seed-tx-{seed}-bal"),
        occurred_at: Utc::now() - Duration::days(2),
    };
    let applied_ids = db.bookings().applied_transaction_ids(&current.id).await?;
    let settled =
        ledger::apply_payment(&current, &applied_ids, &balance).expect("balance applies");
    let record = vowly_core::PaymentRecord::from_event(&current.id, &balance);
    db.bookings().record_payment_and_update(&settled, &record).await?;

    Ok(())
}
