//! # Seed Data Generator
//!
//! Populates the database with demo contacts for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 contacts (default)
//! cargo run -p contacts-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p contacts-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p contacts-db --bin seed -- --db ./data/contacts_database.db
//! ```
//!
//! Each contact gets a UUID, a `contactN` name and a ten-digit mobile
//! number derived from N.

use std::env;

use contacts_core::Contact;
use contacts_db::{ContactRepository, Database, DbConfig, DbResult};

const DEFAULT_COUNT: usize = 50;
const DEFAULT_DB_PATH: &str = "./contacts_dev.db";

/// Rows written per transaction
const BATCH_SIZE: usize = 100;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1]
                        .parse()
                        .map_err(|_| format!("invalid --count value: {}", args[i + 1]))?;
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
                println!("My Contacts Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of contacts to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("My Contacts Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!("Contacts: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.contacts();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let start = std::time::Instant::now();

    match seed_contacts(&repo, count).await? {
        SeedOutcome::Skipped { existing } => {
            println!("⚠ Database already has {} contacts", existing);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Delete the database file to regenerate.");
        }
        SeedOutcome::Seeded { written } => {
            println!();
            println!("✓ Generated {} contacts in {:?}", written, start.elapsed());
        }
    }

    db.close().await;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum SeedOutcome {
    /// The store already had rows; nothing was written.
    Skipped { existing: i64 },
    Seeded { written: usize },
}

/// Writes `count` demo contacts in batches, unless the store has rows.
async fn seed_contacts(repo: &ContactRepository, count: usize) -> DbResult<SeedOutcome> {
    let existing = repo.count().await?;
    if existing > 0 {
        return Ok(SeedOutcome::Skipped { existing });
    }

    let contacts: Vec<Contact> = (1..=count).map(generate_contact).collect();

    for (batch_idx, batch) in contacts.chunks(BATCH_SIZE).enumerate() {
        repo.insert_contacts(batch).await?;
        let written = batch_idx * BATCH_SIZE + batch.len();
        if written % 500 == 0 {
            println!("  Generated {} contacts...", written);
        }
    }

    Ok(SeedOutcome::Seeded {
        written: contacts.len(),
    })
}

/// Builds the `n`-th demo contact.
fn generate_contact(n: usize) -> Contact {
    Contact::new(format!("contact{n}"), format!("{:010}", 1_234_567_890 + n))
}
