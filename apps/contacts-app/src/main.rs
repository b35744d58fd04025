//! # My Contacts Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match contacts_app::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("contacts-app: {e}");
            ExitCode::FAILURE
        }
    }
}
