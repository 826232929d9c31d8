//! seed-admin - create or update an administrator account
//!
//! Ensures an account exists for the given email and password, tags it with an
//! `admin: true` custom claim, and merges a profile into `users/<uid>`.
//!
//! # Examples
//!
//! ```bash
//! export GOOGLE_APPLICATION_CREDENTIALS=/path/to/serviceAccountKey.json
//! seed-admin --email admin@example.com --password admin --first Admin --last User --username admin
//!
//! # Against the local emulators
//! FIREBASE_AUTH_EMULATOR_HOST=127.0.0.1:9099 FIRESTORE_EMULATOR_HOST=127.0.0.1:8080 \
//!     SEED_PROJECT_ID=demo-project seed-admin --email root@example.com
//! ```

use seed_admin::logger;

use std::process::ExitCode;

use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // A .env file may carry GOOGLE_APPLICATION_CREDENTIALS and SEED_* overrides
    dotenvy::dotenv().ok();

    // The logger is configured from this, so failures go to stderr
    let config = match seed_admin::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error resolving log file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting seed-admin v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match seed_admin::run(&config, std::env::args().skip(1)).await {
        Ok(report) => {
            info!(
                "Seeded uid={} ({:?}, claims set: {})",
                report.uid, report.account, report.claims_set
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to seed admin user: {}", e);
            ExitCode::FAILURE
        }
    }
}
