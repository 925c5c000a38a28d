//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailauth_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit code policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mailauth_check::app::evaluate_exit_code;
use mailauth_check::initialization::init_logger_with;
use mailauth_check::{run, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // so RUST_LOG can be set without exporting it manually
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    match run(config).await {
        Ok(summary) => process::exit(evaluate_exit_code(fail_on, &summary)),
        Err(e) => {
            eprintln!("mailauth_check error: {:#}", e);
            process::exit(1);
        }
    }
}
