//! # Emporia Terminal
//!
//! The interactive entry point: configuration, tracing, one database
//! gateway, and the top-level login/register/exit loop.
//!
//! ```text
//! main ──► top-level loop ──► auth flow ──► customer menu / staff menu
//!                │                               │
//!                │   exit                        │  every action
//!                ▼                               ▼
//!        gateway.disconnect()            stored procedures
//! ```

mod config;
mod console;
mod error;
mod flows;
mod render;

use std::io::{self, BufRead, BufReader, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::console::Console;
use crate::error::AppError;
use emporia_core::Role;
use emporia_db::{DbConfig, Gateway};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    // Telemetry goes to stderr so it never interleaves with the menus.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();

    let mut gateway = Gateway::new(DbConfig::new(&config.database_url));
    if config.run_migrations {
        // A failure here is the one fatal startup path: without a schema
        // there is nothing to serve.
        gateway.run_migrations().await?;
    }

    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());

    let result = run(&mut gateway, &mut console).await;

    // Exactly one disconnect on the way out, whatever the loop's outcome.
    gateway.disconnect().await?;
    info!("session ended");

    result?;
    Ok(())
}

/// Top-level loop: login, register, or exit.
async fn run<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("=== Welcome to Emporia ===")?;

    loop {
        console.blank()?;
        console.say("Login or register to continue")?;
        console.say("1. Login")?;
        console.say("2. Register")?;
        console.say("3. Exit")?;

        let choice = console.prompt("Select an option (1/2/3): ")?;
        match choice.as_str() {
            "1" => {
                if let Some(session) = flows::auth::login_menu(gateway, console).await? {
                    match session.role {
                        Role::Customer => flows::customer::menu(gateway, console, &session).await?,
                        Role::Staff => flows::staff::menu(gateway, console, &session).await?,
                    }
                }
            }
            "2" => {
                if let Err(err) = flows::auth::register(gateway, console).await {
                    flows::report(console, err)?;
                }
            }
            "3" => {
                console.say("Goodbye!")?;
                return Ok(());
            }
            _ => {
                console.say("Invalid option, please try again.")?;
            }
        }
    }
}
