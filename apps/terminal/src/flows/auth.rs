//! # Auth Flow
//!
//! Login and registration. Login is a small state machine: show the menu,
//! collect credentials, resolve them through the `login` procedure, and
//! either hand back a [`Session`] or loop. A database error during the
//! attempt is reported and loops back to the menu rather than crashing the
//! flow; only choosing "return" leaves without a session.

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::error::AppError;
use emporia_core::{Registration, Role, Session};
use emporia_db::{DbError, Gateway};

/// Presents the login menu until the user is resolved or gives up.
///
/// Returns `Ok(None)` when the user chooses to return to the main menu;
/// failed credential checks keep the user here.
pub async fn login_menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> Result<Option<Session>, AppError> {
    loop {
        console.blank()?;
        console.say("=== Login Menu ===")?;
        console.say("1. Customer login")?;
        console.say("2. Staff login")?;
        console.say("0. Return to main menu")?;

        let choice = console.prompt("Select an option: ")?;
        let role = match choice.as_str() {
            "0" => return Ok(None),
            "1" => Role::Customer,
            "2" => Role::Staff,
            _ => {
                console.say("Invalid selection. Please try again.")?;
                continue;
            }
        };

        let username = console.prompt("Enter username: ")?;
        let password = console.prompt("Enter password: ")?;

        match gateway.login(&username, &password, role).await {
            Ok(Some(user_id)) => {
                console.blank()?;
                console.say(format!("Login successful! Welcome, {username}"))?;
                info!(%username, role = role.as_str(), user_id, "session established");
                return Ok(Some(Session::new(role, username, user_id)));
            }
            Ok(None) => {
                console.say("Login failed. Invalid credentials.")?;
            }
            Err(err) => {
                // Reported here, not propagated: the login menu survives a
                // failed round-trip.
                console.say(format!("An error occurred during login: {err}"))?;
            }
        }
    }
}

/// Collects the registration form and calls `register_customer`.
///
/// The `state` field is prompted for but not part of the procedure's
/// parameter list.
pub async fn register<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.blank()?;
    console.say("=== Register ===")?;

    let registration = Registration {
        username: console.prompt("Choose a username: ")?,
        password: console.prompt("Choose a password: ")?,
        first_name: console.prompt("First name: ")?,
        last_name: console.prompt("Last name: ")?,
        street: console.prompt("Street address: ")?,
        city: console.prompt("City: ")?,
        state: console.prompt("State: ")?,
        zipcode: console.prompt("Zip code: ")?,
    };

    match gateway.register_customer(&registration).await {
        Ok(()) => {
            console.say(format!(
                "User '{}' registered successfully!",
                registration.username
            ))?;
            Ok(())
        }
        Err(DbError::UniqueViolation { .. }) => Err(AppError::UsernameTaken),
        Err(err) => Err(err.into()),
    }
}
