//! # Menu Flows
//!
//! One module per role surface plus the shared pieces. Every flow function
//! takes the gateway and the console explicitly; nothing here owns state
//! beyond the `Session` handed down from a successful login.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::error::AppError;
use crate::render;
use emporia_db::Gateway;

pub mod auth;
pub mod customer;
pub mod staff;

/// Uniform error presentation for the menu loops: print the message and
/// stay in the menu. Terminal I/O failures are rethrown - there is no menu
/// to stay in without a terminal.
pub(crate) fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: AppError,
) -> Result<(), AppError> {
    match err {
        AppError::Io(_) => Err(err),
        other => {
            debug!(error = %other, "flow aborted");
            console.say(other)?;
            Ok(())
        }
    }
}

/// Catalog listing, shared by the customer menu and the staff inventory
/// view (same procedure, same rendering).
pub(crate) async fn view_products<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let products = gateway.view_products().await?;

    if products.is_empty() {
        console.say("No products found.")?;
        return Ok(());
    }

    console.blank()?;
    console.say("Available products:")?;
    console.say(render::product_table(&products))?;
    Ok(())
}
