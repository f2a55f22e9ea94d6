//! # Staff Flow
//!
//! Inventory listing, store-wide purchase history, and product creation.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::AppError;
use crate::flows::{report, view_products};
use crate::render;
use emporia_core::validation::{validate_price, validate_stock_quantity};
use emporia_core::{Money, NewProduct, Session};
use emporia_db::Gateway;

/// Runs the staff menu until logout.
pub async fn menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    _session: &Session,
) -> Result<(), AppError> {
    loop {
        console.blank()?;
        console.say("=== Staff Menu ===")?;
        console.say("1. View inventory")?;
        console.say("2. View purchase history")?;
        console.say("3. Add product")?;
        console.say("4. Logout")?;

        let choice = console.prompt("Select an option: ")?;
        let outcome = match choice.as_str() {
            "1" => view_products(gateway, console).await,
            "2" => view_history(gateway, console).await,
            "3" => add_product(gateway, console).await,
            "4" => {
                console.say("Logging out...")?;
                return Ok(());
            }
            _ => {
                console.say("Invalid selection.")?;
                continue;
            }
        };

        if let Err(err) = outcome {
            report(console, err)?;
        }
    }
}

/// `view_purchase_history`: every purchase across all customers.
async fn view_history<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let rows = gateway.view_purchase_history().await?;

    if rows.is_empty() {
        console.say("No purchase history found.")?;
        return Ok(());
    }

    console.blank()?;
    console.say("All purchases:")?;
    console.say(render::staff_history_table(&rows))?;
    Ok(())
}

/// Collects a new product. Name and category are free text; price and
/// quantity reprompt until a non-negative value parses, so "-5" or "abc"
/// never reaches the procedure.
async fn add_product<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.blank()?;
    console.say("=== Add New Product ===")?;

    let name = console.prompt("Product name: ")?;
    let category = console.prompt("Category: ")?;

    let price = loop {
        match console.prompt("Price: ")?.parse::<Money>() {
            Ok(price) => match validate_price(price) {
                Ok(()) => break price,
                Err(err) => console.say(format!("{err}. Try again."))?,
            },
            Err(_) => console.say("Invalid price. Please enter a valid number.")?,
        }
    };

    let quantity = loop {
        match console.prompt("Quantity: ")?.parse::<i32>() {
            Ok(qty) => match validate_stock_quantity(qty) {
                Ok(()) => break qty,
                Err(err) => console.say(format!("{err}. Try again."))?,
            },
            Err(_) => console.say("Invalid quantity. Please enter a valid integer.")?,
        }
    };

    let product = NewProduct {
        name,
        category,
        price,
        quantity,
    };
    gateway.add_product(&product).await?;
    console.say(format!("Product '{}' added successfully!", product.name))?;
    Ok(())
}
