//! # Customer Flow
//!
//! The customer menu and its four actions: catalog, own purchase history,
//! the checkout sequence, and card management. Each action returns a
//! `Result`; the menu loop reports failures and keeps going, so one failed
//! purchase never ends the session.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::AppError;
use crate::flows::{report, view_products};
use crate::render;
use emporia_core::{checkout, Session};
use emporia_db::Gateway;

/// Runs the customer menu until logout.
pub async fn menu<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<(), AppError> {
    loop {
        console.blank()?;
        console.say("=== Customer Menu ===")?;
        console.say("1. View products")?;
        console.say("2. View purchase history")?;
        console.say("3. Make purchase")?;
        console.say("4. Manage credit cards")?;
        console.say("5. Logout")?;

        let choice = console.prompt("Select an option: ")?;
        let outcome = match choice.as_str() {
            "1" => view_products(gateway, console).await,
            "2" => view_history(gateway, console, session.user_id).await,
            "3" => make_purchase(gateway, console, session.user_id).await,
            "4" => manage_cards(gateway, console, session.user_id).await,
            "5" => {
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

/// `user_purchase_history`, rendered newest first.
async fn view_history<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    customer_id: i32,
) -> Result<(), AppError> {
    let lines = gateway.user_purchase_history(customer_id).await?;

    if lines.is_empty() {
        console.say("No purchase history found.")?;
        return Ok(());
    }

    console.blank()?;
    console.say("Purchase history:")?;
    console.say(render::customer_history_table(&lines))?;
    Ok(())
}

/// The checkout sequence. Every gate must pass before `create_purchase`
/// is invoked; any failure aborts the whole flow with nothing written.
async fn make_purchase<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    customer_id: i32,
) -> Result<(), AppError> {
    let product_id: i32 = console.prompt_parsed("Enter the product id you wish to buy: ")?;
    let found = gateway.get_product_by_id(product_id).await?;
    let product = checkout::require_product(found, product_id)?;

    console.blank()?;
    console.say(format!(
        "{} (Category: {}), Price: {}, In stock: {}",
        product.name, product.category, product.price, product.quantity
    ))?;

    let quantity: i32 = console.prompt_parsed("Enter the quantity you want to buy: ")?;
    checkout::check_stock(&product, quantity)?;

    let cards = gateway.view_credit_cards(customer_id).await?;
    checkout::require_cards(&cards)?;

    console.blank()?;
    console.say("Your credit cards:")?;
    console.say(render::card_list(&cards))?;

    let selected: usize = console.prompt_parsed("Select a card to use (single number): ")?;
    let card = checkout::select_card(&cards, selected)?;

    let total = checkout::order_total(&product, quantity);
    console.blank()?;
    console.say("Confirm purchase:")?;
    console.say(format!(
        "  {} x {} @ {} = {}",
        quantity, product.name, product.price, total
    ))?;
    console.say(format!("  Using card: {}", card.number))?;

    let answer = console.prompt("Confirm purchase? (y/n): ")?;
    if !is_confirmed(&answer) {
        // A declined confirmation is an outcome, not an error.
        console.say("Purchase cancelled.")?;
        return Ok(());
    }

    gateway
        .create_purchase(customer_id, product.id, quantity, &card.number)
        .await?;
    console.say("Purchase successful!")?;
    Ok(())
}

/// Only the literal answer "y" (any case) confirms a purchase.
fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Card management: list, then a single add/remove/back pass. No retry
/// loop and no confirmation on removal; the procedure receives whatever
/// card number was typed.
async fn manage_cards<R: BufRead, W: Write>(
    gateway: &mut Gateway,
    console: &mut Console<R, W>,
    customer_id: i32,
) -> Result<(), AppError> {
    let cards = gateway.view_credit_cards(customer_id).await?;

    console.blank()?;
    console.say("Your credit cards:")?;
    if cards.is_empty() {
        console.say("  No cards on file.")?;
    } else {
        console.say(render::card_list(&cards))?;
    }

    console.blank()?;
    console.say("Add or remove a credit card?")?;
    console.say("1. Add credit card")?;
    console.say("2. Remove credit card")?;
    console.say("3. Back to menu")?;

    let choice = console.prompt("Choice (1-3): ")?;
    match choice.as_str() {
        "1" => {
            let number = console.prompt("Enter credit card number: ")?;
            let expiration = console.prompt("Enter expiration date (YYYY-MM-DD): ")?;
            gateway
                .add_credit_card(customer_id, &number, &expiration)
                .await?;
            console.say("Credit card added successfully.")?;
        }
        "2" => {
            let number = console.prompt("Enter the credit card number to remove: ")?;
            gateway.remove_credit_card(customer_id, &number).await?;
            console.say("Credit card removed successfully.")?;
        }
        "3" => {
            console.say("Returning to menu...")?;
        }
        _ => {
            console.say("Invalid choice.")?;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_literal_y_confirms() {
        assert!(is_confirmed("y"));
        assert!(is_confirmed("Y"));
        assert!(is_confirmed(" y "));

        assert!(!is_confirmed("yes"));
        assert!(!is_confirmed("n"));
        assert!(!is_confirmed(""));
        assert!(!is_confirmed("confirm"));
    }
}
