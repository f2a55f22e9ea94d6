//! # Credit Card Procedures
//!
//! Stored cards are keyed by (customer, card number); the procedures take
//! the literal card number the user typed. Removal of an unknown number is
//! a silent no-op on the database side - there is deliberately no
//! client-side existence check.

use tracing::debug;

use crate::error::DbResult;
use crate::gateway::Gateway;
use emporia_core::CreditCard;

impl Gateway {
    /// Calls `view_credit_cards(customer_id)`.
    pub async fn view_credit_cards(&mut self, customer_id: i32) -> DbResult<Vec<CreditCard>> {
        debug!(procedure = "view_credit_cards", customer_id, "calling stored procedure");

        let cards: Vec<CreditCard> = sqlx::query_as("SELECT * FROM view_credit_cards($1)")
            .bind(customer_id)
            .fetch_all(self.conn().await?)
            .await?;

        debug!(rows = cards.len(), "view_credit_cards returned");
        Ok(cards)
    }

    /// Calls `add_credit_card(customer_id, card_number, expiration)`.
    ///
    /// The expiration travels as the `YYYY-MM-DD` text the user typed; the
    /// procedure performs the cast and is the sole format authority.
    pub async fn add_credit_card(
        &mut self,
        customer_id: i32,
        card_number: &str,
        expiration: &str,
    ) -> DbResult<()> {
        debug!(procedure = "add_credit_card", customer_id, "calling stored procedure");

        sqlx::query("SELECT add_credit_card($1, $2, $3)")
            .bind(customer_id)
            .bind(card_number)
            .bind(expiration)
            .execute(self.conn().await?)
            .await?;

        Ok(())
    }

    /// Calls `remove_credit_card(customer_id, card_number)`.
    pub async fn remove_credit_card(&mut self, customer_id: i32, card_number: &str) -> DbResult<()> {
        debug!(procedure = "remove_credit_card", customer_id, "calling stored procedure");

        sqlx::query("SELECT remove_credit_card($1, $2)")
            .bind(customer_id)
            .bind(card_number)
            .execute(self.conn().await?)
            .await?;

        Ok(())
    }
}
