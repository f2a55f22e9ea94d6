//! # Purchase Procedures
//!
//! Recording purchases and reading history. `create_purchase` is the only
//! mutating call in the checkout flow, and it is invoked exactly once, at
//! the very end, after every client-side gate has passed. There is no
//! compensating action if something fails afterwards.

use tracing::debug;

use crate::error::DbResult;
use crate::gateway::Gateway;
use emporia_core::{PurchaseAudit, PurchaseLine};

impl Gateway {
    /// Calls `create_purchase(customer_id, product_id, quantity, card_number)`.
    ///
    /// The procedure decrements stock and inserts the purchase row
    /// atomically; if stock ran out since the client-side check, the call
    /// fails as a [`crate::DbError::QueryFailed`].
    pub async fn create_purchase(
        &mut self,
        customer_id: i32,
        product_id: i32,
        quantity: i32,
        card_number: &str,
    ) -> DbResult<()> {
        debug!(
            procedure = "create_purchase",
            customer_id, product_id, quantity, "calling stored procedure"
        );

        sqlx::query("SELECT create_purchase($1, $2, $3, $4)")
            .bind(customer_id)
            .bind(product_id)
            .bind(quantity)
            .bind(card_number)
            .execute(self.conn().await?)
            .await?;

        Ok(())
    }

    /// Calls `user_purchase_history(customer_id)`, newest first.
    pub async fn user_purchase_history(&mut self, customer_id: i32) -> DbResult<Vec<PurchaseLine>> {
        debug!(procedure = "user_purchase_history", customer_id, "calling stored procedure");

        let lines: Vec<PurchaseLine> = sqlx::query_as("SELECT * FROM user_purchase_history($1)")
            .bind(customer_id)
            .fetch_all(self.conn().await?)
            .await?;

        debug!(rows = lines.len(), "user_purchase_history returned");
        Ok(lines)
    }

    /// Calls `view_purchase_history()`: every purchase across all
    /// customers, for staff, newest first.
    pub async fn view_purchase_history(&mut self) -> DbResult<Vec<PurchaseAudit>> {
        debug!(procedure = "view_purchase_history", "calling stored procedure");

        let rows: Vec<PurchaseAudit> = sqlx::query_as("SELECT * FROM view_purchase_history()")
            .fetch_all(self.conn().await?)
            .await?;

        debug!(rows = rows.len(), "view_purchase_history returned");
        Ok(rows)
    }
}
