//! # Catalog Procedures
//!
//! Product listing, lookup, and creation.

use tracing::debug;

use crate::error::DbResult;
use crate::gateway::Gateway;
use emporia_core::{NewProduct, Product};

impl Gateway {
    /// Calls `view_products()`, returning the whole catalog in id order.
    pub async fn view_products(&mut self) -> DbResult<Vec<Product>> {
        debug!(procedure = "view_products", "calling stored procedure");

        let products: Vec<Product> = sqlx::query_as("SELECT * FROM view_products()")
            .fetch_all(self.conn().await?)
            .await?;

        debug!(rows = products.len(), "view_products returned");
        Ok(products)
    }

    /// Calls `get_product_by_id(product_id)`.
    ///
    /// Returns `Ok(None)` when no such product exists; the checkout flow
    /// turns that into its "product not found" gate.
    pub async fn get_product_by_id(&mut self, product_id: i32) -> DbResult<Option<Product>> {
        debug!(procedure = "get_product_by_id", product_id, "calling stored procedure");

        let product: Option<Product> = sqlx::query_as("SELECT * FROM get_product_by_id($1)")
            .bind(product_id)
            .fetch_optional(self.conn().await?)
            .await?;

        Ok(product)
    }

    /// Calls `add_product(name, category, price_cents, quantity)`.
    pub async fn add_product(&mut self, product: &NewProduct) -> DbResult<()> {
        debug!(procedure = "add_product", name = %product.name, "calling stored procedure");

        sqlx::query("SELECT add_product($1, $2, $3, $4)")
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.price.cents())
            .bind(product.quantity)
            .execute(self.conn().await?)
            .await?;

        Ok(())
    }
}
