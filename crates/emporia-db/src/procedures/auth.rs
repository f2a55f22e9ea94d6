//! # Authentication Procedures
//!
//! `login` and `register_customer`.

use tracing::debug;

use crate::error::DbResult;
use crate::gateway::Gateway;
use emporia_core::{Registration, Role};

/// Result shape of the `login` procedure: `(success, user_id)`.
#[derive(Debug, sqlx::FromRow)]
struct LoginRow {
    success: bool,
    user_id: Option<i32>,
}

impl Gateway {
    /// Calls `login(username, password, role)`.
    ///
    /// The first result row decides the outcome: a truthy `success` column
    /// resolves to that row's user id. An empty result set or a falsy
    /// first row is a failed login, `Ok(None)` - not an error.
    pub async fn login(&mut self, username: &str, password: &str, role: Role) -> DbResult<Option<i32>> {
        debug!(procedure = "login", username, role = role.as_str(), "calling stored procedure");

        let rows: Vec<LoginRow> = sqlx::query_as("SELECT * FROM login($1, $2, $3)")
            .bind(username)
            .bind(password)
            .bind(role.as_str())
            .fetch_all(self.conn().await?)
            .await?;

        Ok(rows
            .first()
            .filter(|row| row.success)
            .and_then(|row| row.user_id))
    }

    /// Calls `register_customer` with the seven persisted fields.
    ///
    /// A duplicate username surfaces as [`crate::DbError::UniqueViolation`];
    /// the terminal flow turns that into its specific "username taken"
    /// message.
    pub async fn register_customer(&mut self, registration: &Registration) -> DbResult<()> {
        debug!(
            procedure = "register_customer",
            username = %registration.username,
            "calling stored procedure"
        );

        sqlx::query("SELECT register_customer($1, $2, $3, $4, $5, $6, $7)")
            .bind(&registration.username)
            .bind(&registration.password)
            .bind(&registration.first_name)
            .bind(&registration.last_name)
            .bind(&registration.street)
            .bind(&registration.city)
            .bind(&registration.zipcode)
            .execute(self.conn().await?)
            .await?;

        Ok(())
    }
}
