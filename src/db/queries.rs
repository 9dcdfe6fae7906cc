/// Key-value slot queries
///
/// Local storage is a flat map of string keys to string values, the same
/// shape as a browser's per-origin storage. Writes replace the whole value.

use crate::db::Database;
use crate::error::Result;

impl Database {
    /// Read a slot
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The stored string
    /// * `Ok(None)` - Nothing stored under this key
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value: Option<(String,)> =
            sqlx::query_as("SELECT value FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(self.pool())
                .await?;

        Ok(value.map(|v| v.0))
    }

    /// Overwrite a slot with a new value
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value)
            VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Delete a slot. Deleting a missing key is not an error.
    pub async fn remove_item(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// List all stored keys
    pub async fn keys(&self) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(self.pool())
            .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
