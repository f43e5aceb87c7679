//! # Key-Value Slice Repository
//!
//! The local-storage analogue: `load(key)`, `save(key, value)` and
//! `remove(key)` over JSON payloads, plus typed wrappers keyed by
//! [`Slice`].
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       KvStore Contract                                  │
//! │                                                                         │
//! │  load(key)  ──► Some(json) | None                                      │
//! │                 missing row        → None                              │
//! │                 malformed payload  → None (warn!, caller defaults)     │
//! │                                                                         │
//! │  save(key, json) ──► full upsert of the serialized slice               │
//! │                      every state change rewrites the whole value;      │
//! │                      no deltas, no debouncing                          │
//! │                                                                         │
//! │  remove(key) ──► used only for the current-user slice: absence of     │
//! │                  that key MEANS "logged out"                           │
//! │                                                                         │
//! │  No transactions. No size limits. Last writer wins.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::slices::Slice;

/// Repository for slice persistence.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    /// Creates a new KvStore over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        KvStore { pool }
    }

    /// Loads the JSON value stored under a key.
    ///
    /// A missing row and a malformed payload both yield `None`; the
    /// malformed case is logged and the caller falls back to its default.
    pub async fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        debug!(key = %key, "Loading slice");

        let row = sqlx::query("SELECT payload FROM slices WHERE slice_key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row.get("payload");
        match serde_json::from_str(&payload) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key = %key, error = %e, "Malformed slice payload; treating as absent");
                Ok(None)
            }
        }
    }

    /// Upserts the full JSON value for a key.
    pub async fn save(&self, key: &str, value: &Value) -> StoreResult<()> {
        debug!(key = %key, "Saving slice");

        sqlx::query(
            "INSERT INTO slices (slice_key, payload, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(slice_key) DO UPDATE SET \
             payload = excluded.payload, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value.to_string())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes a key. Removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        debug!(key = %key, "Removing slice");

        sqlx::query("DELETE FROM slices WHERE slice_key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // =========================================================================
    // Typed Slice Access
    // =========================================================================

    /// Loads and deserializes a slice. A payload that no longer matches the
    /// expected shape loads as absent, like a missing key.
    pub async fn read_slice<T: DeserializeOwned>(&self, slice: Slice) -> StoreResult<Option<T>> {
        let Some(value) = self.load(slice.key()).await? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                warn!(key = %slice.key(), error = %e, "Stored slice has an unexpected shape; treating as absent");
                Ok(None)
            }
        }
    }

    /// Serializes and writes the whole slice value.
    pub async fn write_slice<T: Serialize>(&self, slice: Slice, value: &T) -> StoreResult<()> {
        let json =
            serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.save(slice.key(), &json).await
    }

    /// Removes a slice record entirely.
    pub async fn remove_slice(&self, slice: Slice) -> StoreResult<()> {
        self.remove(slice.key()).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use boladas_core::{Cart, Theme};

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_load_missing_key_is_none() {
        let kv = test_store().await.kv();
        assert!(kv.load("sb-nothing-v12").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip_and_overwrite() {
        let kv = test_store().await.kv();

        kv.save("sb-theme-v12", &serde_json::json!("dark"))
            .await
            .unwrap();
        assert_eq!(
            kv.load("sb-theme-v12").await.unwrap(),
            Some(serde_json::json!("dark"))
        );

        // A second save replaces the whole value.
        kv.save("sb-theme-v12", &serde_json::json!("light"))
            .await
            .unwrap();
        assert_eq!(
            kv.load("sb-theme-v12").await.unwrap(),
            Some(serde_json::json!("light"))
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let kv = test_store().await.kv();

        kv.save("sb-cart-v12", &serde_json::json!([])).await.unwrap();
        kv.remove("sb-cart-v12").await.unwrap();
        assert!(kv.load("sb-cart-v12").await.unwrap().is_none());

        // Removing again is a no-op, not an error.
        kv.remove("sb-cart-v12").await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_payload_loads_as_absent() {
        let store = test_store().await;
        let kv = store.kv();

        // Corrupt the row behind the repository's back.
        sqlx::query("INSERT INTO slices (slice_key, payload, updated_at) VALUES (?1, ?2, ?3)")
            .bind("sb-layout-v12")
            .bind("{not json at all")
            .bind("2026-01-01T00:00:00Z")
            .execute(store.pool())
            .await
            .unwrap();

        assert!(kv.load("sb-layout-v12").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_typed_slice_roundtrip() {
        let kv = test_store().await.kv();

        kv.write_slice(Slice::Theme, &Theme::Dark).await.unwrap();
        let theme: Option<Theme> = kv.read_slice(Slice::Theme).await.unwrap();
        assert_eq!(theme, Some(Theme::Dark));

        let cart: Option<Cart> = kv.read_slice(Slice::Cart).await.unwrap();
        assert!(cart.is_none());
    }

    #[tokio::test]
    async fn test_wrong_shape_reads_as_absent() {
        let kv = test_store().await.kv();

        // Valid JSON, but not a theme string.
        kv.save(Slice::Theme.key(), &serde_json::json!({"theme": 7}))
            .await
            .unwrap();

        let theme: Option<Theme> = kv.read_slice(Slice::Theme).await.unwrap();
        assert!(theme.is_none());
    }
}
