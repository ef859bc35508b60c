//! One-time code storage.
//!
//! Codes are keyed by phone number with a per-key TTL. The store's atomic
//! get-and-delete is the serialization point of the verify flow: of two
//! concurrent verifications holding the same correct code, only one observes
//! the code on consumption.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use thiserror::Error;
use tokio::sync::RwLock;

/// Credential store errors.
#[derive(Debug, Error)]
pub enum OtpStoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// Short-lived one-time code storage keyed by phone number.
///
/// At most one live code exists per phone: `put` overwrites any prior code
/// and resets its TTL. `peek` reads without consuming; `consume` removes the
/// code and returns it atomically.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store `code` under `phone`, overwriting any existing code.
    async fn put(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), OtpStoreError>;

    /// Read the live code for `phone` without consuming it.
    async fn peek(&self, phone: &str) -> Result<Option<String>, OtpStoreError>;

    /// Atomically remove and return the live code for `phone`.
    async fn consume(&self, phone: &str) -> Result<Option<String>, OtpStoreError>;
}

/// Redis-backed store using `SET EX` / `GET` / `GETDEL`.
#[derive(Clone)]
pub struct RedisOtpStore {
    conn_manager: ConnectionManager,
}

impl RedisOtpStore {
    /// Connect to Redis at `redis_url` (e.g. `redis://127.0.0.1:6379/0`).
    pub async fn new(redis_url: &str) -> Result<Self, OtpStoreError> {
        let client =
            Client::open(redis_url).map_err(|e| OtpStoreError::Unavailable(e.to_string()))?;
        let conn_manager = ConnectionManager::new(client)
            .await
            .map_err(|e| OtpStoreError::Unavailable(e.to_string()))?;
        Ok(Self { conn_manager })
    }

    fn otp_key(phone: &str) -> String {
        format!("otp:{phone}")
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn put(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), OtpStoreError> {
        let mut conn = self.conn_manager.clone();
        let ttl_seconds = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(Self::otp_key(phone), code, ttl_seconds)
            .await
            .map_err(|e| OtpStoreError::Unavailable(e.to_string()))?;
        tracing::debug!(ttl_seconds, "stored one-time code");
        Ok(())
    }

    async fn peek(&self, phone: &str) -> Result<Option<String>, OtpStoreError> {
        let mut conn = self.conn_manager.clone();
        conn.get(Self::otp_key(phone))
            .await
            .map_err(|e| OtpStoreError::Unavailable(e.to_string()))
    }

    async fn consume(&self, phone: &str) -> Result<Option<String>, OtpStoreError> {
        let mut conn = self.conn_manager.clone();
        // GETDEL reads and deletes in one operation, so a code can be
        // consumed at most once even under concurrent verifications.
        let consumed: Option<String> = conn
            .get_del(Self::otp_key(phone))
            .await
            .map_err(|e| OtpStoreError::Unavailable(e.to_string()))?;
        if consumed.is_some() {
            tracing::debug!("consumed one-time code");
        }
        Ok(consumed)
    }
}

struct MemoryEntry {
    code: String,
    expires_at: Instant,
}

/// In-memory store for tests and infra-less local runs.
///
/// `consume` removes the entry under the write lock, which gives the same
/// exactly-once guarantee GETDEL provides in Redis.
#[derive(Default)]
pub struct MemoryOtpStore {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), OtpStoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            phone.to_string(),
            MemoryEntry {
                code: code.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn peek(&self, phone: &str) -> Result<Option<String>, OtpStoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(phone)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| e.code.clone()))
    }

    async fn consume(&self, phone: &str) -> Result<Option<String>, OtpStoreError> {
        let mut entries = self.entries.write().await;
        Ok(entries
            .remove(phone)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| e.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const PHONE: &str = "+919876543210";
    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn put_then_peek_returns_code() {
        let store = MemoryOtpStore::new();
        store.put(PHONE, "123456", TTL).await.unwrap();
        assert_eq!(store.peek(PHONE).await.unwrap().as_deref(), Some("123456"));
    }

    #[tokio::test]
    async fn peek_does_not_consume() {
        let store = MemoryOtpStore::new();
        store.put(PHONE, "123456", TTL).await.unwrap();
        store.peek(PHONE).await.unwrap();
        assert_eq!(store.peek(PHONE).await.unwrap().as_deref(), Some("123456"));
    }

    #[tokio::test]
    async fn consume_is_single_use() {
        let store = MemoryOtpStore::new();
        store.put(PHONE, "123456", TTL).await.unwrap();
        assert_eq!(
            store.consume(PHONE).await.unwrap().as_deref(),
            Some("123456")
        );
        assert_eq!(store.consume(PHONE).await.unwrap(), None);
        assert_eq!(store.peek(PHONE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_previous_code() {
        let store = MemoryOtpStore::new();
        store.put(PHONE, "111111", TTL).await.unwrap();
        store.put(PHONE, "222222", TTL).await.unwrap();
        assert_eq!(store.peek(PHONE).await.unwrap().as_deref(), Some("222222"));
    }

    #[tokio::test]
    async fn expired_code_is_absent() {
        let store = MemoryOtpStore::new();
        store
            .put(PHONE, "123456", Duration::from_millis(20))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(store.peek(PHONE).await.unwrap(), None);
        assert_eq!(store.consume(PHONE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn concurrent_consume_succeeds_exactly_once() {
        let store = Arc::new(MemoryOtpStore::new());
        store.put(PHONE, "123456", TTL).await.unwrap();

        let mut handles = vec![];
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.consume(PHONE).await.unwrap() },
            ));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    #[ignore] // Requires Redis running
    async fn redis_store_lifecycle() {
        let store = RedisOtpStore::new("redis://127.0.0.1:6379")
            .await
            .expect("connect to Redis");

        store.put(PHONE, "123456", TTL).await.unwrap();
        assert_eq!(store.peek(PHONE).await.unwrap().as_deref(), Some("123456"));

        assert_eq!(
            store.consume(PHONE).await.unwrap().as_deref(),
            Some("123456")
        );
        assert_eq!(store.consume(PHONE).await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore] // Requires Redis running
    async fn redis_concurrent_consume_succeeds_exactly_once() {
        let store = RedisOtpStore::new("redis://127.0.0.1:6379")
            .await
            .expect("connect to Redis");
        store.put("+919000000099", "123456", TTL).await.unwrap();

        let mut handles = vec![];
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.consume("+919000000099").await.unwrap()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
