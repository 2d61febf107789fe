use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use sathi_core::{ConversationSession, Locale};
use sqlx::{Row, SqlitePool};

pub trait SessionRepository: Send + Sync {
    async fn load_session(&self, session_id: &str) -> Result<Option<ConversationSession>>;
    async fn upsert_session(&self, session: &ConversationSession) -> Result<()>;
    async fn delete_session(&self, session_id: &str) -> Result<bool>;
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64>;
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, ConversationSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for MemoryStore {
    async fn load_session(&self, session_id: &str) -> Result<Option<ConversationSession>> {
        Ok(self.sessions.read().get(session_id).cloned())
    }

    async fn upsert_session(&self, session: &ConversationSession) -> Result<()> {
        self.sessions
            .write()
            .insert(session.session_id.clone(), session.clone());
        Ok(())
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        Ok(self.sessions.write().remove(session_id).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let mut removed = 0_u64;
        self.sessions.write().retain(|_, value| {
            let keep = value.expires_at > now;
            if !keep {
                removed += 1;
            }
            keep
        });

        Ok(removed)
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .with_context(|| format!("failed connecting to sqlite at {}", database_url))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
              session_id TEXT PRIMARY KEY,
              user_id TEXT,
              locale TEXT NOT NULL,
              expires_at TEXT NOT NULL,
              turns_json TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl SessionRepository for SqliteStore {
    async fn load_session(&self, session_id: &str) -> Result<Option<ConversationSession>> {
        let row = sqlx::query(
            r#"
            SELECT session_id, user_id, locale, expires_at, turns_json
            FROM sessions
            WHERE session_id = ?1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let locale = Locale::from_optional_str(Some(row.get::<String, _>("locale").as_str()));
        let turns_json: String = row.get("turns_json");
        let turns = serde_json::from_str(&turns_json).unwrap_or_default();

        let session = ConversationSession {
            session_id: row.get("session_id"),
            user_id: row.get("user_id"),
            locale,
            expires_at: row
                .get::<String, _>("expires_at")
                .parse()
                .unwrap_or_else(|_| Utc::now()),
            turns,
        };

        Ok(Some(session))
    }

    async fn upsert_session(&self, session: &ConversationSession) -> Result<()> {
        let turns_json = serde_json::to_string(&session.turns)?;

        sqlx::query(
            r#"
            INSERT INTO sessions (session_id, user_id, locale, expires_at, turns_json)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(session_id) DO UPDATE SET
              user_id=excluded.user_id,
              locale=excluded.locale,
              expires_at=excluded.expires_at,
              turns_json=excluded.turns_json
            "#,
        )
        .bind(&session.session_id)
        .bind(&session.user_id)
        .bind(session.locale.as_code())
        .bind(session.expires_at.to_rfc3339())
        .bind(turns_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE session_id = ?1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?1")
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[derive(Clone)]
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl Store {
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    pub async fn sqlite(database_url: &str) -> Result<Self> {
        let sqlite = SqliteStore::connect(database_url).await?;
        Ok(Self::Sqlite(sqlite))
    }
}

impl SessionRepository for Store {
    async fn load_session(&self, session_id: &str) -> Result<Option<ConversationSession>> {
        match self {
            Store::Memory(store) => store.load_session(session_id).await,
            Store::Sqlite(store) => store.load_session(session_id).await,
        }
    }

    async fn upsert_session(&self, session: &ConversationSession) -> Result<()> {
        match self {
            Store::Memory(store) => store.upsert_session(session).await,
            Store::Sqlite(store) => store.upsert_session(session).await,
        }
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool> {
        match self {
            Store::Memory(store) => store.delete_session(session_id).await,
            Store::Sqlite(store) => store.delete_session(session_id).await,
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        match self {
            Store::Memory(store) => store.purge_expired(now).await,
            Store::Sqlite(store) => store.purge_expired(now).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sathi_core::Locale;

    fn session(id: &str, expires_at: DateTime<Utc>) -> ConversationSession {
        ConversationSession {
            session_id: id.to_string(),
            user_id: None,
            locale: Locale::En,
            expires_at,
            turns: Vec::new(),
        }
    }

    #[tokio::test]
    async fn memory_store_round_trips_sessions() {
        let store = MemoryStore::new();
        let expires = Utc::now() + Duration::hours(24);
        store.upsert_session(&session("s1", expires)).await.unwrap();

        let loaded = store.load_session("s1").await.unwrap().unwrap();
        assert_eq!(loaded.session_id, "s1");
        assert!(store.delete_session("s1").await.unwrap());
        assert!(store.load_session("s1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn purge_removes_only_expired_sessions() {
        let store = MemoryStore::new();
        let now = Utc::now();
        store
            .upsert_session(&session("old", now - Duration::hours(1)))
            .await
            .unwrap();
        store
            .upsert_session(&session("live", now + Duration::hours(1)))
            .await
            .unwrap();

        assert_eq!(store.purge_expired(now).await.unwrap(), 1);
        assert!(store.load_session("live").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn sqlite_store_round_trips_sessions() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        let expires = Utc::now() + Duration::hours(24);
        store.upsert_session(&session("s1", expires)).await.unwrap();

        let loaded = store.load_session("s1").await.unwrap().unwrap();
        assert_eq!(loaded.session_id, "s1");
        assert_eq!(loaded.locale, Locale::En);
        assert!(store.delete_session("s1").await.unwrap());
    }
}
