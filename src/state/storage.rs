//! Session storage implementations
//!
//! Sessions are looked up by Telegram user id. The in-memory store is the
//! default; the Redis store keeps sessions across restarts and lets them
//! expire on their own.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use crate::config::{SessionBackend, SessionConfig};
use crate::utils::errors::{MiBiciError, Result};
use super::session::UserSession;

/// Keyed storage of conversation sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session of `user_id`, if any
    async fn get(&self, user_id: i64) -> Result<Option<UserSession>>;

    /// Insert or replace the session of `session.user_id`
    async fn set(&self, session: &UserSession) -> Result<()>;

    /// Forget the session of `user_id`
    async fn clear(&self, user_id: i64) -> Result<()>;

    /// Load the session of `user_id`, creating an idle one on first use
    async fn get_or_create(&self, user_id: i64) -> Result<UserSession> {
        Ok(self.get(user_id).await?.unwrap_or_else(|| UserSession::new(user_id)))
    }
}

/// Process-local session store
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, UserSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored session
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<UserSession>> {
        Ok(self.sessions.read().await.get(&user_id).cloned())
    }

    async fn set(&self, session: &UserSession) -> Result<()> {
        self.sessions.write().await.insert(session.user_id, session.clone());
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<()> {
        self.sessions.write().await.remove(&user_id);
        Ok(())
    }
}

/// Redis-backed session store
#[derive(Clone)]
pub struct RedisSessionStore {
    /// Redis connection manager
    connection_manager: redis::aio::ConnectionManager,
    /// Session configuration
    config: SessionConfig,
}

impl RedisSessionStore {
    /// Connect to Redis
    pub async fn new(config: SessionConfig) -> Result<Self> {
        let client = redis::Client::open(config.redis_url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn session_key(&self, user_id: i64) -> String {
        session_key(&self.config.prefix, user_id)
    }
}

fn session_key(prefix: &str, user_id: i64) -> String {
    format!("{}session:{}", prefix, user_id)
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<UserSession>> {
        let key = self.session_key(user_id);
        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = conn.get(&key).await?;
        match serialized {
            Some(data) => match serde_json::from_str::<UserSession>(&data) {
                Ok(session) => {
                    debug!(user_id = user_id, state = %session.state, "Session loaded from Redis");
                    Ok(Some(session))
                }
                Err(e) => {
                    // An unreadable entry is treated as lost; the user starts over
                    error!(user_id = user_id, error = %e, "Failed to deserialize session, discarding");
                    let _: u32 = conn.del(&key).await?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn set(&self, session: &UserSession) -> Result<()> {
        let key = self.session_key(session.user_id);
        let serialized = serde_json::to_string(session)?;
        let mut conn = self.connection_manager.clone();

        conn.set_ex::<_, _, ()>(&key, serialized, self.config.ttl_seconds).await?;
        debug!(user_id = session.user_id, state = %session.state, ttl_seconds = self.config.ttl_seconds, "Session saved to Redis");
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<()> {
        let key = self.session_key(user_id);
        let mut conn = self.connection_manager.clone();

        let deleted: u32 = conn.del(&key).await?;
        debug!(user_id = user_id, deleted = deleted, "Session cleared from Redis");
        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build the store selected by configuration
pub async fn create_session_store(config: &SessionConfig) -> Result<Arc<dyn SessionStore>> {
    match config.backend {
        SessionBackend::Memory => {
            info!("Using in-memory session store");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
        SessionBackend::Redis => {
            info!(url = %config.redis_url, "Using Redis session store");
            let store = RedisSessionStore::new(config.clone()).await?;
            store.test_connection().await.map_err(|e| {
                MiBiciError::SessionStore(format!("Redis is not reachable: {}", e))
            })?;
            Ok(Arc::new(store))
        }
    }
}
