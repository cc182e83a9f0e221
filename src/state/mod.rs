//! State management module
//!
//! This module handles conversation state and per-user sessions

pub mod context;
pub mod session;
pub mod storage;
pub mod validation;

// Re-export commonly used state components
pub use context::AppContext;
pub use session::{ConversationState, LocationPurpose, UserSession};
pub use storage::{create_session_store, InMemorySessionStore, RedisSessionStore, SessionStore};
