//! Session store port definition.

use async_trait::async_trait;

use crate::domain::entities::SessionToken;
use crate::domain::errors::ApiError;

/// Port for the single process-wide session token slot.
///
/// Backed by durable storage that survives restarts but not explicit
/// clearing. No authenticated request may be sent without a token held
/// here.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Retrieves the stored token, if any.
    async fn get(&self) -> Result<Option<SessionToken>, ApiError>;

    /// Stores a token, replacing any previous one.
    async fn set(&self, token: &SessionToken) -> Result<(), ApiError>;

    /// Clears the stored token. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), ApiError>;

    /// Checks whether a token is stored.
    async fn has_token(&self) -> Result<bool, ApiError> {
        Ok(self.get().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory session store for testing.
    pub struct MockSessionStore {
        token: Arc<RwLock<Option<SessionToken>>>,
    }

    impl MockSessionStore {
        /// Creates an empty store.
        pub fn new() -> Self {
            Self {
                token: Arc::new(RwLock::new(None)),
            }
        }

        /// Creates a store holding a token.
        pub fn with_token(token: SessionToken) -> Self {
            Self {
                token: Arc::new(RwLock::new(Some(token))),
            }
        }
    }

    impl Default for MockSessionStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStorePort for MockSessionStore {
        async fn get(&self) -> Result<Option<SessionToken>, ApiError> {
            Ok(self.token.read().await.clone())
        }

        async fn set(&self, token: &SessionToken) -> Result<(), ApiError> {
            *self.token.write().await = Some(token.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), ApiError> {
            *self.token.write().await = None;
            Ok(())
        }
    }
}
