//! Keyring-based session store.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::SessionToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::SessionStorePort;

const KEYRING_SERVICE: &str = "spendo";
const KEYRING_USER: &str = "session";

/// System keyring adapter for the session token slot.
///
/// The token survives restarts until explicitly cleared; expiry is only
/// detected reactively when the server answers 401.
pub struct KeyringSessionStore {
    service: String,
    user: String,
}

impl KeyringSessionStore {
    /// Creates a store with the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            user: KEYRING_USER.to_string(),
        }
    }

    /// Creates a store with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, ApiError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| ApiError::storage(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorePort for KeyringSessionStore {
    async fn get(&self) -> Result<Option<SessionToken>, ApiError> {
        debug!(service = %self.service, "Reading session token from keyring");

        let entry = self.entry()?;

        match entry.get_password() {
            Ok(value) => Ok(SessionToken::new(value)),
            Err(keyring::Error::NoEntry) => {
                debug!("No session token stored");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                Err(ApiError::storage(e.to_string()))
            }
        }
    }

    async fn set(&self, token: &SessionToken) -> Result<(), ApiError> {
        debug!(service = %self.service, "Storing session token in keyring");

        let entry = self.entry()?;

        entry.set_password(token.as_str()).map_err(|e| {
            warn!(error = %e, "Failed to store session token");
            ApiError::storage(e.to_string())
        })?;

        debug!("Session token stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        debug!(service = %self.service, "Clearing session token from keyring");

        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => {
                debug!("No session token to clear");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to clear session token");
                Err(ApiError::storage(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_token() {
        let store = KeyringSessionStore::with_names("spendo-test", "test-session");
        let token = SessionToken::new_unchecked("abc.def.ghi");

        store.set(&token).await.unwrap();

        let retrieved = store.get().await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().as_str(), token.as_str());

        store.clear().await.unwrap();
        assert!(!store.has_token().await.unwrap());
    }
}
