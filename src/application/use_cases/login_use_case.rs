//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Credentials;
use crate::domain::errors::ApiError;
use crate::domain::ports::{ExpenseApiPort, SessionStorePort};

/// Handles the authentication workflow.
///
/// On success the received token is persisted to the session store; the
/// caller then navigates to the authenticated home view and triggers
/// the initial expense list load.
#[derive(Clone)]
pub struct LoginUseCase {
    api: Arc<dyn ExpenseApiPort>,
    session: Arc<dyn SessionStorePort>,
}

impl LoginUseCase {
    /// Creates a new login use case.
    #[must_use]
    pub const fn new(api: Arc<dyn ExpenseApiPort>, session: Arc<dyn SessionStorePort>) -> Self {
        Self { api, session }
    }

    /// Executes login with the provided credentials.
    ///
    /// A success response without a `token` field is a failure even when
    /// the HTTP status was success.
    ///
    /// # Errors
    /// Returns error if the request fails, the token is missing from the
    /// response, or the token cannot be stored. No navigation occurs on
    /// failure.
    pub async fn execute(&self, credentials: Credentials) -> Result<(), ApiError> {
        debug!(username = %credentials.username, "Attempting login");

        let token = self.api.login(&credentials).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            e
        })?;

        self.session.set(&token).await.map_err(|e| {
            warn!(error = %e, "Failed to persist session token");
            e
        })?;

        info!(token = %token, "Login successful, session stored");

        Ok(())
    }

    /// Discards the current session.
    ///
    /// # Errors
    /// Returns error if the store cannot be cleared.
    pub async fn logout(&self) -> Result<(), ApiError> {
        debug!("Clearing session token");
        self.session.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockExpenseApi, MockSessionStore};

    #[tokio::test]
    async fn test_successful_login_stores_token() {
        let api = Arc::new(MockExpenseApi::new());
        let session = Arc::new(MockSessionStore::new());
        let use_case = LoginUseCase::new(api, session.clone());

        let result = use_case.execute(Credentials::new("maria", "hunter2")).await;

        assert!(result.is_ok());
        assert!(session.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_token_field_is_failure() {
        let api = Arc::new(MockExpenseApi::new());
        api.without_login_token();
        let session = Arc::new(MockSessionStore::new());
        let use_case = LoginUseCase::new(api, session.clone());

        let result = use_case.execute(Credentials::new("maria", "hunter2")).await;

        assert!(matches!(result, Err(ApiError::MissingToken)));
        assert!(!session.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let api = Arc::new(MockExpenseApi::new());
        api.fail_with(ApiError::http(401, "Invalid credentials"));
        let session = Arc::new(MockSessionStore::new());
        let use_case = LoginUseCase::new(api, session.clone());

        let result = use_case.execute(Credentials::new("maria", "wrong")).await;

        assert!(result.is_err());
        assert!(!session.has_token().await.unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let api = Arc::new(MockExpenseApi::new());
        let session = Arc::new(MockSessionStore::with_token(
            crate::domain::entities::SessionToken::new_unchecked("abc.def.ghi"),
        ));
        let use_case = LoginUseCase::new(api, session.clone());

        use_case.logout().await.unwrap();

        assert!(!session.has_token().await.unwrap());
    }
}
