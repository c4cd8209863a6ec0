//! Registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{CreatedUser, Registration};
use crate::domain::errors::ApiError;
use crate::domain::ports::ExpenseApiPort;

/// Handles user account creation.
///
/// Registration is unauthenticated and never touches the session store.
/// Success does not navigate anywhere; the form stays visible.
#[derive(Clone)]
pub struct RegisterUseCase {
    api: Arc<dyn ExpenseApiPort>,
}

impl RegisterUseCase {
    /// Creates a new registration use case.
    #[must_use]
    pub const fn new(api: Arc<dyn ExpenseApiPort>) -> Self {
        Self { api }
    }

    /// Submits a registration.
    ///
    /// # Errors
    /// Returns error if the request fails; the caller keeps the form
    /// state for retry.
    pub async fn execute(&self, registration: Registration) -> Result<CreatedUser, ApiError> {
        debug!(username = %registration.username, "Submitting registration");

        let user = self.api.register(&registration).await.map_err(|e| {
            warn!(error = %e, "Registration failed");
            e
        })?;

        info!(user_id = user.id, username = %user.username, "User created");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockExpenseApi;

    #[tokio::test]
    async fn test_successful_registration() {
        let api = Arc::new(MockExpenseApi::new());
        let use_case = RegisterUseCase::new(api.clone());

        let result = use_case
            .execute(Registration::new("maria", "maria@example.com", "hunter2"))
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().username, "maria");

        let sent = api.registrations();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].username, "maria");
        assert_eq!(sent[0].email, "maria@example.com");
        assert_eq!(sent[0].password, "hunter2");
    }

    #[tokio::test]
    async fn test_failed_registration_propagates() {
        let api = Arc::new(MockExpenseApi::new());
        api.fail_with(ApiError::http(409, "user already exists"));
        let use_case = RegisterUseCase::new(api);

        let result = use_case
            .execute(Registration::new("maria", "maria@example.com", "hunter2"))
            .await;

        assert!(matches!(result, Err(ApiError::Http { status: 409, .. })));
    }
}
