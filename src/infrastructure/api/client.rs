//! Expense API HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{
    CreatedUserResponse, ErrorBody, ListExpensesResponse, LoginBody, LoginResponseBody,
    NewExpenseBody, RegisterBody, UpdateExpenseBody,
};
use crate::domain::entities::{
    CreatedUser, Credentials, Expense, ExpenseDraft, ExpenseUpdate, Registration, SessionToken,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{ExpenseApiPort, SessionStorePort};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// HTTP adapter for the expense-tracker REST API.
///
/// All session side effects live here: this is the only component that
/// reads the session store before a request and the only one that
/// clears it when the server answers 401. Callers translate the
/// resulting [`ApiError::SessionExpired`] into navigation back to the
/// landing view.
pub struct ExpenseApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStorePort>,
}

impl ExpenseApiClient {
    /// Creates a new client for the given base URL.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStorePort>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Reads the stored token, failing before any network I/O when the
    /// slot is empty.
    async fn current_token(&self) -> Result<SessionToken, ApiError> {
        self.session.get().await?.ok_or_else(|| {
            debug!("Authenticated request attempted without a session token");
            ApiError::Unauthenticated
        })
    }

    /// Tears down the stored session after a 401.
    async fn expire_session(&self) -> ApiError {
        warn!("Server rejected the session token, clearing stored session");
        if let Err(e) = self.session.clear().await {
            warn!(error = %e, "Failed to clear session store");
        }
        ApiError::SessionExpired
    }

    fn map_transport_error(e: &reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("failed to connect to the expense API")
        } else {
            ApiError::network(e.to_string())
        }
    }

    async fn read_error_message(status: StatusCode, response: reqwest::Response) -> String {
        match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        }
    }

    /// Sends a prepared request and classifies the response.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        authenticated: bool,
    ) -> Result<Value, ApiError> {
        let request = if authenticated {
            let token = self.current_token().await?;
            request.header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.as_str()),
            )
        } else {
            request
        };

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request to the expense API failed");
            Self::map_transport_error(&e)
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.expire_session().await);
        }

        if !status.is_success() {
            let message = Self::read_error_message(status, response).await;
            return Err(ApiError::http(status.as_u16(), message));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::malformed(e.to_string()))
    }

    fn parse<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::malformed(e.to_string()))
    }

    /// Extracts the session token from a successful login body.
    ///
    /// A body without a `token` field (or with a blank one) is a
    /// failure even though the HTTP status was success.
    fn token_from_login_body(value: Value) -> Result<SessionToken, ApiError> {
        let body: LoginResponseBody = Self::parse(value)?;
        body.token
            .and_then(SessionToken::new)
            .ok_or(ApiError::MissingToken)
    }
}

#[async_trait]
impl ExpenseApiPort for ExpenseApiClient {
    async fn register(&self, registration: &Registration) -> Result<CreatedUser, ApiError> {
        debug!(username = %registration.username, "POST /users");

        let request = self
            .client
            .post(self.url("/users"))
            .json(&RegisterBody::from(registration));

        let value = self.send(request, false).await?;
        Ok(Self::parse::<CreatedUserResponse>(value)?.into())
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        debug!(username = %credentials.username, "POST /login");

        let request = self.client.post(self.url("/login")).json(&LoginBody {
            username: &credentials.username,
            password: &credentials.password,
        });

        let value = self.send(request, false).await?;
        Self::token_from_login_body(value)
    }

    async fn add_expense(&self, draft: &ExpenseDraft) -> Result<(), ApiError> {
        debug!(category = %draft.category(), "POST /home/expense/add");

        let request = self
            .client
            .post(self.url("/home/expense/add"))
            .json(&NewExpenseBody::from(draft));

        self.send(request, true).await?;
        Ok(())
    }

    async fn list_expenses(&self, search: Option<&str>) -> Result<Vec<Expense>, ApiError> {
        debug!(search = ?search, "GET /home/expense/list");

        let mut request = self.client.get(self.url("/home/expense/list"));
        if let Some(term) = search {
            request = request.query(&[("search", term)]);
        }

        let value = self.send(request, true).await?;
        let body: ListExpensesResponse = Self::parse(value)?;
        Ok(body.expenses.into_iter().map(Expense::from).collect())
    }

    async fn update_expense(&self, id: i64, update: &ExpenseUpdate) -> Result<(), ApiError> {
        debug!(expense_id = id, "PATCH /home/expense/update");

        let request = self
            .client
            .patch(self.url(&format!("/home/expense/update/{id}")))
            .json(&UpdateExpenseBody::from(update));

        self.send(request, true).await?;
        Ok(())
    }

    async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        debug!(expense_id = id, "DELETE /home/expense/delete");

        let request = self
            .client
            .delete(self.url(&format!("/home/expense/delete/{id}")));

        self.send(request, true).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionStore;
    use serde_json::json;

    fn make_client(session: Arc<MockSessionStore>) -> ExpenseApiClient {
        ExpenseApiClient::new("http://localhost:3000", session).unwrap()
    }

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let client = make_client(Arc::new(MockSessionStore::new()));
        assert_eq!(client.url("/login"), "http://localhost:3000/login");

        let client =
            ExpenseApiClient::new("http://localhost:3000/", Arc::new(MockSessionStore::new()))
                .unwrap();
        assert_eq!(client.url("/login"), "http://localhost:3000/login");
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_any_request() {
        let session = Arc::new(MockSessionStore::new());
        let client = make_client(session);

        let result = client.current_token().await;

        assert!(matches!(result, Err(ApiError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_expire_session_clears_stored_token() {
        let session = Arc::new(MockSessionStore::with_token(SessionToken::new_unchecked(
            "abc.def.ghi",
        )));
        let client = make_client(session.clone());

        let error = client.expire_session().await;

        assert_eq!(error, ApiError::SessionExpired);
        assert!(!session.has_token().await.unwrap());
    }

    #[test]
    fn test_login_body_without_token_is_failure() {
        let result = ExpenseApiClient::token_from_login_body(json!({}));
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_login_body_with_blank_token_is_failure() {
        let result = ExpenseApiClient::token_from_login_body(json!({ "token": "  " }));
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_login_body_with_token_succeeds() {
        let result = ExpenseApiClient::token_from_login_body(json!({
            "msg": "Login successful",
            "token": "abc.def.ghi",
            "type": "Bearer",
        }));

        assert_eq!(result.unwrap().as_str(), "abc.def.ghi");
    }
}
