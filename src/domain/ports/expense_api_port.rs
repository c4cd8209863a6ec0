//! Expense API port definition.

use async_trait::async_trait;

use crate::domain::entities::{
    CreatedUser, Credentials, Expense, ExpenseDraft, ExpenseUpdate, Registration, SessionToken,
};
use crate::domain::errors::ApiError;

/// Port for the expense-tracker REST backend.
///
/// Registration and login are unauthenticated; every expense operation
/// carries the stored bearer token. The adapter owns all session-store
/// side effects: it reads the token before authenticated calls and
/// clears it on a 401.
#[async_trait]
pub trait ExpenseApiPort: Send + Sync {
    /// Creates a new user account.
    async fn register(&self, registration: &Registration) -> Result<CreatedUser, ApiError>;

    /// Exchanges credentials for a session token.
    ///
    /// A success response without a `token` field fails with
    /// [`ApiError::MissingToken`].
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError>;

    /// Creates a new expense.
    async fn add_expense(&self, draft: &ExpenseDraft) -> Result<(), ApiError>;

    /// Fetches the expense list, optionally filtered server-side.
    ///
    /// `search` must already be trimmed and non-empty when present; the
    /// server performs the actual filtering.
    async fn list_expenses(&self, search: Option<&str>) -> Result<Vec<Expense>, ApiError>;

    /// Patches an existing expense.
    async fn update_expense(&self, id: i64, update: &ExpenseUpdate) -> Result<(), ApiError>;

    /// Deletes an expense.
    async fn delete_expense(&self, id: i64) -> Result<(), ApiError>;
}
