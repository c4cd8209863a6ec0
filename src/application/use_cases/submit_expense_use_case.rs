//! Expense submission use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{ExpenseDraft, ExpenseUpdate};
use crate::domain::errors::ApiError;
use crate::domain::ports::ExpenseApiPort;

/// Handles new-expense and edit-expense form submissions.
///
/// Raw form fields are validated locally first; an invalid submission
/// aborts before any request is issued. After a successful mutation the
/// caller reloads the full expense list rather than patching the view
/// in place.
#[derive(Clone)]
pub struct SubmitExpenseUseCase {
    api: Arc<dyn ExpenseApiPort>,
}

impl SubmitExpenseUseCase {
    /// Creates a new submission use case.
    #[must_use]
    pub const fn new(api: Arc<dyn ExpenseApiPort>) -> Self {
        Self { api }
    }

    /// Validates and submits a new expense.
    ///
    /// # Errors
    /// Returns a validation error without issuing a request when the
    /// amount does not parse or a required field is blank; otherwise
    /// propagates API failures.
    pub async fn create(
        &self,
        description: &str,
        amount: &str,
        category: &str,
    ) -> Result<(), ApiError> {
        let draft = ExpenseDraft::parse(description, amount, category).map_err(|e| {
            debug!(error = %e, "Expense submission rejected locally");
            e
        })?;

        debug!(category = %draft.category(), "Submitting new expense");

        self.api.add_expense(&draft).await.map_err(|e| {
            warn!(error = %e, "Failed to add expense");
            e
        })?;

        info!("Expense added");
        Ok(())
    }

    /// Validates and submits a partial update to an existing expense.
    ///
    /// # Errors
    /// Returns a validation error without issuing a request when an
    /// entered amount does not parse or every field is blank; otherwise
    /// propagates API failures.
    pub async fn update(&self, id: i64, description: &str, amount: &str) -> Result<(), ApiError> {
        let update = ExpenseUpdate::parse(description, amount).map_err(|e| {
            debug!(error = %e, "Expense update rejected locally");
            e
        })?;

        debug!(expense_id = id, "Submitting expense update");

        self.api.update_expense(id, &update).await.map_err(|e| {
            warn!(expense_id = id, error = %e, "Failed to update expense");
            e
        })?;

        info!(expense_id = id, "Expense updated");
        Ok(())
    }
}
