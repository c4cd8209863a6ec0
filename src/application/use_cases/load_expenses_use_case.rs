//! Expense list loading use case.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::application::dto::ExpenseSnapshot;
use crate::domain::errors::ApiError;
use crate::domain::ports::ExpenseApiPort;

/// Fetches the expense list, optionally filtered server-side.
///
/// Each load is tagged with a monotonically increasing sequence number
/// taken when the request is issued. Concurrent loads are not
/// cancelled; the view applies a snapshot only when its sequence number
/// is newer than the last one applied, so a slow older response cannot
/// overwrite a newer one.
///
/// Share a single instance behind an [`Arc`]; cloning would fork the
/// sequence counter.
pub struct LoadExpensesUseCase {
    api: Arc<dyn ExpenseApiPort>,
    seq: AtomicU64,
}

impl LoadExpensesUseCase {
    /// Creates a new load use case.
    #[must_use]
    pub const fn new(api: Arc<dyn ExpenseApiPort>) -> Self {
        Self {
            api,
            seq: AtomicU64::new(0),
        }
    }

    /// Loads the expense list.
    ///
    /// The search term is trimmed; a blank term issues the request with
    /// no search parameter at all. The server performs the actual
    /// filtering and defines the display order.
    ///
    /// # Errors
    /// Propagates API failures. A 401 has already torn down the session
    /// inside the client by the time it surfaces here.
    pub async fn execute(&self, search: Option<&str>) -> Result<ExpenseSnapshot, ApiError> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        debug!(seq, search = ?search, "Loading expense list");

        let expenses = self.api.list_expenses(search).await.map_err(|e| {
            warn!(seq, error = %e, "Failed to load expense list");
            e
        })?;

        debug!(seq, count = expenses.len(), "Expense list loaded");

        Ok(ExpenseSnapshot::new(
            seq,
            search.map(ToString::to_string),
            expenses,
        ))
    }
}
