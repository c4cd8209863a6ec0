//! Expense list DTOs.

use crate::domain::entities::Expense;

/// One fetched expense list, tagged with its request sequence number.
///
/// Loads are never cancelled, so an older response can resolve after a
/// newer one. The sequence number lets the view apply only the latest
/// issued load and discard stale results.
#[derive(Debug, Clone)]
pub struct ExpenseSnapshot {
    /// Monotonically increasing load sequence number.
    pub seq: u64,
    /// The trimmed search term this load was issued with, if any.
    pub search: Option<String>,
    /// Expenses in server-provided order.
    pub expenses: Vec<Expense>,
}

impl ExpenseSnapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub const fn new(seq: u64, search: Option<String>, expenses: Vec<Expense>) -> Self {
        Self {
            seq,
            search,
            expenses,
        }
    }
}
