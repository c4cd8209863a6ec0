mod expense_api_port;
mod session_store_port;

pub use expense_api_port::ExpenseApiPort;
pub use session_store_port::SessionStorePort;

/// Test doubles for the ports.
#[cfg(test)]
pub mod mocks {
    pub use super::expense_api_port::mock::MockExpenseApi;
    pub use super::session_store_port::mock::MockSessionStore;
}
