//! Infrastructure layer with external service adapters.

/// Expense API client.
pub mod api;
/// Application configuration.
pub mod config;
/// Session store adapters.
pub mod storage;

pub use api::ExpenseApiClient;
pub use config::{AppConfig, CliArgs, LogLevel};
pub use storage::KeyringSessionStore;
