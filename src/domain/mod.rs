//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Expense, SessionToken};
pub use errors::{ApiError, ValidationError};
pub use ports::{ExpenseApiPort, SessionStorePort};
