//! Domain entity definitions.

mod expense;
mod token;
mod user;

pub use expense::{Expense, ExpenseDraft, ExpenseUpdate};
pub use token::SessionToken;
pub use user::{CreatedUser, Credentials, Registration};
