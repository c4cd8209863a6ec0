//! Reusable widgets.

mod expense_list;
mod text_input;

pub use expense_list::{EMPTY_STATE_TEXT, ExpenseList, format_expense_line, format_timestamp};
pub use text_input::TextInput;
