//! Use case implementations.

mod load_expenses_use_case;
mod login_use_case;
mod register_use_case;
mod submit_expense_use_case;

pub use load_expenses_use_case::LoadExpensesUseCase;
pub use login_use_case::LoginUseCase;
pub use register_use_case::RegisterUseCase;
pub use submit_expense_use_case::SubmitExpenseUseCase;
