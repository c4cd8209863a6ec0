//! Wire-format DTOs for the expense-tracker REST API.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    CreatedUser, Expense, ExpenseDraft, ExpenseUpdate, Registration,
};

/// Request body for `POST /users`.
///
/// Serializes to exactly `{username, email, password}` with no extra
/// fields.
#[derive(Debug, Serialize)]
pub struct RegisterBody<'a> {
    /// Requested username.
    pub username: &'a str,
    /// Contact email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
}

impl<'a> From<&'a Registration> for RegisterBody<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            username: &registration.username,
            email: &registration.email,
            password: &registration.password,
        }
    }
}

/// Request body for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    /// Account username.
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Response body for `POST /login`.
///
/// The server also sends `msg` and `type` fields; only the token
/// matters to the client and its absence is a failure.
#[derive(Debug, Deserialize)]
pub struct LoginResponseBody {
    /// Bearer token, when present.
    pub token: Option<String>,
}

/// Request body for `POST /home/expense/add`.
#[derive(Debug, Serialize)]
pub struct NewExpenseBody<'a> {
    /// Expense description.
    pub expense_desc: &'a str,
    /// Expense amount.
    pub amount: f64,
    /// Lower-cased category.
    pub category: &'a str,
}

impl<'a> From<&'a ExpenseDraft> for NewExpenseBody<'a> {
    fn from(draft: &'a ExpenseDraft) -> Self {
        Self {
            expense_desc: draft.description(),
            amount: draft.amount(),
            category: draft.category(),
        }
    }
}

/// Request body for `PATCH /home/expense/update/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateExpenseBody<'a> {
    /// New description, omitted when unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_desc: Option<&'a str>,
    /// New amount, omitted when unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl<'a> From<&'a ExpenseUpdate> for UpdateExpenseBody<'a> {
    fn from(update: &'a ExpenseUpdate) -> Self {
        Self {
            expense_desc: update.description(),
            amount: update.amount(),
        }
    }
}

/// Created-user representation returned by `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreatedUserResponse {
    /// Server-assigned identifier.
    pub id: i64,
    /// Registered username.
    pub username: String,
    /// Registered email.
    pub email: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<CreatedUserResponse> for CreatedUser {
    fn from(response: CreatedUserResponse) -> Self {
        Self {
            id: response.id,
            username: response.username,
            email: response.email,
            created_at: response.created_at,
        }
    }
}

/// One expense row from `GET /home/expense/list`.
#[derive(Debug, Deserialize)]
pub struct ExpenseResponse {
    /// Server-assigned identifier.
    pub id: i64,
    /// Expense description.
    pub expense_desc: String,
    /// Expense amount.
    pub amount: f64,
    /// Expense category.
    pub category: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<ExpenseResponse> for Expense {
    fn from(response: ExpenseResponse) -> Self {
        Self::new(
            response.id,
            response.expense_desc,
            response.amount,
            response.category,
            response.created_at,
        )
    }
}

/// Response body for `GET /home/expense/list`.
///
/// An absent `Expenses` field is treated the same as an empty list.
#[derive(Debug, Deserialize)]
pub struct ListExpensesResponse {
    /// Expenses in server-provided order.
    #[serde(rename = "Expenses", default)]
    pub expenses: Vec<ExpenseResponse>,
}

/// Error body the server attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Server-provided error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_body_has_exactly_three_fields() {
        let registration = Registration::new("maria", "maria@example.com", "hunter2");
        let body = RegisterBody::from(&registration);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "username": "maria",
                "email": "maria@example.com",
                "password": "hunter2",
            })
        );
    }

    #[test]
    fn test_new_expense_body_shape() {
        let draft = ExpenseDraft::parse("Coffee", "3.5", "Food").unwrap();
        let body = NewExpenseBody::from(&draft);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "expense_desc": "Coffee",
                "amount": 3.5,
                "category": "food",
            })
        );
    }

    #[test]
    fn test_update_body_omits_absent_fields() {
        let update = ExpenseUpdate::parse("", "12.5").unwrap();
        let body = UpdateExpenseBody::from(&update);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "amount": 12.5 })
        );
    }

    #[test]
    fn test_list_response_with_missing_expenses_field() {
        let response: ListExpensesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.expenses.is_empty());
    }

    #[test]
    fn test_list_response_row_mapping() {
        let response: ListExpensesResponse = serde_json::from_value(json!({
            "Expenses": [{
                "id": 1,
                "expense_desc": "Coffee",
                "amount": 3.5,
                "category": "food",
                "created_at": "2024-01-01T00:00:00Z",
            }]
        }))
        .unwrap();

        let expense: Expense = response.expenses.into_iter().next().unwrap().into();
        assert_eq!(expense.id(), 1);
        assert_eq!(expense.description(), "Coffee");
        assert_eq!(expense.category(), "food");
    }

    #[test]
    fn test_login_response_tolerates_extra_fields() {
        let response: LoginResponseBody = serde_json::from_value(json!({
            "msg": "Login successful",
            "token": "abc.def.ghi",
            "type": "Bearer",
        }))
        .unwrap();

        assert_eq!(response.token.as_deref(), Some("abc.def.ghi"));
    }
}
