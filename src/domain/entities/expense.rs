//! Expense entities and form drafts.

use crate::domain::errors::ValidationError;

/// A server-owned expense record.
///
/// The client only reads and renders expenses; it never mutates one in
/// place. Display order is whatever the server returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: i64,
    description: String,
    amount: f64,
    category: String,
    created_at: String,
}

impl Expense {
    /// Creates a new expense record.
    #[must_use]
    pub fn new(
        id: i64,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.into(),
            created_at: created_at.into(),
        }
    }

    /// Returns the server-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the expense description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the expense amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the expense category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the creation timestamp as sent by the server (RFC 3339).
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// A validated new-expense submission built from raw form input.
///
/// Validation happens entirely on the client before any request is
/// issued: the amount text must parse as a number and the description
/// must be present. The category is normalized to lower case.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    description: String,
    amount: f64,
    category: String,
}

impl ExpenseDraft {
    /// Parses raw form fields into a draft.
    ///
    /// # Errors
    /// Returns a validation error if the description is blank or the
    /// amount does not parse as a number. No request is issued for an
    /// invalid draft.
    pub fn parse(description: &str, amount: &str, category: &str) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount_text = amount.trim();
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| ValidationError::InvalidAmount {
                input: amount_text.to_string(),
            })?;

        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        Ok(Self {
            description: description.to_string(),
            amount,
            category,
        })
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parsed amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the lower-cased category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A partial update to an existing expense.
///
/// Only the fields present in the form are sent; the server keeps the
/// rest unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseUpdate {
    description: Option<String>,
    amount: Option<f64>,
}

impl ExpenseUpdate {
    /// Parses optional form fields into an update.
    ///
    /// Blank fields are treated as "leave unchanged". An update with no
    /// fields at all is rejected.
    ///
    /// # Errors
    /// Returns a validation error if an amount was entered but does not
    /// parse as a number, or if both fields are blank.
    pub fn parse(description: &str, amount: &str) -> Result<Self, ValidationError> {
        let description = Some(description.trim())
            .filter(|d| !d.is_empty())
            .map(ToString::to_string);

        let amount_text = amount.trim();
        let amount = if amount_text.is_empty() {
            None
        } else {
            Some(
                amount_text
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidAmount {
                        input: amount_text.to_string(),
                    })?,
            )
        };

        if description.is_none() && amount.is_none() {
            return Err(ValidationError::EmptyUpdate);
        }

        Ok(Self {
            description,
            amount,
        })
    }

    /// Returns the new description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the new amount, if any.
    #[must_use]
    pub const fn amount(&self) -> Option<f64> {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_draft_from_valid_input() {
        let draft = ExpenseDraft::parse("Coffee", "3.5", "Food").unwrap();

        assert_eq!(draft.description(), "Coffee");
        assert!((draft.amount() - 3.5).abs() < f64::EPSILON);
        assert_eq!(draft.category(), "food");
    }

    #[test_case("12.5x"; "trailing garbage")]
    #[test_case(""; "empty")]
    #[test_case("12,5"; "comma separator")]
    #[test_case("abc"; "letters")]
    fn test_draft_rejects_bad_amount(amount: &str) {
        let result = ExpenseDraft::parse("Coffee", amount, "food");
        assert!(matches!(result, Err(ValidationError::InvalidAmount { .. })));
    }

    #[test]
    fn test_draft_requires_description() {
        let result = ExpenseDraft::parse("   ", "3.5", "food");
        assert!(matches!(result, Err(ValidationError::EmptyDescription)));
    }

    #[test]
    fn test_draft_requires_category() {
        let result = ExpenseDraft::parse("Coffee", "3.5", "  ");
        assert!(matches!(result, Err(ValidationError::EmptyCategory)));
    }

    #[test]
    fn test_draft_lowercases_category() {
        let draft = ExpenseDraft::parse("Coffee", "3.5", "GROCERIES").unwrap();
        assert_eq!(draft.category(), "groceries");
    }

    #[test]
    fn test_update_blank_fields_are_skipped() {
        let update = ExpenseUpdate::parse("Lunch", "  ").unwrap();

        assert_eq!(update.description(), Some("Lunch"));
        assert_eq!(update.amount(), None);
    }

    #[test]
    fn test_update_rejects_bad_amount() {
        let result = ExpenseUpdate::parse("Lunch", "12.5x");
        assert!(matches!(result, Err(ValidationError::InvalidAmount { .. })));
    }

    #[test]
    fn test_update_rejects_all_blank() {
        let result = ExpenseUpdate::parse("  ", "");
        assert!(matches!(result, Err(ValidationError::EmptyUpdate)));
    }
}
