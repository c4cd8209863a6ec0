//! Local form validation errors.

use thiserror::Error;

/// A submission rejected on the client before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description field was blank.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Amount field did not parse as a number.
    #[error("amount is not a valid number: {input:?}")]
    InvalidAmount {
        /// The offending input text.
        input: String,
    },

    /// Category field was blank.
    #[error("category must not be empty")]
    EmptyCategory,

    /// An update with every field blank.
    #[error("nothing to update")]
    EmptyUpdate,
}
