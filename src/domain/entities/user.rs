//! User-related value objects.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login form data. Transient; exists only for the duration of the
/// login request.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form data. Transient.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Registration {
    /// Requested username.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Registration {
    /// Creates a new registration.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The created-user representation returned by the registration
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    /// Server-assigned identifier.
    pub id: i64,
    /// Registered username.
    pub username: String,
    /// Registered email.
    pub email: String,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("maria", "hunter2");
        let debug_output = format!("{credentials:?}");

        assert!(debug_output.contains("maria"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_registration_debug_redacts_password() {
        let registration = Registration::new("maria", "maria@example.com", "hunter2");
        let debug_output = format!("{registration:?}");

        assert!(debug_output.contains("maria@example.com"));
        assert!(!debug_output.contains("hunter2"));
    }
}
