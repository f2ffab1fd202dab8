//! Customer Models

use std::fmt::{Debug, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::ids::TypedId;

/// Customers are only ever referenced by id on this side of the API.
#[derive(Debug)]
pub enum Customer {}

/// Customer Id
pub type CustomerId = TypedId<Customer>;

/// Registration payload
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Login name.
    pub user_name: String,
    /// Plain-text password.
    pub user_password: String,
    /// Contact address.
    pub email: String,
    /// Home city.
    pub city_name: String,
    /// Home state.
    pub state_name: String,
    /// Home country.
    pub country_name: String,
}

impl Debug for NewCustomer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("NewCustomer")
            .field("user_name", &self.user_name)
            .field("user_password", &"<redacted>")
            .field("email", &self.email)
            .field("city_name", &self.city_name)
            .field("state_name", &self.state_name)
            .field("country_name", &self.country_name)
            .finish()
    }
}

/// Sign-in credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_passwords() {
        let credentials = Credentials {
            username: "alice".to_string(),
            password: "Secret1!".to_string(),
        };

        let rendered = format!("{credentials:?}");

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("Secret1!"));
    }
}
