//! Registration and login drafts.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    domain::{
        customers::models::{Credentials, NewCustomer},
        rules,
    },
    forms::{CheckField, Draft, ErrorMap, FormField},
};

const WEAK_PASSWORD: &str = "Password must contain at least 4 characters, including 1 uppercase \
                             letter, 1 lowercase letter, 1 number, and 1 special character.";

/// Inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    /// Login name.
    UserName,
    /// Password.
    UserPassword,
    /// Password typed again.
    ConfirmPassword,
    /// Contact address.
    Email,
    /// Home city.
    CityName,
    /// Home state.
    StateName,
    /// Home country.
    CountryName,
}

impl FormField for RegistrationField {
    const ALL: &'static [Self] = &[
        Self::UserName,
        Self::UserPassword,
        Self::ConfirmPassword,
        Self::Email,
        Self::CityName,
        Self::StateName,
        Self::CountryName,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::UserName => "userName",
            Self::UserPassword => "userPassword",
            Self::ConfirmPassword => "confirmPassword",
            Self::Email => "email",
            Self::CityName => "cityName",
            Self::StateName => "stateName",
            Self::CountryName => "countryName",
        }
    }

    fn check(self) -> Option<CheckField> {
        match self {
            Self::UserName => Some(CheckField::UserName),
            Self::Email => Some(CheckField::Email),
            Self::CityName => Some(CheckField::CityName),
            Self::StateName => Some(CheckField::StateName),
            Self::CountryName => Some(CheckField::CountryName),
            Self::UserPassword | Self::ConfirmPassword => None,
        }
    }
}

/// Raw inputs of a registration.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    /// Login name.
    pub user_name: String,
    /// Password.
    pub user_password: String,
    /// Password typed again; must match.
    pub confirm_password: String,
    /// Contact address.
    pub email: String,
    /// Home city.
    pub city_name: String,
    /// Home state.
    pub state_name: String,
    /// Home country.
    pub country_name: String,
}

impl Debug for RegistrationDraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RegistrationDraft")
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("city_name", &self.city_name)
            .field("state_name", &self.state_name)
            .field("country_name", &self.country_name)
            .finish_non_exhaustive()
    }
}

impl Draft for RegistrationDraft {
    type Field = RegistrationField;
    type Payload = NewCustomer;

    fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::UserName => &self.user_name,
            RegistrationField::UserPassword => &self.user_password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::Email => &self.email,
            RegistrationField::CityName => &self.city_name,
            RegistrationField::StateName => &self.state_name,
            RegistrationField::CountryName => &self.country_name,
        }
    }

    fn value_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::UserName => &mut self.user_name,
            RegistrationField::UserPassword => &mut self.user_password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
            RegistrationField::Email => &mut self.email,
            RegistrationField::CityName => &mut self.city_name,
            RegistrationField::StateName => &mut self.state_name,
            RegistrationField::CountryName => &mut self.country_name,
        }
    }

    fn parse(&self) -> Result<NewCustomer, ErrorMap> {
        let mut errors = ErrorMap::new();

        let user_name = required(
            &self.user_name,
            "userName",
            "User name cannot be blank.",
            &mut errors,
        );

        if rules::is_blank(&self.user_password) {
            errors.insert("userPassword", "User password cannot be blank.");
        } else if !rules::is_strong_password(&self.user_password) {
            errors.insert("userPassword", WEAK_PASSWORD);
        }

        if rules::is_blank(&self.confirm_password) {
            errors.insert("confirmPassword", "Confirm password cannot be blank.");
        } else if self.confirm_password != self.user_password {
            errors.insert("confirmPassword", "Passwords do not match.");
        }

        let email = self.email.trim();

        if email.is_empty() {
            errors.insert("email", "Email cannot be blank.");
        } else if !rules::is_email(email) {
            errors.insert("email", "Invalid email format.");
        }

        let city_name = required(
            &self.city_name,
            "cityName",
            "City name is mandatory.",
            &mut errors,
        );
        let state_name = required(
            &self.state_name,
            "stateName",
            "State name is mandatory.",
            &mut errors,
        );
        let country_name = required(
            &self.country_name,
            "countryName",
            "Country name is mandatory.",
            &mut errors,
        );

        errors.into_result(|| NewCustomer {
            user_name: user_name.to_string(),
            user_password: self.user_password.clone(),
            email: email.to_string(),
            city_name: city_name.to_string(),
            state_name: state_name.to_string(),
            country_name: country_name.to_string(),
        })
    }
}

fn required<'a>(
    value: &'a str,
    field: &'static str,
    message: &'static str,
    errors: &mut ErrorMap,
) -> &'a str {
    let value = value.trim();

    if value.is_empty() {
        errors.insert(field, message);
    }

    value
}

/// Inputs of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// Login name.
    Username,
    /// Password.
    Password,
}

impl FormField for LoginField {
    const ALL: &'static [Self] = &[Self::Username, Self::Password];

    fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

/// Raw inputs of a login.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    /// Login name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl Debug for LoginDraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LoginDraft")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Draft for LoginDraft {
    type Field = LoginField;
    type Payload = Credentials;

    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn parse(&self) -> Result<Credentials, ErrorMap> {
        let mut errors = ErrorMap::new();

        if rules::is_blank(&self.username) {
            errors.insert("username", "Username cannot be blank");
        }

        if rules::is_blank(&self.password) {
            errors.insert("password", "Password cannot be blank");
        }

        errors.into_result(|| Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}
