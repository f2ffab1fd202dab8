//! Registration and login forms.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    api::InventoryApi,
    domain::customers::validation::{LoginDraft, LoginField, RegistrationDraft, RegistrationField},
    forms::{EntityForm, FormField, SubmitError},
};

/// Backend rejection texts that belong to a single registration field.
const REGISTRATION_REJECTIONS: &[(&str, RegistrationField, &str)] = &[
    (
        "Username is already taken",
        RegistrationField::UserName,
        "User name already exists.",
    ),
    (
        "Email is already in use",
        RegistrationField::Email,
        "Email already exists.",
    ),
    (
        "City not found",
        RegistrationField::CityName,
        "City not found.",
    ),
    (
        "State not found",
        RegistrationField::StateName,
        "State not found.",
    ),
    (
        "Country not found",
        RegistrationField::CountryName,
        "Country not found.",
    ),
];

fn route_registration_rejection(body: &str) -> Option<(&'static str, String)> {
    REGISTRATION_REJECTIONS
        .iter()
        .find(|(needle, _, _)| body.contains(needle))
        .map(|(_, field, message)| (field.key(), (*message).to_string()))
}

/// Signs up a new customer.
#[derive(Debug)]
pub struct RegisterForm {
    form: EntityForm<RegistrationDraft>,
}

impl RegisterForm {
    /// Opens an empty form.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            form: EntityForm::new(api, RegistrationDraft::default()),
        }
    }

    /// Underlying form.
    pub fn form(&self) -> &EntityForm<RegistrationDraft> {
        &self.form
    }

    /// Underlying form, for edits and checks.
    pub fn form_mut(&mut self) -> &mut EntityForm<RegistrationDraft> {
        &mut self.form
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Registers the customer.
    ///
    /// Backend rejections that name a field land on that field; anything
    /// else becomes a generic failure notice.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when nothing was sent.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let registered = self
            .form
            .submit_with(|api, customer| async move { api.register(&customer).await })
            .await?;

        let state = self.form.state_mut();

        match registered {
            Ok(()) => {
                info!("customer registered");

                state.submit_succeeded_and_reset("Registration successful");
            }
            Err(error) => match error.body().and_then(route_registration_rejection) {
                Some(rejection) => {
                    warn!(field = rejection.0, %error, "registration rejected");

                    state.submit_rejected([rejection]);
                }
                None => {
                    warn!(%error, "registration failed");

                    state.submit_failed("Registration failed. Please try again.");
                }
            },
        }

        Ok(())
    }

    /// Closes the form.
    pub fn close(&mut self) {
        self.form.close();
    }
}

/// Result of a login attempt that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The credentials were accepted.
    Authenticated {
        /// Name to keep in the session.
        username: String,
    },

    /// The credentials were refused; the reason is on the form.
    Rejected,
}

/// Signs a customer in.
#[derive(Debug)]
pub struct LoginForm {
    form: EntityForm<LoginDraft>,
}

impl LoginForm {
    /// Opens an empty form.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            form: EntityForm::new(api, LoginDraft::default()),
        }
    }

    /// Underlying form.
    pub fn form(&self) -> &EntityForm<LoginDraft> {
        &self.form
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Checks the credentials with the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when nothing was sent.
    pub async fn submit(&mut self) -> Result<LoginOutcome, SubmitError> {
        let username = self.form.state().draft().username.trim().to_string();

        let accepted = self
            .form
            .submit_with(|api, credentials| async move { api.login(&credentials).await })
            .await?;

        let state = self.form.state_mut();

        match accepted {
            Ok(true) => {
                info!(%username, "login accepted");

                state.submit_succeeded("Login successful");

                return Ok(LoginOutcome::Authenticated { username });
            }
            Ok(false) => {
                info!(%username, "login refused");

                state.submit_failed("Invalid username or password");
            }
            Err(error) => {
                warn!(%username, %error, "login failed");

                match error.body() {
                    Some(body) if body.contains("User not found") => {
                        state.submit_rejected([(
                            LoginField::Username.key(),
                            "User not found".to_string(),
                        )]);
                    }
                    Some(body) if body.contains("Password mismatch") => {
                        state.submit_rejected([(
                            LoginField::Password.key(),
                            "Wrong password".to_string(),
                        )]);
                    }
                    Some(body) => state.submit_failed(body),
                    None => state.submit_failed("Failed to login. Please try again."),
                }
            }
        }

        Ok(LoginOutcome::Rejected)
    }

    /// Closes the form.
    pub fn close(&mut self) {
        self.form.close();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        api::{ApiError, MockInventoryApi},
        forms::{FormStatus, Notice},
        test::helpers::server_error,
    };

    fn fill(form: &mut RegisterForm) {
        form.set_field(RegistrationField::UserName, "alice");
        form.set_field(RegistrationField::UserPassword, "Secret1!");
        form.set_field(RegistrationField::ConfirmPassword, "Secret1!");
        form.set_field(RegistrationField::Email, "alice@example.com");
        form.set_field(RegistrationField::CityName, "Springfield");
        form.set_field(RegistrationField::StateName, "Oregon");
        form.set_field(RegistrationField::CountryName, "USA");
    }

    fn rejected(path: &'static str, status: u16, body: &str) -> ApiError {
        ApiError::Status {
            path,
            status,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn registration_resets_the_draft() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_register()
            .withf(|customer| customer.user_name == "alice" && customer.country_name == "USA")
            .times(1)
            .returning(|_| Ok(()));

        let mut form = RegisterForm::new(Arc::new(api));

        fill(&mut form);
        form.submit().await?;

        let state = form.form().state();

        assert_eq!(
            state.notice(),
            Some(&Notice::Success("Registration successful".to_string()))
        );
        assert_eq!(state.draft(), &RegistrationDraft::default());

        Ok(())
    }

    #[tokio::test]
    async fn taken_username_lands_on_the_field() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_register()
            .returning(|_| Err(rejected("/createCustomer", 400, "Username is already taken.")));

        let mut form = RegisterForm::new(Arc::new(api));

        fill(&mut form);
        form.submit().await?;

        let state = form.form().state();

        assert_eq!(state.errors().get("userName"), Some("User name already exists."));
        assert_eq!(state.notice(), None);
        assert_eq!(state.status(), FormStatus::Failed);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_country_lands_on_the_field() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_register()
            .returning(|_| Err(rejected("/createCustomer", 404, "Country not found")));

        let mut form = RegisterForm::new(Arc::new(api));

        fill(&mut form);
        form.submit().await?;

        assert_eq!(
            form.form().state().errors().get("countryName"),
            Some("Country not found.")
        );

        Ok(())
    }

    #[tokio::test]
    async fn unexpected_registration_failure_is_generic() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_register()
            .returning(|_| Err(server_error("/createCustomer")));

        let mut form = RegisterForm::new(Arc::new(api));

        fill(&mut form);
        form.submit().await?;

        assert_eq!(
            form.form().state().notice(),
            Some(&Notice::Failure(
                "Registration failed. Please try again.".to_string()
            ))
        );

        Ok(())
    }

    #[tokio::test]
    async fn username_check_tracks_the_backend_answer() {
        let mut api = MockInventoryApi::new();

        api.expect_check_username()
            .withf(|name| name == "alice")
            .times(1)
            .returning(|_| Ok(true));
        api.expect_check_username()
            .withf(|name| name == "alicia")
            .times(1)
            .returning(|_| Ok(false));

        let mut form = RegisterForm::new(Arc::new(api));

        form.set_field(RegistrationField::UserName, "alice");
        form.form_mut().blur(RegistrationField::UserName).await;

        assert_eq!(
            form.form().state().errors().get("userName"),
            Some("User name already exists.")
        );

        form.set_field(RegistrationField::UserName, "alicia");
        form.form_mut().blur(RegistrationField::UserName).await;

        assert_eq!(form.form().state().errors().get("userName"), None);
    }

    fn login_form(api: MockInventoryApi) -> LoginForm {
        let mut form = LoginForm::new(Arc::new(api));

        form.set_field(LoginField::Username, "alice");
        form.set_field(LoginField::Password, "Secret1!");

        form
    }

    #[tokio::test]
    async fn accepted_credentials_authenticate() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_login()
            .withf(|credentials| credentials.username == "alice")
            .returning(|_| Ok(true));

        let outcome = login_form(api).submit().await?;

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                username: "alice".to_string()
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn refused_credentials_set_the_general_message() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_login().returning(|_| Ok(false));

        let mut form = login_form(api);

        assert_eq!(form.submit().await?, LoginOutcome::Rejected);
        assert_eq!(
            form.form().state().notice(),
            Some(&Notice::Failure("Invalid username or password".to_string()))
        );

        Ok(())
    }

    #[tokio::test]
    async fn backend_login_errors_are_routed_to_fields() -> TestResult {
        for (body, field, message) in [
            ("User not found", "username", "User not found"),
            ("Password mismatch", "password", "Wrong password"),
        ] {
            let mut api = MockInventoryApi::new();

            api.expect_login()
                .returning(move |_| Err(rejected("/login", 404, body)));

            let mut form = login_form(api);

            assert_eq!(form.submit().await?, LoginOutcome::Rejected);
            assert_eq!(form.form().state().errors().get(field), Some(message));
        }

        Ok(())
    }

    #[tokio::test]
    async fn blank_error_body_uses_the_fallback_message() -> TestResult {
        let mut api = MockInventoryApi::new();

        api.expect_login()
            .returning(|_| Err(rejected("/login", 500, "")));

        let mut form = login_form(api);

        form.submit().await?;

        assert_eq!(
            form.form().state().notice(),
            Some(&Notice::Failure(
                "Failed to login. Please try again.".to_string()
            ))
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_login_is_never_sent() {
        let mut form = LoginForm::new(Arc::new(MockInventoryApi::new()));

        assert_eq!(form.submit().await, Err(SubmitError::Invalid(2)));
    }
}
