//! Blur-triggered remote checks.
//!
//! Two families share the same boolean endpoints with opposite polarity:
//! uniqueness checks answer `true` when the value is already taken, existence
//! checks answer `true` when the value is recognized.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{debug, warn};

use crate::{
    api::{ApiError, InventoryApi},
    forms::{LifetimeToken, state::FormField},
};

/// Polarity of a check endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// `true` means the value already exists and cannot be reused.
    Uniqueness,

    /// `true` means the value is known to the backend's reference data.
    Existence,
}

/// A field value the backend can vouch for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckField {
    /// Product names must be unused.
    ProductName,
    /// Bar codes must be unused.
    Barcode,
    /// User names must be unused.
    UserName,
    /// Email addresses must be unused.
    Email,
    /// Cities must be known.
    CityName,
    /// States must be known.
    StateName,
    /// Countries must be known.
    CountryName,
}

impl CheckField {
    /// Polarity of the backend answer.
    #[must_use]
    pub const fn kind(self) -> CheckKind {
        match self {
            Self::ProductName | Self::Barcode | Self::UserName | Self::Email => {
                CheckKind::Uniqueness
            }
            Self::CityName | Self::StateName | Self::CountryName => CheckKind::Existence,
        }
    }

    /// Field error recorded when the check fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::ProductName => "Product name already exists.",
            Self::Barcode => "Barcode already exists.",
            Self::UserName => "User name already exists.",
            Self::Email => "Email already exists.",
            Self::CityName => "City not found.",
            Self::StateName => "State not found.",
            Self::CountryName => "Country not found.",
        }
    }

    /// Field error implied by a backend `answer`; `None` clears the error.
    #[must_use]
    pub const fn verdict(self, answer: bool) -> Option<&'static str> {
        let failed = match self.kind() {
            CheckKind::Uniqueness => answer,
            CheckKind::Existence => !answer,
        };

        if failed {
            Some(self.failure_message())
        } else {
            None
        }
    }

    /// Asks the backend about `value`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures from the API.
    pub async fn query(self, api: &dyn InventoryApi, value: &str) -> Result<bool, ApiError> {
        match self {
            Self::ProductName => api.check_product_name(value).await,
            Self::Barcode => api.check_barcode(value).await,
            Self::UserName => api.check_username(value).await,
            Self::Email => api.check_email(value).await,
            Self::CityName => api.check_city_name(value).await,
            Self::StateName => api.check_state_name(value).await,
            Self::CountryName => api.check_country_name(value).await,
        }
    }
}

/// Result of a settled check, to be merged into the owning form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome<F> {
    /// Form field that was checked.
    pub field: F,

    /// Trimmed value that was sent.
    pub value: String,

    /// Error to record, or `None` to clear the field's error.
    pub verdict: Option<&'static str>,
}

/// A check that has been started but not yet settled.
///
/// Owns everything it needs, so it can be awaited inline or moved into a
/// spawned task while the form keeps handling input.
pub struct PendingCheck<F> {
    field: F,
    check: CheckField,
    value: String,
    api: Arc<dyn InventoryApi>,
    token: LifetimeToken,
}

impl<F: FormField> PendingCheck<F> {
    pub(crate) fn new(
        field: F,
        check: CheckField,
        value: String,
        api: Arc<dyn InventoryApi>,
        token: LifetimeToken,
    ) -> Self {
        Self {
            field,
            check,
            value,
            api,
            token,
        }
    }

    /// Field being checked.
    pub fn field(&self) -> F {
        self.field
    }

    /// Runs the check.
    ///
    /// Returns `None` when the form went away first or the request failed;
    /// failures are logged and otherwise swallowed.
    pub async fn settle(self) -> Option<CheckOutcome<F>> {
        let Self {
            field,
            check,
            value,
            api,
            token,
        } = self;

        let answer = token.guard(check.query(api.as_ref(), &value)).await;

        match answer {
            None => {
                debug!(field = field.key(), "form closed before check settled");

                None
            }
            Some(Err(error)) => {
                warn!(field = field.key(), %error, "remote check failed");

                None
            }
            Some(Ok(answer)) => Some(CheckOutcome {
                field,
                verdict: check.verdict(answer),
                value,
            }),
        }
    }
}

impl<F: Debug> Debug for PendingCheck<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PendingCheck")
            .field("field", &self.field)
            .field("check", &self.check)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
