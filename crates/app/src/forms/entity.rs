//! The generic entity form controller.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    future::Future,
    sync::Arc,
};

use tracing::debug;

use crate::{
    api::{ApiError, InventoryApi},
    forms::{
        CheckKind, CheckOutcome, ErrorMap, FormLifetime, FormState, PendingCheck, SubmitError,
        state::{Draft, FormField},
    },
};

/// Draft, errors and remote checks of one create or update form.
///
/// Every concrete form wraps one of these and adds its own fetch and submit
/// flows on top. Closing the form (or dropping it) discards every result that
/// settles afterwards.
pub struct EntityForm<D: Draft> {
    api: Arc<dyn InventoryApi>,
    lifetime: FormLifetime,
    state: FormState<D>,
}

impl<D: Draft> EntityForm<D> {
    /// Opens a form around `draft`.
    pub fn new(api: Arc<dyn InventoryApi>, draft: D) -> Self {
        Self {
            api,
            lifetime: FormLifetime::new(),
            state: FormState::new(draft),
        }
    }

    /// Current form state.
    pub fn state(&self) -> &FormState<D> {
        &self.state
    }

    /// Mutable form state.
    pub fn state_mut(&mut self) -> &mut FormState<D> {
        &mut self.state
    }

    /// API used by this form.
    pub fn api(&self) -> &Arc<dyn InventoryApi> {
        &self.api
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: D::Field, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    /// Starts the remote check of `field`, if it has one.
    ///
    /// Blank values are left to the validator. Unchanged values of a record
    /// being edited clear any uniqueness error instead of asking the backend.
    pub fn begin_blur(&mut self, field: D::Field) -> Option<PendingCheck<D::Field>> {
        let check = field.check()?;
        let value = self.state.draft().value(field).trim().to_string();

        if value.is_empty() {
            return None;
        }

        if check.kind() == CheckKind::Uniqueness && self.state.draft().is_original(field) {
            self.state.clear_field_error(field.key());

            return None;
        }

        debug!(field = field.key(), "starting remote check");

        Some(PendingCheck::new(
            field,
            check,
            value,
            Arc::clone(&self.api),
            self.lifetime.token(),
        ))
    }

    /// Merges a settled check into the form.
    ///
    /// Returns `false` when the result was discarded.
    pub fn apply_check(&mut self, outcome: &CheckOutcome<D::Field>) -> bool {
        if self.lifetime.has_ended() {
            return false;
        }

        self.state.apply_check(outcome)
    }

    /// Runs the remote check of `field` to completion.
    pub async fn blur(&mut self, field: D::Field) {
        let Some(pending) = self.begin_blur(field) else {
            return;
        };

        if let Some(outcome) = pending.settle().await {
            self.apply_check(&outcome);
        }
    }

    /// Validates the draft and, when clean, marks the form as submitting.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Closed`] once the form has been closed, and the
    /// errors of [`FormState::begin_submit`] otherwise.
    pub fn begin_submit(&mut self) -> Result<D::Payload, SubmitError> {
        self.begin_submit_with(ErrorMap::new())
    }

    /// [`begin_submit`](Self::begin_submit) that also refuses the errors in
    /// `rejected`; see [`FormState::begin_submit_with`].
    ///
    /// # Errors
    ///
    /// As [`begin_submit`](Self::begin_submit).
    pub fn begin_submit_with(&mut self, rejected: ErrorMap) -> Result<D::Payload, SubmitError> {
        if self.lifetime.has_ended() {
            return Err(SubmitError::Closed);
        }

        self.state.begin_submit_with(rejected)
    }

    /// Validates the draft, hands the payload to `send` and waits for the
    /// backend's answer.
    ///
    /// The caller records the answer on the form; a form closed before the
    /// answer arrived returns to `Ready`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when nothing was sent or the answer was
    /// discarded.
    pub async fn submit_with<T, Fut>(
        &mut self,
        send: impl FnOnce(Arc<dyn InventoryApi>, D::Payload) -> Fut,
    ) -> Result<Result<T, ApiError>, SubmitError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.submit_checked_with(ErrorMap::new(), send).await
    }

    /// [`submit_with`](Self::submit_with) that sends nothing while `rejected`
    /// holds any error.
    ///
    /// # Errors
    ///
    /// As [`submit_with`](Self::submit_with).
    pub async fn submit_checked_with<T, Fut>(
        &mut self,
        rejected: ErrorMap,
        send: impl FnOnce(Arc<dyn InventoryApi>, D::Payload) -> Fut,
    ) -> Result<Result<T, ApiError>, SubmitError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let payload = self.begin_submit_with(rejected)?;
        let answer = self.guard(send(Arc::clone(&self.api), payload)).await;

        answer.ok_or_else(|| {
            self.state.submit_abandoned();

            SubmitError::Closed
        })
    }

    /// Runs `work` unless the form closes first.
    pub fn guard<F: Future>(
        &self,
        work: F,
    ) -> impl Future<Output = Option<F::Output>> + use<D, F> {
        self.lifetime.token().guard(work)
    }

    /// Closes the form; pending checks and submissions are discarded.
    pub fn close(&mut self) {
        self.lifetime.end();
        self.state.submit_abandoned();
    }
}

impl<D: Draft> Debug for EntityForm<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EntityForm")
            .field("lifetime", &self.lifetime)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
