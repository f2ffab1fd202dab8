//! Generic form state.
//!
//! A [`FormState`] owns one draft, its [`ErrorMap`], a [`FormStatus`] and the
//! last user-visible [`Notice`]. All transitions are plain synchronous methods
//! so every form behaves the same way and can be tested without I/O.

use std::fmt::Debug;

use crate::forms::{CheckField, CheckOutcome, ErrorMap, SubmitError};

/// An input of a form.
pub trait FormField: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every field of the form, in display order.
    const ALL: &'static [Self];

    /// Key used in the [`ErrorMap`] and on the wire.
    fn key(self) -> &'static str;

    /// Remote check run when the field loses focus, if any.
    fn check(self) -> Option<CheckField> {
        None
    }
}

/// In-memory, not yet persisted representation of an entity being edited.
///
/// Drafts keep the raw text of every input; [`parse`](Draft::parse) is the
/// field validator, turning valid text into the wire payload.
pub trait Draft: Clone + Debug + Send + Sync + 'static {
    /// Inputs of this draft.
    type Field: FormField;

    /// Payload sent to the backend once the draft is valid.
    type Payload: Send + 'static;

    /// Current raw value of `field`.
    fn value(&self, field: Self::Field) -> &str;

    /// Mutable raw value of `field`.
    fn value_mut(&mut self, field: Self::Field) -> &mut String;

    /// Validates the draft and converts it into its payload.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the draft is not submittable.
    fn parse(&self) -> Result<Self::Payload, ErrorMap>;

    /// Whether `field` still holds the value of the record being edited.
    ///
    /// Uniqueness checks are skipped for such values: a record never
    /// collides with itself.
    fn is_original(&self, _field: Self::Field) -> bool {
        false
    }

    /// Validation errors of the draft; empty when valid.
    fn validate(&self) -> ErrorMap {
        match self.parse() {
            Ok(_) => ErrorMap::new(),
            Err(errors) => errors,
        }
    }
}

/// Lifecycle of a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Created, nothing loaded yet.
    #[default]
    Empty,

    /// Reference data is being fetched.
    Loading,

    /// Interactive.
    Ready,

    /// The validator is running ahead of a submission.
    Validating,

    /// A submission is in flight; further submissions are refused.
    Submitting,

    /// The last submission was accepted. The form stays interactive.
    Succeeded,

    /// The last submission failed. The form stays interactive.
    Failed,
}

/// User-visible outcome of the last submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Success banner.
    Success(String),

    /// Failure banner.
    Failure(String),
}

impl Notice {
    /// Banner text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    /// Whether this is a success banner.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Draft, errors, status and notice of one form.
#[derive(Debug, Clone)]
pub struct FormState<D> {
    draft: D,
    errors: ErrorMap,
    status: FormStatus,
    notice: Option<Notice>,
}

impl<D: Draft + Default> Default for FormState<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Draft> FormState<D> {
    /// Wraps `draft` in a fresh form state.
    #[must_use]
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            errors: ErrorMap::new(),
            status: FormStatus::Empty,
            notice: None,
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Current field errors.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Current lifecycle status.
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Outcome of the last submission.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Reference data is being fetched.
    pub fn begin_loading(&mut self) {
        self.status = FormStatus::Loading;
    }

    /// Reference data has settled, successfully or not.
    pub fn finish_loading(&mut self) {
        if self.status == FormStatus::Loading {
            self.status = FormStatus::Ready;
        }
    }

    /// Replaces the raw value of `field` and clears its error.
    pub fn set_field(&mut self, field: D::Field, value: impl Into<String>) {
        *self.draft.value_mut(field) = value.into();
        self.errors.remove(field.key());

        if matches!(
            self.status,
            FormStatus::Empty | FormStatus::Succeeded | FormStatus::Failed
        ) {
            self.status = FormStatus::Ready;
        }
    }

    /// Records an error for `field`, leaving every other key untouched.
    pub fn set_field_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    /// Clears the error for `field`.
    pub fn clear_field_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Replaces the draft wholesale, clearing errors, e.g. after a fetch.
    pub fn replace_draft(&mut self, draft: D) {
        self.draft = draft;
        self.errors.clear();
        self.status = FormStatus::Ready;
    }

    /// Runs the validator and, when clean, moves to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] while a submission is outstanding and
    /// [`SubmitError::Invalid`] when validation fails; in the latter case the
    /// error map is replaced wholesale with the validator's output.
    pub fn begin_submit(&mut self) -> Result<D::Payload, SubmitError> {
        self.begin_submit_with(ErrorMap::new())
    }

    /// Like [`begin_submit`](Self::begin_submit), with `rejected` holding
    /// errors found outside the draft, such as a selection missing from its
    /// pick list. The validator's message wins when both flag a field.
    ///
    /// # Errors
    ///
    /// As [`begin_submit`](Self::begin_submit); any entry in `rejected`
    /// makes the submission invalid.
    pub fn begin_submit_with(&mut self, rejected: ErrorMap) -> Result<D::Payload, SubmitError> {
        if self.status == FormStatus::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.status = FormStatus::Validating;

        let parsed = match self.draft.parse() {
            Ok(payload) => rejected.into_result(|| payload),
            Err(mut errors) => {
                for (field, message) in rejected {
                    errors.insert_first(field, message);
                }

                Err(errors)
            }
        };

        match parsed {
            Ok(payload) => {
                self.status = FormStatus::Submitting;

                Ok(payload)
            }
            Err(errors) => {
                let count = errors.len();

                self.errors = errors;
                self.status = FormStatus::Ready;

                Err(SubmitError::Invalid(count))
            }
        }
    }

    /// The backend accepted the submission; the draft is kept for more edits.
    pub fn submit_succeeded(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Success(message.into()));
        self.errors.clear();
        self.status = FormStatus::Succeeded;
    }

    /// The submission failed; field errors are left as they are.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Failure(message.into()));
        self.status = FormStatus::Failed;
    }

    /// The submission failed for reasons tied to specific fields.
    pub fn submit_rejected(&mut self, errors: impl IntoIterator<Item = (&'static str, String)>) {
        self.notice = None;

        for (field, message) in errors {
            self.errors.insert(field, message);
        }

        self.status = FormStatus::Failed;
    }

    /// The submission never settled (the form was closed mid-flight).
    pub fn submit_abandoned(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Ready;
        }
    }

    /// Applies a remote check result if the field still holds the checked value.
    ///
    /// Returns `false` when the result was stale and therefore discarded.
    pub fn apply_check(&mut self, outcome: &CheckOutcome<D::Field>) -> bool {
        if self.draft.value(outcome.field).trim() != outcome.value {
            return false;
        }

        match outcome.verdict {
            Some(message) => self.errors.insert(outcome.field.key(), message),
            None => {
                self.errors.remove(outcome.field.key());
            }
        }

        true
    }
}

impl<D: Draft + Default> FormState<D> {
    /// The backend accepted the submission; the draft returns to empty.
    pub fn submit_succeeded_and_reset(&mut self, message: impl Into<String>) {
        self.submit_succeeded(message);
        self.draft = D::default();
    }
}
