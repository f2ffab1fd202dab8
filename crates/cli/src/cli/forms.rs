//! Driving entity forms from command line flags.

use std::io;

use inventrak_app::forms::{Draft, EntityForm, FormField, FormState, SubmitError};

use crate::{
    cli::errors::CliError,
    render::{self, RenderError},
};

/// Copies every provided flag into the form and returns the fields that were set.
pub(super) fn fill<D: Draft>(
    form: &mut EntityForm<D>,
    values: impl IntoIterator<Item = (D::Field, Option<String>)>,
) -> Vec<D::Field> {
    values
        .into_iter()
        .filter_map(|(field, value)| {
            form.set_field(field, value?);

            Some(field)
        })
        .collect()
}

/// Runs the remote check of each provided field.
///
/// Check failures are advisory: they are printed as warnings and the backend
/// has the final say on submit.
pub(super) async fn check<D: Draft>(
    form: &mut EntityForm<D>,
    fields: &[D::Field],
    out: &mut impl io::Write,
) -> Result<(), RenderError> {
    for &field in fields {
        if field.check().is_none() {
            continue;
        }

        form.blur(field).await;

        if let Some(message) = form.state().errors().get(field.key()) {
            render::warning(out, field.key(), message)?;
        }
    }

    Ok(())
}

/// Prints the outcome of a submission and turns a refusal into an error.
pub(super) fn finish<D: Draft>(
    state: &FormState<D>,
    submitted: Result<(), SubmitError>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    if let Err(error) = submitted {
        render::field_errors(out, state.errors())?;

        return Err(error.into());
    }

    match state.notice() {
        Some(notice) if notice.is_success() => {
            render::notice(out, notice)?;

            Ok(())
        }
        Some(notice) => {
            render::field_errors(out, state.errors())?;

            Err(CliError::Rejected(notice.message().to_string()))
        }
        None => {
            render::field_errors(out, state.errors())?;

            Err(CliError::Rejected("submission was rejected".to_string()))
        }
    }
}
