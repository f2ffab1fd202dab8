//! Login, logout and registration.

use std::io;

use clap::Args;
use inventrak_app::{
    context::AppContext,
    domain::customers::{LoginField, LoginOutcome, RegistrationField},
};

use crate::{
    cli::{errors::CliError, forms},
    render,
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// User name
    #[arg(long)]
    username: String,

    /// Password
    #[arg(long, env = "INVENTRAK_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// User name
    #[arg(long)]
    user_name: Option<String>,

    /// Password
    #[arg(long, env = "INVENTRAK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Password again
    #[arg(long)]
    confirm_password: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// State
    #[arg(long)]
    state: Option<String>,

    /// Country
    #[arg(long)]
    country: Option<String>,
}

impl RegisterArgs {
    fn values(self) -> [(RegistrationField, Option<String>); 7] {
        [
            (RegistrationField::UserName, self.user_name),
            (RegistrationField::UserPassword, self.password),
            (RegistrationField::ConfirmPassword, self.confirm_password),
            (RegistrationField::Email, self.email),
            (RegistrationField::CityName, self.city),
            (RegistrationField::StateName, self.state),
            (RegistrationField::CountryName, self.country),
        ]
    }
}

pub(crate) async fn login(
    args: LoginArgs,
    context: &mut AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut form = context.login_form();

    form.set_field(LoginField::Username, args.username);
    form.set_field(LoginField::Password, args.password);

    let submitted = form.submit().await;
    let authenticated = match &submitted {
        Ok(LoginOutcome::Authenticated { username }) => Some(username.clone()),
        Ok(LoginOutcome::Rejected) | Err(_) => None,
    };

    forms::finish(form.form().state(), submitted.map(drop), out)?;

    if let Some(username) = authenticated {
        context.session.authenticate(username)?;
    }

    Ok(())
}

pub(crate) fn logout(context: &mut AppContext, out: &mut impl io::Write) -> Result<(), CliError> {
    context.session.invalidate()?;

    render::line(out, "Logged out")?;

    Ok(())
}

pub(crate) fn whoami(context: &AppContext, out: &mut impl io::Write) -> Result<(), CliError> {
    match context.session.username() {
        Some(username) => render::line(out, &format!("Logged in as {username}"))?,
        None => render::line(out, "Not logged in")?,
    }

    Ok(())
}

pub(crate) async fn register(
    args: RegisterArgs,
    context: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut form = context.register_form();

    let provided = forms::fill(form.form_mut(), args.values());

    forms::check(form.form_mut(), &provided, out).await?;

    let submitted = form.submit().await;

    forms::finish(form.form().state(), submitted, out)
}
