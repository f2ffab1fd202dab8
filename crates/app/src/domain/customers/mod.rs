//! Customers and sign-in

pub mod forms;
pub mod models;
pub mod validation;

pub use forms::{LoginForm, LoginOutcome, RegisterForm};
pub use validation::{LoginDraft, LoginField, RegistrationDraft, RegistrationField};
