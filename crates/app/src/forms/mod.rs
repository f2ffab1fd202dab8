//! Form state, checks and lifetimes shared by every entity form.

pub mod checks;
mod entity;
mod errors;
mod lifetime;
mod state;

pub use checks::{CheckField, CheckKind, CheckOutcome, PendingCheck};
pub use entity::EntityForm;
pub use errors::{ErrorMap, SubmitError};
pub use lifetime::{FormLifetime, LifetimeToken};
pub use state::*;
