//! Orders

pub mod forms;
pub mod lookups;
pub mod models;
pub mod validation;

pub use forms::{AddOrderForm, UpdateOrderForm};
pub use validation::{OrderDraft, OrderEditDraft, OrderField};
