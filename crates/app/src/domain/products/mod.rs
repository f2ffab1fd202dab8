//! Products

pub mod forms;
pub mod lookups;
pub mod models;
pub mod validation;

pub use forms::{AddProductForm, ReferenceData, UpdateProductForm};
pub use validation::{ProductDraft, ProductEditDraft, ProductField};
