//! Inventory domain concerns

pub mod customers;
pub mod dates;
pub mod lookup;
pub mod orders;
pub mod products;
pub mod reports;
pub mod rules;
