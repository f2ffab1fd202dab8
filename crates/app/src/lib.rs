//! Inventory management client.
//!
//! A typed client for the inventory backend's REST API, the validators and
//! remote checks behind its forms, and the form controllers a front end
//! drives to create and edit products, orders and customers.

pub mod api;
pub mod context;
pub mod domain;
pub mod forms;
pub mod ids;
pub mod session;

#[cfg(test)]
mod test;
