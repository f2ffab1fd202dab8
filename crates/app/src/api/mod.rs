//! Remote inventory API

pub mod endpoints;
mod errors;
mod http;
mod service;

pub use errors::ApiError;
pub use http::{ApiConfig, DEFAULT_BASE_URL, HttpInventoryApi};
pub use service::*;
