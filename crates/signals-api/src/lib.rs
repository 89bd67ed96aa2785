//! Backend gateway implementations.

mod client;

pub use client::{ApiConfig, RestClient};
