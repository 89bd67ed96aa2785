//! Core types and traits for the signals client.
//!
//! This crate provides the foundational building blocks including:
//! - Wire types for the backend REST contract (Signal, SignalsPage, User)
//! - Billing and checkout types
//! - The Gateway trait implemented by backend clients
//! - Error types shared across the workspace

pub mod types;
pub mod traits;
pub mod error;

pub use error::{ApiError, ClientError, ClientResult, SessionError};
pub use types::*;
pub use traits::*;
