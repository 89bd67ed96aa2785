//! Wire and domain types for the signals client.

mod billing;
mod signal;
mod user;

pub use billing::{BillingStatus, Checkout};
pub use signal::{Action, Signal, SignalsPage};
pub use user::{AuthResponse, User};
