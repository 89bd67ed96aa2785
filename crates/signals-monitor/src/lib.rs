//! Terminal dashboard and logging setup.

mod dashboard;
mod logging;

pub use dashboard::{Dashboard, DashboardState};
pub use logging::setup_logging;
