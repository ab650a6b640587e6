//! Project overrun risk dashboard.
//!
//! Submits project parameters to the prediction service, keeps the submitted
//! baseline next to its result, and derives chart-ready data from it.

pub mod app;
pub mod charts;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod scenario;
pub mod services;
pub mod transform;

pub use app::{Dashboard, DashboardState, Status, Submission};
pub use error::{PredictionError, ValidationError};
