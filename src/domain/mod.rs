//! Domain types shared by the client, the transforms and the dashboard state.
//!
//! Field names on the wire follow the prediction service's camelCase schema.

pub mod prediction;
pub mod project;

pub use prediction::*;
pub use project::*;
