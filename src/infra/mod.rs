//! Infrastructure adapters: render surfaces and telemetry bootstrap.

pub mod error;
pub mod surface;
pub mod telemetry;
