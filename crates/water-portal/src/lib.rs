//! Rules and mock backends behind the citizen pages of the municipal water portal.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
