//! Citizen services: billing, property directory, tracking, grievances, connection
//! applications, meter readings, and the landing-page assistant.

pub mod applications;
pub mod assistant;
pub mod billing;
pub mod directory;
pub mod grievances;
pub mod readings;
pub mod simulation;
pub mod tracking;
pub mod uploads;

#[cfg(test)]
pub(crate) mod test_support;
