//! Core types and service wiring for the wattle household utility.

/// In-memory inventory with quantity tracking.
pub mod inventory;
/// Domain models and identifiers shared by all providers.
pub mod model;
/// Traits describing the provider interfaces.
pub mod ports;
/// The bin collection schedule calculator.
pub mod schedule;
/// High-level service facade used by clients.
pub mod service;

pub use inventory::*;
pub use model::*;
pub use ports::*;
pub use schedule::*;
pub use service::*;
