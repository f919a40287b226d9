//! Domain layer - Pure data models for the calculator.
//!
//! This module contains the static service catalog and the per-session
//! selection state. These types have no I/O dependencies and can be tested
//! in isolation.

mod catalog;
mod selection;

// Re-export all domain types
pub use catalog::{find_service, services_in_category, Service, ServiceCategory, SERVICE_CATALOG};
pub use selection::{
    BusinessSize, CalculatorSelection, CompetitionLevel, DURATION_RANGE, GEOGRAPHY_RANGE,
};
