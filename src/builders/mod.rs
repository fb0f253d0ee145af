//! Builders to construct simulations from configuration.

pub mod simulation_builder;

pub use simulation_builder::{SimulationBuilder, build_datacenters};
