#![forbid(unsafe_code)]

//! Kinetic degradation and dynamic expiry engine for the ThermoKinetic
//! cold-chain system.
//!
//! Models pharmaceutical potency decay under variable temperature exposure
//! using first-order Arrhenius kinetics, and derives a dynamically adjusted
//! expiry date from the observed thermal history instead of a fixed
//! shelf-life clock.
//!
//! This crate provides:
//! - Domain types (kinetic profiles, excursion segments, reports)
//! - The kinetic profile registry
//! - Arrhenius rate kinetics and the degradation accumulator
//! - Dynamic expiry projection and status classification
//! - Mean kinetic temperature reporting
//!
//! Everything is synchronous, stateless and side-effect free: each
//! evaluation is a pure function of its inputs and arbitrarily many
//! evaluations may run concurrently without coordination.

pub mod types;
pub mod error;
pub mod kinetics;
pub mod registry;
pub mod config;
pub mod logging;
pub mod degradation;
pub mod expiry;
pub mod status;
pub mod mkt;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use registry::{build_default_registry, get_default_registry, Registry};
pub use kinetics::{rate_constant, GAS_CONSTANT_J_PER_MOL_K};
pub use degradation::{degrade, validate_segments};
pub use expiry::project_expiry;
pub use status::classify;
pub use mkt::mean_kinetic_temperature;
pub use engine::{evaluate, generate_correlation_id};
