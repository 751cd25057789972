//! Arrhenius rate kinetics primitives.
//!
//! `k(T) = A · exp(-Ea / (R · T))` is the rate constant that drives every
//! higher-level computation in the engine. Total and side-effect free over
//! the bounded temperature domain.

use crate::types::KineticProfile;

/// Universal gas constant R (J/mol·K). Fixed, not configurable.
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314;

/// Convert Celsius to absolute temperature (Kelvin)
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

/// Convert absolute temperature (Kelvin) to Celsius
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Arrhenius rate constant at a given temperature for a given profile.
///
/// Returns `k` in hours⁻¹: strictly positive for finite inputs and strictly
/// increasing in temperature (higher T shrinks the magnitude of the negative
/// exponent).
pub fn rate_constant(temp_celsius: f64, profile: &KineticProfile) -> f64 {
    let t = celsius_to_kelvin(temp_celsius);
    profile.pre_exponential_factor_per_hour
        * (-profile.activation_energy_j_per_mol / (GAS_CONSTANT_J_PER_MOL_K * t)).exp()
}
