//! Mean Kinetic Temperature (MKT) reporting.
//!
//! MKT is the single constant temperature that would produce the same
//! cumulative degradation as the observed variable history. It is a
//! reporting statistic only: potency and expiry use the direct per-segment
//! summation in [`crate::degradation`], never this value.

use crate::kinetics::{celsius_to_kelvin, kelvin_to_celsius, GAS_CONSTANT_J_PER_MOL_K};
use crate::types::{ExcursionSegment, KineticProfile};
use crate::{Error, Result};

/// Duration-weighted mean kinetic temperature of an excursion history (°C).
///
/// `MKT_K = (-Ea/R) / ln( Σ exp(-Ea/(R·T_i))·Δt_i / Σ Δt_i )`
///
/// Degenerate numerics (zero total hours, logarithm of a non-positive
/// argument, non-finite intermediate) surface as [`Error::Indeterminate`].
pub fn mean_kinetic_temperature(
    segments: &[ExcursionSegment],
    profile: &KineticProfile,
) -> Result<f64> {
    if segments.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compute MKT over an empty excursion history".into(),
        ));
    }

    let ea = profile.activation_energy_j_per_mol;
    let total_hours: f64 = segments.iter().map(|s| s.duration_hours).sum();
    if total_hours <= 0.0 {
        return Err(Error::Indeterminate(
            "total exposure duration is not positive".into(),
        ));
    }

    let numerator: f64 = segments
        .iter()
        .map(|s| {
            let t = celsius_to_kelvin(s.temperature_celsius);
            (-ea / (GAS_CONSTANT_J_PER_MOL_K * t)).exp() * s.duration_hours
        })
        .sum();

    let ratio = numerator / total_hours;
    if !(ratio > 0.0) {
        return Err(Error::Indeterminate(format!(
            "MKT weighting collapsed to a non-positive ratio ({})",
            ratio
        )));
    }

    let mkt_kelvin = (-ea / GAS_CONSTANT_J_PER_MOL_K) / ratio.ln();
    if !mkt_kelvin.is_finite() {
        return Err(Error::Indeterminate(
            "MKT evaluated to a non-finite temperature".into(),
        ));
    }

    Ok(kelvin_to_celsius(mkt_kelvin))
}
