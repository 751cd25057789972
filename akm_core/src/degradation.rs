//! First-order degradation accumulator.
//!
//! Integrates the Arrhenius rate constant across a shipment's discrete
//! temperature segments and converts the cumulative kinetic exposure into
//! potency remaining: `C(t) = C0 · exp(-Σ k(T_i)·Δt_i)` with C0 = 100%.

use crate::kinetics::rate_constant;
use crate::types::{
    DegradationResult, ExcursionSegment, KineticProfile, MAX_DURATION_HOURS, MAX_SEGMENTS,
    MAX_TEMPERATURE_CELSIUS, MIN_TEMPERATURE_CELSIUS,
};
use crate::{Error, Result};

/// Validate an excursion history against the accepted input bounds.
///
/// Segment count must be in [1, 50], each temperature in [-80, 60] °C and
/// each duration in (0, 720] hours. The request layer rejects out-of-bounds
/// input before the engine runs; this is the engine's defensive check.
pub fn validate_segments(segments: &[ExcursionSegment]) -> Result<()> {
    if segments.is_empty() {
        return Err(Error::InvalidInput(
            "excursion history must contain at least 1 segment".into(),
        ));
    }
    if segments.len() > MAX_SEGMENTS {
        return Err(Error::InvalidInput(format!(
            "excursion history has {} segments, maximum is {}",
            segments.len(),
            MAX_SEGMENTS
        )));
    }

    for (i, seg) in segments.iter().enumerate() {
        if !seg.temperature_celsius.is_finite()
            || seg.temperature_celsius < MIN_TEMPERATURE_CELSIUS
            || seg.temperature_celsius > MAX_TEMPERATURE_CELSIUS
        {
            return Err(Error::InvalidInput(format!(
                "segment {}: temperature {} °C outside [{}, {}]",
                i, seg.temperature_celsius, MIN_TEMPERATURE_CELSIUS, MAX_TEMPERATURE_CELSIUS
            )));
        }
        if !seg.duration_hours.is_finite()
            || seg.duration_hours <= 0.0
            || seg.duration_hours > MAX_DURATION_HOURS
        {
            return Err(Error::InvalidInput(format!(
                "segment {}: duration {} hours outside (0, {}]",
                i, seg.duration_hours, MAX_DURATION_HOURS
            )));
        }
    }

    Ok(())
}

/// Accumulate kinetic exposure across an excursion history and derive
/// potency remaining.
///
/// Contributions are additive, so segment order never affects the result.
/// Pure and idempotent: identical inputs produce bit-identical output.
pub fn degrade(
    segments: &[ExcursionSegment],
    profile: &KineticProfile,
) -> Result<DegradationResult> {
    if segments.is_empty() {
        return Err(Error::InvalidInput(
            "cannot accumulate degradation over an empty excursion history".into(),
        ));
    }

    let cumulative_kinetic_exposure: f64 = segments
        .iter()
        .map(|seg| rate_constant(seg.temperature_celsius, profile) * seg.duration_hours)
        .sum();

    let potency_remaining_percent = 100.0 * (-cumulative_kinetic_exposure).exp();

    tracing::debug!(
        exposure = cumulative_kinetic_exposure,
        potency = potency_remaining_percent,
        segments = segments.len(),
        "accumulated kinetic exposure"
    );

    Ok(DegradationResult {
        cumulative_kinetic_exposure,
        potency_remaining_percent,
    })
}
