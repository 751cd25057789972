//! Evaluation engine: one shipment in, one report out.
//!
//! Wires the kinetic pipeline together: bounds validation → profile lookup
//! → degradation accumulation → expiry projection → status classification →
//! MKT reporting. Entirely synchronous and stateless; every evaluation is a
//! pure function of (profile, excursions, evaluation date) and independent
//! evaluations need no coordination.

use crate::degradation::{degrade, validate_segments};
use crate::expiry::project_expiry;
use crate::mkt::mean_kinetic_temperature;
use crate::registry::Registry;
use crate::status::classify;
use crate::types::{EvaluationReport, EvaluationRequest};
use crate::{Error, Result};
use chrono::NaiveDate;

/// Generate a shipment correlation ID for requests that omit one.
///
/// Format: `TK-` followed by the first 8 hex characters of a v4 UUID,
/// uppercased.
pub fn generate_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("TK-{}", uuid[..8].to_uppercase())
}

/// Evaluate one shipment's thermal history against its kinetic profile.
///
/// The evaluation date is injected by the caller so the engine stays pure
/// and test runs stay deterministic. Input bounds are re-checked here even
/// though the request layer validates first.
pub fn evaluate(
    registry: &Registry,
    request: &EvaluationRequest,
    evaluation_date: NaiveDate,
) -> Result<EvaluationReport> {
    validate_segments(&request.excursions)?;

    let profile = registry.get(request.product_type).ok_or_else(|| {
        Error::InvalidInput(format!(
            "no kinetic profile registered for product type '{}'",
            request.product_type.key()
        ))
    })?;

    let correlation_id = request
        .shipment_correlation_id
        .clone()
        .unwrap_or_else(generate_correlation_id);

    tracing::info!(
        shipment = %correlation_id,
        product = request.product_type.key(),
        segments = request.excursions.len(),
        "evaluating shipment"
    );

    let degradation = degrade(&request.excursions, profile)?;
    let projection = project_expiry(
        degradation.potency_remaining_percent,
        profile,
        evaluation_date,
    )?;
    let status = classify(
        degradation.potency_remaining_percent,
        profile.potency_threshold_percent,
    );
    let mkt_celsius = mean_kinetic_temperature(&request.excursions, profile)?;
    let total_exposure_hours: f64 = request.excursions.iter().map(|s| s.duration_hours).sum();

    tracing::info!(
        shipment = %correlation_id,
        potency = degradation.potency_remaining_percent,
        days_remaining = projection.days_remaining,
        status = status.code(),
        "evaluation complete"
    );

    Ok(EvaluationReport {
        shipment_correlation_id: correlation_id,
        product_label: profile.label.clone(),
        potency_threshold_percent: profile.potency_threshold_percent,
        nominal_shelf_life_days: profile.nominal_shelf_life_days,
        potency_remaining_percent: round2(degradation.potency_remaining_percent),
        projected_expiry_date: projection.projected_expiry_date,
        days_remaining: projection.days_remaining,
        mean_kinetic_temperature_celsius: round2(mkt_celsius),
        total_exposure_hours: round2(total_exposure_hours),
        cumulative_kinetic_exposure_index: format_exposure_index(
            degradation.cumulative_kinetic_exposure,
        ),
        status: status.summary(),
        excursion_segments: request.excursions.len(),
    })
}

/// Round to 2 decimal places for report fields
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scientific notation with 4 significant digits, e.g. `2.914e-4`
fn format_exposure_index(exposure: f64) -> String {
    format!("{:.3e}", exposure)
}
