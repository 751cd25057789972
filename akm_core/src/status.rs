//! Shipment status classification.

use crate::types::ShipmentStatus;

/// Margin above the threshold (percentage points) required for a Safe
/// classification
pub const SAFE_MARGIN_PERCENT: f64 = 5.0;

/// Classify a shipment from potency vs. threshold.
///
/// Boundaries are inclusive exactly as follows:
/// - potency >= threshold + 5 → Safe
/// - threshold <= potency < threshold + 5 → Borderline
/// - potency < threshold → Excursion
///
/// Total over real inputs; no error conditions.
pub fn classify(potency_percent: f64, threshold_percent: f64) -> ShipmentStatus {
    if potency_percent >= threshold_percent + SAFE_MARGIN_PERCENT {
        ShipmentStatus::Safe
    } else if potency_percent >= threshold_percent {
        ShipmentStatus::Borderline
    } else {
        ShipmentStatus::Excursion
    }
}
