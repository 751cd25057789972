//! Dynamic expiry projection.
//!
//! Projects the number of days until potency reaches the profile threshold,
//! assuming the shipment reverts to ideal reference-temperature storage from
//! the evaluation point onward. This answers "how much longer can this
//! survive under best-case handling", not "when will it expire under
//! continued current abuse". A modeling assumption confirmed with domain
//! owners; it differs materially from projecting at the last observed
//! temperature.

use crate::kinetics::rate_constant;
use crate::types::{ExpiryProjection, KineticProfile};
use crate::{Error, Result};
use chrono::{Duration, NaiveDate};

/// Project the dynamic expiry date from current potency.
///
/// Returns zero days remaining when potency is already at or below the
/// threshold. Degenerate numerics (non-positive reference rate constant,
/// non-finite hours, calendar overflow) surface as errors rather than
/// NaN or infinity in the projection.
pub fn project_expiry(
    current_potency_percent: f64,
    profile: &KineticProfile,
    evaluation_date: NaiveDate,
) -> Result<ExpiryProjection> {
    let k_ref = rate_constant(profile.reference_temp_celsius(), profile);
    if !k_ref.is_finite() || k_ref <= 0.0 {
        // Physically k_ref > 0 for any realistic profile; reaching this
        // means the registered constants are unusable.
        return Err(Error::InvalidProfile(format!(
            "reference rate constant {} hr⁻¹ for '{}' is not positive",
            k_ref, profile.label
        )));
    }

    let threshold = profile.potency_threshold_percent;
    if current_potency_percent <= threshold {
        tracing::info!(
            potency = current_potency_percent,
            threshold,
            "potency already at or below threshold, no forward projection"
        );
        return Ok(ExpiryProjection {
            days_remaining: 0,
            projected_expiry_date: evaluation_date,
        });
    }

    // budget_ratio in (0, 1): how far potency can still fall
    let budget_ratio = threshold / current_potency_percent;
    let hours_remaining = -budget_ratio.ln() / k_ref;
    if !hours_remaining.is_finite() {
        return Err(Error::Indeterminate(format!(
            "non-finite projection horizon (potency {}%, threshold {}%, k_ref {})",
            current_potency_percent, threshold, k_ref
        )));
    }

    let days_remaining = (hours_remaining / 24.0).floor() as i64;
    let projected_expiry_date = Duration::try_days(days_remaining)
        .and_then(|span| evaluation_date.checked_add_signed(span))
        .ok_or_else(|| {
            Error::Indeterminate(format!(
                "projection of {} days overflows the calendar",
                days_remaining
            ))
        })?;

    Ok(ExpiryProjection {
        days_remaining,
        projected_expiry_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::build_default_registry;
    use crate::types::ProductType;

    fn profile(pt: ProductType) -> KineticProfile {
        build_default_registry().get(pt).unwrap().clone()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_at_threshold_returns_zero_days() {
        let profile = profile(ProductType::MrnaVaccine);
        let today = date(2026, 8, 23);

        let projection = project_expiry(90.0, &profile, today).unwrap();
        assert_eq!(projection.days_remaining, 0);
        assert_eq!(projection.projected_expiry_date, today);
    }

    #[test]
    fn test_below_threshold_returns_zero_days() {
        let profile = profile(ProductType::Insulin);
        let today = date(2026, 1, 15);

        let projection = project_expiry(80.0, &profile, today).unwrap();
        assert_eq!(projection.days_remaining, 0);
        assert_eq!(projection.projected_expiry_date, today);
    }

    #[test]
    fn test_projection_matches_closed_form() {
        let profile = profile(ProductType::MrnaVaccine);
        let today = date(2026, 8, 23);
        let potency = 99.0;

        let k_ref = crate::kinetics::rate_constant(profile.reference_temp_celsius(), &profile);
        let expected_hours = -(90.0_f64 / potency).ln() / k_ref;
        let expected_days = (expected_hours / 24.0).floor() as i64;

        let projection = project_expiry(potency, &profile, today).unwrap();
        assert_eq!(projection.days_remaining, expected_days);
        assert_eq!(
            projection.projected_expiry_date,
            today + Duration::days(expected_days)
        );
    }

    #[test]
    fn test_more_potency_means_more_days() {
        let profile = profile(ProductType::Biologic);
        let today = date(2026, 8, 23);

        let near = project_expiry(92.5, &profile, today).unwrap();
        let far = project_expiry(99.5, &profile, today).unwrap();
        assert!(far.days_remaining > near.days_remaining);
        assert!(near.days_remaining >= 0);
    }

    #[test]
    fn test_non_positive_reference_rate_is_invalid_profile() {
        let mut profile = profile(ProductType::Insulin);
        // Zero frequency factor forces k_ref = 0
        profile.pre_exponential_factor_per_hour = 0.0;

        assert!(matches!(
            project_expiry(99.0, &profile, date(2026, 8, 23)),
            Err(Error::InvalidProfile(_))
        ));
    }
}
