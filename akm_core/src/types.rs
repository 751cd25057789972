//! Core domain types for the ThermoKinetic AKM engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Product types and their kinetic profiles
//! - Temperature excursion segments
//! - Derived results (degradation, expiry projection, status)
//! - Engine request/report shapes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Bounds
// ============================================================================

/// Coldest accepted excursion temperature (°C)
pub const MIN_TEMPERATURE_CELSIUS: f64 = -80.0;
/// Hottest accepted excursion temperature (°C)
pub const MAX_TEMPERATURE_CELSIUS: f64 = 60.0;
/// Longest accepted single segment (hours)
pub const MAX_DURATION_HOURS: f64 = 720.0;
/// Most excursion segments accepted per evaluation
pub const MAX_SEGMENTS: usize = 50;

// ============================================================================
// Product Types and Kinetic Profiles
// ============================================================================

/// Supported pharmaceutical product types
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    MrnaVaccine,
    Biologic,
    Insulin,
}

impl ProductType {
    /// Stable string key for this product type (matches the serde casing)
    pub fn key(&self) -> &'static str {
        match self {
            ProductType::MrnaVaccine => "mrna_vaccine",
            ProductType::Biologic => "biologic",
            ProductType::Insulin => "insulin",
        }
    }

    /// Parse a product key as accepted on the wire / CLI
    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "mrna_vaccine" => Some(ProductType::MrnaVaccine),
            "biologic" => Some(ProductType::Biologic),
            "insulin" => Some(ProductType::Insulin),
            _ => None,
        }
    }

    /// All known product types, in registry display order
    pub fn all() -> &'static [ProductType] {
        &[
            ProductType::MrnaVaccine,
            ProductType::Biologic,
            ProductType::Insulin,
        ]
    }
}

/// Per-product physical constants for first-order Arrhenius degradation.
///
/// Invariants (enforced by [`crate::registry::Registry::validate`]):
/// Ea > 0, A > 0, reference temperature > 0 K, 0 < threshold < 100.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KineticProfile {
    /// Display name
    pub label: String,
    /// Activation energy Ea (J/mol)
    pub activation_energy_j_per_mol: f64,
    /// Pre-exponential / frequency factor A (hr⁻¹)
    pub pre_exponential_factor_per_hour: f64,
    /// Nominal storage temperature (Kelvin)
    pub reference_temp_kelvin: f64,
    /// Minimum viable potency (%), below which the product is unusable
    pub potency_threshold_percent: f64,
    /// Baseline shelf life at reference temperature (days, informational)
    pub nominal_shelf_life_days: u32,
}

impl KineticProfile {
    /// Reference storage temperature expressed in Celsius
    pub fn reference_temp_celsius(&self) -> f64 {
        crate::kinetics::kelvin_to_celsius(self.reference_temp_kelvin)
    }
}

// ============================================================================
// Excursion History
// ============================================================================

/// One temperature exposure interval of a shipment's thermal history.
///
/// Segment order carries no meaning: degradation contributions are additive,
/// so any permutation of the same segments evaluates identically.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExcursionSegment {
    /// Temperature during the interval (°C), bounded to [-80, 60]
    pub temperature_celsius: f64,
    /// Interval length (hours), bounded to (0, 720]
    pub duration_hours: f64,
}

// ============================================================================
// Derived Results
// ============================================================================

/// Outcome of integrating the Arrhenius rate over an excursion history.
///
/// Recomputed on every evaluation; never persisted as authoritative state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DegradationResult {
    /// Σ k(T_i)·Δt_i across all segments (dimensionless, non-negative)
    pub cumulative_kinetic_exposure: f64,
    /// 100·exp(-exposure), in (0, 100]
    pub potency_remaining_percent: f64,
}

/// Forward projection of remaining usable life under reference storage
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiryProjection {
    /// Whole days until the potency threshold is reached (>= 0)
    pub days_remaining: i64,
    /// Evaluation date plus `days_remaining`
    pub projected_expiry_date: NaiveDate,
}

/// Three-level shipment classification derived from potency vs. threshold
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Safe,
    Borderline,
    Excursion,
}

impl ShipmentStatus {
    /// Machine-readable status code
    pub fn code(&self) -> &'static str {
        match self {
            ShipmentStatus::Safe => "SAFE",
            ShipmentStatus::Borderline => "BORDERLINE",
            ShipmentStatus::Excursion => "EXCURSION",
        }
    }

    /// Human-readable handling instruction
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Safe => "Cleared for use",
            ShipmentStatus::Borderline => "Monitor closely",
            ShipmentStatus::Excursion => "Do not use — potency below threshold",
        }
    }

    /// Display color hint for dashboards
    pub fn color_hint(&self) -> &'static str {
        match self {
            ShipmentStatus::Safe => "#00FF9C",
            ShipmentStatus::Borderline => "#FFD166",
            ShipmentStatus::Excursion => "#FF6B35",
        }
    }

    /// Flatten into the report-facing summary shape
    pub fn summary(&self) -> StatusSummary {
        StatusSummary {
            code: self.code().to_string(),
            label: self.label().to_string(),
            color_hint: self.color_hint().to_string(),
        }
    }
}

/// Status as it appears in an [`EvaluationReport`]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSummary {
    pub code: String,
    pub label: String,
    pub color_hint: String,
}

// ============================================================================
// Engine Request / Report
// ============================================================================

/// One shipment evaluation request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub product_type: ProductType,
    pub excursions: Vec<ExcursionSegment>,
    /// Opaque caller-supplied correlation token; generated when absent
    #[serde(default)]
    pub shipment_correlation_id: Option<String>,
}

impl EvaluationRequest {
    /// Parse a request from its JSON wire form
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Full evaluation report for one shipment.
///
/// All numeric fields are finite; degenerate computations surface as
/// [`crate::Error::Indeterminate`] instead of NaN or infinity here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub shipment_correlation_id: String,
    pub product_label: String,
    pub potency_threshold_percent: f64,
    pub nominal_shelf_life_days: u32,
    /// Rounded to 2 decimal places
    pub potency_remaining_percent: f64,
    pub projected_expiry_date: NaiveDate,
    pub days_remaining: i64,
    /// Rounded to 2 decimal places
    pub mean_kinetic_temperature_celsius: f64,
    /// Rounded to 2 decimal places
    pub total_exposure_hours: f64,
    /// Scientific notation, 4 significant digits
    pub cumulative_kinetic_exposure_index: String,
    pub status: StatusSummary,
    pub excursion_segments: usize,
}
